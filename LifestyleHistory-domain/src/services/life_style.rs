use async_trait::async_trait;
use tracing::{debug, error};

use lifestyle_history_data::database::DatabasePool;
use lifestyle_history_data::models::LifeStyleRecord;
use lifestyle_history_data::repository::{CrudRepository, RepositoryError, SqliteLifeStyleRepository};

use crate::entities::conversions;
use crate::entities::LifeStyle;
use crate::services::errors::ServiceError;

/// Trait for lifestyle service operations
#[async_trait]
pub trait LifeStyleServiceTrait {
    /// Get all lifestyle records
    async fn get_all_life_styles(&self) -> Result<Vec<LifeStyle>, ServiceError>;

    /// Get a lifestyle record by its identifier
    async fn get_life_style_by_id(&self, l_id: i64) -> Result<LifeStyle, ServiceError>;

    /// Store a new lifestyle record under a server-assigned identifier
    async fn create_life_style(&self, life_style: LifeStyle) -> Result<LifeStyle, ServiceError>;

    /// Replace an existing lifestyle record
    async fn update_life_style(&self, l_id: i64, life_style: LifeStyle) -> Result<LifeStyle, ServiceError>;

    /// Delete a lifestyle record
    async fn delete_life_style(&self, l_id: i64) -> Result<(), ServiceError>;
}

/// Lifestyle service for domain logic
pub struct LifeStyleService<R: CrudRepository<LifeStyleRecord>> {
    repository: R,
}

impl<R: CrudRepository<LifeStyleRecord>> LifeStyleService<R> {
    /// Create a new lifestyle service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> ServiceError {
        error!("Lifestyle repository failure: {}", err);
        ServiceError::from(err)
    }

    fn not_found(l_id: i64) -> ServiceError {
        ServiceError::RecordNotFound(format!("LifeStyle not found with lID: {}", l_id))
    }

    async fn ensure_exists(&self, l_id: i64) -> Result<(), ServiceError> {
        let exists = self.repository.exists_by_id(l_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        if exists {
            Ok(())
        } else {
            Err(Self::not_found(l_id))
        }
    }
}

#[async_trait]
impl<R: CrudRepository<LifeStyleRecord>> LifeStyleServiceTrait for LifeStyleService<R> {
    async fn get_all_life_styles(&self) -> Result<Vec<LifeStyle>, ServiceError> {
        let records = self.repository.find_all()
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Found {} lifestyle record(s)", records.len());
        Ok(records.into_iter().map(conversions::convert_to_domain_life_style).collect())
    }

    async fn get_life_style_by_id(&self, l_id: i64) -> Result<LifeStyle, ServiceError> {
        let record = self.repository.find_by_id(l_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| Self::not_found(l_id))?;

        Ok(conversions::convert_to_domain_life_style(record))
    }

    async fn create_life_style(&self, mut life_style: LifeStyle) -> Result<LifeStyle, ServiceError> {
        // Identifiers are always chosen by the store
        life_style.l_id = None;

        let saved = self.repository.save(conversions::convert_to_data_life_style(life_style))
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Created lifestyle record {:?}", saved.l_id);
        Ok(conversions::convert_to_domain_life_style(saved))
    }

    async fn update_life_style(&self, l_id: i64, mut life_style: LifeStyle) -> Result<LifeStyle, ServiceError> {
        life_style.l_id = Some(l_id);
        let updated = self.repository.update(conversions::convert_to_data_life_style(life_style))
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| Self::not_found(l_id))?;

        debug!("Replaced lifestyle record {}", l_id);
        Ok(conversions::convert_to_domain_life_style(updated))
    }

    async fn delete_life_style(&self, l_id: i64) -> Result<(), ServiceError> {
        self.ensure_exists(l_id).await?;

        self.repository.delete_by_id(l_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Deleted lifestyle record {}", l_id);
        Ok(())
    }
}

/// Create a lifestyle service backed by the SQLite repository
pub fn create_default_life_style_service(pool: DatabasePool) -> impl LifeStyleServiceTrait + Send + Sync {
    LifeStyleService::new(SqliteLifeStyleRepository::new(pool))
}
