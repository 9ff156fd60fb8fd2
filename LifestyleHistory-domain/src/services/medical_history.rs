use async_trait::async_trait;
use tracing::{debug, error};

use lifestyle_history_data::database::DatabasePool;
use lifestyle_history_data::repository::{
    MedicalHistoryRepositoryTrait, RepositoryError, SqliteMedicalHistoryRepository,
};

use crate::entities::conversions;
use crate::entities::MedicalHistory;
use crate::services::errors::ServiceError;

/// Trait for medical history service operations
#[async_trait]
pub trait MedicalHistoryServiceTrait {
    /// Get all medical history records
    async fn get_all_medical_histories(&self) -> Result<Vec<MedicalHistory>, ServiceError>;

    /// Get a medical history record by its identifier
    async fn get_medical_history_by_record_id(&self, record_id: i64) -> Result<MedicalHistory, ServiceError>;

    /// Store a new medical history record under a server-assigned identifier
    async fn create_medical_history(&self, history: MedicalHistory) -> Result<MedicalHistory, ServiceError>;

    /// Overwrite the clinical fields of an existing record.
    ///
    /// Identifier, patient and user are kept from the stored record.
    async fn update_medical_history(
        &self,
        record_id: i64,
        history: MedicalHistory,
    ) -> Result<MedicalHistory, ServiceError>;

    /// Delete a medical history record by its identifier
    async fn delete_medical_history_by_record_id(&self, record_id: i64) -> Result<(), ServiceError>;

    /// Delete every record belonging to a (patient, user) pair
    async fn delete_medical_history_by_patient_id_and_user_id(
        &self,
        patient_id: i64,
        user_id: i64,
    ) -> Result<(), ServiceError>;
}

/// Medical history service for domain logic
pub struct MedicalHistoryService<R: MedicalHistoryRepositoryTrait> {
    repository: R,
}

impl<R: MedicalHistoryRepositoryTrait> MedicalHistoryService<R> {
    /// Create a new medical history service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> ServiceError {
        error!("Medical history repository failure: {}", err);
        ServiceError::from(err)
    }
}

#[async_trait]
impl<R: MedicalHistoryRepositoryTrait> MedicalHistoryServiceTrait for MedicalHistoryService<R> {
    async fn get_all_medical_histories(&self) -> Result<Vec<MedicalHistory>, ServiceError> {
        let records = self.repository.find_all()
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Found {} medical history record(s)", records.len());
        Ok(records.into_iter().map(conversions::convert_to_domain_medical_history).collect())
    }

    async fn get_medical_history_by_record_id(&self, record_id: i64) -> Result<MedicalHistory, ServiceError> {
        let record = self.repository.find_by_id(record_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| ServiceError::RecordNotFound(
                format!("Medical history not found with recordId: {}", record_id)
            ))?;

        Ok(conversions::convert_to_domain_medical_history(record))
    }

    async fn create_medical_history(&self, mut history: MedicalHistory) -> Result<MedicalHistory, ServiceError> {
        history.record_id = None;

        let saved = self.repository.save(conversions::convert_to_data_medical_history(history))
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Created medical history record {:?}", saved.record_id);
        Ok(conversions::convert_to_domain_medical_history(saved))
    }

    async fn update_medical_history(
        &self,
        record_id: i64,
        history: MedicalHistory,
    ) -> Result<MedicalHistory, ServiceError> {
        let mut existing = self.get_medical_history_by_record_id(record_id).await?;
        existing.apply_clinical_fields(history);

        let updated = self.repository.update(conversions::convert_to_data_medical_history(existing))
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                ServiceError::RecordNotFound(format!("Medical history not found with recordId: {}", record_id))
            })?;

        debug!("Updated medical history record {}", record_id);
        Ok(conversions::convert_to_domain_medical_history(updated))
    }

    async fn delete_medical_history_by_record_id(&self, record_id: i64) -> Result<(), ServiceError> {
        let exists = self.repository.exists_by_id(record_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;
        if !exists {
            return Err(ServiceError::RecordNotFound(
                format!("MedicalHistory not found with recordId: {}", record_id)
            ));
        }

        self.repository.delete_by_id(record_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!("Deleted medical history record {}", record_id);
        Ok(())
    }

    async fn delete_medical_history_by_patient_id_and_user_id(
        &self,
        patient_id: i64,
        user_id: i64,
    ) -> Result<(), ServiceError> {
        let matches = self.repository.find_by_patient_id_and_user_id(patient_id, user_id)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        if matches.is_empty() {
            return Err(ServiceError::RecordNotFound(format!(
                "MedicalHistory not found with patientId: {} and userId: {}",
                patient_id, user_id
            )));
        }

        let deleted = self.repository.delete_all(&matches)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        debug!(
            "Deleted {} medical history record(s) for patient_id={}, user_id={}",
            deleted, patient_id, user_id
        );
        Ok(())
    }
}

/// Create a medical history service backed by the SQLite repository
pub fn create_default_medical_history_service(
    pool: DatabasePool,
) -> impl MedicalHistoryServiceTrait + Send + Sync {
    MedicalHistoryService::new(SqliteMedicalHistoryRepository::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestyle_history_data::models::MedicalHistoryRecord;
    use lifestyle_history_data::repository::{CrudRepository, InMemoryMedicalHistoryRepository};
    use mockall::mock;

    mock! {
        pub HistoryRepository {}

        #[async_trait]
        impl CrudRepository<MedicalHistoryRecord> for HistoryRepository {
            async fn find_all(&self) -> Result<Vec<MedicalHistoryRecord>, RepositoryError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<MedicalHistoryRecord>, RepositoryError>;
            async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
            async fn save(&self, record: MedicalHistoryRecord) -> Result<MedicalHistoryRecord, RepositoryError>;
            async fn update(&self, record: MedicalHistoryRecord) -> Result<Option<MedicalHistoryRecord>, RepositoryError>;
            async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
            async fn delete_all(&self, records: &[MedicalHistoryRecord]) -> Result<usize, RepositoryError>;
        }

        #[async_trait]
        impl MedicalHistoryRepositoryTrait for HistoryRepository {
            async fn find_by_patient_id_and_user_id(
                &self,
                patient_id: i64,
                user_id: i64,
            ) -> Result<Vec<MedicalHistoryRecord>, RepositoryError>;
        }
    }

    fn history(patient_id: i64, user_id: i64, allergies: &str) -> MedicalHistory {
        MedicalHistory {
            patient_id: Some(patient_id),
            user_id: Some(user_id),
            allergies: Some(allergies.to_string()),
            ..Default::default()
        }
    }

    fn stored(record_id: i64, patient_id: i64, user_id: i64) -> MedicalHistoryRecord {
        MedicalHistoryRecord {
            record_id: Some(record_id),
            patient_id: Some(patient_id),
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    fn in_memory_service() -> MedicalHistoryService<InMemoryMedicalHistoryRepository> {
        MedicalHistoryService::new(InMemoryMedicalHistoryRepository::new())
    }

    #[tokio::test]
    async fn test_update_merges_clinical_fields_only() {
        let service = in_memory_service();
        let created = service.create_medical_history(history(1, 2, "none")).await.unwrap();
        let id = created.record_id.unwrap();

        let changes = MedicalHistory {
            allergies: Some("peanuts".to_string()),
            current_medication: Some("X".to_string()),
            ..Default::default()
        };
        service.update_medical_history(id, changes).await.unwrap();

        let fetched = service.get_medical_history_by_record_id(id).await.unwrap();
        assert_eq!(fetched.record_id, Some(id));
        assert_eq!(fetched.patient_id, Some(1));
        assert_eq!(fetched.user_id, Some(2));
        assert_eq!(fetched.allergies.as_deref(), Some("peanuts"));
        assert_eq!(fetched.current_medication.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let result = in_memory_service().get_medical_history_by_record_id(3).await;

        match result {
            Err(ServiceError::RecordNotFound(msg)) => {
                assert_eq!(msg, "Medical history not found with recordId: 3")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_record_leaves_store_unchanged() {
        let service = in_memory_service();
        service.create_medical_history(history(1, 2, "none")).await.unwrap();

        let result = service.delete_medical_history_by_record_id(999).await;

        match result {
            Err(ServiceError::RecordNotFound(msg)) => {
                assert_eq!(msg, "MedicalHistory not found with recordId: 999")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(service.get_all_medical_histories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_pair_removes_only_matches() {
        let service = in_memory_service();
        service.create_medical_history(history(1, 2, "a")).await.unwrap();
        service.create_medical_history(history(1, 2, "b")).await.unwrap();
        let other = service.create_medical_history(history(1, 3, "c")).await.unwrap();

        service.delete_medical_history_by_patient_id_and_user_id(1, 2).await.unwrap();

        assert_eq!(service.get_all_medical_histories().await.unwrap(), vec![other]);
    }

    #[tokio::test]
    async fn test_delete_by_pair_without_matches() {
        let service = in_memory_service();
        service.create_medical_history(history(1, 2, "a")).await.unwrap();

        let result = service.delete_medical_history_by_patient_id_and_user_id(7, 8).await;

        assert!(matches!(result, Err(ServiceError::RecordNotFound(_))));
        assert_eq!(service.get_all_medical_histories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_pair_issues_single_bulk_delete() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_find_by_patient_id_and_user_id()
            .withf(|patient_id, user_id| *patient_id == 1 && *user_id == 2)
            .times(1)
            .returning(|_, _| Ok(vec![stored(1, 1, 2), stored(4, 1, 2)]));
        repo.expect_delete_all()
            .withf(|records: &[MedicalHistoryRecord]| records.len() == 2)
            .times(1)
            .returning(|records| Ok(records.len()));
        repo.expect_delete_by_id().never();

        let service = MedicalHistoryService::new(repo);
        service.delete_medical_history_by_patient_id_and_user_id(1, 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_record_never_writes() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();
        repo.expect_update().never();

        let service = MedicalHistoryService::new(repo);
        let result = service.update_medical_history(10, history(1, 2, "none")).await;

        assert!(matches!(result, Err(ServiceError::RecordNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_of_row_deleted_mid_merge_is_not_found() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id, 1, 2))));
        repo.expect_update()
            .withf(|record: &MedicalHistoryRecord| record.record_id == Some(3))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save().never();

        let service = MedicalHistoryService::new(repo);
        let result = service.update_medical_history(3, history(1, 2, "none")).await;

        match result {
            Err(ServiceError::RecordNotFound(msg)) => {
                assert_eq!(msg, "Medical history not found with recordId: 3")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repository_failure_is_surfaced() {
        let mut repo = MockHistoryRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Lock("poisoned".to_string())));

        let service = MedicalHistoryService::new(repo);
        let result = service.get_all_medical_histories().await;

        match result {
            Err(ServiceError::Repository(msg)) => assert!(msg.contains("poisoned")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
