use rusqlite::{Row, ToSql};

use crate::models::LifeStyleRecord;
use super::storage::SqliteRecord;

impl SqliteRecord for LifeStyleRecord {
    const TABLE: &'static str = "life_styles";
    const ID_COLUMN: &'static str = "l_id";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "user_id",
        "smoking_status",
        "alcohol_consumption",
        "physical_activity",
        "dietary_habits",
        "sleep_pattern",
        "stress_level",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(LifeStyleRecord {
            l_id: Some(row.get(0)?),
            patient_id: row.get(1)?,
            user_id: row.get(2)?,
            smoking_status: row.get(3)?,
            alcohol_consumption: row.get(4)?,
            physical_activity: row.get(5)?,
            dietary_habits: row.get(6)?,
            sleep_pattern: row.get(7)?,
            stress_level: row.get(8)?,
        })
    }

    fn column_values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 8] = [
            &self.patient_id,
            &self.user_id,
            &self.smoking_status,
            &self.alcohol_consumption,
            &self.physical_activity,
            &self.dietary_habits,
            &self.sleep_pattern,
            &self.stress_level,
        ];
        values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_database_pool, DatabaseConfig};
    use crate::repository::{CrudRepository, SqliteLifeStyleRepository};

    fn repository() -> SqliteLifeStyleRepository {
        let pool = create_database_pool(&DatabaseConfig::in_memory()).unwrap();
        SqliteLifeStyleRepository::new(pool)
    }

    fn sample(patient_id: i64) -> LifeStyleRecord {
        LifeStyleRecord {
            l_id: None,
            patient_id: Some(patient_id),
            user_id: Some(7),
            smoking_status: Some("never".to_string()),
            physical_activity: Some("3x weekly".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_round_trips() {
        let repo = repository();

        let saved = repo.save(sample(1)).await.unwrap();
        let id = saved.l_id.expect("id should be assigned");

        let fetched = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert!(repo.exists_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_empty_then_ordered() {
        let repo = repository();
        assert!(repo.find_all().await.unwrap().is_empty());

        let first = repo.save(sample(1)).await.unwrap();
        let second = repo.save(sample(2)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_row() {
        let repo = repository();
        let saved = repo.save(sample(1)).await.unwrap();

        let replacement = LifeStyleRecord {
            smoking_status: Some("former".to_string()),
            stress_level: Some("high".to_string()),
            ..saved.clone()
        };
        repo.save(replacement.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![replacement]);
    }

    #[tokio::test]
    async fn test_update_overwrites_existing_row() {
        let repo = repository();
        let saved = repo.save(sample(1)).await.unwrap();

        let changed = LifeStyleRecord {
            physical_activity: None,
            sleep_pattern: Some("7h".to_string()),
            ..saved.clone()
        };
        let updated = repo.update(changed.clone()).await.unwrap();

        assert_eq!(updated, Some(changed.clone()));
        assert_eq!(repo.find_all().await.unwrap(), vec![changed]);
    }

    #[tokio::test]
    async fn test_update_of_deleted_row_writes_nothing() {
        let repo = repository();
        let saved = repo.save(sample(1)).await.unwrap();
        let id = saved.l_id.unwrap();
        repo.delete_by_id(id).await.unwrap();

        assert_eq!(repo.update(saved).await.unwrap(), None);
        assert_eq!(repo.update(sample(2)).await.unwrap(), None);
        assert!(!repo.exists_by_id(id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = repository();
        let keep = repo.save(sample(1)).await.unwrap();
        let gone = repo.save(sample(2)).await.unwrap();

        repo.delete_by_id(gone.l_id.unwrap()).await.unwrap();

        assert!(!repo.exists_by_id(gone.l_id.unwrap()).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_missing_id_reads_as_absent() {
        let repo = repository();
        assert!(repo.find_by_id(999).await.unwrap().is_none());
        assert!(!repo.exists_by_id(999).await.unwrap());
    }
}
