use async_trait::async_trait;
use rusqlite::{Row, ToSql};
use tracing::debug;

use crate::models::MedicalHistoryRecord;
use super::crud::MedicalHistoryRepositoryTrait;
use super::errors::RepositoryError;
use super::in_memory::InMemoryRepository;
use super::storage::{SqliteRecord, SqliteRepository};

impl SqliteRecord for MedicalHistoryRecord {
    const TABLE: &'static str = "medical_histories";
    const ID_COLUMN: &'static str = "record_id";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "user_id",
        "allergies",
        "current_medication",
        "past_medication",
        "chronic_diseases",
        "injuries",
        "surgeries",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MedicalHistoryRecord {
            record_id: Some(row.get(0)?),
            patient_id: row.get(1)?,
            user_id: row.get(2)?,
            allergies: row.get(3)?,
            current_medication: row.get(4)?,
            past_medication: row.get(5)?,
            chronic_diseases: row.get(6)?,
            injuries: row.get(7)?,
            surgeries: row.get(8)?,
        })
    }

    fn column_values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 8] = [
            &self.patient_id,
            &self.user_id,
            &self.allergies,
            &self.current_medication,
            &self.past_medication,
            &self.chronic_diseases,
            &self.injuries,
            &self.surgeries,
        ];
        values.to_vec()
    }
}

#[async_trait]
impl MedicalHistoryRepositoryTrait for SqliteRepository<MedicalHistoryRecord> {
    async fn find_by_patient_id_and_user_id(
        &self,
        patient_id: i64,
        user_id: i64,
    ) -> Result<Vec<MedicalHistoryRecord>, RepositoryError> {
        debug!("Getting medical histories for patient_id={}, user_id={}", patient_id, user_id);
        self.query_records(Some("patient_id = ?1 AND user_id = ?2"), rusqlite::params![patient_id, user_id])
    }
}

#[async_trait]
impl MedicalHistoryRepositoryTrait for InMemoryRepository<MedicalHistoryRecord> {
    async fn find_by_patient_id_and_user_id(
        &self,
        patient_id: i64,
        user_id: i64,
    ) -> Result<Vec<MedicalHistoryRecord>, RepositoryError> {
        self.filter(|record| record.belongs_to(patient_id, user_id))
    }
}
