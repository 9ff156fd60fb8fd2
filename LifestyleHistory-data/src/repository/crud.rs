use async_trait::async_trait;

use crate::models::{MedicalHistoryRecord, Record};
use super::errors::RepositoryError;

/// Basic persistence operations shared by every record type
#[async_trait]
pub trait CrudRepository<T: Record>: Send + Sync {
    /// Get every stored record, ordered by id
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Get a record by id
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError>;

    /// Check whether a record with this id is stored
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Insert or update a record.
    ///
    /// A record without an id is inserted and receives a new one. A record
    /// with an id replaces the stored row with that id, or is inserted under
    /// it when no such row exists.
    async fn save(&self, record: T) -> Result<T, RepositoryError>;

    /// Overwrite the stored row with the record's id.
    ///
    /// Returns `None`, and writes nothing, when the record has no id or no
    /// row with that id exists.
    async fn update(&self, record: T) -> Result<Option<T>, RepositoryError>;

    /// Delete the record with this id; deleting a missing id is a no-op
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Delete all given records in one operation, returning how many rows went away
    async fn delete_all(&self, records: &[T]) -> Result<usize, RepositoryError>;
}

/// Medical history persistence, adding the patient/user finder
#[async_trait]
pub trait MedicalHistoryRepositoryTrait: CrudRepository<MedicalHistoryRecord> {
    /// Get all records belonging to a (patient, user) pair
    async fn find_by_patient_id_and_user_id(
        &self,
        patient_id: i64,
        user_id: i64,
    ) -> Result<Vec<MedicalHistoryRecord>, RepositoryError>;
}
