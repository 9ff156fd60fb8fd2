// Repository module structure
pub mod errors;
mod crud;
mod in_memory;
mod life_style;
mod medical_history;
mod storage;

// Re-export commonly used types
pub use crud::{CrudRepository, MedicalHistoryRepositoryTrait};
pub use errors::RepositoryError;
pub use in_memory::InMemoryRepository;
pub use storage::{SqliteRecord, SqliteRepository};

use crate::models::{LifeStyleRecord, MedicalHistoryRecord};

/// SQLite-backed lifestyle repository
pub type SqliteLifeStyleRepository = SqliteRepository<LifeStyleRecord>;

/// SQLite-backed medical history repository
pub type SqliteMedicalHistoryRepository = SqliteRepository<MedicalHistoryRecord>;

/// In-memory lifestyle repository
pub type InMemoryLifeStyleRepository = InMemoryRepository<LifeStyleRecord>;

/// In-memory medical history repository
pub type InMemoryMedicalHistoryRepository = InMemoryRepository<MedicalHistoryRecord>;
