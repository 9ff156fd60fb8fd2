// Domain services
// This module contains business logic implementations.

pub mod errors;
pub mod life_style;
pub mod medical_history;

// Re-export service traits and factory functions
pub use errors::ServiceError;
pub use life_style::{create_default_life_style_service, LifeStyleService, LifeStyleServiceTrait};
pub use medical_history::{
    create_default_medical_history_service, MedicalHistoryService, MedicalHistoryServiceTrait,
};
