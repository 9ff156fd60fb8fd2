// Public entities for the lifestyle and medical history API
// These are the JSON shapes exchanged with clients

// Error responses
pub mod common;

pub mod life_style;
pub mod medical_history;

pub use common::ErrorResponse;
pub use life_style::LifeStyle;
pub use medical_history::MedicalHistory;
