// Domain entities
pub mod conversions;
pub mod life_style;
pub mod medical_history;

// Re-export common types for easier imports
pub use life_style::LifeStyle;
pub use medical_history::MedicalHistory;
