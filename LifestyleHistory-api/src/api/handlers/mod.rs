pub mod health;
pub mod life_style;
pub mod medical_history;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
