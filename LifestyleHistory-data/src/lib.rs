// Lifestyle & history data
// This crate owns the connection pool, the schema and the repositories

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
