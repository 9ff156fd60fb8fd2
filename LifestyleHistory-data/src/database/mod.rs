use thiserror::Error;

// Database modules
pub mod connection;
pub mod migrations;

// Re-export database connection functions
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Configuration error
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Unsupported database type
    #[error("Unsupported database type: {0}")]
    UnsupportedDatabaseType(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// Connection pool error
    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    /// Filesystem error while preparing the database location
    #[error("Failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),
}
