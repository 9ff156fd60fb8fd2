//! Database connection module for the lifestyle and medical history service
//!
//! The pool is created once at startup and handed to every repository that
//! needs it. SQLite is the supported backend; `:memory:` selects a private
//! in-memory database.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use tracing::{error, info};

use super::migrations::run_sqlite_migrations;
use super::DatabaseError;

/// Path used when `DB_SQLITE_PATH` is not set
pub const DEFAULT_SQLITE_PATH: &str = "data/lifestyle_history.db";

/// Special SQLite path selecting an in-memory database
pub const IN_MEMORY_SQLITE_PATH: &str = ":memory:";

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// SQLite database (file-based or in-memory)
    Sqlite,
}

impl FromStr for DatabaseType {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseType::Sqlite),
            _ => Err(DatabaseError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

/// Shared SQLite connection pool
#[derive(Clone)]
pub struct DatabasePool {
    inner: Arc<r2d2::Pool<SqliteConnectionManager>>,
}

impl DatabasePool {
    /// Check out a connection from the pool
    pub fn get(&self) -> Result<r2d2::PooledConnection<SqliteConnectionManager>, r2d2::Error> {
        self.inner.get()
    }

    /// Current pool state (total and idle connections)
    pub fn state(&self) -> r2d2::State {
        self.inner.state()
    }
}

impl fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state();
        f.debug_struct("DatabasePool")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database type
    pub db_type: DatabaseType,
    /// Path to the SQLite database file, or `:memory:`
    pub sqlite_path: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection checkout timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DatabaseType::Sqlite,
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a throwaway in-memory database
    pub fn in_memory() -> Self {
        Self {
            sqlite_path: IN_MEMORY_SQLITE_PATH.to_string(),
            ..Self::default()
        }
    }

    /// Whether this configuration points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.sqlite_path == IN_MEMORY_SQLITE_PATH
    }

    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_type = lookup("DB_TYPE")
            .map(|value| value.parse::<DatabaseType>())
            .transpose()?
            .unwrap_or(defaults.db_type);

        let sqlite_path = match lookup("DB_SQLITE_PATH") {
            Some(path) if !path.trim().is_empty() => path,
            _ => {
                info!("No DB_SQLITE_PATH provided, will use default path: {}", DEFAULT_SQLITE_PATH);
                defaults.sqlite_path
            }
        };

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS")?
            .unwrap_or(defaults.max_connections);
        let timeout_seconds = parse_var(&lookup, "DB_TIMEOUT_SECONDS")?
            .unwrap_or(defaults.timeout_seconds);

        info!(
            "Database configuration: type={:?}, path={}, max_connections={}, timeout={}s",
            db_type, sqlite_path, max_connections, timeout_seconds
        );

        let config = DatabaseConfig {
            db_type,
            sqlite_path,
            max_connections,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pool builder cannot accept
    pub fn validate(&self) -> Result<(), DatabaseError> {
        if self.max_connections == 0 {
            return Err(DatabaseError::ConfigError(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(DatabaseError::ConfigError(
                "DB_TIMEOUT_SECONDS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, DatabaseError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| DatabaseError::ConfigError(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(None),
    }
}

/// Create the connection pool described by `config` and bootstrap the schema
pub fn create_database_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing database pool with type: {:?}", config.db_type);
    config.validate()?;

    let pool = match config.db_type {
        DatabaseType::Sqlite => initialize_sqlite_pool(config)?,
    };

    run_migrations(&pool)?;
    Ok(pool)
}

/// Initialize SQLite connection pool
fn initialize_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    if config.is_in_memory() {
        return initialize_in_memory_sqlite_pool(config);
    }

    info!("Initializing SQLite database at: {}", config.sqlite_path);

    if let Some(parent) = Path::new(&config.sqlite_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating parent directory: {:?}", parent);
            fs::create_dir_all(parent)?;
        }
    }

    let manager = SqliteConnectionManager::file(&config.sqlite_path)
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);

    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(config.timeout_seconds))
        .build(manager)
        .map_err(|e| {
            error!("Failed to create SQLite connection pool: {}", e);
            DatabaseError::PoolError(e)
        })?;

    info!("SQLite connection pool created successfully");
    Ok(DatabasePool { inner: Arc::new(pool) })
}

/// Initialize an in-memory SQLite database.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// capped at one connection that is never retired: closing it drops the data
/// and the schema with it.
fn initialize_in_memory_sqlite_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing in-memory SQLite database");

    let manager = SqliteConnectionManager::memory();
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .max_lifetime(None)
        .idle_timeout(None)
        .connection_timeout(Duration::from_secs(config.timeout_seconds))
        .build(manager)?;

    Ok(DatabasePool { inner: Arc::new(pool) })
}

/// Run database migrations
fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    let conn = pool.get()?;
    run_sqlite_migrations(&conn).map_err(DatabaseError::MigrationError)?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Probe the pool with a trivial query
pub fn check_connection(pool: &DatabasePool) -> Result<(), DatabaseError> {
    let conn = pool.get()?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

/// Get information about the current database connection
pub fn get_connection_info(pool: &DatabasePool) -> String {
    let location = match pool.get() {
        Ok(conn) => match conn.query_row("PRAGMA database_list", [], |row| row.get::<_, String>(2)) {
            Ok(path) if path.is_empty() => "SQLite in-memory database".to_string(),
            Ok(path) => format!("SQLite database at {}", path),
            Err(_) => "SQLite database (path unknown)".to_string(),
        },
        Err(e) => {
            error!("Failed to get SQLite connection: {}", e);
            return format!("SQLite connection error: {}", e);
        }
    };

    let state = pool.state();
    format!(
        "{} (connections: active={}, idle={})",
        location, state.connections, state.idle_connections
    )
}
