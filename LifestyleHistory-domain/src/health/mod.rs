//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use lifestyle_history_data::database::{self, DatabasePool};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the database
    ///
    /// Returns:
    /// - Ok(true) if the database answers queries
    /// - Ok(false) if no database is attached
    /// - Err if the database cannot be reached
    async fn check_database_status(&self) -> Result<bool, String>;
}

/// Health service probing the connection pool
#[derive(Debug, Clone, Default)]
pub struct DatabaseHealthService {
    pool: Option<DatabasePool>,
}

impl DatabaseHealthService {
    /// Health service for a pool-backed deployment
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Health service for a deployment running without a database
    pub fn without_database() -> Self {
        Self { pool: None }
    }
}

#[async_trait]
impl HealthServiceTrait for DatabaseHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let db_component = match self.check_database_status().await {
            Ok(true) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: self.pool.as_ref().map(database::get_connection_info),
            },
            Ok(false) => HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("No database attached, records are kept in memory".to_string()),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        };

        let overall_status = match db_component.status {
            ComponentStatus::Unhealthy => SystemStatus::Unhealthy,
            ComponentStatus::Degraded => SystemStatus::Degraded,
            ComponentStatus::Healthy => SystemStatus::Healthy,
        };

        SystemHealth {
            status: overall_status,
            components: vec![
                ("database".to_string(), db_component),
            ].into_iter().collect(),
        }
    }

    async fn check_database_status(&self) -> Result<bool, String> {
        let Some(pool) = &self.pool else {
            return Ok(false);
        };

        database::check_connection(pool).map(|_| true).map_err(|e| {
            warn!("Database health check failed: {}", e);
            format!("Database connection error: {}", e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestyle_history_data::database::{create_database_pool, DatabaseConfig};

    #[tokio::test]
    async fn test_health_with_pool() {
        let pool = create_database_pool(&DatabaseConfig::in_memory()).unwrap();
        let health = DatabaseHealthService::new(pool).get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        assert_eq!(health.components["database"].status, ComponentStatus::Healthy);
    }

    #[tokio::test]
    async fn test_health_without_database_is_degraded() {
        let health = DatabaseHealthService::without_database().get_system_health().await;

        assert_eq!(health.status, SystemStatus::Degraded);
        assert!(health.components.contains_key("database"));
    }
}
