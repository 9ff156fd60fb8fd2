use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use lifestyle_history_data::database::DatabasePool;
use lifestyle_history_data::repository::{InMemoryLifeStyleRepository, InMemoryMedicalHistoryRepository};
use lifestyle_history_domain::services::{LifeStyleService as DomainLifeStyleService, MedicalHistoryService as DomainMedicalHistoryService};

use crate::api::handlers::health::{self, HealthService};
use crate::api::handlers::life_style::{self, LifeStyleService, LIFE_STYLE_PATH};
use crate::api::handlers::medical_history::{self, MedicalHistoryService, MEDICAL_HISTORY_PATH};
use crate::openapi;

/// Services the router dispatches to
#[derive(Clone)]
pub struct AppServices {
    pub life_style: LifeStyleService,
    pub medical_history: MedicalHistoryService,
    pub health: HealthService,
}

impl AppServices {
    /// Services backed by the SQLite pool
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self {
            life_style: life_style::create_service(pool.clone()),
            medical_history: medical_history::create_service(pool.clone()),
            health: health::create_health_service(pool),
        }
    }

    /// Services keeping records in process memory
    pub fn in_memory() -> Self {
        Self {
            life_style: Arc::new(DomainLifeStyleService::new(InMemoryLifeStyleRepository::new())),
            medical_history: Arc::new(DomainMedicalHistoryService::new(
                InMemoryMedicalHistoryRepository::new(),
            )),
            health: health::create_detached_health_service(),
        }
    }
}

/// Create the application router over a database pool
pub fn create_app(pool: DatabasePool) -> Router {
    create_app_with_services(AppServices::from_pool(pool))
}

/// Create the application router from already built services
pub fn create_app_with_services(services: AppServices) -> Router {
    debug!("Creating application router");

    let app = Router::new()
        .merge(life_style_routes(services.life_style))
        .merge(medical_history_routes(services.medical_history))
        .merge(public_routes(services.health));

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app.layer(TraceLayer::new_for_http())
}

/// Lifestyle resource routes
pub fn life_style_routes(service: LifeStyleService) -> Router {
    Router::new()
        .route(LIFE_STYLE_PATH, get(life_style::hello).post(life_style::create_life_style))
        .route(&format!("{}/all", LIFE_STYLE_PATH), get(life_style::get_all_life_styles))
        .route(
            &format!("{}/:l_id", LIFE_STYLE_PATH),
            get(life_style::get_life_style)
                .put(life_style::update_life_style)
                .delete(life_style::delete_life_style),
        )
        .with_state(service)
}

/// Medical history resource routes
pub fn medical_history_routes(service: MedicalHistoryService) -> Router {
    Router::new()
        .route(
            MEDICAL_HISTORY_PATH,
            get(medical_history::hello).post(medical_history::create_medical_history),
        )
        .route(
            &format!("{}/all", MEDICAL_HISTORY_PATH),
            get(medical_history::get_all_medical_histories),
        )
        .route(
            &format!("{}/:record_id", MEDICAL_HISTORY_PATH),
            get(medical_history::get_medical_history)
                .put(medical_history::update_medical_history)
                .delete(medical_history::delete_medical_history),
        )
        .route(
            &format!("{}/patient/:patient_id/user/:user_id", MEDICAL_HISTORY_PATH),
            axum::routing::delete(medical_history::delete_medical_histories_by_patient_and_user),
        )
        .with_state(service)
}

/// Health and API documentation routes
fn public_routes(health_service: HealthService) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(Extension(health_service))
}
