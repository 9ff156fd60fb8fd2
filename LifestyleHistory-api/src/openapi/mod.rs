use axum::Json;
use utoipa::OpenApi;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Lifestyle endpoints
        crate::api::handlers::life_style::hello,
        crate::api::handlers::life_style::get_all_life_styles,
        crate::api::handlers::life_style::get_life_style,
        crate::api::handlers::life_style::create_life_style,
        crate::api::handlers::life_style::update_life_style,
        crate::api::handlers::life_style::delete_life_style,

        // Medical history endpoints
        crate::api::handlers::medical_history::hello,
        crate::api::handlers::medical_history::get_all_medical_histories,
        crate::api::handlers::medical_history::get_medical_history,
        crate::api::handlers::medical_history::create_medical_history,
        crate::api::handlers::medical_history::update_medical_history,
        crate::api::handlers::medical_history::delete_medical_history,
        crate::api::handlers::medical_history::delete_medical_histories_by_patient_and_user,
    ),
    components(
        schemas(
            // Entities
            crate::entities::LifeStyle,
            crate::entities::MedicalHistory,
            crate::entities::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "life_style", description = "Patient lifestyle records"),
        (name = "medical_history", description = "Patient medical history records")
    ),
    info(
        title = "Lifestyle and Medical History API",
        version = "0.1.0",
        description = "CRUD API for patient lifestyle and medical history records",
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
