use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{info, instrument};

use lifestyle_history_data::database::DatabasePool;
use lifestyle_history_domain::entities::LifeStyle as DomainLifeStyle;
use lifestyle_history_domain::services::{create_default_life_style_service, LifeStyleServiceTrait};

use crate::entities::{ErrorResponse, LifeStyle};

/// Base path of the lifestyle resource
pub const LIFE_STYLE_PATH: &str = "/lifeStyleAndHistory/lifeStyle";

/// Service type for dependency injection
pub type LifeStyleService = Arc<dyn LifeStyleServiceTrait + Send + Sync>;

/// Create a SQLite-backed service for the handlers to use
pub fn create_service(pool: DatabasePool) -> LifeStyleService {
    Arc::new(create_default_life_style_service(pool))
}

/// Greeting for the lifestyle resource
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/lifeStyle",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
    ),
    tag = "life_style"
)]
pub async fn hello() -> &'static str {
    "Hello from /lifeStyleAndHistory/lifeStyle/"
}

/// Get every lifestyle record
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/lifeStyle/all",
    responses(
        (status = 200, description = "All lifestyle records", body = [LifeStyle]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "life_style"
)]
#[instrument(skip(service))]
pub async fn get_all_life_styles(
    State(service): State<LifeStyleService>,
) -> Result<Json<Vec<LifeStyle>>, ErrorResponse> {
    let life_styles = service.get_all_life_styles().await?;
    info!("Returning {} lifestyle record(s)", life_styles.len());

    Ok(Json(life_styles.into_iter().map(convert_to_public_life_style).collect()))
}

/// Get a single lifestyle record by ID
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/lifeStyle/{lID}",
    params(
        ("lID" = i64, Path, description = "Lifestyle record ID")
    ),
    responses(
        (status = 200, description = "Lifestyle record found", body = LifeStyle),
        (status = 404, description = "Lifestyle record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "life_style"
)]
#[instrument(skip(service))]
pub async fn get_life_style(
    State(service): State<LifeStyleService>,
    Path(l_id): Path<i64>,
) -> Result<Json<LifeStyle>, ErrorResponse> {
    let life_style = service.get_life_style_by_id(l_id).await?;
    Ok(Json(convert_to_public_life_style(life_style)))
}

/// Create a lifestyle record
///
/// The identifier is assigned by the server; the new record's URL is
/// returned in the `Location` header.
#[utoipa::path(
    post,
    path = "/lifeStyleAndHistory/lifeStyle",
    request_body = LifeStyle,
    responses(
        (status = 201, description = "Lifestyle record created", body = String, content_type = "text/plain",
            headers(("Location" = String, description = "URL of the created record"))),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "life_style"
)]
#[instrument(skip(service, payload))]
pub async fn create_life_style(
    State(service): State<LifeStyleService>,
    Json(payload): Json<LifeStyle>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let created = service.create_life_style(convert_to_domain_life_style(payload)).await?;

    let location = match created.l_id {
        Some(id) => format!("{}/{}", LIFE_STYLE_PATH, id),
        None => LIFE_STYLE_PATH.to_string(),
    };
    info!("Lifestyle record created at {}", location);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        "LifeStyle Created Successfully",
    ))
}

/// Replace a lifestyle record
#[utoipa::path(
    put,
    path = "/lifeStyleAndHistory/lifeStyle/{lID}",
    params(
        ("lID" = i64, Path, description = "Lifestyle record ID")
    ),
    request_body = LifeStyle,
    responses(
        (status = 200, description = "Lifestyle record replaced", body = String, content_type = "text/plain"),
        (status = 404, description = "Lifestyle record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "life_style"
)]
#[instrument(skip(service, payload))]
pub async fn update_life_style(
    State(service): State<LifeStyleService>,
    Path(l_id): Path<i64>,
    Json(payload): Json<LifeStyle>,
) -> Result<&'static str, ErrorResponse> {
    service.update_life_style(l_id, convert_to_domain_life_style(payload)).await?;
    Ok("LifeStyle Updated Successfully")
}

/// Delete a lifestyle record
#[utoipa::path(
    delete,
    path = "/lifeStyleAndHistory/lifeStyle/{lID}",
    params(
        ("lID" = i64, Path, description = "Lifestyle record ID")
    ),
    responses(
        (status = 200, description = "Lifestyle record deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Lifestyle record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "life_style"
)]
#[instrument(skip(service))]
pub async fn delete_life_style(
    State(service): State<LifeStyleService>,
    Path(l_id): Path<i64>,
) -> Result<&'static str, ErrorResponse> {
    service.delete_life_style(l_id).await?;
    Ok("LifeStyle Deleted Successfully")
}

// Convert public payload to domain entity
fn convert_to_domain_life_style(life_style: LifeStyle) -> DomainLifeStyle {
    DomainLifeStyle {
        l_id: life_style.l_id,
        patient_id: life_style.patient_id,
        user_id: life_style.user_id,
        smoking_status: life_style.smoking_status,
        alcohol_consumption: life_style.alcohol_consumption,
        physical_activity: life_style.physical_activity,
        dietary_habits: life_style.dietary_habits,
        sleep_pattern: life_style.sleep_pattern,
        stress_level: life_style.stress_level,
    }
}

// Convert domain entity to public entity
fn convert_to_public_life_style(life_style: DomainLifeStyle) -> LifeStyle {
    LifeStyle {
        l_id: life_style.l_id,
        patient_id: life_style.patient_id,
        user_id: life_style.user_id,
        smoking_status: life_style.smoking_status,
        alcohol_consumption: life_style.alcohol_consumption,
        physical_activity: life_style.physical_activity,
        dietary_habits: life_style.dietary_habits,
        sleep_pattern: life_style.sleep_pattern,
        stress_level: life_style.stress_level,
    }
}
