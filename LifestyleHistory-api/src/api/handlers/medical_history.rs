use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{info, instrument};

use lifestyle_history_data::database::DatabasePool;
use lifestyle_history_domain::entities::MedicalHistory as DomainMedicalHistory;
use lifestyle_history_domain::services::{
    create_default_medical_history_service, MedicalHistoryServiceTrait,
};

use crate::entities::{ErrorResponse, MedicalHistory};

/// Base path of the medical history resource
pub const MEDICAL_HISTORY_PATH: &str = "/lifeStyleAndHistory/medicalHistory";

/// Service type for dependency injection
pub type MedicalHistoryService = Arc<dyn MedicalHistoryServiceTrait + Send + Sync>;

/// Create a SQLite-backed service for the handlers to use
pub fn create_service(pool: DatabasePool) -> MedicalHistoryService {
    Arc::new(create_default_medical_history_service(pool))
}

/// Greeting for the medical history resource
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/medicalHistory",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
    ),
    tag = "medical_history"
)]
pub async fn hello() -> &'static str {
    "Hello from /lifeStyleAndHistory/medicalHistory/"
}

/// Get every medical history record
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/medicalHistory/all",
    responses(
        (status = 200, description = "All medical history records", body = [MedicalHistory]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service))]
pub async fn get_all_medical_histories(
    State(service): State<MedicalHistoryService>,
) -> Result<Json<Vec<MedicalHistory>>, ErrorResponse> {
    let histories = service.get_all_medical_histories().await?;
    info!("Returning {} medical history record(s)", histories.len());

    Ok(Json(histories.into_iter().map(convert_to_public_medical_history).collect()))
}

/// Get a single medical history record by ID
#[utoipa::path(
    get,
    path = "/lifeStyleAndHistory/medicalHistory/{recordId}",
    params(
        ("recordId" = i64, Path, description = "Medical history record ID")
    ),
    responses(
        (status = 200, description = "Medical history record found", body = MedicalHistory),
        (status = 404, description = "Medical history record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service))]
pub async fn get_medical_history(
    State(service): State<MedicalHistoryService>,
    Path(record_id): Path<i64>,
) -> Result<Json<MedicalHistory>, ErrorResponse> {
    let history = service.get_medical_history_by_record_id(record_id).await?;
    Ok(Json(convert_to_public_medical_history(history)))
}

/// Create a medical history record
#[utoipa::path(
    post,
    path = "/lifeStyleAndHistory/medicalHistory",
    request_body = MedicalHistory,
    responses(
        (status = 201, description = "Medical history record created", body = String, content_type = "text/plain",
            headers(("Location" = String, description = "URL of the created record"))),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service, payload))]
pub async fn create_medical_history(
    State(service): State<MedicalHistoryService>,
    Json(payload): Json<MedicalHistory>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let created = service
        .create_medical_history(convert_to_domain_medical_history(payload))
        .await?;

    let location = match created.record_id {
        Some(id) => format!("{}/{}", MEDICAL_HISTORY_PATH, id),
        None => MEDICAL_HISTORY_PATH.to_string(),
    };
    info!("Medical history record created at {}", location);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        "MedicalHistory Created Successfully",
    ))
}

/// Update the clinical fields of a medical history record
///
/// `recordId`, `patientId` and `userId` in the payload are ignored.
#[utoipa::path(
    put,
    path = "/lifeStyleAndHistory/medicalHistory/{recordId}",
    params(
        ("recordId" = i64, Path, description = "Medical history record ID")
    ),
    request_body = MedicalHistory,
    responses(
        (status = 200, description = "Medical history record updated", body = String, content_type = "text/plain"),
        (status = 404, description = "Medical history record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service, payload))]
pub async fn update_medical_history(
    State(service): State<MedicalHistoryService>,
    Path(record_id): Path<i64>,
    Json(payload): Json<MedicalHistory>,
) -> Result<&'static str, ErrorResponse> {
    service
        .update_medical_history(record_id, convert_to_domain_medical_history(payload))
        .await?;
    Ok("MedicalHistory Updated Successfully")
}

/// Delete a medical history record by ID
#[utoipa::path(
    delete,
    path = "/lifeStyleAndHistory/medicalHistory/{recordId}",
    params(
        ("recordId" = i64, Path, description = "Medical history record ID")
    ),
    responses(
        (status = 200, description = "Medical history record deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Medical history record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service))]
pub async fn delete_medical_history(
    State(service): State<MedicalHistoryService>,
    Path(record_id): Path<i64>,
) -> Result<&'static str, ErrorResponse> {
    service.delete_medical_history_by_record_id(record_id).await?;
    Ok("MedicalHistory Deleted Successfully")
}

/// Delete every medical history record of a patient and user
#[utoipa::path(
    delete,
    path = "/lifeStyleAndHistory/medicalHistory/patient/{patientId}/user/{userId}",
    params(
        ("patientId" = i64, Path, description = "Patient ID"),
        ("userId" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Matching records deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "No record matches the pair", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "medical_history"
)]
#[instrument(skip(service))]
pub async fn delete_medical_histories_by_patient_and_user(
    State(service): State<MedicalHistoryService>,
    Path((patient_id, user_id)): Path<(i64, i64)>,
) -> Result<&'static str, ErrorResponse> {
    service
        .delete_medical_history_by_patient_id_and_user_id(patient_id, user_id)
        .await?;
    Ok("MedicalHistory Deleted Successfully")
}

// Convert public payload to domain entity
fn convert_to_domain_medical_history(history: MedicalHistory) -> DomainMedicalHistory {
    DomainMedicalHistory {
        record_id: history.record_id,
        patient_id: history.patient_id,
        user_id: history.user_id,
        allergies: history.allergies,
        current_medication: history.current_medication,
        past_medication: history.past_medication,
        chronic_diseases: history.chronic_diseases,
        injuries: history.injuries,
        surgeries: history.surgeries,
    }
}

// Convert domain entity to public entity
fn convert_to_public_medical_history(history: DomainMedicalHistory) -> MedicalHistory {
    MedicalHistory {
        record_id: history.record_id,
        patient_id: history.patient_id,
        user_id: history.user_id,
        allergies: history.allergies,
        current_medication: history.current_medication,
        past_medication: history.past_medication,
        chronic_diseases: history.chronic_diseases,
        injuries: history.injuries,
        surgeries: history.surgeries,
    }
}
