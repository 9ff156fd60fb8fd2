use axum::http::StatusCode;
use serde_json::Value;

use lifestyle_history_data::database::{create_database_pool, DatabaseConfig};

use super::{send, test_app};
use crate::api::create_app;

const BASE: &str = "/lifeStyleAndHistory/medicalHistory";

async fn create(app: &axum::Router, json: &str) -> String {
    let (status, location, body) = send(app, "POST", BASE, Some(json)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "MedicalHistory Created Successfully");
    location.expect("Location header")
}

async fn all_records(app: &axum::Router) -> Vec<Value> {
    let (status, _, body) = send(app, "GET", &format!("{}/all", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn test_greeting() {
    let app = test_app();

    let (status, _, body) = send(&app, "GET", BASE, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from /lifeStyleAndHistory/medicalHistory/");
}

#[tokio::test]
async fn test_update_merges_clinical_fields() {
    let app = test_app();
    let location = create(&app, r#"{"patientId": 1, "userId": 2, "allergies": "none"}"#).await;

    let (status, _, body) = send(
        &app,
        "PUT",
        &location,
        Some(r#"{"recordId": 50, "patientId": 9, "userId": 9, "allergies": "peanuts", "currentMedication": "X"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MedicalHistory Updated Successfully");

    let (status, _, body) = send(&app, "GET", &location, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched["recordId"], 1);
    assert_eq!(fetched["patientId"], 1);
    assert_eq!(fetched["userId"], 2);
    assert_eq!(fetched["allergies"], "peanuts");
    assert_eq!(fetched["currentMedication"], "X");
}

#[tokio::test]
async fn test_update_merges_clinical_fields_in_sqlite() {
    let pool = create_database_pool(&DatabaseConfig::in_memory()).unwrap();
    let app = create_app(pool);
    let location = create(
        &app,
        r#"{"patientId": 3, "userId": 4, "allergies": "none", "surgeries": "appendix", "injuries": "wrist"}"#,
    )
    .await;

    let (status, _, _) = send(
        &app,
        "PUT",
        &location,
        Some(r#"{"patientId": 8, "userId": 8, "allergies": "pollen", "chronicDiseases": "asthma"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(&app, "GET", &location, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched["patientId"], 3);
    assert_eq!(fetched["userId"], 4);
    assert_eq!(fetched["allergies"], "pollen");
    assert_eq!(fetched["chronicDiseases"], "asthma");
    assert_eq!(fetched["surgeries"], Value::Null);
    assert_eq!(fetched["injuries"], Value::Null);
    assert_eq!(all_records(&app).await.len(), 1);
}

#[tokio::test]
async fn test_get_and_update_missing_record() {
    let app = test_app();
    create(&app, r#"{"patientId": 1, "userId": 2, "allergies": "none"}"#).await;
    let missing = format!("{}/999", BASE);

    for (method, json) in [("GET", None), ("PUT", Some(r#"{"allergies": "peanuts"}"#))] {
        let (status, _, body) = send(&app, method, &missing, json).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, missing);
        let error: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"], "not_found");
        assert_eq!(error["message"], "Medical history not found with recordId: 999");
    }

    let remaining = all_records(&app).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["allergies"], "none");
}

#[tokio::test]
async fn test_delete_missing_record() {
    let app = test_app();
    create(&app, r#"{"patientId": 1, "userId": 2}"#).await;

    let (status, _, body) = send(&app, "DELETE", &format!("{}/999", BASE), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["message"], "MedicalHistory not found with recordId: 999");
    assert_eq!(all_records(&app).await.len(), 1);
}

#[tokio::test]
async fn test_delete_by_record_id() {
    let app = test_app();
    let location = create(&app, r#"{"patientId": 1, "userId": 2}"#).await;

    let (status, _, body) = send(&app, "DELETE", &location, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MedicalHistory Deleted Successfully");
    assert!(all_records(&app).await.is_empty());
}

#[tokio::test]
async fn test_delete_by_patient_and_user() {
    let app = test_app();
    create(&app, r#"{"patientId": 1, "userId": 2, "injuries": "wrist"}"#).await;
    create(&app, r#"{"patientId": 1, "userId": 2, "injuries": "ankle"}"#).await;
    create(&app, r#"{"patientId": 1, "userId": 3, "injuries": "knee"}"#).await;

    let (status, _, body) = send(&app, "DELETE", &format!("{}/patient/1/user/2", BASE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MedicalHistory Deleted Successfully");

    let remaining = all_records(&app).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["injuries"], "knee");
}

#[tokio::test]
async fn test_delete_by_patient_and_user_without_matches() {
    let app = test_app();
    create(&app, r#"{"patientId": 1, "userId": 2}"#).await;

    let (status, _, body) = send(&app, "DELETE", &format!("{}/patient/4/user/5", BASE), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["message"], "MedicalHistory not found with patientId: 4 and userId: 5");
    assert_eq!(all_records(&app).await.len(), 1);
}
