mod medical_history_test;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::api::{create_app_with_services, AppServices};

/// Router over fresh in-memory services
pub(super) fn test_app() -> Router {
    create_app_with_services(AppServices::in_memory())
}

/// Send a request and return status, `Location` header and body text
pub(super) async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    json: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match json {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}
