use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use clinic_server::auth::issue_token;

use crate::integration::common::{dentist_body, patient_body, setup_test_app};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn openapi_document_is_public() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["info"]["title"], "Dental Clinic - Open API Documentation");
}

#[tokio::test]
async fn unauthenticated_request_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/v1/dentists").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn token_signed_with_other_secret_returns_401() {
    let app = setup_test_app().await;
    let forged = issue_token("intruder", "ADMIN", "some-other-secret", 1).unwrap();

    let response = app
        .router
        .oneshot(
            Request::get("/v1/patients")
                .header("authorization", format!("Bearer {forged}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dentist_crud_flow() {
    let app = setup_test_app().await;

    // Create
    let (status, created) = app
        .call("POST", "/v1/dentists", Some(dentist_body("Ana", "MP100")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("Store should assign an id");
    assert_eq!(created["registrationNumber"], "MP100");
    assert_eq!(created["specialty"], "Orthodontics");

    // Read
    let (status, found) = app.call("GET", &format!("/v1/dentists/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    // Update
    let mut body = dentist_body("Ana María", "MP200");
    body["specialty"] = "Periodontics".into();
    let (status, updated) = app
        .call("PUT", &format!("/v1/dentists/{id}"), Some(body))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Ana María");
    assert_eq!(updated["specialty"], "Periodontics");

    // List
    let (status, list) = app.call("GET", "/v1/dentists", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["dentists"][0]["registrationNumber"], "MP200");
    assert_eq!(list["dentists"][0]["specialty"], "Periodontics");

    // Delete, twice
    let (status, _) = app.call("DELETE", &format!("/v1/dentists/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.call("DELETE", &format!("/v1/dentists/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = app.call("GET", &format!("/v1/dentists/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn invalid_dentist_returns_400() {
    let app = setup_test_app().await;

    let (status, json) = app
        .call("POST", "/v1/dentists", Some(dentist_body("Ana", "MP-100")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn overlong_dentist_name_returns_400() {
    let app = setup_test_app().await;

    let (status, json) = app
        .call("POST", "/v1/dentists", Some(dentist_body(&"A".repeat(101), "MP100")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn update_unknown_dentist_returns_404() {
    let app = setup_test_app().await;

    let (status, json) = app
        .call("PUT", "/v1/dentists/404", Some(dentist_body("Ana", "MP100")))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Dentist not found: 404");
}

#[tokio::test]
async fn patient_create_and_get() {
    let app = setup_test_app().await;

    let (status, created) = app
        .call("POST", "/v1/patients", Some(patient_body("30111222")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, found) = app.call("GET", &format!("/v1/patients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["cardIdentity"], "30111222");
    assert_eq!(found["admissionDate"], "2024-03-01");
    assert_eq!(found["address"]["province"], "Buenos Aires");

    let (status, list) = app.call("GET", "/v1/patients", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn patient_with_bad_email_returns_400() {
    let app = setup_test_app().await;
    let mut body = patient_body("30111222");
    body["email"] = serde_json::json!("lucia.example.com");

    let (status, _) = app.call("POST", "/v1/patients", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
