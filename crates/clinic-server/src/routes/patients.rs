use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use clinic_core::{AppError, Entity, Patient};

use crate::dto::{ErrorResponse, PatientListResponse, PatientRequest, PatientResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/v1/patients",
    request_body = PatientRequest,
    responses(
        (status = 201, description = "Patient created", body = PatientResponse),
        (status = 400, description = "Invalid patient", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "patients"
)]
pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<PatientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patient = state
        .db
        .patient_service()
        .save(body.into_patient(None))
        .await?;

    Ok((StatusCode::CREATED, axum::Json(PatientResponse::from(patient))))
}

#[utoipa::path(
    get,
    path = "/v1/patients",
    responses(
        (status = 200, description = "All patients", body = PatientListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "patients"
)]
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let patients = state.db.patient_service().find_all().await?;
    let total = patients.len();

    let response = PatientListResponse {
        patients: patients.into_iter().map(PatientResponse::from).collect(),
        total,
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/patients/{id}",
    params(
        ("id" = i64, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Patient details", body = PatientResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "patients"
)]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let patient = state
        .db
        .patient_service()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(Patient::NAME, id))?;

    Ok(axum::Json(PatientResponse::from(patient)))
}

#[utoipa::path(
    put,
    path = "/v1/patients/{id}",
    params(
        ("id" = i64, Path, description = "Patient ID")
    ),
    request_body = PatientRequest,
    responses(
        (status = 200, description = "Patient updated", body = PatientResponse),
        (status = 400, description = "Invalid patient", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "patients"
)]
pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<PatientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patient = state
        .db
        .patient_service()
        .update(body.into_patient(Some(id)))
        .await?;

    Ok(axum::Json(PatientResponse::from(patient)))
}

#[utoipa::path(
    delete,
    path = "/v1/patients/{id}",
    params(
        ("id" = i64, Path, description = "Patient ID")
    ),
    responses(
        (status = 204, description = "Patient deleted (or never existed)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "patients"
)]
pub async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.patient_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
