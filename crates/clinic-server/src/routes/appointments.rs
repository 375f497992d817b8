use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use clinic_core::{AppError, Appointment, Entity};

use crate::dto::{
    AppointmentListResponse, AppointmentRequest, AppointmentResponse, ErrorResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/v1/appointments",
    request_body = AppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentResponse),
        (status = 400, description = "Bad date or unknown dentist/patient", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "appointments"
)]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<AppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = state
        .db
        .appointment_service()
        .save(body.into_dto(None))
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(AppointmentResponse::from(appointment)),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/appointments",
    responses(
        (status = 200, description = "All appointments", body = AppointmentListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "appointments"
)]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let appointments = state.db.appointment_service().find_all().await?;
    let total = appointments.len();

    let response = AppointmentListResponse {
        appointments: appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
        total,
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/appointments/{id}",
    params(
        ("id" = i64, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "appointments"
)]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = state
        .db
        .appointment_service()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(Appointment::NAME, id))?;

    Ok(axum::Json(AppointmentResponse::from(appointment)))
}

#[utoipa::path(
    put,
    path = "/v1/appointments/{id}",
    params(
        ("id" = i64, Path, description = "Appointment ID")
    ),
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentResponse),
        (status = 400, description = "Bad date or unknown dentist/patient", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "appointments"
)]
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<AppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = state
        .db
        .appointment_service()
        .update(body.into_dto(Some(id)))
        .await?;

    Ok(axum::Json(AppointmentResponse::from(appointment)))
}

#[utoipa::path(
    delete,
    path = "/v1/appointments/{id}",
    params(
        ("id" = i64, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Appointment deleted (or never existed)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "appointments"
)]
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.appointment_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
