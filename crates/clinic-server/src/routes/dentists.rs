use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use clinic_core::{AppError, Dentist, Entity};

use crate::dto::{DentistListResponse, DentistRequest, DentistResponse, ErrorResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/v1/dentists",
    request_body = DentistRequest,
    responses(
        (status = 201, description = "Dentist created", body = DentistResponse),
        (status = 400, description = "Invalid dentist", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "dentists"
)]
pub async fn create_dentist(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<DentistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dentist = state
        .db
        .dentist_service()
        .save(body.into_dentist(None))
        .await?;

    Ok((StatusCode::CREATED, axum::Json(DentistResponse::from(dentist))))
}

#[utoipa::path(
    get,
    path = "/v1/dentists",
    responses(
        (status = 200, description = "All dentists", body = DentistListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "dentists"
)]
pub async fn list_dentists(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let dentists = state.db.dentist_service().find_all().await?;
    let total = dentists.len();

    let response = DentistListResponse {
        dentists: dentists.into_iter().map(DentistResponse::from).collect(),
        total,
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/dentists/{id}",
    params(
        ("id" = i64, Path, description = "Dentist ID")
    ),
    responses(
        (status = 200, description = "Dentist details", body = DentistResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "dentists"
)]
pub async fn get_dentist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dentist = state
        .db
        .dentist_service()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(Dentist::NAME, id))?;

    Ok(axum::Json(DentistResponse::from(dentist)))
}

#[utoipa::path(
    put,
    path = "/v1/dentists/{id}",
    params(
        ("id" = i64, Path, description = "Dentist ID")
    ),
    request_body = DentistRequest,
    responses(
        (status = 200, description = "Dentist updated", body = DentistResponse),
        (status = 400, description = "Invalid dentist", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "dentists"
)]
pub async fn update_dentist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<DentistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dentist = state
        .db
        .dentist_service()
        .update(body.into_dentist(Some(id)))
        .await?;

    Ok(axum::Json(DentistResponse::from(dentist)))
}

#[utoipa::path(
    delete,
    path = "/v1/dentists/{id}",
    params(
        ("id" = i64, Path, description = "Dentist ID")
    ),
    responses(
        (status = 204, description = "Dentist deleted (or never existed)"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
    tag = "dentists"
)]
pub async fn delete_dentist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.dentist_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
