use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::require_jwt;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod appointments;
pub mod dentists;
pub mod patients;
pub mod system;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/v1/dentists",
            get(dentists::list_dentists).post(dentists::create_dentist),
        )
        .route(
            "/v1/dentists/{id}",
            get(dentists::get_dentist)
                .put(dentists::update_dentist)
                .delete(dentists::delete_dentist),
        )
        .route(
            "/v1/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/v1/patients/{id}",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/v1/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/v1/appointments/{id}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let public = Router::new()
        .route("/health", get(system::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}
