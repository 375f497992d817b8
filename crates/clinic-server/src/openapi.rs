use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

/// Name under which the bearer scheme is registered and required.
pub const BEARER_SCHEME: &str = "bearerAuth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dental Clinic - Open API Documentation",
        version = "1.0",
        description = "API documentation for the Dental Clinic application"
    ),
    paths(
        crate::routes::dentists::create_dentist,
        crate::routes::dentists::list_dentists,
        crate::routes::dentists::get_dentist,
        crate::routes::dentists::update_dentist,
        crate::routes::dentists::delete_dentist,
        crate::routes::patients::create_patient,
        crate::routes::patients::list_patients,
        crate::routes::patients::get_patient,
        crate::routes::patients::update_patient,
        crate::routes::patients::delete_patient,
        crate::routes::appointments::create_appointment,
        crate::routes::appointments::list_appointments,
        crate::routes::appointments::get_appointment,
        crate::routes::appointments::update_appointment,
        crate::routes::appointments::delete_appointment,
        crate::routes::system::health,
    ),
    components(schemas(
        crate::dto::DentistRequest,
        crate::dto::DentistResponse,
        crate::dto::DentistListResponse,
        crate::dto::AddressBody,
        crate::dto::PatientRequest,
        crate::dto::PatientResponse,
        crate::dto::PatientListResponse,
        crate::dto::AppointmentRequest,
        crate::dto::AppointmentResponse,
        crate::dto::AppointmentListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "dentists", description = "Dentist management"),
        (name = "patients", description = "Patient management"),
        (name = "appointments", description = "Appointment booking"),
        (name = "system", description = "Health and system status"),
    ),
    security(("bearerAuth" = [])),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds the JWT bearer security scheme to the OpenAPI document.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_SCHEME,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT authentication"))
                        .build(),
                ),
            );
        }
    }
}
