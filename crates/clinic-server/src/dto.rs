//! Request and response bodies. Entity payloads use camelCase field names,
//! matching the clinic front-end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clinic_core::models::{Address, AppointmentDto, Dentist, Patient};

// ---------------------------------------------------------------------------
// Dentists
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DentistRequest {
    pub name: String,
    pub last_name: String,
    /// Professional license number, letters and digits only
    pub registration_number: String,
    #[serde(default)]
    pub specialty: String,
}

impl DentistRequest {
    /// Surrounding whitespace is not part of any field.
    pub fn into_dentist(self, id: Option<i64>) -> Dentist {
        Dentist {
            id,
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            registration_number: self.registration_number.trim().to_string(),
            specialty: self.specialty.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DentistResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub registration_number: String,
    pub specialty: String,
}

impl From<Dentist> for DentistResponse {
    fn from(dentist: Dentist) -> Self {
        Self {
            // Stored entities always carry an id.
            id: dentist.id.unwrap_or_default(),
            name: dentist.name,
            last_name: dentist.last_name,
            registration_number: dentist.registration_number,
            specialty: dentist.specialty,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DentistListResponse {
    pub dentists: Vec<DentistResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressBody {
    pub street: String,
    pub number: i32,
    pub location: String,
    pub province: String,
}

impl From<AddressBody> for Address {
    fn from(body: AddressBody) -> Self {
        Self {
            street: body.street,
            number: body.number,
            location: body.location,
            province: body.province,
        }
    }
}

impl From<Address> for AddressBody {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            location: address.location,
            province: address.province,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequest {
    pub name: String,
    pub last_name: String,
    /// National identity document number
    pub card_identity: String,
    pub admission_date: NaiveDate,
    pub email: String,
    pub address: AddressBody,
}

impl PatientRequest {
    pub fn into_patient(self, id: Option<i64>) -> Patient {
        Patient {
            id,
            name: self.name,
            last_name: self.last_name,
            card_identity: self.card_identity,
            admission_date: self.admission_date,
            email: self.email,
            address: self.address.into(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub card_identity: String,
    pub admission_date: NaiveDate,
    pub email: String,
    pub address: AddressBody,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.unwrap_or_default(),
            name: patient.name,
            last_name: patient.last_name,
            card_identity: patient.card_identity,
            admission_date: patient.admission_date,
            email: patient.email,
            address: patient.address.into(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PatientListResponse {
    pub patients: Vec<PatientResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub dentist_id: i64,
    pub patient_id: i64,
    /// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`
    pub date: String,
}

impl AppointmentRequest {
    pub fn into_dto(self, id: Option<i64>) -> AppointmentDto {
        AppointmentDto {
            id,
            dentist_id: self.dentist_id,
            patient_id: self.patient_id,
            date: self.date,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i64,
    pub dentist_id: i64,
    pub patient_id: i64,
    /// Always `YYYY-MM-DDTHH:MM:SS`
    pub date: String,
}

impl From<AppointmentDto> for AppointmentResponse {
    fn from(dto: AppointmentDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            dentist_id: dto.dentist_id,
            patient_id: dto.patient_id,
            date: dto.date,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AppointmentListResponse {
    pub appointments: Vec<AppointmentResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
