use chrono::{NaiveDate, NaiveDateTime};

use crate::error::AppError;
use crate::traits::Entity;

/// Canonical output form of appointment dates.
pub const APPOINTMENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_TIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// Column widths in the migrations.
const NAME_MAX_LEN: usize = 100;
const CODE_MAX_LEN: usize = 50;
const EMAIL_MAX_LEN: usize = 255;
const STREET_MAX_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Dentist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dentist {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    /// Professional license ("matrícula").
    pub registration_number: String,
    /// Free text, empty when not given.
    pub specialty: String,
}

impl Dentist {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        registration_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            last_name: last_name.into(),
            registration_number: registration_number.into(),
            specialty: String::new(),
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }
}

impl Entity for Dentist {
    const NAME: &'static str = "Dentist";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), AppError> {
        require_person_name("name", &self.name)?;
        require_person_name("last_name", &self.last_name)?;

        let registration = &self.registration_number;
        require_non_empty("registration_number", registration)?;
        require_max_len("registration_number", registration, CODE_MAX_LEN)?;
        if !registration.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::Validation(
                "registration_number may only contain letters and digits".into(),
            ));
        }
        require_max_len("specialty", &self.specialty, NAME_MAX_LEN)
    }
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: i32,
    pub location: String,
    pub province: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    /// National identity document number.
    pub card_identity: String,
    pub admission_date: NaiveDate,
    pub email: String,
    pub address: Address,
}

impl Entity for Patient {
    const NAME: &'static str = "Patient";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), AppError> {
        require_person_name("name", &self.name)?;
        require_person_name("last_name", &self.last_name)?;
        require_non_empty("card_identity", &self.card_identity)?;
        require_max_len("card_identity", &self.card_identity, CODE_MAX_LEN)?;
        require_max_len("email", &self.email, EMAIL_MAX_LEN)?;
        if !is_plausible_email(&self.email) {
            return Err(AppError::Validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }

        let address = &self.address;
        require_max_len("address.street", &address.street, STREET_MAX_LEN)?;
        require_max_len("address.location", &address.location, NAME_MAX_LEN)?;
        require_max_len("address.province", &address.province, NAME_MAX_LEN)
    }
}

// ---------------------------------------------------------------------------
// Appointment
// ---------------------------------------------------------------------------

/// Persisted form of an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Option<i64>,
    pub dentist_id: i64,
    pub patient_id: i64,
    pub date: NaiveDateTime,
}

impl Entity for Appointment {
    const NAME: &'static str = "Appointment";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// Transport form of an appointment: participants by id, date as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDto {
    pub id: Option<i64>,
    pub dentist_id: i64,
    pub patient_id: i64,
    pub date: String,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            dentist_id: appointment.dentist_id,
            patient_id: appointment.patient_id,
            date: appointment
                .date
                .format(APPOINTMENT_DATE_FORMAT)
                .to_string(),
        }
    }
}

impl TryFrom<&AppointmentDto> for Appointment {
    type Error = AppError;

    fn try_from(dto: &AppointmentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            dentist_id: dto.dentist_id,
            patient_id: dto.patient_id,
            date: parse_appointment_date(&dto.date)?,
        })
    }
}

/// Parse an appointment date.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, the same with a space separator, or a
/// plain `YYYY-MM-DD` which is taken as midnight.
pub fn parse_appointment_date(raw: &str) -> Result<NaiveDateTime, AppError> {
    let raw = raw.trim();

    for format in DATE_TIME_INPUT_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid appointment date '{raw}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"
            ))
        })
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Limit in characters, which is how PostgreSQL sizes `VARCHAR(n)`.
fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Letters (including Spanish accented vowels and ñ) and spaces only.
fn require_person_name(field: &str, value: &str) -> Result<(), AppError> {
    require_non_empty(field, value)?;
    require_max_len(field, value, NAME_MAX_LEN)?;
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || "áéíóúÁÉÍÓÚñÑ".contains(c));
    if !valid {
        return Err(AppError::Validation(format!(
            "{field} may only contain letters"
        )));
    }
    Ok(())
}

fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
