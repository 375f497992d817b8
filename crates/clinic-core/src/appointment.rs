use crate::error::AppError;
use crate::models::{Appointment, AppointmentDto, Dentist, Patient};
use crate::traits::{Entity, Repository};

/// Appointment use-cases, speaking [`AppointmentDto`] at the boundary.
///
/// Holds the dentist and patient repositories so writes can check that both
/// participants exist before an appointment references them.
#[derive(Clone)]
pub struct AppointmentService<A, D, P>
where
    A: Repository<Entity = Appointment>,
    D: Repository<Entity = Dentist>,
    P: Repository<Entity = Patient>,
{
    appointments: A,
    dentists: D,
    patients: P,
}

impl<A, D, P> AppointmentService<A, D, P>
where
    A: Repository<Entity = Appointment>,
    D: Repository<Entity = Dentist>,
    P: Repository<Entity = Patient>,
{
    pub fn new(appointments: A, dentists: D, patients: P) -> Self {
        Self {
            appointments,
            dentists,
            patients,
        }
    }

    /// Book a new appointment. Any id on the incoming DTO is ignored.
    pub async fn save(&self, dto: AppointmentDto) -> Result<AppointmentDto, AppError> {
        let mut appointment = Appointment::try_from(&dto)?;
        appointment.id = None;
        self.check_participants(&appointment).await?;

        let saved = self.appointments.save(&appointment).await?;
        tracing::info!(
            id = ?saved.id,
            dentist_id = saved.dentist_id,
            patient_id = saved.patient_id,
            "Appointment booked"
        );
        Ok(saved.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<AppointmentDto>, AppError> {
        Ok(self.appointments.find_by_id(id).await?.map(Into::into))
    }

    /// Reschedule or reassign an existing appointment.
    ///
    /// Fails when the DTO has no id, when the appointment does not exist, when
    /// the date does not parse, or when a referenced participant is missing.
    pub async fn update(&self, dto: AppointmentDto) -> Result<AppointmentDto, AppError> {
        let id = dto.id.ok_or_else(|| {
            AppError::Validation("Appointment id is required for update".into())
        })?;

        if !self.appointments.exists_by_id(id).await? {
            return Err(AppError::not_found(Appointment::NAME, id));
        }

        let appointment = Appointment::try_from(&dto)?;
        self.check_participants(&appointment).await?;

        let updated = self.appointments.save(&appointment).await?;
        tracing::info!(id, "Appointment updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.appointments.delete_by_id(id).await?;
        tracing::info!(id, "Appointment deleted");
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<AppointmentDto>, AppError> {
        let appointments = self.appointments.find_all().await?;
        Ok(appointments.into_iter().map(Into::into).collect())
    }

    async fn check_participants(&self, appointment: &Appointment) -> Result<(), AppError> {
        if !self.dentists.exists_by_id(appointment.dentist_id).await? {
            tracing::warn!(dentist_id = appointment.dentist_id, "Unknown dentist");
            return Err(AppError::Validation(format!(
                "Dentist {} does not exist",
                appointment.dentist_id
            )));
        }
        if !self.patients.exists_by_id(appointment.patient_id).await? {
            tracing::warn!(patient_id = appointment.patient_id, "Unknown patient");
            return Err(AppError::Validation(format!(
                "Patient {} does not exist",
                appointment.patient_id
            )));
        }
        Ok(())
    }
}
