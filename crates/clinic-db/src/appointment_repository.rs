use chrono::NaiveDateTime;
use clinic_core::error::AppError;
use clinic_core::models::Appointment;
use clinic_core::traits::{Entity, Repository};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for appointment persistence in PostgreSQL.
///
/// Participants are foreign keys with `ON DELETE CASCADE`; a write that
/// references a missing dentist or patient is a validation error.
#[derive(Clone)]
pub struct AppointmentRepository {
    pool: Pool<Postgres>,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Foreign-key violations mean a participant vanished between the service's
/// existence check and the write.
fn map_write_error(err: sqlx::Error) -> AppError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_foreign_key_violation() => AppError::Validation(
            "Appointment references a dentist or patient that does not exist".into(),
        ),
        _ => AppError::DatabaseError(err.to_string()),
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    id: i64,
    dentist_id: i64,
    patient_id: i64,
    date: NaiveDateTime,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: Some(row.id),
            dentist_id: row.dentist_id,
            patient_id: row.patient_id,
            date: row.date,
        }
    }
}

impl Repository for AppointmentRepository {
    type Entity = Appointment;

    async fn save(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        match appointment.id {
            None => {
                let row = sqlx::query_as::<_, AppointmentRow>(
                    r#"
                    INSERT INTO appointments (dentist_id, patient_id, date)
                    VALUES ($1, $2, $3)
                    RETURNING id, dentist_id, patient_id, date
                    "#,
                )
                .bind(appointment.dentist_id)
                .bind(appointment.patient_id)
                .bind(appointment.date)
                .fetch_one(&self.pool)
                .await
                .map_err(map_write_error)?;

                Ok(row.into())
            }
            Some(id) => {
                let row = sqlx::query_as::<_, AppointmentRow>(
                    r#"
                    UPDATE appointments
                    SET dentist_id = $2, patient_id = $3, date = $4
                    WHERE id = $1
                    RETURNING id, dentist_id, patient_id, date
                    "#,
                )
                .bind(id)
                .bind(appointment.dentist_id)
                .bind(appointment.patient_id)
                .bind(appointment.date)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_write_error)?;

                row.map(Into::into)
                    .ok_or_else(|| AppError::not_found(Appointment::NAME, id))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, dentist_id, patient_id, date FROM appointments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, dentist_id, patient_id, date FROM appointments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
