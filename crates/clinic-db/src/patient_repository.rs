use chrono::NaiveDate;
use clinic_core::error::AppError;
use clinic_core::models::{Address, Patient};
use clinic_core::traits::{Entity, Repository};
use sqlx::{PgPool, Pool, Postgres};

const PATIENT_COLUMNS: &str =
    "id, name, last_name, card_identity, admission_date, email, street, number, location, province";

/// Repository for patient persistence in PostgreSQL.
///
/// The embedded [`Address`] is stored flattened in the `patients` table.
#[derive(Clone)]
pub struct PatientRepository {
    pool: Pool<Postgres>,
}

impl PatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct PatientRow {
    id: i64,
    name: String,
    last_name: String,
    card_identity: String,
    admission_date: NaiveDate,
    email: String,
    street: String,
    number: i32,
    location: String,
    province: String,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient {
            id: Some(row.id),
            name: row.name,
            last_name: row.last_name,
            card_identity: row.card_identity,
            admission_date: row.admission_date,
            email: row.email,
            address: Address {
                street: row.street,
                number: row.number,
                location: row.location,
                province: row.province,
            },
        }
    }
}

impl Repository for PatientRepository {
    type Entity = Patient;

    async fn save(&self, patient: &Patient) -> Result<Patient, AppError> {
        match patient.id {
            None => {
                let sql = format!(
                    r#"
                    INSERT INTO patients
                        (name, last_name, card_identity, admission_date, email,
                         street, number, location, province)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    RETURNING {PATIENT_COLUMNS}
                    "#
                );
                let row = sqlx::query_as::<_, PatientRow>(&sql)
                    .bind(&patient.name)
                    .bind(&patient.last_name)
                    .bind(&patient.card_identity)
                    .bind(patient.admission_date)
                    .bind(&patient.email)
                    .bind(&patient.address.street)
                    .bind(patient.address.number)
                    .bind(&patient.address.location)
                    .bind(&patient.address.province)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                Ok(row.into())
            }
            Some(id) => {
                let sql = format!(
                    r#"
                    UPDATE patients
                    SET name = $2, last_name = $3, card_identity = $4, admission_date = $5,
                        email = $6, street = $7, number = $8, location = $9, province = $10
                    WHERE id = $1
                    RETURNING {PATIENT_COLUMNS}
                    "#
                );
                let row = sqlx::query_as::<_, PatientRow>(&sql)
                    .bind(id)
                    .bind(&patient.name)
                    .bind(&patient.last_name)
                    .bind(&patient.card_identity)
                    .bind(patient.admission_date)
                    .bind(&patient.email)
                    .bind(&patient.address.street)
                    .bind(patient.address.number)
                    .bind(&patient.address.location)
                    .bind(&patient.address.province)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                row.map(Into::into)
                    .ok_or_else(|| AppError::not_found(Patient::NAME, id))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1");
        let row = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Patient>, AppError> {
        let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id");
        let rows = sqlx::query_as::<_, PatientRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM patients WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(exists)
    }
}
