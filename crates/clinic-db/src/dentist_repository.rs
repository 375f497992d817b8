use clinic_core::error::AppError;
use clinic_core::models::Dentist;
use clinic_core::traits::{Entity, Repository};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for dentist persistence in PostgreSQL.
#[derive(Clone)]
pub struct DentistRepository {
    pool: Pool<Postgres>,
}

impl DentistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct DentistRow {
    id: i64,
    name: String,
    last_name: String,
    registration_number: String,
    specialty: String,
}

impl From<DentistRow> for Dentist {
    fn from(row: DentistRow) -> Self {
        Dentist {
            id: Some(row.id),
            name: row.name,
            last_name: row.last_name,
            registration_number: row.registration_number,
            specialty: row.specialty,
        }
    }
}

impl Repository for DentistRepository {
    type Entity = Dentist;

    async fn save(&self, dentist: &Dentist) -> Result<Dentist, AppError> {
        match dentist.id {
            None => {
                let row = sqlx::query_as::<_, DentistRow>(
                    r#"
                    INSERT INTO dentists (name, last_name, registration_number, specialty)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, last_name, registration_number, specialty
                    "#,
                )
                .bind(&dentist.name)
                .bind(&dentist.last_name)
                .bind(&dentist.registration_number)
                .bind(&dentist.specialty)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                Ok(row.into())
            }
            Some(id) => {
                let row = sqlx::query_as::<_, DentistRow>(
                    r#"
                    UPDATE dentists
                    SET name = $2, last_name = $3, registration_number = $4, specialty = $5
                    WHERE id = $1
                    RETURNING id, name, last_name, registration_number, specialty
                    "#,
                )
                .bind(id)
                .bind(&dentist.name)
                .bind(&dentist.last_name)
                .bind(&dentist.registration_number)
                .bind(&dentist.specialty)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                row.map(Into::into)
                    .ok_or_else(|| AppError::not_found(Dentist::NAME, id))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError> {
        let row = sqlx::query_as::<_, DentistRow>(
            "SELECT id, name, last_name, registration_number, specialty FROM dentists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Dentist>, AppError> {
        let rows = sqlx::query_as::<_, DentistRow>(
            "SELECT id, name, last_name, registration_number, specialty FROM dentists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM dentists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM dentists WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(exists)
    }
}
