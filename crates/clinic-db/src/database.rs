use clinic_core::{AppError, AppointmentService, CrudService};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::appointment_repository::AppointmentRepository;
use crate::config::DatabaseConfig;
use crate::dentist_repository::DentistRepository;
use crate::patient_repository::PatientRepository;

/// Central database facade: owns the connection pool, runs migrations,
/// and vends repositories and the services built on them.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        tracing::info!(max_connections = config.max_connections, "Connected to database");
        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub fn dentist_repo(&self) -> DentistRepository {
        DentistRepository::new(self.pool.clone())
    }

    pub fn patient_repo(&self) -> PatientRepository {
        PatientRepository::new(self.pool.clone())
    }

    pub fn appointment_repo(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.pool.clone())
    }

    pub fn dentist_service(&self) -> CrudService<DentistRepository> {
        CrudService::new(self.dentist_repo())
    }

    pub fn patient_service(&self) -> CrudService<PatientRepository> {
        CrudService::new(self.patient_repo())
    }

    pub fn appointment_service(
        &self,
    ) -> AppointmentService<AppointmentRepository, DentistRepository, PatientRepository> {
        AppointmentService::new(
            self.appointment_repo(),
            self.dentist_repo(),
            self.patient_repo(),
        )
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
