pub mod appointment_repository;
pub mod config;
pub mod database;
pub mod dentist_repository;
pub mod patient_repository;

pub use appointment_repository::AppointmentRepository;
pub use config::DatabaseConfig;
pub use database::Database;
pub use dentist_repository::DentistRepository;
pub use patient_repository::PatientRepository;
