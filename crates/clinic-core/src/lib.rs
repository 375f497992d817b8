pub mod appointment;
pub mod error;
pub mod models;
pub mod service;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use appointment::AppointmentService;
pub use error::AppError;
pub use models::{Address, Appointment, AppointmentDto, Dentist, Patient};
pub use service::CrudService;
pub use traits::{Entity, Repository};
