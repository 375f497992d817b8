use thiserror::Error;

/// Application-wide error types for the clinic backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// The targeted entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Input rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing, malformed or rejected credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Returns true if the error was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound { .. } | AppError::Validation(_) | AppError::Unauthorized(_)
        )
    }
}
