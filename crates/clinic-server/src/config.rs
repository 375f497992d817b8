use clinic_core::AppError;

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `CLINIC_JWT_SECRET` (required, non-empty)
    /// - `CLINIC_SERVER_PORT` (optional, defaults to 8080)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("CLINIC_JWT_SECRET").ok().as_deref(),
            std::env::var("CLINIC_SERVER_PORT").ok().as_deref(),
        )
    }

    fn from_values(secret: Option<&str>, port: Option<&str>) -> Result<Self, AppError> {
        let jwt_secret = match secret {
            Some(secret) if !secret.trim().is_empty() => secret.to_string(),
            _ => {
                return Err(AppError::ConfigError(
                    "CLINIC_JWT_SECRET must be set to a non-empty value".into(),
                ));
            }
        };

        let port = match port {
            None => 8080,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CLINIC_SERVER_PORT '{raw}'"))
            })?,
        };

        Ok(Self { port, jwt_secret })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
