use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use clinic_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims carried by bearer tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

/// Longest lifetime a token may be issued for: one year.
pub const MAX_TTL_HOURS: u64 = 24 * 365;

/// Sign an HS256 token for `subject` valid for `ttl_hours`.
pub fn issue_token(
    subject: &str,
    role: &str,
    secret: &str,
    ttl_hours: u64,
) -> Result<String, AppError> {
    if !(1..=MAX_TTL_HOURS).contains(&ttl_hours) {
        return Err(AppError::Validation(format!(
            "Token lifetime must be between 1 and {MAX_TTL_HOURS} hours, got {ttl_hours}"
        )));
    }

    let now = Utc::now().timestamp() as usize;
    let exp = (ttl_hours as usize)
        .checked_mul(3600)
        .and_then(|ttl| now.checked_add(ttl))
        .ok_or_else(|| AppError::Validation("Token expiry overflows".into()))?;
    let claims = Claims {
        sub: subject.to_string(),
        role: role.to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::ConfigError(format!("Failed to sign token: {e}")))
}

/// Verify signature and expiry of an HS256 token.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {e}")))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Missing or invalid Authorization header. Expected: Bearer <jwt>".into(),
            )
        })
}

/// Middleware that validates `Authorization: Bearer <jwt>`. Any valid token
/// grants access; the role claim is informational.
pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let claims = match bearer_token(request.headers())
        .and_then(|token| verify_token(token, &state.jwt_secret))
    {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, path = %request.uri().path(), "Rejected request");
            return ApiError(err).into_response();
        }
    };

    tracing::debug!(sub = %claims.sub, role = %claims.role, "Authenticated");
    next.run(request).await
}
