use clinic_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,
}
