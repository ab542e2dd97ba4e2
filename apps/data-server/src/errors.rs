use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
///
/// Every variant surfaces to the caller as a bare 500; the detail only goes
/// to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Environment variable 'FASTN_DB_URL' is not set")]
    MissingDatabaseUrl,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Column {column} holds a {type_name} value with no JSON representation")]
    UnsupportedValue { column: usize, type_name: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingDatabaseUrl => tracing::error!("Configuration error: {self}"),
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::UnsupportedValue { .. } => tracing::error!("Encoding error: {self}"),
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
