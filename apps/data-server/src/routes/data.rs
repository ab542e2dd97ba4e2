use axum::{extract::State, Json};
use tracing::info;

use crate::db::{fetch_first_row, resolve_database_path};
use crate::errors::AppError;
use crate::models::DataResponse;
use crate::state::AppState;

/// GET /get-data/
/// Returns the first row of `test` as `{"id": .., "data": ..}`, or `{}`.
pub async fn handle_get_data(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, AppError> {
    let url = state
        .config
        .database_url
        .as_deref()
        .ok_or(AppError::MissingDatabaseUrl)?;
    let path = resolve_database_path(url);

    let response = DataResponse::from(fetch_first_row(&path).await?);
    info!("Serving {response:?}");

    Ok(Json(response))
}
