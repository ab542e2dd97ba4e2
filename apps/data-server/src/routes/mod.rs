pub mod data;

use axum::{response::Redirect, routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/get-data/", get(data::handle_get_data))
        .route("/get-data", get(|| async { Redirect::permanent("/get-data/") }))
        .with_state(state)
}
