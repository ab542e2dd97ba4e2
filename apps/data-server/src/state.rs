use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Holds configuration only; the store connection is opened per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
