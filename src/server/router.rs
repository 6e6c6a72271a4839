//! Router construction

use super::handlers;
use crate::wordlists::WordStore;
use axum::{Router, routing::post};
use std::sync::Arc;
use tokio_util::task::TaskTracker;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WordStore>,
    /// Background appends, drained before the final persist
    pub appends: TaskTracker,
}

/// Build the router with its single route
///
/// Every append a request schedules is spawned on `appends`, so the caller
/// can `close()` and `wait()` on it once the server has stopped.
#[must_use]
pub fn build_router(store: Arc<WordStore>, appends: TaskTracker) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store, appends })
}
