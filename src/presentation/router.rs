// Route table for the dashboard
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_figures, get_layout, health_check, index, post_update};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, trace_requests: bool) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/layout", get(get_layout))
        .route("/api/figures", get(get_figures))
        .route("/api/update", post(post_update))
        .with_state(state);

    if trace_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
