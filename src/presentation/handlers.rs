// HTTP request handlers
use crate::application::controller::Trigger;
use crate::domain::selection::{PayloadRange, SelectionState, SiteSelection};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::plotly_mapper::updates_to_figures;
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FiguresQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub trigger: Trigger,
    pub state: SelectionState,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.to_string())
}

/// Static control tree
pub async fn get_layout(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    match json_response(state.layout.as_ref(), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Every figure for one selection; missing parameters fall back to the
/// initial selection
pub async fn get_figures(
    query: Result<Query<FiguresQuery>, QueryRejection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let initial = state.controller.initial_state()?;
    let site = query
        .site
        .as_deref()
        .map(SiteSelection::parse)
        .unwrap_or(initial.site);
    let range = PayloadRange::new(
        query.low.unwrap_or(initial.payload_range.low()),
        query.high.unwrap_or(initial.payload_range.high()),
    )?;

    let snapshot = SelectionState::new(site, range);
    let figures = updates_to_figures(state.controller.render_all(&snapshot));

    Ok(json_response(&figures, accepts_brotli(&headers))
        .await
        .unwrap_or_else(|status| status.into_response()))
}

/// Recompute the charts bound to the control that changed
pub async fn post_update(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    request: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let updates = state.controller.dispatch(request.trigger, &request.state);
    let figures = updates_to_figures(updates);

    Ok(json_response(&figures, accepts_brotli(&headers))
        .await
        .unwrap_or_else(|status| status.into_response()))
}
