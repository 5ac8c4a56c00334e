// HTTP request handlers
use crate::application::dashboard_view::DashboardView;
use crate::infrastructure::http_response::{
    html_chunk, html_stream_response, json_error_response, json_relay_response,
};
use crate::presentation::app_state::AppState;
use crate::presentation::templates::{render_page_close, render_page_open};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

const PROXY_FAILURE: &str = "Failed to fetch dashboard data";

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Anything that is not a page number falls back to the first page
    pub fn requested_page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/v1/dashboard", get(proxy_dashboard))
        .route("/healthz", get(health_check))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Mount a dashboard view and stream its page.
///
/// The spinner goes out immediately; the settled fragment follows once the
/// fetch resolves. If the client goes away first, the body stream is dropped
/// together with the view, which aborts its fetch.
pub async fn dashboard_page(
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let requested_page = query.requested_page();
    let mut view = DashboardView::mount(state.source.clone());

    let chunks = async_stream::stream! {
        yield html_chunk(render_page_open(view.state()));

        let settled = view.settle().await;
        yield html_chunk(render_page_close(settled, requested_page));
    };

    html_stream_response(chunks)
}

/// Relay the upstream dashboard JSON untouched
pub async fn proxy_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.source.fetch_raw().await {
        Ok(body) => match json_relay_response(body) {
            Ok(response) => response,
            Err(status) => json_error_response(status, PROXY_FAILURE),
        },
        Err(e) => {
            tracing::error!("Error fetching dashboard data: {}", e);
            json_error_response(StatusCode::INTERNAL_SERVER_ERROR, PROXY_FAILURE)
        }
    }
}
