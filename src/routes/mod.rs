use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    assets::AssetsService,
    showcase::Showcase,
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod index;

pub use contact::FAILURE_MESSAGE;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: portfolio_contact::Command,
    pub showcase: Arc<Showcase>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/contact", post(contact::api))
        .route("/contact", post(contact::action))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

/// The router with the full middleware stack, as served.
pub fn app(app_state: AppState) -> Router {
    router(app_state)
        // no-cache for pages and the API, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
