mod api;

use crate::AppState;
use crate::Config;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::services::ServeFile;
use tower_http::trace::DefaultMakeSpan;
use tower_http::trace::DefaultOnFailure;
use tower_http::trace::DefaultOnRequest;
use tower_http::trace::DefaultOnResponse;
use tower_http::trace::TraceLayer;

pub fn routes(config: &Config, app_state: Arc<AppState>) -> anyhow::Result<Router> {
    let static_file_dir = std::fs::canonicalize(&config.public_directory)
        .context("failed to canonicalize static file dir")?;
    let index_html = static_file_dir.join("index.html");

    let serve_dir = ServeDir::new(static_file_dir).not_found_service(ServeFile::new(index_html));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO))
        .on_failure(DefaultOnFailure::new().level(tracing::Level::ERROR));

    Ok(Router::new()
        .nest("/api", self::api::routes())
        .with_state(app_state)
        .fallback_service(serve_dir)
        .layer(trace_layer))
}
