pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::RfpStore;
use crate::handler::RfpHandler;
use crate::state::{AppState, SharedState};

pub fn build_app(store: Arc<dyn RfpStore>, config: &Config) -> Router {
    let state: SharedState = Arc::new(AppState {
        handler: RfpHandler::new(store, config.update_mode),
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.allowed_origins))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

/// Cross-origin policy for the browser front end.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) if value == "*" => {
                tracing::warn!("Ignoring wildcard CORS origin: credentials are allowed");
                None
            }
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn health() -> &'static str {
    "ok"
}
