//! HTTP API application wiring (Axum router + service wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: infrastructure wiring (record provider, chat responder)
//! - `routes/`: HTTP routes + handlers (one file per dashboard area)
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Extension;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &Config) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(config).await?);
    Ok(router_with_services(services, &config.allowed_origins))
}

/// Router construction separated from service wiring so tests can inject a
/// pre-seeded record store.
pub fn router_with_services(
    services: Arc<services::AppServices>,
    allowed_origins: &[String],
) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    routes::router().layer(Extension(services)).layer(cors)
}
