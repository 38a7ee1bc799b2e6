//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: store wiring (Postgres or in-memory) + page-cache invalidation
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Store selection comes from the environment; see
/// [`services::build_services`].
pub async fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services().await);
    build_app_with_services(jwt_secret, services)
}

/// Build the router against explicitly constructed services (tests use this
/// to inject seeded in-memory stores).
pub fn build_app_with_services(jwt_secret: String, services: Arc<services::AppServices>) -> Router {
    let jwt = Arc::new(launchdir_auth::Hs256JwtValidator::new(
        jwt_secret.into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    // Only program submission requires an authenticated identity; the
    // directory itself is public.
    let protected = Router::new()
        .nest("/submit", routes::submit::router())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/events", get(routes::system::events))
        .nest("/filters", routes::filters::router())
        .nest("/products", routes::products::router())
        .nest("/reviews", routes::reviews::router())
        .merge(protected)
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
