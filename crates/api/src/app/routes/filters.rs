use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_filters))
}

/// The four filter option lists. Fail-soft: a backing-store error yields
/// four empty lists, never an error response.
pub async fn get_filters(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.filter_options().await)
}
