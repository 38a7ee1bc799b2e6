use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use launchdir_core::{ProductId, ReviewId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(submit_review))
}

pub async fn submit_review(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::ReviewFormBody>,
) -> axum::response::Response {
    let form = body.into_form();

    let new_review = match form.validate(Utc::now()) {
        Ok(review) => review,
        Err(issues) => {
            tracing::warn!(count = issues.len(), "review form validation failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(dto::FormState::invalid(None, &issues)),
            )
                .into_response();
        }
    };

    let review = new_review.into_review(ReviewId::new(), Utc::now());
    let product_id = review.product_id;

    match services.reviews().insert(review).await {
        Ok(review) => {
            services.invalidate_path(&format!("/products/{product_id}"));
            (
                StatusCode::CREATED,
                Json(dto::FormState::created(
                    "Review submitted successfully",
                    review.id,
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "error inserting review");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(dto::FormState::failure(err.to_string())),
            )
                .into_response()
        }
    }
}

/// Reviews for one product, newest first. Wired under `/products/:id/reviews`.
pub async fn list_for_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    let items = services.reviews_for_product(id).await;
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
