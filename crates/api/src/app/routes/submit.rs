use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use launchdir_catalog::ProgramForm;
use launchdir_core::ProductId;
use launchdir_store::OptionTable;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/", post(submit_program))
}

struct LogoUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Program submission: multipart form, authenticated.
///
/// Field names match the submission form; `countries` and `targetStage`
/// repeat, `images` carries the optional logo file. The upload-then-insert
/// sequence has no atomicity across the two steps: a logo whose insert
/// fails afterwards stays orphaned in the bucket.
pub async fn submit_program(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let mut form = ProgramForm::default();
    let mut echo: HashMap<String, String> = HashMap::new();
    let mut logo: Option<LogoUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_multipart",
                    err.to_string(),
                );
            }
        };

        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "images" {
            let file_name = field.file_name().map(str::to_string).unwrap_or_default();
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let bytes = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "invalid_multipart",
                        err.to_string(),
                    );
                }
            };
            // Browsers send an empty part when no file was chosen.
            if !file_name.is_empty() && !bytes.is_empty() {
                logo = Some(LogoUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = match field.text().await {
            Ok(value) => value,
            Err(err) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_multipart",
                    err.to_string(),
                );
            }
        };
        echo.insert(name.clone(), value.clone());

        match name.as_str() {
            "programName" => form.program_name = Some(value),
            "website" => form.website = Some(value),
            "programType" => form.program_type = Some(value),
            "financialSupport" => form.financial_support = Some(value),
            "programLength" => form.program_length = Some(value),
            "location" => form.location = Some(value),
            "countries" => form.countries.push(value),
            "isRemote" => form.is_remote = Some(matches!(value.as_str(), "true" | "on" | "1")),
            "focusArea" => form.focus_area = Some(value),
            "targetStage" => form.target_stage.push(value),
            "punchline" => form.punchline = Some(value),
            "description" => form.description = Some(value),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    let program = match form.validate() {
        Ok(program) => program,
        Err(issues) => {
            tracing::warn!(count = issues.len(), "program form validation failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(dto::FormState::invalid(Some(echo), &issues)),
            )
                .into_response();
        }
    };

    let mut logo_src = None;
    if let Some(upload) = logo {
        let ext = upload.file_name.rsplit('.').next().unwrap_or("bin");
        let path = format!(
            "{}/{}.{}",
            slugify(&program.program_name),
            Utc::now().timestamp_millis(),
            ext
        );
        match services
            .logos()
            .upload(&path, upload.bytes, &upload.content_type)
            .await
        {
            Ok(()) => {
                let url = services.logos().public_url(&path);
                tracing::info!(%url, "logo file uploaded");
                logo_src = Some(url);
            }
            Err(err) => {
                tracing::error!(error = %err, "error uploading logo file");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(dto::FormState::failure(err.to_string())),
                )
                    .into_response();
            }
        }
    }

    // Register the derived option value so the filter controls pick it up.
    // Best-effort: a failure here never blocks the submission.
    for table in [OptionTable::Categories, OptionTable::Labels, OptionTable::Tags] {
        if let Err(err) = services
            .options()
            .insert_if_absent(table, &program.program_type)
            .await
        {
            tracing::warn!(error = %err, table = table.table_name(), "error registering filter option");
        }
    }

    let product = program.into_product(
        ProductId::new(),
        principal.user_id(),
        logo_src,
        Utc::now(),
    );

    match services.products().insert(product).await {
        Ok(product) => {
            services.invalidate_path("/");
            services.invalidate_tag("program-filters");
            (
                StatusCode::CREATED,
                Json(dto::FormState::created(
                    "Program submitted successfully",
                    product.id,
                )),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "error inserting program");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(dto::FormState::failure(err.to_string())),
            )
                .into_response()
        }
    }
}

/// Storage paths are namespaced by program name; keep them URL-safe.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
