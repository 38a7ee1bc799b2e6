use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use launchdir_catalog::ProductFilter;
use launchdir_core::FieldIssue;

// -------------------------
// Request DTOs
// -------------------------

/// Query-string parameters of `GET /products`.
///
/// Everything is optional; blank values behave like absent ones so that
/// `?search=&category=` selects nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub label: Option<String>,
    pub tag: Option<String>,
    pub country: Option<String>,
    /// `"true"`/`"false"`; anything else is treated as unset.
    pub remote: Option<String>,
}

impl ProductQueryParams {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter {
            search: non_blank(self.search),
            category: non_blank(self.category),
            label: non_blank(self.label),
            tag: non_blank(self.tag),
            country: non_blank(self.country),
            remote: match self.remote.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Form body of `POST /reviews` (field names match the submission form).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFormBody {
    pub product_id: Option<String>,
    pub program_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
    pub program_year: Option<String>,
    pub experience: Option<String>,
    pub proof: Option<String>,
}

impl ReviewFormBody {
    pub fn into_form(self) -> launchdir_reviews::ReviewForm {
        launchdir_reviews::ReviewForm {
            product_id: self.product_id,
            program_name: self.program_name,
            reviewer_name: self.reviewer_name,
            reviewer_email: self.reviewer_email,
            program_year: self.program_year,
            experience: self.experience,
            proof: self.proof,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Outcome of a form submission, mirrored back to the form UI.
#[derive(Debug, Serialize)]
pub struct FormState {
    pub message: String,
    /// Submitted values, echoed back so the form can re-render them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
    pub issues: Vec<String>,
    /// Identifier of the created row on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FormState {
    pub fn created(message: impl Into<String>, id: impl ToString) -> Self {
        Self {
            message: message.into(),
            fields: None,
            issues: Vec::new(),
            id: Some(id.to_string()),
        }
    }

    pub fn invalid(fields: Option<HashMap<String, String>>, issues: &[FieldIssue]) -> Self {
        Self {
            message: "Invalid form data".to_string(),
            fields,
            issues: issues.iter().map(|i| i.message.clone()).collect(),
            id: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: format!("Submission failed: {message}"),
            fields: None,
            issues: vec![message],
            id: None,
        }
    }
}
