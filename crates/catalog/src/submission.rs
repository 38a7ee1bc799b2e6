//! Program submission payload and validation.
//!
//! Mirrors the submission form: a bag of raw form fields is validated as a
//! whole, collecting one [`FieldIssue`] per failing field, and only then
//! turned into a product row. Required fields: program name, website (must
//! be an http/https URL), program type, at least one country, and at least
//! one target stage.

use chrono::{DateTime, Utc};

use launchdir_core::{FieldIssue, ProductId, UserId};

use crate::product::Product;

const PUNCHLINE_MAX_CHARS: usize = 30;

/// Raw, unvalidated submission form fields.
///
/// Everything is optional at this stage; `validate` decides what is actually
/// required. Multi-value fields (`countries`, `target_stage`) collect all
/// occurrences of their form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramForm {
    pub program_name: Option<String>,
    pub website: Option<String>,
    pub program_type: Option<String>,
    pub financial_support: Option<String>,
    pub program_length: Option<String>,
    pub location: Option<String>,
    pub countries: Vec<String>,
    pub is_remote: Option<bool>,
    pub focus_area: Option<String>,
    pub target_stage: Vec<String>,
    pub punchline: Option<String>,
    pub description: Option<String>,
}

/// A validated program submission, ready to become a product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgram {
    pub program_name: String,
    pub website: String,
    pub program_type: String,
    pub financial_support: Option<String>,
    pub program_length: Option<String>,
    pub location: Option<String>,
    pub countries: Vec<String>,
    pub is_remote: bool,
    pub focus_area: Option<String>,
    pub target_stage: Vec<String>,
    pub punchline: Option<String>,
    pub description: Option<String>,
}

impl ProgramForm {
    /// Validate the whole form, collecting all field issues.
    ///
    /// String fields are trimmed; optional fields that trim to empty become
    /// `None` rather than empty strings.
    pub fn validate(&self) -> Result<NewProgram, Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let program_name = required_trimmed(
            &self.program_name,
            "programName",
            "Program name is required.",
            &mut issues,
        );

        let website = required_trimmed(&self.website, "website", "Website is required.", &mut issues);
        if let Some(url) = &website {
            if !is_http_url(url) {
                issues.push(FieldIssue::new("website", "Invalid URL."));
            }
        }

        let program_type = required_trimmed(
            &self.program_type,
            "programType",
            "Program type is required.",
            &mut issues,
        );

        let countries = non_empty_values(&self.countries);
        if countries.is_empty() {
            issues.push(FieldIssue::new(
                "countries",
                "At least one country is required.",
            ));
        }

        let target_stage = non_empty_values(&self.target_stage);
        if target_stage.is_empty() {
            issues.push(FieldIssue::new(
                "targetStage",
                "At least one target stage is required.",
            ));
        }

        let punchline = optional_trimmed(&self.punchline);
        if let Some(p) = &punchline {
            if p.chars().count() > PUNCHLINE_MAX_CHARS {
                issues.push(FieldIssue::new(
                    "punchline",
                    format!("Punchline must be {PUNCHLINE_MAX_CHARS} characters or fewer."),
                ));
            }
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(NewProgram {
            program_name: program_name.unwrap(),
            website: website.unwrap(),
            program_type: program_type.unwrap(),
            financial_support: optional_trimmed(&self.financial_support),
            program_length: optional_trimmed(&self.program_length),
            location: optional_trimmed(&self.location),
            countries,
            is_remote: self.is_remote.unwrap_or(false),
            focus_area: optional_trimmed(&self.focus_area),
            target_stage,
            punchline,
            description: optional_trimmed(&self.description),
        })
    }
}

impl NewProgram {
    /// Build the product row for this submission.
    ///
    /// Tags, labels, and categories are derived from the program type; this
    /// submission path approves the product immediately.
    pub fn into_product(
        self,
        id: ProductId,
        user_id: UserId,
        logo_src: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Product {
        let derived = vec![self.program_type.clone()];
        Product {
            id,
            program_name: self.program_name,
            website: self.website,
            program_type: self.program_type,
            financial_support: self.financial_support,
            program_length: self.program_length,
            location: self.location,
            focus_area: self.focus_area,
            target_stage: self.target_stage,
            countries: self.countries,
            is_remote: self.is_remote,
            punchline: self.punchline,
            description: self.description,
            logo_src,
            user_id,
            view_count: 0,
            approved: true,
            categories: derived.clone(),
            labels: derived.clone(),
            tags: derived,
            featured: false,
            created_at,
        }
    }
}

fn required_trimmed(
    value: &Option<String>,
    field: &'static str,
    message: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            issues.push(FieldIssue::new(field, message));
            None
        }
    }
}

fn optional_trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_empty_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts absolute http/https URLs with a non-empty host.
fn is_http_url(value: &str) -> bool {
    let rest = match value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty() && !host.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ProgramForm {
        ProgramForm {
            program_name: Some("Climate Builders".to_string()),
            website: Some("https://climatebuilders.example".to_string()),
            program_type: Some("accelerator".to_string()),
            countries: vec!["DE".to_string()],
            target_stage: vec!["pre-seed".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_validates() {
        let program = complete_form().validate().unwrap();
        assert_eq!(program.program_name, "Climate Builders");
        assert_eq!(program.countries, vec!["DE"]);
        assert!(!program.is_remote);
    }

    #[test]
    fn all_missing_required_fields_are_reported_at_once() {
        let issues = ProgramForm::default().validate().unwrap_err();
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert!(fields.contains(&"programName"));
        assert!(fields.contains(&"website"));
        assert!(fields.contains(&"programType"));
        assert!(fields.contains(&"countries"));
        assert!(fields.contains(&"targetStage"));
    }

    #[test]
    fn website_must_be_an_http_url() {
        let mut form = complete_form();
        form.website = Some("ftp://example.com".to_string());
        let issues = form.validate().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "website");
        assert_eq!(issues[0].message, "Invalid URL.");
    }

    #[test]
    fn whitespace_only_required_field_is_rejected() {
        let mut form = complete_form();
        form.program_name = Some("   ".to_string());
        let issues = form.validate().unwrap_err();
        assert_eq!(issues[0].field, "programName");
    }

    #[test]
    fn whitespace_country_entries_do_not_count() {
        let mut form = complete_form();
        form.countries = vec!["  ".to_string(), "".to_string()];
        let issues = form.validate().unwrap_err();
        assert_eq!(issues[0].field, "countries");
    }

    #[test]
    fn overlong_punchline_is_rejected() {
        let mut form = complete_form();
        form.punchline = Some("x".repeat(PUNCHLINE_MAX_CHARS + 1));
        let issues = form.validate().unwrap_err();
        assert_eq!(issues[0].field, "punchline");
    }

    #[test]
    fn optional_fields_trim_to_none() {
        let mut form = complete_form();
        form.description = Some("   ".to_string());
        form.location = Some(" Berlin ".to_string());
        let program = form.validate().unwrap();
        assert_eq!(program.description, None);
        assert_eq!(program.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn product_derives_option_sets_from_program_type() {
        let program = complete_form().validate().unwrap();
        let product = program.into_product(
            launchdir_core::ProductId::new(),
            launchdir_core::UserId::new(),
            None,
            chrono::Utc::now(),
        );
        assert_eq!(product.tags, vec!["accelerator"]);
        assert_eq!(product.labels, vec!["accelerator"]);
        assert_eq!(product.categories, vec!["accelerator"]);
        assert!(product.approved);
        assert_eq!(product.view_count, 0);
        assert_eq!(product.logo_src, None);
    }
}
