//! Review record and submission validation.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use launchdir_core::{FieldIssue, ProductId, ReviewId};

/// Reviews cannot predate this year.
const MIN_PROGRAM_YEAR: i32 = 1900;

/// A stored review. Immutable after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Denormalized program name, so review cards render without a join.
    pub program_name: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    /// Year the reviewer attended the program.
    pub program_year: i32,
    pub experience: String,
    pub proof: String,
    pub created_at: DateTime<Utc>,
}

/// Raw, unvalidated review form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub product_id: Option<String>,
    pub program_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub reviewer_email: Option<String>,
    /// Raw field value; parsed to a year during validation.
    pub program_year: Option<String>,
    pub experience: Option<String>,
    pub proof: Option<String>,
}

/// A validated review submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub program_name: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub program_year: i32,
    pub experience: String,
    pub proof: String,
}

impl ReviewForm {
    /// Validate the whole form, collecting all field issues.
    ///
    /// `now` bounds the program year (no reviews from the future); pass it in
    /// so validation stays deterministic in tests.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewReview, Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let product_id = match self.product_id.as_deref().map(str::parse::<ProductId>) {
            Some(Ok(id)) => Some(id),
            _ => {
                issues.push(FieldIssue::new("productId", "Invalid product id."));
                None
            }
        };

        let program_name = match self.program_name.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                issues.push(FieldIssue::new("programName", "Program name is required."));
                None
            }
        };

        let reviewer_name = match self.reviewer_name.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                issues.push(FieldIssue::new("reviewerName", "Name is required"));
                None
            }
        };

        let reviewer_email = match self.reviewer_email.as_deref().map(str::trim) {
            Some(v) if is_valid_email(v) => Some(v.to_string()),
            _ => {
                issues.push(FieldIssue::new("reviewerEmail", "Invalid email address"));
                None
            }
        };

        let current_year = now.year();
        let program_year = match self.program_year.as_deref().map(|v| v.trim().parse::<i32>()) {
            Some(Ok(year)) if (MIN_PROGRAM_YEAR..=current_year).contains(&year) => Some(year),
            _ => {
                issues.push(FieldIssue::new(
                    "programYear",
                    format!("Program year must be between {MIN_PROGRAM_YEAR} and {current_year}"),
                ));
                None
            }
        };

        let experience = match self.experience.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                issues.push(FieldIssue::new("experience", "Experience is required"));
                None
            }
        };

        let proof = match self.proof.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                issues.push(FieldIssue::new("proof", "Proof is required"));
                None
            }
        };

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(NewReview {
            product_id: product_id.unwrap(),
            program_name: program_name.unwrap(),
            reviewer_name: reviewer_name.unwrap(),
            reviewer_email: reviewer_email.unwrap(),
            program_year: program_year.unwrap(),
            experience: experience.unwrap(),
            proof: proof.unwrap(),
        })
    }
}

impl NewReview {
    pub fn into_review(self, id: ReviewId, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            product_id: self.product_id,
            program_name: self.program_name,
            reviewer_name: self.reviewer_name,
            reviewer_email: self.reviewer_email,
            program_year: self.program_year,
            experience: self.experience,
            proof: self.proof,
            created_at,
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, domain with a dot.
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    let (head, tail) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return false,
    };
    !head.is_empty() && !tail.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn complete_form() -> ReviewForm {
        ReviewForm {
            product_id: Some(ProductId::new().to_string()),
            program_name: Some("Climate Builders".to_string()),
            reviewer_name: Some("Sam Founder".to_string()),
            reviewer_email: Some("sam@startup.example".to_string()),
            program_year: Some("2024".to_string()),
            experience: Some("Great mentor network.".to_string()),
            proof: Some("https://linkedin.example/sam".to_string()),
        }
    }

    #[test]
    fn complete_form_validates() {
        let review = complete_form().validate(fixed_now()).unwrap();
        assert_eq!(review.program_year, 2024);
        assert_eq!(review.reviewer_name, "Sam Founder");
    }

    #[test]
    fn year_bounds_are_inclusive() {
        for year in ["1900", "2026"] {
            let mut form = complete_form();
            form.program_year = Some(year.to_string());
            assert!(form.validate(fixed_now()).is_ok(), "year {year} should pass");
        }
        for year in ["1899", "2027", "next year", ""] {
            let mut form = complete_form();
            form.program_year = Some(year.to_string());
            let issues = form.validate(fixed_now()).unwrap_err();
            assert_eq!(issues[0].field, "programYear", "year {year:?} should fail");
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plainaddress", "a@b", "@domain.example", "a b@c.example", "a@"] {
            let mut form = complete_form();
            form.reviewer_email = Some(email.to_string());
            let issues = form.validate(fixed_now()).unwrap_err();
            assert_eq!(issues[0].field, "reviewerEmail", "email {email:?} should fail");
        }
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let issues = ReviewForm::default().validate(fixed_now()).unwrap_err();
        assert_eq!(issues.len(), 7);
    }

    #[test]
    fn bad_product_id_is_a_field_issue() {
        let mut form = complete_form();
        form.product_id = Some("definitely-not-a-uuid".to_string());
        let issues = form.validate(fixed_now()).unwrap_err();
        assert_eq!(issues[0].field, "productId");
    }
}
