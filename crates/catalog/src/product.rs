//! The product record: one listed program.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use launchdir_core::{ProductId, UserId};

/// A listed program (accelerator, incubator, fellowship).
///
/// Created once on submission; the only in-scope mutation afterwards is the
/// atomic view-count increment. Never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub program_name: String,
    pub website: String,
    pub program_type: String,
    pub financial_support: Option<String>,
    pub program_length: Option<String>,
    pub location: Option<String>,
    pub focus_area: Option<String>,
    /// Funding stages the program targets (e.g. "idea", "pre-seed").
    pub target_stage: Vec<String>,
    /// ISO country codes the program operates in.
    pub countries: Vec<String>,
    pub is_remote: bool,
    pub punchline: Option<String>,
    pub description: Option<String>,
    /// Public URL of the uploaded logo, if one was provided.
    pub logo_src: Option<String>,
    /// Submitting user.
    pub user_id: UserId,
    pub view_count: i64,
    pub approved: bool,
    pub categories: Vec<String>,
    pub labels: Vec<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}
