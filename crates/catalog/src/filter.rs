//! Optional-filter model for product queries.
//!
//! Criteria compose as a logical AND of only the supplied predicates: an
//! unset criterion contributes nothing, so relaxing a filter can only grow
//! the result set. Each supplied criterion becomes one predicate closure;
//! stores either evaluate the closures directly (in-memory) or compile the
//! same filter into SQL (Postgres). Both must agree.

use crate::product::Product;

/// One compiled filter criterion.
pub type Predicate = Box<dyn Fn(&Product) -> bool + Send + Sync>;

/// Optional criteria for a product query.
///
/// `None`/unset fields are omitted from the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free-text search over name, description, and punchline
    /// (case-insensitive substring, OR across the three fields).
    pub search: Option<String>,
    /// Category set membership.
    pub category: Option<String>,
    /// Label set membership.
    pub label: Option<String>,
    /// Tag set membership.
    pub tag: Option<String>,
    /// Country-code set membership.
    pub country: Option<String>,
    /// Exact match on the remote flag.
    pub remote: Option<bool>,
}

impl ProductFilter {
    /// True when no criterion is supplied (the query returns everything).
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.label.is_none()
            && self.tag.is_none()
            && self.country.is_none()
            && self.remote.is_none()
    }

    /// Compile the supplied criteria into predicate closures.
    ///
    /// The returned list has one entry per supplied criterion; an empty
    /// filter compiles to an empty list (matches everything).
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates: Vec<Predicate> = Vec::new();

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            predicates.push(Box::new(move |p| search_matches(p, &term)));
        }
        if let Some(category) = self.category.clone() {
            predicates.push(Box::new(move |p| p.categories.contains(&category)));
        }
        if let Some(label) = self.label.clone() {
            predicates.push(Box::new(move |p| p.labels.contains(&label)));
        }
        if let Some(tag) = self.tag.clone() {
            predicates.push(Box::new(move |p| p.tags.contains(&tag)));
        }
        if let Some(country) = self.country.clone() {
            predicates.push(Box::new(move |p| p.countries.contains(&country)));
        }
        if let Some(remote) = self.remote {
            predicates.push(Box::new(move |p| p.is_remote == remote));
        }

        predicates
    }

    /// Evaluate the conjunction of all supplied criteria against a product.
    pub fn matches(&self, product: &Product) -> bool {
        self.predicates().iter().all(|p| p(product))
    }
}

/// Case-insensitive substring match across the three searchable text fields.
///
/// `term` must already be lowercased.
fn search_matches(product: &Product, term: &str) -> bool {
    product.program_name.to_lowercase().contains(term)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(term))
        || product
            .punchline
            .as_deref()
            .is_some_and(|p| p.to_lowercase().contains(term))
}
