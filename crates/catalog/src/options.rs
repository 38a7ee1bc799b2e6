//! Filter option sets offered by the directory's filter controls.
//!
//! These are derived projections of the option tables, recomputed on each
//! read. The only invariants are uniqueness and non-emptiness of the
//! surfaced values.

use serde::{Deserialize, Serialize};

/// A country offered as a filter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// ISO country code, used as the filter value.
    pub code: String,
}

/// The four option lists backing the directory's filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub labels: Vec<String>,
    pub tags: Vec<String>,
    pub countries: Vec<Country>,
}

impl FilterOptions {
    /// The fail-soft value: four empty lists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shape raw table reads into surfaced option lists: duplicates removed
    /// (first occurrence wins), empty values dropped. Countries dedupe by
    /// code and require both name and code.
    pub fn from_parts(
        categories: Vec<String>,
        labels: Vec<String>,
        tags: Vec<String>,
        countries: Vec<Country>,
    ) -> Self {
        Self {
            categories: unique_non_empty(categories),
            labels: unique_non_empty(labels),
            tags: unique_non_empty(tags),
            countries: unique_countries(countries),
        }
    }
}

fn unique_non_empty(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn unique_countries(countries: Vec<Country>) -> Vec<Country> {
    let mut out: Vec<Country> = Vec::with_capacity(countries.len());
    for country in countries {
        if country.name.trim().is_empty() || country.code.trim().is_empty() {
            continue;
        }
        if !out.iter().any(|c| c.code == country.code) {
            out.push(country);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_removed_preserving_first_occurrence() {
        let options = FilterOptions::from_parts(
            vec![
                "accelerator".to_string(),
                "incubator".to_string(),
                "accelerator".to_string(),
            ],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(options.categories, vec!["accelerator", "incubator"]);
    }

    #[test]
    fn empty_and_whitespace_values_are_dropped() {
        let options = FilterOptions::from_parts(
            vec![],
            vec!["".to_string(), "  ".to_string(), "fellowship".to_string()],
            vec![],
            vec![],
        );
        assert_eq!(options.labels, vec!["fellowship"]);
    }

    #[test]
    fn countries_dedupe_by_code_and_require_both_fields() {
        let options = FilterOptions::from_parts(
            vec![],
            vec![],
            vec![],
            vec![
                Country {
                    name: "Germany".to_string(),
                    code: "DE".to_string(),
                },
                Country {
                    name: "Deutschland".to_string(),
                    code: "DE".to_string(),
                },
                Country {
                    name: "".to_string(),
                    code: "FR".to_string(),
                },
            ],
        );
        assert_eq!(options.countries.len(), 1);
        assert_eq!(options.countries[0].name, "Germany");
    }
}
