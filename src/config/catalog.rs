//! Scoring catalog: the table of combinations a scorer can credit.
//!
//! The engine never interprets an entry beyond its point value.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One scorable combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOption {
    pub label: String,
    pub value: u32,
}

/// A titled group of options, e.g. "Three of a Kind".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringCategory {
    pub title: String,
    pub options: Vec<ScoringOption>,
}

/// Ordered catalog of scoring categories.
///
/// # Example
///
/// ```rust
/// use farkle_house::config::ScoringCatalog;
///
/// let catalog = ScoringCatalog::house();
/// assert_eq!(catalog.value_of("3 x 5s"), Some(500));
/// assert_eq!(catalog.value_of("Straight 1 - 6"), Some(1500));
/// assert_eq!(catalog.value_of("7 of a Kind"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringCatalog {
    categories: Vec<ScoringCategory>,
}

impl Default for ScoringCatalog {
    fn default() -> Self {
        Self::house()
    }
}

fn category(title: &str, options: &[(&str, u32)]) -> ScoringCategory {
    ScoringCategory {
        title: title.to_string(),
        options: options
            .iter()
            .map(|&(label, value)| ScoringOption {
                label: label.to_string(),
                value,
            })
            .collect(),
    }
}

impl ScoringCatalog {
    pub fn new(categories: Vec<ScoringCategory>) -> Self {
        Self { categories }
    }

    /// The house scoring table.
    pub fn house() -> Self {
        Self::new(vec![
            category("Singles", &[("1 x (1)", 100), ("1 x (5)", 50)]),
            category(
                "Three of a Kind",
                &[
                    ("3 x 1s", 300),
                    ("3 x 2s", 200),
                    ("3 x 3s", 300),
                    ("3 x 4s", 400),
                    ("3 x 5s", 500),
                    ("3 x 6s", 600),
                ],
            ),
            category(
                "Combos",
                &[
                    ("Straight 1 - 6", 1500),
                    ("Three Pairs", 1500),
                    ("4 + Pair", 1500),
                    ("Two Triplets", 2500),
                    ("4 of a Kind", 1000),
                    ("5 of a Kind", 2000),
                    ("6 of a Kind", 3000),
                ],
            ),
        ])
    }

    /// Parse a catalog from a JSON array of categories.
    ///
    /// Only the shape is checked here; content rules are enforced when the
    /// catalog is handed to [`RulesBuilder`](super::RulesBuilder).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Catalog(e.to_string()))
    }

    pub fn categories(&self) -> &[ScoringCategory] {
        &self.categories
    }

    /// Every option across all categories, in table order.
    pub fn options(&self) -> impl Iterator<Item = &ScoringOption> {
        self.categories.iter().flat_map(|c| c.options.iter())
    }

    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.options().find(|o| o.label == label).map(|o| o.value)
    }

    pub fn is_empty(&self) -> bool {
        self.options().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_table_has_three_categories() {
        let catalog = ScoringCatalog::house();
        let titles: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Singles", "Three of a Kind", "Combos"]);
        assert_eq!(catalog.options().count(), 15);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn from_json_reads_categories() {
        let json = r#"[
            {"title": "Singles", "options": [{"label": "One", "value": 100}]},
            {"title": "Big", "options": [{"label": "Six ones", "value": 3000}]}
        ]"#;
        let catalog = ScoringCatalog::from_json(json).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.value_of("Six ones"), Some(3000));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = ScoringCatalog::from_json(r#"{"title": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
    }

    #[test]
    fn empty_catalog_is_empty() {
        assert!(ScoringCatalog::new(Vec::new()).is_empty());
        assert!(ScoringCatalog::new(vec![category("Nothing", &[])]).is_empty());
    }
}
