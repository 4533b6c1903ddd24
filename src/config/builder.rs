//! Builder API for house rules.
//!
//! `build` runs every check and reports all problems at once rather than
//! stopping at the first one.

use super::catalog::ScoringCatalog;
use super::error::{ConfigError, RuleViolation};
use super::rules::{LastTurnFarkle, PassedPoints, Rules};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<RuleViolation>>;

fn require(ok: bool, violation: RuleViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Fluent builder for [`Rules`].
///
/// # Example
///
/// ```rust
/// use farkle_house::config::{LastTurnFarkle, Rules};
///
/// let rules = Rules::builder()
///     .winning_threshold(5_000)
///     .minimum_opening(350)
///     .last_turn_farkle(LastTurnFarkle::Reject)
///     .build()
///     .unwrap();
///
/// assert_eq!(rules.winning_threshold(), 5_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RulesBuilder {
    rules: Rules,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn winning_threshold(mut self, points: u32) -> Self {
        self.rules.winning_threshold = points;
        self
    }

    pub fn minimum_opening(mut self, points: u32) -> Self {
        self.rules.minimum_opening = points;
        self
    }

    pub fn last_turn_farkle(mut self, policy: LastTurnFarkle) -> Self {
        self.rules.last_turn_farkle = policy;
        self
    }

    pub fn passed_points(mut self, policy: PassedPoints) -> Self {
        self.rules.passed_points = policy;
        self
    }

    pub fn allow_decline(mut self, allow: bool) -> Self {
        self.rules.allow_decline = allow;
        self
    }

    /// Cap the undo history. `None` keeps every snapshot.
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.rules.history_limit = limit;
        self
    }

    pub fn catalog(mut self, catalog: ScoringCatalog) -> Self {
        self.rules.catalog = catalog;
        self
    }

    /// Validate and build, accumulating every violation.
    pub fn build(self) -> Result<Rules, ConfigError> {
        let rules = self.rules;
        let mut checks = vec![
            require(rules.winning_threshold > 0, RuleViolation::ZeroThreshold),
            require(
                rules.minimum_opening <= rules.winning_threshold,
                RuleViolation::OpeningAboveThreshold {
                    opening: rules.minimum_opening,
                    threshold: rules.winning_threshold,
                },
            ),
            require(
                rules.history_limit != Some(0),
                RuleViolation::ZeroHistoryLimit,
            ),
            require(!rules.catalog.is_empty(), RuleViolation::EmptyCatalog),
        ];
        checks.extend(catalog_checks(&rules.catalog));

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(rules),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

fn catalog_checks(catalog: &ScoringCatalog) -> Vec<Check> {
    let mut seen = HashSet::new();
    let mut checks = Vec::new();

    for category in catalog.categories() {
        for option in &category.options {
            checks.push(require(
                !option.label.trim().is_empty(),
                RuleViolation::EmptyLabel {
                    category: category.title.clone(),
                },
            ));
            checks.push(require(
                option.value > 0,
                RuleViolation::ZeroValue {
                    label: option.label.clone(),
                },
            ));
            checks.push(require(
                seen.insert(option.label.as_str()),
                RuleViolation::DuplicateLabel {
                    label: option.label.clone(),
                },
            ));
        }
    }

    checks
}
