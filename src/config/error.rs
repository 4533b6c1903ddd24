//! Configuration errors.

use thiserror::Error;

/// A single problem with a set of house rules
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Winning threshold must be greater than zero")]
    ZeroThreshold,

    #[error("Minimum opening score ({opening}) exceeds the winning threshold ({threshold})")]
    OpeningAboveThreshold { opening: u32, threshold: u32 },

    #[error("History limit must be greater than zero when set")]
    ZeroHistoryLimit,

    #[error("Scoring catalog has no options")]
    EmptyCatalog,

    #[error("Scoring option in '{category}' has an empty label")]
    EmptyLabel { category: String },

    #[error("Scoring option '{label}' must be worth more than zero")]
    ZeroValue { label: String },

    #[error("Scoring option '{label}' appears more than once")]
    DuplicateLabel { label: String },
}

/// Errors raised while assembling [`Rules`](super::Rules)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid house rules ({} problem(s)): {}", .0.len(), join(.0))]
    Invalid(Vec<RuleViolation>),

    #[error("Scoring catalog could not be parsed: {0}")]
    Catalog(String),
}

fn join(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
