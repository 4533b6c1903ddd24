//! House-rule configuration.
//!
//! Thresholds, rule variants and the scoring catalog are injected into the
//! engine rather than hard-coded. Use [`Rules::builder`] to assemble and
//! validate them; invalid settings are reported together.
//!
//! # Example
//!
//! ```rust
//! use farkle_house::config::{PassedPoints, Rules, ScoringCatalog};
//!
//! let rules = Rules::builder()
//!     .minimum_opening(1_000)
//!     .passed_points(PassedPoints::Discard)
//!     .catalog(ScoringCatalog::house())
//!     .build()
//!     .expect("house rules are valid");
//!
//! assert_eq!(rules.minimum_opening(), 1_000);
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod rules;

pub use builder::RulesBuilder;
pub use catalog::{ScoringCatalog, ScoringCategory, ScoringOption};
pub use error::{ConfigError, RuleViolation};
pub use rules::{
    LastTurnFarkle, PassedPoints, Rules, DEFAULT_MINIMUM_OPENING, DEFAULT_WINNING_THRESHOLD,
};
