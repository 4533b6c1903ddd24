//! Farkle House: a turn and phase state machine for Farkle house rules.
//!
//! The crate tracks whose turn it is, unbanked points, banking with a
//! minimum opening score, farkle steal chains, and a final round that gives
//! every other player one last turn once someone crosses the winning
//! threshold. Every accepted command can be undone.
//!
//! # Core Concepts
//!
//! - **State**: [`GameState`] is a plain value; a clone is a full snapshot
//! - **Modes**: `Normal`, `Steal` and `GameOver` are variants of one [`Mode`]
//!   enum, with the final round carried alongside as a modifier
//! - **Rules**: thresholds, variants and the scoring table are injected
//!   through [`Rules`]
//!
//! # Example
//!
//! ```rust
//! use farkle_house::{Mode, TurnEngine};
//!
//! let mut engine = TurnEngine::default();
//! engine.add_player("Ada").unwrap();
//! engine.add_player("Bo").unwrap();
//!
//! // Ada opens with 550.
//! engine.add_points(550).unwrap();
//! engine.bank_turn().unwrap();
//!
//! // Bo builds 300 and busts; Ada is offered the pool.
//! engine.add_points(300).unwrap();
//! engine.declare_farkle().unwrap();
//! assert!(matches!(engine.state().mode(), Mode::Steal(_)));
//!
//! let state = engine.claim_steal().unwrap();
//! assert_eq!(state.players().score(0), 850);
//! assert_eq!(state.current_turn(), 0);
//!
//! // Changed our minds.
//! engine.undo().unwrap();
//! assert!(engine.state().in_steal_phase());
//! ```

pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::config::{Rules, RulesBuilder, ScoringCatalog};
pub use self::core::{GameError, GameState, Mode, Player, PlayerId};
pub use self::engine::TurnEngine;
