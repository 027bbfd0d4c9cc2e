//! Error types for the duel engine and search driver.
//!
//! The three families are kept distinct so callers can tell an
//! over-aggressive pruning policy (`SearchError::NoWinningLine`) apart
//! from an engine defect (`EngineError`) or a malformed setup
//! (`ConfigError`).

use thiserror::Error;

use crate::core::ActionKind;

/// Internal invariant violations inside the game engine.
///
/// These signal a defect in legality checking, not a losing position.
/// The search aborts immediately when one surfaces.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An action drove a character's mana pool negative.
    ///
    /// Legality checking must reject unaffordable actions before they
    /// are applied, so this is never expected in correct play.
    #[error("{name} overdrew their mana pool to {mana} casting {action}")]
    ManaOverdraft {
        name: String,
        mana: i32,
        action: ActionKind,
    },
}

/// Errors while building a duel from caller-supplied input.
///
/// Surfaced before the engine is ever invoked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A line in the attacker description did not match `Field: value`.
    #[error("invalid line in attacker description: {0:?}")]
    InvalidLine(String),

    /// The attacker description never specified hit points.
    #[error("attacker description is missing hit points")]
    MissingHitPoints,

    /// The attacker description never specified damage.
    #[error("attacker description is missing damage")]
    MissingDamage,
}

/// Errors from the least-mana search driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every branch was explored without a caster win.
    ///
    /// With a pruning strategy enabled this can be a false negative;
    /// rerun with `Exhaustive` to distinguish "no line exists" from
    /// "policy too aggressive".
    #[error("no winning line found after {states_evaluated} states")]
    NoWinningLine { states_evaluated: u64 },

    /// The configured state budget ran out before a win was finalized.
    #[error("state limit of {limit} reached before a winning line was found")]
    StateLimit { limit: usize },

    /// The engine detected an internal invariant violation.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
