//! # arcane-duel
//!
//! A turn-based wizard duel engine with a least-mana game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Closed catalogs**: actions and effects are sum types, not open
//!    hierarchies. Legality gates and lifecycle hooks dispatch through
//!    one exhaustive match per family.
//!
//! 2. **Owned branches**: every search branch owns a full clone of its
//!    game; nothing is shared or mutated across branches. Histories use
//!    persistent vectors so cloning a deep line stays cheap.
//!
//! 3. **Deterministic**: no randomness anywhere. The same setup and
//!    strategy always produce the same minimal cost and line of play.
//!
//! ## Architecture
//!
//! - **Turn engine**: strict alternation; effects are notified once per
//!   turn regardless of whose turn it is, then expired in a second
//!   phase.
//!
//! - **Best-first search**: an explicit cost-ordered frontier; the
//!   first finalized caster win is the cheapest one.
//!
//! - **Heuristic pruning**: per-variant strategies bound the search at
//!   the price of completeness; an exhaustive mode exists for
//!   verification.
//!
//! ## Modules
//!
//! - `core`: characters, actions, effects, the turn state machine,
//!   duel setup
//! - `search`: frontier, driver, statistics, pruning strategies
//! - `error`: engine, config, and search error types

pub mod core;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, AttackerConfig, CasterConfig, Character, CharacterId, DuelConfig, Effect,
    EffectKind, Game, Role,
};

pub use crate::error::{ConfigError, EngineError, SearchError};

pub use crate::search::{
    minimal_mana_to_win, DuelSearch, Exhaustive, Frontier, HardModeHeuristics, SearchConfig,
    SearchNode, SearchStats, Solution, StandardHeuristics, Strategy,
};
