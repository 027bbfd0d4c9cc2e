//! Least-mana game-tree search.
//!
//! ## Overview
//!
//! The driver clones game state per branch, advances one turn at a
//! time, and keeps unexplored branches on a cost-ordered frontier:
//!
//! - **Best-first**: the cheapest branch is always explored next, so
//!   the first finalized caster win is cost-optimal.
//! - **Explicit frontier**: no recursion; search depth never touches
//!   the call stack.
//! - **Pluggable pruning**: a [`Strategy`] abandons hopeless branches
//!   and trims caster actions. [`Exhaustive`] disables pruning for
//!   exact results.
//!
//! ## Usage
//!
//! ```
//! use arcane_duel::core::{AttackerConfig, DuelConfig};
//! use arcane_duel::search::{minimal_mana_to_win, Exhaustive};
//!
//! let config = DuelConfig::new(AttackerConfig::new(13, 8))
//!     .caster_hit_points(10)
//!     .caster_mana(250);
//!
//! let solution = minimal_mana_to_win(&config, Exhaustive).unwrap();
//! assert_eq!(solution.mana_spent, 226);
//! ```

pub mod driver;
pub mod frontier;
pub mod node;
pub mod stats;
pub mod strategy;

pub use driver::{minimal_mana_to_win, DuelSearch, SearchConfig, Solution};
pub use frontier::Frontier;
pub use node::SearchNode;
pub use stats::SearchStats;
pub use strategy::{Exhaustive, HardModeHeuristics, StandardHeuristics, Strategy};
