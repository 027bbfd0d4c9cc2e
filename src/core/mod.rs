//! Core duel model: characters, actions, effects, the turn state
//! machine, and duel setup.
//!
//! Everything here is deterministic and owned: cloning a `Game` produces
//! a fully independent branch, which is what the search driver relies on.

pub mod action;
pub mod character;
pub mod config;
pub mod effect;
pub mod game;

pub use action::ActionKind;
pub use character::{Character, CharacterId, Role};
pub use config::{AttackerConfig, CasterConfig, DuelConfig};
pub use effect::{Effect, EffectKind};
pub use game::Game;
