//! Duel characters: identity, roles, and combat state.
//!
//! ## CharacterId
//!
//! Type-safe index into the duel's character pair. The first character
//! (`CharacterId(0)`) acts on odd turns, the second on even turns.
//!
//! ## Character
//!
//! Mutable combat state (hit points, armor, mana, attack power) plus the
//! fixed set of actions the character may take. Characters are owned by
//! the `Game` that contains them and deep-copied whenever the search
//! branches, never shared between branches.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::action::ActionKind;

/// Character identifier for the two duel slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u8);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other duel slot.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character {}", self.0)
    }
}

/// The two character roles in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The mana-driven side whose cumulative spend the search minimizes.
    Caster,
    /// The fixed-action opposing side.
    Attacker,
}

/// A character in the duel.
///
/// Scalar stats are freely mutable by actions and effects; the spellbook
/// is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,

    /// Role tag; the search driver accounts mana spend for casters only.
    pub role: Role,

    /// Remaining health. The character is defeated at zero or below.
    pub hit_points: i32,

    /// Flat damage reduction against physical strikes.
    pub armor: i32,

    /// Physical attack power. A strike with non-positive power does nothing.
    pub damage: i32,

    /// Mana pool. Must never go negative; see `EngineError::ManaOverdraft`.
    pub mana: i32,

    /// The fixed action set for this character.
    spellbook: SmallVec<[ActionKind; 5]>,
}

impl Character {
    /// Create a caster with the full five-spell book.
    #[must_use]
    pub fn caster(name: impl Into<String>, hit_points: i32, mana: i32) -> Self {
        Self {
            name: name.into(),
            role: Role::Caster,
            hit_points,
            armor: 0,
            damage: 0,
            mana,
            spellbook: smallvec![
                ActionKind::MagicMissile,
                ActionKind::Drain,
                ActionKind::Shield,
                ActionKind::Poison,
                ActionKind::Recharge,
            ],
        }
    }

    /// Create an attacker with only the physical strike.
    #[must_use]
    pub fn attacker(name: impl Into<String>, hit_points: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            role: Role::Attacker,
            hit_points,
            armor: 0,
            damage,
            mana: 0,
            spellbook: smallvec![ActionKind::Strike],
        }
    }

    /// The actions this character is permitted to take.
    #[must_use]
    pub fn actions(&self) -> &[ActionKind] {
        &self.spellbook
    }

    /// Whether the character is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }
}
