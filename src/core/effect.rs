//! Timed status effects.
//!
//! An effect is attached to one character and lives on the game's active
//! list. Every active effect is notified once per turn regardless of
//! whose turn it is; finite durations count down per turn and the effect
//! expires immediately after its final notification.
//!
//! At most one effect of a given kind may be active at a time, across
//! both characters. The gate is enforced where effect-starting actions
//! check legality, not here.

use serde::{Deserialize, Serialize};

use super::character::CharacterId;
use super::game::Game;

/// Armor granted while Shield is active.
pub const SHIELD_ARMOR: i32 = 7;

/// Damage dealt to the Poison target each turn.
pub const POISON_DAMAGE: i32 = 3;

/// Mana granted to the Recharge target each turn.
pub const RECHARGE_MANA: i32 = 101;

/// Health drained from the Decay target on each of its own turns.
pub const DECAY_DAMAGE: i32 = 1;

/// The closed set of effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Raises the target's armor by [`SHIELD_ARMOR`] for its duration.
    Shield,
    /// Deals [`POISON_DAMAGE`] to the target every turn.
    Poison,
    /// Grants [`RECHARGE_MANA`] to the target every turn.
    Recharge,
    /// Indefinite drain: [`DECAY_DAMAGE`] from the target, but only on
    /// turns the target itself holds. Used by the hardened duel variant.
    Decay,
}

impl EffectKind {
    /// Duration in turns, or `None` for indefinite effects.
    #[must_use]
    pub const fn duration(self) -> Option<u8> {
        match self {
            EffectKind::Shield => Some(6),
            EffectKind::Poison => Some(6),
            EffectKind::Recharge => Some(5),
            EffectKind::Decay => None,
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectKind::Shield => write!(f, "Shield"),
            EffectKind::Poison => write!(f, "Poison"),
            EffectKind::Recharge => write!(f, "Recharge"),
            EffectKind::Decay => write!(f, "Decay"),
        }
    }
}

/// An active effect: kind, remaining duration, and the character it is
/// attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,

    /// Turns left, or `None` for indefinite. Decremented by the game
    /// after each turn's notifications.
    pub remaining: Option<u8>,

    /// The character this effect is attached to.
    pub target: CharacterId,
}

impl Effect {
    /// Create a fresh effect with its kind's full duration.
    #[must_use]
    pub fn new(kind: EffectKind, target: CharacterId) -> Self {
        Self {
            kind,
            remaining: kind.duration(),
            target,
        }
    }

    /// Applied once when the effect is added to the game.
    pub(crate) fn on_start(&self, game: &mut Game) {
        if self.kind == EffectKind::Shield {
            game.character_mut(self.target).armor += SHIELD_ARMOR;
        }
    }

    /// Applied once every game turn while active.
    pub(crate) fn on_turn(&self, game: &mut Game) {
        match self.kind {
            EffectKind::Shield => {}
            EffectKind::Poison => {
                game.character_mut(self.target).hit_points -= POISON_DAMAGE;
            }
            EffectKind::Recharge => {
                game.character_mut(self.target).mana += RECHARGE_MANA;
            }
            EffectKind::Decay => {
                // Other effects apply on every turn; the drain ticks only
                // when its target is the current turn-holder.
                if game.current_character_id() == self.target {
                    game.character_mut(self.target).hit_points -= DECAY_DAMAGE;
                }
            }
        }
    }

    /// Applied once when the duration reaches zero.
    pub(crate) fn on_end(&self, game: &mut Game) {
        if self.kind == EffectKind::Shield {
            game.character_mut(self.target).armor -= SHIELD_ARMOR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::Character;

    fn duel() -> Game {
        Game::new(
            Character::caster("Merlin", 50, 500),
            Character::attacker("Cyclops", 55, 8),
        )
    }

    #[test]
    fn test_durations() {
        assert_eq!(EffectKind::Shield.duration(), Some(6));
        assert_eq!(EffectKind::Poison.duration(), Some(6));
        assert_eq!(EffectKind::Recharge.duration(), Some(5));
        assert_eq!(EffectKind::Decay.duration(), None);
    }

    #[test]
    fn test_shield_start_and_end_are_symmetric() {
        let mut game = duel();
        let shield = Effect::new(EffectKind::Shield, CharacterId::new(0));

        shield.on_start(&mut game);
        assert_eq!(game.character(CharacterId::new(0)).armor, SHIELD_ARMOR);

        shield.on_end(&mut game);
        assert_eq!(game.character(CharacterId::new(0)).armor, 0);
    }

    #[test]
    fn test_poison_ticks_target() {
        let mut game = duel();
        let poison = Effect::new(EffectKind::Poison, CharacterId::new(1));

        poison.on_turn(&mut game);
        assert_eq!(game.character(CharacterId::new(1)).hit_points, 55 - POISON_DAMAGE);
        assert_eq!(game.character(CharacterId::new(0)).hit_points, 50);
    }

    #[test]
    fn test_recharge_ticks_target() {
        let mut game = duel();
        let recharge = Effect::new(EffectKind::Recharge, CharacterId::new(0));

        recharge.on_turn(&mut game);
        assert_eq!(game.character(CharacterId::new(0)).mana, 500 + RECHARGE_MANA);
    }

    #[test]
    fn test_decay_only_ticks_on_target_turn() {
        let mut game = duel();
        let decay = Effect::new(EffectKind::Decay, CharacterId::new(0));

        // Turn 0: parity gives the turn to the second character.
        decay.on_turn(&mut game);
        assert_eq!(game.character(CharacterId::new(0)).hit_points, 50);

        // Advance to an odd turn: now the first character holds it.
        game.start_turn();
        decay.on_turn(&mut game);
        assert_eq!(game.character(CharacterId::new(0)).hit_points, 50 - DECAY_DAMAGE);
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::new(EffectKind::Poison, CharacterId::new(1));
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();

        assert_eq!(effect, deserialized);
    }
}
