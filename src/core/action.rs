//! The fixed action catalog.
//!
//! Actions are a closed enum rather than an open trait hierarchy: a
//! single legality predicate and a single apply function dispatch over
//! the variants, and the duplicate-effect gate can be matched
//! exhaustively.
//!
//! Legality is `mana >= cost` AND no currently-active effect of the kind
//! this action would start. The activity check is global across both
//! characters and looks at *current* state only: an effect one turn from
//! expiry still blocks its action.

use serde::{Deserialize, Serialize};

use super::character::CharacterId;
use super::effect::{Effect, EffectKind};
use super::game::Game;

/// A discrete move a character may take on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// 53 mana. Instantly deals 4 damage to the opponent.
    MagicMissile,

    /// 73 mana. Instantly deals 2 damage and heals the caster for 2.
    Drain,

    /// 113 mana. Starts the Shield effect on the caster.
    Shield,

    /// 173 mana. Starts the Poison effect on the opponent.
    Poison,

    /// 229 mana. Starts the Recharge effect on the caster.
    Recharge,

    /// Free physical attack for `max(damage - armor, 1)`, skipped
    /// entirely when the attacker's power is non-positive.
    Strike,
}

impl ActionKind {
    /// Fixed mana cost of this action.
    #[must_use]
    pub const fn mana_cost(self) -> u32 {
        match self {
            ActionKind::MagicMissile => 53,
            ActionKind::Drain => 73,
            ActionKind::Shield => 113,
            ActionKind::Poison => 173,
            ActionKind::Recharge => 229,
            ActionKind::Strike => 0,
        }
    }

    /// The effect this action starts, if any. Actions that start an
    /// effect are illegal while that effect is active.
    #[must_use]
    pub const fn started_effect(self) -> Option<EffectKind> {
        match self {
            ActionKind::Shield => Some(EffectKind::Shield),
            ActionKind::Poison => Some(EffectKind::Poison),
            ActionKind::Recharge => Some(EffectKind::Recharge),
            ActionKind::MagicMissile | ActionKind::Drain | ActionKind::Strike => None,
        }
    }

    /// Whether `actor` may take this action in the current game state.
    #[must_use]
    pub fn is_legal(self, game: &Game, actor: CharacterId) -> bool {
        if game.character(actor).mana < self.mana_cost() as i32 {
            return false;
        }
        match self.started_effect() {
            Some(kind) => !game.is_effect_active(kind),
            None => true,
        }
    }

    /// Deduct the cost and perform this action's specific effect.
    ///
    /// Callers go through `Game::apply_action`, which re-checks the
    /// mana-pool invariant afterwards.
    pub(crate) fn apply(self, game: &mut Game, actor: CharacterId) {
        game.character_mut(actor).mana -= self.mana_cost() as i32;

        let opponent = actor.opponent();
        match self {
            ActionKind::MagicMissile => {
                game.character_mut(opponent).hit_points -= 4;
            }
            ActionKind::Drain => {
                game.character_mut(opponent).hit_points -= 2;
                game.character_mut(actor).hit_points += 2;
            }
            ActionKind::Shield => {
                game.add_effect(Effect::new(EffectKind::Shield, actor));
            }
            ActionKind::Poison => {
                game.add_effect(Effect::new(EffectKind::Poison, opponent));
            }
            ActionKind::Recharge => {
                game.add_effect(Effect::new(EffectKind::Recharge, actor));
            }
            ActionKind::Strike => {
                let power = game.character(actor).damage;
                if power < 1 {
                    return;
                }
                let dealt = (power - game.character(opponent).armor).max(1);
                game.character_mut(opponent).hit_points -= dealt;
            }
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::MagicMissile => write!(f, "Magic Missile"),
            ActionKind::Drain => write!(f, "Drain"),
            ActionKind::Shield => write!(f, "Shield"),
            ActionKind::Poison => write!(f, "Poison"),
            ActionKind::Recharge => write!(f, "Recharge"),
            ActionKind::Strike => write!(f, "Strike"),
        }
    }
}
