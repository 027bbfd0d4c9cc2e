//! The turn-based duel state machine.
//!
//! ## Turn structure
//!
//! The turn counter starts at 0 and is incremented before each turn's
//! effect resolution. Odd turns belong to the first character, even
//! turns to the second, so the first character moves first. Alternation
//! is strict; a turn is never skipped.
//!
//! ## Driving a turn
//!
//! The intended per-turn sequence for callers:
//!
//! 1. `start_turn()` to apply and age effects.
//! 2. Check `winner()` - effects alone can end the duel.
//! 3. `legal_actions(current_character_id())` - an empty list is an
//!    immediate loss for the turn-holder.
//! 4. `apply_action(...)` with the chosen action.
//! 5. Check `winner()` again.
//!
//! Terminal states are absorbing: once a winner exists the game is over
//! and callers stop advancing it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionKind;
use super::character::{Character, CharacterId, Role};
use super::effect::{Effect, EffectKind};
use crate::error::EngineError;

/// Complete duel state: the character pair, active effects, and the
/// turn counter.
///
/// Cloning a `Game` yields a fully independent branch; nothing is shared
/// with the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    characters: [Character; 2],
    effects: SmallVec<[Effect; 4]>,
    turn: u32,
}

impl Game {
    /// Create a duel between two characters.
    ///
    /// The first character takes the first turn.
    #[must_use]
    pub fn new(first: Character, second: Character) -> Self {
        Self {
            characters: [first, second],
            effects: SmallVec::new(),
            turn: 0,
        }
    }

    /// The current turn counter. Zero until the first `start_turn`.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Get a character by slot.
    #[must_use]
    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id.index()]
    }

    /// Get a mutable character by slot.
    pub fn character_mut(&mut self, id: CharacterId) -> &mut Character {
        &mut self.characters[id.index()]
    }

    /// The slot whose turn it currently is.
    #[must_use]
    pub fn current_character_id(&self) -> CharacterId {
        if self.turn % 2 == 1 {
            CharacterId::new(0)
        } else {
            CharacterId::new(1)
        }
    }

    /// Find the character holding a role, if any.
    #[must_use]
    pub fn role_holder(&self, role: Role) -> Option<&Character> {
        self.characters.iter().find(|c| c.role == role)
    }

    /// The currently active effects.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Whether an effect of the given kind is active on either character.
    #[must_use]
    pub fn is_effect_active(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Attach an effect and fire its `on_start` hook.
    ///
    /// The uniqueness-by-kind invariant is normally upheld by action
    /// legality; adding a duplicate directly is a caller bug.
    pub fn add_effect(&mut self, effect: Effect) {
        debug_assert!(
            !self.is_effect_active(effect.kind),
            "duplicate {} effect",
            effect.kind
        );
        self.effects.push(effect);
        effect.on_start(self);
    }

    /// Advance to the next turn and resolve effects.
    ///
    /// Resolution is two-phase: every active effect is notified first,
    /// then the ones whose duration just ran out are expired. An
    /// effect's expiry therefore never disturbs another effect's
    /// notification for the same turn.
    pub fn start_turn(&mut self) {
        self.turn += 1;

        let effects = std::mem::take(&mut self.effects);
        for effect in &effects {
            effect.on_turn(self);
        }

        let mut expired: SmallVec<[Effect; 4]> = SmallVec::new();
        for mut effect in effects {
            match effect.remaining {
                None => self.effects.push(effect),
                Some(count) if count > 1 => {
                    effect.remaining = Some(count - 1);
                    self.effects.push(effect);
                }
                Some(_) => expired.push(effect),
            }
        }

        for effect in &expired {
            effect.on_end(self);
        }
    }

    /// The winner, once either character has dropped to zero or below.
    #[must_use]
    pub fn winner(&self) -> Option<CharacterId> {
        if !self.characters[0].is_alive() {
            Some(CharacterId::new(1))
        } else if !self.characters[1].is_alive() {
            Some(CharacterId::new(0))
        } else {
            None
        }
    }

    /// The actions `actor` may legally take right now.
    #[must_use]
    pub fn legal_actions(&self, actor: CharacterId) -> Vec<ActionKind> {
        self.character(actor)
            .actions()
            .iter()
            .copied()
            .filter(|action| action.is_legal(self, actor))
            .collect()
    }

    /// Apply an action for `actor`, then re-check the mana invariant.
    ///
    /// Legality is the caller's responsibility; a pool driven negative
    /// here means legality checking is broken and the error is fatal.
    pub fn apply_action(&mut self, actor: CharacterId, action: ActionKind) -> Result<(), EngineError> {
        action.apply(self, actor);

        let character = self.character(actor);
        if character.mana < 0 {
            return Err(EngineError::ManaOverdraft {
                name: character.name.clone(),
                mana: character.mana,
                action,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn: {}", self.turn)?;
        writeln!(f, "Current: {}", self.character(self.current_character_id()).name)?;
        for c in &self.characters {
            writeln!(
                f,
                "{}: hp={} armor={} mana={}",
                c.name, c.hit_points, c.armor, c.mana
            )?;
        }
        writeln!(f, "Effects:")?;
        for e in &self.effects {
            match e.remaining {
                Some(count) => writeln!(f, "  [{}] remaining={}", e.kind, count)?,
                None => writeln!(f, "  [{}] indefinite", e.kind)?,
            }
        }
        Ok(())
    }
}
