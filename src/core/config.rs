//! Duel setup configuration.
//!
//! A `DuelConfig` describes both sides and the difficulty variant, and
//! builds a ready-to-search `Game`. Attacker stats usually come from a
//! free-form puzzle input; `AttackerConfig::parse` handles that format
//! on the caller's side, before the engine is involved.

use serde::{Deserialize, Serialize};

use super::character::{Character, CharacterId};
use super::effect::{Effect, EffectKind};
use super::game::Game;
use crate::error::ConfigError;

/// Caster-side configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasterConfig {
    pub name: String,
    pub hit_points: i32,
    pub mana: i32,
}

impl Default for CasterConfig {
    fn default() -> Self {
        Self {
            name: "Wizard".to_string(),
            hit_points: 50,
            mana: 500,
        }
    }
}

/// Attacker-side configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackerConfig {
    pub name: String,
    pub hit_points: i32,
    pub damage: i32,
}

impl AttackerConfig {
    /// Create an attacker description from its two stats.
    #[must_use]
    pub fn new(hit_points: i32, damage: i32) -> Self {
        Self {
            name: "Boss".to_string(),
            hit_points,
            damage,
        }
    }

    /// Parse the free-form attacker description:
    ///
    /// ```text
    /// Hit Points: 58
    /// Damage: 9
    /// ```
    ///
    /// Blank lines are ignored; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut hit_points = None;
        let mut damage = None;

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (field, value) = line
                .split_once(':')
                .ok_or_else(|| ConfigError::InvalidLine(line.to_string()))?;
            let value: i32 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLine(line.to_string()))?;
            match field.trim() {
                "Hit Points" => hit_points = Some(value),
                "Damage" => damage = Some(value),
                _ => return Err(ConfigError::InvalidLine(line.to_string())),
            }
        }

        Ok(Self::new(
            hit_points.ok_or(ConfigError::MissingHitPoints)?,
            damage.ok_or(ConfigError::MissingDamage)?,
        ))
    }
}

/// Full duel setup: both sides plus the difficulty variant.
///
/// ## Example
///
/// ```
/// use arcane_duel::core::{AttackerConfig, DuelConfig};
///
/// let game = DuelConfig::new(AttackerConfig::new(58, 9))
///     .hard_mode(true)
///     .build();
/// assert_eq!(game.turn(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelConfig {
    pub caster: CasterConfig,
    pub attacker: AttackerConfig,

    /// Hardened variant: the caster starts under the indefinite Decay
    /// drain.
    pub hard_mode: bool,
}

impl DuelConfig {
    /// Configure a duel against the given attacker with the default
    /// caster.
    #[must_use]
    pub fn new(attacker: AttackerConfig) -> Self {
        Self {
            caster: CasterConfig::default(),
            attacker,
            hard_mode: false,
        }
    }

    /// Override the caster's hit points.
    #[must_use]
    pub fn caster_hit_points(mut self, hit_points: i32) -> Self {
        self.caster.hit_points = hit_points;
        self
    }

    /// Override the caster's starting mana.
    #[must_use]
    pub fn caster_mana(mut self, mana: i32) -> Self {
        self.caster.mana = mana;
        self
    }

    /// Select the hardened variant.
    #[must_use]
    pub fn hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Build the initial game state.
    ///
    /// The caster occupies the first slot and therefore moves first.
    #[must_use]
    pub fn build(&self) -> Game {
        let caster = Character::caster(
            self.caster.name.clone(),
            self.caster.hit_points,
            self.caster.mana,
        );
        let attacker = Character::attacker(
            self.attacker.name.clone(),
            self.attacker.hit_points,
            self.attacker.damage,
        );

        let mut game = Game::new(caster, attacker);
        if self.hard_mode {
            game.add_effect(Effect::new(EffectKind::Decay, CharacterId::new(0)));
        }
        game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::Role;

    #[test]
    fn test_parse_attacker() {
        let attacker = AttackerConfig::parse("Hit Points: 58\nDamage: 9\n").unwrap();

        assert_eq!(attacker.hit_points, 58);
        assert_eq!(attacker.damage, 9);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_spacing() {
        let attacker = AttackerConfig::parse("\n  Hit Points:  13\n\nDamage: 8  \n").unwrap();

        assert_eq!(attacker.hit_points, 13);
        assert_eq!(attacker.damage, 8);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = AttackerConfig::parse("Hit Points: 58\nSpeed: 3").unwrap_err();
        assert_eq!(err, ConfigError::InvalidLine("Speed: 3".to_string()));

        let err = AttackerConfig::parse("Hit Points: fifty").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine(_)));
    }

    #[test]
    fn test_parse_requires_both_fields() {
        assert_eq!(
            AttackerConfig::parse("Damage: 9"),
            Err(ConfigError::MissingHitPoints)
        );
        assert_eq!(
            AttackerConfig::parse("Hit Points: 58"),
            Err(ConfigError::MissingDamage)
        );
    }

    #[test]
    fn test_build_places_caster_first() {
        let game = DuelConfig::new(AttackerConfig::new(58, 9)).build();

        assert_eq!(game.character(CharacterId::new(0)).role, Role::Caster);
        assert_eq!(game.character(CharacterId::new(1)).role, Role::Attacker);
        assert_eq!(game.character(CharacterId::new(0)).mana, 500);
        assert!(game.effects().is_empty());
    }

    #[test]
    fn test_build_hard_mode_attaches_decay() {
        let game = DuelConfig::new(AttackerConfig::new(58, 9))
            .hard_mode(true)
            .build();

        assert!(game.is_effect_active(EffectKind::Decay));
        assert_eq!(game.effects()[0].target, CharacterId::new(0));
        assert_eq!(game.effects()[0].remaining, None);
    }

    #[test]
    fn test_builder_overrides() {
        let game = DuelConfig::new(AttackerConfig::new(13, 8))
            .caster_hit_points(10)
            .caster_mana(250)
            .build();

        let caster = game.character(CharacterId::new(0));
        assert_eq!(caster.hit_points, 10);
        assert_eq!(caster.mana, 250);
    }

    #[test]
    fn test_config_serialization() {
        let config = DuelConfig::new(AttackerConfig::new(58, 9)).hard_mode(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DuelConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
