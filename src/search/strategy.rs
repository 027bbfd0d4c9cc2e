//! Pruning strategies.
//!
//! A strategy bounds the otherwise exponential search by abandoning
//! unpromising branches and trimming the caster's candidate actions.
//! All shipped heuristics are empirically tuned on their scenario, not
//! proven: they trade completeness for speed and can turn a winnable
//! setup into `NoWinningLine`. Use [`Exhaustive`] to verify results.

use crate::core::{ActionKind, Game, Role};

use super::node::SearchNode;

/// Scenario-specific pruning hooks for the search driver.
pub trait Strategy {
    /// Abandon this branch entirely before its next turn is played.
    fn prune_branch(&self, node: &SearchNode) -> bool {
        let _ = node;
        false
    }

    /// Trim the caster's legal actions before branching.
    ///
    /// Called only for the caster and only with a non-empty list.
    /// Returning an empty list abandons the branch.
    fn filter_caster_actions(&self, game: &Game, actions: Vec<ActionKind>) -> Vec<ActionKind> {
        let _ = game;
        actions
    }
}

/// No pruning at all: the verification mode.
///
/// Explores every branch in cost order, so its result is exact.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exhaustive;

impl Strategy for Exhaustive {}

/// Heuristics tuned for the normal duel variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardHeuristics;

impl Strategy for StandardHeuristics {
    fn prune_branch(&self, node: &SearchNode) -> bool {
        let (Some(caster), Some(attacker)) = (
            node.game.role_holder(Role::Caster),
            node.game.role_holder(Role::Attacker),
        ) else {
            return false;
        };

        // A health lead this large has proven unrecoverable.
        attacker.hit_points - caster.hit_points >= 35
    }

    fn filter_caster_actions(&self, game: &Game, mut actions: Vec<ActionKind>) -> Vec<ActionKind> {
        if actions.len() == 1 {
            return actions;
        }
        let (Some(caster), Some(attacker)) = (
            game.role_holder(Role::Caster),
            game.role_holder(Role::Attacker),
        ) else {
            return actions;
        };

        // A missile finishes the duel outright; nothing else competes.
        if attacker.hit_points <= 4 && caster.mana >= ActionKind::MagicMissile.mana_cost() as i32 {
            return vec![ActionKind::MagicMissile];
        }

        // Low mana against a healthy attacker: recharging is forced.
        if actions.contains(&ActionKind::Recharge) && attacker.hit_points > 20 && caster.mana < 400
        {
            return vec![ActionKind::Recharge];
        }

        actions.retain(|a| *a != ActionKind::Drain);

        // While poison is still castable the missile is redundant.
        if actions.contains(&ActionKind::Poison) && attacker.hit_points > 8 {
            actions.retain(|a| *a != ActionKind::MagicMissile);
        }

        actions
    }
}

/// Heuristics tuned for the hardened duel variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardModeHeuristics;

impl Strategy for HardModeHeuristics {
    fn prune_branch(&self, node: &SearchNode) -> bool {
        let (Some(caster), Some(attacker)) = (
            node.game.role_holder(Role::Caster),
            node.game.role_holder(Role::Attacker),
        ) else {
            return false;
        };

        caster.hit_points < 10 && attacker.hit_points >= 20
    }

    fn filter_caster_actions(&self, game: &Game, mut actions: Vec<ActionKind>) -> Vec<ActionKind> {
        if actions.len() == 1 {
            return actions;
        }

        actions.retain(|a| *a != ActionKind::Drain);

        if let Some(attacker) = game.role_holder(Role::Attacker) {
            if actions.contains(&ActionKind::Poison) && attacker.hit_points > 8 {
                actions.retain(|a| *a != ActionKind::MagicMissile);
            }
        }

        actions
    }
}
