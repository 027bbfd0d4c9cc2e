//! Frontier entries for the duel search.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, CharacterId, Game};

/// One branch of the game tree awaiting exploration.
///
/// Owns its game clone outright; branching clones the whole entry. The
/// action history is an `im::Vector`, so those clones share structure
/// instead of copying the full line of play every time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// This branch's private game state.
    pub game: Game,

    /// Cumulative mana spent by the caster along this line.
    pub mana_spent: u32,

    /// The recorded winner, once the branch has reached a terminal
    /// state. Terminal entries are finalized on their next pop.
    pub winner: Option<CharacterId>,

    /// Every action applied to reach this state, both sides included.
    pub history: Vector<ActionKind>,
}

impl SearchNode {
    /// Create the search root: no spend, no history.
    #[must_use]
    pub fn root(game: Game) -> Self {
        Self {
            game,
            mana_spent: 0,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Record the winner if either character has fallen.
    ///
    /// Returns true when the branch is terminal.
    pub(crate) fn record_winner(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        if let Some(winner) = self.game.winner() {
            self.winner = Some(winner);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Character;

    fn duel() -> Game {
        Game::new(
            Character::caster("Merlin", 50, 500),
            Character::attacker("Cyclops", 55, 8),
        )
    }

    #[test]
    fn test_root_is_fresh() {
        let node = SearchNode::root(duel());

        assert_eq!(node.mana_spent, 0);
        assert_eq!(node.winner, None);
        assert!(node.history.is_empty());
    }

    #[test]
    fn test_record_winner() {
        let mut node = SearchNode::root(duel());
        assert!(!node.record_winner());

        node.game.character_mut(CharacterId::new(1)).hit_points = -2;
        assert!(node.record_winner());
        assert_eq!(node.winner, Some(CharacterId::new(0)));
    }

    #[test]
    fn test_branch_history_is_independent() {
        let mut node = SearchNode::root(duel());
        node.history.push_back(ActionKind::Poison);

        let mut branch = node.clone();
        branch.history.push_back(ActionKind::MagicMissile);

        assert_eq!(node.history.len(), 1);
        assert_eq!(branch.history.len(), 2);
    }
}
