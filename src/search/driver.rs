//! Best-first search for the cheapest caster win.
//!
//! The driver explores the game tree with an explicit frontier instead
//! of recursion, popping the cheapest unexplored branch each round
//! (see [`Frontier`] for the ordering invariant). Because extraction is
//! cost-ordered, the first terminal caster win it finalizes is the
//! cheapest one reachable under the active strategy, and the search
//! returns it immediately.
//!
//! Cost accumulates only for the caster role; the attacker's strikes
//! are free. Every applied action - both sides - is appended to the
//! branch history, so a solution carries the full line of play.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{ActionKind, CharacterId, DuelConfig, Game, Role};
use crate::error::{EngineError, SearchError};

use super::frontier::Frontier;
use super::node::SearchNode;
use super::stats::SearchStats;
use super::strategy::Strategy;

/// Search configuration parameters.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchConfig {
    /// Maximum states to evaluate before giving up (0 = unlimited).
    /// A guard against runaway searches on hostile setups.
    pub max_states: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_states: 0 }
    }
}

impl SearchConfig {
    /// Create a config with a custom state budget.
    #[must_use]
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}

/// A winning line for the caster.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Solution {
    /// Minimal total mana the caster spent.
    pub mana_spent: u32,

    /// The full line of play, attacker turns included.
    pub history: im::Vector<ActionKind>,

    /// The terminal game state.
    pub game: Game,
}

/// Least-mana duel search.
///
/// Generic over the pruning strategy. Owns the frontier, the best-known
/// solution slot, and the run statistics.
pub struct DuelSearch<S: Strategy> {
    strategy: S,
    config: SearchConfig,
    frontier: Frontier,
    best: Option<Solution>,
    stats: SearchStats,
}

impl<S: Strategy> DuelSearch<S> {
    /// Create a search with the given strategy and default config.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            config: SearchConfig::default(),
            frontier: Frontier::new(),
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom search configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Search for the cheapest caster win from `game`.
    ///
    /// Fails with [`SearchError::NoWinningLine`] when every branch is
    /// explored without one - which, under a pruning strategy, may be a
    /// false negative.
    pub fn run(&mut self, game: &Game) -> Result<Solution, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.best = None;
        self.frontier.clear();
        self.enqueue(SearchNode::root(game.clone()));

        let result = loop {
            // The frontier yields branches cheapest-first, so the first
            // finalized caster win is already optimal.
            if let Some(best) = self.best.take() {
                break Ok(best);
            }

            let Some(node) = self.frontier.pop() else {
                break Err(SearchError::NoWinningLine {
                    states_evaluated: self.stats.states_evaluated,
                });
            };
            self.stats.states_evaluated += 1;

            if self.config.max_states != 0
                && self.stats.states_evaluated as usize > self.config.max_states
            {
                break Err(SearchError::StateLimit {
                    limit: self.config.max_states,
                });
            }

            if let Err(err) = self.step(node) {
                break Err(SearchError::Engine(err));
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match &result {
            Ok(solution) => debug!(
                mana_spent = solution.mana_spent,
                states = self.stats.states_evaluated,
                time_us = self.stats.time_us,
                "search finished"
            ),
            Err(err) => debug!(
                states = self.stats.states_evaluated,
                time_us = self.stats.time_us,
                %err,
                "search failed"
            ),
        }
        result
    }

    /// Play out one turn of a popped branch.
    fn step(&mut self, mut node: SearchNode) -> Result<(), EngineError> {
        if node.winner.is_some() {
            self.finalize(node);
            return Ok(());
        }

        if self.strategy.prune_branch(&node) {
            self.stats.branches_pruned += 1;
            return Ok(());
        }

        node.game.start_turn();

        // Effects alone may have decided the duel.
        if node.record_winner() {
            self.enqueue(node);
            return Ok(());
        }

        let actor = node.game.current_character_id();
        let actions = node.game.legal_actions(actor);

        // A turn-holder with nothing legal to do has lost.
        if actions.is_empty() {
            node.winner = Some(actor.opponent());
            self.enqueue(node);
            return Ok(());
        }

        let actions = if node.game.character(actor).role == Role::Caster {
            self.strategy.filter_caster_actions(&node.game, actions)
        } else {
            actions
        };

        if actions.len() == 1 {
            // Single continuation: advance in place, no clone needed.
            self.take_action(node, actor, actions[0])?;
        } else {
            for action in actions {
                self.take_action(node.clone(), actor, action)?;
            }
        }
        Ok(())
    }

    /// Apply an action to a branch and put it back on the frontier.
    fn take_action(
        &mut self,
        mut node: SearchNode,
        actor: CharacterId,
        action: ActionKind,
    ) -> Result<(), EngineError> {
        if node.game.character(actor).role == Role::Caster {
            node.mana_spent += action.mana_cost();
        }
        node.game.apply_action(actor, action)?;
        node.history.push_back(action);
        node.record_winner();
        self.enqueue(node);
        Ok(())
    }

    fn enqueue(&mut self, node: SearchNode) {
        trace!(
            mana_spent = node.mana_spent,
            turn = node.game.turn(),
            "enqueue"
        );
        self.frontier.push(node);
        self.stats.states_enqueued += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// Keep a terminal branch if it is the cheapest caster win so far.
    fn finalize(&mut self, node: SearchNode) {
        let Some(winner) = node.winner else { return };
        if node.game.character(winner).role != Role::Caster {
            return;
        }

        let cheaper = self
            .best
            .as_ref()
            .map_or(true, |best| node.mana_spent < best.mana_spent);
        if cheaper {
            debug!(mana_spent = node.mana_spent, "recorded winning line");
            self.best = Some(Solution {
                mana_spent: node.mana_spent,
                history: node.history,
                game: node.game,
            });
        }
    }

    /// Get statistics for the last run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Convenience entry point: build the duel and search it.
///
/// This is the whole external contract in one call - an attacker
/// description plus a strategy in, a minimal mana spend out.
pub fn minimal_mana_to_win<S: Strategy>(
    config: &DuelConfig,
    strategy: S,
) -> Result<Solution, SearchError> {
    DuelSearch::new(strategy).run(&config.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttackerConfig;
    use crate::search::strategy::Exhaustive;

    fn fixture() -> DuelConfig {
        DuelConfig::new(AttackerConfig::new(13, 8))
            .caster_hit_points(10)
            .caster_mana(250)
    }

    #[test]
    fn test_finds_the_known_minimal_line() {
        let solution = minimal_mana_to_win(&fixture(), Exhaustive).unwrap();

        assert_eq!(solution.mana_spent, 226);
        assert_eq!(
            solution.history.iter().copied().collect::<Vec<_>>(),
            vec![ActionKind::Poison, ActionKind::Strike, ActionKind::MagicMissile]
        );
    }

    #[test]
    fn test_exhaustion_when_caster_cannot_afford_anything() {
        let config = fixture().caster_mana(40);
        let err = minimal_mana_to_win(&config, Exhaustive).unwrap_err();

        assert!(matches!(err, SearchError::NoWinningLine { .. }));
    }

    #[test]
    fn test_state_limit_is_distinct_from_exhaustion() {
        let mut search =
            DuelSearch::new(Exhaustive).with_config(SearchConfig::default().with_max_states(1));
        let err = search.run(&fixture().build()).unwrap_err();

        assert_eq!(err, SearchError::StateLimit { limit: 1 });
    }

    #[test]
    fn test_stats_are_populated() {
        let mut search = DuelSearch::new(Exhaustive);
        search.run(&fixture().build()).unwrap();

        let stats = search.stats();
        assert!(stats.states_evaluated > 0);
        assert!(stats.states_enqueued >= stats.states_evaluated);
        assert!(stats.peak_frontier > 0);
    }
}
