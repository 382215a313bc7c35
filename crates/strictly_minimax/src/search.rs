//! Minimax search with alpha-beta pruning.
//!
//! X maximizes and O minimizes the utility of terminal boards. The search
//! walks the game tree depth-first, keeping only the current path alive, and
//! stops exploring a node's remaining children once `alpha >= beta`.

use crate::rules::{current_player, is_terminal, successors, utility};
use crate::{Action, Board, Player, RootWindow, SearchConfig};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Lower bound of the search window ("minus infinity").
pub const ALPHA_MIN: i32 = i32::MIN;

/// Upper bound of the search window ("plus infinity").
pub const BETA_MAX: i32 = i32::MAX;

/// Counters gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, terminal or not.
    nodes: u64,
    /// Times a node stopped exploring its children early.
    cutoffs: u64,
}

/// Minimax searcher.
///
/// Holds the configuration and accumulates [`SearchStats`] across calls
/// until they are taken with [`Searcher::take_stats`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the statistics gathered so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the statistics gathered so far and resets them.
    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// Returns the minimax value of `board` with `player` to move, searched
    /// within the window `(alpha, beta)`.
    ///
    /// With the full window the result is the exact utility under optimal
    /// play. With a narrower window a result outside it is only a bound.
    pub fn value(&mut self, board: &Board, player: Player, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;

        if is_terminal(board) {
            return utility(board);
        }

        if player.is_maximizer() {
            let mut best = ALPHA_MIN;
            for (_, child) in successors(board) {
                best = best.max(self.value(&child, player.opponent(), alpha, beta));
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    trace!(alpha, beta, "Beta cutoff");
                    break;
                }
            }
            best
        } else {
            let mut best = BETA_MAX;
            for (_, child) in successors(board) {
                best = best.min(self.value(&child, player.opponent(), alpha, beta));
                beta = beta.min(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    trace!(alpha, beta, "Alpha cutoff");
                    break;
                }
            }
            best
        }
    }

    /// Returns an optimal action for the player to move, or `None` if the
    /// game is over.
    ///
    /// Among equally good actions the first one found in
    /// [`legal_actions`](crate::legal_actions) order wins.
    #[instrument(skip(self, board), fields(root_window = ?self.config.root_window()))]
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        if is_terminal(board) {
            debug!("Board is terminal, no action to select");
            return None;
        }

        let player = current_player(board);
        let maximizing = player.is_maximizer();
        let mut alpha = ALPHA_MIN;
        let mut beta = BETA_MAX;
        let mut best: Option<(Action, i32)> = None;

        for (action, child) in successors(board) {
            let value = match self.config.root_window() {
                RootWindow::Threaded => self.value(&child, player.opponent(), alpha, beta),
                RootWindow::Full => self.value(&child, player.opponent(), ALPHA_MIN, BETA_MAX),
            };
            trace!(%action, value, "Root action searched");

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((action, value));
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
        }

        if let Some((action, value)) = best {
            debug!(
                %player,
                %action,
                value,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                "Selected action"
            );
        }
        best.map(|(action, _)| action)
    }

    /// Returns the exact minimax value of every legal action.
    ///
    /// Each child is searched with the full window, so values can be
    /// compared directly. Empty when the board is terminal.
    #[instrument(skip(self, board))]
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        if is_terminal(board) {
            return Vec::new();
        }

        let next = current_player(board).opponent();
        successors(board)
            .map(|(action, child)| (action, self.value(&child, next, ALPHA_MIN, BETA_MAX)))
            .collect()
    }
}

/// Returns the minimax value of `board` with `player` to move, searched
/// within `(alpha, beta)`, using the default configuration.
///
/// Pass [`ALPHA_MIN`] and [`BETA_MAX`] for the exact value.
pub fn minimax_value(board: &Board, player: Player, alpha: i32, beta: i32) -> i32 {
    Searcher::default().value(board, player, alpha, beta)
}

/// Returns an optimal action for the player to move, or `None` on a
/// terminal board.
#[instrument(skip(board))]
pub fn select_optimal_action(board: &Board) -> Option<Action> {
    Searcher::default().best_action(board)
}
