//! Self-play: both sides follow the searcher until the game ends.

use crate::rules::{apply, status};
use crate::{Action, Board, GameStatus, InvalidActionError, Searcher};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Record of a finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Actions in the order they were played.
    actions: Vec<Action>,
    /// Board after the last action.
    final_board: Board,
    /// Result of the game.
    status: GameStatus,
}

/// Plays `board` out to the end, choosing every move with `searcher`.
///
/// A terminal `board` yields an empty record.
///
/// # Errors
///
/// Returns [`InvalidActionError`] if the searcher proposes an occupied cell.
#[instrument(skip(board, searcher))]
pub fn play_out(board: &Board, searcher: &mut Searcher) -> Result<GameRecord, InvalidActionError> {
    let mut board = *board;
    let mut actions = Vec::new();

    while let Some(action) = searcher.best_action(&board) {
        board = apply(&board, action)?;
        actions.push(action);
        debug!(%action, ply = actions.len(), "Played");
    }

    let status = status(&board);
    info!(plies = actions.len(), ?status, "Self-play finished");
    Ok(GameRecord {
        actions,
        final_board: board,
        status,
    })
}
