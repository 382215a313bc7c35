//! Game-over detection and scoring.

use super::{draw::is_full, win::winner};
use crate::{Board, GameStatus, Player};
use tracing::{instrument, warn};

/// Returns true if someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a terminal board from X's point of view.
///
/// Returns `1` if X has won, `-1` if O has won and `0` for a draw. The score
/// is only meaningful on terminal boards; a board still in progress scores
/// `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => {
            if !is_full(board) {
                warn!("Utility requested for a board still in progress");
            }
            0
        }
    }
}

/// Classifies the board as in progress, won, or drawn.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
