//! Turn order, legal moves, and move application.

use crate::{Action, Board, InvalidActionError, Player, Square};
use tracing::{instrument, trace};

/// Returns the player whose turn it is.
///
/// X moves first and on every tie, so the mover is X whenever X has not
/// placed more marks than O.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell, in row-major order.
///
/// The actions are distinct and the list is empty exactly when the board is
/// full. Order only matters for tie-breaking between equally good moves.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board after the player to move marks `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidActionError`] if the cell is already occupied.
#[instrument(level = "trace", skip(board, action), fields(action = %action))]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    if let Square::Occupied(occupant) = board.get(action) {
        return Err(InvalidActionError { action, occupant });
    }

    let player = current_player(board);
    trace!(%player, "Placing mark");
    Ok(board.with(action, Square::Occupied(player)))
}

/// Yields each legal action paired with the board it produces.
///
/// Equivalent to calling [`apply`] on every entry of [`legal_actions`], but
/// infallible since only empty cells are visited.
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let player = current_player(board);
    legal_actions(board)
        .into_iter()
        .map(move |action| (action, board.with(action, Square::Occupied(player))))
}
