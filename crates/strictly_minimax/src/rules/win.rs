//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player, Square};
use tracing::instrument;

/// One of the eight lines that wins the game when filled by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Returns the three cells on this line.
    pub fn cells(self) -> [Action; 3] {
        let at = |i: usize| Action::ALL[i];
        match self {
            Line::TopRow => [at(0), at(1), at(2)],
            Line::MiddleRow => [at(3), at(4), at(5)],
            Line::BottomRow => [at(6), at(7), at(8)],
            Line::LeftColumn => [at(0), at(3), at(6)],
            Line::CenterColumn => [at(1), at(4), at(7)],
            Line::RightColumn => [at(2), at(5), at(8)],
            Line::MainDiagonal => [at(0), at(4), at(8)],
            Line::AntiDiagonal => [at(2), at(4), at(6)],
        }
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// Returns the player with three in a row, if any.
///
/// Lines are scanned in a fixed order and the first completed one wins.
/// Boards where both players hold a line cannot arise from legal play and
/// are not re-validated.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    <Line as strum::IntoEnumIterator>::iter().find_map(|line| line.owner(board))
}
