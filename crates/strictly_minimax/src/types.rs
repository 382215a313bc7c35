//! Core board types for tic-tac-toe search.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first, maximizes utility).
    X,
    /// Player O (moves second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns true if this player maximizes utility.
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition copies the parent and sets one
/// square, so a board handed to the rules engine is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares as three rows of three.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No consistency checks are made; turn order is derived from mark
    /// counts whenever it is needed.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Gets the square at the given action's cell.
    pub fn get(&self, action: Action) -> Square {
        self.rows[action.row()][action.col()]
    }

    /// Checks if the square at the given cell is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Square::Empty
    }

    /// Returns a copy of this board with one square replaced.
    pub(crate) fn with(&self, action: Action, square: Square) -> Self {
        let mut next = *self;
        next.rows[action.row()][action.col()] = square;
        next
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Iterates every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Counts the marks placed by a player.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(player))
            .count()
    }

    /// Counts the occupied squares.
    pub fn filled(&self) -> usize {
        self.squares().filter(|s| *s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}
