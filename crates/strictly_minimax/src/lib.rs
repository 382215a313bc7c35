//! Strictly Minimax - optimal tic-tac-toe play
//!
//! Computes the game-theoretically optimal move for the player to move using
//! minimax search with alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 grid values; every move yields a new board
//! - **Rules**: pure functions for turn order, legal moves, wins and scoring
//! - **Search**: recursive alpha-beta over the game tree, plus action selection
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, initial_state, is_terminal, select_optimal_action};
//!
//! # fn example() -> Result<(), strictly_minimax::InvalidActionError> {
//! let mut board = initial_state();
//! while let Some(action) = select_optimal_action(&board) {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod play;
mod rules;
mod search;
mod types;

// Crate-level exports - Board state
pub use action::Action;
pub use types::{Board, GameStatus, Player, Square, initial_state};

// Crate-level exports - Rules
pub use rules::{
    Line, apply, current_player, is_full, is_terminal, legal_actions, status, successors,
    utility, winner,
};

// Crate-level exports - Search
pub use search::{
    ALPHA_MIN, BETA_MAX, SearchStats, Searcher, minimax_value, select_optimal_action,
};

// Crate-level exports - Configuration and errors
pub use config::{RootWindow, SearchConfig};
pub use error::{ConfigError, InvalidActionError};

// Crate-level exports - Self-play
pub use play::{GameRecord, play_out};
