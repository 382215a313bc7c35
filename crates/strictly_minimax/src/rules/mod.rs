//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The search engine only
//! reaches board contents through these functions.

pub mod draw;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use terminal::{is_terminal, status, utility};
pub use turn::{apply, current_player, legal_actions, successors};
pub use win::{Line, winner};
