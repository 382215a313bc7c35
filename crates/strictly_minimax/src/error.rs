//! Error types.

use crate::{Action, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// Attempted to mark a cell that already holds a mark.
///
/// This signals a caller bug: only actions from `legal_actions` are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid action {}: square already occupied by {}", action, occupant)]
pub struct InvalidActionError {
    /// The rejected action.
    pub action: Action,
    /// The player already holding the cell.
    pub occupant: Player,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
