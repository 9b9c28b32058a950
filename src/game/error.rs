//! Error types for game module
//!
//! Board-level contract violations surface to the caller as [`GameError`].
//! Stale pick references are produced here too, but the selection controller
//! absorbs them as silent no-ops.

use crate::game::rules::Side;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Cell coordinates outside the board. Correct callers never produce this.
    #[error("Cell ({col}, {row}) is outside the {width}x{height} board")]
    OutOfBounds {
        col: i16,
        row: i16,
        width: u8,
        height: u8,
    },

    /// A rendered instance index that no longer maps to an occupied cell
    #[error("Instance {instance_index} of side {side:?} does not resolve to an occupied cell")]
    StaleReference { side: Side, instance_index: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
