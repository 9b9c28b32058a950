//! Game resources - global state of the click-to-move loop
//!
//! # Resource Categories
//!
//! ## Board
//! - [`GameBoard`] - The live board, replaced on new game
//! - [`MoveHistory`] - Moves played this game
//!
//! ## Player Interaction
//! - [`Selection`] - Selection controller state, driven by [`handle_pick`]
//! - [`PickSlot`] - The single outstanding pick request
//! - [`PickOracleHandle`] - The installed [`PickOracle`]
//!
//! ## Render Feedback
//! - [`FeedbackState`] - Highlighted instances and preview markers
//! - [`PieceInstances`] - Per-side instance layout derived from the board
//!
//! All resources are registered in [`crate::game::plugin::CheckersPlugin`].

pub mod board;
pub mod feedback;
pub mod history;
pub mod pick_slot;
pub mod selection;


pub use board::*;
pub use feedback::*;
pub use history::*;
pub use pick_slot::*;
pub use selection::*;
