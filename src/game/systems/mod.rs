//! Game systems
//!
//! - [`input`] - Pick dispatch and resolution through the selection controller
//! - [`game_init`] - New game handling
//! - [`visual`] - Feedback and instance layout updates
//!
//! ```text
//! Input      dispatch_pick_requests        PointerClick -> PickSlot
//! Execution  resolve_pick_results          PickSlot -> Selection, GameBoard, FeedbackCommand
//!            start_new_game                NewGameRequested -> GameBoard, FeedbackCommand
//! Visual     apply_feedback_commands       FeedbackCommand -> FeedbackState
//!            sync_piece_instances          GameBoard -> PieceInstances
//!            write_pick_buffer             PieceInstances, FeedbackState -> PickBuffer
//! ```

pub mod game_init;
pub mod input;
pub mod visual;

pub use game_init::*;
pub use input::*;
pub use visual::*;
