//! Checkers rules module - Pure game logic without ECS coupling
//!
//! Board representation and move generation as plain functions and values, so
//! they can be unit tested without an `App` and reused by any front end.
//!
//! # Module Structure
//!
//! - `board_state` - Board grid, sides, cell occupancy and instance resolution
//! - `piece_moves` - Forward-only diagonal moves, single-hop jumps, move execution

pub mod board_state;
pub mod piece_moves;


pub use board_state::{Board, BoardLayout, Cell, CellState, Side};
pub use piece_moves::{execute_move, has_any_moves, legal_moves, Move};
