//! Checkers movement rules
//!
//! Pure functions over a [`Board`]. Pieces only move forward (no kings), a jump
//! is a single hop, and captures are never mandatory.

use super::board_state::{Board, Cell, CellState, Side};
use crate::game::error::GameResult;
use tracing::trace;

/// A candidate transition produced by [`legal_moves`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    /// Midpoint cell, set iff the move is a jump
    pub captured: Option<Cell>,
}

impl Move {
    pub fn is_jump(&self) -> bool {
        self.captured.is_some()
    }
}

/// Column offsets in output order: left diagonal, then right diagonal
const DIAGONALS: [i16; 2] = [-1, 1];

/// Get all legal moves for the piece at `(col, row)`
///
/// Returns simple moves first (left, right), then jumps (left, right). Callers
/// index into this sequence to recover which preview marker was clicked, so the
/// order is part of the contract. Empty or off-board cells yield no moves.
pub fn legal_moves(board: &Board, col: u8, row: u8) -> Vec<Move> {
    let (col, row) = (col as i16, row as i16);
    let Some(side) = board.get(col, row).and_then(CellState::owner) else {
        return Vec::new();
    };

    let forward = side.forward();
    let from = (col as u8, row as u8);
    let mut moves = Vec::with_capacity(4);

    for dc in DIAGONALS {
        let (to_col, to_row) = (col + dc, row + forward);
        if board.get(to_col, to_row) == Some(CellState::Empty) {
            moves.push(Move {
                from,
                to: (to_col as u8, to_row as u8),
                captured: None,
            });
        }
    }

    for dc in DIAGONALS {
        let (to_col, to_row) = (col + 2 * dc, row + 2 * forward);
        if board.get(to_col, to_row) != Some(CellState::Empty) {
            continue;
        }
        let (mid_col, mid_row) = (col + dc, row + forward);
        if board.get(mid_col, mid_row) == Some(CellState::OwnedBy(side.opponent())) {
            moves.push(Move {
                from,
                to: (to_col as u8, to_row as u8),
                captured: Some((mid_col as u8, mid_row as u8)),
            });
        }
    }

    moves
}

/// Move the occupant of `from` to `to`, removing the jumped piece if any
///
/// # Preconditions
///
/// `to` must come from `legal_moves(board, from)`. Legality is not re-checked:
/// when both deltas have magnitude 2 the midpoint `(from + to) / 2` is emptied
/// whatever it holds.
///
/// # Errors
///
/// [`GameError::OutOfBounds`](crate::game::error::GameError::OutOfBounds) if
/// either cell is off the board; the board is left untouched.
///
/// Returns the captured cell for a jump.
pub fn execute_move(board: &mut Board, from: Cell, to: Cell) -> GameResult<Option<Cell>> {
    board.check_bounds(from.0 as i16, from.1 as i16)?;
    board.check_bounds(to.0 as i16, to.1 as i16)?;

    let occupant = board.get(from.0 as i16, from.1 as i16).unwrap_or_default();
    board.set(to, occupant);
    board.set(from, CellState::Empty);

    let dc = to.0 as i16 - from.0 as i16;
    let dr = to.1 as i16 - from.1 as i16;
    if dc.abs() != 2 || dr.abs() != 2 {
        return Ok(None);
    }

    let midpoint = (
        ((from.0 as u16 + to.0 as u16) / 2) as u8,
        ((from.1 as u16 + to.1 as u16) / 2) as u8,
    );
    board.set(midpoint, CellState::Empty);
    trace!("[RULES] Jump {:?} -> {:?} cleared {:?}", from, to, midpoint);
    Ok(Some(midpoint))
}

/// Whether any piece of `side` has at least one legal move
pub fn has_any_moves(board: &Board, side: Side) -> bool {
    board
        .occupied_cells(side)
        .any(|(col, row)| !legal_moves(board, col, row).is_empty())
}
