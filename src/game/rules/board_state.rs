//! Board state representation for move generation
//!
//! The board is a flat, row-major grid of [`CellState`] values. Cell `(col, row)`
//! lives at index `row * width + col`. Occupancy is the single source of truth
//! for piece identity: a rendered piece is "the n-th occupied cell of its side
//! in ascending index order", see [`Board::nth_occupied_cell`].

use crate::game::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate as `(col, row)`, both zero-based
pub type Cell = (u8, u8);

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// Seeded on the rows nearest row 0, moves toward increasing row
    A,
    /// Seeded on the rows nearest the last row, moves toward decreasing row
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row delta of one forward step
    pub fn forward(self) -> i16 {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }
}

/// Occupancy of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    OwnedBy(Side),
}

impl CellState {
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn owner(self) -> Option<Side> {
        match self {
            CellState::Empty => None,
            CellState::OwnedBy(side) => Some(side),
        }
    }
}

/// Dimensions and seeding depth used to build the opening position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub width: u8,
    pub height: u8,
    /// Number of rows seeded with pieces at each end of the board
    pub seed_rows: u8,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            seed_rows: 3,
        }
    }
}

/// Checkers board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<CellState>,
}

impl Board {
    /// Opening position on the reference 8x8 layout
    pub fn new_game() -> Self {
        Self::from_layout(BoardLayout::default())
    }

    /// Opening position for `layout`
    ///
    /// Only dark cells (`col % 2 == row % 2`) are seeded. Side A fills the
    /// first `seed_rows` rows, Side B the last `seed_rows` rows.
    pub fn from_layout(layout: BoardLayout) -> Self {
        let mut board = Self::empty(layout.width, layout.height);
        let back_rows_start = layout.height.saturating_sub(layout.seed_rows);

        for index in 0..board.cells.len() {
            let (col, row) = board.index_to_cell(index);
            if col % 2 != row % 2 {
                continue;
            }
            if row < layout.seed_rows {
                board.cells[index] = CellState::OwnedBy(Side::A);
            } else if row >= back_rows_start {
                board.cells[index] = CellState::OwnedBy(Side::B);
            }
        }

        board
    }

    /// Board with every cell empty
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        }
    }

    /// Custom position, e.g. for puzzles and tests
    pub fn from_pieces(width: u8, height: u8, pieces: &[(Side, Cell)]) -> GameResult<Self> {
        let mut board = Self::empty(width, height);
        for &(side, (col, row)) in pieces {
            board.check_bounds(col as i16, row as i16)?;
            board.set((col, row), CellState::OwnedBy(side));
        }
        Ok(board)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn in_bounds(&self, col: i16, row: i16) -> bool {
        col >= 0 && row >= 0 && col < self.width as i16 && row < self.height as i16
    }

    pub fn cell_state(&self, col: u8, row: u8) -> GameResult<CellState> {
        self.check_bounds(col as i16, row as i16)?;
        Ok(self.cells[self.cell_to_index(col, row)])
    }

    /// Number of cells currently owned by `side`
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == CellState::OwnedBy(side))
            .count()
    }

    /// Cells owned by `side` in ascending index order
    ///
    /// This is the order in which the rendering layer must lay out the
    /// instances of a side.
    pub fn occupied_cells(&self, side: Side) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == CellState::OwnedBy(side))
            .map(|(index, _)| self.index_to_cell(index))
    }

    /// Cell of the `n`-th piece of `side` (0-based, ascending index order)
    pub fn nth_occupied_cell(&self, side: Side, n: usize) -> Option<Cell> {
        self.occupied_cells(side).nth(n)
    }

    /// Resolve a rendered instance index back to its board cell
    pub fn resolve_instance(&self, side: Side, instance_index: usize) -> GameResult<Cell> {
        self.nth_occupied_cell(side, instance_index)
            .ok_or(GameError::StaleReference {
                side,
                instance_index,
            })
    }

    pub(crate) fn cell_to_index(&self, col: u8, row: u8) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub(crate) fn index_to_cell(&self, index: usize) -> Cell {
        let width = self.width as usize;
        ((index % width) as u8, (index / width) as u8)
    }

    pub(crate) fn check_bounds(&self, col: i16, row: i16) -> GameResult<()> {
        if self.in_bounds(col, row) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Signed lookup used by move generation; `None` off the board
    pub(super) fn get(&self, col: i16, row: i16) -> Option<CellState> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.cells[self.cell_to_index(col as u8, row as u8)])
    }

    /// Caller guarantees `cell` is in bounds
    pub(super) fn set(&mut self, cell: Cell, state: CellState) {
        let index = self.cell_to_index(cell.0, cell.1);
        self.cells[index] = state;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for Board {
    /// Renders the highest row first, `a`/`b` for pieces and `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let symbol = match self.cells[self.cell_to_index(col, row)] {
                    CellState::Empty => '.',
                    CellState::OwnedBy(Side::A) => 'a',
                    CellState::OwnedBy(Side::B) => 'b',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
