//! Render-visible state driven by the selection controller
//!
//! [`FeedbackState`] is what the renderer's highlight and preview buffers
//! hold after every [`FeedbackCommand`] has been applied. [`PieceInstances`]
//! is the per-side instance layout derived from the board.

use crate::game::events::FeedbackCommand;
use crate::game::rules::{Board, Cell, Side};
use crate::rendering::utils::CellToWorld;
use bevy::prelude::*;
use std::collections::BTreeSet;

/// Highlighted piece instances and the current preview markers
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    highlighted: BTreeSet<(Side, usize)>,
    preview_cells: Vec<Cell>,
    preview_positions: Vec<Vec2>,
}

impl FeedbackState {
    pub fn apply(&mut self, command: &FeedbackCommand, cell_to_world: &CellToWorld) {
        match command {
            FeedbackCommand::Highlight {
                side,
                instance_index,
                on: true,
            } => {
                self.highlighted.insert((*side, *instance_index));
            }
            FeedbackCommand::Highlight {
                side,
                instance_index,
                on: false,
            } => {
                self.highlighted.remove(&(*side, *instance_index));
            }
            FeedbackCommand::SetPreviewMarkers { cells } => {
                self.preview_cells.clone_from(cells);
                self.reproject(cell_to_world);
            }
        }
    }

    /// Recompute preview marker positions for a new cell-to-world mapping
    pub fn reproject(&mut self, cell_to_world: &CellToWorld) {
        self.preview_positions.clear();
        self.preview_positions
            .extend(self.preview_cells.iter().map(|&cell| cell_to_world.position(cell)));
    }

    pub fn is_highlighted(&self, side: Side, instance_index: usize) -> bool {
        self.highlighted.contains(&(side, instance_index))
    }

    pub fn highlighted(&self) -> impl Iterator<Item = (Side, usize)> + '_ {
        self.highlighted.iter().copied()
    }

    /// Preview marker cells; marker `i` is instance `i` of the preview mesh
    pub fn preview_cells(&self) -> &[Cell] {
        &self.preview_cells
    }

    pub fn preview_positions(&self) -> &[Vec2] {
        &self.preview_positions
    }
}

/// World positions of every rendered piece, per side, in instance order
///
/// Instance `n` of a side is `Board::nth_occupied_cell(side, n)`, so the layout
/// is rebuilt from the board rather than patched.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PieceInstances {
    side_a: Vec<(Cell, Vec2)>,
    side_b: Vec<(Cell, Vec2)>,
}

impl PieceInstances {
    pub fn rebuild(&mut self, board: &Board, cell_to_world: &CellToWorld) {
        for side in [Side::A, Side::B] {
            let instances = self.instances_mut(side);
            instances.clear();
            instances.extend(
                board
                    .occupied_cells(side)
                    .map(|cell| (cell, cell_to_world.position(cell))),
            );
        }
    }

    /// `(cell, world position)` per instance of `side`
    pub fn instances(&self, side: Side) -> &[(Cell, Vec2)] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    fn instances_mut(&mut self, side: Side) -> &mut Vec<(Cell, Vec2)> {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }
}
