//! Visual state updates
//!
//! Keeps the render-facing resources ([`FeedbackState`], [`PieceInstances`])
//! in step with the board and the controller's feedback commands.

use crate::game::events::FeedbackCommand;
use crate::game::resources::{FeedbackState, GameBoard, PieceInstances};
use crate::rendering::utils::CellToWorld;
use bevy::prelude::*;
use tracing::trace;

/// Apply feedback commands to the highlight and preview state, in order
///
/// Markers already on screen are re-placed when the cell-to-world mapping
/// is swapped.
pub fn apply_feedback_commands(
    mut commands: MessageReader<FeedbackCommand>,
    mut feedback: ResMut<FeedbackState>,
    cell_to_world: Res<CellToWorld>,
) {
    if cell_to_world.is_changed() && !feedback.preview_cells().is_empty() {
        feedback.reproject(&cell_to_world);
    }
    for command in commands.read() {
        trace!("[INPUT] Feedback {:?}", command);
        feedback.apply(command, &cell_to_world);
    }
}

/// Recompute per-side instance transforms after the board changed
pub fn sync_piece_instances(
    board: Res<GameBoard>,
    cell_to_world: Res<CellToWorld>,
    mut instances: ResMut<PieceInstances>,
) {
    if !(board.is_changed() || cell_to_world.is_changed()) {
        return;
    }
    instances.rebuild(&board, &cell_to_world);
}
