//! New game handling

use crate::core::GameSettings;
use crate::game::events::{FeedbackCommand, NewGameRequested};
use crate::game::resources::*;
use crate::game::rules::{Board, Side};
use bevy::prelude::*;
use tracing::info;

/// Re-seed the board from settings and clear everything tied to the old one
///
/// Runs after [`resolve_pick_results`](super::resolve_pick_results) in the
/// same frame. A pick still pending at that point was answered from the old
/// board's picture, so the slot is invalidated and its result is dropped when
/// it arrives.
pub fn start_new_game(
    mut requests: MessageReader<NewGameRequested>,
    settings: Res<GameSettings>,
    mut board: ResMut<GameBoard>,
    mut selection: ResMut<Selection>,
    mut history: ResMut<MoveHistory>,
    mut slot: ResMut<PickSlot>,
    mut feedback: MessageWriter<FeedbackCommand>,
) {
    if requests.read().count() == 0 {
        return;
    }

    if let Some(off) = selection.highlight_off() {
        feedback.write(off);
    }
    feedback.write(FeedbackCommand::clear_previews());

    slot.invalidate();
    board.0 = Board::from_layout(settings.board);
    selection.set_if_neq(Selection::NoSelection);
    history.clear();

    info!(
        "[GAME] New game on a {}x{} board, {} pieces per side",
        board.width(),
        board.height(),
        board.count(Side::A)
    );
}
