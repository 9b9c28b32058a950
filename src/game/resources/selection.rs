//! Selection controller - the click interaction state machine
//!
//! [`handle_pick`] is the single entry point the input layer calls once per
//! resolved pick. It owns every transition of [`Selection`] and is the only
//! caller of [`execute_move`], which it feeds exclusively with moves it
//! enumerated itself.
//!
//! # Transitions
//!
//! | Current state   | Pick                      | Next state      |
//! |-----------------|---------------------------|-----------------|
//! | any             | piece `(side, instance)`  | `PieceSelected` |
//! | `PieceSelected` | preview `i` in range      | `NoSelection`   |
//! | any             | anything else / stale     | unchanged       |
//!
//! Feedback comes back as [`FeedbackCommand`]s instead of direct render
//! writes. A highlight is always switched off before the next one is switched
//! on, and preview markers are always sent as a full list.

use crate::game::error::GameResult;
use crate::game::events::FeedbackCommand;
use crate::game::rules::{execute_move, legal_moves, Board, Cell, Move, Side};
use crate::game::types::{ObjectClass, PickResult};
use bevy::prelude::*;
use tracing::{debug, trace};

/// The piece the player is about to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPiece {
    pub side: Side,
    /// Rendering instance index, only meaningful for the board it was resolved on
    pub instance_index: usize,
    pub cell: Cell,
    /// `legal_moves` for `cell` at selection time; preview `i` is move `i`
    pub legal_moves: Vec<Move>,
}

/// Resource holding the current selection
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    PieceSelected(SelectedPiece),
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::PieceSelected(_))
    }

    pub fn selected(&self) -> Option<&SelectedPiece> {
        match self {
            Selection::NoSelection => None,
            Selection::PieceSelected(selected) => Some(selected),
        }
    }

    /// Command that switches this selection's highlight off, if any
    pub fn highlight_off(&self) -> Option<FeedbackCommand> {
        self.selected().map(|selected| FeedbackCommand::Highlight {
            side: selected.side,
            instance_index: selected.instance_index,
            on: false,
        })
    }
}

/// Result of feeding one pick to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    pub selection: Selection,
    /// Feedback to apply, in order
    pub commands: Vec<FeedbackCommand>,
    /// The move played by this pick, with the captured cell for jumps
    pub executed: Option<Move>,
}

impl PickOutcome {
    fn unchanged(selection: Selection) -> Self {
        Self {
            selection,
            commands: Vec::new(),
            executed: None,
        }
    }

    /// True when the pick changed nothing at all
    pub fn is_noop(&self) -> bool {
        self.commands.is_empty() && self.executed.is_none()
    }
}

/// Apply one pick result to the selection state machine
///
/// `None` means the pick hit nothing. Stale instance indices and out-of-range
/// preview indices are absorbed as no-ops; only board contract violations
/// come back as errors.
pub fn handle_pick(
    board: &mut Board,
    selection: Selection,
    pick: Option<PickResult>,
) -> GameResult<PickOutcome> {
    let Some(pick) = pick else {
        trace!("[INPUT] Pick hit nothing");
        return Ok(PickOutcome::unchanged(selection));
    };

    if let Some(side) = pick.class.side() {
        return Ok(select_piece(board, selection, side, pick.instance_index));
    }

    match pick.class {
        ObjectClass::MovePreview => play_preview(board, selection, pick.instance_index),
        ObjectClass::SideA | ObjectClass::SideB | ObjectClass::Other => {
            trace!("[INPUT] Pick hit background (instance {})", pick.instance_index);
            Ok(PickOutcome::unchanged(selection))
        }
    }
}

fn select_piece(
    board: &Board,
    previous: Selection,
    side: Side,
    instance_index: usize,
) -> PickOutcome {
    let cell = match board.resolve_instance(side, instance_index) {
        Ok(cell) => cell,
        Err(e) => {
            debug!("[INPUT] Ignoring pick: {}", e);
            return PickOutcome::unchanged(previous);
        }
    };

    let legal_moves = legal_moves(board, cell.0, cell.1);
    let mut commands: Vec<FeedbackCommand> = previous.highlight_off().into_iter().collect();
    commands.push(FeedbackCommand::Highlight {
        side,
        instance_index,
        on: true,
    });
    commands.push(FeedbackCommand::SetPreviewMarkers {
        cells: legal_moves.iter().map(|m| m.to).collect(),
    });

    debug!(
        "[INPUT] Selected side {:?} instance {} at {:?} with {} moves",
        side,
        instance_index,
        cell,
        legal_moves.len()
    );

    PickOutcome {
        selection: Selection::PieceSelected(SelectedPiece {
            side,
            instance_index,
            cell,
            legal_moves,
        }),
        commands,
        executed: None,
    }
}

fn play_preview(
    board: &mut Board,
    selection: Selection,
    preview_index: usize,
) -> GameResult<PickOutcome> {
    let target = selection
        .selected()
        .and_then(|selected| Some((selected.cell, selected.legal_moves.get(preview_index)?.to)));

    let Some((from, to)) = target else {
        debug!(
            "[INPUT] Ignoring preview {} (selected: {})",
            preview_index,
            selection.is_selected()
        );
        return Ok(PickOutcome::unchanged(selection));
    };

    let captured = execute_move(board, from, to)?;
    let commands = selection
        .highlight_off()
        .into_iter()
        .chain([FeedbackCommand::clear_previews()])
        .collect();

    Ok(PickOutcome {
        selection: Selection::NoSelection,
        commands,
        executed: Some(Move { from, to, captured }),
    })
}
