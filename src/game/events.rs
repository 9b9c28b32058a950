use crate::game::rules::{Cell, Side};
use bevy::prelude::*;

/// A primary click at a pixel of the rendered view
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    pub x: u32,
    pub y: u32,
}

/// Replace the board with a fresh opening position
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct NewGameRequested;

/// Render-visible feedback requested by the selection controller
///
/// The rendering layer applies these in order. Preview markers are always sent
/// as the complete list so the renderer never has to diff.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCommand {
    Highlight {
        side: Side,
        instance_index: usize,
        on: bool,
    },
    SetPreviewMarkers {
        cells: Vec<Cell>,
    },
}

impl FeedbackCommand {
    pub fn clear_previews() -> Self {
        FeedbackCommand::SetPreviewMarkers { cells: Vec::new() }
    }
}
