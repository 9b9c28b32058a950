//! Move history resource

use crate::game::rules::{Move, Side};
use bevy::prelude::*;

/// One executed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub mv: Move,
}

/// Resource to store the moves played this game
#[derive(Resource, Debug, Default)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Jumps played by `side`
    pub fn captures_by(&self, side: Side) -> usize {
        self.moves
            .iter()
            .filter(|record| record.side == side && record.mv.is_jump())
            .count()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
