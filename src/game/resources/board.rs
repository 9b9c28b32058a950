//! Live board resource

use crate::core::GameSettings;
use crate::game::rules::Board;
use bevy::prelude::*;

/// The board of the game in progress
///
/// Mutated only by the selection controller while resolving a pick, and
/// replaced wholesale on a new game.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct GameBoard(pub Board);

impl FromWorld for GameBoard {
    fn from_world(world: &mut World) -> Self {
        let layout = world
            .get_resource::<GameSettings>()
            .map(|settings| settings.board)
            .unwrap_or_default();
        GameBoard(Board::from_layout(layout))
    }
}
