//! Checkers plugin - registers the click-to-move loop
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] should be added first so the loaded
//!   [`GameSettings`] seed the board. Without it the defaults are used.
//! - A pick oracle is installed separately, e.g. with
//!   [`install_grid_oracle`](crate::rendering::picking::install_grid_oracle).
//!   Clicks arriving without one are logged and ignored.
//!
//! # System Organization
//!
//! Systems run in [`GameSystems`] sets, chained
//! `Input -> Execution -> Visual`. See [`super::systems`] for the data flow.

use super::events::{FeedbackCommand, NewGameRequested, PointerClick};
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::GameSettings;
use crate::rendering::picking::{write_pick_buffer, SharedPickBuffer};
use crate::rendering::utils::CellToWorld;
use bevy::prelude::*;

/// Game plugin for 3D-click checkers
pub struct CheckersPlugin;

impl Plugin for CheckersPlugin {
    fn build(&self, app: &mut App) {
        // Settings go first: GameBoard and CellToWorld read them in from_world
        app.init_resource::<GameSettings>()
            .init_resource::<GameBoard>()
            .init_resource::<Selection>()
            .init_resource::<PickSlot>()
            .init_resource::<MoveHistory>()
            .init_resource::<FeedbackState>()
            .init_resource::<PieceInstances>()
            .init_resource::<CellToWorld>()
            .init_resource::<SharedPickBuffer>()
            .add_message::<PointerClick>()
            .add_message::<NewGameRequested>()
            .add_message::<FeedbackCommand>()
            .configure_sets(
                Update,
                (GameSystems::Input, GameSystems::Execution, GameSystems::Visual).chain(),
            )
            .add_systems(Update, dispatch_pick_requests.in_set(GameSystems::Input))
            .add_systems(
                Update,
                (resolve_pick_results, start_new_game)
                    .chain()
                    .in_set(GameSystems::Execution),
            )
            .add_systems(
                Update,
                (apply_feedback_commands, sync_piece_instances, write_pick_buffer)
                    .chain()
                    .in_set(GameSystems::Visual),
            );
    }
}
