//! Checkers game module
//!
//! Pure game logic lives in [`rules`] and the selection controller in
//! [`resources::selection`]; neither depends on the ECS scheduler. The rest
//! wires them into Bevy.
//!
//! # Module Organization
//!
//! - `rules` - Board model and move generation
//! - `types` - Pick results and object classes
//! - `events` - Messages in and out of the game loop
//! - `resources` - Global game state and the selection controller
//! - `systems` - ECS systems for input, execution and visuals
//! - `plugin` - CheckersPlugin that registers everything

pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use error::{GameError, GameResult};
pub use plugin::CheckersPlugin;
