//! Core module - application configuration
//!
//! - [`GameSettings`] - board layout, renderer class ids, cell spacing
//! - [`settings_persistence`] - JSON load/save with fallback to defaults
//! - [`CorePlugin`] - inserts the loaded settings into the app
//! - [`CoreError`] - settings I/O, parse and validation failures
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use checkers3d::core::CorePlugin;
//! use checkers3d::game::CheckersPlugin;
//!
//! App::new()
//!     .add_plugins(MinimalPlugins)
//!     .add_plugins(CorePlugin::default())
//!     .add_plugins(CheckersPlugin)
//!     .run();
//! ```

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
