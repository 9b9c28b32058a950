//! Core plugin - loads configuration before any game plugin builds

use super::settings_persistence::{load_or_default, settings_path};
use super::GameSettings;
use bevy::prelude::*;
use std::path::PathBuf;

/// Inserts [`GameSettings`] into the app
///
/// Settings are read synchronously in `build()` so that resources created by
/// later plugins (the board in particular) see the configured layout. Add this
/// plugin before [`CheckersPlugin`](crate::game::CheckersPlugin).
#[derive(Debug, Clone, Default)]
pub struct CorePlugin {
    /// Settings file to read; `None` uses the platform config directory
    pub settings_path: Option<PathBuf>,
}

impl CorePlugin {
    pub fn with_settings_path(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: Some(path.into()),
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if app.world().contains_resource::<GameSettings>() {
            return;
        }
        let path = self.settings_path.clone().unwrap_or_else(settings_path);
        app.insert_resource(load_or_default(&path));
    }
}
