//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings live in `settings.json` inside the platform configuration
//! directory, falling back to the working directory when none exists.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] report failures to the caller.
//! [`load_or_default`] is the startup path: any failure is logged and the
//! defaults are used, so a broken file never prevents a game from starting.

use crate::core::error::{CoreError, CoreResult};
use crate::core::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default location of the settings file
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "checkers3d") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path).map_err(CoreError::io(path))?;
    let settings: GameSettings =
        serde_json::from_str(&contents).map_err(CoreError::serialization(path))?;
    settings.validate()?;
    Ok(settings)
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(CoreError::io(parent))?;
        }
    }
    let json = serde_json::to_string_pretty(settings).map_err(CoreError::serialization(path))?;
    fs::write(path, json).map_err(CoreError::io(path))?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}
