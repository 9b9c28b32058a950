//! Core resources for game-wide configuration
//!
//! [`GameSettings`] is loaded once at startup (see
//! [`settings_persistence`](super::settings_persistence)) and read by the game
//! plugin when it seeds the board and translates pick results.

use crate::core::error::{CoreError, CoreResult};
use crate::game::rules::BoardLayout;
use crate::game::types::{ObjectClass, PickResult, RawPick};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Largest board edge accepted from a settings file
pub const MAX_BOARD_EDGE: u8 = 32;

/// Resource holding user-tunable configuration
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Board dimensions and opening depth
    pub board: BoardLayout,

    /// Renderer class ids for each pickable object kind
    pub mesh_classes: MeshClassMap,

    /// World units between neighbouring cell centres
    pub cell_spacing: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board: BoardLayout::default(),
            mesh_classes: MeshClassMap::default(),
            cell_spacing: 0.235,
        }
    }
}

impl GameSettings {
    /// Reject configurations the board or the pick translation cannot honour
    pub fn validate(&self) -> CoreResult<()> {
        let BoardLayout {
            width,
            height,
            seed_rows,
        } = self.board;

        if !(1..=MAX_BOARD_EDGE).contains(&width) || !(1..=MAX_BOARD_EDGE).contains(&height) {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "board must be between 1x1 and {MAX_BOARD_EDGE}x{MAX_BOARD_EDGE}, got {width}x{height}"
                ),
            });
        }
        if seed_rows as u16 * 2 > height as u16 {
            return Err(CoreError::InvalidSettings {
                message: format!("{seed_rows} seed rows per side do not fit in {height} rows"),
            });
        }
        if !self.cell_spacing.is_finite() || self.cell_spacing <= 0.0 {
            return Err(CoreError::InvalidSettings {
                message: format!("cell_spacing must be positive, got {}", self.cell_spacing),
            });
        }
        self.mesh_classes.validate()
    }
}

/// Mapping from renderer class ids to [`ObjectClass`]
///
/// The reference renderer draws the background as 0, Side A pieces as 3,
/// Side B pieces as 4 and move previews as 5. Unlisted ids are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshClassMap {
    pub background: u32,
    pub side_a: u32,
    pub side_b: u32,
    pub move_preview: u32,
}

impl Default for MeshClassMap {
    fn default() -> Self {
        Self {
            background: 0,
            side_a: 3,
            side_b: 4,
            move_preview: 5,
        }
    }
}

impl MeshClassMap {
    pub fn classify(&self, class_id: u32) -> ObjectClass {
        if class_id == self.side_a {
            ObjectClass::SideA
        } else if class_id == self.side_b {
            ObjectClass::SideB
        } else if class_id == self.move_preview {
            ObjectClass::MovePreview
        } else {
            ObjectClass::Other
        }
    }

    /// Renderer id for `class`; `Other` maps to the background id
    pub fn class_id(&self, class: ObjectClass) -> u32 {
        match class {
            ObjectClass::SideA => self.side_a,
            ObjectClass::SideB => self.side_b,
            ObjectClass::MovePreview => self.move_preview,
            ObjectClass::Other => self.background,
        }
    }

    pub fn translate(&self, raw: RawPick) -> PickResult {
        PickResult::new(self.classify(raw.class_id), raw.instance_index as usize)
    }

    fn validate(&self) -> CoreResult<()> {
        let ids = [self.background, self.side_a, self.side_b, self.move_preview];
        for (i, id) in ids.iter().enumerate() {
            if ids[i + 1..].contains(id) {
                return Err(CoreError::InvalidSettings {
                    message: format!("mesh class id {id} is assigned to more than one class"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_reference_class_ids() {
        let map = MeshClassMap::default();
        assert_eq!(map.classify(0), ObjectClass::Other);
        assert_eq!(map.classify(3), ObjectClass::SideA);
        assert_eq!(map.classify(4), ObjectClass::SideB);
        assert_eq!(map.classify(5), ObjectClass::MovePreview);
        assert_eq!(map.classify(42), ObjectClass::Other);
    }

    #[test]
    fn test_remapped_class_ids() {
        let map = MeshClassMap {
            background: 9,
            side_a: 1,
            side_b: 2,
            move_preview: 7,
        };
        assert_eq!(
            map.translate(RawPick {
                instance_index: 4,
                class_id: 7
            }),
            PickResult::new(ObjectClass::MovePreview, 4)
        );
        assert_eq!(map.classify(3), ObjectClass::Other);
        assert_eq!(map.class_id(ObjectClass::SideB), 2);
    }

    #[test]
    fn test_duplicate_class_ids_rejected() {
        let settings = GameSettings {
            mesh_classes: MeshClassMap {
                side_b: 3,
                ..MeshClassMap::default()
            },
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_oversized_seed_rows_rejected() {
        let settings = GameSettings {
            board: BoardLayout {
                width: 8,
                height: 8,
                seed_rows: 5,
            },
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_dimensions_and_spacing_rejected() {
        let mut settings = GameSettings::default();
        settings.board.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = GameSettings::default();
        settings.board.height = MAX_BOARD_EDGE + 1;
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            cell_spacing: f32::NAN,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
