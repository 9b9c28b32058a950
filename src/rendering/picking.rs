//! Headless object-id picking
//!
//! The GPU pick pass writes an `(instance, class)` pair per pixel and reads one
//! back asynchronously. [`PickBuffer`] is the same idea at cell resolution:
//! one entry per board cell, redrawn every time the pieces or preview markers
//! move. [`GridPickOracle`] answers clicks from it, treating each cell as a
//! `cell_px` square with column along x and row along y.

use crate::core::{GameSettings, MeshClassMap};
use crate::game::resources::{FeedbackState, GameBoard, PickFuture, PickOracle, PickOracleHandle, PieceInstances};
use crate::game::rules::{Cell, Side};
use crate::game::types::{ObjectClass, RawPick};
use bevy::prelude::*;
use futures_lite::future;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Object id per board cell, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickBuffer {
    width: u8,
    height: u8,
    entries: Vec<RawPick>,
}

impl PickBuffer {
    /// Redraw the buffer: background first, then pieces, then preview markers
    ///
    /// Background entries carry the cell index as their instance index.
    pub fn rebuild(
        &mut self,
        width: u8,
        height: u8,
        instances: &PieceInstances,
        feedback: &FeedbackState,
        classes: &MeshClassMap,
    ) {
        self.width = width;
        self.height = height;
        self.entries.clear();
        self.entries.extend((0..width as u32 * height as u32).map(|index| RawPick {
            instance_index: index,
            class_id: classes.background,
        }));

        for side in [Side::A, Side::B] {
            let class_id = classes.class_id(ObjectClass::for_side(side));
            for (n, (cell, _)) in instances.instances(side).iter().enumerate() {
                self.draw(*cell, n, class_id);
            }
        }

        let preview_id = classes.class_id(ObjectClass::MovePreview);
        for (n, cell) in feedback.preview_cells().iter().enumerate() {
            self.draw(*cell, n, preview_id);
        }
    }

    fn draw(&mut self, (col, row): Cell, instance_index: usize, class_id: u32) {
        if col >= self.width || row >= self.height {
            return;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.entries[index] = RawPick {
            instance_index: instance_index as u32,
            class_id,
        };
    }

    /// Entry under `cell`, `None` off the board or before the first draw
    pub fn at(&self, (col, row): Cell) -> Option<RawPick> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.entries
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }
}

/// Pick buffer shared between the ECS world and the oracle
#[derive(Resource, Debug, Clone, Default)]
pub struct SharedPickBuffer(pub Arc<RwLock<PickBuffer>>);

/// Pick oracle reading the [`SharedPickBuffer`]
///
/// Pixels outside the board resolve to the background class.
#[derive(Debug, Clone)]
pub struct GridPickOracle {
    buffer: SharedPickBuffer,
    cell_px: u32,
    background: u32,
}

impl GridPickOracle {
    pub fn new(buffer: SharedPickBuffer, cell_px: u32, background: u32) -> Self {
        Self {
            buffer,
            cell_px: cell_px.max(1),
            background,
        }
    }

    fn lookup(&self, x: u32, y: u32) -> RawPick {
        let outside = RawPick {
            instance_index: 0,
            class_id: self.background,
        };
        let (col, row) = (x / self.cell_px, y / self.cell_px);
        let (Ok(col), Ok(row)) = (u8::try_from(col), u8::try_from(row)) else {
            return outside;
        };

        let buffer = self.buffer.0.read().unwrap_or_else(PoisonError::into_inner);
        buffer.at((col, row)).unwrap_or(outside)
    }
}

impl PickOracle for GridPickOracle {
    fn resolve(&self, x: u32, y: u32) -> PickFuture {
        let pick = self.lookup(x, y);
        trace!("[PICK] ({}, {}) -> {:?}", x, y, pick);
        Box::pin(future::ready(Some(pick)))
    }
}

/// Install a [`GridPickOracle`] over the app's pick buffer
///
/// Must run after [`CheckersPlugin`](crate::game::CheckersPlugin) so the
/// buffer and settings exist.
pub fn install_grid_oracle(app: &mut App, cell_px: u32) {
    let world = app.world_mut();
    let buffer = world.get_resource_or_init::<SharedPickBuffer>().clone();
    let background = world
        .get_resource::<GameSettings>()
        .map(|settings| settings.mesh_classes.background)
        .unwrap_or_else(|| MeshClassMap::default().background);
    world.insert_resource(PickOracleHandle::new(GridPickOracle::new(buffer, cell_px, background)));
}

/// Redraw the pick buffer whenever pieces or preview markers changed
pub fn write_pick_buffer(
    buffer: Res<SharedPickBuffer>,
    board: Res<GameBoard>,
    instances: Res<PieceInstances>,
    feedback: Res<FeedbackState>,
    settings: Res<GameSettings>,
) {
    if !(instances.is_changed() || feedback.is_changed() || settings.is_changed()) {
        return;
    }

    let mut buffer = buffer.0.write().unwrap_or_else(PoisonError::into_inner);
    buffer.rebuild(
        board.width(),
        board.height(),
        &instances,
        &feedback,
        &settings.mesh_classes,
    );
}
