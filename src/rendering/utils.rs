//! Board-to-world placement
//!
//! The rules work in `(col, row)` cells; the renderer places instances in
//! world units. [`CellToWorld`] is the only bridge between the two and is
//! injectable so tests and alternative scenes can swap the layout.

use crate::core::GameSettings;
use crate::game::rules::Cell;
use bevy::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Injectable cell-to-world mapping used for piece and preview placement
#[derive(Resource, Clone)]
pub struct CellToWorld(Arc<dyn Fn(Cell) -> Vec2 + Send + Sync>);

impl CellToWorld {
    pub fn new(mapping: impl Fn(Cell) -> Vec2 + Send + Sync + 'static) -> Self {
        Self(Arc::new(mapping))
    }

    /// Rows run along +x and columns along -y, `spacing` world units apart
    pub fn grid(spacing: f32) -> Self {
        Self::new(move |(col, row)| Vec2::new(spacing * row as f32, -spacing * col as f32))
    }

    pub fn position(&self, cell: Cell) -> Vec2 {
        (self.0)(cell)
    }
}

impl fmt::Debug for CellToWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellToWorld").finish_non_exhaustive()
    }
}

impl FromWorld for CellToWorld {
    fn from_world(world: &mut World) -> Self {
        let spacing = world
            .get_resource::<GameSettings>()
            .map(|settings| settings.cell_spacing)
            .unwrap_or_else(|| GameSettings::default().cell_spacing);
        CellToWorld::grid(spacing)
    }
}
