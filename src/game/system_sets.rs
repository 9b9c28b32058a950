//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - Turn clicks into pick requests
//! 2. **Execution** - Resolve picks, play moves, start new games
//! 3. **Visual** - Update highlights, previews, instances and the pick buffer

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer clicks
    Input,

    /// Selection controller and board mutation
    Execution,

    /// Render-facing state
    Visual,
}
