//! Rendering-side state
//!
//! - `utils` - Cell-to-world placement
//! - `picking` - Object-id pick buffer and the grid pick oracle

pub mod picking;
pub mod utils;
