//! Pick result types shared by the oracle, the selection controller and the
//! class-id table

use crate::game::rules::Side;

/// What kind of rendered object a pick landed on
///
/// The numeric ids the renderer uses are configuration (see
/// [`MeshClassMap`](crate::core::MeshClassMap)); everything past the oracle
/// boundary works with this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    SideA,
    SideB,
    MovePreview,
    Other,
}

impl ObjectClass {
    /// Side owning the piece, for piece classes
    pub fn side(self) -> Option<Side> {
        match self {
            ObjectClass::SideA => Some(Side::A),
            ObjectClass::SideB => Some(Side::B),
            ObjectClass::MovePreview | ObjectClass::Other => None,
        }
    }

    pub fn for_side(side: Side) -> Self {
        match side {
            Side::A => ObjectClass::SideA,
            Side::B => ObjectClass::SideB,
        }
    }
}

/// Raw answer of the pick oracle: instance index plus renderer class id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawPick {
    pub instance_index: u32,
    pub class_id: u32,
}

/// Pick result after class-id translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickResult {
    pub class: ObjectClass,
    pub instance_index: usize,
}

impl PickResult {
    pub fn new(class: ObjectClass, instance_index: usize) -> Self {
        Self {
            class,
            instance_index,
        }
    }
}
