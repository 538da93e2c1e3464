use serde::{Deserialize, Serialize};

/// Identifies a sprite and, since every sprite owns exactly one body, its body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Handle returned by `PhysicsRegistry::add`. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// Placeholder carried by a shape until the registry assigns its id.
    pub const UNASSIGNED: ShapeId = ShapeId(0);
}
