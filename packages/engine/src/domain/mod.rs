pub mod config;
pub mod directions;
pub mod ids;
pub mod transform;

pub use config::{PhysicsDefaults, WorldConfig};
pub use directions::Directions;
pub use ids::{ShapeId, SpriteId};
pub use transform::Transform;
