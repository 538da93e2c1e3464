//! Systems - shapes, their registry, bodies and the per-tick passes over them

pub mod body;
pub mod integrator;
pub mod registry;
pub mod shapes;
pub mod world_bounds;

pub use body::Body;
pub use registry::PhysicsRegistry;
