//! Core value types shared by every system.

pub mod error;
pub mod vec2;

pub use error::{PhysicsError, Result};
pub use vec2::Vec2;
