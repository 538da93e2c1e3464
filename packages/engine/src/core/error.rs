use thiserror::Error;

use crate::domain::{ShapeId, SpriteId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("shape {0:?} is not registered")]
    UnknownShape(ShapeId),

    #[error("sprite {0:?} does not exist")]
    UnknownSprite(SpriteId),

    #[error("invalid bounds: {width} x {height}")]
    InvalidBounds { width: f32, height: f32 },

    #[error("invalid circle diameter: {0}")]
    InvalidDiameter(f32),

    #[error("invalid position: ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },

    #[error("shape built for sprite {found:?} cannot be attached to sprite {expected:?}")]
    OwnerMismatch { expected: SpriteId, found: SpriteId },

    #[error("{0} ids exhausted")]
    IdsExhausted(&'static str),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
