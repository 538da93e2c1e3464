//! Body - per-sprite physics state bound to one registry shape
//!
//! Construction registers a box matching the sprite; `set_shape` and friends
//! swap it for another variant; `update` syncs the simulated shape position
//! back into the sprite transform every tick.

mod body;
mod debug;

pub use body::Body;
pub use debug::{DebugSurface, TextLine, TextLog, DEBUG_LINE_HEIGHT, DEFAULT_DEBUG_COLOR};
