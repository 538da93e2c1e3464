use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-side contact flags (`touching`, `was_touching`, `allow_collisions`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Directions: u32 {
        const NONE = 0;
        const LEFT = 0x0001;
        const RIGHT = 0x0010;
        const UP = 0x0100;
        const DOWN = 0x1000;
        const CEILING = Self::UP.bits();
        const FLOOR = Self::DOWN.bits();
        const WALL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ANY = Self::LEFT.bits() | Self::RIGHT.bits() | Self::UP.bits() | Self::DOWN.bits();
    }
}

impl Directions {
    /// True when any side in `dirs` is set. `NONE` never matches.
    pub fn any_of(self, dirs: Directions) -> bool {
        self.intersects(dirs)
    }
}
