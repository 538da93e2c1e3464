use serde::{Deserialize, Serialize};

/// 2D vector used for positions, velocities and environmental coefficients.
///
/// `Copy` on purpose: assigning a `Vec2` always produces an independent value,
/// which is what lets each body own its own gravity/drag/bounce/friction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_independent() {
        let base = Vec2::new(0.0, 9.8);
        let mut copy = base;
        copy.y = 1.0;
        assert_eq!(base.y, 9.8);
        assert_eq!(copy.y, 1.0);
    }

    #[test]
    fn arithmetic() {
        let mut v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0) * 2.0;
        assert_eq!(v, Vec2::new(7.0, 10.0));
        v += Vec2::new(-7.0, -10.0);
        assert!(v.is_zero());
        assert_eq!(Vec2::new(3.0, 4.0) - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
    }
}
