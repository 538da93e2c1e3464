use serde::{Deserialize, Serialize};

use crate::core::{PhysicsError, Result, Vec2};

/// World-wide environmental coefficients.
///
/// Bodies copy these at construction; editing them later only affects
/// bodies created afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsDefaults {
    pub gravity: Vec2,
    pub drag: Vec2,
    pub bounce: Vec2,
    pub friction: Vec2,
}

impl Default for PhysicsDefaults {
    fn default() -> Self {
        Self {
            gravity: Vec2::zero(),
            drag: Vec2::zero(),
            bounce: Vec2::zero(),
            friction: Vec2::new(0.05, 0.05),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Seconds per `step()`.
    pub time_step: f32,
    pub defaults: PhysicsDefaults,
    pub collide_world_bounds: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            time_step: 1.0 / 60.0,
            defaults: PhysicsDefaults::default(),
            collide_world_bounds: true,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: WorldConfig =
            serde_json::from_str(json).map_err(|e| PhysicsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(PhysicsError::Config(format!(
                "world size must be positive: {} x {}",
                self.width, self.height
            )));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(PhysicsError::Config(format!(
                "time step must be positive: {}",
                self.time_step
            )));
        }
        let d = &self.defaults;
        if !(d.gravity.is_finite() && d.drag.is_finite() && d.bounce.is_finite() && d.friction.is_finite()) {
            return Err(PhysicsError::Config("defaults must be finite".to_string()));
        }
        Ok(())
    }
}
