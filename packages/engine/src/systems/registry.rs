//! PhysicsRegistry - owns every live shape and the world default coefficients
//!
//! Bodies only hold `ShapeId`s and go through `add` / `remove` to change
//! membership. Ids come from a counter and are never reused, so a stale
//! handle is always detected instead of aliasing a newer shape.

use log::{debug, warn};

use crate::core::{PhysicsError, Result};
use crate::domain::PhysicsDefaults;

use super::shapes::{PhysicsShape, ShapeId};

pub struct PhysicsRegistry {
    defaults: PhysicsDefaults,
    shapes: Vec<Box<dyn PhysicsShape>>,
    next_id: u32,
}

impl PhysicsRegistry {
    pub fn new(defaults: PhysicsDefaults) -> Self {
        Self {
            defaults,
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn defaults(&self) -> &PhysicsDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut PhysicsDefaults {
        &mut self.defaults
    }

    /// Take ownership of a shape and return its handle.
    ///
    /// The registry is the only writer of shape ids; lookups rely on them
    /// staying sorted.
    pub fn add(&mut self, mut shape: Box<dyn PhysicsShape>) -> Result<ShapeId> {
        if !self.has_capacity() {
            warn!("shape ids exhausted");
            return Err(PhysicsError::IdsExhausted("shape"));
        }
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        shape.state_mut().id = id;
        debug!("registered {:?} shape {:?} for sprite {:?}", shape.kind(), id, shape.owner());
        self.shapes.push(shape);
        Ok(id)
    }

    /// Whether `add` can still hand out a fresh id.
    pub fn has_capacity(&self) -> bool {
        self.next_id < u32::MAX
    }

    /// Drop a shape. Unknown ids are an error, never a silent no-op.
    pub fn remove(&mut self, id: ShapeId) -> Result<Box<dyn PhysicsShape>> {
        match self.index_of(id) {
            Some(idx) => {
                // Keep insertion order so iteration stays deterministic.
                let shape = self.shapes.remove(idx);
                debug!("removed shape {:?}", id);
                Ok(shape)
            }
            None => {
                warn!("attempted to remove unknown shape {:?}", id);
                Err(PhysicsError::UnknownShape(id))
            }
        }
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ShapeId) -> Option<&dyn PhysicsShape> {
        self.index_of(id).map(|idx| self.shapes[idx].as_ref())
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut (dyn PhysicsShape + 'static)> {
        let idx = self.index_of(id)?;
        Some(self.shapes[idx].as_mut())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PhysicsShape> {
        self.shapes.iter().map(|s| s.as_ref())
    }

    /// Remove all shapes. Ids keep counting up.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        // Ids are handed out in increasing order and removal preserves order.
        self.shapes.binary_search_by_key(&id, |s| s.id()).ok()
    }
}

impl Default for PhysicsRegistry {
    fn default() -> Self {
        Self::new(PhysicsDefaults::default())
    }
}
