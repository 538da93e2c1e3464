use log::debug;

use crate::core::{PhysicsError, Result};
use crate::domain::{ShapeId, SpriteId, Transform};
use crate::systems::body::DebugSurface;

use super::{Sprite, WorldCore};

pub(super) fn spawn_sprite(world: &mut WorldCore, transform: Transform) -> Result<SpriteId> {
    if world.next_sprite_id == u32::MAX {
        return Err(PhysicsError::IdsExhausted("sprite"));
    }
    let id = SpriteId(world.next_sprite_id);
    let sprite = Sprite::new(id, transform, &mut world.registry)?;
    world.next_sprite_id += 1;
    world.sprites.push(sprite);
    debug!("spawned sprite {:?} at ({}, {})", id, transform.x, transform.y);
    Ok(id)
}

pub(super) fn remove_sprite(world: &mut WorldCore, id: SpriteId) -> Result<()> {
    let idx = index_of(world, id)?;
    let shape = world.sprites[idx].body().shape();
    if !world.registry.contains(shape) {
        return Err(PhysicsError::UnknownShape(shape));
    }
    // Sprites stay in spawn order so steps are deterministic.
    let sprite = world.sprites.remove(idx);
    sprite.destroy(&mut world.registry)?;
    debug!("removed sprite {:?}", id);
    Ok(())
}

pub(super) fn sprite(world: &WorldCore, id: SpriteId) -> Result<&Sprite> {
    let idx = index_of(world, id)?;
    Ok(&world.sprites[idx])
}

pub(super) fn sprite_mut(world: &mut WorldCore, id: SpriteId) -> Result<&mut Sprite> {
    let idx = index_of(world, id)?;
    Ok(&mut world.sprites[idx])
}

pub(super) fn set_circle(world: &mut WorldCore, id: SpriteId, diameter: f32) -> Result<ShapeId> {
    let idx = index_of(world, id)?;
    world.sprites[idx].set_circle(&mut world.registry, diameter)
}

pub(super) fn set_rectangle(world: &mut WorldCore, id: SpriteId, width: f32, height: f32) -> Result<ShapeId> {
    let idx = index_of(world, id)?;
    world.sprites[idx].set_rectangle(&mut world.registry, width, height)
}

pub(super) fn debug_lines(world: &WorldCore, id: SpriteId) -> Result<[String; 4]> {
    sprite(world, id)?.debug_lines(&world.registry)
}

pub(super) fn render_debug_info(
    world: &WorldCore,
    id: SpriteId,
    surface: &mut dyn DebugSurface,
    x: f32,
    y: f32,
    color: Option<&str>,
) -> Result<()> {
    sprite(world, id)?.render_debug_info(&world.registry, surface, x, y, color)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.sprites.clear();
    world.registry.clear();
    world.frame = 0;
}

fn index_of(world: &WorldCore, id: SpriteId) -> Result<usize> {
    world
        .sprites
        .binary_search_by_key(&id, |s| s.id())
        .map_err(|_| PhysicsError::UnknownSprite(id))
}
