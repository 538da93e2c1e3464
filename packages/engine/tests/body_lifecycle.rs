use spritephys_engine::{
    Directions, PhysicsError, PhysicsShape, ShapeKind, SpriteId, Vec2, WorldConfig, WorldCore,
};

fn world_without_bounds() -> WorldCore {
    let config = WorldConfig {
        collide_world_bounds: false,
        ..WorldConfig::new(256.0, 256.0)
    };
    WorldCore::with_config(config).unwrap()
}

#[test]
fn new_body_matches_sprite() {
    let mut world = world_without_bounds();
    let id = world.spawn_sprite(10.0, 20.0, 32.0, 32.0).unwrap();
    let sprite = world.sprite(id).unwrap();
    let body = sprite.body();

    let shape = world.registry().get(body.shape()).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Aabb);
    assert_eq!(shape.body(), Some(id));
    assert_eq!(shape.bounds().x, 10.0);
    assert_eq!(shape.bounds().y, 20.0);
    assert_eq!(shape.bounds().center(), shape.position());
    assert_eq!(body.touching, Directions::NONE);
    assert_eq!(body.allow_collisions, Directions::ANY);
    assert_eq!(body.mass, 1.0);
}

#[test]
fn shape_swaps_never_leave_stale_entries() {
    let mut world = world_without_bounds();
    let id = world.spawn_sprite(50.0, 50.0, 32.0, 32.0).unwrap();
    let mut seen = vec![world.sprite(id).unwrap().body().shape()];

    for round in 0..4 {
        let new = if round % 2 == 0 {
            world.set_circle(id, 16.0).unwrap()
        } else {
            world.set_rectangle(id, 20.0, 10.0).unwrap()
        };
        assert_eq!(world.shape_count(), 1);
        for old in &seen {
            assert!(!world.registry().contains(*old));
        }
        assert_eq!(world.registry().get(new).and_then(|s| s.body()), Some(id));
        seen.push(new);
    }
}

#[test]
fn registry_defaults_are_copied_not_shared() {
    let mut world = world_without_bounds();
    world.registry_mut().defaults_mut().bounce = Vec2::new(0.25, 0.75);
    let id = world.spawn_sprite(0.0, 0.0, 8.0, 8.0).unwrap();

    world.registry_mut().defaults_mut().bounce = Vec2::new(1.0, 1.0);
    world.sprite_mut(id).unwrap().body_mut().bounce.x = 0.0;

    assert_eq!(world.sprite(id).unwrap().body().bounce, Vec2::new(0.0, 0.75));
    assert_eq!(world.registry().defaults().bounce, Vec2::new(1.0, 1.0));
}

#[test]
fn frozen_sprite_ignores_shape_motion() {
    let mut world = world_without_bounds();
    let id = world.spawn_sprite(10.0, 20.0, 32.0, 32.0).unwrap();
    world.sprite_mut(id).unwrap().body_mut().moves = false;
    let shape = world.sprite(id).unwrap().body().shape();
    world
        .registry_mut()
        .get_mut(shape)
        .unwrap()
        .set_position(Vec2::new(100.0, 100.0));

    world.step();
    let sprite = world.sprite(id).unwrap();
    assert_eq!((sprite.transform.x, sprite.transform.y), (10.0, 20.0));
}

#[test]
fn unknown_sprite_is_reported() {
    let mut world = world_without_bounds();
    assert_eq!(
        world.remove_sprite(SpriteId(9)).unwrap_err(),
        PhysicsError::UnknownSprite(SpriteId(9))
    );
}
