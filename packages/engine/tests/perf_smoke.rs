use spritephys_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(640.0, 480.0).unwrap();
    world.enable_perf_metrics(true);
    world.set_gravity(0.0, 300.0);
    for i in 0..64 {
        let x = (i % 16) as f32 * 40.0;
        let y = (i / 16) as f32 * 40.0;
        let id = world.spawn_sprite(x, y, 16.0, 16.0).unwrap();
        if i % 3 == 0 {
            world.set_circle(id, 12.0).unwrap();
        }
    }
    for _ in 0..10 {
        world.step();
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 64);
    assert_eq!(stats.shape_count(), 64);
    assert_eq!(world.shape_count(), 64);
    assert_eq!(world.frame(), 10);
}
