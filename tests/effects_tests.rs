use twangy::{SparkField, Vec2, BURST_COUNT};

const ORANGE: [u8; 3] = [255, 140, 0];

#[test]
fn burst_spawns_fixed_count_at_full_life() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::new(100.0, 50.0), ORANGE);

    assert_eq!(field.len(), BURST_COUNT);
    for s in field.sparks() {
        assert_eq!(s.life, 1.0);
        assert_eq!(s.pos, Vec2::new(100.0, 50.0));
        assert_eq!(s.color, ORANGE);
        assert!(s.size >= 1.0 && s.size < 4.0);
        assert!(s.vel.x >= -2.0 && s.vel.x < 2.0);
        assert!(s.vel.y >= -3.0 && s.vel.y < 1.0);
    }
}

#[test]
fn life_decreases_by_decay_each_tick() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::zero(), ORANGE);

    field.tick();
    for s in field.sparks() {
        assert!((s.life - 0.98).abs() < 1e-6);
    }

    let mut prev: Vec<f32> = field.sparks().iter().map(|s| s.life).collect();
    for _ in 0..10 {
        field.tick();
        for (s, p) in field.sparks().iter().zip(prev.iter()) {
            assert!(s.life < *p, "life must strictly decrease every tick");
        }
        prev = field.sparks().iter().map(|s| s.life).collect();
    }
}

#[test]
fn sparks_die_after_about_fifty_ticks() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::zero(), ORANGE);

    for _ in 0..49 {
        field.tick();
    }
    assert_eq!(field.len(), BURST_COUNT, "sparks should still be alive at 49 ticks");

    field.tick();
    field.tick();
    assert!(field.is_empty(), "sparks should be gone by 51 ticks");
}

#[test]
fn same_tick_removal_never_skips_survivors() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::zero(), ORANGE);
    for _ in 0..10 {
        field.tick();
    }
    field.burst(Vec2::new(50.0, 50.0), ORANGE);

    // 42 more ticks: the first burst (52 ticks old) dies in one sweep, the
    // second (42 ticks old) must come through intact.
    for _ in 0..42 {
        field.tick();
    }
    assert_eq!(field.len(), BURST_COUNT);
    for s in field.sparks() {
        assert!((s.life - 0.16).abs() < 1e-3);
    }
}

#[test]
fn gravity_pulls_sparks_downward() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::zero(), ORANGE);
    let initial: Vec<f32> = field.sparks().iter().map(|s| s.vel.y).collect();

    field.tick();
    for (s, v0) in field.sparks().iter().zip(initial.iter()) {
        assert!((s.vel.y - (v0 + 0.1)).abs() < 1e-6);
    }
}

#[test]
fn positions_integrate_velocity() {
    let mut field: SparkField<f32> = SparkField::new(7);
    field.burst(Vec2::new(10.0, 20.0), ORANGE);
    let vels: Vec<Vec2<f32>> = field.sparks().iter().map(|s| s.vel).collect();

    field.tick();
    for (s, v0) in field.sparks().iter().zip(vels.iter()) {
        // Gravity applies before the move, so the step uses the new velocity.
        assert!((s.pos.x - (10.0 + v0.x)).abs() < 1e-6);
        assert!((s.pos.y - (20.0 + v0.y + 0.1)).abs() < 1e-6);
    }
}
