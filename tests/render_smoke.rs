use driftglow::{Engine, EngineConfig, PixelSurface, Point, SlideStyle, TimestampMs, Viewport};

fn engine(seed: u64) -> Engine {
    let config = EngineConfig {
        seed,
        ..EngineConfig::default()
    };
    let viewport = Viewport {
        width: 96,
        height: 64,
    };
    Engine::new(config, viewport).unwrap()
}

#[test]
fn ticked_surface_has_visible_pixels() {
    let mut engine = engine(7);
    let mut surface = PixelSurface::new(engine.size()).unwrap();

    engine.tick(TimestampMs(0), &mut surface);

    // Blob radii (>= 400) dwarf this surface, so coverage must be substantial.
    let covered = surface
        .data()
        .chunks_exact(4)
        .filter(|px| px[3] > 0)
        .count();
    let total = (surface.width() * surface.height()) as usize;
    assert!(
        covered > total / 2,
        "only {covered}/{total} pixels covered after one tick"
    );
}

#[test]
fn same_seed_renders_identical_frames() {
    let mut a = engine(123);
    let mut b = engine(123);
    let mut surface_a = PixelSurface::new(a.size()).unwrap();
    let mut surface_b = PixelSurface::new(b.size()).unwrap();

    for frame in 0..5 {
        a.tick(a.frame_timestamp(frame), &mut surface_a);
        b.tick(b.frame_timestamp(frame), &mut surface_b);
    }
    assert_eq!(surface_a.data(), surface_b.data());
}

#[test]
fn different_seeds_diverge() {
    let mut a = engine(1);
    let mut b = engine(2);
    let mut surface_a = PixelSurface::new(a.size()).unwrap();
    let mut surface_b = PixelSurface::new(b.size()).unwrap();

    a.tick(TimestampMs(0), &mut surface_a);
    b.tick(TimestampMs(0), &mut surface_b);
    assert_ne!(surface_a.data(), surface_b.data());
}

#[test]
fn long_run_keeps_transition_progress_in_unit_range() {
    let mut engine = engine(9);
    let mut surface = PixelSurface::new(engine.size()).unwrap();

    for frame in 0..2_000 {
        engine.tick(engine.frame_timestamp(frame), &mut surface);
    }
    for blob in engine.blobs() {
        let p = blob.transition_progress();
        assert!((0.0..1.0).contains(&p), "progress {p} escaped [0,1)");
    }
}

#[test]
fn pointer_motion_changes_the_trajectory() {
    let mut still = engine(55);
    let mut steered = engine(55);
    let mut surface = PixelSurface::new(still.size()).unwrap();

    for frame in 0..30 {
        let now = still.frame_timestamp(frame);
        still.tick(now, &mut surface);

        // Keep the pointer fresh right next to the first blob.
        let target = steered.blobs()[0].pos() + driftglow::Vec2::new(50.0, 0.0);
        steered.pointer_moved(target, now);
        steered.tick(now, &mut surface);
    }

    // The attraction branch consumes no rng and biases velocity, so the two
    // runs cannot stay in lockstep.
    let a: Vec<Point> = still.blobs().iter().map(|b| b.pos()).collect();
    let b: Vec<Point> = steered.blobs().iter().map(|b| b.pos()).collect();
    assert_ne!(a, b);
}

#[test]
fn tall_variant_makes_a_taller_surface() {
    let config = EngineConfig {
        height_multiplier: 4.0,
        slide_style: SlideStyle::Tall,
        ..EngineConfig::default()
    };
    let viewport = Viewport {
        width: 96,
        height: 64,
    };
    let engine = Engine::new(config, viewport).unwrap();
    assert_eq!(engine.size().height, 256);
}
