use driftglow::{
    Engine, EngineConfig, GradientBlob, PaintSurface, Point, RadialGradient, SurfaceSize,
    TimestampMs, Viewport,
};

/// Records the draw protocol instead of rasterizing.
#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Call>,
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Clear,
    SetAlpha(f64),
    SetRadialGradient(RadialGradient),
    BeginPath,
    Ellipse { center: Point, rx: f64, ry: f64 },
    Fill,
}

impl PaintSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn set_alpha(&mut self, alpha: f64) {
        self.calls.push(Call::SetAlpha(alpha));
    }
    fn set_radial_gradient(&mut self, gradient: RadialGradient) {
        self.calls.push(Call::SetRadialGradient(gradient));
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn ellipse(&mut self, center: Point, rx: f64, ry: f64) {
        self.calls.push(Call::Ellipse { center, rx, ry });
    }
    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }
}

impl RecordingSurface {
    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

#[test]
fn one_update_draw_emits_exactly_one_gradient_ellipse_fill() {
    let mut rng = fastrand::Rng::with_seed(0xD5);
    let bounds = SurfaceSize {
        width: 800,
        height: 2_400,
    };
    let mut blob = GradientBlob::new(&mut rng, bounds);

    let mut ctx = driftglow::blob::UpdateCtx {
        now: TimestampMs(16),
        bounds,
        rng: &mut rng,
        max_speed: Some(2.5),
    };
    blob.update(&mut ctx);

    let mut surface = RecordingSurface::default();
    blob.draw(&mut surface);

    assert_eq!(
        surface.count(|c| matches!(c, Call::SetRadialGradient(_))),
        1
    );
    assert_eq!(surface.count(|c| matches!(c, Call::BeginPath)), 1);
    assert_eq!(surface.count(|c| matches!(c, Call::Ellipse { .. })), 1);
    assert_eq!(surface.count(|c| matches!(c, Call::Fill)), 1);
    assert_eq!(surface.count(|c| matches!(c, Call::Clear)), 0);

    let Some(Call::Ellipse { center, rx, ry }) = surface
        .calls
        .iter()
        .find(|c| matches!(c, Call::Ellipse { .. }))
    else {
        panic!("no ellipse recorded");
    };
    assert_eq!(*rx, blob.radius_x());
    assert_eq!(*ry, blob.radius_y());
    assert_eq!(*center, blob.pos());

    // The gradient is anchored on the same center, ramping out to radius_x.
    let Some(Call::SetRadialGradient(gradient)) = surface
        .calls
        .iter()
        .find(|c| matches!(c, Call::SetRadialGradient(_)))
    else {
        panic!("no gradient recorded");
    };
    assert_eq!(gradient.center, blob.pos());
    assert_eq!(gradient.inner_radius, 50.0);
    assert_eq!(gradient.outer_radius, blob.radius_x());
    assert_eq!(gradient.stops.len(), 3);
    assert_eq!(gradient.stops[2].alpha, 0.0);

    // Alpha and paint are installed before the path is filled.
    let alpha_at = surface
        .calls
        .iter()
        .position(|c| matches!(c, Call::SetAlpha(_)))
        .unwrap();
    let fill_at = surface
        .calls
        .iter()
        .position(|c| matches!(c, Call::Fill))
        .unwrap();
    assert!(alpha_at < fill_at);
}

#[test]
fn engine_tick_clears_then_draws_every_blob() {
    let config = EngineConfig {
        blob_count: 5,
        seed: 1,
        ..EngineConfig::default()
    };
    let viewport = Viewport {
        width: 320,
        height: 200,
    };
    let mut engine = Engine::new(config, viewport).unwrap();

    let mut surface = RecordingSurface::default();
    engine.tick(TimestampMs(0), &mut surface);

    assert_eq!(surface.calls.first(), Some(&Call::Clear));
    assert_eq!(surface.count(|c| matches!(c, Call::Clear)), 1);
    assert_eq!(surface.count(|c| matches!(c, Call::Fill)), 5);
    // Each blob installs its own paint; state cannot leak across blobs.
    assert_eq!(
        surface.count(|c| matches!(c, Call::SetRadialGradient(_))),
        5
    );
    assert_eq!(surface.count(|c| matches!(c, Call::SetAlpha(_))), 5);
}
