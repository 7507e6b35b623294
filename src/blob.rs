use kurbo::{Point, Vec2};

use crate::color::{self, PalettePair, Rgb};
use crate::core::{SurfaceSize, TimestampMs};
use crate::pointer::PointerSample;
use crate::surface::{GradientStop, PaintSurface, RadialGradient};

/// Pointer events older than this have no pull on a blob.
pub const POINTER_RECENCY_MS: u64 = 200;
/// Pointer pull has no effect past this distance.
pub const MAX_POINTER_DISTANCE: f64 = 300.0;
/// Idle velocity jitter bound, per axis per update.
pub const JITTER: f64 = 0.005;

const FOLLOW_SPEED: f64 = 0.0005;
const SPEED_MULTIPLIER: f64 = 0.1;
const TRANSITION_STEP: f64 = 0.0002;
const INNER_RADIUS: f64 = 50.0;
const BLOB_OPACITY: f64 = 0.8;

/// Per-update inputs a blob needs from the engine.
pub struct UpdateCtx<'a> {
    pub now: TimestampMs,
    pub bounds: SurfaceSize,
    pub rng: &'a mut fastrand::Rng,
    /// Per-axis velocity cap; `None` reproduces the original unbounded walk.
    pub max_speed: Option<f64>,
}

/// One floating, color-shifting elliptical radial gradient.
#[derive(Clone, Debug)]
pub struct GradientBlob {
    pos: Point,
    radius_x: f64,
    radius_y: f64,
    vel: Vec2,
    /// Fixed directional bias applied every update on top of velocity.
    drift: Vec2,
    opacity: f64,
    colors: PalettePair,
    /// Cyclic scalar in `[0, 1)` driving the color blend; a wrap picks a new
    /// palette pair.
    transition_progress: f64,
    pointer: PointerSample,
}

impl GradientBlob {
    pub fn new(rng: &mut fastrand::Rng, bounds: SurfaceSize) -> Self {
        let w = bounds.width_f64();
        let h = bounds.height_f64();

        let pos = Point::new(rng.f64() * w, rng.f64() * h);
        let radius_x = rng.f64() * 300.0 + 400.0;
        let radius_y = radius_x * (rng.f64() * 0.8 + 0.8);
        let base_speed = rng.f64() * 0.1 + 0.05;
        let vel = Vec2::new(
            (rng.f64() - 0.5) * base_speed,
            (rng.f64() - 0.5) * base_speed,
        );
        let drift = Vec2::new((rng.f64() - 0.5) * 0.05, (rng.f64() - 0.5) * 0.05);

        Self {
            pos,
            radius_x,
            radius_y,
            vel,
            drift,
            opacity: BLOB_OPACITY,
            colors: color::random_pair(rng),
            transition_progress: rng.f64(),
            pointer: PointerSample {
                pos: bounds.center(),
                moved_at: None,
            },
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn transition_progress(&self) -> f64 {
        self.transition_progress
    }

    pub fn colors(&self) -> PalettePair {
        self.colors
    }

    /// Take a copy of the shared pointer signal.
    pub fn observe_pointer(&mut self, sample: PointerSample) {
        self.pointer = sample;
    }

    #[cfg(test)]
    pub(crate) fn pointer_sample(&self) -> PointerSample {
        self.pointer
    }

    /// Advance physics and color-transition state by one fixed step.
    pub fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.pointer.is_recent(ctx.now, POINTER_RECENCY_MS) {
            let delta = self.pointer.pos - self.pos;
            let distance = delta.hypot();
            if distance < MAX_POINTER_DISTANCE {
                // Closer pointers pull harder; beyond the cutoff there is no pull.
                let pull = 1.0 - distance / MAX_POINTER_DISTANCE;
                self.vel += delta * (FOLLOW_SPEED * pull * SPEED_MULTIPLIER);
            }
        } else {
            self.vel.x += (ctx.rng.f64() - 0.5) * (2.0 * JITTER);
            self.vel.y += (ctx.rng.f64() - 0.5) * (2.0 * JITTER);
        }

        if let Some(cap) = ctx.max_speed {
            self.vel.x = self.vel.x.clamp(-cap, cap);
            self.vel.y = self.vel.y.clamp(-cap, cap);
        }

        self.pos += self.vel + self.drift;

        // Soft edge clamp: only once the whole bounding ellipse has left the
        // surface is the blob snapped back so it just touches the crossed edge.
        let w = ctx.bounds.width_f64();
        let h = ctx.bounds.height_f64();
        if self.pos.x - self.radius_x > w {
            self.pos.x = w - self.radius_x;
        }
        if self.pos.x + self.radius_x < 0.0 {
            self.pos.x = self.radius_x;
        }
        if self.pos.y - self.radius_y > h {
            self.pos.y = h - self.radius_y;
        }
        if self.pos.y + self.radius_y < 0.0 {
            self.pos.y = self.radius_y;
        }

        self.transition_progress += TRANSITION_STEP;
        if self.transition_progress >= 1.0 {
            self.transition_progress = 0.0;
            self.colors = color::random_pair(ctx.rng);
            tracing::debug!(pair = ?self.colors, "palette cycle wrapped");
        }
    }

    /// Render the blob: an oval filled with a three-stop radial gradient.
    pub fn draw(&self, surface: &mut dyn PaintSurface) {
        let inner = color::blend(self.colors.a, self.colors.b, self.transition_progress);
        let mid = color::blend(self.colors.b, self.colors.a, self.transition_progress);

        surface.set_alpha(self.opacity);
        surface.set_radial_gradient(RadialGradient {
            center: self.pos,
            inner_radius: INNER_RADIUS,
            outer_radius: self.radius_x,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: inner,
                    alpha: self.opacity,
                },
                GradientStop {
                    offset: 0.5,
                    color: mid,
                    alpha: self.opacity * 0.8,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::BLACK,
                    alpha: 0.0,
                },
            ],
        });
        surface.begin_path();
        surface.ellipse(self.pos, self.radius_x, self.radius_y);
        surface.fill();
    }
}
