use kurbo::Point;

use crate::blob::{GradientBlob, UpdateCtx};
use crate::config::EngineConfig;
use crate::core::{SurfaceSize, TimestampMs, Viewport};
use crate::error::DriftglowResult;
use crate::pointer::PointerState;
use crate::surface::PaintSurface;

/// Owns the blobs, the shared pointer signal, and the per-tick loop body.
///
/// The engine is host-agnostic: the host owns the clock and the actual frame
/// scheduling and calls [`Engine::tick`] once per display frame. Physics is
/// fixed-step: one tick advances every blob by exactly one step regardless of
/// the wall-clock delta between ticks.
pub struct Engine {
    config: EngineConfig,
    size: SurfaceSize,
    blobs: Vec<GradientBlob>,
    pointer: PointerState,
    rng: fastrand::Rng,
    frame: u64,
}

impl Engine {
    /// Build the surface size from the viewport and create the blobs.
    ///
    /// This is the whole surface lifecycle: sizing happens once, at startup.
    /// There is no resize handling.
    pub fn new(config: EngineConfig, viewport: Viewport) -> DriftglowResult<Self> {
        config.validate()?;
        let size = SurfaceSize::of_viewport(viewport, config.height_multiplier)?;

        let mut rng = fastrand::Rng::with_seed(config.seed);
        let blobs = (0..config.blob_count)
            .map(|_| GradientBlob::new(&mut rng, size))
            .collect();

        tracing::debug!(
            width = size.width,
            height = size.height,
            blobs = config.blob_count,
            "engine created"
        );

        Ok(Self {
            config,
            size,
            blobs,
            pointer: PointerState::new(size.center()),
            rng,
            frame: 0,
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn blobs(&self) -> &[GradientBlob] {
        &self.blobs
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Timestamp of frame `n` for fixed-step drivers running at the configured fps.
    pub fn frame_timestamp(&self, n: u64) -> TimestampMs {
        TimestampMs(n * 1_000 / u64::from(self.config.fps))
    }

    /// Host pointer-move callback: record the shared signal and stamp a copy
    /// onto every blob. Each blob reacts to it independently by distance.
    pub fn pointer_moved(&mut self, pos: Point, now: TimestampMs) {
        self.pointer.record(pos, now);
        let sample = self.pointer.sample();
        for blob in &mut self.blobs {
            blob.observe_pointer(sample);
        }
    }

    /// One animation frame: clear, then update + draw every blob.
    #[tracing::instrument(skip(self, surface), fields(frame = self.frame))]
    pub fn tick(&mut self, now: TimestampMs, surface: &mut dyn PaintSurface) {
        surface.clear();
        for blob in &mut self.blobs {
            let mut ctx = UpdateCtx {
                now,
                bounds: self.size,
                rng: &mut self.rng,
                max_speed: self.config.max_speed,
            };
            blob.update(&mut ctx);
            blob.draw(surface);
        }
        self.frame += 1;
    }

    /// Host scroll callback: re-draw (without updating) every blob whose
    /// center lies in the scrolled viewport window.
    pub fn redraw_visible(
        &self,
        scroll_top: f64,
        viewport_height: f64,
        surface: &mut dyn PaintSurface,
    ) {
        for blob in &self.blobs {
            let y = blob.pos().y;
            if y >= scroll_top && y <= scroll_top + viewport_height {
                blob.draw(surface);
            }
        }
    }
}
