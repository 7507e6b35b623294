use crate::error::{DriftglowError, DriftglowResult};

pub use kurbo::{Point, Vec2};

/// Milliseconds since an arbitrary host epoch (the host feeds these in; the
/// engine never reads a wall clock itself).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    /// Saturating elapsed time in milliseconds.
    pub fn millis_since(self, earlier: TimestampMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Host viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Drawing surface dimensions in pixels.
///
/// The surface is as wide as the viewport and a configured multiple of its
/// height, so the background scrolls with the page content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Derive the surface size from a viewport and a height multiplier.
    pub fn of_viewport(viewport: Viewport, height_multiplier: f64) -> DriftglowResult<Self> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(DriftglowError::validation(
                "viewport width/height must be > 0",
            ));
        }
        if !height_multiplier.is_finite() || height_multiplier <= 0.0 {
            return Err(DriftglowError::validation(
                "height_multiplier must be finite and > 0",
            ));
        }
        let height = (f64::from(viewport.height) * height_multiplier).round();
        if height < 1.0 || height > f64::from(u32::MAX) {
            return Err(DriftglowError::validation(
                "surface height out of range for this viewport/multiplier",
            ));
        }
        Ok(Self {
            width: viewport.width,
            height: height as u32,
        })
    }

    /// Width as f64 for position math.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as f64 for position math.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Geometric center of the surface.
    pub fn center(self) -> Point {
        Point::new(self.width_f64() / 2.0, self.height_f64() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_size_scales_height_only() {
        let vp = Viewport {
            width: 800,
            height: 600,
        };
        let size = SurfaceSize::of_viewport(vp, 3.0).unwrap();
        assert_eq!(size.width, 800);
        assert_eq!(size.height, 1800);
    }

    #[test]
    fn surface_size_rejects_degenerate_inputs() {
        let vp = Viewport {
            width: 800,
            height: 600,
        };
        assert!(
            SurfaceSize::of_viewport(
                Viewport {
                    width: 0,
                    height: 600
                },
                3.0
            )
            .is_err()
        );
        assert!(SurfaceSize::of_viewport(vp, 0.0).is_err());
        assert!(SurfaceSize::of_viewport(vp, f64::NAN).is_err());
    }

    #[test]
    fn millis_since_saturates() {
        assert_eq!(TimestampMs(500).millis_since(TimestampMs(200)), 300);
        assert_eq!(TimestampMs(200).millis_since(TimestampMs(500)), 0);
    }
}
