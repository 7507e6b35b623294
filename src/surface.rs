use kurbo::Point;

use crate::color::Rgb;
use crate::core::SurfaceSize;
use crate::error::{DriftglowError, DriftglowResult};

/// One color stop of a radial gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
    pub alpha: f64,
}

/// Circular radial gradient paint.
///
/// Color ramps with Euclidean distance from `center`, from `inner_radius`
/// (offset 0) to `outer_radius` (offset 1). The gradient itself is circular
/// even when the filled path is an ellipse; the path only clips it.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Stops sorted by ascending offset.
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Straight color and alpha at offset `t`, piecewise-linear between stops.
    ///
    /// Offsets before the first stop clamp to it, likewise past the last.
    pub fn at_offset(&self, t: f64) -> (Rgb, f64) {
        let Some(first) = self.stops.first() else {
            return (Rgb::BLACK, 0.0);
        };
        let last = self.stops.last().unwrap_or(first);
        if t <= first.offset {
            return (first.color, first.alpha);
        }
        if t >= last.offset {
            return (last.color, last.alpha);
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t < lo.offset || t > hi.offset {
                continue;
            }
            let span = hi.offset - lo.offset;
            let f = if span > 0.0 { (t - lo.offset) / span } else { 1.0 };

            fn lerp_u8(a: u8, b: u8, f: f64) -> u8 {
                let a = f64::from(a);
                let b = f64::from(b);
                (a + (b - a) * f).round().clamp(0.0, 255.0) as u8
            }

            let color = Rgb {
                r: lerp_u8(lo.color.r, hi.color.r, f),
                g: lerp_u8(lo.color.g, hi.color.g, f),
                b: lerp_u8(lo.color.b, hi.color.b, f),
            };
            return (color, lo.alpha + (hi.alpha - lo.alpha) * f);
        }

        (last.color, last.alpha)
    }

    /// Map a Euclidean distance from the center into stop-offset space.
    pub fn offset_for_distance(&self, d: f64) -> f64 {
        let span = self.outer_radius - self.inner_radius;
        if span <= 0.0 {
            return 1.0;
        }
        ((d - self.inner_radius) / span).clamp(0.0, 1.0)
    }
}

/// Stateful canvas-like draw protocol the blobs render through.
///
/// `fill` rasterizes the most recent path with the current paint and global
/// alpha. Every blob installs its own alpha and paint before filling, so draw
/// order across blobs cannot leak state between them.
pub trait PaintSurface {
    /// Reset the whole surface to transparent.
    fn clear(&mut self);
    /// Set the global alpha multiplied into every subsequent fill.
    fn set_alpha(&mut self, alpha: f64);
    /// Install a radial gradient as the current fill paint.
    fn set_radial_gradient(&mut self, gradient: RadialGradient);
    /// Start a new path, discarding any previous one.
    fn begin_path(&mut self);
    /// Add an axis-aligned ellipse (zero rotation) to the current path.
    fn ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64);
    /// Fill the current path with the current paint.
    fn fill(&mut self);
}

#[derive(Clone, Copy, Debug)]
struct EllipsePath {
    center: Point,
    radius_x: f64,
    radius_y: f64,
}

/// CPU rasterizer into a premultiplied RGBA8 buffer.
pub struct PixelSurface {
    width: u32,
    height: u32,
    /// Premultiplied RGBA8, row-major.
    data: Vec<u8>,
    alpha: f64,
    paint: Option<RadialGradient>,
    path: Option<EllipsePath>,
}

impl PixelSurface {
    pub fn new(size: SurfaceSize) -> DriftglowResult<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(DriftglowError::render("surface width/height must be > 0"));
        }
        let len = (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| DriftglowError::render("surface dimensions overflow"))?;
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; len],
            alpha: 1.0,
            paint: None,
            path: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied RGBA8 of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Convert to straight-alpha RGBA8 (what PNG encoders expect).
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3];
            if a == 0 || a == 255 {
                continue;
            }
            for c in px.iter_mut().take(3) {
                let v = (u16::from(*c) * 255 + u16::from(a) / 2) / u16::from(a);
                *c = v.min(255) as u8;
            }
        }
        out
    }

    fn composite_over(&mut self, x: u32, y: u32, color: Rgb, src_alpha: f64) {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let sa = src_alpha.clamp(0.0, 1.0);
        let keep = 1.0 - sa;

        fn over(src: f64, dst: u8, keep: f64) -> u8 {
            (src * 255.0 + f64::from(dst) * keep)
                .round()
                .clamp(0.0, 255.0) as u8
        }

        self.data[idx] = over(f64::from(color.r) / 255.0 * sa, self.data[idx], keep);
        self.data[idx + 1] = over(f64::from(color.g) / 255.0 * sa, self.data[idx + 1], keep);
        self.data[idx + 2] = over(f64::from(color.b) / 255.0 * sa, self.data[idx + 2], keep);
        self.data[idx + 3] = over(sa, self.data[idx + 3], keep);
    }
}

impl PaintSurface for PixelSurface {
    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_radial_gradient(&mut self, gradient: RadialGradient) {
        self.paint = Some(gradient);
    }

    fn begin_path(&mut self) {
        self.path = None;
    }

    fn ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64) {
        self.path = Some(EllipsePath {
            center,
            radius_x,
            radius_y,
        });
    }

    fn fill(&mut self) {
        let Some(path) = self.path else {
            return;
        };
        let Some(paint) = self.paint.clone() else {
            return;
        };
        if path.radius_x <= 0.0 || path.radius_y <= 0.0 {
            return;
        }

        let (cx, cy) = (path.center.x, path.center.y);
        let x0 = (cx - path.radius_x).floor().max(0.0) as u32;
        let y0 = (cy - path.radius_y).floor().max(0.0) as u32;
        let x1 = ((cx + path.radius_x).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((cy + path.radius_y).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at the pixel center.
                let px = f64::from(x) + 0.5;
                let py = f64::from(y) + 0.5;
                let nx = (px - cx) / path.radius_x;
                let ny = (py - cy) / path.radius_y;
                if nx * nx + ny * ny > 1.0 {
                    continue;
                }
                let d = (px - paint.center.x).hypot(py - paint.center.y);
                let (color, stop_alpha) = paint.at_offset(paint.offset_for_distance(d));
                let sa = stop_alpha * self.alpha;
                if sa <= 0.0 {
                    continue;
                }
                self.composite_over(x, y, color, sa);
            }
        }
    }
}
