use crate::error::{DriftglowError, DriftglowResult};

/// Unified engine configuration.
///
/// The two original script variants of this effect differed only in constants;
/// they map onto `height_multiplier`, `hover_scale_range`, and `slide_style`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Surface height = viewport height x this.
    pub height_multiplier: f64,
    /// `(min, max)` vertical scale applied to a hovered letter.
    pub hover_scale_range: (f64, f64),
    /// Timing/direction preset for the two-panel slide transition.
    pub slide_style: SlideStyle,
    /// Number of gradient blobs created at startup.
    pub blob_count: usize,
    /// Seed for all randomness (blob creation, jitter, palette picks, hover).
    pub seed: u64,
    /// Nominal frames per second for fixed-step drivers.
    pub fps: u32,
    /// Per-axis velocity cap; `None` reproduces the original unbounded walk.
    pub max_speed: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            height_multiplier: 3.0,
            hover_scale_range: (1.0, 1.4),
            slide_style: SlideStyle::Classic,
            blob_count: 5,
            seed: 0x5eed_b10b,
            fps: 60,
            max_speed: Some(2.5),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> DriftglowResult<()> {
        if !self.height_multiplier.is_finite() || self.height_multiplier <= 0.0 {
            return Err(DriftglowError::validation(
                "height_multiplier must be finite and > 0",
            ));
        }
        let (lo, hi) = self.hover_scale_range;
        if !(lo.is_finite() && hi.is_finite()) || lo <= 0.0 || lo > hi {
            return Err(DriftglowError::validation(
                "hover_scale_range must satisfy 0 < min <= max",
            ));
        }
        if self.blob_count == 0 {
            return Err(DriftglowError::validation("blob_count must be > 0"));
        }
        if self.fps == 0 {
            return Err(DriftglowError::validation("fps must be > 0"));
        }
        if let Some(cap) = self.max_speed
            && (!cap.is_finite() || cap <= 0.0)
        {
            return Err(DriftglowError::validation(
                "max_speed must be finite and > 0 when set",
            ));
        }
        Ok(())
    }
}

/// Slide-transition preset: the constants that differed between the two
/// original script variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideStyle {
    /// Slow slide to the left with a long reveal delay.
    Classic,
    /// Brisker slide to the right, used by the taller page variant.
    Tall,
}

/// Resolved timing/direction constants for one slide style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTiming {
    /// Transition duration for the outgoing letter block, seconds.
    pub text_duration_s: f64,
    /// `translateX` applied to the outgoing letter block, percent.
    pub text_offset_pct: f64,
    /// Delay before the second panel slides in, milliseconds.
    pub reveal_delay_ms: u64,
    /// Transform transition duration for the incoming panel, seconds.
    pub panel_duration_s: f64,
    /// Opacity transition duration for the incoming panel, seconds.
    pub panel_fade_s: f64,
    /// `translateX` applied to the incoming panel, percent.
    pub panel_offset_pct: f64,
}

impl SlideStyle {
    pub fn timing(self) -> SlideTiming {
        match self {
            Self::Classic => SlideTiming {
                text_duration_s: 2.0,
                text_offset_pct: -30.0,
                reveal_delay_ms: 600,
                panel_duration_s: 0.7,
                panel_fade_s: 1.0,
                panel_offset_pct: -200.0,
            },
            Self::Tall => SlideTiming {
                text_duration_s: 1.5,
                text_offset_pct: 30.0,
                reveal_delay_ms: 450,
                panel_duration_s: 0.5,
                panel_fade_s: 0.8,
                panel_offset_pct: 200.0,
            },
        }
    }
}
