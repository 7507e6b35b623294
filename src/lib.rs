//! Driftglow is a decorative animated-background engine.
//!
//! A handful of softly-moving, color-blending radial gradient blobs are
//! rendered to a full-page drawing surface, one fixed step per host frame,
//! with the pointer gently attracting nearby blobs. A headless page layer
//! carries the accompanying text effects (letter hover scaling, a two-panel
//! slide transition, a per-letter wave animation).
//!
//! The engine is host-agnostic: it draws through the [`PaintSurface`] trait
//! and never reads a clock or schedules frames itself.
#![forbid(unsafe_code)]

pub mod blob;
pub mod color;
pub mod config;
pub mod core;
pub mod ease;
pub mod engine;
pub mod error;
pub mod page;
pub mod pointer;
pub mod surface;
pub mod textfx;

pub use crate::blob::GradientBlob;
pub use crate::color::{PALETTE, PalettePair, Rgb};
pub use crate::config::{EngineConfig, SlideStyle};
pub use crate::core::{Point, SurfaceSize, TimestampMs, Vec2, Viewport};
pub use crate::ease::Ease;
pub use crate::engine::Engine;
pub use crate::error::{DriftglowError, DriftglowResult};
pub use crate::page::{Element, Page, Style};
pub use crate::pointer::{PointerSample, PointerState};
pub use crate::surface::{GradientStop, PaintSurface, PixelSurface, RadialGradient};
pub use crate::textfx::{PageBindings, TextFx};
