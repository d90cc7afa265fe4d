// File: crates/stockview-core/src/types.rs
// Summary: Shared types and constants (sizes, ranges, plot rectangle, z-order, pointer samples).

use crate::error::ConfigurationError;

/// Default container width in pixels.
pub const WIDTH: u32 = 600;
/// Default container height in pixels.
pub const HEIGHT: u32 = 400;
/// Default fraction of a column left empty around a candle body.
pub const CANDLE_GAP_FRACTION: f64 = 0.5;
/// Default fraction of the summary span added above and below it.
pub const RANGE_PADDING: f64 = 0.2;
/// Axis font size in pixels (`.8rem` at a 16px root).
pub const AXIS_FONT_SIZE: f32 = 12.8;

/// Value domain of a scale.
/// Contract: `high > low`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigurationError> {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return Err(ConfigurationError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Grow the range by `fraction` of its span on both ends.
    ///
    /// A degenerate input (`high <= low`) stays degenerate and is rejected.
    pub fn padded(low: f64, high: f64, fraction: f64) -> Result<Self, ConfigurationError> {
        let span = high - low;
        Self::new(low - span * fraction, high + span * fraction)
    }

    pub fn span(&self) -> f64 { self.high - self.low }
}

/// Pixel extent of the candle drawing area.
///
/// Axis layouts take it by value and report what they consumed; the
/// orchestrator threads the shrinking rectangle from one step to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub width: u32,
    pub height: u32,
}

impl PlotRect {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Give up `consumed` pixels on the right. Fractions are truncated, the
    /// way an integer-sized surface drops them.
    pub fn shrink_width(self, consumed: f32) -> Self {
        let w = (self.width as f32 - consumed).max(0.0) as u32;
        Self { width: w, ..self }
    }

    /// Give up `consumed` pixels at the bottom.
    pub fn shrink_height(self, consumed: f32) -> Self {
        let h = (self.height as f32 - consumed).max(0.0) as u32;
        Self { height: h, ..self }
    }
}

/// Stacking position of each layer kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZOrder {
    Chart,
    YAxis,
    XAxis,
    Crosshair,
}

/// Explicit z-index per layer kind, owned by the chart options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerOrder {
    pub chart: i32,
    pub axis: i32,
    pub crosshair: i32,
}

impl LayerOrder {
    pub fn z_index(&self, z: ZOrder) -> i32 {
        match z {
            ZOrder::Chart => self.chart,
            ZOrder::YAxis | ZOrder::XAxis => self.axis,
            ZOrder::Crosshair => self.crosshair,
        }
    }
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self { chart: 0, axis: 10, crosshair: 10_000 }
    }
}

/// A labeled position on an axis. Derived per render, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f32,
    pub label: String,
}

/// Pointer position in crosshair-layer pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(PointerSample),
    Leave,
}
