// File: crates/stockview-core/src/scale.rs
// Summary: Linear value <-> pixel transform for the price axis.

use crate::types::ValueRange;

/// Value Y coordinate (price).
pub type Value = f64;

/// Maps a [`ValueRange`] onto `[0, extent]` pixels, top-down: the range's
/// `high` lands on pixel 0 and `low` on `extent`.
///
/// One mapper is built per render from the plot height and shared by the
/// candle renderer and the crosshair, so forward and inverse projections
/// always agree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapper {
    range: ValueRange,
    extent: f64,
}

impl ScaleMapper {
    pub fn new(range: ValueRange, extent: f64) -> Self {
        Self { range, extent }
    }

    pub fn range(&self) -> ValueRange { self.range }
    pub fn extent(&self) -> f64 { self.extent }

    #[inline]
    pub fn to_pixel(&self, v: Value) -> f64 {
        self.extent * (self.range.high - v) / self.range.span()
    }

    #[inline]
    pub fn to_value(&self, px: f64) -> Value {
        // Zero extent has no pixels to invert; everything sits at the top.
        if self.extent == 0.0 {
            return self.range.high;
        }
        self.range.high - (px / self.extent) * self.range.span()
    }

    /// Pixel length of a value distance, e.g. a candle body.
    #[inline]
    pub fn to_length(&self, dv: Value) -> f64 {
        self.extent * dv / self.range.span()
    }
}
