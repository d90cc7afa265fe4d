// File: crates/stockview-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in layer pixels, top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f32 { self.x + self.width }
    pub fn bottom(&self) -> f32 { self.y + self.height }
}

/// Integer rectangle; candle geometry is snapped to this before drawing.
/// Edges saturate at the `i32` limits, so far off-surface bars stay representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right.saturating_sub(self.left) }
    pub const fn height(&self) -> i32 { self.bottom.saturating_sub(self.top) }
}

impl From<RectI32> for Rect {
    fn from(r: RectI32) -> Self {
        Rect::from_xywh(r.left as f32, r.top as f32, r.width() as f32, r.height() as f32)
    }
}

/// Floor to the pixel grid, as every candle coordinate is before drawing.
#[inline]
pub fn snap(v: f64) -> i32 {
    v.floor() as i32
}
