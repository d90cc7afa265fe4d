// File: crates/stockview-core/src/layer.rs
// Summary: Drawing-surface capability trait and the container that allocates stacked layers.

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Straight RGBA color, backend independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => {
                let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }
}

/// Stroke parameters for lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `[on, off]` dash intervals; solid when `None`.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }
    pub const fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

/// One stacked, independently clearable 2D surface.
///
/// Everything above the backend draws through this trait; only implementors
/// touch the host rendering substrate.
pub trait DrawableLayer {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn z_index(&self) -> i32;

    /// Reallocate at a new size. Like resizing a canvas, this clears it.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Wipe the whole surface to transparent.
    fn clear(&mut self);

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its alphabetic baseline at `origin.y`, squeezed
    /// horizontally if it would exceed `max_width`.
    fn fill_text(&mut self, text: &str, origin: Point, max_width: Option<f32>, color: Color);

    /// Advance width of `text` in the layer's font.
    fn measure_text(&self, text: &str) -> f32;

    /// Whole-pixel height of the layer's font.
    fn line_height(&self) -> f32;
}

/// Size and stacking of a new layer. Missing sizes default to the container's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub z_index: i32,
    /// Receives pointer events (the crosshair overlay).
    pub interactive: bool,
}

impl LayerOptions {
    pub fn new(z_index: i32) -> Self {
        Self { z_index, ..Self::default() }
    }
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

/// The container that layers are stacked in.
pub trait LayerHost {
    type Layer: DrawableLayer;

    /// Current pixel size of the container.
    fn size(&self) -> (u32, u32);

    /// Allocate a new layer above the container at `opts.z_index`.
    fn create_layer(&mut self, opts: LayerOptions) -> Result<Self::Layer>;
}
