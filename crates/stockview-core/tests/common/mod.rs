// File: crates/stockview-core/tests/common/mod.rs
// Purpose: Recording layer/host doubles shared by the integration tests.

#![allow(dead_code)]

use stockview_core::error::{ChartError, Result};
use stockview_core::geometry::{Point, Rect};
use stockview_core::{Bar, Color, DrawableLayer, LayerHost, LayerOptions, Series, Stroke, Summary};

/// Every glyph is this wide, so text widths are predictable.
pub const CHAR_WIDTH: f32 = 6.0;
pub const LINE_HEIGHT: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Resize(u32, u32),
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { rect: Rect, color: Color },
    Text { text: String, origin: Point, max_width: Option<f32>, color: Color },
}

#[derive(Debug)]
pub struct RecordingLayer {
    pub width: u32,
    pub height: u32,
    pub z: i32,
    pub interactive: bool,
    pub ops: Vec<Op>,
}

impl RecordingLayer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, z: 0, interactive: false, ops: Vec::new() }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point, Stroke)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Operations after the most recent clear (or resize).
    pub fn visible_ops(&self) -> &[Op] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Clear | Op::Resize(..)))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[start..]
    }
}

impl DrawableLayer for RecordingLayer {
    fn width(&self) -> f32 { self.width as f32 }
    fn height(&self) -> f32 { self.height as f32 }
    fn z_index(&self) -> i32 { self.z }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width > 100_000 || height > 100_000 {
            return Err(ChartError::Surface { width, height });
        }
        self.width = width;
        self.height = height;
        self.ops.push(Op::Resize(width, height));
        Ok(())
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(Op::Line { from, to, stroke: *stroke });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Rect { rect, color });
    }

    fn fill_text(&mut self, text: &str, origin: Point, max_width: Option<f32>, color: Color) {
        self.ops.push(Op::Text { text: text.to_string(), origin, max_width, color });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * CHAR_WIDTH
    }

    fn line_height(&self) -> f32 { LINE_HEIGHT }
}

#[derive(Debug)]
pub struct RecordingHost {
    pub width: u32,
    pub height: u32,
    pub created: Vec<LayerOptions>,
}

impl RecordingHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, created: Vec::new() }
    }
}

impl LayerHost for RecordingHost {
    type Layer = RecordingLayer;

    fn size(&self) -> (u32, u32) { (self.width, self.height) }

    fn create_layer(&mut self, opts: LayerOptions) -> Result<RecordingLayer> {
        self.created.push(opts);
        let mut layer = RecordingLayer::new(opts.width.unwrap_or(self.width), opts.height.unwrap_or(self.height));
        layer.z = opts.z_index;
        layer.interactive = opts.interactive;
        Ok(layer)
    }
}

pub fn bar(i: i64, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar { timestamp: 1_700_000_000_000 + i * 3_600_000, open, high, low, close }
}

/// The three-bar series with summary {13, 8}.
pub fn three_bars() -> Series {
    Series::new(
        vec![
            bar(0, 10.0, 12.0, 9.0, 11.0),
            bar(1, 11.0, 13.0, 10.0, 9.0),
            bar(2, 9.0, 10.0, 8.0, 9.5),
        ],
        Summary { high: 13.0, low: 8.0 },
    )
}
