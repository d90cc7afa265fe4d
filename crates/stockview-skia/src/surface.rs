// File: crates/stockview-skia/src/surface.rs
// Summary: Skia CPU raster layers and the container that stacks them.

use std::rc::Rc;

use skia_safe as skia;
use stockview_core::error::{ChartError, Result};
use stockview_core::geometry::{Point, Rect};
use stockview_core::types::AXIS_FONT_SIZE;
use stockview_core::{ChartOptions, Color, DrawableLayer, LayerHost, LayerOptions, Stroke};
use tracing::debug;

use crate::text::TextShaper;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Backing surfaces are at least one pixel; the logical size may be zero.
fn allocate(width: u32, height: u32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width.max(1) as i32, height.max(1) as i32))
        .ok_or(ChartError::Surface { width, height })
}

/// One transparent raster surface in the stack.
pub struct RasterLayer {
    surface: skia::Surface,
    width: u32,
    height: u32,
    z_index: i32,
    interactive: bool,
    font_size: f32,
    text: Rc<TextShaper>,
}

impl RasterLayer {
    pub fn is_interactive(&self) -> bool { self.interactive }

    /// Immutable snapshot of the current pixels, for compositing.
    pub fn image(&mut self) -> skia::Image {
        self.surface.image_snapshot()
    }

    /// Read back as unpremultiplied RGBA8 rows (`width * 4` bytes each).
    pub fn read_rgba8(&mut self) -> Option<Vec<u8>> {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        self.surface.read_pixels(&info, &mut px, stride, (0, 0)).then_some(px)
    }
}

impl DrawableLayer for RasterLayer {
    fn width(&self) -> f32 { self.width as f32 }
    fn height(&self) -> f32 { self.height as f32 }
    fn z_index(&self) -> i32 { self.z_index }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.surface = allocate(width, height)?;
        self.width = width;
        self.height = height;
        self.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.surface.canvas().clear(skia::Color::TRANSPARENT);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(stroke.color));
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        if let Some(intervals) = stroke.dash {
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_style(skia::paint::Style::Fill);
        let r = skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn fill_text(&mut self, text: &str, origin: Point, max_width: Option<f32>, color: Color) {
        let text_shaper = Rc::clone(&self.text);
        let size = self.font_size;
        let canvas = self.surface.canvas();
        text_shaper.draw_baseline(canvas, text, (origin.x, origin.y), max_width, size, to_skia(color));
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.text.measure_width(text, self.font_size)
    }

    fn line_height(&self) -> f32 {
        self.font_size.floor()
    }
}

/// Fixed-size container of raster layers; all layers share one text shaper.
pub struct RasterContainer {
    width: u32,
    height: u32,
    font_size: f32,
    text: Rc<TextShaper>,
    allocated: usize,
}

impl RasterContainer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, font_size: AXIS_FONT_SIZE, text: Rc::new(TextShaper::new()), allocated: 0 }
    }

    /// Sized and styled from chart options.
    pub fn from_options(opts: &ChartOptions) -> Self {
        Self::new(opts.width, opts.height).with_font_size(opts.font_size)
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Layers allocated so far, including ones since dropped.
    pub fn allocated(&self) -> usize { self.allocated }
}

impl LayerHost for RasterContainer {
    type Layer = RasterLayer;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_layer(&mut self, opts: LayerOptions) -> Result<RasterLayer> {
        let width = opts.width.unwrap_or(self.width);
        let height = opts.height.unwrap_or(self.height);
        let mut layer = RasterLayer {
            surface: allocate(width, height)?,
            width,
            height,
            z_index: opts.z_index,
            interactive: opts.interactive,
            font_size: self.font_size,
            text: Rc::clone(&self.text),
        };
        layer.clear();
        self.allocated += 1;
        debug!(width, height, z = opts.z_index, interactive = opts.interactive, "raster layer allocated");
        Ok(layer)
    }
}
