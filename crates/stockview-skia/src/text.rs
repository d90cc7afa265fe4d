// File: crates/stockview-skia/src/text.rs
// Summary: Axis text shaping, measurement and painting using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        p.max_intrinsic_width()
    }

    /// Paint `text` with its alphabetic baseline at `y`, compressed horizontally
    /// to `max_width` when wider.
    pub fn draw_baseline(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        max_width: Option<f32>,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let top = y - p.alphabetic_baseline();
        let width = p.max_intrinsic_width();
        match max_width {
            Some(max) if width > max && max > 0.0 => {
                canvas.save();
                canvas.translate((x, 0.0));
                canvas.scale((max / width, 1.0));
                p.paint(canvas, (0.0, top));
                canvas.restore();
            }
            _ => p.paint(canvas, (x, top)),
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
