// File: crates/stockview-skia/src/export.rs
// Summary: Composite a chart's layer stack (plus background and border) into RGBA8 or PNG.

use anyhow::{Context, Result};
use skia_safe as skia;
use stockview_core::options::{Border, BorderStyle};
use stockview_core::{Chart, Color};

use crate::surface::{to_skia, RasterContainer, RasterLayer};

/// Flattened chart pixels.
pub struct Snapshot {
    /// Unpremultiplied RGBA8, `stride` bytes per row.
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Paint `layers` in the given order at the container origin, framed by `border`.
///
/// Output size is the container size plus the border on every side.
pub fn composite<'a>(
    layers: impl IntoIterator<Item = &'a mut RasterLayer>,
    (width, height): (u32, u32),
    background: Color,
    border: &Border,
) -> Result<Snapshot> {
    let inset = if border.is_visible() { border.width.ceil() as u32 } else { 0 };
    let (out_w, out_h) = (width + 2 * inset, height + 2 * inset);
    let mut surface = skia::surfaces::raster_n32_premul((out_w.max(1) as i32, out_h.max(1) as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {out_w}x{out_h} raster surface"))?;

    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(background));
        for layer in layers {
            let image = layer.image();
            canvas.draw_image(&image, (inset as f32, inset as f32), None);
        }
        if inset > 0 {
            draw_border(canvas, out_w as f32, out_h as f32, border);
        }
    }

    let info = skia::ImageInfo::new(
        (out_w.max(1) as i32, out_h.max(1) as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = out_w.max(1) as usize * 4;
    let mut pixels = vec![0u8; stride * out_h.max(1) as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back composited pixels");
    }
    Ok(Snapshot { pixels, width: out_w.max(1), height: out_h.max(1), stride })
}

fn draw_border(canvas: &skia::Canvas, w: f32, h: f32, border: &Border) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(border.color));
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(border.width);
    let dash = match border.style {
        BorderStyle::Dashed => Some([border.width * 3.0, border.width * 3.0]),
        BorderStyle::Dotted => Some([border.width, border.width]),
        BorderStyle::Solid | BorderStyle::None => None,
    };
    if let Some(intervals) = dash {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    let half = border.width / 2.0;
    canvas.draw_rect(skia::Rect::from_ltrb(half, half, w - half, h - half), &paint);
}

impl Snapshot {
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("snapshot buffer does not match its dimensions")?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    pub fn write_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_png_bytes()?).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Snapshot helpers for charts drawn on raster layers.
pub trait RasterChartExt {
    /// Flatten every layer, in paint order, over the theme background.
    fn snapshot(&mut self) -> Result<Snapshot>;

    fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        self.snapshot()?.to_png_bytes()
    }

    fn render_to_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        self.snapshot()?.write_png(output_png_path)
    }
}

impl RasterChartExt for Chart<RasterContainer> {
    fn snapshot(&mut self) -> Result<Snapshot> {
        let size = stockview_core::LayerHost::size(self.host());
        let background = self.options().theme.background;
        let border = self.options().border;
        composite(self.layers_mut(), size, background, &border)
    }
}
