// File: crates/stockview-skia/tests/rgba.rs
// Purpose: Render a small series through raster layers and check the composited pixels.

use stockview_core::geometry::{Point, Rect};
use stockview_core::{
    Bar, Chart, ChartOptions, Color, DrawableLayer, LayerHost, LayerOptions, PointerSample, Series, Summary,
};
use stockview_skia::{RasterChartExt, RasterContainer, Snapshot};

fn three_bars() -> Series {
    let bar = |i: i64, o, h, l, c| Bar { timestamp: 1_700_000_000_000 + i * 3_600_000, open: o, high: h, low: l, close: c };
    Series::new(
        vec![bar(0, 10.0, 12.0, 9.0, 11.0), bar(1, 11.0, 13.0, 10.0, 9.0), bar(2, 9.0, 10.0, 8.0, 9.5)],
        Summary { high: 13.0, low: 8.0 },
    )
}

fn pixel(s: &Snapshot, x: i32, y: i32) -> [u8; 4] {
    let i = y as usize * s.stride + x as usize * 4;
    [s.pixels[i], s.pixels[i + 1], s.pixels[i + 2], s.pixels[i + 3]]
}

fn rendered() -> (Chart<RasterContainer>, stockview_core::RenderReport) {
    let opts = ChartOptions::default();
    let mut chart = Chart::builder().container(RasterContainer::from_options(&opts)).options(opts).build().expect("chart");
    let report = chart.render(&three_bars()).expect("render");
    (chart, report)
}

#[test]
fn snapshot_includes_the_border() {
    let (mut chart, _) = rendered();
    let snap = chart.snapshot().expect("snapshot");
    // 600x400 container plus a 1px border on each side
    assert_eq!((snap.width, snap.height), (602, 402));
    assert_eq!(snap.stride, 602 * 4);
    assert_eq!(snap.pixels.len(), 602 * 402 * 4);
    assert_eq!(pixel(&snap, 0, 0), [0xc3, 0xc3, 0xc3, 255]);
}

#[test]
fn candle_bodies_use_direction_colors() {
    let (mut chart, report) = rendered();
    let snap = chart.snapshot().expect("snapshot");
    let inset = 1;

    let center = |i: usize| {
        let b = report.candles[i].body;
        (inset + b.left + b.width() / 4, inset + b.top + b.height() / 2)
    };
    let (x, y) = center(0);
    assert_eq!(pixel(&snap, x, y), [0, 128, 0, 255]);
    let (x, y) = center(1);
    assert_eq!(pixel(&snap, x, y), [255, 0, 0, 255]);
    assert_eq!(chart.host().allocated(), 4);
}

#[test]
fn crosshair_leave_restores_the_plot() {
    let (mut chart, report) = rendered();
    let before = chart.snapshot().expect("snapshot").pixels;

    let mid = PointerSample::new(report.plot.width as f32 / 2.0, report.plot.height as f32 / 3.0);
    assert!(chart.pointer_move(mid).is_some());
    let during = chart.snapshot().expect("snapshot").pixels;
    assert_ne!(before, during);

    chart.pointer_leave();
    let after = chart.snapshot().expect("snapshot").pixels;
    assert_eq!(before, after);
}

#[test]
fn png_bytes_have_a_png_signature() {
    let (mut chart, _) = rendered();
    let bytes = chart.render_to_png_bytes().expect("png");
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

#[test]
fn png_decodes_to_the_snapshot_pixels() {
    let (mut chart, report) = rendered();
    let snap = chart.snapshot().expect("snapshot");
    let decoded = image::load_from_memory(&chart.render_to_png_bytes().expect("png")).expect("decode").to_rgba8();

    assert_eq!(decoded.dimensions(), (snap.width, snap.height));
    assert_eq!(decoded.as_raw(), &snap.pixels);
    let b = report.candles[2].body;
    let px = decoded.get_pixel((1 + b.left + b.width() / 4) as u32, (1 + b.top + b.height() / 2) as u32);
    assert_eq!(px.0, [0, 128, 0, 255]);
}

#[test]
fn raster_layer_fills_and_clears_on_resize() {
    let mut host = RasterContainer::new(20, 10);
    let mut layer = host.create_layer(LayerOptions::new(3)).expect("layer");
    assert_eq!((layer.width(), layer.height(), layer.z_index()), (20.0, 10.0, 3));

    layer.fill_rect(Rect::from_xywh(0.0, 0.0, 5.0, 5.0), Color::rgb(0, 0, 255));
    let px = layer.read_rgba8().expect("pixels");
    assert_eq!(&px[..4], &[0, 0, 255, 255]);
    // untouched pixels stay transparent
    assert_eq!(px[(9 * 20 + 19) * 4 + 3], 0);

    layer.resize(4, 4).expect("resize");
    let px = layer.read_rgba8().expect("pixels");
    assert_eq!(px.len(), 4 * 4 * 4);
    assert!(px.iter().all(|&b| b == 0));

    layer.draw_line(Point::new(0.0, 1.5), Point::new(4.0, 1.5), &stockview_core::Stroke::solid(Color::BLACK, 1.0));
    let px = layer.read_rgba8().expect("pixels");
    assert!(px.chunks(4).any(|p| p[3] > 0));
}

#[test]
fn zero_sized_layers_still_allocate() {
    let mut host = RasterContainer::new(0, 0);
    let layer = host.create_layer(LayerOptions::new(0)).expect("layer");
    assert_eq!(layer.width(), 0.0);
    assert_eq!(host.allocated(), 1);
}
