// File: crates/stockview-demo/src/main.rs
// Summary: Demo loads OHLC data (render-input JSON or CSV), renders the stock view and a crosshair pass to PNGs.

use anyhow::{Context, Result};
use stockview_core::{Bar, ChartOptions, DataSource, PointerSample, Series, StockView};
use stockview_skia::{RasterChartExt, RasterContainer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [INPUT.json|INPUT.csv] [OPTIONS.json]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let options = match args.next() {
        Some(p) => {
            let raw = std::fs::read_to_string(&p).with_context(|| format!("reading options {p}"))?;
            ChartOptions::from_json(&raw).with_context(|| format!("parsing options {p}"))?
        }
        None => ChartOptions::default(),
    };

    let data = match &input {
        Some(path) => DataSource::Series(load_series(path)?),
        None => {
            info!("no input given; using a generated random walk");
            DataSource::producer(|| random_walk(60))
        }
    };

    let view = StockView::new(options, data);
    let container = RasterContainer::from_options(view.options());
    let (mut chart, report) = view.render(container)?;
    info!(
        low = report.range.low,
        high = report.range.high,
        plot_width = report.plot.width,
        plot_height = report.plot.height,
        time_labels = report.x_axis.placed.len(),
        price_labels = report.y_axis.ticks.len(),
        "rendered {} candles",
        report.candles.len()
    );

    let stem = input
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("generated")
        .to_string();

    let out = out_name_with(&stem, "chart");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());

    // Crosshair pass: pointer at the plot center, then a quick sweep coalesced into one frame.
    let center = PointerSample::new(report.plot.width as f32 / 2.0, report.plot.height as f32 / 2.0);
    match chart.pointer_move(center) {
        Some(frame) => info!(price = frame.price, label = ?frame.label_index, "crosshair at plot center"),
        None => warn!("chart has no crosshair layer"),
    }
    for step in 1..=8 {
        let x = report.plot.width as f32 * step as f32 / 10.0;
        chart.queue_pointer(stockview_core::PointerEvent::Move(PointerSample::new(x, center.y * 0.5)));
    }
    if let Some(frame) = chart.frame() {
        info!(x = frame.pointer.x, price = frame.price, "coalesced crosshair frame");
    }
    let out = out_name_with(&stem, "crosshair");
    chart.render_to_png(&out)?;
    println!("Wrote {}", out.display());

    chart.pointer_leave();
    Ok(())
}

/// Produce output file name like target/out/stockview_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    PathBuf::from("target/out").join(format!("stockview_{short}_{suffix}.png"))
}

fn load_series(path: &Path) -> Result<Series> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    let series = if ext == "json" {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Series::from_json(&raw).with_context(|| format!("parsing {}", path.display()))?
    } else {
        let bars = load_ohlc_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        Series::from_bars(bars)
    };
    if series.is_empty() {
        anyhow::bail!("no bars loaded from {}; check headers/delimiter", path.display());
    }
    info!(bars = series.len(), high = series.summary.high, low = series.summary.low, "loaded {}", path.display());
    Ok(series)
}

/// Load exchange-style OHLC CSV into bars.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    if i_time.is_none() {
        anyhow::bail!("no time column among headers {headers:?}");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim);
        let price = |i: Option<usize>| field(i).and_then(|s| s.parse::<f64>().ok());

        let Some(t) = field(i_time).and_then(parse_time_to_millis) else {
            warn!(row, "skipping row with unreadable time");
            continue;
        };
        if let (Some(o), Some(h), Some(l), Some(c)) = (price(i_open), price(i_high), price(i_low), price(i_close)) {
            match Bar::try_new(t, o, h, l, c) {
                Ok(bar) => out.push(bar),
                Err(reason) => warn!(row, reason, "skipping inconsistent bar"),
            }
        }
    }
    Ok(out)
}

fn parse_time_to_millis(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        // epoch seconds unless it is already milliseconds
        return Some(if n > 10_i64.pow(11) { n } else { n * 1000 });
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp_millis())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc().timestamp_millis())
        })
        .ok()
}

/// Deterministic hourly random walk, for running without an input file.
fn random_walk(n: usize) -> Series {
    let start = 1_700_000_000_000_i64;
    let mut price = 100.0f64;
    let mut seed = 0x2545_f491_u64;
    let mut bars = Vec::with_capacity(n);
    for i in 0..n {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let step = (seed % 1000) as f64 / 1000.0 - 0.5;
        let open = price;
        let close = open + step * 2.0;
        let high = open.max(close) + (seed % 7) as f64 * 0.1;
        let low = open.min(close) - (seed % 5) as f64 * 0.1;
        bars.push(Bar { timestamp: start + i as i64 * 3_600_000, open, high, low, close });
        price = close;
    }
    Series::from_bars(bars)
}
