// File: crates/stockview-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster layers behind the core `DrawableLayer` trait, plus PNG/RGBA export.

pub mod export;
pub mod surface;
pub mod text;

pub use export::{composite, RasterChartExt, Snapshot};
pub use surface::{RasterContainer, RasterLayer};
pub use text::TextShaper;
