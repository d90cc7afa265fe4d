// File: crates/stockview-core/src/lib.rs
// Summary: Core library entry point; exports the candlestick chart model, layout and layer abstractions.

pub mod axis;
pub mod candle;
pub mod chart;
pub mod crosshair;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layer;
pub mod options;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{layout_x_axis, layout_y_axis, XAxisLayer, XAxisLayout, YAxisLayer, YAxisLayout};
pub use candle::{candle_geometry, CandleGeometry, CandlestickRenderer};
pub use chart::{Chart, ChartBuilder, RenderReport};
pub use crosshair::{CrosshairFrame, CrosshairLayer, CrosshairState};
pub use error::{ChartError, ConfigurationError};
pub use format::{LabelFormatter, PtBrFormatter};
pub use layer::{Color, DrawableLayer, LayerHost, LayerOptions, Stroke};
pub use options::{Border, ChartOptions, RawOptions};
pub use scale::ScaleMapper;
pub use series::{Bar, DataSource, Series, Summary};
pub use theme::Theme;
pub use types::{LayerOrder, PlotRect, PointerEvent, PointerSample, Tick, ValueRange, ZOrder};
pub use view::StockView;
