// File: crates/stockview-core/src/candle.rs
// Summary: Candlestick geometry and the renderer that draws one bar per column.

use crate::error::{ConfigurationError, Result};
use crate::geometry::{snap, Point, RectI32};
use crate::layer::{DrawableLayer, Stroke};
use crate::scale::ScaleMapper;
use crate::series::Bar;
use crate::theme::Theme;
use crate::types::{ValueRange, CANDLE_GAP_FRACTION};

/// Pixel geometry of one candle, already snapped to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandleGeometry {
    pub positive: bool,
    pub wick_x: i32,
    pub wick_top: i32,
    pub wick_bottom: i32,
    pub body: RectI32,
}

/// Left edge of the column for bar `index`.
#[inline]
pub fn column_x(index: usize, column_width: f64) -> f64 {
    index as f64 * column_width
}

/// Geometry of `bar` in column `index`.
///
/// The body spans `max(open,close)` down to `min(open,close)` and is centered
/// in the column with `gap_fraction` of the column width left empty.
pub fn candle_geometry(
    bar: &Bar,
    index: usize,
    column_width: f64,
    gap_fraction: f64,
    scale: &ScaleMapper,
) -> CandleGeometry {
    let x = column_x(index, column_width);
    let body_width = column_width * (1.0 - gap_fraction);

    let top = bar.body_top();
    let body_y = scale.to_pixel(top);
    let body_h = scale.to_length(top - bar.body_bottom());
    let body_x = x + (column_width - body_width) / 2.0;

    CandleGeometry {
        positive: bar.is_positive(),
        wick_x: snap(x + column_width / 2.0),
        wick_top: snap(scale.to_pixel(bar.high)),
        wick_bottom: snap(scale.to_pixel(bar.low)),
        body: RectI32::from_ltwh(snap(body_x), snap(body_y), snap(body_width), snap(body_h)),
    }
}

/// Draws bars onto one surface with a scale shared by every bar of the pass.
pub struct CandlestickRenderer<'a, L> {
    surface: &'a mut L,
    scale: ScaleMapper,
    column_width: f64,
    gap_fraction: f64,
    theme: Theme,
}

impl<'a, L: DrawableLayer> CandlestickRenderer<'a, L> {
    pub fn builder() -> CandlestickRendererBuilder<'a, L> {
        CandlestickRendererBuilder {
            surface: None,
            high: None,
            low: None,
            column_width: None,
            gap_fraction: CANDLE_GAP_FRACTION,
            theme: Theme::light(),
        }
    }

    pub fn scale(&self) -> &ScaleMapper { &self.scale }
    pub fn column_width(&self) -> f64 { self.column_width }

    /// Draw wick then body of `bar` at column `index`.
    pub fn render(&mut self, index: usize, bar: &Bar) -> CandleGeometry {
        let g = candle_geometry(bar, index, self.column_width, self.gap_fraction, &self.scale);
        let color = self.theme.candle(g.positive);

        self.surface.draw_line(
            Point::new(g.wick_x as f32, g.wick_top as f32),
            Point::new(g.wick_x as f32, g.wick_bottom as f32),
            &Stroke::solid(color, 1.0),
        );
        self.surface.fill_rect(g.body.into(), color);
        g
    }
}

pub struct CandlestickRendererBuilder<'a, L> {
    surface: Option<&'a mut L>,
    high: Option<f64>,
    low: Option<f64>,
    column_width: Option<f64>,
    gap_fraction: f64,
    theme: Theme,
}

impl<'a, L: DrawableLayer> CandlestickRendererBuilder<'a, L> {
    pub fn surface(mut self, surface: &'a mut L) -> Self {
        self.surface = Some(surface);
        self
    }
    pub fn high(mut self, high: f64) -> Self {
        self.high = Some(high);
        self
    }
    pub fn low(mut self, low: f64) -> Self {
        self.low = Some(low);
        self
    }
    pub fn column_width(mut self, column_width: f64) -> Self {
        self.column_width = Some(column_width);
        self
    }
    pub fn gap_fraction(mut self, gap_fraction: f64) -> Self {
        self.gap_fraction = gap_fraction;
        self
    }
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.theme = *theme;
        self
    }

    /// Check every required input; the scale uses the surface's current height.
    pub fn build(self) -> Result<CandlestickRenderer<'a, L>> {
        let surface = self.surface.ok_or(ConfigurationError::MissingSurface)?;
        let high = self.high.ok_or(ConfigurationError::MissingBound("high"))?;
        let low = self.low.ok_or(ConfigurationError::MissingBound("low"))?;
        let column_width = self.column_width.ok_or(ConfigurationError::MissingBound("width"))?;

        if !column_width.is_finite() || column_width <= 0.0 {
            return Err(ConfigurationError::InvalidBound { name: "width", value: column_width }.into());
        }
        if !(0.0..1.0).contains(&self.gap_fraction) {
            return Err(ConfigurationError::InvalidBound { name: "offsetWidth", value: self.gap_fraction }.into());
        }
        let range = ValueRange::new(low, high)?;
        let scale = ScaleMapper::new(range, surface.height() as f64);

        Ok(CandlestickRenderer {
            surface,
            scale,
            column_width,
            gap_fraction: self.gap_fraction,
            theme: self.theme,
        })
    }
}
