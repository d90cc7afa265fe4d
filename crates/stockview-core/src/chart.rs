// File: crates/stockview-core/src/chart.rs
// Summary: Chart orchestrator: pads the value range, lays out axes (shrinking the plot), then draws candles.

use tracing::{debug, warn};

use crate::axis::{XAxisLayer, XAxisLayout, YAxisLayer, YAxisLayout};
use crate::candle::{CandleGeometry, CandlestickRenderer};
use crate::crosshair::{CrosshairFrame, CrosshairLayer, CrosshairState};
use crate::error::{ConfigurationError, Result};
use crate::format::{LabelFormatter, PtBrFormatter};
use crate::layer::{DrawableLayer, LayerHost, LayerOptions};
use crate::options::ChartOptions;
use crate::scale::ScaleMapper;
use crate::series::Series;
use crate::types::{PlotRect, PointerEvent, PointerSample, ValueRange, ZOrder};

/// Everything one render pass computed.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    pub range: ValueRange,
    /// Plot rectangle left for candles after both axes took their share.
    pub plot: PlotRect,
    pub scale: ScaleMapper,
    pub column_width: f64,
    pub y_axis: YAxisLayout,
    pub x_axis: XAxisLayout,
    pub candles: Vec<CandleGeometry>,
}

/// Owns the layer stack of one chart and sequences every render.
///
/// Layout order is fixed: price axis, time axis, crosshair, candles. Each axis
/// takes the current plot rectangle and reports what it consumed.
pub struct Chart<H: LayerHost> {
    host: H,
    options: ChartOptions,
    formatter: Box<dyn LabelFormatter>,
    chart_layer: H::Layer,
    y_axis: Option<YAxisLayer<H::Layer>>,
    x_axis: Option<XAxisLayer<H::Layer>>,
    crosshair: Option<CrosshairLayer<H::Layer>>,
}

impl<H: LayerHost> Chart<H> {
    pub fn builder() -> ChartBuilder<H> {
        ChartBuilder { container: None, options: ChartOptions::default(), formatter: None }
    }

    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn host(&self) -> &H { &self.host }
    pub fn chart_layer(&self) -> &H::Layer { &self.chart_layer }
    pub fn y_axis(&self) -> Option<&YAxisLayer<H::Layer>> { self.y_axis.as_ref() }
    pub fn x_axis(&self) -> Option<&XAxisLayer<H::Layer>> { self.x_axis.as_ref() }
    pub fn crosshair(&self) -> Option<&CrosshairLayer<H::Layer>> { self.crosshair.as_ref() }

    /// Draw `series` from scratch.
    ///
    /// Layers from a previous render are replaced. On error the render stops
    /// where it failed; layers already drawn keep their content.
    pub fn render(&mut self, series: &Series) -> Result<RenderReport> {
        let (width, height) = self.host.size();
        self.y_axis = None;
        self.x_axis = None;
        self.crosshair = None;
        self.chart_layer.resize(width, height)?;
        self.chart_layer.clear();

        let range = ValueRange::padded(series.summary.low, series.summary.high, self.options.padding)?;
        debug!(low = range.low, high = range.high, bars = series.len(), "padded value range");

        let labels: Vec<String> =
            series.bars.iter().map(|b| self.formatter.format_datetime(b.timestamp)).collect();
        let theme = self.options.theme;
        let axis_z = self.options.layers.z_index(ZOrder::YAxis);
        let mut plot = PlotRect::new(width, height);

        let layer = self.host.create_layer(LayerOptions::new(axis_z).with_size(plot.width, plot.height))?;
        let y_axis = self.y_axis.insert(YAxisLayer::new(layer));
        let y_layout = y_axis.render(plot, range, self.formatter.as_ref(), &theme);
        plot = plot.shrink_width(y_layout.consumed_width());

        let axis_z = self.options.layers.z_index(ZOrder::XAxis);
        let layer = self.host.create_layer(LayerOptions::new(axis_z).with_size(plot.width, plot.height))?;
        let x_axis = self.x_axis.insert(XAxisLayer::new(layer));
        let x_layout = x_axis.render(plot, &labels, &theme)?;
        plot = plot.shrink_height(x_layout.consumed_height());

        self.chart_layer.resize(plot.width, plot.height)?;
        let scale = ScaleMapper::new(range, plot.height as f64);
        debug!(width = plot.width, height = plot.height, "plot rectangle");

        if self.options.show_crosshair {
            let z = self.options.layers.z_index(ZOrder::Crosshair);
            let layer = self
                .host
                .create_layer(LayerOptions::new(z).with_size(plot.width, plot.height).interactive())?;
            self.crosshair = Some(CrosshairLayer::new(layer, scale, labels, &theme));
        }

        let column_width = plot.width as f64 / series.len() as f64;
        let mut renderer = CandlestickRenderer::builder()
            .surface(&mut self.chart_layer)
            .high(range.high)
            .low(range.low)
            .column_width(column_width)
            .gap_fraction(self.options.offset_width)
            .theme(&theme)
            .build()?;
        let candles: Vec<CandleGeometry> =
            series.bars.iter().enumerate().map(|(i, bar)| renderer.render(i, bar)).collect();
        debug!(candles = candles.len(), column_width, "candles drawn");

        Ok(RenderReport { range, plot, scale, column_width, y_axis: y_layout, x_axis: x_layout, candles })
    }

    pub fn crosshair_state(&self) -> CrosshairState {
        self.crosshair.as_ref().map(CrosshairLayer::state).unwrap_or_default()
    }

    /// Route a pointer move to the crosshair and redraw it now.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<CrosshairFrame> {
        let formatter = self.formatter.as_ref();
        match self.crosshair.as_mut() {
            Some(c) => Some(c.pointer_move(sample, formatter)),
            None => {
                warn!("pointer move ignored: chart has no crosshair");
                None
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        match self.crosshair.as_mut() {
            Some(c) => c.pointer_leave(),
            None => warn!("pointer leave ignored: chart has no crosshair"),
        }
    }

    /// Hold `event` until the next [`Chart::frame`]; later events replace earlier ones.
    pub fn queue_pointer(&mut self, event: PointerEvent) {
        match self.crosshair.as_mut() {
            Some(c) => c.queue(event),
            None => warn!(?event, "pointer event ignored: chart has no crosshair"),
        }
    }

    /// Frame boundary: redraw the crosshair at most once, from the latest queued event.
    pub fn frame(&mut self) -> Option<CrosshairFrame> {
        let formatter = self.formatter.as_ref();
        self.crosshair.as_mut()?.frame(formatter)
    }

    /// All layers in paint order: ascending z-index, creation order on ties.
    pub fn layers(&self) -> Vec<&H::Layer> {
        let mut v: Vec<&H::Layer> = vec![&self.chart_layer];
        v.extend(self.y_axis.as_ref().map(YAxisLayer::layer));
        v.extend(self.x_axis.as_ref().map(XAxisLayer::layer));
        v.extend(self.crosshair.as_ref().map(CrosshairLayer::layer));
        v.sort_by_key(|l| l.z_index());
        v
    }

    pub fn layers_mut(&mut self) -> Vec<&mut H::Layer> {
        let mut v: Vec<&mut H::Layer> = vec![&mut self.chart_layer];
        v.extend(self.y_axis.as_mut().map(YAxisLayer::layer_mut));
        v.extend(self.x_axis.as_mut().map(XAxisLayer::layer_mut));
        v.extend(self.crosshair.as_mut().map(CrosshairLayer::layer_mut));
        v.sort_by_key(|l| l.z_index());
        v
    }
}

pub struct ChartBuilder<H> {
    container: Option<H>,
    options: ChartOptions,
    formatter: Option<Box<dyn LabelFormatter>>,
}

impl<H: LayerHost> ChartBuilder<H> {
    pub fn container(mut self, container: H) -> Self {
        self.container = Some(container);
        self
    }
    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
    pub fn formatter(mut self, formatter: impl LabelFormatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Allocate the candle layer; fails when no container was supplied.
    pub fn build(self) -> Result<Chart<H>> {
        let mut host = self.container.ok_or(ConfigurationError::MissingContainer)?;
        let z = self.options.layers.z_index(ZOrder::Chart);
        let chart_layer = host.create_layer(LayerOptions::new(z))?;
        debug!(size = ?host.size(), z, "chart created");
        Ok(Chart {
            host,
            options: self.options,
            formatter: self.formatter.unwrap_or_else(|| Box::new(PtBrFormatter::default())),
            chart_layer,
            y_axis: None,
            x_axis: None,
            crosshair: None,
        })
    }
}
