// File: crates/stockview-core/src/view.rs
// Summary: Top-level stock view: options plus a data source, rendered into a caller-supplied container.

use tracing::debug;

use crate::chart::{Chart, RenderReport};
use crate::error::Result;
use crate::layer::LayerHost;
use crate::options::ChartOptions;
use crate::series::DataSource;

/// A configured chart waiting for a container.
#[derive(Debug)]
pub struct StockView {
    options: ChartOptions,
    data: DataSource,
}

impl StockView {
    pub fn new(options: ChartOptions, data: impl Into<DataSource>) -> Self {
        Self { options, data: data.into() }
    }

    /// The container passed to [`StockView::render`] should be sized from these.
    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Build a chart in `container` and render the data source into it once.
    /// A producer data source is called here, not earlier.
    pub fn render<H: LayerHost>(&self, container: H) -> Result<(Chart<H>, RenderReport)> {
        debug!(width = self.options.width, height = self.options.height, "rendering stock view");
        let mut chart = Chart::builder().container(container).options(self.options.clone()).build()?;
        let series = self.data.resolve();
        let report = chart.render(&series)?;
        Ok((chart, report))
    }
}
