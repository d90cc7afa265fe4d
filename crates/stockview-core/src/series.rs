// File: crates/stockview-core/src/series.rs
// Summary: OHLC bar series model with its trusted high/low summary.
// Notes:
// - Deserializes from the render-input JSON shape; the bar timestamp travels
//   as `datetime` in epoch milliseconds.
// - The summary may be pre-aggregated upstream and is not recomputed.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ConfigurationError};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "datetime")]
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Construct a bar enforcing `low <= min(open,close) <= max(open,close) <= high`.
    pub fn try_new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Result<Self, &'static str> {
        let bar = Self { timestamp, open, high, low, close };
        bar.check()?;
        Ok(bar)
    }

    fn check(&self) -> Result<(), &'static str> {
        if ![self.open, self.high, self.low, self.close].iter().all(|v| v.is_finite()) {
            return Err("non-finite price");
        }
        if self.low > self.open.min(self.close) { return Err("low above min(open,close)"); }
        if self.high < self.open.max(self.close) { return Err("high below max(open,close)"); }
        Ok(())
    }

    /// Closed at or above the open.
    pub fn is_positive(&self) -> bool { self.close >= self.open }

    pub fn body_top(&self) -> f64 { self.open.max(self.close) }
    pub fn body_bottom(&self) -> f64 { self.open.min(self.close) }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub high: f64,
    pub low: f64,
}

impl Summary {
    /// Highest high and lowest low over `bars`, or `None` when empty.
    pub fn of(bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let init = Self { high: first.high, low: first.low };
        Some(bars.iter().fold(init, |s, b| Self { high: s.high.max(b.high), low: s.low.min(b.low) }))
    }
}

/// Bars ascending by timestamp plus their summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub summary: Summary,
    #[serde(rename = "data")]
    pub bars: Vec<Bar>,
}

impl Series {
    /// Trust `summary` as given; no validation.
    pub fn new(bars: Vec<Bar>, summary: Summary) -> Self {
        Self { summary, bars }
    }

    /// Build a series whose summary is computed from the bars.
    pub fn from_bars(bars: Vec<Bar>) -> Self {
        let summary = Summary::of(&bars).unwrap_or(Summary { high: 0.0, low: 0.0 });
        Self { summary, bars }
    }

    /// Like [`Series::new`], but rejects inconsistent bars and out-of-order timestamps.
    pub fn try_new(bars: Vec<Bar>, summary: Summary) -> Result<Self, ConfigurationError> {
        let series = Self::new(bars, summary);
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (index, bar) in self.bars.iter().enumerate() {
            bar.check().map_err(|reason| ConfigurationError::InvalidBar { index, reason })?;
        }
        if let Some(w) = self.bars.windows(2).position(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(ConfigurationError::UnorderedSeries { index: w + 1 });
        }
        Ok(())
    }

    /// Parse the render-input JSON: `{ "summary": {..}, "data": [..] }`.
    pub fn from_json(s: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn len(&self) -> usize { self.bars.len() }
    pub fn is_empty(&self) -> bool { self.bars.is_empty() }
}

/// Where a chart gets its series: a value, or a producer called once per render.
pub enum DataSource {
    Series(Series),
    Producer(Box<dyn Fn() -> Series>),
}

impl DataSource {
    pub fn producer(f: impl Fn() -> Series + 'static) -> Self {
        DataSource::Producer(Box::new(f))
    }

    pub fn resolve(&self) -> std::borrow::Cow<'_, Series> {
        match self {
            DataSource::Series(s) => std::borrow::Cow::Borrowed(s),
            DataSource::Producer(f) => std::borrow::Cow::Owned(f()),
        }
    }
}

impl From<Series> for DataSource {
    fn from(s: Series) -> Self { DataSource::Series(s) }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Series(s) => f.debug_tuple("Series").field(&s.len()).finish(),
            DataSource::Producer(_) => f.write_str("Producer"),
        }
    }
}
