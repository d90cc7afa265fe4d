// File: crates/stockview-core/src/axis.rs
// Summary: Price (Y) and time (X) axis layers: space reservation, tick placement, label thinning.

use tracing::debug;

use crate::error::{ConfigurationError, Result};
use crate::format::LabelFormatter;
use crate::geometry::Point;
use crate::layer::{DrawableLayer, Stroke};
use crate::theme::Theme;
use crate::types::{PlotRect, Tick, ValueRange};

/// Price ticks are spaced this many font lines apart.
pub const LINES_PER_TICK: f32 = 4.0;
/// Gap between the separator line and the label column.
pub const SEPARATOR_GAP: f32 = 2.0;
/// Time label slots are the first label's width plus this fraction.
pub const LABEL_SLOT_PADDING: f32 = 0.2;

// ---- price axis -------------------------------------------------------------

/// Where the price axis puts things, for one plot size and value range.
#[derive(Clone, Debug, PartialEq)]
pub struct YAxisLayout {
    /// Width reserved for labels, measured once on the highest price label.
    pub label_width: f32,
    pub separator_x: f32,
    /// Evenly spaced divisions of the value range (not rounded to nice numbers).
    pub tick_count: usize,
    /// Labeled ticks; the topmost division is never labeled.
    pub ticks: Vec<Tick>,
}

impl YAxisLayout {
    /// Pixels the plot must give up on the right.
    pub fn consumed_width(&self) -> f32 { self.label_width }
}

/// Lay out the price axis over `plot`.
///
/// Labels sit at `index * line_height * 4` for `index` in `1..tick_count`,
/// each showing `high - index * span / tick_count`.
pub fn layout_y_axis(
    plot: PlotRect,
    range: ValueRange,
    label_width: f32,
    line_height: f32,
    format: impl Fn(f64) -> String,
) -> YAxisLayout {
    let step = line_height * LINES_PER_TICK;
    let tick_count = if step > 0.0 { (plot.height as f32 / step).floor() as usize } else { 0 };

    let ticks = if tick_count == 0 {
        Vec::new()
    } else {
        let diff = range.span() / tick_count as f64;
        (1..tick_count)
            .map(|index| {
                let value = range.high - index as f64 * diff;
                Tick { value, position: index as f32 * step, label: format(value) }
            })
            .collect()
    };

    YAxisLayout {
        label_width,
        separator_x: plot.width as f32 - label_width - SEPARATOR_GAP,
        tick_count,
        ticks,
    }
}

/// Vertical strip holding the price labels, at the right edge of the plot.
pub struct YAxisLayer<L> {
    layer: L,
}

impl<L: DrawableLayer> YAxisLayer<L> {
    pub fn new(layer: L) -> Self {
        Self { layer }
    }

    pub fn layer(&self) -> &L { &self.layer }
    pub fn layer_mut(&mut self) -> &mut L { &mut self.layer }

    /// Draw the separator and price labels; returns the layout used.
    pub fn render(
        &mut self,
        plot: PlotRect,
        range: ValueRange,
        formatter: &dyn LabelFormatter,
        theme: &Theme,
    ) -> YAxisLayout {
        let label_width = self.layer.measure_text(&formatter.format_price(range.high));
        let layout = layout_y_axis(plot, range, label_width, self.layer.line_height(), |v| {
            formatter.format_price(v)
        });

        let h = plot.height as f32;
        self.layer.draw_line(
            Point::new(layout.separator_x, 0.0),
            Point::new(layout.separator_x, h),
            &Stroke::solid(theme.separator, 1.0),
        );

        let label_x = plot.width as f32 - layout.label_width + SEPARATOR_GAP;
        for tick in &layout.ticks {
            self.layer.fill_text(
                &tick.label,
                Point::new(label_x, tick.position),
                Some(layout.label_width),
                theme.axis_label,
            );
        }

        debug!(
            label_width = layout.label_width,
            tick_count = layout.tick_count,
            labels = layout.ticks.len(),
            "price axis laid out"
        );
        layout
    }
}

// ---- time axis --------------------------------------------------------------

/// A time label that survived thinning.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    /// Position in the label sequence (= bar index).
    pub index: usize,
    /// Slot it occupies, counting placed labels from the left.
    pub slot: usize,
    /// Left edge of the text.
    pub x: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct XAxisLayout {
    pub slot_width: f32,
    pub column_width: f32,
    /// Text baseline, one line above the bottom edge.
    pub baseline: f32,
    pub line_height: f32,
    pub placed: Vec<PlacedLabel>,
}

impl XAxisLayout {
    /// Pixels the plot must give up at the bottom.
    pub fn consumed_height(&self) -> f32 { self.line_height }
}

/// Greedy label thinning over `plot.width`.
///
/// Walks the labels left to right and places one in the next free slot only
/// when its bar column has moved past the slots already used and the slot
/// still fits inside the plot. Placed labels therefore never overlap and never
/// cross the right edge; the rest are dropped.
pub fn layout_x_axis(
    plot: PlotRect,
    labels: &[String],
    first_label_width: f32,
    line_height: f32,
) -> Result<XAxisLayout, ConfigurationError> {
    if labels.is_empty() {
        return Err(ConfigurationError::EmptyLabels);
    }

    let width = plot.width as f32;
    let slot_width = (first_label_width * (1.0 + LABEL_SLOT_PADDING)).ceil();
    let column_width = width / labels.len() as f32;

    let mut placed = Vec::new();
    let mut current_width = 0.0f32;
    let mut slot = 0usize;
    for (index, label) in labels.iter().enumerate() {
        let x = slot_width * slot as f32 + slot_width * (LABEL_SLOT_PADDING / 2.0);
        if column_width * index as f32 > current_width && x + slot_width < width {
            placed.push(PlacedLabel { index, slot, x, label: label.clone() });
            slot += 1;
            current_width = slot_width * slot as f32;
        }
    }

    Ok(XAxisLayout {
        slot_width,
        column_width,
        baseline: plot.height as f32 - line_height,
        line_height,
        placed,
    })
}

/// Horizontal strip holding the time labels, along the bottom of the plot.
pub struct XAxisLayer<L> {
    layer: L,
}

impl<L: DrawableLayer> XAxisLayer<L> {
    pub fn new(layer: L) -> Self {
        Self { layer }
    }

    pub fn layer(&self) -> &L { &self.layer }
    pub fn layer_mut(&mut self) -> &mut L { &mut self.layer }

    /// Draw the surviving labels; fails when there are none to lay out.
    pub fn render(&mut self, plot: PlotRect, labels: &[String], theme: &Theme) -> Result<XAxisLayout> {
        let first = labels.first().ok_or(ConfigurationError::EmptyLabels)?;
        let first_width = self.layer.measure_text(first);
        let layout = layout_x_axis(plot, labels, first_width, self.layer.line_height())?;

        for p in &layout.placed {
            self.layer.fill_text(
                &p.label,
                Point::new(p.x, layout.baseline),
                Some(layout.slot_width),
                theme.axis_label,
            );
        }

        debug!(
            slot_width = layout.slot_width,
            labels = labels.len(),
            placed = layout.placed.len(),
            "time axis laid out"
        );
        Ok(layout)
    }
}
