// File: crates/stockview-core/src/crosshair.rs
// Summary: Interactive crosshair overlay; reprojects pointer position into price and bar label.

use tracing::trace;

use crate::format::LabelFormatter;
use crate::geometry::{Point, Rect};
use crate::layer::DrawableLayer;
use crate::scale::ScaleMapper;
use crate::theme::Theme;
use crate::types::{PointerEvent, PointerSample};

/// Callout boxes are the text extent grown by this factor.
pub const CALLOUT_PADDING: f32 = 1.2;
/// Lift of the callout text baseline above the box's vertical centering.
const CALLOUT_TEXT_LIFT: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrosshairState {
    /// No pointer over the plot; the overlay is empty.
    #[default]
    Idle,
    /// Pointer over the plot; the overlay shows guides and callouts.
    Active,
}

/// A filled label box with centered text.
#[derive(Clone, Debug, PartialEq)]
pub struct Callout {
    pub rect: Rect,
    pub text: String,
    pub text_origin: Point,
    pub text_width: f32,
}

/// Place a callout whose bottom edge sits at `anchor.y`, centered on
/// `anchor.x` but pushed back inside `[0, surface_width]`.
pub fn callout_geometry(text: &str, text_width: f32, line_height: f32, anchor: Point, surface_width: f32) -> Callout {
    let rect_w = text_width * CALLOUT_PADDING;
    let rect_h = line_height * CALLOUT_PADDING;

    let mut x = anchor.x - rect_w / 2.0;
    if x < 0.0 {
        x = 0.0;
    }
    if x + rect_w > surface_width {
        x = surface_width - rect_w;
    }

    Callout {
        rect: Rect::from_xywh(x, anchor.y - rect_h, rect_w, rect_h),
        text: text.to_string(),
        text_origin: Point::new(
            x + (rect_w - text_width) / 2.0,
            anchor.y - (rect_h - line_height) / 2.0 - CALLOUT_TEXT_LIFT,
        ),
        text_width,
    }
}

/// Index of the label under `pointer_x`, clamped to the label sequence.
pub fn label_index(pointer_x: f32, surface_width: f32, label_count: usize) -> Option<usize> {
    if label_count == 0 || surface_width <= 0.0 {
        return None;
    }
    let raw = (label_count as f32 * pointer_x / surface_width).floor();
    Some((raw.max(0.0) as usize).min(label_count - 1))
}

/// What one pointer-move drew.
#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairFrame {
    pub pointer: PointerSample,
    pub price: f64,
    pub price_callout: Callout,
    pub label_index: Option<usize>,
    pub time_callout: Option<Callout>,
}

/// Transient overlay above the plot.
///
/// Every move clears and redraws the whole surface; only Idle/Active is kept
/// between events, plus at most one queued event for frame coalescing.
pub struct CrosshairLayer<L> {
    layer: L,
    scale: ScaleMapper,
    labels: Vec<String>,
    theme: Theme,
    state: CrosshairState,
    pending: Option<PointerEvent>,
}

impl<L: DrawableLayer> CrosshairLayer<L> {
    /// `scale` must be the mapper the plot was drawn with.
    pub fn new(layer: L, scale: ScaleMapper, labels: Vec<String>, theme: &Theme) -> Self {
        Self { layer, scale, labels, theme: *theme, state: CrosshairState::Idle, pending: None }
    }

    pub fn state(&self) -> CrosshairState { self.state }
    pub fn scale(&self) -> &ScaleMapper { &self.scale }
    pub fn layer(&self) -> &L { &self.layer }
    pub fn layer_mut(&mut self) -> &mut L { &mut self.layer }

    pub fn handle(&mut self, event: PointerEvent, formatter: &dyn LabelFormatter) -> Option<CrosshairFrame> {
        match event {
            PointerEvent::Move(sample) => Some(self.pointer_move(sample, formatter)),
            PointerEvent::Leave => {
                self.pointer_leave();
                None
            }
        }
    }

    pub fn pointer_move(&mut self, sample: PointerSample, formatter: &dyn LabelFormatter) -> CrosshairFrame {
        if self.state == CrosshairState::Idle {
            trace!(x = sample.x, y = sample.y, "crosshair active");
            self.state = CrosshairState::Active;
        }

        let (w, h) = (self.layer.width(), self.layer.height());
        let line_height = self.layer.line_height();
        let stroke = self.theme.crosshair;

        self.layer.clear();
        self.layer.draw_line(Point::new(0.0, sample.y), Point::new(w, sample.y), &stroke);
        self.layer.draw_line(Point::new(sample.x, 0.0), Point::new(sample.x, h), &stroke);

        let price = self.scale.to_value(sample.y as f64);
        let price_text = formatter.format_price(price);
        let price_width = self.layer.measure_text(&price_text);
        let price_callout = callout_geometry(&price_text, price_width, line_height, Point::new(w, sample.y), w);
        self.draw_callout(&price_callout);

        let index = label_index(sample.x, w, self.labels.len());
        let time_callout = index.map(|i| {
            let text = &self.labels[i];
            let width = self.layer.measure_text(text);
            callout_geometry(text, width, line_height, Point::new(sample.x, h), w)
        });
        if let Some(c) = &time_callout {
            self.draw_callout(c);
        }

        trace!(x = sample.x, y = sample.y, price, label = ?index, "crosshair redrawn");
        CrosshairFrame { pointer: sample, price, price_callout, label_index: index, time_callout }
    }

    pub fn pointer_leave(&mut self) {
        if self.state == CrosshairState::Active {
            trace!("crosshair idle");
        }
        self.layer.clear();
        self.state = CrosshairState::Idle;
    }

    /// Keep `event` until the next [`CrosshairLayer::frame`], replacing any
    /// event already waiting.
    pub fn queue(&mut self, event: PointerEvent) {
        self.pending = Some(event);
    }

    /// Apply the latest queued event, if any. At most one redraw per call.
    pub fn frame(&mut self, formatter: &dyn LabelFormatter) -> Option<CrosshairFrame> {
        let event = self.pending.take()?;
        self.handle(event, formatter)
    }

    fn draw_callout(&mut self, c: &Callout) {
        self.layer.fill_rect(c.rect, self.theme.callout_fill);
        self.layer.fill_text(&c.text, c.text_origin, Some(c.text_width), self.theme.callout_text);
    }
}
