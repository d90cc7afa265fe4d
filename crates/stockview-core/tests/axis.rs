// File: crates/stockview-core/tests/axis.rs
// Purpose: Price axis tick placement and time axis label thinning.

mod common;

use common::{Op, RecordingLayer, CHAR_WIDTH, LINE_HEIGHT};
use proptest::prelude::*;
use stockview_core::{
    layout_x_axis, layout_y_axis, ConfigurationError, PlotRect, PtBrFormatter, Theme, ValueRange, XAxisLayer,
    YAxisLayer,
};

fn labels(n: usize, chars: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i:0>chars$}")).collect()
}

#[test]
fn price_axis_skips_the_top_tick() {
    let range = ValueRange::new(7.0, 14.0).unwrap();
    let layout = layout_y_axis(PlotRect::new(600, 400), range, 30.0, LINE_HEIGHT, |v| format!("{v:.3}"));

    // 400 / (12 * 4) = 8.33 -> 8 divisions, 7 labels
    assert_eq!(layout.tick_count, 8);
    assert_eq!(layout.ticks.len(), 7);
    assert_eq!(layout.separator_x, 568.0);
    assert_eq!(layout.consumed_width(), 30.0);

    let first = &layout.ticks[0];
    assert_eq!(first.position, 48.0);
    assert!((first.value - 13.125).abs() < 1e-12);
    assert_eq!(first.label, "13.125");
    assert!(layout.ticks.iter().all(|t| t.value < range.high));
}

#[test]
fn short_plot_has_no_price_ticks() {
    let range = ValueRange::new(0.0, 1.0).unwrap();
    let layout = layout_y_axis(PlotRect::new(100, 40), range, 20.0, LINE_HEIGHT, |v| v.to_string());
    assert_eq!(layout.tick_count, 0);
    assert!(layout.ticks.is_empty());
}

#[test]
fn price_layer_draws_separator_and_labels() {
    let mut axis = YAxisLayer::new(RecordingLayer::new(600, 400));
    let theme = Theme::light();
    let layout = axis.render(PlotRect::new(600, 400), ValueRange::new(7.0, 14.0).unwrap(), &PtBrFormatter::default(), &theme);

    // "14,00" is the reference label
    assert_eq!(layout.label_width, 5.0 * CHAR_WIDTH);
    let lines = axis.layer().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 600.0 - 30.0 - 2.0);
    assert_eq!(lines[0].2.color, theme.separator);

    let texts = axis.layer().texts();
    assert_eq!(texts.len(), layout.tick_count - 1);
    assert_eq!(texts[0], "13,13");
    assert!(!texts.contains(&"14,00"));
    match &axis.layer().ops[1] {
        Op::Text { origin, max_width, .. } => {
            assert_eq!(origin.x, 572.0);
            assert_eq!(*max_width, Some(30.0));
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn time_labels_are_thinned_greedily() {
    // 14-char labels -> slot ceil(84 * 1.2) = 101; columns 57px wide
    let layout = layout_x_axis(PlotRect::new(570, 400), &labels(10, 14), 84.0, LINE_HEIGHT).unwrap();
    assert_eq!(layout.slot_width, 101.0);
    assert!((layout.column_width - 57.0).abs() < 1e-6);
    assert_eq!(layout.consumed_height(), LINE_HEIGHT);
    assert_eq!(layout.baseline, 400.0 - LINE_HEIGHT);

    let placed: Vec<usize> = layout.placed.iter().map(|p| p.index).collect();
    assert_eq!(placed, vec![1, 2, 4, 6, 8]);
    let slots: Vec<usize> = layout.placed.iter().map(|p| p.slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    assert!((layout.placed[0].x - 10.1).abs() < 1e-4);
}

#[test]
fn time_axis_requires_labels() {
    let err = layout_x_axis(PlotRect::new(570, 400), &[], 84.0, LINE_HEIGHT).unwrap_err();
    assert_eq!(err, ConfigurationError::EmptyLabels);

    let mut axis = XAxisLayer::new(RecordingLayer::new(570, 400));
    let err = axis.render(PlotRect::new(570, 400), &[], &Theme::light()).unwrap_err();
    assert_eq!(err.configuration(), Some(&ConfigurationError::EmptyLabels));
    assert!(axis.layer().ops.is_empty());
}

#[test]
fn time_layer_draws_placed_labels_on_the_baseline() {
    let mut axis = XAxisLayer::new(RecordingLayer::new(570, 400));
    let all = labels(10, 14);
    let layout = axis.render(PlotRect::new(570, 400), &all, &Theme::light()).unwrap();
    let texts = axis.layer().texts();
    assert_eq!(texts.len(), layout.placed.len());
    assert_eq!(texts[0], all[1]);
    for op in &axis.layer().ops {
        if let Op::Text { origin, max_width, .. } = op {
            assert_eq!(origin.y, 388.0);
            assert_eq!(*max_width, Some(layout.slot_width));
        }
    }
}

proptest! {
    #[test]
    fn placed_time_labels_never_overlap_or_overflow(
        width in 1u32..2000,
        count in 1usize..300,
        label_width in 1.0f32..200.0,
    ) {
        let layout = layout_x_axis(PlotRect::new(width, 300), &labels(count, 3), label_width, LINE_HEIGHT).unwrap();
        let slot = layout.slot_width;
        for p in &layout.placed {
            prop_assert!(p.x + slot < width as f32);
        }
        for pair in layout.placed.windows(2) {
            prop_assert!(pair[1].x >= pair[0].x + slot - 1e-3, "{:?}", pair);
            prop_assert!(pair[1].index > pair[0].index);
        }
    }

    #[test]
    fn price_labels_are_one_fewer_than_divisions(height in 48u32..4000) {
        let range = ValueRange::new(1.0, 2.0).unwrap();
        let layout = layout_y_axis(PlotRect::new(500, height), range, 10.0, LINE_HEIGHT, |v| v.to_string());
        prop_assert!(layout.tick_count >= 1);
        prop_assert_eq!(layout.ticks.len(), layout.tick_count - 1);
    }
}
