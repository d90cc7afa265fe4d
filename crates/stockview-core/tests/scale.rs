// File: crates/stockview-core/tests/scale.rs
// Purpose: Value range padding and the forward/inverse price scale.

use proptest::prelude::*;
use stockview_core::{ConfigurationError, ScaleMapper, ValueRange};

#[test]
fn padding_adds_a_fifth_of_the_span_each_side() {
    let r = ValueRange::padded(8.0, 13.0, 0.2).expect("valid range");
    assert!((r.high - 14.0).abs() < 1e-12, "padded high {}", r.high);
    assert!((r.low - 7.0).abs() < 1e-12, "padded low {}", r.low);
}

#[test]
fn flat_summary_is_rejected() {
    let err = ValueRange::padded(10.0, 10.0, 0.2).unwrap_err();
    assert_eq!(err, ConfigurationError::InvalidRange { low: 10.0, high: 10.0 });
    assert!(ValueRange::new(f64::NAN, 1.0).is_err());
}

#[test]
fn larger_values_sit_higher_on_screen() {
    let s = ScaleMapper::new(ValueRange::new(7.0, 14.0).unwrap(), 300.0);
    assert_eq!(s.to_pixel(14.0), 0.0);
    assert_eq!(s.to_pixel(7.0), 300.0);
    // 300 * (14 - 13.5) / 7
    assert!((s.to_pixel(13.5) - 21.428_571_428).abs() < 1e-6);
    assert!(s.to_pixel(12.0) < s.to_pixel(9.0));
}

#[test]
fn zero_extent_inverts_to_the_top() {
    let s = ScaleMapper::new(ValueRange::new(0.0, 1.0).unwrap(), 0.0);
    assert_eq!(s.to_value(5.0), 1.0);
}

proptest! {
    #[test]
    fn pixel_round_trip_recovers_the_value(
        low in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        t in 0.0f64..=1.0,
        extent in 1.0f64..4096.0,
    ) {
        let range = ValueRange::new(low, low + span).unwrap();
        let s = ScaleMapper::new(range, extent);
        let v = low + t * span;
        let back = s.to_value(s.to_pixel(v));
        let tol = 1e-9 * v.abs().max(span).max(1.0);
        prop_assert!((back - v).abs() <= tol, "v={v} back={back}");
    }
}
