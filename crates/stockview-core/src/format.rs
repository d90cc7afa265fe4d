// File: crates/stockview-core/src/format.rs
// Summary: Axis label formatting (prices and bar datetimes).

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Turns axis values into label text.
pub trait LabelFormatter {
    fn format_price(&self, value: f64) -> String;
    fn format_datetime(&self, epoch_millis: i64) -> String;
}

/// Brazilian Portuguese conventions: `1.234,56` and `d/m/yy HH:MM`.
///
/// Months are 1-based: November prints as `/11/`, not the zero-based `/10/`
/// a JavaScript `getMonth` label would show.
#[derive(Clone, Copy, Debug)]
pub struct PtBrFormatter {
    pub offset: FixedOffset,
}

impl PtBrFormatter {
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for PtBrFormatter {
    fn default() -> Self {
        Self { offset: Utc.fix() }
    }
}

impl LabelFormatter for PtBrFormatter {
    fn format_price(&self, value: f64) -> String {
        if !value.is_finite() {
            return "--".to_string();
        }
        let cents = (value.abs() * 100.0).round() as u64;
        let (int, frac) = (cents / 100, cents % 100);

        let digits = int.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
        format!("{sign}{grouped},{frac:02}")
    }

    fn format_datetime(&self, epoch_millis: i64) -> String {
        match DateTime::from_timestamp_millis(epoch_millis) {
            Some(dt) => dt.with_timezone(&self.offset).format("%-d/%-m/%y %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}
