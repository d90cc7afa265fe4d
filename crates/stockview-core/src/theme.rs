// File: crates/stockview-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::layer::{Color, Stroke};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Painted under all layers when compositing.
    pub background: Color,
    /// Vertical line between the plot and the price labels.
    pub separator: Color,
    pub axis_label: Color,
    pub crosshair: Stroke,
    pub callout_fill: Color,
    pub callout_text: Color,
    pub candle_up: Color,
    pub candle_down: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            separator: Color::rgb(0xd3, 0xd3, 0xd3),
            axis_label: Color::BLACK,
            crosshair: Stroke::dashed(Color::BLACK, 0.2, 5.0, 5.0),
            callout_fill: Color::BLACK,
            callout_text: Color::WHITE,
            candle_up: Color::rgb(0, 128, 0),   // css green
            candle_down: Color::rgb(255, 0, 0), // css red
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            separator: Color::rgb(40, 40, 45),
            axis_label: Color::rgb(235, 235, 245),
            crosshair: Stroke::dashed(Color::rgb(255, 230, 70), 0.5, 5.0, 5.0),
            callout_fill: Color::rgb(180, 180, 190),
            callout_text: Color::rgb(18, 18, 20),
            candle_up: Color::rgb(40, 200, 120),
            candle_down: Color::rgb(220, 80, 80),
        }
    }

    pub fn candle(&self, positive: bool) -> Color {
        if positive { self.candle_up } else { self.candle_down }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
