// File: crates/stockview-core/src/options.rs
// Summary: Chart configuration: typed options with defaults, and the string-typed option bag they parse from.

use serde::Deserialize;

use crate::error::{ChartError, ConfigurationError};
use crate::layer::Color;
use crate::theme::{self, Theme};
use crate::types::{LayerOrder, AXIS_FONT_SIZE, CANDLE_GAP_FRACTION, HEIGHT, RANGE_PADDING, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Container outline, parsed from CSS shorthand such as `1px solid #c3c3c3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub const NONE: Border = Border { width: 0.0, style: BorderStyle::None, color: Color::TRANSPARENT };

    pub fn parse(s: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidOption { name: "border", value: s.to_string() };
        let mut border = Border { width: 1.0, style: BorderStyle::None, color: Color::BLACK };
        for token in s.split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "none" => return Ok(Self::NONE),
                "solid" => border.style = BorderStyle::Solid,
                "dashed" => border.style = BorderStyle::Dashed,
                "dotted" => border.style = BorderStyle::Dotted,
                t if t.starts_with('#') => border.color = Color::from_hex(t).ok_or_else(invalid)?,
                t => border.width = parse_length(t).ok_or_else(invalid)?,
            }
        }
        if border.style == BorderStyle::None {
            return Err(invalid());
        }
        Ok(border)
    }

    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.width > 0.0
    }
}

impl Default for Border {
    fn default() -> Self {
        Self { width: 1.0, style: BorderStyle::Solid, color: Color::rgb(0xc3, 0xc3, 0xc3) }
    }
}

fn parse_length(s: &str) -> Option<f32> {
    let v: f32 = s.trim().strip_suffix("px").unwrap_or(s.trim()).parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Parse a pixel size such as `600px` (the unit is optional).
pub fn parse_px(name: &'static str, s: &str) -> Result<u32, ConfigurationError> {
    match parse_length(s) {
        Some(v) if v >= 1.0 => Ok(v as u32),
        _ => Err(ConfigurationError::InvalidOption { name, value: s.to_string() }),
    }
}

/// Everything a chart needs besides its data and container.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub border: Border,
    /// Fraction of each column left empty around the candle body.
    pub offset_width: f64,
    /// Fraction of the summary span added above and below the price range.
    pub padding: f64,
    pub font_size: f32,
    pub show_crosshair: bool,
    pub theme: Theme,
    pub layers: LayerOrder,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            border: Border::default(),
            offset_width: CANDLE_GAP_FRACTION,
            padding: RANGE_PADDING,
            font_size: AXIS_FONT_SIZE,
            show_crosshair: true,
            theme: Theme::light(),
            layers: LayerOrder::default(),
        }
    }
}

/// Options as an embedding page supplies them; every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    pub width: Option<String>,
    pub height: Option<String>,
    pub border: Option<String>,
    pub offset_width: Option<f64>,
    pub theme: Option<String>,
    pub show_crosshair: Option<bool>,
}

impl ChartOptions {
    pub fn from_raw(raw: &RawOptions) -> Result<Self, ConfigurationError> {
        let mut opts = Self::default();
        if let Some(w) = &raw.width {
            opts.width = parse_px("width", w)?;
        }
        if let Some(h) = &raw.height {
            opts.height = parse_px("height", h)?;
        }
        if let Some(b) = &raw.border {
            opts.border = Border::parse(b)?;
        }
        if let Some(gap) = raw.offset_width {
            if !(0.0..1.0).contains(&gap) {
                return Err(ConfigurationError::InvalidOption { name: "offsetWidth", value: gap.to_string() });
            }
            opts.offset_width = gap;
        }
        if let Some(name) = &raw.theme {
            opts.theme = theme::find(name);
        }
        if let Some(show) = raw.show_crosshair {
            opts.show_crosshair = show;
        }
        Ok(opts)
    }

    pub fn from_json(s: &str) -> Result<Self, ChartError> {
        let raw: RawOptions = serde_json::from_str(s)?;
        Ok(Self::from_raw(&raw)?)
    }
}
