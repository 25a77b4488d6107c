//! Paint configuration shared by the SVG and raster contexts.

use serde::{Deserialize, Serialize};

/// Initial paint state for a context.
///
/// Colours are CSS colour strings (`"#ffcc00"`, `"rgb(0, 0, 0)"`,
/// `"steelblue"`). Missing fields take their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Used by `fill` and `fill_text`
    pub fill: String,
    /// Used by `stroke`
    pub stroke: String,
    /// Stroke width in surface units
    pub line_width: f64,
}

impl Default for Style {
    /// Canvas defaults: black fill and stroke, 1px lines.
    fn default() -> Self {
        Self {
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            line_width: 1.0,
        }
    }
}

impl Style {
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

/// Parse a CSS colour string.
///
/// Returns the parser's message on failure so each context can wrap it in
/// its own error type.
pub fn parse_color(value: &str) -> Result<svgtypes::Color, String> {
    value
        .parse::<svgtypes::Color>()
        .map_err(|e| format!("{:?}: {}", value, e))
}

/// `#rrggbb` form of a colour; alpha is reported separately.
pub fn color_to_hex(color: svgtypes::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        let c = parse_color("red").unwrap();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (255, 0, 0, 255));

        let c = parse_color("#336699").unwrap();
        assert_eq!(color_to_hex(c), "#336699");
    }

    #[test]
    fn rejects_garbage_color() {
        assert!(parse_color("not a colour").is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let style: Style = serde_json::from_str(r#"{ "fill": "orange" }"#).unwrap();
        assert_eq!(style.fill, "orange");
        assert_eq!(style.stroke, "#000000");
        assert_eq!(style.line_width, 1.0);
    }

    #[test]
    fn builder_overrides_fields() {
        let style = Style::default().with_stroke("white").with_line_width(2.5);
        assert_eq!(style.stroke, "white");
        assert_eq!(style.line_width, 2.5);
        assert_eq!(style.fill, "#000000");
    }
}
