//! The drawing-context capability the hex functions draw through.
//!
//! ## Rust Lesson #8: Traits with Associated Types
//!
//! A trait is an interface: any type can implement it. An *associated
//! type* (`type Error;`) lets each implementor choose its own error type,
//! so an in-memory recorder can say "I never fail" (`Infallible`) while an
//! SVG writer can report I/O errors. Callers write `Result<(), C::Error>`
//! and the `?` operator forwards whatever the context reports.

use std::fmt;

use crate::geometry::Point;

/// Horizontal text alignment, relative to the `x` passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

/// Vertical text anchoring, relative to the `y` passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Font descriptor: pixel size plus family.
///
/// Displays in CSS shorthand, e.g. `12px sans-serif`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: String,
}

/// One step of path construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
}

/// A 2D drawing surface with canvas-style path and text primitives.
///
/// Property setters cannot fail. Drawing operations report failures with
/// the implementor's own error type.
pub trait DrawingContext {
    type Error;

    /// Discard the current path and start a new one.
    fn begin_path(&mut self) -> Result<(), Self::Error>;

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Close the current subpath back to its starting point.
    fn close_path(&mut self) -> Result<(), Self::Error>;

    /// Fill the current path with the current fill style.
    fn fill(&mut self) -> Result<(), Self::Error>;

    /// Stroke the current path with the current stroke style and line width.
    fn stroke(&mut self) -> Result<(), Self::Error>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;

    fn set_text_align(&mut self, align: TextAlign);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn set_font(&mut self, font: Font);
}

impl TextAlign {
    /// SVG `text-anchor` value for this alignment (left-to-right text).
    pub fn svg_anchor(self) -> &'static str {
        match self {
            TextAlign::Start | TextAlign::Left => "start",
            TextAlign::End | TextAlign::Right => "end",
            TextAlign::Center => "middle",
        }
    }
}

impl TextBaseline {
    /// SVG `dominant-baseline` value for this baseline.
    pub fn svg_dominant_baseline(self) -> &'static str {
        match self {
            TextBaseline::Top => "text-before-edge",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Middle => "central",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Ideographic => "ideographic",
            TextBaseline::Bottom => "text-after-edge",
        }
    }
}

impl Font {
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self { size_px, family: family.into() }
    }

    pub fn sans_serif(size_px: f64) -> Self {
        Self::new(size_px, "sans-serif")
    }
}

impl Default for Font {
    /// The canvas default, `10px sans-serif`.
    fn default() -> Self {
        Self::sans_serif(10.0)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

impl PathCommand {
    /// The point this command moves to, if any.
    pub fn point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ClosePath => None,
        }
    }
}
