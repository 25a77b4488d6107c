//! Hexagon drawing and adjacency.
//!
//! Hexagons are pointy-top: vertex 0 sits straight above the center and
//! the rest follow clockwise on screen (y grows downward).
//!
//! ```
//! use hex_painter::{fill_hex, draw_hex_label, Point, RecordingContext};
//!
//! fn main() -> Result<(), std::convert::Infallible> {
//!     let mut ctx = RecordingContext::new();
//!     fill_hex(&mut ctx, Point::new(50.0, 50.0), 20.0)?;
//!     draw_hex_label(&mut ctx, Point::new(50.0, 50.0), 0, 20.0)?; // draws "S"
//!     Ok(())
//! }
//! ```

use std::borrow::Cow;
use std::f64::consts::PI;
use std::fmt;

use crate::context::{DrawingContext, Font, TextAlign, TextBaseline};
use crate::geometry::{HexCoord, Point};

/// Angle between consecutive vertices.
const VERTEX_STEP: f64 = PI * 2.0 / 6.0;
/// Rotation of vertex 0: straight up.
const VERTEX_OFFSET: f64 = -PI / 2.0;

/// Radius at and above which labels use [`LABEL_MAX_FONT_PX`].
pub const LABEL_FULL_SIZE_RADIUS: f64 = 17.0;
pub const LABEL_MAX_FONT_PX: f64 = 20.0;
/// Font size per unit of radius for hexes smaller than [`LABEL_FULL_SIZE_RADIUS`].
pub const LABEL_FONT_SCALE: f64 = 1.2;
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
/// Drawn in place of a zero label.
pub const START_MARKER: &str = "S";

/// Something to write inside a hex: a number or a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Label<'a> {
    Number(i64),
    Text(&'a str),
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl<'a> Label<'a> {
    /// The text actually drawn: zero becomes the start marker.
    pub fn display_text(&self) -> Cow<'a, str> {
        if self.is_zero() {
            return Cow::Borrowed(START_MARKER);
        }
        match *self {
            Label::Number(n) => Cow::Owned(n.to_string()),
            Label::Text(s) => Cow::Borrowed(s),
        }
    }

    /// True for the number zero and for text that reads as zero (`"0"`,
    /// `" 0.0 "`, `"-0"`). Blank text is not zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Label::Number(n) => n == 0,
            Label::Text(s) => {
                let trimmed = s.trim();
                !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(|v| v == 0.0)
            }
        }
    }
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Label<'_> {
    fn from(n: i64) -> Self {
        Label::Number(n)
    }
}

impl From<i32> for Label<'_> {
    fn from(n: i32) -> Self {
        Label::Number(n.into())
    }
}

impl From<u32> for Label<'_> {
    fn from(n: u32) -> Self {
        Label::Number(n.into())
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(s: &'a str) -> Self {
        Label::Text(s)
    }
}

impl<'a> From<&'a String> for Label<'a> {
    fn from(s: &'a String) -> Self {
        Label::Text(s.as_str())
    }
}

// ============================================================================
// PATH CONSTRUCTION
// ============================================================================

/// The six vertices of a pointy-top hexagon, clockwise from the top.
pub fn hex_vertices(center: Point, radius: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = VERTEX_STEP * i as f64 + VERTEX_OFFSET;
        Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        )
    })
}

/// Add a closed hexagon to the context's current path.
///
/// Does not begin a new path and does not fill or stroke.
pub fn build_hex_path<C>(ctx: &mut C, center: Point, radius: f64) -> Result<(), C::Error>
where
    C: DrawingContext + ?Sized,
{
    let [first, rest @ ..] = hex_vertices(center, radius);
    ctx.move_to(first.x, first.y)?;
    for v in rest {
        ctx.line_to(v.x, v.y)?;
    }
    ctx.close_path()
}

/// Begin a new path, trace the hexagon and fill it.
pub fn fill_hex<C>(ctx: &mut C, center: Point, radius: f64) -> Result<(), C::Error>
where
    C: DrawingContext + ?Sized,
{
    ctx.begin_path()?;
    build_hex_path(ctx, center, radius)?;
    ctx.fill()
}

/// Begin a new path, trace the hexagon and stroke it.
pub fn stroke_hex<C>(ctx: &mut C, center: Point, radius: f64) -> Result<(), C::Error>
where
    C: DrawingContext + ?Sized,
{
    ctx.begin_path()?;
    build_hex_path(ctx, center, radius)?;
    ctx.stroke()
}

// ============================================================================
// LABELS
// ============================================================================

/// Font size for a label inside a hex of the given radius.
pub fn label_font_size(radius: f64) -> f64 {
    if radius < LABEL_FULL_SIZE_RADIUS {
        radius * LABEL_FONT_SCALE
    } else {
        LABEL_MAX_FONT_PX
    }
}

/// Write `label` centered in the hex at `center`.
///
/// Leaves the context's text align, baseline and font changed. Save and
/// restore around the call if that matters to the caller.
pub fn draw_hex_label<'a, C>(
    ctx: &mut C,
    center: Point,
    label: impl Into<Label<'a>>,
    radius: f64,
) -> Result<(), C::Error>
where
    C: DrawingContext + ?Sized,
{
    let label = label.into();
    let font = Font::new(label_font_size(radius), LABEL_FONT_FAMILY);
    log::debug!("label {} at ({}, {}) with font {}", label, center.x, center.y, font);

    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.set_font(font);

    ctx.fill_text(&label.display_text(), center.x, center.y)
}

// ============================================================================
// ADJACENCY
// ============================================================================

/// Whether two cells are neighbors in the axial layout.
///
/// Accepts `(±1, 0)`, `(0, ±1)`, `(+1, -1)` and `(-1, +1)` offsets only.
/// The `(+1, +1)` and `(-1, -1)` diagonals are not neighbors in this
/// layout, and a cell is not its own neighbor.
pub fn are_adjacent(a: HexCoord, b: HexCoord) -> bool {
    // Widened so far-apart cells cannot overflow
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);

    if dy == 0 {
        return dx.abs() == 1;
    }
    if dx == 0 {
        return dy.abs() == 1;
    }
    matches!((dx, dy), (1, -1) | (-1, 1))
}
