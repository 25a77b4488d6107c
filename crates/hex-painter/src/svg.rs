//! SVG output - a drawing context that writes an SVG document.
//!
//! Every `fill` or `stroke` becomes one `<path>` element and every
//! `fill_text` one `<text>` element, written through quick-xml so text
//! content and attribute values are escaped.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};

use crate::context::{DrawingContext, Font, TextAlign, TextBaseline};
use crate::style::{Style, color_to_hex, parse_color};

/// Error type for the SVG context.
///
/// ## Rust Lesson #20: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions. Wrapping the library
/// errors we can hit in one enum lets callers `?` a single type, and the
/// `From` impl below is what makes `?` convert an `io::Error` for us.
#[derive(Debug)]
pub enum SvgError {
    Io(std::io::Error),
    InvalidColor(String),
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::Io(e) => write!(f, "SVG write error: {}", e),
            SvgError::InvalidColor(msg) => write!(f, "Invalid colour {}", msg),
        }
    }
}

impl std::error::Error for SvgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SvgError::Io(e) => Some(e),
            SvgError::InvalidColor(_) => None,
        }
    }
}

impl From<std::io::Error> for SvgError {
    fn from(e: std::io::Error) -> Self {
        SvgError::Io(e)
    }
}

/// Document settings for [`SvgContext`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Document width (also the viewBox width)
    pub width: f64,
    /// Document height (also the viewBox height)
    pub height: f64,
    /// Decimal places kept for coordinates
    pub precision: usize,
    /// Optional colour painted over the whole document first
    pub background: Option<String>,
    /// Initial fill/stroke state
    pub style: Style,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            precision: 2,
            background: None,
            style: Style::default(),
        }
    }
}

impl SvgOptions {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Drawing context that streams SVG elements into `W`.
///
/// Call [`finish`](SvgContext::finish) to close the document and get the
/// writer back.
pub struct SvgContext<W: Write> {
    writer: Writer<W>,
    precision: usize,
    /// Current path as SVG path data
    path: String,
    has_current_point: bool,
    fill: svgtypes::Color,
    stroke: svgtypes::Color,
    line_width: f64,
    text_align: TextAlign,
    text_baseline: TextBaseline,
    font: Font,
}

impl<W: Write> SvgContext<W> {
    /// Start a document: writes the XML declaration, the `<svg>` root and
    /// the background, if any.
    pub fn new(inner: W, options: &SvgOptions) -> Result<Self, SvgError> {
        let fill = parse_color(&options.style.fill).map_err(SvgError::InvalidColor)?;
        let stroke = parse_color(&options.style.stroke).map_err(SvgError::InvalidColor)?;
        let background = options
            .background
            .as_deref()
            .map(parse_color)
            .transpose()
            .map_err(SvgError::InvalidColor)?;

        let mut writer = Writer::new_with_indent(inner, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let width = format_number(options.width, options.precision);
        let height = format_number(options.height, options.precision);
        let view_box = format!("0 0 {} {}", width, height);
        let root = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("viewBox", view_box.as_str()),
        ]);
        writer.write_event(Event::Start(root))?;

        if let Some(color) = background {
            let hex = color_to_hex(color);
            let mut rect = writer.create_element("rect").with_attributes([
                ("width", "100%"),
                ("height", "100%"),
                ("fill", hex.as_str()),
            ]);
            let opacity = opacity_of(color);
            if let Some(opacity) = &opacity {
                rect = rect.with_attribute(("fill-opacity", opacity.as_str()));
            }
            rect.write_empty()?;
        }

        Ok(Self {
            writer,
            precision: options.precision,
            path: String::new(),
            has_current_point: false,
            fill,
            stroke,
            line_width: options.style.line_width,
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            font: Font::default(),
        })
    }

    pub fn set_fill_style(&mut self, color: &str) -> Result<(), SvgError> {
        self.fill = parse_color(color).map_err(SvgError::InvalidColor)?;
        Ok(())
    }

    pub fn set_stroke_style(&mut self, color: &str) -> Result<(), SvgError> {
        self.stroke = parse_color(color).map_err(SvgError::InvalidColor)?;
        Ok(())
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    /// Close the `<svg>` root and hand back the writer.
    pub fn finish(mut self) -> Result<W, SvgError> {
        self.writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(self.writer.into_inner())
    }

    fn push_segment(&mut self, command: char, x: f64, y: f64) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(command);
        self.path.push_str(&format_number(x, self.precision));
        self.path.push(',');
        self.path.push_str(&format_number(y, self.precision));
        self.has_current_point = true;
    }
}

impl<W: Write> DrawingContext for SvgContext<W> {
    type Error = SvgError;

    fn begin_path(&mut self) -> Result<(), SvgError> {
        self.path.clear();
        self.has_current_point = false;
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SvgError> {
        log::trace!("svg move_to ({}, {})", x, y);
        self.push_segment('M', x, y);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SvgError> {
        log::trace!("svg line_to ({}, {})", x, y);
        // Without a current point, line_to starts the subpath
        let command = if self.has_current_point { 'L' } else { 'M' };
        self.push_segment(command, x, y);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SvgError> {
        if self.has_current_point {
            self.path.push_str(" Z");
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SvgError> {
        if self.path.is_empty() {
            return Ok(());
        }
        log::trace!("svg fill {}", self.path);

        let fill = color_to_hex(self.fill);
        let mut element = self.writer.create_element("path").with_attributes([
            ("d", self.path.as_str()),
            ("fill", fill.as_str()),
        ]);
        let opacity = opacity_of(self.fill);
        if let Some(opacity) = &opacity {
            element = element.with_attribute(("fill-opacity", opacity.as_str()));
        }
        element.with_attribute(("stroke", "none")).write_empty()?;
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SvgError> {
        if self.path.is_empty() {
            return Ok(());
        }
        log::trace!("svg stroke {}", self.path);

        let stroke = color_to_hex(self.stroke);
        let width = format_number(self.line_width, self.precision);
        let mut element = self.writer.create_element("path").with_attributes([
            ("d", self.path.as_str()),
            ("fill", "none"),
            ("stroke", stroke.as_str()),
            ("stroke-width", width.as_str()),
        ]);
        let opacity = opacity_of(self.stroke);
        if let Some(opacity) = &opacity {
            element = element.with_attribute(("stroke-opacity", opacity.as_str()));
        }
        element.write_empty()?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SvgError> {
        log::trace!("svg fill_text {:?} at ({}, {})", text, x, y);
        let element = TextElement {
            text,
            x,
            y,
            align: self.text_align,
            baseline: self.text_baseline,
            font: &self.font,
            fill: self.fill,
        };
        element.write(&mut self.writer, self.precision)?;
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.text_baseline = baseline;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// A `<text>` element with the canvas text state mapped onto SVG attributes.
pub(crate) struct TextElement<'a> {
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub font: &'a Font,
    pub fill: svgtypes::Color,
}

impl TextElement<'_> {
    pub(crate) fn write<W: Write>(&self, writer: &mut Writer<W>, precision: usize) -> std::io::Result<()> {
        let x = format_number(self.x, precision);
        let y = format_number(self.y, precision);
        let size = format_number(self.font.size_px, precision);
        let fill = color_to_hex(self.fill);

        let mut element = writer.create_element("text").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("font-size", size.as_str()),
            ("font-family", self.font.family.as_str()),
            ("text-anchor", self.align.svg_anchor()),
            ("dominant-baseline", self.baseline.svg_dominant_baseline()),
            ("fill", fill.as_str()),
        ]);
        let opacity = opacity_of(self.fill);
        if let Some(opacity) = &opacity {
            element = element.with_attribute(("fill-opacity", opacity.as_str()));
        }
        element.write_text_content(BytesText::new(self.text))?;
        Ok(())
    }

    /// A standalone document holding just this element.
    pub(crate) fn to_document(&self, width: u32, height: u32) -> std::io::Result<String> {
        let mut writer = Writer::new(Vec::new());
        let width = width.to_string();
        let height = height.to_string();
        let root = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", width.as_str()),
            ("height", height.as_str()),
        ]);
        writer.write_event(Event::Start(root))?;
        self.write(&mut writer, 3)?;
        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }
}

/// Fixed-precision number with trailing zeros dropped (`50.00` -> `50`).
pub(crate) fn format_number(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn opacity_of(color: svgtypes::Color) -> Option<String> {
    (color.alpha < u8::MAX).then(|| format_number(color.alpha as f64 / 255.0, 3))
}

// ============================================================================
// TESTS
// ============================================================================
