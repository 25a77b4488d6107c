//! Raster output - a drawing context that paints into a tiny-skia pixmap.
//!
//! The pixmap belongs to the caller; the context only borrows it.
//!
//! ## Rust Lesson #24: Lifetimes on Structs
//!
//! `PixmapContext<'a>` holds a `PixmapMut<'a>`, a mutable borrow of the
//! caller's pixels. The `'a` tells the compiler the context cannot
//! outlive the pixmap, and while the context exists nobody else can touch
//! the pixmap. Drop the context (end its scope) to read the pixels back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tiny_skia::{FillRule, Paint, PathBuilder, PixmapMut, Stroke, Transform};
use usvg::fontdb;

use crate::context::{DrawingContext, Font, PathCommand, TextAlign, TextBaseline};
use crate::geometry::Point;
use crate::style::{Style, parse_color};
use crate::svg::TextElement;

/// Error type for the raster context.
#[derive(Debug)]
pub enum RasterError {
    InvalidColor(String),
    /// The text fragment could not be built or parsed
    Text(String),
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterError::InvalidColor(msg) => write!(f, "Invalid colour {}", msg),
            RasterError::Text(msg) => write!(f, "Text rendering error: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

/// Paint settings for [`PixmapContext`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Smooth edges. Turn off for exact, repeatable pixel coverage.
    pub anti_alias: bool,
    /// Initial fill/stroke state
    pub style: Style,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            anti_alias: true,
            style: Style::default(),
        }
    }
}

impl RasterOptions {
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Drawing context over a caller-owned pixmap.
pub struct PixmapContext<'a> {
    pixmap: PixmapMut<'a>,
    path: Vec<PathCommand>,
    fill: svgtypes::Color,
    stroke: svgtypes::Color,
    line_width: f64,
    anti_alias: bool,
    text_align: TextAlign,
    text_baseline: TextBaseline,
    font: Font,
    fontdb: Arc<fontdb::Database>,
}

impl<'a> PixmapContext<'a> {
    /// Wrap a pixmap. Text renders with no fonts until
    /// [`with_font_database`](Self::with_font_database) supplies some.
    pub fn new(pixmap: PixmapMut<'a>, options: &RasterOptions) -> Result<Self, RasterError> {
        let fill = parse_color(&options.style.fill).map_err(RasterError::InvalidColor)?;
        let stroke = parse_color(&options.style.stroke).map_err(RasterError::InvalidColor)?;

        Ok(Self {
            pixmap,
            path: Vec::new(),
            fill,
            stroke,
            line_width: options.style.line_width,
            anti_alias: options.anti_alias,
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            font: Font::default(),
            fontdb: Arc::new(fontdb::Database::new()),
        })
    }

    /// Use `fontdb` to resolve fonts for `fill_text`.
    pub fn with_font_database(mut self, fontdb: Arc<fontdb::Database>) -> Self {
        self.fontdb = fontdb;
        self
    }

    pub fn set_fill_style(&mut self, color: &str) -> Result<(), RasterError> {
        self.fill = parse_color(color).map_err(RasterError::InvalidColor)?;
        Ok(())
    }

    pub fn set_stroke_style(&mut self, color: &str) -> Result<(), RasterError> {
        self.stroke = parse_color(color).map_err(RasterError::InvalidColor)?;
        Ok(())
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    fn paint(&self, color: svgtypes::Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
        paint.anti_alias = self.anti_alias;
        paint
    }

    /// None for empty or degenerate paths.
    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for cmd in &self.path {
            match *cmd {
                PathCommand::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                PathCommand::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                PathCommand::ClosePath => builder.close(),
            }
        }
        builder.finish()
    }
}

impl DrawingContext for PixmapContext<'_> {
    type Error = RasterError;

    fn begin_path(&mut self) -> Result<(), RasterError> {
        self.path.clear();
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), RasterError> {
        self.path.push(PathCommand::MoveTo(Point::new(x, y)));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), RasterError> {
        // Without a current point, line_to starts the subpath
        let cmd = if self.path.is_empty() {
            PathCommand::MoveTo(Point::new(x, y))
        } else {
            PathCommand::LineTo(Point::new(x, y))
        };
        self.path.push(cmd);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), RasterError> {
        if !self.path.is_empty() {
            self.path.push(PathCommand::ClosePath);
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<(), RasterError> {
        let Some(path) = self.build_path() else {
            log::trace!("raster fill skipped: degenerate path");
            return Ok(());
        };
        let paint = self.paint(self.fill);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), RasterError> {
        let Some(path) = self.build_path() else {
            log::trace!("raster stroke skipped: degenerate path");
            return Ok(());
        };
        let paint = self.paint(self.stroke);
        let stroke = Stroke {
            width: self.line_width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), RasterError> {
        let element = TextElement {
            text,
            x,
            y,
            align: self.text_align,
            baseline: self.text_baseline,
            font: &self.font,
            fill: self.fill,
        };
        let document = element
            .to_document(self.pixmap.width(), self.pixmap.height())
            .map_err(|e| RasterError::Text(e.to_string()))?;
        log::trace!("raster fill_text via {}", document);

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&document, &options)
            .map_err(|e| RasterError::Text(e.to_string()))?;

        resvg::render(&tree, Transform::identity(), &mut self.pixmap);
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
