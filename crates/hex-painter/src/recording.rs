//! A drawing context that only remembers what it was asked to do.
//!
//! Useful for tests and for inspecting the exact path a hex function
//! produces without any rendering backend.

use std::convert::Infallible;

use crate::context::{DrawingContext, Font, PathCommand, TextAlign, TextBaseline};
use crate::geometry::Point;

/// One recorded context call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginPath,
    Path(PathCommand),
    Fill,
    Stroke,
    /// Text together with the text state in effect when it was drawn.
    FillText {
        text: String,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        font: Font,
    },
}

/// Records every call as a [`Command`].
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    commands: Vec<Command>,
    path: Vec<PathCommand>,
    text_align: TextAlign,
    text_baseline: TextBaseline,
    font: Font,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Points of the current path, in the order they were added.
    pub fn path_points(&self) -> Vec<Point> {
        self.path.iter().filter_map(PathCommand::point).collect()
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn text_baseline(&self) -> TextBaseline {
        self.text_baseline
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Forget recorded commands and the current path. Text state is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.path.clear();
    }

    fn push_path(&mut self, cmd: PathCommand) {
        self.path.push(cmd);
        self.commands.push(Command::Path(cmd));
    }
}

impl DrawingContext for RecordingContext {
    type Error = Infallible;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.path.clear();
        self.commands.push(Command::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error> {
        self.push_path(PathCommand::MoveTo(Point::new(x, y)));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error> {
        self.push_path(PathCommand::LineTo(Point::new(x, y)));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        self.push_path(PathCommand::ClosePath);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Self::Error> {
        self.commands.push(Command::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.commands.push(Command::Stroke);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        self.commands.push(Command::FillText {
            text: text.to_string(),
            at: Point::new(x, y),
            align: self.text_align,
            baseline: self.text_baseline,
            font: self.font.clone(),
        });
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
