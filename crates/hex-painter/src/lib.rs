//! # hex-painter
//!
//! Pointy-top hexagon drawing (path, fill, stroke, label) over any
//! canvas-like drawing context, plus the adjacency test for the axial
//! hex layout.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! You must explicitly declare every module.

pub mod context;
pub mod geometry;
pub mod hex;
pub mod raster;
pub mod recording;
pub mod style;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use context::{DrawingContext, Font, PathCommand, TextAlign, TextBaseline};
pub use geometry::{HexCoord, Point, signed_area_of_points};
pub use hex::{
    are_adjacent, build_hex_path, draw_hex_label, fill_hex, hex_vertices, label_font_size,
    stroke_hex, Label,
};
pub use raster::{PixmapContext, RasterError, RasterOptions};
pub use recording::{Command, RecordingContext};
pub use style::Style;
pub use svg::{SvgContext, SvgError, SvgOptions};
