//! Integration tests for hex-painter's public surface.
//!
//! These drive the hex functions through the recording and SVG contexts
//! and check the geometric properties end-to-end.

use std::f64::consts::PI;

use hex_painter::{
    Command, DrawingContext, Font, HexCoord, PathCommand, Point, RecordingContext, SvgContext,
    SvgOptions, TextAlign, TextBaseline, are_adjacent, build_hex_path, draw_hex_label, fill_hex,
    hex_vertices, signed_area_of_points, stroke_hex,
};

const EPS: f64 = 1e-9;

/// A context that fails after a fixed number of path operations.
struct FailingContext {
    remaining: usize,
}

#[derive(Debug, PartialEq)]
struct OutOfInk;

impl FailingContext {
    fn spend(&mut self) -> Result<(), OutOfInk> {
        if self.remaining == 0 {
            return Err(OutOfInk);
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl DrawingContext for FailingContext {
    type Error = OutOfInk;

    fn begin_path(&mut self) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn move_to(&mut self, _x: f64, _y: f64) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn line_to(&mut self, _x: f64, _y: f64) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn close_path(&mut self) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn fill(&mut self) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn stroke(&mut self) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) -> Result<(), OutOfInk> {
        self.spend()
    }
    fn set_text_align(&mut self, _align: TextAlign) {}
    fn set_text_baseline(&mut self, _baseline: TextBaseline) {}
    fn set_font(&mut self, _font: Font) {}
}

#[test]
fn path_vertices_match_hex_vertices_for_many_inputs() {
    let centers = [Point::new(0.0, 0.0), Point::new(123.4, -56.7), Point::new(-1e3, 2e3)];
    let radii = [0.0, 0.5, 17.0, 250.0];

    for center in centers {
        for radius in radii {
            let mut ctx = RecordingContext::new();
            build_hex_path(&mut ctx, center, radius).unwrap();

            let points = ctx.path_points();
            assert_eq!(points.len(), 6);
            assert_eq!(points, hex_vertices(center, radius).to_vec());

            for p in &points {
                assert!((p.distance(center) - radius).abs() < 1e-6);
            }
            assert!((points[0].x - center.x).abs() < EPS);
            assert!((points[0].y - (center.y - radius)).abs() < EPS);
        }
    }
}

#[test]
fn hexagon_area_matches_regular_hexagon() {
    let radius = 10.0;
    let area = signed_area_of_points(&hex_vertices(Point::new(5.0, 5.0), radius));
    let expected = 3.0 * 3.0_f64.sqrt() / 2.0 * radius * radius;
    assert!((area - expected).abs() < 1e-9, "area {} != {}", area, expected);
}

#[test]
fn consecutive_vertices_are_sixty_degrees_apart() {
    let center = Point::new(0.0, 0.0);
    let v = hex_vertices(center, 1.0);
    for i in 0..6 {
        let a = v[i].y.atan2(v[i].x);
        let b = v[(i + 1) % 6].y.atan2(v[(i + 1) % 6].x);
        let mut delta = b - a;
        if delta < 0.0 {
            delta += 2.0 * PI;
        }
        assert!((delta - PI / 3.0).abs() < 1e-9, "step {} was {} rad", i, delta);
    }
}

#[test]
fn label_font_follows_radius() {
    let mut ctx = RecordingContext::new();
    draw_hex_label(&mut ctx, Point::new(0.0, 0.0), 5, 10.0).unwrap();
    draw_hex_label(&mut ctx, Point::new(0.0, 0.0), 5, 20.0).unwrap();

    let sizes: Vec<f64> = ctx
        .commands()
        .iter()
        .filter_map(|c| match c {
            Command::FillText { font, .. } => Some(font.size_px),
            _ => None,
        })
        .collect();
    assert_eq!(sizes.len(), 2);
    assert!((sizes[0] - 12.0).abs() < EPS);
    assert_eq!(sizes[1], 20.0);
}

#[test]
fn label_text_substitutes_start_marker() {
    let mut ctx = RecordingContext::new();
    for n in [0, 1, 42, -7] {
        draw_hex_label(&mut ctx, Point::new(0.0, 0.0), n, 20.0).unwrap();
    }
    let texts: Vec<&str> = ctx
        .commands()
        .iter()
        .filter_map(|c| match c {
            Command::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["S", "1", "42", "-7"]);
}

#[test]
fn label_state_is_not_restored() {
    let mut ctx = RecordingContext::new();
    ctx.set_text_align(TextAlign::Left);
    ctx.set_text_baseline(TextBaseline::Bottom);
    draw_hex_label(&mut ctx, Point::new(0.0, 0.0), "G", 30.0).unwrap();

    assert_eq!(ctx.text_align(), TextAlign::Center);
    assert_eq!(ctx.text_baseline(), TextBaseline::Middle);
    assert_eq!(ctx.font(), &Font::sans_serif(20.0));
}

#[test]
fn fill_and_stroke_start_fresh_paths() {
    let mut ctx = RecordingContext::new();
    fill_hex(&mut ctx, Point::new(0.0, 0.0), 5.0).unwrap();
    stroke_hex(&mut ctx, Point::new(100.0, 0.0), 5.0).unwrap();

    // Only the stroked hex is in the current path
    let points = ctx.path_points();
    assert_eq!(points.len(), 6);
    assert!(points.iter().all(|p| p.x > 90.0));

    let begins = ctx.commands().iter().filter(|c| **c == Command::BeginPath).count();
    assert_eq!(begins, 2);
}

#[test]
fn fill_is_repeatable() {
    let mut first = RecordingContext::new();
    fill_hex(&mut first, Point::new(3.0, 4.0), 9.0).unwrap();
    let mut second = RecordingContext::new();
    fill_hex(&mut second, Point::new(3.0, 4.0), 9.0).unwrap();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn context_errors_propagate_unchanged() {
    // begin_path and move_to succeed, the first line_to fails
    let mut ctx = FailingContext { remaining: 2 };
    assert_eq!(fill_hex(&mut ctx, Point::new(0.0, 0.0), 1.0), Err(OutOfInk));

    let mut ctx = FailingContext { remaining: 0 };
    assert_eq!(draw_hex_label(&mut ctx, Point::new(0.0, 0.0), 1, 1.0), Err(OutOfInk));

    // 1 move + 5 lines + close is exactly enough
    let mut ctx = FailingContext { remaining: 7 };
    assert_eq!(build_hex_path(&mut ctx, Point::new(0.0, 0.0), 1.0), Ok(()));
}

#[test]
fn trait_objects_work_too() {
    let mut recorder = RecordingContext::new();
    {
        let ctx: &mut dyn DrawingContext<Error = std::convert::Infallible> = &mut recorder;
        stroke_hex(ctx, Point::new(1.0, 1.0), 1.0).unwrap();
    }
    assert_eq!(recorder.commands().last(), Some(&Command::Stroke));
    assert!(matches!(
        recorder.commands()[1],
        Command::Path(PathCommand::MoveTo(_))
    ));
}

#[test]
fn adjacency_examples() {
    assert!(are_adjacent(HexCoord::new(3, 5), HexCoord::new(4, 5)));
    assert!(are_adjacent(HexCoord::new(3, 5), HexCoord::new(3, 6)));
    assert!(are_adjacent(HexCoord::new(3, 5), HexCoord::new(4, 4)));
    assert!(!are_adjacent(HexCoord::new(3, 5), HexCoord::new(4, 6)));
    assert!(!are_adjacent(HexCoord::new(0, 0), HexCoord::new(0, 0)));
}

#[test]
fn adjacency_agrees_with_neighbors_and_distance() {
    let origin = HexCoord::new(-2, 3);
    let neighbors: Vec<_> = origin.neighbors().collect();
    assert_eq!(neighbors.len(), 6);

    for dx in -3..=3 {
        for dy in -3..=3 {
            let other = HexCoord::new(origin.x + dx, origin.y + dy);
            let adjacent = are_adjacent(origin, other);
            assert_eq!(adjacent, neighbors.contains(&other), "offset ({}, {})", dx, dy);
            assert_eq!(adjacent, origin.distance(other) == 1, "offset ({}, {})", dx, dy);
        }
    }
}

// Known limitation of the layout: (+1, +1) and (-1, -1) are not neighbors.
#[test]
fn same_sign_diagonals_are_not_adjacent() {
    let c = HexCoord::new(10, 10);
    assert!(!are_adjacent(c, HexCoord::new(11, 11)));
    assert!(!are_adjacent(c, HexCoord::new(9, 9)));
}

#[test]
fn svg_document_contains_fill_stroke_and_label() {
    let options = SvgOptions::default()
        .with_size(200.0, 200.0)
        .with_background("white");
    let mut ctx = SvgContext::new(Vec::new(), &options).unwrap();

    let center = Point::new(100.0, 100.0);
    ctx.set_fill_style("#ffcc00").unwrap();
    fill_hex(&mut ctx, center, 40.0).unwrap();
    stroke_hex(&mut ctx, center, 40.0).unwrap();
    ctx.set_fill_style("black").unwrap();
    draw_hex_label(&mut ctx, center, 0, 40.0).unwrap();

    let svg = String::from_utf8(ctx.finish().unwrap()).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<path").count(), 2, "{}", svg);
    assert!(svg.contains(r##"fill="#ffcc00""##), "{}", svg);
    assert!(svg.contains("M100,60 L"), "{}", svg);
    assert!(svg.contains(">S</text>"), "{}", svg);
    assert!(svg.trim_end().ends_with("</svg>"));
}
