//! End-to-end tests for the fetch-parse-render pipeline.
//!
//! These exercise the whole path a real response takes: pipe-delimited body
//! in, annotated chart primitives out, using a recording surface in place
//! of the SVG backend.

use chrono::{NaiveDate, NaiveDateTime};
use tide_chart_lib::renderer::{render_tide_chart, Margins};
use tide_chart_lib::surface::{Surface, SvgSurface};
use tide_chart_lib::tide_data::parse_events;
use tide_chart_lib::TideKind;

#[derive(Default)]
struct RecordingSurface {
    paths: Vec<String>,
    line_classes: Vec<String>,
    texts: Vec<(String, String)>,
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        700.0
    }
    fn height(&self) -> f32 {
        300.0
    }
    fn path(&mut self, _d: &str, class: &str) {
        self.paths.push(class.to_string());
    }
    fn line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, class: &str) {
        self.line_classes.push(class.to_string());
    }
    fn text(&mut self, _x: f32, _y: f32, class: &str, content: &str) {
        self.texts.push((class.to_string(), content.to_string()));
    }
}

const BODY: &str = "08:12 AM|2.87|high\n\
                    02:45 PM|0.31|low\n\
                    09:03 PM|3.10|high\n\
                    11:59 PM|-0.05|next tide\n";

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn response_body_renders_three_annotated_extrema() {
    let events = parse_events(BODY).unwrap();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.kind.is_extremum()));

    let mut surface = RecordingSurface::default();
    render_tide_chart(&mut surface, &events, Margins::default(), fixed_now());

    assert_eq!(surface.paths, vec!["tide-line", "tide-area"]);

    let extremum_lines = surface
        .line_classes
        .iter()
        .filter(|c| *c == "line-high" || *c == "line-low")
        .count();
    assert_eq!(extremum_lines, 3);
    assert_eq!(
        surface.line_classes.iter().filter(|c| *c == "line-current").count(),
        1
    );
}

#[test]
fn annotation_count_tracks_extremum_kinds_only() {
    let body = "08:12 AM|2.87|high\n\
                11:00 AM|1.50|slack\n\
                02:45 PM|0.31|low\n\
                11:59 PM|-0.05|next tide\n";
    let events = parse_events(body).unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events.iter().filter(|e| e.kind == TideKind::Other).count(),
        1
    );

    let mut surface = RecordingSurface::default();
    render_tide_chart(&mut surface, &events, Margins::default(), fixed_now());

    let extremum_lines = surface
        .line_classes
        .iter()
        .filter(|c| *c == "line-high" || *c == "line-low")
        .count();
    assert_eq!(extremum_lines, 2);
    // Two labels per annotated extremum plus one per axis tick.
    let label_count = surface
        .texts
        .iter()
        .filter(|(class, _)| class.starts_with("label-"))
        .count();
    assert_eq!(label_count, 4);
}

#[test]
fn svg_backend_produces_a_complete_chart_document() {
    let events = parse_events(BODY).unwrap();
    let mut surface = SvgSurface::new(700, 300);
    render_tide_chart(&mut surface, &events, Margins::default(), fixed_now());
    let svg = surface.finish();

    assert!(svg.contains("class=\"tide-line\""));
    assert!(svg.contains("class=\"tide-area\""));
    assert!(svg.contains("class=\"line-current\""));
    assert!(svg.contains(">Noon</text>"));
    assert!(svg.contains(">2.87ft</text>"));
    assert!(svg.contains(">09:03 PM</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
