mod utils;

use std::io::Write;

use assertables::{assert_contains, assert_in_delta};
use svgmarker::shapes::{Circle, GraphicElement, Rect, Shape};
use svgmarker::{
    marker_from_file, marker_from_svg_str, render, Error, MarkerConfig, OutputFormat, Segment,
    SvgDocument,
};
use tempfile::NamedTempFile;
use utils::{assert_near, sample_cubics};

#[test]
fn test_circle_marker() {
    let marker = marker_from_svg_str(r#"<svg><circle cx="10" cy="10" r="5"/></svg>"#).unwrap();
    let bbox = marker.bounding_box().unwrap();
    assert_in_delta!(bbox.width(), 1., 1e-9);
    assert_in_delta!(bbox.height(), 1., 1e-9);
    // each of the four arcs between quadrant points takes the large way
    // round (three pieces), all on a circle of radius 0.5 around the origin
    let curves = marker
        .segments()
        .iter()
        .filter(|s| matches!(s, Segment::CubicCurveTo(..)))
        .count();
    assert_eq!(curves, 12);
    for p in sample_cubics(&marker, &[0.1, 0.5, 0.9]) {
        assert_in_delta!(p.distance(Default::default()), 0.5, 1e-3);
    }
    assert_eq!(marker.segments().last(), Some(&Segment::ClosePath));
}

#[test]
fn test_multiple_elements_marker() {
    // elements are joined by a move to the origin, which counts towards the
    // marker's extent
    let svg = r#"
<svg xmlns="http://www.w3.org/2000/svg">
  <line x1="10" y1="0" x2="20" y2="0"/>
  <g><polyline points="10,10 20,10"/></g>
</svg>"#;
    let marker = marker_from_svg_str(svg).unwrap();
    let positions = marker.positions();
    assert_eq!(positions.len(), 5);
    assert_near(positions[0], 0., 0.25);
    assert_near(positions[1], 0.5, 0.25);
    assert_near(positions[2], -0.5, 0.25);
    assert_near(positions[3], 0., -0.25);
    assert_near(positions[4], 0.5, -0.25);
}

#[test]
fn test_rounded_rect_marker() {
    let rect = Rect::new(0., 0., 20., 10., 2., 0.).unwrap();
    assert_eq!((rect.rx, rect.ry), (2., 2.));
    let svg = format!("<svg>{}</svg>", rect.svg_repr());
    let marker = marker_from_svg_str(&svg).unwrap();
    let bbox = marker.bounding_box().unwrap();
    assert_in_delta!(bbox.width(), 1., 1e-9);
    assert_in_delta!(bbox.height(), 0.5, 1e-9);
    // each corner is a single quarter-circle cubic
    let curves = marker
        .segments()
        .iter()
        .filter(|s| matches!(s, Segment::CubicCurveTo(..)))
        .count();
    assert_eq!(curves, 4);
}

#[test]
fn test_marker_from_file() {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(
        tmpfile,
        r#"<?xml version="1.0"?><svg><polygon points="0,0 4,0 2,4"/></svg>"#
    )
    .expect("tmpfile write failed");
    let marker = marker_from_file(tmpfile.path()).unwrap();
    assert_eq!(
        render(&marker, &MarkerConfig::default()).unwrap(),
        "M -0.5 0.5 L 0.5 0.5 L 0 -0.5 Z"
    );

    assert!(matches!(
        marker_from_file("/nonexistent/marker.svg"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_document_repr() {
    let doc = SvgDocument::new(vec![
        Shape::Circle(Circle::new(1., 2., 3.).unwrap()),
        Shape::Rect(Rect::new(0., 0., 4., 4., 0., 0.).unwrap()),
    ]);
    let output = doc.to_string();
    assert_contains!(output, r#"<circle cx="1" cy="2" r="3"/>"#);
    assert_contains!(
        output,
        r#"<rect x="0" y="0" width="4" height="4" rx="0" ry="0"/>"#
    );
    assert!(output.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
}

#[test]
fn test_svg_errors() {
    assert!(matches!(
        marker_from_svg_str("<notsvg/>"),
        Err(Error::Document(_))
    ));
    // an svg without graphic elements has no path data at all
    assert!(matches!(
        marker_from_svg_str("<svg><title>empty</title></svg>"),
        Err(Error::NoCommandFound)
    ));
    assert!(matches!(
        marker_from_svg_str(r#"<svg><ellipse rx="1" ry="nope"/></svg>"#),
        Err(Error::InvalidValue(attr, value)) if attr == "ry" && value == "nope"
    ));
    assert!(matches!(
        marker_from_svg_str(r#"<svg><polyline points="1 2 3"/></svg>"#),
        Err(Error::InvalidValue(attr, _)) if attr == "points"
    ));
    assert!(matches!(
        marker_from_svg_str(r#"<svg><path d="M 0 0 L 1"/></svg>"#),
        Err(Error::InvalidArgumentCount('L', 1))
    ));
}

#[test]
fn test_render_preview_svg() {
    let marker = marker_from_svg_str(r#"<svg><line x2="4" y2="4"/></svg>"#).unwrap();
    let cfg = MarkerConfig {
        format: OutputFormat::Svg,
        ..Default::default()
    };
    let output = render(&marker, &cfg).unwrap();
    assert_contains!(output, r#"d="M -0.5 0.5 L 0.5 -0.5""#);
    assert_contains!(output, r#"viewBox="-0.6 -0.6 1.2 1.2""#);
}
