use float_cmp::assert_approx_eq;
use trigon_core::report::{ARC_RADIUS_TOO_LARGE, COINCIDENT_VERTICES, COLLINEAR_VERTICES, ZERO_EXTENT};
use trigon_core::{layout_triangle, LayoutConfig, Point, Triangle};

fn codes(layout: &trigon_core::TriangleLayout) -> Vec<&str> {
    layout.warnings.iter().map(|w| w.code.as_str()).collect()
}

#[test]
fn default_triangle_layout_is_clean() {
    let layout = layout_triangle(&Triangle::default(), &LayoutConfig::default());
    assert!(layout.warnings.is_empty(), "{:?}", layout.warnings);
    assert!(!layout.is_degenerate());
    assert_approx_eq!(f64, 180.0, layout.angles.sum(), epsilon = 1e-9);
    assert_eq!("Total: 180.0°", layout.total.text);
    assert_eq!("63.4°", layout.labels[0].text);
    assert_eq!("53.1°", layout.labels[2].text);
    for p in layout.vertices {
        assert!(layout.viewport.bounds().contains(p, 1e-9));
    }
}

#[test]
fn coincident_vertices_are_reported() {
    let t = Triangle::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0));
    let layout = layout_triangle(&t, &LayoutConfig::default());
    assert_eq!(vec![COINCIDENT_VERTICES], codes(&layout));
    assert!(layout.is_degenerate());
    for arc in &layout.arcs {
        assert!(arc.start.is_finite() && arc.end.is_finite());
    }
    assert_eq!("Total: 0.0°", layout.total.text);
}

#[test]
fn collinear_vertices_are_reported() {
    let t = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0));
    let layout = layout_triangle(&t, &LayoutConfig::default());
    assert_eq!(vec![COLLINEAR_VERTICES], codes(&layout));
}

#[test]
fn single_point_reports_zero_extent() {
    let p = Point::new(1.0, 2.0);
    let layout = layout_triangle(&Triangle::new(p, p, p), &LayoutConfig::default());
    assert_eq!(vec![COINCIDENT_VERTICES, ZERO_EXTENT], codes(&layout));
}

#[test]
fn tiny_triangle_is_scaled_like_any_other() {
    let t = Triangle::new(Point::new(0.0, 0.0), Point::new(4e-13, 0.0), Point::new(0.0, 3e-13));
    let layout = layout_triangle(&t, &LayoutConfig::default());
    assert!(codes(&layout).is_empty(), "{:?}", codes(&layout));
    assert!(!layout.is_degenerate());
    assert!(!t.is_degenerate());
    assert!(!t.has_coincident_vertices());

    assert_approx_eq!(f64, 180.0, layout.angles.sum(), epsilon = 1e-6);
    assert_approx_eq!(f64, 90.0, layout.angles.get(0), epsilon = 1e-6);
    assert_approx_eq!(f64, 700.0 / 4e-13, layout.transform.scale, ulps = 4);
    assert_approx_eq!(f64, 50.0, layout.vertices[0].x, epsilon = 1e-6);
    assert_approx_eq!(f64, 750.0, layout.vertices[1].x, epsilon = 1e-6);
}

#[test]
fn oversized_arc_radius_is_reported() {
    // A sliver: its short side is tiny after fitting.
    let t = Triangle::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 1.0));
    let cfg = LayoutConfig {
        arc_radius: 50.0,
        ..LayoutConfig::default()
    };
    let layout = layout_triangle(&t, &cfg);
    assert_eq!(vec![ARC_RADIUS_TOO_LARGE], codes(&layout));
    assert!(!layout.is_degenerate());
}

#[test]
fn layout_serializes_to_json() {
    let layout = layout_triangle(&Triangle::default(), &LayoutConfig::default());
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(3, json["arcs"].as_array().unwrap().len());
    assert_eq!("Clockwise", json["arcs"][0]["sweep"]);
    let back: trigon_core::TriangleLayout = serde_json::from_value(json).unwrap();
    assert_eq!(layout.total.text, back.total.text);
    assert_eq!(layout.warnings, back.warnings);
}
