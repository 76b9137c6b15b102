use trigon_core::{arc_for_vertex, layout_triangle, LayoutConfig, Point, Triangle};
use trigon_svg::{arc_path_data, save_svg, to_svg_string, SvgStyle};

#[test]
fn renders_polygon_arcs_and_labels() {
    let layout = layout_triangle(&Triangle::default(), &LayoutConfig::default());
    let svg = to_svg_string(&layout, &SvgStyle::default());

    assert!(svg.contains("viewBox=\"0 0 800 800\""));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("points=\"50,50 750,50 400,750\""));
    assert_eq!(3, svg.matches("<path").count());
    assert!(svg.contains("63.4°"));
    assert!(svg.contains("53.1°"));
    assert!(svg.contains("Total: 180.0°"));
    assert!(svg.contains("#e74c3c"));
}

#[test]
fn arc_path_encodes_sweep_direction() {
    let o = Point::new(100.0, 100.0);
    let cw = arc_for_vertex(o, Point::new(200.0, 100.0), Point::new(100.0, 200.0), 90.0, 30.0);
    assert_eq!("M 130 100 A 30 30 0 0 1 100 130", arc_path_data(&cw));

    let ccw = arc_for_vertex(o, Point::new(100.0, 200.0), Point::new(200.0, 100.0), 90.0, 30.0);
    assert_eq!("M 100 130 A 30 30 0 0 0 130 100", arc_path_data(&ccw));
}

#[test]
fn saves_into_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("triangle.svg");
    let layout = layout_triangle(&Triangle::default(), &LayoutConfig::default());

    save_svg(&path, &layout, &SvgStyle::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
}
