use anyhow::{Context, Result};
use std::path::Path;
use svg::node::element::{Circle, Group, Path as SvgPath, Polygon, Rectangle, Text};
use svg::Document;
use trigon_core::arc::ArcSpec;
use trigon_core::geom::Point;
use trigon_core::label::AngleLabel;
use trigon_core::layout::TriangleLayout;

#[derive(Debug, Clone)]
pub struct SvgStyle {
    pub background: String,
    pub edge_color: String,
    pub edge_width: f64,
    pub arc_color: String,
    pub arc_width: f64,
    pub label_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub vertex_radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            edge_color: "#333".to_string(),
            edge_width: 3.0,
            arc_color: "#e74c3c".to_string(),
            arc_width: 2.0,
            label_color: "#2c3e50".to_string(),
            font_family: "Arial".to_string(),
            font_size: 16.0,
            vertex_radius: 4.0,
        }
    }
}

pub fn render_svg(layout: &TriangleLayout, style: &SvgStyle) -> Document {
    let size = layout.viewport.size;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size)
        .set("height", size)
        .set("fill", style.background.as_str());

    let polygon = Polygon::new()
        .set("points", polygon_points(&layout.vertices))
        .set("fill", "none")
        .set("stroke", style.edge_color.as_str())
        .set("stroke-width", style.edge_width)
        .set("stroke-linejoin", "round");

    let mut arcs = Group::new()
        .set("class", "angle-arcs")
        .set("fill", "none")
        .set("stroke", style.arc_color.as_str())
        .set("stroke-width", style.arc_width);
    for arc in &layout.arcs {
        arcs = arcs.add(SvgPath::new().set("d", arc_path_data(arc)));
    }

    let mut vertices = Group::new()
        .set("class", "vertices")
        .set("fill", style.edge_color.as_str());
    for v in &layout.vertices {
        vertices = vertices.add(
            Circle::new()
                .set("cx", v.x)
                .set("cy", v.y)
                .set("r", style.vertex_radius),
        );
    }

    let mut labels = Group::new()
        .set("class", "angle-labels")
        .set("fill", style.label_color.as_str())
        .set("font-family", style.font_family.as_str())
        .set("font-size", style.font_size)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle");
    for label in layout.labels.iter().chain(std::iter::once(&layout.total)) {
        labels = labels.add(label_text(label));
    }

    Document::new()
        .set("viewBox", format!("0 0 {size} {size}"))
        .set("width", size)
        .set("height", size)
        .add(background)
        .add(polygon)
        .add(arcs)
        .add(vertices)
        .add(labels)
}

/// `M start A r r 0 0 sweep end`. Interior angles never exceed 180°, so the
/// large-arc flag is always 0.
pub fn arc_path_data(arc: &ArcSpec) -> String {
    format!(
        "M {} {} A {r} {r} 0 0 {} {} {}",
        fmt(arc.start.x),
        fmt(arc.start.y),
        u8::from(arc.sweep_flag()),
        fmt(arc.end.x),
        fmt(arc.end.y),
        r = fmt(arc.radius),
    )
}

pub fn to_svg_string(layout: &TriangleLayout, style: &SvgStyle) -> String {
    render_svg(layout, style).to_string()
}

pub fn save_svg(path: &Path, layout: &TriangleLayout, style: &SvgStyle) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir: {parent:?}"))?;
        }
    }
    std::fs::write(path, to_svg_string(layout, style))
        .with_context(|| format!("write svg: {path:?}"))
}

fn label_text(label: &AngleLabel) -> Text {
    Text::new(label.text.as_str())
        .set("x", fmt(label.position.x))
        .set("y", fmt(label.position.y))
}

fn polygon_points(vertices: &[Point; 3]) -> String {
    vertices
        .iter()
        .map(|p| format!("{},{}", fmt(p.x), fmt(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed precision keeps the markup stable across tiny rounding differences.
fn fmt(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
