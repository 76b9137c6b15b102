use crate::angles::{compute_angles, AngleSet};
use crate::arc::{arc_for_vertex, ArcSpec};
use crate::error::GeometryError;
use crate::geom::Point;
use crate::label::{label_for_vertex, total_label, AngleLabel};
use crate::report::{
    Warning, ARC_RADIUS_TOO_LARGE, COINCIDENT_VERTICES, COLLINEAR_VERTICES, ZERO_EXTENT,
};
use crate::triangle::Triangle;
use crate::viewport::{fit_to_viewport, Viewport, ViewportTransform};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub viewport: Viewport,
    pub arc_radius: f64,
    pub label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            arc_radius: 30.0,
            label_offset: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.viewport.validate()?;
        if !self.arc_radius.is_finite() || self.arc_radius < 0.0 {
            return Err(GeometryError::InvalidArcRadius(self.arc_radius));
        }
        if !self.label_offset.is_finite() {
            return Err(GeometryError::InvalidLabelOffset(self.label_offset));
        }
        Ok(())
    }
}

/// Everything a backend needs to draw one triangle in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleLayout {
    pub input: Triangle,
    pub viewport: Viewport,
    pub angles: AngleSet,
    pub transform: ViewportTransform,
    pub vertices: [Point; 3],
    pub arcs: [ArcSpec; 3],
    pub labels: [AngleLabel; 3],
    pub total: AngleLabel,
    pub warnings: Vec<Warning>,
}

impl TriangleLayout {
    pub fn is_degenerate(&self) -> bool {
        self.warnings.iter().any(|w| {
            w.code == COINCIDENT_VERTICES || w.code == COLLINEAR_VERTICES || w.code == ZERO_EXTENT
        })
    }
}

/// Angles, viewport fit, arcs and labels for `triangle`.
///
/// Always produces a drawable layout; degenerate input shows up in
/// `warnings` rather than as an error.
pub fn layout_triangle(triangle: &Triangle, cfg: &LayoutConfig) -> TriangleLayout {
    let angles = compute_angles(triangle);
    let fitted = fit_to_viewport(triangle, &cfg.viewport);
    let placed = fitted.triangle;

    let arcs: [ArcSpec; 3] = std::array::from_fn(|i| {
        let (n1, n2) = placed.neighbors(i);
        arc_for_vertex(placed.vertex(i), n1, n2, angles.get(i), cfg.arc_radius)
    });
    let labels: [AngleLabel; 3] =
        std::array::from_fn(|i| label_for_vertex(&arcs[i], angles.get(i), cfg.label_offset));

    let mut warnings = Vec::new();
    if triangle.has_coincident_vertices() {
        warnings.push(Warning::new(
            COINCIDENT_VERTICES,
            "Two or more vertices coincide; angles touching the zero-length side are reported as 0°.",
        ));
    } else if triangle.is_degenerate() {
        warnings.push(Warning::new(
            COLLINEAR_VERTICES,
            "The vertices are collinear; the triangle has no area.",
        ));
    }
    if fitted.zero_extent {
        warnings.push(Warning::new(
            ZERO_EXTENT,
            "All vertices coincide; the triangle is centered without scaling.",
        ));
    }
    let shortest = placed.shortest_side();
    if shortest > 0.0 && cfg.arc_radius >= shortest {
        warnings.push(Warning::new(
            ARC_RADIUS_TOO_LARGE,
            format!(
                "Arc radius {} is not shorter than the shortest drawn side ({shortest:.1}); arcs will overlap the edges.",
                cfg.arc_radius
            ),
        ));
    }
    for w in &warnings {
        warn!("{}: {}", w.code, w.message);
    }

    TriangleLayout {
        input: *triangle,
        viewport: cfg.viewport,
        angles,
        transform: fitted.transform,
        vertices: placed.vertices,
        arcs,
        labels,
        total: total_label(&angles, &cfg.viewport),
        warnings,
    }
}
