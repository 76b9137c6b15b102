//! Angle arcs drawn at each vertex.
//!
//! All angles here live in the viewport frame, where y grows downward. A
//! direction is `atan2(dy, dx)` in degrees, so an increasing angle turns
//! clockwise on screen. That matches both SVG arcs (sweep-flag 1) and
//! canvas `arc(..., anticlockwise = false)`.

use crate::geom::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sweep {
    /// Increasing angle; clockwise on screen.
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub start: Point,
    pub end: Point,
    pub sweep: Sweep,
}

impl ArcSpec {
    pub fn span_deg(&self) -> f64 {
        (self.end_angle_deg - self.start_angle_deg).abs()
    }

    pub fn mid_angle_deg(&self) -> f64 {
        (self.start_angle_deg + self.end_angle_deg) * 0.5
    }

    pub fn point_at(&self, deg: f64) -> Point {
        self.center.add(Point::polar(deg).scale(self.radius))
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(self.mid_angle_deg())
    }

    /// SVG `A` command sweep-flag.
    pub fn sweep_flag(&self) -> bool {
        self.sweep == Sweep::Clockwise
    }

    /// Canvas-style `anticlockwise` argument.
    pub fn is_anticlockwise(&self) -> bool {
        self.sweep == Sweep::CounterClockwise
    }

    /// Polyline approximation from start to end, `segments + 1` points.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                self.point_at(self.start_angle_deg + (self.end_angle_deg - self.start_angle_deg) * t)
            })
            .collect()
    }
}

/// Arc at `center` spanning the interior angle between the rays towards
/// `neighbor1` and `neighbor2`.
///
/// The arc starts on the ray to `neighbor1` and turns the short way round
/// towards `neighbor2`, so it never covers the reflex side. The turn
/// direction comes from the ray directions; its extent is `angle_deg`
/// (clamped to [0, 180]), which keeps the arc in step with the label
/// computed from the same angle.
///
/// `radius` should be shorter than both adjacent sides; that is not checked
/// here. Non-finite radii become 0 and negative ones are made positive.
pub fn arc_for_vertex(
    center: Point,
    neighbor1: Point,
    neighbor2: Point,
    angle_deg: f64,
    radius: f64,
) -> ArcSpec {
    let radius = if radius.is_finite() { radius.abs() } else { 0.0 };

    let mut start = finite_or_zero(center.direction_deg(neighbor1));
    let mut end = finite_or_zero(center.direction_deg(neighbor2));
    if end - start > 180.0 {
        start += 360.0;
    } else if start - end > 180.0 {
        end += 360.0;
    }

    let sweep = if end >= start {
        Sweep::Clockwise
    } else {
        Sweep::CounterClockwise
    };
    let span = if angle_deg.is_finite() {
        angle_deg.clamp(0.0, 180.0)
    } else {
        (end - start).abs()
    };

    if start > 180.0 {
        start -= 360.0;
    }
    let end = match sweep {
        Sweep::Clockwise => start + span,
        Sweep::CounterClockwise => start - span,
    };

    let mut arc = ArcSpec {
        center,
        radius,
        start_angle_deg: start,
        end_angle_deg: end,
        start: center,
        end: center,
        sweep,
    };
    arc.start = arc.point_at(start);
    arc.end = arc.point_at(end);
    arc
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
