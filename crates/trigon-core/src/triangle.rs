use crate::geom::{is_negligible, Point};
use serde::{Deserialize, Serialize};

/// Twice the area, relative to the longest side squared, below which the
/// vertices count as collinear.
pub const COLLINEAR_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise on screen (y grows downward).
    Clockwise,
    CounterClockwise,
    Degenerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Default for Triangle {
    /// Drawn when the shell has no input yet.
    fn default() -> Self {
        Self::new(
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(200.0, 300.0),
        )
    }
}

impl Triangle {
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i % 3]
    }

    /// The other two vertices of `i`, in cyclic order.
    pub fn neighbors(&self, i: usize) -> (Point, Point) {
        (self.vertex(i + 1), self.vertex(i + 2))
    }

    /// Lengths of the sides opposite each vertex.
    pub fn side_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        [b.distance(c), c.distance(a), a.distance(b)]
    }

    pub fn shortest_side(&self) -> f64 {
        self.side_lengths().into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Positive when the vertices run clockwise on screen.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * b.sub(a).cross(c.sub(a))
    }

    pub fn has_coincident_vertices(&self) -> bool {
        let sides = self.side_lengths();
        let longest = sides.into_iter().fold(0.0, f64::max);
        sides.iter().any(|&s| is_negligible(s, longest))
    }

    pub fn is_degenerate(&self) -> bool {
        let longest = self.side_lengths().into_iter().fold(0.0, f64::max);
        if !(longest > 0.0) {
            return true;
        }
        let area2 = (2.0 * self.signed_area()).abs();
        !(area2 > COLLINEAR_TOLERANCE * longest * longest)
    }

    pub fn winding(&self) -> Winding {
        if self.is_degenerate() {
            Winding::Degenerate
        } else if self.signed_area() > 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(c, b, a)
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(f(a), f(b), f(c))
    }

    /// Strict point-in-triangle test, independent of winding.
    pub fn contains_strictly(&self, p: Point) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = b.sub(a).cross(p.sub(a));
        let d2 = c.sub(b).cross(p.sub(b));
        let d3 = a.sub(c).cross(p.sub(c));
        (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
    }
}
