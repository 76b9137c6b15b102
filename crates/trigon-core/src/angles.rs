use crate::geom::{is_negligible, Point};
use crate::triangle::Triangle;
use serde::{Deserialize, Serialize};

/// Interior angles in degrees at vertex1, vertex2, vertex3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    pub degrees: [f64; 3],
}

impl AngleSet {
    pub fn new(degrees: [f64; 3]) -> Self {
        Self { degrees }
    }

    pub fn get(&self, i: usize) -> f64 {
        self.degrees[i % 3]
    }

    pub fn sum(&self) -> f64 {
        self.degrees.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.degrees.iter().copied()
    }
}

/// Interior angles of `triangle` by the law of cosines.
///
/// Never yields NaN: an angle touching a zero-length side is 0.
pub fn compute_angles(triangle: &Triangle) -> AngleSet {
    let [a, b, c] = triangle.vertices;
    AngleSet::new([
        interior_angle(a, b, c),
        interior_angle(b, c, a),
        interior_angle(c, a, b),
    ])
}

/// Angle at `vertex` between the rays towards `p` and `q`, in [0, 180].
pub fn interior_angle(vertex: Point, p: Point, q: Point) -> f64 {
    let side_p = vertex.distance(p);
    let side_q = vertex.distance(q);
    let opposite = p.distance(q);
    let longest = side_p.max(side_q).max(opposite);
    if is_negligible(side_p, longest) || is_negligible(side_q, longest) {
        return 0.0;
    }

    // Unit longest side keeps the squares clear of underflow and overflow.
    let (side_p, side_q, opposite) = (side_p / longest, side_q / longest, opposite / longest);
    let cos = (side_p * side_p + side_q * side_q - opposite * opposite) / (2.0 * side_p * side_q);
    // Rounding can push near-degenerate configurations just past +-1.
    let deg = cos.clamp(-1.0, 1.0).acos().to_degrees();
    if deg.is_finite() {
        deg
    } else {
        0.0
    }
}
