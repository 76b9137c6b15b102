use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lengths at or below this fraction of a reference length count as zero.
pub const RELATIVE_EPSILON: f64 = 1e-12;

/// True when `len` is zero or vanishingly small next to `reference`.
///
/// Relative, so a triangle a trillion times smaller behaves the same.
pub fn is_negligible(len: f64, reference: f64) -> bool {
    !(len > RELATIVE_EPSILON * reference && len > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit-radius point at `deg` degrees, measured with `atan2` in the same frame.
    pub fn polar(deg: f64) -> Self {
        let rad = deg.to_radians();
        Self::new(rad.cos(), rad.sin())
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Self) -> f64 {
        other.sub(self).length()
    }

    /// Direction from `self` towards `other` in degrees, in (-180, 180].
    pub fn direction_deg(self, other: Self) -> f64 {
        let d = other.sub(self);
        d.y.atan2(d.x).to_degrees()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl FromStr for Point {
    type Err = GeometryError;

    /// Accepts `x,y` or `x y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| GeometryError::ParsePoint {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };
        if parts.len() != 2 {
            return Err(parse_err("expected two coordinates as `x,y`"));
        }

        let x = parts[0]
            .parse::<f64>()
            .map_err(|e| parse_err(&format!("x: {e}")))?;
        let y = parts[1]
            .parse::<f64>()
            .map_err(|e| parse_err(&format!("y: {e}")))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(parse_err("coordinates must be finite"));
        }
        Ok(Self::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox2 {
    pub min: Point,
    pub max: Point,
}

impl BBox2 {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.include_point(*p);
        }
        bbox
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn include_point(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_space_separated_points() {
        assert_eq!(Point::new(1.5, -2.0), "1.5,-2".parse::<Point>().unwrap());
        assert_eq!(Point::new(3.0, 4.0), " 3 , 4 ".parse::<Point>().unwrap());
        assert_eq!(Point::new(-7.0, 0.25), "-7 0.25".parse::<Point>().unwrap());
    }

    #[test]
    fn rejects_malformed_points() {
        for bad in ["", "1", "1,2,3", "a,2", "1,b", "inf,0", "NaN,1"] {
            let err = bad.parse::<Point>().unwrap_err();
            assert!(matches!(err, GeometryError::ParsePoint { .. }), "{bad}: {err}");
        }
    }

    #[test]
    fn bbox_tracks_extents() {
        let pts = [Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, 3.0)];
        let bbox = BBox2::from_points(&pts);
        assert_eq!(Point::new(-2.0, 3.0), bbox.min);
        assert_eq!(Point::new(4.0, 5.0), bbox.max);
        assert_eq!(6.0, bbox.width());
        assert_eq!(2.0, bbox.height());
        assert_eq!(Point::new(1.0, 4.0), bbox.center());
        assert!(BBox2::empty().is_empty());
    }

    #[test]
    fn negligible_is_relative_to_reference() {
        assert!(is_negligible(0.0, 0.0));
        assert!(is_negligible(0.0, 1e-13));
        assert!(!is_negligible(3e-13, 5e-13));
        assert!(is_negligible(1e-3, 1e12));
        assert!(!is_negligible(1e-3, 1.0));
    }

    #[test]
    fn direction_is_y_down_atan2() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(0.0, o.direction_deg(Point::new(1.0, 0.0)));
        assert_eq!(90.0, o.direction_deg(Point::new(0.0, 1.0)));
        assert_eq!(180.0, o.direction_deg(Point::new(-1.0, 0.0)));
        assert_eq!(-90.0, o.direction_deg(Point::new(0.0, -1.0)));
    }
}
