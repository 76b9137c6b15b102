use crate::error::GeometryError;
use crate::geom::{BBox2, Point};
use crate::triangle::Triangle;
use log::debug;
use serde::{Deserialize, Serialize};

/// Fixed square drawing area. `usable` is the side of the centered region the
/// triangle is scaled into; the rest is margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub size: f64,
    pub usable: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: 800.0,
            usable: 700.0,
        }
    }
}

impl Viewport {
    pub fn new(size: f64, usable: f64) -> Result<Self, GeometryError> {
        let viewport = Self { size, usable };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let ok = self.size.is_finite()
            && self.usable.is_finite()
            && self.size > 0.0
            && self.usable > 0.0
            && self.usable <= self.size;
        if ok {
            Ok(())
        } else {
            Err(GeometryError::InvalidViewport {
                size: self.size,
                usable: self.usable,
            })
        }
    }

    /// Margin on each side of the usable area.
    pub fn margin(&self) -> f64 {
        (self.size - self.usable) * 0.5
    }

    pub fn bounds(&self) -> BBox2 {
        BBox2::new(Point::new(0.0, 0.0), Point::new(self.size, self.size))
    }
}

/// Uniform scale followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f64,
    pub offset: Point,
}

impl ViewportTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Point::new(0.0, 0.0),
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        p.scale(self.scale).add(self.offset)
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.offset.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedTriangle {
    pub transform: ViewportTransform,
    pub triangle: Triangle,
    /// The bounding box had no extent on either axis and the scale fell back to 1.
    pub zero_extent: bool,
}

/// Centers `triangle` in `viewport`, scaled uniformly to fill the usable area.
///
/// An axis with zero extent does not constrain the scale. When neither does,
/// the scale is 1 and the triangle is only centered.
pub fn fit_to_viewport(triangle: &Triangle, viewport: &Viewport) -> FittedTriangle {
    let bbox = BBox2::from_points(&triangle.vertices);
    let (w, h) = (bbox.width(), bbox.height());

    let scale = [w, h]
        .into_iter()
        .filter(|extent| *extent > 0.0 && extent.is_finite())
        .map(|extent| viewport.usable / extent)
        .filter(|s| s.is_finite() && *s > 0.0)
        .reduce(f64::min);
    let zero_extent = scale.is_none();
    let scale = scale.unwrap_or(1.0);

    let offset = Point::new(
        (viewport.size - w * scale) * 0.5 - bbox.min.x * scale,
        (viewport.size - h * scale) * 0.5 - bbox.min.y * scale,
    );
    let mut transform = ViewportTransform { scale, offset };
    if !transform.is_finite() {
        debug!("non-finite viewport transform {transform:?}, using identity");
        transform = ViewportTransform::identity();
    }
    debug!("fit {bbox:?} into {viewport:?}: {transform:?}");

    FittedTriangle {
        transform,
        triangle: triangle.map(|p| transform.apply(p)),
        zero_extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn rejects_usable_larger_than_size() {
        assert!(Viewport::new(800.0, 700.0).is_ok());
        assert!(Viewport::new(800.0, 800.0).is_ok());
        assert!(Viewport::new(800.0, 900.0).is_err());
        assert!(Viewport::new(0.0, 0.0).is_err());
        assert!(Viewport::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn vertical_segment_uses_height_scale() {
        let t = Triangle::new(Point::new(3.0, 0.0), Point::new(3.0, 10.0), Point::new(3.0, 5.0));
        let fitted = fit_to_viewport(&t, &Viewport::default());
        assert!(!fitted.zero_extent);
        assert_approx_eq!(f64, 70.0, fitted.transform.scale);
        for p in fitted.triangle.vertices {
            assert_approx_eq!(f64, 400.0, p.x);
        }
        assert_approx_eq!(f64, 50.0, fitted.triangle.vertices[0].y);
        assert_approx_eq!(f64, 750.0, fitted.triangle.vertices[1].y);
    }

    #[test]
    fn single_point_is_centered_unscaled() {
        let p = Point::new(-12.0, 40.0);
        let fitted = fit_to_viewport(&Triangle::new(p, p, p), &Viewport::default());
        assert!(fitted.zero_extent);
        assert_eq!(1.0, fitted.transform.scale);
        for v in fitted.triangle.vertices {
            assert_eq!(Point::new(400.0, 400.0), v);
        }
    }

    #[test]
    fn non_finite_input_keeps_transform_finite() {
        let t = Triangle::new(
            Point::new(f64::INFINITY, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        );
        let fitted = fit_to_viewport(&t, &Viewport::default());
        assert!(fitted.transform.is_finite());
    }
}
