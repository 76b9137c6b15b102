use crate::angles::AngleSet;
use crate::arc::ArcSpec;
use crate::geom::Point;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Distance of the total-angle line from the bottom edge of the viewport.
const TOTAL_LABEL_BOTTOM_GAP: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleLabel {
    /// Anchor for centered text.
    pub position: Point,
    pub text: String,
}

pub fn format_degrees(deg: f64) -> String {
    format!("{deg:.1}°")
}

/// Places the angle value on the arc's bisector, `offset` beyond the arc.
pub fn label_for_vertex(arc: &ArcSpec, angle_deg: f64, offset: f64) -> AngleLabel {
    let distance = arc.radius + offset;
    AngleLabel {
        position: arc.center.add(Point::polar(arc.mid_angle_deg()).scale(distance)),
        text: format_degrees(angle_deg),
    }
}

pub fn total_label(angles: &AngleSet, viewport: &Viewport) -> AngleLabel {
    AngleLabel {
        position: Point::new(viewport.size * 0.5, viewport.size - TOTAL_LABEL_BOTTOM_GAP),
        text: format!("Total: {}", format_degrees(angles.sum())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::arc_for_vertex;
    use float_cmp::assert_approx_eq;

    #[test]
    fn label_sits_on_bisector() {
        let arc = arc_for_vertex(
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 20.0),
            90.0,
            30.0,
        );
        let label = label_for_vertex(&arc, 90.0, 20.0);
        let d = label.position.sub(arc.center);
        assert_approx_eq!(f64, 50.0, d.length(), epsilon = 1e-9);
        assert_approx_eq!(f64, d.x, d.y, epsilon = 1e-9);
        assert_eq!("90.0°", label.text);
    }

    #[test]
    fn total_label_at_bottom_center() {
        let label = total_label(&AngleSet::new([60.0, 60.0, 60.0]), &Viewport::default());
        assert_eq!(Point::new(400.0, 750.0), label.position);
        assert_eq!("Total: 180.0°", label.text);
    }
}
