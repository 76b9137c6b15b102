//! Triangle geometry for drawing a triangle with its interior angles.
//!
//! Every operation is a pure function of its inputs. Shells call
//! [`layout::layout_triangle`] (or the individual steps) and draw the result
//! with whatever backend they have.

pub mod angles;
pub mod arc;
pub mod error;
pub mod geom;
pub mod label;
pub mod layout;
pub mod report;
pub mod triangle;
pub mod viewport;

pub use angles::{compute_angles, AngleSet};
pub use arc::{arc_for_vertex, ArcSpec, Sweep};
pub use error::GeometryError;
pub use geom::Point;
pub use layout::{layout_triangle, LayoutConfig, TriangleLayout};
pub use triangle::Triangle;
pub use viewport::{fit_to_viewport, FittedTriangle, Viewport, ViewportTransform};
