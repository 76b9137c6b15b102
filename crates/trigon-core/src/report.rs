use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

impl Warning {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

pub const COINCIDENT_VERTICES: &str = "coincident_vertices";
pub const COLLINEAR_VERTICES: &str = "collinear_vertices";
pub const ZERO_EXTENT: &str = "zero_extent";
pub const ARC_RADIUS_TOO_LARGE: &str = "arc_radius_too_large";
