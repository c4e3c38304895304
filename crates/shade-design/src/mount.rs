use serde::{Deserialize, Serialize};

/// Dimensions of the socket on the star ornament the shade slides onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountGeometry {
    /// Outer diameter of the mount sleeve (mm)
    pub outer_diameter: f64,
    /// Length of the mount sleeve (mm)
    pub height: f64,
}

impl MountGeometry {
    pub const STAR_ORNAMENT: MountGeometry = MountGeometry {
        outer_diameter: 13.0,
        height: 5.5,
    };

    pub fn outer_radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }
}

impl Default for MountGeometry {
    fn default() -> Self {
        Self::STAR_ORNAMENT
    }
}
