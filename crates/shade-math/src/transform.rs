use crate::{DMat4, DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine transform stored column-major.
///
/// The generator works Y-up; printers expect Z-up. [`Transform::swap_yz`]
/// maps one frame onto the other with a pure permutation, so coordinates are
/// carried over without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    /// Permutation `(x, y, z) -> (x, z, y)`.
    pub fn swap_yz() -> Self {
        Self::from_mat4(DMat4::from_cols(
            DVec3::X.extend(0.0),
            DVec3::Z.extend(0.0),
            DVec3::Y.extend(0.0),
            glam::DVec4::W,
        ))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// This transform followed by a translation by `offset`.
    pub fn then_translate(&self, offset: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(offset) * self.to_mat4())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
