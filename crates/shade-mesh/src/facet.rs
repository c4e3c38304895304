use shade_math::{Point3, Vector3};

/// One triangle ready for output: three vertices and the unit normal of
/// their counter-clockwise winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: Vector3,
    pub vertices: [Point3; 3],
}

impl Facet {
    /// Normal is `normalize((p2 - p1) x (p3 - p1))`; zero-area triangles get
    /// the zero vector.
    pub fn from_triangle(vertices: [Point3; 3]) -> Self {
        let [p1, p2, p3] = vertices;
        let normal = (p2 - p1).cross(p3 - p1).try_normalize().unwrap_or(Vector3::ZERO);
        Self { normal, vertices }
    }

    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_math::DVec3;

    #[test]
    fn test_ccw_triangle_normal() {
        let f = Facet::from_triangle([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ]);
        assert_eq!(f.normal, DVec3::Z);
        assert!(!f.is_degenerate());
    }

    #[test]
    fn test_degenerate_triangle() {
        let p = DVec3::new(6.5, 40.0, 0.0);
        let f = Facet::from_triangle([p, p, DVec3::new(6.5, 40.0, 1.0)]);
        assert!(f.is_degenerate());
    }

    #[test]
    fn test_centroid() {
        let f = Facet::from_triangle([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(0.0, 3.0, 3.0),
        ]);
        assert_eq!(f.centroid(), DVec3::new(1.0, 1.0, 1.0));
    }
}
