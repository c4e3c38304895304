use shade_math::{Aabb3, Point3, Vector3};

use crate::Facet;

/// Flat-shaded triangle soup for viewers: three unshared vertices per
/// facet, each carrying the facet normal.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn from_facets(facets: impl IntoIterator<Item = Facet>) -> Self {
        let mut mesh = Self::default();
        for facet in facets {
            let base = mesh.positions.len() as u32;
            mesh.positions.extend_from_slice(&facet.vertices);
            mesh.normals.extend([facet.normal; 3]);
            mesh.indices.extend([base, base + 1, base + 2]);
        }
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append `other`, offsetting its indices past our vertices.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(self.positions.iter().copied())
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_math::DVec3;

    fn facet(offset: f64) -> Facet {
        Facet::from_triangle([
            DVec3::new(offset, 0.0, 0.0),
            DVec3::new(offset + 1.0, 0.0, 0.0),
            DVec3::new(offset, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_from_facets() {
        let mesh = TriangleMesh::from_facets([facet(0.0), facet(2.0)]);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(mesh.normals.iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = TriangleMesh::from_facets([facet(0.0)]);
        let b = TriangleMesh::from_facets([facet(2.0)]);
        a.merge(&b);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(&a.indices[3..], &[3, 4, 5]);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = TriangleMesh::from_facets([facet(0.0), facet(2.0)]);
        let bb = mesh.bounding_box();
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.max, DVec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_bounding_box() {
        let bb = TriangleMesh::default().bounding_box();
        assert_eq!(bb.min, bb.max);
    }
}
