//! Facet assembly for the lampshade.
//!
//! The mesh keeps the sampled rings and produces facets on demand in the
//! Z-up export frame: body, bottom cap, transition, sleeve, top cap.

use shade_core::traits::{BoundingBox, Validate};
use shade_core::{Result, ShadeError, Tolerance};
use shade_geometry::VertexGrid;
use shade_math::{Aabb3, Point3, Transform};

use crate::{Facet, TriangleMesh};

/// Facets produced for a given `detail`: two grids of `detail x detail`
/// quads, one ring of sleeve quads and two fans.
pub fn facet_count_for_detail(detail: usize) -> usize {
    4 * detail * detail + 4 * detail
}

/// Parts of the shell, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Body,
    BottomCap,
    Transition,
    Sleeve,
    TopCap,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Body,
        Self::BottomCap,
        Self::Transition,
        Self::Sleeve,
        Self::TopCap,
    ];
}

/// Single-walled shell for vase-mode printing, closed by two flat caps.
#[derive(Debug, Clone)]
pub struct LampshadeMesh {
    /// Solid name written to the STL header
    pub name: String,
    pub body: VertexGrid,
    pub bottom_center: Point3,
    pub transition: VertexGrid,
    pub sleeve: VertexGrid,
    pub top_center: Point3,
    /// Maps the Y-up generation frame to the print frame
    pub export_transform: Transform,
}

impl LampshadeMesh {
    pub fn new(
        name: impl Into<String>,
        body: VertexGrid,
        bottom_center: Point3,
        transition: VertexGrid,
        sleeve: VertexGrid,
        top_center: Point3,
    ) -> Self {
        let mut mesh = Self {
            name: name.into(),
            body,
            bottom_center,
            transition,
            sleeve,
            top_center,
            export_transform: Transform::swap_yz(),
        };
        // Rest the solid on the print bed: minimum corner at the origin.
        let swapped = mesh.export_aabb();
        mesh.export_transform = mesh.export_transform.then_translate(-swapped.min);
        mesh
    }

    /// Every sampled point and both cap centres, in the generation frame.
    fn generation_points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.body
            .points()
            .iter()
            .chain(self.transition.points())
            .chain(self.sleeve.points())
            .chain([&self.bottom_center, &self.top_center])
            .copied()
    }

    fn export_aabb(&self) -> Aabb3 {
        let transform = self.export_transform;
        Aabb3::from_points(self.generation_points().map(|p| transform.transform_point(p)))
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }

    /// Where the shade's vertical axis crosses the print bed, in the export frame.
    pub fn axis_origin(&self) -> Point3 {
        let origin = self.export_transform.transform_point(Point3::ZERO);
        Point3::new(origin.x, origin.y, 0.0)
    }

    /// Ring resolution shared by every section.
    pub fn detail(&self) -> usize {
        self.body.columns()
    }

    pub fn facet_count(&self) -> usize {
        2 * self.body.quad_count()
            + self.body.columns()
            + 2 * self.transition.quad_count()
            + 2 * self.sleeve.quad_count()
            + self.sleeve.columns()
    }

    /// Every facet in output order.
    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        Section::ALL
            .into_iter()
            .flat_map(move |section| self.section_facets(section))
    }

    /// Facets of one section, in the export frame.
    pub fn section_facets(&self, section: Section) -> impl Iterator<Item = Facet> + '_ {
        let transform = self.export_transform;
        self.triangles(section)
            .map(move |tri| Facet::from_triangle(tri.map(|p| transform.transform_point(p))))
    }

    /// Triangles of one section in the generation frame.
    fn triangles(&self, section: Section) -> Box<dyn Iterator<Item = [Point3; 3]> + '_> {
        match section {
            Section::Body => Box::new(split_quads(&self.body)),
            Section::BottomCap => Box::new(fan(self.bottom_center, self.body.last_row(), Cap::Bottom)),
            Section::Transition => Box::new(split_quads(&self.transition)),
            Section::Sleeve => Box::new(split_quads(&self.sleeve)),
            Section::TopCap => Box::new(fan(self.top_center, self.sleeve.last_row(), Cap::Top)),
        }
    }

    /// Flat-shaded triangle soup in the export frame, for previews.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        for section in Section::ALL {
            mesh.merge(&TriangleMesh::from_facets(self.section_facets(section)));
        }
        mesh
    }
}

/// Two triangles per quad with the fixed diagonal: (0, 1, 2) and (0, 2, 3).
fn split_quads(grid: &VertexGrid) -> impl Iterator<Item = [Point3; 3]> + '_ {
    grid.quads()
        .flat_map(|[p1, p2, p3, p4]| [[p1, p2, p3], [p1, p3, p4]])
}

#[derive(Debug, Clone, Copy)]
enum Cap {
    Bottom,
    Top,
}

/// Fan from `center` over a closed ring, wound to face away from the shell.
fn fan(center: Point3, ring: &[Point3], cap: Cap) -> impl Iterator<Item = [Point3; 3]> + '_ {
    let n = ring.len();
    (0..n).map(move |j| {
        let (a, b) = (ring[j], ring[(j + 1) % n]);
        match cap {
            Cap::Bottom => [center, b, a],
            Cap::Top => [center, a, b],
        }
    })
}

fn rings_match(a: &[Point3], b: &[Point3], tol: Tolerance) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(p, q)| tol.is_zero(p.distance(*q)))
}

impl Validate for LampshadeMesh {
    /// Check that neighbouring sections share their boundary rings.
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default();
        if !rings_match(self.body.first_row(), self.transition.first_row(), tol) {
            return Err(ShadeError::Geometry(
                "transition does not start on the body's top rim".into(),
            ));
        }
        if !rings_match(self.transition.last_row(), self.sleeve.first_row(), tol) {
            return Err(ShadeError::Geometry(
                "sleeve does not start on the transition's top ring".into(),
            ));
        }
        Ok(())
    }
}

impl BoundingBox for LampshadeMesh {
    type Point = Point3;

    /// Bounds in the export frame.
    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = self.export_aabb();
        (aabb.min, aabb.max)
    }
}
