//! Uniform sampling of surfaces into vertex grids.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use shade_core::{Result, ShadeError};
use shade_math::Point3;

use crate::surface::Surface;

/// Direction in which a grid's row index moves along the height axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Row 0 is the highest ring (shade body).
    TopDown,
    /// Row 0 is the lowest ring (transition, sleeve).
    BottomUp,
}

/// Rings of sampled points, `rows x columns`, closed around the angle.
///
/// Column `columns` is not stored: the ring wraps back to column 0.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGrid {
    rows: usize,
    columns: usize,
    order: RowOrder,
    points: Vec<Point3>,
}

impl VertexGrid {
    /// Build a grid from rings of equal length.
    pub fn from_rows(rows: Vec<Vec<Point3>>, order: RowOrder) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.len() < 2 || columns < 3 {
            return Err(ShadeError::Geometry(format!(
                "grid needs at least 2 rings of 3 points, got {} x {}",
                rows.len(),
                columns
            )));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != columns) {
            return Err(ShadeError::Geometry(format!(
                "ring {} has {} points, expected {}",
                i,
                rows[i].len(),
                columns
            )));
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            order,
            points: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn order(&self) -> RowOrder {
        self.order
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Point at ring `i`, column `j` (wrapping in `j`).
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        self.points[i * self.columns + j % self.columns]
    }

    pub fn row(&self, i: usize) -> &[Point3] {
        &self.points[i * self.columns..(i + 1) * self.columns]
    }

    pub fn first_row(&self) -> &[Point3] {
        self.row(0)
    }

    pub fn last_row(&self) -> &[Point3] {
        self.row(self.rows - 1)
    }

    /// Number of quads between neighbouring rings, including the wrap column.
    pub fn quad_count(&self) -> usize {
        (self.rows - 1) * self.columns
    }

    /// Quads in `(i, j)` raster order.
    ///
    /// Corners are ordered so that splitting into `(0, 1, 2)` and `(0, 2, 3)`
    /// winds counter-clockwise seen from outside once the grid is mapped to
    /// the Z-up export frame.
    pub fn quads(&self) -> impl Iterator<Item = [Point3; 4]> + '_ {
        (0..self.rows - 1).flat_map(move |i| {
            (0..self.columns).map(move |j| {
                let a = self.point(i, j);
                let b = self.point(i + 1, j);
                let c = self.point(i + 1, j + 1);
                let d = self.point(i, j + 1);
                match self.order {
                    RowOrder::TopDown => [a, b, c, d],
                    RowOrder::BottomUp => [a, d, c, b],
                }
            })
        })
    }
}

/// Sample `surface` on `(u_divs + 1) x v_divs` points.
pub fn sample_grid(
    surface: &dyn Surface,
    u_divs: usize,
    v_divs: usize,
    order: RowOrder,
) -> Result<VertexGrid> {
    try_sample_grid(surface, u_divs, v_divs, order, None)
}

/// Sample `surface` row by row in parallel, checking `cancel` before each row.
///
/// Rows share no state, so the result does not depend on scheduling.
pub fn try_sample_grid(
    surface: &dyn Surface,
    u_divs: usize,
    v_divs: usize,
    order: RowOrder,
    cancel: Option<&AtomicBool>,
) -> Result<VertexGrid> {
    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();

    let rows = (0..=u_divs)
        .into_par_iter()
        .map(|i| {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(ShadeError::Cancelled);
            }
            let u = u_min + (u_max - u_min) * i as f64 / u_divs as f64;
            Ok((0..v_divs)
                .map(|j| {
                    let v = v_min + (v_max - v_min) * j as f64 / v_divs as f64;
                    surface.point_at(u, v)
                })
                .collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>>>()?;

    VertexGrid::from_rows(rows, order)
}
