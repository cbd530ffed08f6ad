//! Triangular element - the unit of FEM integration

use serde::{Deserialize, Serialize};

use crate::math::{self, Vec3};
use crate::mesh::Node;

/// A triangular element over three node indices
///
/// Vertices are wound counter-clockwise and the triangle always has strictly
/// positive signed area; degenerate triangles are never created by the mesh
/// generator. Elements are immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Node indices (a, b, c), counter-clockwise
    pub nodes: [usize; 3],
}

impl Element {
    /// Create a new element from three node indices
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { nodes: [a, b, c] }
    }

    /// Signed area of the triangle
    pub fn area(&self, nodes: &[Node]) -> f64 {
        let [a, b, c] = self.vertex_coords(nodes);
        math::signed_area(a, b, c)
    }

    /// Check whether the point (x, y) lies inside the triangle
    ///
    /// Uses barycentric coordinates; points on an edge or vertex count as
    /// inside.
    pub fn contains(&self, nodes: &[Node], x: f64, y: f64) -> bool {
        let [a, b, c] = self.vertex_coords(nodes);

        let area = math::signed_area(a, b, c);
        if area.abs() < f64::EPSILON {
            return false;
        }

        let inv = 1.0 / (2.0 * area);
        let s = inv * (a[1] * c[0] - a[0] * c[1] + (c[1] - a[1]) * x + (a[0] - c[0]) * y);
        let t = inv * (a[0] * b[1] - a[1] * b[0] + (a[1] - b[1]) * x + (b[0] - a[0]) * y);

        s >= 0.0 && t >= 0.0 && 1.0 - s - t >= 0.0
    }

    /// Coefficients of the affine potential `u(x, y) = alpha1 + alpha2*x +
    /// alpha3*y` fit through the element's vertices and their solved
    /// potentials
    ///
    /// Returns `None` for a degenerate (collinear) triangle.
    pub fn interpolation(&self, nodes: &[Node], u: &math::Vec) -> Option<Vec3> {
        let [a, b, c] = self.vertex_coords(nodes);
        let values = Vec3::new(u[self.nodes[0]], u[self.nodes[1]], u[self.nodes[2]]);
        math::interpolation_coefficients(a, b, c, values)
    }

    fn vertex_coords(&self, nodes: &[Node]) -> [[f64; 2]; 3] {
        [
            nodes[self.nodes[0]].coords(),
            nodes[self.nodes[1]].coords(),
            nodes[self.nodes[2]].coords(),
        ]
    }
}
