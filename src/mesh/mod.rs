//! Mesh generation - background-grid triangulation of the geometry

mod element;
mod node;

pub use element::Element;
pub use node::Node;

use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::geometry::Geometry;

/// An unstructured triangular mesh derived from a uniform background grid
///
/// Grid points are enumerated in raster order; a point is retained as a node
/// unless it lies strictly in the interior of an electrode. Points inside an
/// electrode that still touch the free region (the outermost shell) are kept
/// so they can carry the Dirichlet value at the conductor surface. Each grid
/// cell is split along a fixed bottom-left to top-right diagonal:
///
/// ```text
/// *-----*
/// |    /|
/// |  /  |
/// |/    |
/// *-----*
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    geometry: Geometry,
    x_step: f64,
    y_step: f64,
    num_nodes_x: usize,
    num_nodes_y: usize,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    /// Background-grid lookup: (i, j) to node index, row-major in i
    grid: Vec<Option<usize>>,
    generated: bool,
}

impl Mesh {
    /// Create a mesh over the given geometry with a uniform grid spacing
    ///
    /// The grid extent is `ceil((x_max - x_min) / x_step) + 2` columns (and
    /// the analogous number of rows), so the background grid always covers
    /// the bounding box with a row and column of slack.
    ///
    /// # Errors
    /// `InvalidInput` when a step is not strictly positive or the bounding
    /// box is empty.
    pub fn new(geometry: Geometry, x_step: f64, y_step: f64) -> FieldResult<Self> {
        if !(x_step > 0.0) || !(y_step > 0.0) {
            return Err(FieldError::InvalidInput(format!(
                "grid steps must be positive, got ({x_step}, {y_step})"
            )));
        }
        if geometry.x_max <= geometry.x_min || geometry.y_max <= geometry.y_min {
            return Err(FieldError::InvalidInput(format!(
                "empty bounding box ({}, {}) x ({}, {})",
                geometry.x_min, geometry.x_max, geometry.y_min, geometry.y_max
            )));
        }

        let num_nodes_x = ((geometry.x_max - geometry.x_min) / x_step).ceil() as usize + 2;
        let num_nodes_y = ((geometry.y_max - geometry.y_min) / y_step).ceil() as usize + 2;

        Ok(Self {
            geometry,
            x_step,
            y_step,
            num_nodes_x,
            num_nodes_y,
            nodes: Vec::new(),
            elements: Vec::new(),
            grid: vec![None; num_nodes_x * num_nodes_y],
            generated: false,
        })
    }

    /// Generate nodes and elements from the background grid
    ///
    /// Any previously generated mesh is discarded; a parameter change always
    /// means full regeneration.
    ///
    /// # Errors
    /// `EmptyGeometry` when no electrode has been added.
    pub fn generate(&mut self) -> FieldResult<()> {
        if self.geometry.electrodes().is_empty() {
            return Err(FieldError::EmptyGeometry);
        }

        let start = Instant::now();

        self.nodes.clear();
        self.elements.clear();
        self.grid = vec![None; self.num_nodes_x * self.num_nodes_y];

        for i in 0..self.num_nodes_x {
            for j in 0..self.num_nodes_y {
                let x = i as f64 * self.x_step + self.geometry.x_min;
                let y = j as f64 * self.y_step + self.geometry.y_min;

                let fixed_potential = self.geometry.classify(x, y);
                if fixed_potential.is_some() && !self.is_boundary(x, y) {
                    continue;
                }

                let nr = self.nodes.len();
                self.nodes.push(Node::new(x, y, nr, fixed_potential));
                self.grid[i * self.num_nodes_y + j] = Some(nr);
                self.make_cell_elements(i, j);
            }
        }

        self.generated = true;
        info!(
            "generated mesh: {} nodes, {} elements in {:.3} s",
            self.nodes.len(),
            self.elements.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Check whether an electrode-interior grid point belongs to the boundary
    /// shell
    ///
    /// A point is on the shell when at least one of its six mesh neighbors
    /// (left, right, below, above, and the two diagonal neighbors along the
    /// cell diagonal) lies inside the bounding box and outside every
    /// electrode. Neighbors falling outside the bounding box are not checked
    /// rather than treated as free.
    fn is_boundary(&self, x: f64, y: f64) -> bool {
        let (x_min, x_max) = (self.geometry.x_min, self.geometry.x_max);
        let (y_min, y_max) = (self.geometry.y_min, self.geometry.y_max);

        let xm = x - self.x_step;
        let xp = x + self.x_step;
        let ym = y - self.y_step;
        let yp = y + self.y_step;

        let free = |px: f64, py: f64| self.geometry.classify(px, py).is_none();

        (xm >= x_min && free(xm, y))
            || (xp <= x_max && free(xp, y))
            || (ym >= y_min && free(x, ym))
            || (yp <= y_max && free(x, yp))
            || (xp <= x_max && yp <= y_max && free(xp, yp))
            || (xm >= x_min && ym >= y_min && free(xm, ym))
    }

    /// Try to close the grid cell below and left of (i, j) with up to two
    /// triangles
    ///
    /// Each candidate triangle is created only when both of its other
    /// vertices were retained, and skipped when all three vertices lie on an
    /// electrode (the cell is then fully inside a conductor).
    fn make_cell_elements(&mut self, i: usize, j: usize) {
        if i == 0 || j == 0 {
            return;
        }

        // The node at (i, j) was pushed just before this call.
        let here = self.nodes.len() - 1;
        let left = self.node_at(i - 1, j);
        let below = self.node_at(i, j - 1);
        let diagonal = self.node_at(i - 1, j - 1);

        let here_fixed = self.nodes[here].on_electrode();

        if let (Some(below), Some(diagonal)) = (below, diagonal) {
            let all_fixed = here_fixed
                && self.nodes[below].on_electrode()
                && self.nodes[diagonal].on_electrode();
            if !all_fixed {
                // Lower-right triangle, counter-clockwise.
                self.elements.push(Element::new(here, diagonal, below));
            }
        }

        if let (Some(left), Some(diagonal)) = (left, diagonal) {
            let all_fixed = here_fixed
                && self.nodes[left].on_electrode()
                && self.nodes[diagonal].on_electrode();
            if !all_fixed {
                // Upper-left triangle, counter-clockwise.
                self.elements.push(Element::new(here, left, diagonal));
            }
        }
    }

    /// Node index at background-grid position (i, j), if one was retained
    pub fn node_at(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.num_nodes_x || j >= self.num_nodes_y {
            return None;
        }
        self.grid[i * self.num_nodes_y + j]
    }

    /// World coordinates of background-grid position (i, j)
    pub fn grid_point(&self, i: usize, j: usize) -> [f64; 2] {
        [
            i as f64 * self.x_step + self.geometry.x_min,
            j as f64 * self.y_step + self.geometry.y_min,
        ]
    }

    /// The geometry the mesh was generated from
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The mesh nodes, indexed by `nr`
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The mesh elements in creation order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Grid spacing along X
    pub fn x_step(&self) -> f64 {
        self.x_step
    }

    /// Grid spacing along Y
    pub fn y_step(&self) -> f64 {
        self.y_step
    }

    /// Number of background-grid columns
    pub fn num_nodes_x(&self) -> usize {
        self.num_nodes_x
    }

    /// Number of background-grid rows
    pub fn num_nodes_y(&self) -> usize {
        self.num_nodes_y
    }

    /// Whether `generate()` has completed
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Indices of the nodes carrying a fixed potential, in index order
    pub(crate) fn fixed_nodes(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.fixed_potential.map(|potential| (node.nr, potential)))
    }
}
