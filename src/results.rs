//! Result types exposed to rendering collaborators

use serde::{Deserialize, Serialize};

/// The solved potential field rasterized over the background grid
///
/// Values are laid out row-major by Y: `values[j][i]` is the potential at
/// `(xs[i], ys[j])`. Background-grid positions without a retained node (the
/// discarded electrode interior) are filled with the electrode's fixed
/// potential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialGrid {
    /// World X coordinate of each grid column
    pub xs: Vec<f64>,
    /// World Y coordinate of each grid row
    pub ys: Vec<f64>,
    /// Potential samples, indexed `[j][i]`
    pub values: Vec<Vec<f64>>,
}

impl PotentialGrid {
    /// Potential at grid position (i, j)
    pub fn value_at(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(j)?.get(i).copied()
    }

    /// Grid dimensions as (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }
}

/// Size summary of an assembled system
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolveSummary {
    /// Total number of mesh nodes (system size)
    pub num_nodes: usize,
    /// Number of triangular elements
    pub num_elements: usize,
    /// Nodes carrying a Dirichlet value
    pub num_fixed_nodes: usize,
    /// Nodes whose potential is an unknown
    pub num_free_nodes: usize,
}
