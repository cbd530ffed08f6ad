//! Mesh node - a discrete vertex of the triangulation

use serde::{Deserialize, Serialize};

/// A mesh vertex
///
/// Nodes are created once during mesh generation and never moved or
/// renumbered afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Dense zero-based index, unique within a mesh
    pub nr: usize,
    /// Fixed potential when the node lies on an electrode, `None` for a free
    /// node whose potential is an unknown of the system
    pub fixed_potential: Option<f64>,
}

impl Node {
    /// Create a new node
    pub fn new(x: f64, y: f64, nr: usize, fixed_potential: Option<f64>) -> Self {
        Self {
            x,
            y,
            nr,
            fixed_potential,
        }
    }

    /// Whether the node lies on an electrode and carries a Dirichlet value
    pub fn on_electrode(&self) -> bool {
        self.fixed_potential.is_some()
    }

    /// The node position as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
