//! Analysis options

use serde::{Deserialize, Serialize};

/// Spatial interpretation of the two mesh coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symmetry {
    /// Plain 2D cross-section
    Planar,
    /// The first coordinate is the radial distance r around a rotation axis,
    /// the second the axial coordinate z; element stiffness is scaled by
    /// `2*pi*r0`
    Axisymmetric,
}

impl Default for Symmetry {
    fn default() -> Self {
        Self::Planar
    }
}

/// Strategy used to solve the assembled linear system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    /// Dense LU factorization
    Direct,
    /// Explicit Gaussian elimination without pivoting
    ///
    /// Requires every diagonal pivot of the eliminated system to stay
    /// non-zero; a vanishing pivot fails the solve with a singular-matrix
    /// error.
    GaussianElimination,
}

impl Default for SolveMethod {
    fn default() -> Self {
        Self::Direct
    }
}
