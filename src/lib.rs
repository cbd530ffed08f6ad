//! efield-solver - a 2D and axisymmetric electrostatic field solver
//!
//! Computes the electrostatic potential produced by conducting electrodes
//! held at fixed potentials, using linear triangular finite elements on an
//! unstructured mesh derived from a regular background grid:
//! - Electrode geometry with point-containment queries
//! - Boundary-conforming mesh generation (the outermost shell of
//!   electrode-interior grid points is retained to carry the Dirichlet
//!   values)
//! - Dense stiffness assembly, planar or axisymmetric
//! - Dirichlet boundary-condition elimination
//! - Direct (LU) or explicit Gaussian-elimination solve
//! - Point-wise field probing by triangle interpolation
//!
//! ## Example
//! ```rust
//! use efield_solver::prelude::*;
//!
//! // A charged disk inside a 12 x 12 domain
//! let mut geometry = Geometry::new(-6.0, 6.0, -6.0, 6.0);
//! geometry.add_circular(-2.0, 0.0, 1.5, 1.0);
//!
//! let mut mesh = Mesh::new(geometry, 2.0, 2.0).unwrap();
//! mesh.generate().unwrap();
//!
//! let mut solver = Solver::new(&mesh);
//! solver.assemble(Symmetry::Planar).unwrap();
//! solver.apply_boundary_conditions().unwrap();
//! solver.solve(SolveMethod::Direct).unwrap();
//!
//! // On the conductor the probe returns the fixed potential exactly
//! assert_eq!(solver.probe(-2.0, 0.0).unwrap(), 1.0);
//! ```

pub mod analysis;
pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod results;
pub mod solver;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{SolveMethod, Symmetry};
    pub use crate::error::{FieldError, FieldResult};
    pub use crate::geometry::{Electrode, Geometry};
    pub use crate::mesh::{Element, Mesh, Node};
    pub use crate::results::{PotentialGrid, SolveSummary};
    pub use crate::solver::Solver;
}
