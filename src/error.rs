//! Error types for the field solver

use thiserror::Error;

/// Main error type for field solver operations
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("no electrodes defined - add at least one before generating the mesh")]
    EmptyGeometry,

    #[error("mesh not generated - run generate() first")]
    MeshNotGenerated,

    #[error("system not assembled - run assemble() first")]
    NotAssembled,

    #[error("boundary conditions not applied - run apply_boundary_conditions() first")]
    BoundaryConditionsNotApplied,

    #[error("system not solved - run solve() first")]
    NotSolved,

    #[error("singular stiffness matrix - the system has no unique solution")]
    SingularMatrix,

    #[error("element {0} is degenerate (non-positive signed area)")]
    DegenerateElement(usize),

    #[error("no fixed-potential nodes - at least one node must lie on an electrode")]
    NoFixedPotential,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for field solver operations
pub type FieldResult<T> = Result<T, FieldError>;
