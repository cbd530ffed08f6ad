//! FEM solver - assembly, boundary conditions, solve, and probing

use std::time::Instant;

use log::{debug, info};

use crate::analysis::{SolveMethod, Symmetry};
use crate::error::{FieldError, FieldResult};
use crate::math::{self, Mat, Vec as ColVec};
use crate::mesh::Mesh;
use crate::results::{PotentialGrid, SolveSummary};

/// Assembles and solves the linear system `K * u = b` for a generated mesh
///
/// The solver borrows the mesh for its whole lifetime and exclusively owns
/// the dense stiffness matrix, right-hand side, and solution vector. The
/// pipeline is strictly sequential: `assemble`, then
/// `apply_boundary_conditions`, then `solve`, then `probe`; each step checks
/// that its predecessor ran and fails with a named error otherwise.
/// Re-running `assemble` resets all downstream state.
#[derive(Debug)]
pub struct Solver<'m> {
    mesh: &'m Mesh,
    stiffness: Option<Mat>,
    rhs: Option<ColVec>,
    bc_applied: bool,
    solution: Option<ColVec>,
}

impl<'m> Solver<'m> {
    /// Create a solver over a mesh
    pub fn new(mesh: &'m Mesh) -> Self {
        Self {
            mesh,
            stiffness: None,
            rhs: None,
            bc_applied: false,
            solution: None,
        }
    }

    /// Assemble the global stiffness matrix
    ///
    /// Computes the 3x3 local stiffness of every element (planar or
    /// axisymmetric depending on `symmetry`) and scatter-adds it into the
    /// dense global matrix. The right-hand side starts as zero; boundary
    /// contributions are folded in by [`apply_boundary_conditions`].
    ///
    /// # Errors
    /// * `MeshNotGenerated` when the mesh was never generated
    /// * `DegenerateElement` when an element has non-positive signed area
    ///
    /// [`apply_boundary_conditions`]: Solver::apply_boundary_conditions
    pub fn assemble(&mut self, symmetry: Symmetry) -> FieldResult<()> {
        if !self.mesh.is_generated() {
            return Err(FieldError::MeshNotGenerated);
        }

        let start = Instant::now();
        let nodes = self.mesh.nodes();
        let n = nodes.len();

        let mut stiffness = Mat::zeros(n, n);

        for (idx, element) in self.mesh.elements().iter().enumerate() {
            if element.area(nodes) <= 0.0 {
                return Err(FieldError::DegenerateElement(idx));
            }

            let [a, b, c] = [
                nodes[element.nodes[0]].coords(),
                nodes[element.nodes[1]].coords(),
                nodes[element.nodes[2]].coords(),
            ];

            let local = match symmetry {
                Symmetry::Planar => math::element_stiffness_planar(a, b, c),
                Symmetry::Axisymmetric => math::element_stiffness_axisymmetric(a, b, c),
            };

            for (local_row, &node_row) in element.nodes.iter().enumerate() {
                for (local_col, &node_col) in element.nodes.iter().enumerate() {
                    stiffness[(node_row, node_col)] += local[(local_row, local_col)];
                }
            }
        }

        info!(
            "assembled {n}x{n} stiffness matrix from {} elements in {:.3} s",
            self.mesh.elements().len(),
            start.elapsed().as_secs_f64()
        );

        self.stiffness = Some(stiffness);
        self.rhs = Some(ColVec::zeros(n));
        self.bc_applied = false;
        self.solution = None;

        Ok(())
    }

    /// Eliminate the Dirichlet boundary conditions from the system
    ///
    /// For every node with a fixed potential, in node-index order: the known
    /// contribution `K[i][n] * u_fixed` is moved to the right-hand side of
    /// every non-fixed row, the node's row and column are zeroed, and its
    /// equation is replaced by the identity `u[n] = u_fixed`. Rows zeroed by
    /// an earlier fixed node contribute nothing to later eliminations.
    ///
    /// # Errors
    /// * `NotAssembled` when `assemble` has not run
    /// * `NoFixedPotential` when no node lies on an electrode; the pure
    ///   Laplace system would be under-determined
    pub fn apply_boundary_conditions(&mut self) -> FieldResult<()> {
        let stiffness = self.stiffness.as_mut().ok_or(FieldError::NotAssembled)?;
        let rhs = self.rhs.as_mut().ok_or(FieldError::NotAssembled)?;

        let start = Instant::now();
        let nodes = self.mesh.nodes();
        let n = nodes.len();

        let fixed: Vec<(usize, f64)> = self.mesh.fixed_nodes().collect();
        if fixed.is_empty() {
            return Err(FieldError::NoFixedPotential);
        }

        for &(node, potential) in &fixed {
            for i in 0..n {
                if !nodes[i].on_electrode() {
                    rhs[i] -= stiffness[(i, node)] * potential;
                }
                stiffness[(i, node)] = 0.0;
                stiffness[(node, i)] = 0.0;
            }
            stiffness[(node, node)] = 1.0;
            rhs[node] = potential;
        }

        debug!(
            "eliminated {} fixed nodes in {:.3} s",
            fixed.len(),
            start.elapsed().as_secs_f64()
        );

        self.bc_applied = true;
        Ok(())
    }

    /// Solve the reduced system for the nodal potentials
    ///
    /// # Errors
    /// * `BoundaryConditionsNotApplied` when the Dirichlet elimination has
    ///   not run on the current assembly
    /// * `SingularMatrix` when the chosen strategy cannot produce a solution
    pub fn solve(&mut self, method: SolveMethod) -> FieldResult<()> {
        if !self.bc_applied {
            return Err(FieldError::BoundaryConditionsNotApplied);
        }
        let stiffness = self.stiffness.as_ref().ok_or(FieldError::NotAssembled)?;
        let rhs = self.rhs.as_ref().ok_or(FieldError::NotAssembled)?;

        let start = Instant::now();
        let solution = match method {
            SolveMethod::Direct => math::solve_linear_system(stiffness, rhs),
            SolveMethod::GaussianElimination => math::gaussian_elimination(stiffness, rhs),
        }
        .ok_or(FieldError::SingularMatrix)?;

        info!(
            "solved {} unknowns with {:?} in {:.3} s",
            solution.len(),
            method,
            start.elapsed().as_secs_f64()
        );

        self.solution = Some(solution);
        Ok(())
    }

    /// Evaluate the potential at an arbitrary point
    ///
    /// Points inside an electrode return the conductor's fixed potential
    /// exactly, without interpolation. Otherwise the elements are scanned in
    /// creation order and the first triangle containing the point (edges
    /// inclusive) is evaluated through its affine interpolation. Points
    /// outside the meshed region fall back to 0.0; note that this fallback
    /// is indistinguishable from a legitimate zero potential.
    ///
    /// # Errors
    /// * `NotSolved` when no solution is available
    /// * `DegenerateElement` when the containing triangle is collinear
    pub fn probe(&self, x: f64, y: f64) -> FieldResult<f64> {
        if let Some(potential) = self.mesh.geometry().classify(x, y) {
            return Ok(potential);
        }

        let solution = self.solution.as_ref().ok_or(FieldError::NotSolved)?;
        let nodes = self.mesh.nodes();

        for (idx, element) in self.mesh.elements().iter().enumerate() {
            if element.contains(nodes, x, y) {
                let alpha = element
                    .interpolation(nodes, solution)
                    .ok_or(FieldError::DegenerateElement(idx))?;
                return Ok(alpha[0] + alpha[1] * x + alpha[2] * y);
            }
        }

        Ok(0.0)
    }

    /// The solved potential vector, indexed by node number
    pub fn solution(&self) -> Option<&ColVec> {
        self.solution.as_ref()
    }

    /// The solved potential at a node
    pub fn node_potential(&self, nr: usize) -> Option<f64> {
        self.solution.as_ref().and_then(|u| {
            if nr < u.len() {
                Some(u[nr])
            } else {
                None
            }
        })
    }

    /// Rasterize the solution over the full background grid
    ///
    /// Grid positions without a retained node are filled with the electrode
    /// potential at that position (0.0 outside the meshed region).
    ///
    /// # Errors
    /// `NotSolved` when no solution is available.
    pub fn potential_grid(&self) -> FieldResult<PotentialGrid> {
        let solution = self.solution.as_ref().ok_or(FieldError::NotSolved)?;

        let nx = self.mesh.num_nodes_x();
        let ny = self.mesh.num_nodes_y();

        let xs: Vec<f64> = (0..nx).map(|i| self.mesh.grid_point(i, 0)[0]).collect();
        let ys: Vec<f64> = (0..ny).map(|j| self.mesh.grid_point(0, j)[1]).collect();

        let mut values = vec![vec![0.0; nx]; ny];
        for i in 0..nx {
            for j in 0..ny {
                values[j][i] = match self.mesh.node_at(i, j) {
                    Some(nr) => solution[nr],
                    None => {
                        let [x, y] = self.mesh.grid_point(i, j);
                        self.mesh.geometry().classify(x, y).unwrap_or(0.0)
                    }
                };
            }
        }

        Ok(PotentialGrid { xs, ys, values })
    }

    /// Size summary of the system
    pub fn summary(&self) -> SolveSummary {
        let num_nodes = self.mesh.nodes().len();
        let num_fixed_nodes = self.mesh.fixed_nodes().count();
        SolveSummary {
            num_nodes,
            num_elements: self.mesh.elements().len(),
            num_fixed_nodes,
            num_free_nodes: num_nodes - num_fixed_nodes,
        }
    }
}
