//! Mathematical utilities for the FEM pipeline

use nalgebra::{DMatrix, DVector, Matrix3, RowVector3, Vector3};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

/// Relative permittivity of the medium (fixed)
pub const PERMITTIVITY: f64 = 1.0;

/// Sub-diagonal entries below this magnitude are skipped during forward
/// elimination; pivots below it are treated as singular.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Signed area of the triangle (a, b, c)
///
/// Positive when the vertices are wound counter-clockwise.
pub fn signed_area(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    0.5 * ((b[1] - c[1]) * (a[0] - c[0]) - (c[1] - a[1]) * (c[0] - b[0]))
}

/// Local stiffness matrix of a linear triangle for the planar Laplace
/// operator
///
/// With `b_i = y_b - y_c` (cyclic) and `c_i = x_c - x_b` (cyclic), the
/// stiffness is `(beta / 4S) * (B^T B + C^T C)` where S is the signed area.
///
/// # Arguments
/// * `a`, `b`, `c` - Vertex coordinates, counter-clockwise
///
/// # Returns
/// The 3x3 element stiffness matrix
pub fn element_stiffness_planar(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Mat3 {
    let b_row = RowVector3::new(b[1] - c[1], c[1] - a[1], a[1] - b[1]);
    let c_row = RowVector3::new(c[0] - b[0], a[0] - c[0], b[0] - a[0]);

    let s = 0.5 * (b_row[0] * c_row[1] - b_row[1] * c_row[0]);

    (b_row.transpose() * b_row + c_row.transpose() * c_row) * (PERMITTIVITY / (4.0 * s))
}

/// Local stiffness matrix of a linear triangle in axisymmetric mode
///
/// The first coordinate is interpreted as the radial distance r and the
/// second as the axial coordinate z. The planar stiffness is scaled by
/// `2*pi*r0`, with r0 the mean radius of the three vertices.
pub fn element_stiffness_axisymmetric(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Mat3 {
    let r0 = (a[0] + b[0] + c[0]) / 3.0;
    element_stiffness_planar(a, b, c) * (2.0 * std::f64::consts::PI * r0)
}

/// Coefficients of the affine field `u(x, y) = alpha1 + alpha2*x + alpha3*y`
/// fit through three vertices and their potentials
///
/// Returns `None` when the vertices are collinear.
pub fn interpolation_coefficients(
    a: [f64; 2],
    b: [f64; 2],
    c: [f64; 2],
    u: Vec3,
) -> Option<Vec3> {
    let coords = Mat3::new(1.0, a[0], a[1], 1.0, b[0], b[1], 1.0, c[0], c[1]);
    coords.try_inverse().map(|inv| inv * u)
}

/// Solve a dense linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

/// Solve a dense linear system by explicit Gaussian elimination without
/// pivoting
///
/// Forward elimination proceeds column by column, skipping sub-diagonal
/// entries already below [`PIVOT_EPSILON`], followed by back-substitution.
/// Rows are never swapped, so the caller must supply a system whose diagonal
/// stays non-zero; a vanishing pivot is reported as `None` rather than left
/// to divide by zero.
pub fn gaussian_elimination(a: &Mat, b: &Vec) -> Option<Vec> {
    let n = a.nrows();
    if n == 0 {
        return Some(Vec::zeros(0));
    }

    let mut m = a.clone();
    let mut rhs = b.clone();

    for j in 0..n {
        let pivot = m[(j, j)];
        if pivot.abs() < PIVOT_EPSILON {
            return None;
        }
        for i in (j + 1)..n {
            if m[(i, j)].abs() < PIVOT_EPSILON {
                continue;
            }
            let factor = m[(i, j)] / pivot;
            for col in 0..n {
                m[(i, col)] -= factor * m[(j, col)];
            }
            rhs[i] -= factor * rhs[j];
        }
    }

    let mut u = Vec::zeros(n);
    u[n - 1] = rhs[n - 1] / m[(n - 1, n - 1)];
    for i in (0..n - 1).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += m[(i, j)] * u[j];
        }
        u[i] = (rhs[i] - sum) / m[(i, i)];
    }

    Some(u)
}
