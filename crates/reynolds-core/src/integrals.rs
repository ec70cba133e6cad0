//! Load, shear stress and friction power from a pressure field.
//!
//! All sums use the cell area dA = R·dθ·dz at every node, axial edges
//! included.

use ndarray::{Array1, Array2};
use reynolds_types::error::{ReynoldsError, ReynoldsResult};
use reynolds_types::state::BearingGrid;

fn check_field(grid: &BearingGrid, field: &Array2<f64>) -> ReynoldsResult<()> {
    let (rows, cols) = field.dim();
    if rows != grid.n_theta || cols != grid.n_z {
        return Err(ReynoldsError::InvalidGrid(format!(
            "field is {rows}x{cols}, grid is {}x{}",
            grid.n_theta, grid.n_z
        )));
    }
    Ok(())
}

/// Resultant hydrodynamic load (Lx, Ly):
///   Lx = Σ −p sin θ dA,  Ly = Σ p cos θ dA
pub fn load(grid: &BearingGrid, pressure: &Array2<f64>) -> ReynoldsResult<(f64, f64)> {
    check_field(grid, pressure)?;
    let da = grid.cell_area();
    let mut lx = 0.0;
    let mut ly = 0.0;
    for (i, row) in pressure.outer_iter().enumerate() {
        let (sin, cos) = grid.theta[i].sin_cos();
        let ring = row.sum();
        lx -= ring * sin * da;
        ly += ring * cos * da;
    }
    Ok((lx, ly))
}

/// Deviation from a target load F acting along +y.
pub fn load_residual(load: (f64, f64), target: f64) -> (f64, f64) {
    (load.0, load.1 - target)
}

/// Wall shear stress τ = η(ωR/h − h/(2R) · ∂p/∂θ), ∂p/∂θ by periodic
/// central difference.
pub fn shear_stress(
    grid: &BearingGrid,
    h: &Array1<f64>,
    pressure: &Array2<f64>,
    eta: f64,
) -> ReynoldsResult<Array2<f64>> {
    check_field(grid, pressure)?;
    if h.len() != grid.n_theta {
        return Err(ReynoldsError::DimensionMismatch {
            expected: grid.n_theta,
            got: h.len(),
        });
    }
    let surface_speed = grid.omega * grid.r;
    let inv_two_dtheta = 1.0 / (2.0 * grid.dtheta);

    Ok(Array2::from_shape_fn(
        (grid.n_theta, grid.n_z),
        |(i, j)| {
            let dp_dtheta =
                (pressure[[grid.next(i), j]] - pressure[[grid.prev(i), j]]) * inv_two_dtheta;
            eta * (surface_speed / h[i] - h[i] / (2.0 * grid.r) * dp_dtheta)
        },
    ))
}

/// Friction power P = Σ ωR·τ·dA.
pub fn friction_power(grid: &BearingGrid, tau: &Array2<f64>) -> ReynoldsResult<f64> {
    check_field(grid, tau)?;
    Ok(grid.omega * grid.r * tau.sum() * grid.cell_area())
}
