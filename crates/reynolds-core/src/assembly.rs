// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — System Assembly
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Finite-difference assembly of the steady Reynolds equation.
//!
//! In (θ, z) with x = Rθ the equation reads
//!   1/R² ∂/∂θ(h³ ∂p/∂θ) + ∂/∂z(h³ ∂p/∂z) = 6ηω ∂h/∂θ
//!
//! Expanding the θ-term as h³ p_θθ + 3h² h_θ p_θ and using central
//! differences gives a five-point stencil per interior node:
//!   - (i, j±1):    h³/dz²
//!   - (i, j):      −2h³/dz² − 2h³/(R²dθ²)
//!   - (i±1, j):    h³/(R²dθ²) ± 3h²(h_{i+1} − h_{i−1})/(4R²dθ²)
//!   - rhs:         3ηω(h_{i+1} − h_{i−1})/dθ
//!
//! θ is periodic (i±1 wrap), z = ±B/2 are Dirichlet rows fixed at p_amb.

use ndarray::Array1;
use reynolds_math::sparse::{CsrMatrix, TripletBuilder};
use reynolds_types::error::{ReynoldsError, ReynoldsResult};
use reynolds_types::state::BearingGrid;
use tracing::debug;

/// Assembled linear system A p = b in idx(i, j) numbering.
#[derive(Debug, Clone)]
pub struct ReynoldsSystem {
    pub matrix: CsrMatrix,
    pub rhs: Array1<f64>,
}

fn check_film(grid: &BearingGrid, h: &Array1<f64>) -> ReynoldsResult<()> {
    if h.len() != grid.n_theta {
        return Err(ReynoldsError::DimensionMismatch {
            expected: grid.n_theta,
            got: h.len(),
        });
    }
    Ok(())
}

/// Coefficient matrix for film thickness `h`.
pub fn assemble_matrix(grid: &BearingGrid, h: &Array1<f64>) -> ReynoldsResult<CsrMatrix> {
    check_film(grid, h)?;
    let n = grid.n;
    let dz_sq = grid.dz * grid.dz;
    let r_dtheta_sq = grid.r * grid.r * grid.dtheta * grid.dtheta;

    let mut triplets = TripletBuilder::with_capacity(n, n, 5 * n);

    for i in 0..grid.n_theta {
        let ip = grid.next(i);
        let im = grid.prev(i);
        let hi = h[i];
        let h_cubed = hi * hi * hi;

        let c_axial = h_cubed / dz_sq;
        let c_angular = h_cubed / r_dtheta_sq;
        // Wedge term from 3h² h_θ p_θ
        let c_skew = 3.0 * (h[ip] - h[im]) * hi * hi / (4.0 * r_dtheta_sq);

        for j in 0..grid.n_z {
            let k = grid.idx(i, j);
            if grid.is_axial_boundary(j) {
                triplets.push(k, k, 1.0)?;
                continue;
            }
            triplets.push(k, grid.idx(i, j + 1), c_axial)?;
            triplets.push(k, grid.idx(i, j - 1), c_axial)?;
            triplets.push(k, k, -2.0 * c_axial - 2.0 * c_angular)?;
            triplets.push(k, grid.idx(ip, j), c_angular + c_skew)?;
            triplets.push(k, grid.idx(im, j), c_angular - c_skew)?;
        }
    }

    let matrix = triplets.build();
    debug!(n, nnz = matrix.nnz(), "Reynolds matrix assembled");
    Ok(matrix)
}

/// Right-hand side: p_amb on the axial edges, the Couette wedge source inside.
pub fn assemble_rhs(
    grid: &BearingGrid,
    h: &Array1<f64>,
    eta: f64,
    p_amb: f64,
) -> ReynoldsResult<Array1<f64>> {
    check_film(grid, h)?;
    let mut rhs = Array1::zeros(grid.n);
    let wedge = 3.0 * eta * grid.omega / grid.dtheta;

    for i in 0..grid.n_theta {
        let source = wedge * (h[grid.next(i)] - h[grid.prev(i)]);
        for j in 0..grid.n_z {
            rhs[grid.idx(i, j)] = if grid.is_axial_boundary(j) {
                p_amb
            } else {
                source
            };
        }
    }
    Ok(rhs)
}

pub fn assemble(
    grid: &BearingGrid,
    h: &Array1<f64>,
    eta: f64,
    p_amb: f64,
) -> ReynoldsResult<ReynoldsSystem> {
    Ok(ReynoldsSystem {
        matrix: assemble_matrix(grid, h)?,
        rhs: assemble_rhs(grid, h, eta, p_amb)?,
    })
}
