// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Pressure Solve
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct solve of the assembled Reynolds system and cavitation clamp.
//!
//! The linear solution is reshaped to [n_theta, n_z] through idx(i, j)
//! and every value below p_amb is raised to p_amb (half-Sommerfeld).

use ndarray::Array2;
use reynolds_math::banded::BandLu;
use reynolds_math::ordering::reverse_cuthill_mckee;
use reynolds_types::config::{OrderingKind, SolverConfig};
use reynolds_types::error::{ReynoldsError, ReynoldsResult};
use reynolds_types::state::BearingGrid;
use tracing::{debug, warn};

use crate::assembly::ReynoldsSystem;

/// Pressure field with solve diagnostics.
#[derive(Debug, Clone)]
pub struct PressureSolution {
    /// Linear solution before the cavitation clamp [n_theta, n_z].
    pub raw: Array2<f64>,
    /// Clamped field, every entry ≥ p_amb [n_theta, n_z].
    pub field: Array2<f64>,
    /// Number of nodes raised to p_amb.
    pub cavitated_nodes: usize,
    /// ‖A·p_raw − b‖∞
    pub linear_residual: f64,
}

/// Unknown ordering handed to the banded LU.
pub fn solver_ordering(grid: &BearingGrid, system: &ReynoldsSystem, kind: OrderingKind) -> Vec<usize> {
    match kind {
        OrderingKind::AxialMajor => grid.axial_major_ordering(),
        OrderingKind::ReverseCuthillMckee => reverse_cuthill_mckee(&system.matrix),
    }
}

/// Raise every entry below `p_amb` to `p_amb`; returns how many changed.
pub fn apply_cavitation(field: &mut Array2<f64>, p_amb: f64) -> usize {
    let mut clamped = 0;
    field.mapv_inplace(|p| {
        if p < p_amb {
            clamped += 1;
            p_amb
        } else {
            p
        }
    });
    clamped
}

/// Factorize, solve, reshape and clamp.
pub fn solve_pressure(
    grid: &BearingGrid,
    system: &ReynoldsSystem,
    p_amb: f64,
    config: &SolverConfig,
) -> ReynoldsResult<PressureSolution> {
    if !system.matrix.is_finite() || system.rhs.iter().any(|v| !v.is_finite()) {
        let err = ReynoldsError::NonFiniteSystem(format!(
            "Reynolds system of size {} has non-finite coefficients",
            grid.n
        ));
        warn!(error = %err, n = grid.n, "Reynolds pressure solve failed");
        return Err(err);
    }

    let perm = solver_ordering(grid, system, config.ordering);
    let rhs = system.rhs.to_vec();

    let x = BandLu::factor(&system.matrix, &perm, config.pivot_tolerance)
        .and_then(|lu| lu.solve(&rhs))
        .map_err(|e| {
            warn!(error = %e, n = grid.n, "Reynolds pressure solve failed");
            e
        })?;
    let linear_residual = system.matrix.residual_norm(&x, &rhs)?;

    let raw = Array2::from_shape_fn((grid.n_theta, grid.n_z), |(i, j)| x[grid.idx(i, j)]);
    let mut field = raw.clone();
    let cavitated_nodes = apply_cavitation(&mut field, p_amb);

    debug!(
        n = grid.n,
        ordering = ?config.ordering,
        cavitated_nodes,
        linear_residual,
        "pressure field solved"
    );

    Ok(PressureSolution {
        raw,
        field,
        cavitated_nodes,
        linear_residual,
    })
}
