// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Operating Point Sweeps
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parallel evaluation of independent (ε, β) operating points.
//!
//! Each point is a full film → solve → integrate pass on its own
//! buffers. Results come back in input order; one failed point does not
//! affect the others.

use rayon::prelude::*;
use reynolds_types::error::ReynoldsResult;
use tracing::debug;

use crate::bearing::Bearing;

/// Load residual (Lx, Ly − F) at every (ε, β) point.
pub fn residual_sweep(bearing: &Bearing, points: &[(f64, f64)]) -> Vec<ReynoldsResult<(f64, f64)>> {
    debug!(
        points = points.len(),
        threads = rayon::current_num_threads(),
        "residual sweep"
    );
    points
        .par_iter()
        .map(|&(epsilon, beta)| bearing.residual(epsilon, beta))
        .collect()
}

/// Friction power at every (ε, β) point.
pub fn friction_power_sweep(bearing: &Bearing, points: &[(f64, f64)]) -> Vec<ReynoldsResult<f64>> {
    debug!(
        points = points.len(),
        threads = rayon::current_num_threads(),
        "friction power sweep"
    );
    points
        .par_iter()
        .map(|&(epsilon, beta)| bearing.friction_power(epsilon, beta))
        .collect()
}
