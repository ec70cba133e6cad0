// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Film Thickness
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Oil-film thickness of an eccentric journal.
//!
//!   h(θ) = s · (1 − ε · cos(θ − β))
//!
//! ε is the relative eccentricity and β the attitude angle. ε outside
//! [0, 1) is evaluated as given; h then touches or crosses zero.

use ndarray::Array1;
use reynolds_types::state::BearingGrid;

/// Film thickness at every angular station of `grid`.
pub fn film_thickness(grid: &BearingGrid, clearance: f64, epsilon: f64, beta: f64) -> Array1<f64> {
    grid.theta
        .mapv(|theta| clearance * (1.0 - epsilon * (theta - beta).cos()))
}

/// 0 ≤ ε < 1, the range in which h stays strictly positive.
pub fn is_physical_eccentricity(epsilon: f64) -> bool {
    (0.0..1.0).contains(&epsilon)
}
