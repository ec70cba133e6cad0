// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use std::f64::consts::PI;

use crate::config::BearingParameters;
use crate::error::{ReynoldsError, ReynoldsResult};

/// Bearing grid, periodic in theta and bounded in z.
///
/// Unknowns are numbered angular-major: k = idx(i, j) = i * n_z + j.
#[derive(Debug, Clone)]
pub struct BearingGrid {
    pub r: f64,              // Journal radius D / 2
    pub omega: f64,          // Angular speed 2πf
    pub n_theta: usize,
    pub n_z: usize,
    pub n: usize,            // n_theta * n_z
    pub dtheta: f64,         // (theta_max - theta_min) / n_theta
    pub dz: f64,             // B / (n_z - 1)
    pub theta: Array1<f64>,  // [n_theta], theta_max excluded (periodic)
    pub z: Array1<f64>,      // [n_z], -B/2 ..= B/2
}

impl BearingGrid {
    /// Derive the grid from bearing parameters.
    ///
    /// Only the grid sizes are checked here; physical parameters are
    /// validated by [`BearingParameters::validate`].
    pub fn new(params: &BearingParameters) -> ReynoldsResult<Self> {
        let n_theta = params.n_theta;
        let n_z = params.n_z;
        if n_theta == 0 {
            return Err(ReynoldsError::InvalidGrid(
                "n_theta must be >= 1".to_string(),
            ));
        }
        if n_z < 2 {
            return Err(ReynoldsError::InvalidGrid(format!(
                "n_z must be >= 2, got {n_z}"
            )));
        }

        let dtheta = (params.theta_max - params.theta_min) / n_theta as f64;
        let dz = params.width / (n_z - 1) as f64;
        let half_width = params.width / 2.0;

        let theta = Array1::from_shape_fn(n_theta, |i| params.theta_min + i as f64 * dtheta);
        let z = Array1::from_shape_fn(n_z, |j| -half_width + j as f64 * dz);

        Ok(BearingGrid {
            r: params.diameter / 2.0,
            omega: 2.0 * PI * params.frequency,
            n_theta,
            n_z,
            n: n_theta * n_z,
            dtheta,
            dz,
            theta,
            z,
        })
    }

    /// Flat unknown index of node (i, j).
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * self.n_z + j
    }

    /// Inverse of [`BearingGrid::idx`].
    #[inline]
    pub fn node(&self, k: usize) -> (usize, usize) {
        (k / self.n_z, k % self.n_z)
    }

    /// Angular successor, wrapping n_theta - 1 → 0.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.n_theta
    }

    /// Angular predecessor, wrapping 0 → n_theta - 1.
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        (i + self.n_theta - 1) % self.n_theta
    }

    /// True on the axial Dirichlet edges j = 0 and j = n_z - 1.
    #[inline]
    pub fn is_axial_boundary(&self, j: usize) -> bool {
        j == 0 || j + 1 == self.n_z
    }

    /// Area element R·dθ·dz used by the load and power integrals.
    #[inline]
    pub fn cell_area(&self) -> f64 {
        self.r * self.dtheta * self.dz
    }

    /// Axial-major permutation, `perm[k'] = idx(i, j)` with k' = j * n_theta + i.
    ///
    /// Every stencil coupling, the periodic seam included, stays within
    /// n_theta of the diagonal under this numbering.
    pub fn axial_major_ordering(&self) -> Vec<usize> {
        let mut perm = Vec::with_capacity(self.n);
        for j in 0..self.n_z {
            for i in 0..self.n_theta {
                perm.push(self.idx(i, j));
            }
        }
        perm
    }
}
