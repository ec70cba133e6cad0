// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Banded LU
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct banded LU factorization with partial pivoting.
//!
//! The sparse matrix is first renumbered (`perm[new] = old`) so that all
//! couplings sit within `kl` rows below and `ku` columns above the
//! diagonal, then rows are equilibrated to unit max-norm and factorized
//! LINPACK `dgbfa`-style: row interchanges are confined to the `kl` rows
//! below the pivot, which widens the upper band to `kl + ku`.
//!
//! Row `r` of the band store holds columns `r - kl ..= r + kl + ku`.
//!
//! Multipliers stay where they were computed; later interchanges only
//! touch columns right of the current pivot, so `solve` replays the
//! interchanges in the same order.

use reynolds_types::error::{ReynoldsError, ReynoldsResult};
use tracing::debug;

use crate::ordering::{invert_permutation, validate_permutation};
use crate::sparse::CsrMatrix;

/// LU factors of P·A·Pᵀ in band storage.
#[derive(Debug, Clone)]
pub struct BandLu {
    n: usize,
    kl: usize,
    ku: usize,
    width: usize,
    band: Vec<f64>,
    pivots: Vec<usize>,
    perm: Vec<usize>,
    row_scale: Vec<f64>,
}

#[inline(always)]
fn slot(width: usize, kl: usize, r: usize, c: usize) -> usize {
    r * width + (c + kl - r)
}

impl BandLu {
    /// Factorize `a` under the ordering `perm`.
    ///
    /// Fails with [`ReynoldsError::NonFiniteSystem`] on NaN/inf coefficients
    /// and [`ReynoldsError::SingularSystem`] on an all-zero row or when no
    /// pivot with |pivot| > `pivot_tolerance` exists after equilibration.
    pub fn factor(a: &CsrMatrix, perm: &[usize], pivot_tolerance: f64) -> ReynoldsResult<Self> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(ReynoldsError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        validate_permutation(perm, n)?;
        let iperm = invert_permutation(perm);
        let (kl, ku) = a.bandwidth_inverse(&iperm);
        let width = 2 * kl + ku + 1;

        let mut band = vec![0.0; n * width];
        let mut row_scale = vec![1.0; n];

        for (new_r, &old_r) in perm.iter().enumerate() {
            let mut scale: f64 = 0.0;
            for (old_c, v) in a.row(old_r) {
                if !v.is_finite() {
                    return Err(ReynoldsError::NonFiniteSystem(format!(
                        "coefficient ({old_r}, {old_c}) is {v}"
                    )));
                }
                band[slot(width, kl, new_r, iperm[old_c])] += v;
                scale = scale.max(v.abs());
            }
            if scale == 0.0 {
                return Err(ReynoldsError::SingularSystem {
                    row: old_r,
                    pivot: 0.0,
                });
            }
            let inv = 1.0 / scale;
            row_scale[new_r] = inv;
            let lo = new_r.saturating_sub(kl);
            let hi = (new_r + ku).min(n - 1);
            for c in lo..=hi {
                band[slot(width, kl, new_r, c)] *= inv;
            }
        }

        let mut pivots = vec![0usize; n];
        for k in 0..n {
            let last_row = (k + kl).min(n - 1);
            let last_col = (k + kl + ku).min(n - 1);

            let mut p = k;
            let mut p_abs = band[slot(width, kl, k, k)].abs();
            for r in k + 1..=last_row {
                let v = band[slot(width, kl, r, k)].abs();
                if v > p_abs {
                    p_abs = v;
                    p = r;
                }
            }
            // Negated comparison also rejects NaN.
            if !(p_abs > pivot_tolerance) {
                return Err(ReynoldsError::SingularSystem {
                    row: perm[k],
                    pivot: p_abs,
                });
            }
            pivots[k] = p;
            if p != k {
                for c in k..=last_col {
                    band.swap(slot(width, kl, k, c), slot(width, kl, p, c));
                }
            }

            let inv_pivot = 1.0 / band[slot(width, kl, k, k)];
            for r in k + 1..=last_row {
                let m = band[slot(width, kl, r, k)] * inv_pivot;
                band[slot(width, kl, r, k)] = m;
                if m == 0.0 {
                    continue;
                }
                for c in k + 1..=last_col {
                    band[slot(width, kl, r, c)] -= m * band[slot(width, kl, k, c)];
                }
            }
        }

        debug!(n, kl, ku, nnz = a.nnz(), "banded LU factorized");

        Ok(BandLu {
            n,
            kl,
            ku,
            width,
            band,
            pivots,
            perm: perm.to_vec(),
            row_scale,
        })
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Half-bandwidths `(kl, ku)` of the permuted matrix before pivoting.
    pub fn bandwidth(&self) -> (usize, usize) {
        (self.kl, self.ku)
    }

    /// Solve A x = b, returning x in the original numbering.
    pub fn solve(&self, rhs: &[f64]) -> ReynoldsResult<Vec<f64>> {
        let n = self.n;
        if rhs.len() != n {
            return Err(ReynoldsError::DimensionMismatch {
                expected: n,
                got: rhs.len(),
            });
        }
        let (width, kl, ku) = (self.width, self.kl, self.ku);

        let mut y: Vec<f64> = self
            .perm
            .iter()
            .zip(&self.row_scale)
            .map(|(&old, &s)| rhs[old] * s)
            .collect();

        // Forward: apply interchanges and L⁻¹.
        for k in 0..n {
            let p = self.pivots[k];
            if p != k {
                y.swap(k, p);
            }
            let yk = y[k];
            if yk == 0.0 {
                continue;
            }
            let last_row = (k + kl).min(n - 1);
            for r in k + 1..=last_row {
                y[r] -= self.band[slot(width, kl, r, k)] * yk;
            }
        }

        // Backward: U⁻¹.
        for k in (0..n).rev() {
            let last_col = (k + kl + ku).min(n - 1);
            let mut sum = y[k];
            for c in k + 1..=last_col {
                sum -= self.band[slot(width, kl, k, c)] * y[c];
            }
            y[k] = sum / self.band[slot(width, kl, k, k)];
        }

        let mut x = vec![0.0; n];
        for (new, &old) in self.perm.iter().enumerate() {
            x[old] = y[new];
        }
        if let Some(pos) = x.iter().position(|v| !v.is_finite()) {
            return Err(ReynoldsError::NonFiniteSystem(format!(
                "solution component {pos} is {}",
                x[pos]
            )));
        }
        Ok(x)
    }
}

/// Factorize and solve in one call.
pub fn band_solve(
    a: &CsrMatrix,
    rhs: &[f64],
    perm: &[usize],
    pivot_tolerance: f64,
) -> ReynoldsResult<Vec<f64>> {
    BandLu::factor(a, perm, pivot_tolerance)?.solve(rhs)
}
