// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Sparse Storage
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Triplet (COO) builder and compressed sparse row matrix.
//!
//! Assembly pushes `(row, col, value)` entries in any order; `build()`
//! sorts them, sums duplicates and freezes the result into CSR. The CSR
//! matrix is never modified afterwards.

use ndarray::Array2;
use reynolds_types::error::{ReynoldsError, ReynoldsResult};

use crate::ordering::invert_permutation;

/// Accumulates sparse entries before compression.
#[derive(Debug, Clone)]
pub struct TripletBuilder {
    nrows: usize,
    ncols: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl TripletBuilder {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::with_capacity(nrows, ncols, 0)
    }

    pub fn with_capacity(nrows: usize, ncols: usize, nnz: usize) -> Self {
        TripletBuilder {
            nrows,
            ncols,
            entries: Vec::with_capacity(nnz),
        }
    }

    /// Add `value` at (row, col). Repeated positions are summed by `build()`.
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> ReynoldsResult<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(ReynoldsError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        self.entries.push((row, col, value));
        Ok(())
    }

    /// Number of pushed triplets (before duplicate merging).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compress into CSR with sorted column indices and summed duplicates.
    /// Explicit zeros are kept as structural entries.
    pub fn build(self) -> CsrMatrix {
        let TripletBuilder {
            nrows,
            ncols,
            mut entries,
        } = self;
        entries.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut row_ptr = vec![0usize; nrows + 1];
        let mut col_idx = Vec::with_capacity(entries.len());
        let mut values: Vec<f64> = Vec::with_capacity(entries.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in entries {
            if last == Some((row, col)) {
                if let Some(v) = values.last_mut() {
                    *v += value;
                }
                continue;
            }
            col_idx.push(col);
            values.push(value);
            row_ptr[row + 1] += 1;
            last = Some((row, col));
        }
        for r in 0..nrows {
            row_ptr[r + 1] += row_ptr[r];
        }

        CsrMatrix {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        }
    }
}

/// Immutable compressed sparse row matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Stored entries, explicit zeros included.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Stored value at (row, col), 0.0 when absent or out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.nrows {
            return 0.0;
        }
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        match self.col_idx[start..end].binary_search(&col) {
            Ok(pos) => self.values[start + pos],
            Err(_) => 0.0,
        }
    }

    /// True if (row, col) is a structural entry.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.nrows
            && self.col_idx[self.row_ptr[row]..self.row_ptr[row + 1]]
                .binary_search(&col)
                .is_ok()
    }

    /// `(col, value)` pairs of one row in ascending column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// y = A x
    pub fn matvec(&self, x: &[f64]) -> ReynoldsResult<Vec<f64>> {
        if x.len() != self.ncols {
            return Err(ReynoldsError::DimensionMismatch {
                expected: self.ncols,
                got: x.len(),
            });
        }
        Ok((0..self.nrows)
            .map(|r| self.row(r).map(|(c, v)| v * x[c]).sum::<f64>())
            .collect())
    }

    /// ‖A x − b‖∞
    pub fn residual_norm(&self, x: &[f64], b: &[f64]) -> ReynoldsResult<f64> {
        if b.len() != self.nrows {
            return Err(ReynoldsError::DimensionMismatch {
                expected: self.nrows,
                got: b.len(),
            });
        }
        let ax = self.matvec(x)?;
        Ok(ax
            .iter()
            .zip(b)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max))
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.nrows, self.ncols));
        for r in 0..self.nrows {
            for (c, v) in self.row(r) {
                dense[[r, c]] = v;
            }
        }
        dense
    }

    /// Lower and upper half-bandwidth `(kl, ku)` of P·A·Pᵀ, where
    /// `perm[new] = old`.
    pub fn bandwidth(&self, perm: &[usize]) -> (usize, usize) {
        self.bandwidth_inverse(&invert_permutation(perm))
    }

    /// Same as [`CsrMatrix::bandwidth`] but takes `iperm[old] = new`.
    pub(crate) fn bandwidth_inverse(&self, iperm: &[usize]) -> (usize, usize) {
        let mut kl = 0;
        let mut ku = 0;
        for r in 0..self.nrows {
            let nr = iperm[r];
            for (c, _) in self.row(r) {
                let nc = iperm[c];
                if nr > nc {
                    kl = kl.max(nr - nc);
                } else {
                    ku = ku.max(nc - nr);
                }
            }
        }
        (kl, ku)
    }
}
