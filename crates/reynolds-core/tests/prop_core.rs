// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Property-Based Tests (proptest) for reynolds-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for reynolds-core using proptest.
//!
//! Covers: film thickness bounds, assembly structure, cavitation floor,
//! Dirichlet edges, load of the concentric journal, batch sweeps.

use proptest::prelude::*;
use reynolds_core::sweep::residual_sweep;
use reynolds_core::Bearing;
use reynolds_types::config::BearingParameters;
use std::f64::consts::PI;

const P_AMB: f64 = 101_325.0;

fn bearing(n_theta: usize, n_z: usize, p_amb: f64) -> Bearing {
    Bearing::new(BearingParameters::new(
        0.05, 0.02, 1e-4, 500.0, 50.0, 0.02, p_amb, n_theta, n_z,
    ))
    .unwrap()
}

// ── Film Thickness Properties ────────────────────────────────────────

proptest! {
    /// s(1 − ε) ≤ h ≤ s(1 + ε) for every station.
    #[test]
    fn film_within_eccentric_bounds(
        n_theta in 1usize..64,
        eps in 0.0f64..0.99,
        beta in -PI..PI,
    ) {
        let b = bearing(n_theta, 3, P_AMB);
        let h = b.film_thickness(eps, beta);
        prop_assert_eq!(h.len(), n_theta);
        let s = b.clearance();
        for &v in h.iter() {
            prop_assert!(v >= s * (1.0 - eps) - 1e-18);
            prop_assert!(v <= s * (1.0 + eps) + 1e-18);
        }
    }

    /// ε = 0 gives a uniform film whatever β is.
    #[test]
    fn concentric_film_is_clearance(
        n_theta in 1usize..64,
        beta in -10.0f64..10.0,
    ) {
        let b = bearing(n_theta, 3, P_AMB);
        prop_assert!(b.film_thickness(0.0, beta).iter().all(|&v| v == b.clearance()));
    }
}

// ── Assembly Properties ──────────────────────────────────────────────

proptest! {
    /// Boundary rows are identity rows, interior rows sum to zero.
    #[test]
    fn assembled_rows_are_consistent(
        n_theta in 3usize..24,
        n_z in 2usize..10,
        eps in 0.0f64..0.9,
        beta in -PI..PI,
    ) {
        let b = bearing(n_theta, n_z, P_AMB);
        let a = b.system_matrix(eps, beta).unwrap();
        let rhs = b.rhs(eps, beta).unwrap();
        prop_assert_eq!(a.nrows(), b.n());
        prop_assert_eq!(rhs.len(), b.n());
        let g = b.grid();
        for k in 0..b.n() {
            let (_, j) = g.node(k);
            let row: Vec<(usize, f64)> = a.row(k).collect();
            if g.is_axial_boundary(j) {
                prop_assert_eq!(row, vec![(k, 1.0)]);
                prop_assert_eq!(rhs[k], P_AMB);
            } else {
                let sum: f64 = row.iter().map(|&(_, v)| v).sum();
                let diag = a.get(k, k).abs();
                prop_assert!(sum.abs() < 1e-9 * diag, "row {} sums to {}", k, sum);
            }
        }
    }
}

// ── Pressure Properties ──────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every entry ≥ p_amb and the axial edges hold p_amb exactly.
    #[test]
    fn pressure_respects_cavitation_floor(
        n_theta in 4usize..32,
        n_z in 3usize..10,
        eps in 0.0f64..0.9,
        beta in -PI..PI,
        p_amb in 0.0f64..2.0e5,
    ) {
        let b = bearing(n_theta, n_z, p_amb);
        let p = b.pressure(eps, beta).unwrap();
        prop_assert_eq!(p.dim(), (n_theta, n_z));
        prop_assert!(p.iter().all(|&v| v >= p_amb));
        for i in 0..n_theta {
            prop_assert_eq!(p[[i, 0]], p_amb);
            prop_assert_eq!(p[[i, n_z - 1]], p_amb);
        }
    }

    /// The concentric journal carries no load: residual ≈ (0, −F).
    #[test]
    fn concentric_residual_is_minus_target(
        n_theta in 4usize..32,
        n_z in 3usize..10,
        beta in -PI..PI,
    ) {
        let b = bearing(n_theta, n_z, P_AMB);
        let (rx, ry) = b.residual(0.0, beta).unwrap();
        let scale = 1e-6 * P_AMB * b.grid().cell_area() * b.n() as f64;
        prop_assert!(rx.abs() < scale);
        prop_assert!((ry + b.target_load()).abs() < scale);
    }

    /// Friction power is positive for physical eccentricities.
    #[test]
    fn friction_power_positive(
        eps in 0.0f64..0.8,
        beta in -PI..PI,
    ) {
        let b = bearing(24, 7, P_AMB);
        let power = b.friction_power(eps, beta).unwrap();
        prop_assert!(power.is_finite() && power > 0.0);
    }
}

// ── Sweep Properties ─────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Sweeps keep input order and agree with single queries.
    #[test]
    fn residual_sweep_preserves_order(
        points in prop::collection::vec((0.0f64..0.8, -PI..PI), 0..6),
    ) {
        let b = bearing(16, 5, P_AMB);
        let swept = residual_sweep(&b, &points);
        prop_assert_eq!(swept.len(), points.len());
        for (got, &(eps, beta)) in swept.iter().zip(points.iter()) {
            let want = b.residual(eps, beta).unwrap();
            prop_assert_eq!(got.as_ref().unwrap(), &want);
        }
    }
}
