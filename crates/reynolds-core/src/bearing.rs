// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Journal Bearing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bearing: validated parameters, grid and the per-(ε, β) queries.
//!
//! Every query rebuilds film → system → pressure from scratch; nothing is
//! cached, so a shared `&Bearing` can be queried from several threads.

use crate::assembly::{assemble, assemble_matrix, assemble_rhs, ReynoldsSystem};
use crate::film::{film_thickness, is_physical_eccentricity};
use crate::integrals;
use crate::pressure::{solve_pressure, PressureSolution};
use ndarray::{Array1, Array2};
use reynolds_math::sparse::CsrMatrix;
use reynolds_types::config::{BearingConfig, BearingParameters, SolverConfig};
use reynolds_types::error::ReynoldsResult;
use reynolds_types::state::BearingGrid;
use tracing::warn;

/// Hydrodynamic journal bearing.
#[derive(Debug, Clone)]
pub struct Bearing {
    params: BearingParameters,
    grid: BearingGrid,
    solver: SolverConfig,
}

impl Bearing {
    /// Validate `params` and build the grid, default solver settings.
    pub fn new(params: BearingParameters) -> ReynoldsResult<Self> {
        Self::with_solver(params, SolverConfig::default())
    }

    pub fn with_solver(params: BearingParameters, solver: SolverConfig) -> ReynoldsResult<Self> {
        solver.validate()?;
        let grid = params.create_grid()?;
        Ok(Bearing {
            params,
            grid,
            solver,
        })
    }

    pub fn from_config(config: BearingConfig) -> ReynoldsResult<Self> {
        Self::with_solver(config.bearing, config.solver)
    }

    /// Create a bearing from a JSON config file.
    pub fn from_file(path: &str) -> ReynoldsResult<Self> {
        let config = BearingConfig::from_file(path)?;
        Self::from_config(config)
    }

    // ── Grid and parameter accessors ────────────────────────────────

    /// Journal radius R = D/2.
    pub fn radius(&self) -> f64 {
        self.grid.r
    }

    pub fn clearance(&self) -> f64 {
        self.params.clearance
    }

    /// Target load F, acting along +y.
    pub fn target_load(&self) -> f64 {
        self.params.load
    }

    /// Angular speed ω = 2πf.
    pub fn omega(&self) -> f64 {
        self.grid.omega
    }

    pub fn eta(&self) -> f64 {
        self.params.eta
    }

    pub fn p_amb(&self) -> f64 {
        self.params.p_amb
    }

    pub fn n_theta(&self) -> usize {
        self.grid.n_theta
    }

    pub fn n_z(&self) -> usize {
        self.grid.n_z
    }

    /// Number of unknowns n_theta · n_z.
    pub fn n(&self) -> usize {
        self.grid.n
    }

    pub fn dtheta(&self) -> f64 {
        self.grid.dtheta
    }

    pub fn dz(&self) -> f64 {
        self.grid.dz
    }

    pub fn theta(&self) -> &Array1<f64> {
        &self.grid.theta
    }

    pub fn z(&self) -> &Array1<f64> {
        &self.grid.z
    }

    pub fn diameter(&self) -> f64 {
        self.params.diameter
    }

    pub fn width(&self) -> f64 {
        self.params.width
    }

    pub fn frequency(&self) -> f64 {
        self.params.frequency
    }

    pub fn theta_min(&self) -> f64 {
        self.params.theta_min
    }

    pub fn theta_max(&self) -> f64 {
        self.params.theta_max
    }

    pub fn params(&self) -> &BearingParameters {
        &self.params
    }

    pub fn grid(&self) -> &BearingGrid {
        &self.grid
    }

    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Film thickness h[i] = s(1 − ε cos(θ[i] − β)).
    pub fn film_thickness(&self, epsilon: f64, beta: f64) -> Array1<f64> {
        if !is_physical_eccentricity(epsilon) {
            warn!(epsilon, beta, "eccentricity outside [0, 1), film may vanish");
        }
        film_thickness(&self.grid, self.params.clearance, epsilon, beta)
    }

    /// Coefficient matrix A (n × n) in idx(i, j) numbering.
    pub fn system_matrix(&self, epsilon: f64, beta: f64) -> ReynoldsResult<CsrMatrix> {
        let h = self.film_thickness(epsilon, beta);
        assemble_matrix(&self.grid, &h)
    }

    /// Right-hand side b (n).
    pub fn rhs(&self, epsilon: f64, beta: f64) -> ReynoldsResult<Array1<f64>> {
        let h = self.film_thickness(epsilon, beta);
        assemble_rhs(&self.grid, &h, self.params.eta, self.params.p_amb)
    }

    pub fn system(&self, epsilon: f64, beta: f64) -> ReynoldsResult<ReynoldsSystem> {
        let h = self.film_thickness(epsilon, beta);
        assemble(&self.grid, &h, self.params.eta, self.params.p_amb)
    }

    /// Pressure field with solver diagnostics.
    pub fn pressure_solution(&self, epsilon: f64, beta: f64) -> ReynoldsResult<PressureSolution> {
        let system = self.system(epsilon, beta)?;
        solve_pressure(&self.grid, &system, self.params.p_amb, &self.solver)
    }

    /// Cavitated pressure field [n_theta, n_z], every entry ≥ p_amb.
    pub fn pressure(&self, epsilon: f64, beta: f64) -> ReynoldsResult<Array2<f64>> {
        Ok(self.pressure_solution(epsilon, beta)?.field)
    }

    /// Resultant film load (Lx, Ly).
    pub fn load(&self, epsilon: f64, beta: f64) -> ReynoldsResult<(f64, f64)> {
        let p = self.pressure(epsilon, beta)?;
        integrals::load(&self.grid, &p)
    }

    /// (Lx, Ly − F); zero at equilibrium.
    pub fn residual(&self, epsilon: f64, beta: f64) -> ReynoldsResult<(f64, f64)> {
        let load = self.load(epsilon, beta)?;
        Ok(integrals::load_residual(load, self.params.load))
    }

    pub fn shear_stress(&self, epsilon: f64, beta: f64) -> ReynoldsResult<Array2<f64>> {
        let h = self.film_thickness(epsilon, beta);
        let system = assemble(&self.grid, &h, self.params.eta, self.params.p_amb)?;
        let solution = solve_pressure(&self.grid, &system, self.params.p_amb, &self.solver)?;
        integrals::shear_stress(&self.grid, &h, &solution.field, self.params.eta)
    }

    /// Friction power loss P = Σ ωR·τ·dA.
    pub fn friction_power(&self, epsilon: f64, beta: f64) -> ReynoldsResult<f64> {
        let tau = self.shear_stress(epsilon, beta)?;
        integrals::friction_power(&self.grid, &tau)
    }
}
