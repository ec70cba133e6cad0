// ─────────────────────────────────────────────────────────────────────
// Reynolds Bearing — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{ReynoldsError, ReynoldsResult};
use crate::state::BearingGrid;

/// Physical and discretisation parameters of a journal bearing.
/// JSON keys use the short physical symbols (D, B, s, F, f, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingParameters {
    /// Journal diameter D [m]
    #[serde(rename = "D")]
    pub diameter: f64,
    /// Axial bearing width B [m]
    #[serde(rename = "B")]
    pub width: f64,
    /// Radial clearance s [m]
    #[serde(rename = "s")]
    pub clearance: f64,
    /// Target load magnitude F [N], applied along +y
    #[serde(rename = "F")]
    pub load: f64,
    /// Rotation frequency f [Hz]
    #[serde(rename = "f")]
    pub frequency: f64,
    /// Dynamic viscosity [Pa·s]
    pub eta: f64,
    /// Ambient pressure [Pa]
    pub p_amb: f64,
    pub n_theta: usize,
    pub n_z: usize,
    #[serde(default)]
    pub theta_min: f64,
    #[serde(default = "default_theta_max")]
    pub theta_max: f64,
}

fn default_theta_max() -> f64 {
    2.0 * PI
}

impl BearingParameters {
    /// Full-circumference bearing, theta in [0, 2π).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        diameter: f64,
        width: f64,
        clearance: f64,
        load: f64,
        frequency: f64,
        eta: f64,
        p_amb: f64,
        n_theta: usize,
        n_z: usize,
    ) -> Self {
        BearingParameters {
            diameter,
            width,
            clearance,
            load,
            frequency,
            eta,
            p_amb,
            n_theta,
            n_z,
            theta_min: 0.0,
            theta_max: default_theta_max(),
        }
    }

    pub fn with_theta_range(mut self, theta_min: f64, theta_max: f64) -> Self {
        self.theta_min = theta_min;
        self.theta_max = theta_max;
        self
    }

    /// Reject negative or non-finite physical values and grid sizes that
    /// leave dtheta or dz undefined.
    pub fn validate(&self) -> ReynoldsResult<()> {
        let physical = [
            ("D", self.diameter),
            ("B", self.width),
            ("s", self.clearance),
            ("F", self.load),
            ("f", self.frequency),
            ("eta", self.eta),
            ("p_amb", self.p_amb),
            ("theta_min", self.theta_min),
            ("theta_max", self.theta_max),
        ];
        for (name, value) in physical {
            if !value.is_finite() || value < 0.0 {
                return Err(ReynoldsError::InvalidParameter { name, value });
            }
        }
        if self.n_theta < 1 {
            return Err(ReynoldsError::InvalidGrid(format!(
                "n_theta must be >= 1, got {}",
                self.n_theta
            )));
        }
        if self.n_z < 2 {
            return Err(ReynoldsError::InvalidGrid(format!(
                "n_z must be >= 2 (dz = B / (n_z - 1)), got {}",
                self.n_z
            )));
        }
        Ok(())
    }

    /// Validate and derive the computational grid.
    pub fn create_grid(&self) -> ReynoldsResult<BearingGrid> {
        self.validate()?;
        BearingGrid::new(self)
    }
}

/// Node ordering handed to the banded factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingKind {
    /// k = j * n_theta + i. Half-bandwidth n_theta including the periodic seam.
    #[default]
    AxialMajor,
    /// Reverse Cuthill-McKee on the symmetrised sparsity pattern.
    ReverseCuthillMckee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub ordering: OrderingKind,
    /// Smallest admissible |pivot| after row equilibration (default: 1e-12).
    #[serde(default = "default_pivot_tolerance")]
    pub pivot_tolerance: f64,
}

fn default_pivot_tolerance() -> f64 {
    1e-12
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            ordering: OrderingKind::default(),
            pivot_tolerance: default_pivot_tolerance(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> ReynoldsResult<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(ReynoldsError::ConfigError(format!(
                "pivot_tolerance must be finite and >= 0, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

/// Top-level bearing configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingConfig {
    pub bearing: BearingParameters,
    #[serde(default)]
    pub solver: SolverConfig,
}

impl BearingConfig {
    /// Load from a JSON file. Values are not validated here.
    pub fn from_file(path: &str) -> ReynoldsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> ReynoldsResult<()> {
        self.bearing.validate()?;
        self.solver.validate()
    }
}
