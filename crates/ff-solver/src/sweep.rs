//! Parameter sweeps for sensitivity analysis.
//!
//! Sweeps vary one physical parameter and report how long the droplet takes to
//! solidify. Radius, density, specific heat and conductivity only enter through
//! the timescale, so those sweeps solve once and rescale; epsilon changes the
//! nondimensional problem and is solved per point on the rayon pool.

use crate::config::{FreezeConfig, PhysicalParams};
use crate::error::{SolverError, SolverResult};
use crate::solve::{FreezeSolution, solve_freeze};
use ff_core::units::{j_per_kg_k, kg_per_m3, m, w_per_m_k};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParameter {
    /// Droplet radius (m)
    Radius,
    /// Solid thermal conductivity (W/m/K)
    Conductivity,
    /// Solid density (kg/m^3)
    Density,
    /// Solid specific heat (J/kg/K)
    SpecificHeat,
    /// Dimensionless diffusion parameter
    Epsilon,
}

impl SweepParameter {
    /// Whether the parameter changes the nondimensional solve.
    pub fn affects_nondimensional_solve(self) -> bool {
        matches!(self, Self::Epsilon)
    }

    pub fn apply(self, physical: &mut PhysicalParams, value: f64) {
        match self {
            Self::Radius => physical.radius = m(value),
            Self::Conductivity => physical.conductivity = w_per_m_k(value),
            Self::Density => physical.density = kg_per_m3(value),
            Self::SpecificHeat => physical.specific_heat = j_per_kg_k(value),
            Self::Epsilon => physical.epsilon = value,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Radius => "m",
            Self::Conductivity => "W/m/K",
            Self::Density => "kg/m^3",
            Self::SpecificHeat => "J/kg/K",
            Self::Epsilon => "-",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Conductivity => "conductivity",
            Self::Density => "density",
            Self::SpecificHeat => "specific_heat",
            Self::Epsilon => "epsilon",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SweepParameter {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radius" => Ok(Self::Radius),
            "conductivity" => Ok(Self::Conductivity),
            "density" => Ok(Self::Density),
            "specific_heat" => Ok(Self::SpecificHeat),
            "epsilon" => Ok(Self::Epsilon),
            other => Err(SolverError::InvalidConfig {
                what: format!("unknown sweep parameter '{other}'"),
            }),
        }
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Definition of a single parameter sweep, bounds in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> SolverResult<Self> {
        if num_points < 2 {
            return Err(SolverError::InvalidConfig {
                what: "sweep must have at least 2 points".to_string(),
            });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SolverError::InvalidConfig {
                what: format!("sweep bounds must be finite ({start} .. {end})"),
            });
        }
        if (start - end).abs() < 1e-300 {
            return Err(SolverError::InvalidConfig {
                what: "sweep start and end must differ".to_string(),
            });
        }
        Ok(Self {
            parameter,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points, {})",
            self.parameter,
            self.start,
            self.end,
            self.parameter.unit(),
            self.num_points,
            self.sweep_type
        )
    }
}

/// Outcome of one sweep point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Swept parameter value (SI)
    pub value: f64,
    /// Conduction timescale (s)
    pub t_char_s: f64,
    /// Nondimensional front position at the end of the run
    pub final_front: f64,
    /// Physical front radius at the end of the run (m)
    pub final_radius_m: f64,
    /// Step at which the droplet was fully frozen
    pub frozen_at_step: Option<usize>,
    /// Physical time to solidify (s)
    pub freeze_time_s: Option<f64>,
}

/// Result of a sweep, one point per generated value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Freeze times of the points that solidified.
    pub fn freeze_times_s(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.freeze_time_s).collect()
    }
}

fn point_from(
    value: f64,
    solution: &FreezeSolution,
    physical: &PhysicalParams,
) -> SolverResult<SweepPoint> {
    let dims = solution.redimensionalize(physical)?;
    let final_front = solution.final_front();
    Ok(SweepPoint {
        value,
        t_char_s: dims.t_char_s,
        final_front,
        final_radius_m: final_front * physical.radius.value,
        frozen_at_step: solution.frozen_at_step,
        freeze_time_s: solution.frozen_at_step.map(|j| dims.t_phys_s[j]),
    })
}

/// Run `def` starting from `base`.
///
/// Only the first and last field columns are kept for each solve.
pub fn run_sweep(base: &FreezeConfig, def: &SweepDefinition) -> SolverResult<SweepResult> {
    let mut base = base.clone();
    base.record_every = usize::MAX;
    let values = def.generate_points();
    debug!(%def, "running sweep");

    let points = if def.parameter.affects_nondimensional_solve() {
        values
            .par_iter()
            .map(|&value| {
                let mut cfg = base.clone();
                def.parameter.apply(&mut cfg.physical, value);
                let solution = solve_freeze(&cfg)?;
                point_from(value, &solution, &cfg.physical)
            })
            .collect::<SolverResult<Vec<_>>>()?
    } else {
        let solution = solve_freeze(&base)?;
        values
            .iter()
            .map(|&value| {
                let mut physical = base.physical;
                def.parameter.apply(&mut physical, value);
                physical.validate()?;
                point_from(value, &solution, &physical)
            })
            .collect::<SolverResult<Vec<_>>>()?
    };

    Ok(SweepResult {
        parameter: def.parameter,
        points,
    })
}
