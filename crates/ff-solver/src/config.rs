//! Run configuration and pre-solve validation.

use crate::boundary::BoundaryCondition;
use crate::error::{SolverError, SolverResult};
use ff_core::units::{Conductivity, Density, Length, SpecificHeat, ice, m};
use ff_core::{ensure_finite, ensure_positive, is_multiple_of, step_count};
use tracing::{debug, warn};

/// Largest diffusion number for which the explicit scheme is stable.
pub const STABILITY_LIMIT: f64 = 0.5;

/// Nondimensional extents and step sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Stop time
    pub tstop: f64,
    /// Domain length (normalized droplet radius, conventionally 1)
    pub xstop: f64,
    /// Time step
    pub dt: f64,
    /// Space step
    pub dx: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            tstop: 5.0,
            xstop: 1.0,
            dt: 1.125e-5,
            dx: 0.005,
        }
    }
}

/// Droplet material and scaling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParams {
    /// Dimensionless diffusion parameter
    pub epsilon: f64,
    /// Droplet radius R
    pub radius: Length,
    /// Solid density rho_s
    pub density: Density,
    /// Solid specific heat c_s
    pub specific_heat: SpecificHeat,
    /// Solid thermal conductivity k_s
    pub conductivity: Conductivity,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            radius: m(1e-5),
            density: ice::density(),
            specific_heat: ice::specific_heat(),
            conductivity: ice::conductivity(),
        }
    }
}

impl PhysicalParams {
    pub fn validate(&self) -> SolverResult<()> {
        ensure_positive(self.epsilon, "epsilon")?;
        ensure_positive(self.radius.value, "radius R")?;
        ensure_positive(self.density.value, "solid density rho_s")?;
        ensure_positive(self.specific_heat.value, "solid specific heat c_s")?;
        ensure_positive(self.conductivity.value, "solid conductivity k_s")?;
        Ok(())
    }
}

/// What to do when the diffusion number exceeds [`STABILITY_LIMIT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StabilityPolicy {
    /// Refuse to run.
    #[default]
    Reject,
    /// Log a warning and run anyway; the field will oscillate and grow.
    Warn,
}

/// Everything one freeze needs.
#[derive(Clone, Debug)]
pub struct FreezeConfig {
    pub grid: GridSpec,
    pub physical: PhysicalParams,
    pub outer_boundary: BoundaryCondition,
    pub stability: StabilityPolicy,
    /// Keep every N-th field column (the first and last are always kept).
    pub record_every: usize,
}

impl Default for FreezeConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            physical: PhysicalParams::default(),
            outer_boundary: BoundaryCondition::default(),
            stability: StabilityPolicy::default(),
            record_every: 1,
        }
    }
}

/// Derived sizes of a validated run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveSetup {
    /// Number of space points
    pub m: usize,
    /// Number of time points
    pub n: usize,
    /// Diffusion number epsilon*dt/dx^2
    pub r: f64,
}

impl FreezeConfig {
    /// Diffusion number of this configuration.
    pub fn diffusion_number(&self) -> f64 {
        self.physical.epsilon * self.grid.dt / (self.grid.dx * self.grid.dx)
    }

    /// Check every parameter and the stability bound before anything is allocated.
    pub fn validate(&self) -> SolverResult<SolveSetup> {
        let g = &self.grid;
        ensure_positive(g.tstop, "tstop")?;
        ensure_positive(g.xstop, "xstop")?;
        ensure_positive(g.dt, "dt")?;
        ensure_positive(g.dx, "dx")?;

        if g.dt > g.tstop {
            return Err(SolverError::InvalidConfig {
                what: format!("dt = {} must not exceed tstop = {}", g.dt, g.tstop),
            });
        }
        if !is_multiple_of(g.xstop, g.dx, 1e-6) {
            return Err(SolverError::InvalidConfig {
                what: format!(
                    "xstop = {} must be an integer multiple of dx = {}",
                    g.xstop, g.dx
                ),
            });
        }
        let m = step_count(g.xstop, g.dx) + 1;
        if m < 3 {
            return Err(SolverError::InvalidConfig {
                what: format!(
                    "dx = {} leaves {} space points; at least 3 are needed for an interior cell",
                    g.dx, m
                ),
            });
        }
        let n = step_count(g.tstop, g.dt) + 1;

        self.physical.validate()?;

        if self.record_every == 0 {
            return Err(SolverError::InvalidConfig {
                what: "record_every must be at least 1".to_string(),
            });
        }
        if let BoundaryCondition::Constant(v) = self.outer_boundary {
            ensure_finite(v, "outer boundary value")?;
        }

        let r = self.diffusion_number();
        if r > STABILITY_LIMIT {
            match self.stability {
                StabilityPolicy::Reject => {
                    return Err(SolverError::Unstable {
                        r,
                        limit: STABILITY_LIMIT,
                    });
                }
                StabilityPolicy::Warn => {
                    warn!(
                        r,
                        limit = STABILITY_LIMIT,
                        "diffusion number exceeds explicit stability limit; results will be invalid"
                    );
                }
            }
        }

        debug!(m, n, r, "freeze setup validated");
        Ok(SolveSetup { m, n, r })
    }
}
