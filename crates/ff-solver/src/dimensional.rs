//! Mapping nondimensional results back to physical units.

use crate::config::PhysicalParams;
use crate::error::{SolverError, SolverResult};
use ff_core::units::{Time, s};

/// Physical-unit view of a nondimensional run.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimensional {
    /// Conduction timescale R^2 rho_s c_s / k_s (s)
    pub t_char_s: f64,
    /// Physical time (s)
    pub t_phys_s: Vec<f64>,
    /// Physical radial coordinate (m)
    pub x_phys_m: Vec<f64>,
    /// Physical front radius (m)
    pub r_i_m: Vec<f64>,
}

impl Dimensional {
    pub fn t_char(&self) -> Time {
        s(self.t_char_s)
    }
}

/// Time for heat to diffuse across the droplet, `R^2 rho_s c_s / k_s`.
pub fn characteristic_time(p: &PhysicalParams) -> SolverResult<Time> {
    let k = p.conductivity.value;
    if k == 0.0 || !k.is_finite() {
        return Err(SolverError::InvalidConfig {
            what: format!("conductivity k_s = {k} cannot scale time"),
        });
    }
    let r = p.radius.value;
    Ok(s(r * r * p.density.value * p.specific_heat.value / k))
}

/// Dimensionalize time, space and front-position series.
pub fn dimensionalize(
    t: &[f64],
    x: &[f64],
    front: &[f64],
    p: &PhysicalParams,
) -> SolverResult<Dimensional> {
    if p.epsilon == 0.0 || !p.epsilon.is_finite() {
        return Err(SolverError::InvalidConfig {
            what: format!("epsilon = {} cannot scale time", p.epsilon),
        });
    }
    let t_char_s = characteristic_time(p)?.value;
    let time_scale = t_char_s / p.epsilon;
    let radius = p.radius.value;

    Ok(Dimensional {
        t_char_s,
        t_phys_s: t.iter().map(|&tj| tj * time_scale).collect(),
        x_phys_m: x.iter().map(|&xi| xi * radius).collect(),
        r_i_m: front.iter().map(|&sj| sj * radius).collect(),
    })
}
