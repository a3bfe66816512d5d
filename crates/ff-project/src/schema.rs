//! Run configuration schema.

use ff_core::units::ice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfigDef {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub grid: GridDef,
    #[serde(default)]
    pub physical: PhysicalDef,
    #[serde(default)]
    pub outer_boundary: BoundaryDef,
    #[serde(default)]
    pub stability: StabilityDef,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

fn default_version() -> u32 {
    crate::validate::LATEST_VERSION
}

fn default_record_every() -> usize {
    1
}

impl RunConfigDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            name: name.into(),
            grid: GridDef::default(),
            physical: PhysicalDef::default(),
            outer_boundary: BoundaryDef::default(),
            stability: StabilityDef::default(),
            record_every: default_record_every(),
            sweep: None,
        }
    }
}

/// Nondimensional grid extents and steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub tstop: f64,
    #[serde(default = "default_xstop")]
    pub xstop: f64,
    pub dt: f64,
    pub dx: f64,
}

fn default_xstop() -> f64 {
    1.0
}

impl Default for GridDef {
    fn default() -> Self {
        Self {
            tstop: 5.0,
            xstop: 1.0,
            dt: 1.125e-5,
            dx: 0.005,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalDef {
    pub epsilon: f64,
    pub radius_m: f64,
    pub density_kg_m3: f64,
    pub specific_heat_j_per_kg_k: f64,
    pub conductivity_w_per_m_k: f64,
}

impl Default for PhysicalDef {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            radius_m: 1e-5,
            density_kg_m3: ice::DENSITY_KG_M3,
            specific_heat_j_per_kg_k: ice::SPECIFIC_HEAT_J_KG_K,
            conductivity_w_per_m_k: ice::CONDUCTIVITY_W_M_K,
        }
    }
}

/// Surface condition. Time-dependent surfaces are only available through the
/// library API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BoundaryDef {
    Constant { value: f64 },
    Reflective,
}

impl Default for BoundaryDef {
    fn default() -> Self {
        Self::Constant { value: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StabilityDef {
    #[default]
    Reject,
    Warn,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameterDef {
    Radius,
    Conductivity,
    Density,
    SpecificHeat,
    Epsilon,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}

/// One-parameter sensitivity sweep, bounds in SI units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub parameter: SweepParameterDef,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    #[serde(default)]
    pub spacing: SpacingDef,
}
