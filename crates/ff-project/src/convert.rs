//! Conversion from file schema into solver types.

use crate::schema::{BoundaryDef, RunConfigDef, SpacingDef, StabilityDef, SweepDef, SweepParameterDef};
use ff_core::units::{j_per_kg_k, kg_per_m3, m, w_per_m_k};
use ff_solver::{
    BoundaryCondition, FreezeConfig, GridSpec, PhysicalParams, SolverResult, StabilityPolicy,
    SweepDefinition, SweepParameter, SweepType,
};

pub fn to_freeze_config(def: &RunConfigDef) -> FreezeConfig {
    let g = &def.grid;
    let p = &def.physical;
    FreezeConfig {
        grid: GridSpec {
            tstop: g.tstop,
            xstop: g.xstop,
            dt: g.dt,
            dx: g.dx,
        },
        physical: PhysicalParams {
            epsilon: p.epsilon,
            radius: m(p.radius_m),
            density: kg_per_m3(p.density_kg_m3),
            specific_heat: j_per_kg_k(p.specific_heat_j_per_kg_k),
            conductivity: w_per_m_k(p.conductivity_w_per_m_k),
        },
        outer_boundary: match def.outer_boundary {
            BoundaryDef::Constant { value } => BoundaryCondition::Constant(value),
            BoundaryDef::Reflective => BoundaryCondition::Reflective,
        },
        stability: match def.stability {
            StabilityDef::Reject => StabilityPolicy::Reject,
            StabilityDef::Warn => StabilityPolicy::Warn,
        },
        record_every: def.record_every,
    }
}

pub fn to_sweep_definition(def: &SweepDef) -> SolverResult<SweepDefinition> {
    let parameter = match def.parameter {
        SweepParameterDef::Radius => SweepParameter::Radius,
        SweepParameterDef::Conductivity => SweepParameter::Conductivity,
        SweepParameterDef::Density => SweepParameter::Density,
        SweepParameterDef::SpecificHeat => SweepParameter::SpecificHeat,
        SweepParameterDef::Epsilon => SweepParameter::Epsilon,
    };
    let sweep_type = match def.spacing {
        SpacingDef::Linear => SweepType::Linear,
        SpacingDef::Logarithmic => SweepType::Logarithmic,
    };
    SweepDefinition::new(parameter, def.start, def.end, def.num_points, sweep_type)
}
