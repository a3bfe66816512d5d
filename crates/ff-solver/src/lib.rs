//! Explicit moving-boundary solver for a freezing spherical droplet.
//!
//! The droplet radius is normalized to 1 and the frozen shell grows inward from
//! the surface. Each time step first diffuses the nondimensional temperature
//! through the frozen region, then advances the front with the Stefan
//! condition `ds/dt = -(dU/dx)|_front / s`. Results are mapped back to
//! physical units with the conduction timescale `R^2 rho c / k`.

pub mod boundary;
pub mod config;
pub mod dimensional;
pub mod error;
pub mod field;
pub mod front;
pub mod grid;
pub mod solve;
pub mod sweep;

pub use boundary::BoundaryCondition;
pub use config::{
    FreezeConfig, GridSpec, PhysicalParams, STABILITY_LIMIT, SolveSetup, StabilityPolicy,
};
pub use dimensional::{Dimensional, characteristic_time, dimensionalize};
pub use error::{SolverError, SolverResult};
pub use grid::Grid;
pub use solve::{FreezeSolution, StepEvent, solve_freeze, solve_freeze_with_observer};
pub use sweep::{
    SweepDefinition, SweepParameter, SweepPoint, SweepResult, SweepType, run_sweep,
};
