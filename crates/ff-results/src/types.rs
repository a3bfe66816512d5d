//! Result data types.

use ff_solver::FreezeSolution;
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub grid: GridSummary,
    pub t_char_s: f64,
    pub radius_m: f64,
    pub final_front: f64,
    pub frozen_at_step: Option<usize>,
    pub freeze_time_s: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridSummary {
    pub m: usize,
    pub n: usize,
    pub dx: f64,
    pub dt: f64,
    /// Diffusion number
    pub r: f64,
    /// Number of field columns written to `field.jsonl`
    pub recorded_columns: usize,
}

impl RunManifest {
    pub fn from_solution(
        run_id: impl Into<RunId>,
        name: impl Into<String>,
        solver_version: impl Into<String>,
        solution: &FreezeSolution,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            name: name.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: solver_version.into(),
            grid: GridSummary {
                m: solution.m(),
                n: solution.n(),
                dx: solution.dx,
                dt: solution.dt,
                r: solution.r,
                recorded_columns: solution.field_steps.len(),
            },
            t_char_s: solution.t_char_s,
            radius_m: solution.x_phys_m[0],
            final_front: solution.final_front(),
            frozen_at_step: solution.frozen_at_step,
            freeze_time_s: solution.freeze_time_s,
        }
    }
}

/// Front state at one time step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrontRecord {
    pub step: usize,
    pub t: f64,
    pub time_s: f64,
    pub s: f64,
    pub r_i_m: f64,
    pub du_dx: f64,
    pub ds_dt: f64,
    pub front_index: usize,
}

impl FrontRecord {
    pub fn series(solution: &FreezeSolution) -> Vec<Self> {
        (0..solution.n())
            .map(|j| Self {
                step: j,
                t: solution.t[j],
                time_s: solution.t_phys_s[j],
                s: solution.s[j],
                r_i_m: solution.r_i_m[j],
                du_dx: solution.du_dx[j],
                ds_dt: solution.ds_dt[j],
                front_index: solution.front_index[j],
            })
            .collect()
    }
}

/// One recorded temperature column, surface to center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSnapshot {
    pub step: usize,
    pub t: f64,
    pub time_s: f64,
    pub values: Vec<f64>,
}

impl FieldSnapshot {
    pub fn series(solution: &FreezeSolution) -> Vec<Self> {
        solution
            .columns()
            .map(|(step, column)| Self {
                step,
                t: solution.t[step],
                time_s: solution.t_phys_s[step],
                values: column.to_vec(),
            })
            .collect()
    }
}
