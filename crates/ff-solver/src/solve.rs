//! Time loop coupling the field and front stages.

use crate::config::{FreezeConfig, PhysicalParams};
use crate::dimensional::{Dimensional, dimensionalize};
use crate::error::SolverResult;
use crate::field::advance_field;
use crate::front::advance_front;
use crate::grid::Grid;
use ff_core::units::{Time, s};
use nalgebra::DMatrix;
use tracing::{debug, info};

/// A completed time slice, handed to observers as soon as it is written.
#[derive(Clone, Copy, Debug)]
pub struct StepEvent<'a> {
    /// Time index of this column
    pub step: usize,
    /// Nondimensional time
    pub t: f64,
    /// Temperature column for `step`
    pub column: &'a [f64],
    /// Front position at `step`
    pub front: f64,
    /// Grid index nearest to `front`
    pub front_index: usize,
    /// True once the front has been pinned at the center
    pub frozen: bool,
}

/// Full history of one freeze.
#[derive(Clone, Debug)]
pub struct FreezeSolution {
    /// Nondimensional time grid (length N)
    pub t: Vec<f64>,
    /// Nondimensional radial grid, surface to center (length M)
    pub x: Vec<f64>,
    /// Recorded temperature columns (M rows, one column per entry of `field_steps`)
    pub field: DMatrix<f64>,
    /// Time index of each recorded column
    pub field_steps: Vec<usize>,
    /// Front position
    pub s: Vec<f64>,
    /// Interface gradient computed at step j
    pub du_dx: Vec<f64>,
    /// Stefan front velocity computed at step j. Still recorded once the front
    /// is pinned at `frozen_at_step`, although `s` no longer moves.
    pub ds_dt: Vec<f64>,
    /// Front cell index at step j
    pub front_index: Vec<usize>,
    /// Diffusion number
    pub r: f64,
    pub dx: f64,
    pub dt: f64,
    /// First step at which the front was pinned at `dx`
    pub frozen_at_step: Option<usize>,
    /// Conduction timescale (s)
    pub t_char_s: f64,
    /// Physical time (s)
    pub t_phys_s: Vec<f64>,
    /// Physical radial coordinate (m)
    pub x_phys_m: Vec<f64>,
    /// Physical front radius (m)
    pub r_i_m: Vec<f64>,
    /// Physical time at which the droplet was fully frozen (s)
    pub freeze_time_s: Option<f64>,
}

impl FreezeSolution {
    pub fn m(&self) -> usize {
        self.x.len()
    }

    pub fn n(&self) -> usize {
        self.t.len()
    }

    /// Recorded temperature column for time index `step`, if it was kept.
    pub fn column(&self, step: usize) -> Option<&[f64]> {
        let k = self.field_steps.binary_search(&step).ok()?;
        let m = self.m();
        Some(&self.field.as_slice()[k * m..(k + 1) * m])
    }

    /// Iterate recorded columns as `(step, column)`.
    pub fn columns(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        let m = self.m();
        self.field_steps
            .iter()
            .copied()
            .zip(self.field.as_slice().chunks_exact(m))
    }

    pub fn final_front(&self) -> f64 {
        self.s[self.s.len() - 1]
    }

    pub fn t_char(&self) -> Time {
        s(self.t_char_s)
    }

    /// Dimensionalize this run again with other physical parameters.
    ///
    /// Only valid for parameters that leave the nondimensional problem
    /// unchanged, i.e. anything except `epsilon` and the grid.
    pub fn redimensionalize(&self, physical: &PhysicalParams) -> SolverResult<Dimensional> {
        dimensionalize(&self.t, &self.x, &self.s, physical)
    }
}

/// Solve the freezing-droplet problem.
pub fn solve_freeze(config: &FreezeConfig) -> SolverResult<FreezeSolution> {
    solve_freeze_with_observer(config, |_| {})
}

/// Solve while reporting every completed column to `observer`.
///
/// The observer sees step 0 (the initial condition) and each later column
/// exactly once, after it has been fully written.
pub fn solve_freeze_with_observer<F>(
    config: &FreezeConfig,
    mut observer: F,
) -> SolverResult<FreezeSolution>
where
    F: FnMut(StepEvent<'_>),
{
    let setup = config.validate()?;
    let grid = Grid::new(&config.grid);
    let (m, n, r) = (setup.m, setup.n, setup.r);
    let (dt, dx) = (grid.dt, grid.dx);

    let stride = config.record_every;
    let field_steps: Vec<usize> = (0..n)
        .filter(|&j| j % stride == 0 || j == n - 1)
        .collect();
    let mut field = DMatrix::<f64>::zeros(m, field_steps.len());
    let mut recorded = 0usize;

    let mut s_hist = vec![0.0; n];
    let mut du_dx = vec![0.0; n];
    let mut ds_dt = vec![0.0; n];
    let mut front_index = vec![0usize; n];
    let mut frozen_at_step = None;

    s_hist[0] = 1.0;
    let mut prev = grid.initial_column(s_hist[0]);
    let mut next = vec![0.0; m];

    let mut record = |step: usize, column: &[f64], field: &mut DMatrix<f64>| {
        if recorded < field_steps.len() && field_steps[recorded] == step {
            field.as_mut_slice()[recorded * m..(recorded + 1) * m].copy_from_slice(column);
            recorded += 1;
        }
    };

    record(0, &prev, &mut field);
    observer(StepEvent {
        step: 0,
        t: grid.t[0],
        column: &prev,
        front: s_hist[0],
        front_index: grid.front_index(s_hist[0]),
        frozen: false,
    });

    for j in 0..n - 1 {
        let i_s = grid.front_index(s_hist[j]);
        front_index[j] = i_s;

        let outer = config.outer_boundary.imposed_value(grid.t[j + 1])?;
        advance_field(&prev, &mut next, i_s, r, outer);

        let step = advance_front(&grid.x, &next, i_s, s_hist[j], dt, dx);
        du_dx[j] = step.du_dx;
        ds_dt[j] = step.ds_dt;

        s_hist[j + 1] = if frozen_at_step.is_some() {
            dx
        } else {
            if step.floored {
                frozen_at_step = Some(j + 1);
                info!(step = j + 1, t = grid.t[j + 1], "front reached the center");
            }
            step.s_next
        };

        std::mem::swap(&mut prev, &mut next);
        record(j + 1, &prev, &mut field);
        observer(StepEvent {
            step: j + 1,
            t: grid.t[j + 1],
            column: &prev,
            front: s_hist[j + 1],
            front_index: grid.front_index(s_hist[j + 1]),
            frozen: frozen_at_step.is_some(),
        });
    }
    front_index[n - 1] = grid.front_index(s_hist[n - 1]);

    let dims = dimensionalize(&grid.t, &grid.x, &s_hist, &config.physical)?;
    let freeze_time_s = frozen_at_step.map(|j| dims.t_phys_s[j]);
    debug!(
        steps = n,
        final_front = s_hist[n - 1],
        t_char_s = dims.t_char_s,
        ?freeze_time_s,
        "freeze solve finished"
    );

    Ok(FreezeSolution {
        t: grid.t,
        x: grid.x,
        field,
        field_steps,
        s: s_hist,
        du_dx,
        ds_dt,
        front_index,
        r,
        dx,
        dt,
        frozen_at_step,
        t_char_s: dims.t_char_s,
        t_phys_s: dims.t_phys_s,
        x_phys_m: dims.x_phys_m,
        r_i_m: dims.r_i_m,
        freeze_time_s,
    })
}
