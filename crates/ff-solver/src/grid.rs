//! Space and time grids.
//!
//! The space grid runs from the droplet surface (`x[0] = xstop`) down to the
//! center (`x[M-1] = 0`), so the front index grows as the droplet freezes.

use crate::config::GridSpec;
use ff_core::step_count;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Radial coordinates, descending
    pub x: Vec<f64>,
    /// Times, ascending
    pub t: Vec<f64>,
    pub dx: f64,
    pub dt: f64,
}

impl Grid {
    /// Build grids for a validated spec.
    pub fn new(spec: &GridSpec) -> Self {
        let m = step_count(spec.xstop, spec.dx) + 1;
        let n = step_count(spec.tstop, spec.dt) + 1;
        let last = (m - 1) as f64;
        let x = (0..m)
            .map(|i| spec.xstop * (1.0 - i as f64 / last))
            .collect();
        let t = (0..n).map(|j| j as f64 * spec.dt).collect();
        Self {
            x,
            t,
            dx: spec.dx,
            dt: spec.dt,
        }
    }

    pub fn m(&self) -> usize {
        self.x.len()
    }

    pub fn n(&self) -> usize {
        self.t.len()
    }

    /// Index of the grid point nearest to front radius `s`.
    ///
    /// Clamped to `[1, M-1]` so the outer boundary is never treated as the front
    /// and at least one interior cell remains. A non-finite radius maps to 1.
    pub fn front_index(&self, s: f64) -> usize {
        let last = self.m() - 1;
        let raw = ((self.x[0] - s) / self.dx).round();
        if !raw.is_finite() || raw < 1.0 {
            return 1;
        }
        (raw as usize).min(last)
    }

    /// Temperature at t = 0: 1 at or outside the initial front, 0 inside.
    pub fn initial_column(&self, s0: f64) -> Vec<f64> {
        self.x
            .iter()
            .map(|&xi| if xi >= s0 { 1.0 } else { 0.0 })
            .collect()
    }
}
