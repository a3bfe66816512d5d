//! Front-update stage: Stefan condition and forward Euler for `s(t)`.

/// Outcome of advancing the front by one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontStep {
    /// One-sided temperature gradient at the front
    pub du_dx: f64,
    /// Front velocity from the Stefan condition
    pub ds_dt: f64,
    /// New front position after capping and flooring
    pub s_next: f64,
    /// True when the floor at `dx` was applied
    pub floored: bool,
}

/// Advance the front using the freshly computed column `column`.
///
/// The gradient is taken between the front cell and its outer neighbour. A
/// front at or below the center carries no velocity. The new position is kept
/// in `[dx, xstop]`.
pub fn advance_front(
    x: &[f64],
    column: &[f64],
    front_index: usize,
    s: f64,
    dt: f64,
    dx: f64,
) -> FrontStep {
    let i_s = front_index;
    debug_assert!(i_s >= 1 && i_s < x.len());

    let du_dx = (column[i_s] - column[i_s - 1]) / (x[i_s] - x[i_s - 1]);
    let ds_dt = if s > 0.0 { -du_dx / s } else { 0.0 };

    let s_next = (s + ds_dt * dt).min(x[0]);
    if s_next <= dx {
        FrontStep {
            du_dx,
            ds_dt,
            s_next: dx,
            floored: true,
        }
    } else {
        FrontStep {
            du_dx,
            ds_dt,
            s_next,
            floored: false,
        }
    }
}
