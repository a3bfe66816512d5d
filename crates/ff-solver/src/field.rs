//! Field-update stage: explicit diffusion through the frozen shell.

use rayon::prelude::*;

/// Interior rows at least this long are updated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 8192;

#[inline]
fn ftcs(prev: &[f64], i: usize, r: f64) -> f64 {
    (1.0 - 2.0 * r) * prev[i] + r * (prev[i + 1] + prev[i - 1])
}

/// Write the temperature column for the next step.
///
/// `prev` is the completed column of the current step and is only read;
/// `next` is overwritten in full. Cells at or beyond `front_index` are liquid
/// or on the front and are held at 0. `outer` is the imposed surface value, or
/// `None` for a zero-gradient surface.
pub fn advance_field(
    prev: &[f64],
    next: &mut [f64],
    front_index: usize,
    r: f64,
    outer: Option<f64>,
) {
    let m = prev.len();
    debug_assert_eq!(next.len(), m);
    debug_assert!(m >= 3);
    let i_s = front_index.clamp(1, m - 1);

    if let Some(v) = outer {
        next[0] = v;
    }
    next[i_s..].fill(0.0);

    let interior = &mut next[1..i_s];
    if interior.len() >= PARALLEL_THRESHOLD {
        interior
            .par_iter_mut()
            .enumerate()
            .for_each(|(k, cell)| *cell = ftcs(prev, k + 1, r));
    } else {
        for (k, cell) in interior.iter_mut().enumerate() {
            *cell = ftcs(prev, k + 1, r);
        }
    }

    // Stefan condition at the interface cell
    next[i_s] = 0.0;

    if outer.is_none() {
        next[0] = next[1];
    }
}
