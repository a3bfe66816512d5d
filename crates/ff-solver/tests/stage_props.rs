//! Property tests for the per-step stages.

use ff_solver::field::advance_field;
use ff_solver::front::advance_front;
use ff_solver::{Grid, GridSpec};
use proptest::prelude::*;

fn grid(points: usize) -> Grid {
    Grid::new(&GridSpec {
        tstop: 0.1,
        xstop: 1.0,
        dt: 1e-3,
        dx: 1.0 / (points - 1) as f64,
    })
}

proptest! {
    #[test]
    fn front_index_stays_inside_the_grid(points in 3_usize..400, s in -5.0_f64..5.0) {
        let g = grid(points);
        let i_s = g.front_index(s);
        prop_assert!(i_s >= 1 && i_s <= g.m() - 1);
    }

    #[test]
    fn stable_update_keeps_temperatures_bounded(
        prev in prop::collection::vec(0.0_f64..=1.0, 3..200),
        r in 0.0_f64..=0.5,
        front_frac in 0.0_f64..=1.0,
    ) {
        let m = prev.len();
        let front_index = 1 + ((m - 2) as f64 * front_frac) as usize;
        let mut next = vec![f64::NAN; m];
        advance_field(&prev, &mut next, front_index, r, Some(1.0));

        prop_assert_eq!(next[0], 1.0);
        for &u in &next {
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&u), "u = {}", u);
        }
        prop_assert!(next[front_index..].iter().all(|&u| u == 0.0));
    }

    #[test]
    fn front_never_leaves_its_bounds(
        column in prop::collection::vec(-10.0_f64..10.0, 21),
        front_index in 1_usize..21,
        s in 0.01_f64..=1.0,
        dt in 1e-5_f64..0.1,
    ) {
        let g = grid(21);
        let step = advance_front(&g.x, &column, front_index, s, dt, g.dx);
        prop_assert!(step.s_next >= g.dx && step.s_next <= g.x[0]);
        prop_assert_eq!(step.floored, step.s_next == g.dx);
    }
}
