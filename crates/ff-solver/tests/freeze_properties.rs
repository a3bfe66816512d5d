//! Invariants of the freezing-front solver.

use ff_solver::{
    BoundaryCondition, FreezeConfig, GridSpec, SolverError, StabilityPolicy, solve_freeze,
    solve_freeze_with_observer,
};

fn coarse(epsilon: f64, tstop: f64) -> FreezeConfig {
    let mut cfg = FreezeConfig {
        grid: GridSpec {
            tstop,
            xstop: 1.0,
            dt: 1e-3,
            dx: 0.05,
        },
        ..FreezeConfig::default()
    };
    cfg.physical.epsilon = epsilon;
    cfg
}

#[test]
fn outer_boundary_is_always_one() {
    let sol = solve_freeze(&coarse(0.1, 0.5)).unwrap();
    for (_, col) in sol.columns() {
        assert_eq!(col[0], 1.0);
    }
}

#[test]
fn liquid_region_is_held_at_zero() {
    let sol = solve_freeze(&coarse(0.1, 0.5)).unwrap();
    for j in 0..sol.n() - 1 {
        let col = sol.column(j + 1).unwrap();
        let i_s = sol.front_index[j];
        assert!(
            col[i_s..].iter().all(|&u| u == 0.0),
            "non-zero liquid cell at step {}",
            j + 1
        );
    }
}

#[test]
fn front_stays_within_domain() {
    for epsilon in [0.01, 0.1, 1.0] {
        let sol = solve_freeze(&coarse(epsilon, 0.5)).unwrap();
        assert_eq!(sol.s[0], 1.0);
        for &sj in &sol.s[1..] {
            assert!(sj >= sol.dx && sj <= 1.0, "front {sj} out of range");
        }
    }
}

#[test]
fn front_recedes_monotonically_in_stable_runs() {
    let sol = solve_freeze(&coarse(0.1, 0.5)).unwrap();
    assert!(sol.s.windows(2).all(|w| w[1] <= w[0]));
    assert!(sol.du_dx.iter().all(|&g| g >= 0.0));
}

#[test]
fn physical_time_increases() {
    let sol = solve_freeze(&coarse(0.1, 0.2)).unwrap();
    assert!(sol.t_char_s > 0.0);
    assert!(sol.t_phys_s.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(sol.t_phys_s[0], 0.0);
}

#[test]
fn physical_radius_is_front_times_droplet_radius() {
    let cfg = coarse(0.1, 0.2);
    let radius = cfg.physical.radius.value;
    let sol = solve_freeze(&cfg).unwrap();
    for (r_i, sj) in sol.r_i_m.iter().zip(&sol.s) {
        assert!((r_i / radius - sj).abs() < 1e-12);
    }
    assert_eq!(sol.x_phys_m[0], radius);
    assert_eq!(sol.x_phys_m[sol.m() - 1], 0.0);
}

#[test]
fn vanishing_diffusivity_barely_moves_the_front() {
    let sol = solve_freeze(&coarse(1e-6, 0.5)).unwrap();
    // a short surface transient, then almost nothing
    let after_transient = sol.s[5];
    assert!(after_transient > 1.0 - 2.0 * sol.dx);
    assert!(sol.ds_dt[5..].iter().all(|v| v.abs() < 1e-2));
    assert!(after_transient - sol.final_front() < 2e-3);
    assert_eq!(sol.frozen_at_step, None);
}

#[test]
fn larger_epsilon_freezes_further() {
    let finals: Vec<f64> = [0.001, 0.01, 0.1, 0.5, 1.0]
        .iter()
        .map(|&eps| solve_freeze(&coarse(eps, 0.5)).unwrap().final_front())
        .collect();
    assert!(finals.windows(2).all(|w| w[1] <= w[0]), "{finals:?}");
    assert!(finals[0] > finals[1] && finals[1] > finals[2] && finals[2] > finals[3]);
}

#[test]
fn unstable_step_is_rejected() {
    let mut cfg = coarse(1.0, 0.05);
    cfg.grid.dt = 0.005;
    assert!(matches!(
        solve_freeze(&cfg),
        Err(SolverError::Unstable { .. })
    ));
}

#[test]
fn forced_unstable_run_blows_up() {
    let mut cfg = coarse(1.0, 0.05);
    cfg.grid.dt = 0.005;
    cfg.stability = StabilityPolicy::Warn;
    let sol = solve_freeze(&cfg).unwrap();
    assert!(sol.r > 0.5);

    let peaks: Vec<f64> = sol
        .columns()
        .map(|(_, col)| col.iter().fold(0.0_f64, |acc, u| acc.max(u.abs())))
        .collect();
    assert!(peaks[1..].windows(2).all(|w| w[1] > w[0]), "{peaks:?}");
    assert!(peaks[peaks.len() - 1] > 1e3);
}

#[test]
fn front_is_pinned_once_it_reaches_the_center() {
    let sol = solve_freeze(&coarse(1.0, 0.3)).unwrap();
    let frozen = sol.frozen_at_step.expect("droplet should freeze");
    assert!(frozen < sol.n() - 1);
    assert!(sol.s[frozen - 1] > sol.dx);
    assert!(sol.s[frozen..].iter().all(|&sj| sj == sol.dx));

    let t_freeze = sol.freeze_time_s.unwrap();
    assert_eq!(t_freeze, sol.t_phys_s[frozen]);

    // field keeps evolving behind the pinned front
    let last = sol.column(sol.n() - 1).unwrap();
    assert_eq!(last[0], 1.0);
    assert!(last[sol.m() - 2..].iter().all(|&u| u == 0.0));
}

#[test]
fn pinned_front_still_reports_stefan_velocity() {
    let sol = solve_freeze(&coarse(1.0, 0.3)).unwrap();
    let frozen = sol.frozen_at_step.expect("droplet should freeze");
    let last = sol.n() - 1;

    for j in frozen..last {
        assert_eq!(sol.s[j], sol.dx);
        assert_eq!(sol.s[j + 1], sol.dx);
        assert_eq!(sol.ds_dt[j], -sol.du_dx[j] / sol.dx);
    }
    assert!(sol.ds_dt[frozen..last].iter().any(|&v| v != 0.0));
    assert_eq!(sol.ds_dt[last], 0.0);
}

#[test]
fn non_finite_surface_value_aborts_the_solve() {
    let mut cfg = coarse(0.1, 0.2);
    cfg.outer_boundary =
        BoundaryCondition::time_function(|t| if t > 0.1 { f64::NAN } else { 1.0 });
    assert!(matches!(
        solve_freeze(&cfg),
        Err(SolverError::Numeric { .. })
    ));
}

#[test]
fn reference_run_holds_its_invariants() {
    let mut cfg = FreezeConfig {
        grid: GridSpec {
            tstop: 5.0,
            xstop: 1.0,
            dt: 1.125e-5,
            dx: 0.005,
        },
        ..FreezeConfig::default()
    };
    cfg.physical.epsilon = 0.01;
    cfg.physical.radius = ff_core::m(1e-5);
    cfg.physical.density = ff_core::kg_per_m3(920.0);
    cfg.physical.specific_heat = ff_core::j_per_kg_k(2100.0);
    cfg.physical.conductivity = ff_core::w_per_m_k(2.2);
    cfg.record_every = 50_000;

    let mut surface_ok = true;
    let sol = solve_freeze_with_observer(&cfg, |ev| {
        surface_ok &= ev.column[0] == 1.0;
    })
    .unwrap();

    assert!(surface_ok);
    assert_eq!(sol.s[0], 1.0);
    assert!(sol.s[..=100].windows(2).all(|w| w[1] <= w[0]));
    assert!(sol.final_front() >= 0.005);
    assert_eq!(sol.n(), 444_445);
    assert!((sol.t_char_s - 1e-10 * 920.0 * 2100.0 / 2.2).abs() < 1e-15);
}

#[test]
fn time_varying_surface_is_honoured() {
    let mut cfg = coarse(0.1, 0.2);
    cfg.outer_boundary = BoundaryCondition::time_function(|t| if t < 0.1 { 1.0 } else { 0.5 });
    let sol = solve_freeze(&cfg).unwrap();
    assert_eq!(sol.column(50).unwrap()[0], 1.0);
    assert_eq!(sol.column(150).unwrap()[0], 0.5);
}
