use ff_project::{RunConfigDef, schema::GridDef, to_freeze_config};
use ff_results::*;
use ff_solver::solve_freeze;

#[test]
fn solved_run_survives_the_store() {
    let mut config = RunConfigDef::new("store roundtrip");
    config.grid = GridDef {
        tstop: 0.3,
        xstop: 1.0,
        dt: 1e-3,
        dx: 0.05,
    };
    config.physical.epsilon = 1.0;
    config.record_every = 100;

    let solution = solve_freeze(&to_freeze_config(&config)).unwrap();
    let run_id = compute_run_id(&config, "test");
    let manifest = RunManifest::from_solution(&run_id, &config.name, "test", &solution);
    let front = FrontRecord::series(&solution);
    let field = FieldSnapshot::series(&solution);

    let temp_dir = std::env::temp_dir().join("ff_results_roundtrip");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir).unwrap();
    store.save_run(&manifest, &front, &field).unwrap();

    let loaded = store.load_manifest(&run_id).unwrap();
    assert_eq!(loaded.grid.n, 301);
    assert_eq!(loaded.grid.recorded_columns, 4);
    assert_eq!(loaded.frozen_at_step, solution.frozen_at_step);
    assert!(loaded.freeze_time_s.is_some());

    let front_loaded = store.load_front(&run_id).unwrap();
    assert_eq!(front_loaded.len(), 301);
    assert_eq!(front_loaded[0].s, 1.0);
    assert_eq!(front_loaded[300].s, solution.final_front());

    let field_loaded = store.load_field(&run_id).unwrap();
    let steps: Vec<usize> = field_loaded.iter().map(|f| f.step).collect();
    assert_eq!(steps, vec![0, 100, 200, 300]);
    assert!(field_loaded.iter().all(|f| f.values.len() == 21 && f.values[0] == 1.0));
}
