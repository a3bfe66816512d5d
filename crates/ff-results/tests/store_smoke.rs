use ff_results::*;

fn manifest(run_id: &str, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        name: "smoke".to_string(),
        timestamp: timestamp.to_string(),
        solver_version: "v1".to_string(),
        grid: GridSummary {
            m: 3,
            n: 2,
            dx: 0.5,
            dt: 0.1,
            r: 0.4,
            recorded_columns: 2,
        },
        t_char_s: 8.78e-8,
        radius_m: 1e-5,
        final_front: 0.9,
        frozen_at_step: None,
        freeze_time_s: None,
    }
}

fn front() -> Vec<FrontRecord> {
    vec![
        FrontRecord {
            step: 0,
            t: 0.0,
            time_s: 0.0,
            s: 1.0,
            r_i_m: 1e-5,
            du_dx: 2.0,
            ds_dt: -2.0,
            front_index: 1,
        },
        FrontRecord {
            step: 1,
            t: 0.1,
            time_s: 8.78e-6,
            s: 0.8,
            r_i_m: 8e-6,
            du_dx: 0.0,
            ds_dt: 0.0,
            front_index: 0,
        },
    ]
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("ff_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = RunStore::new(temp_dir.clone()).unwrap();
    let field = vec![
        FieldSnapshot {
            step: 0,
            t: 0.0,
            time_s: 0.0,
            values: vec![1.0, 0.0, 0.0],
        },
        FieldSnapshot {
            step: 1,
            t: 0.1,
            time_s: 8.78e-6,
            values: vec![1.0, 0.4, 0.0],
        },
    ];

    store
        .save_run(&manifest("test_run_123", "2026-02-25T12:00:00Z"), &front(), &field)
        .unwrap();
    assert!(store.has_run("test_run_123"));

    let loaded_manifest = store.load_manifest("test_run_123").unwrap();
    assert_eq!(loaded_manifest.run_id, "test_run_123");
    assert_eq!(loaded_manifest.grid.m, 3);

    assert_eq!(store.load_front("test_run_123").unwrap(), front());
    assert_eq!(store.load_field("test_run_123").unwrap(), field);
}

#[test]
fn list_and_delete_runs() {
    let temp_dir = std::env::temp_dir().join("ff_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir.clone()).unwrap();

    store
        .save_run(&manifest("later", "2026-03-01T00:00:00Z"), &front(), &[])
        .unwrap();
    store
        .save_run(&manifest("earlier", "2026-02-01T00:00:00Z"), &front(), &[])
        .unwrap();
    std::fs::create_dir_all(temp_dir.join("incomplete")).unwrap();

    let runs = store.list_runs().unwrap();
    let ids: Vec<&str> = runs.iter().map(|r| r.run_id.as_str()).collect();
    assert_eq!(ids, vec!["earlier", "later"]);

    store.delete_run("earlier").unwrap();
    assert!(!store.has_run("earlier"));
    assert_eq!(store.list_runs().unwrap().len(), 1);
}

#[test]
fn missing_run_is_reported() {
    let temp_dir = std::env::temp_dir().join("ff_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir).unwrap();

    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_front("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}
