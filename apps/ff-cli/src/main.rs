use clap::{Parser, Subcommand, ValueEnum};
use ff_core::timing::Timer;
use ff_project::{RunConfigDef, to_freeze_config, to_sweep_definition};
use ff_results::{FieldSnapshot, FrontRecord, RunManifest, RunStore, compute_run_id};
use ff_solver::{StepEvent, run_sweep, solve_freeze_with_observer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ff_project::ProjectError),

    #[error(transparent)]
    Solver(#[from] ff_solver::SolverError),

    #[error(transparent)]
    Results(#[from] ff_results::ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "frostfront")]
#[command(about = "frostfront - freezing front solver for spherical droplets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration file
    Validate {
        /// Path to the run config (YAML or JSON)
        config_path: PathBuf,
    },
    /// Solve one freeze and store the result
    Run {
        /// Path to the run config (YAML or JSON)
        config_path: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Run store directory (defaults to .frostfront/runs next to the config)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Run the sensitivity sweep declared in a config
    Sweep {
        /// Path to the run config (YAML or JSON)
        config_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List stored runs
    Runs {
        /// Run store directory
        store_dir: PathBuf,
    },
    /// Show details of a stored run
    ShowRun {
        /// Run store directory
        store_dir: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export a front series from a stored run
    ExportSeries {
        /// Run store directory
        store_dir: PathBuf,
        /// Run ID
        run_id: String,
        /// Series to export
        variable: SeriesVariable,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeriesVariable {
    /// Nondimensional front position
    #[value(name = "front")]
    Front,
    /// Physical front radius (m)
    #[value(name = "radius")]
    Radius,
    /// Interface temperature gradient
    #[value(name = "du_dx")]
    DuDx,
    /// Stefan front velocity (still reported after the front is pinned)
    #[value(name = "ds_dt")]
    DsDt,
}

impl SeriesVariable {
    fn header(self) -> &'static str {
        match self {
            Self::Front => "s",
            Self::Radius => "r_i_m",
            Self::DuDx => "du_dx",
            Self::DsDt => "ds_dt",
        }
    }

    fn value(self, record: &FrontRecord) -> f64 {
        match self {
            Self::Front => record.s,
            Self::Radius => record.r_i_m,
            Self::DuDx => record.du_dx,
            Self::DsDt => record.ds_dt,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Run {
            config_path,
            no_cache,
            store,
        } => cmd_run(&config_path, !no_cache, store),
        Commands::Sweep {
            config_path,
            output,
        } => cmd_sweep(&config_path, output.as_deref()),
        Commands::Runs { store_dir } => cmd_runs(store_dir),
        Commands::ShowRun { store_dir, run_id } => cmd_show_run(store_dir, &run_id),
        Commands::ExportSeries {
            store_dir,
            run_id,
            variable,
            output,
        } => cmd_export_series(store_dir, &run_id, variable, output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = ff_project::load(config_path)?;
    let setup = to_freeze_config(&config).validate()?;
    println!("✓ Config is valid");
    println!("  Grid: {} x {} (r = {:.4})", setup.m, setup.n, setup.r);
    if let Some(sweep) = &config.sweep {
        println!("  {}", to_sweep_definition(sweep)?);
    }
    Ok(())
}

fn cmd_run(config_path: &Path, use_cache: bool, store: Option<PathBuf>) -> CliResult<()> {
    let config = ff_project::load(config_path)?;
    let store = match store {
        Some(dir) => RunStore::new(dir)?,
        None => RunStore::for_config(config_path)?,
    };
    let run_id = compute_run_id(&config, SOLVER_VERSION);

    if use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        println!("✓ Loaded from cache: {}", run_id);
        print_manifest(&manifest);
        return Ok(());
    }

    println!("Running freeze: {}", config.name);
    let manifest = solve_and_save(&config, &run_id, &store)?;
    println!("✓ Simulation completed: {}", run_id);
    print_manifest(&manifest);
    Ok(())
}

fn solve_and_save(
    config: &RunConfigDef,
    run_id: &str,
    store: &RunStore,
) -> CliResult<RunManifest> {
    let freeze = to_freeze_config(config);

    let solve_timer = Timer::start("solve");
    let last_step = (freeze.grid.tstop / freeze.grid.dt).floor().max(1.0);
    let mut last_emit = Instant::now();
    let solution = solve_freeze_with_observer(&freeze, |event| {
        if last_emit.elapsed().as_millis() >= 100 {
            render_progress(&event, last_step);
            last_emit = Instant::now();
        }
    })?;
    clear_progress_line();
    solve_timer.stop_and_print();

    let save_timer = Timer::start("save");
    let manifest = RunManifest::from_solution(run_id, &config.name, SOLVER_VERSION, &solution);
    store.save_run(
        &manifest,
        &FrontRecord::series(&solution),
        &FieldSnapshot::series(&solution),
    )?;
    save_timer.stop_and_print();
    info!(run_id, store = %store.root_dir().display(), "run saved");

    Ok(manifest)
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_progress(event: &StepEvent<'_>, last_step: f64) {
    let fraction = (event.step as f64 / last_step).min(1.0);
    let width = 28usize;
    let filled = ((fraction * width as f64).round() as usize).min(width);
    print!(
        "\r[{}{}] {:>6.2}%  step={}  t={:.4}  s={:.4}{}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0,
        event.step,
        event.t,
        event.front,
        if event.frozen { "  frozen" } else { "" }
    );
    let _ = io::stdout().flush();
}

fn print_manifest(manifest: &RunManifest) {
    let grid = &manifest.grid;
    println!(
        "  Grid: {} x {} (dx = {}, dt = {}, r = {:.4})",
        grid.m, grid.n, grid.dx, grid.dt, grid.r
    );
    println!("  Recorded columns: {}", grid.recorded_columns);
    println!("  Droplet radius: {:.3e} m", manifest.radius_m);
    println!("  Timescale R^2 rho c / k: {:.3e} s", manifest.t_char_s);
    println!("  Final front: {:.4}", manifest.final_front);
    match (manifest.frozen_at_step, manifest.freeze_time_s) {
        (Some(step), Some(t)) => println!("  Frozen at step {} ({:.3e} s)", step, t),
        _ => println!("  Not fully frozen within tstop"),
    }
}

fn cmd_sweep(config_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let config = ff_project::load(config_path)?;
    let sweep = config.sweep.as_ref().ok_or_else(|| {
        CliError::Usage(format!("{} has no sweep section", config_path.display()))
    })?;
    let def = to_sweep_definition(sweep)?;
    println!("{}", def);

    let timer = Timer::start("sweep");
    let result = run_sweep(&to_freeze_config(&config), &def)?;
    timer.stop_and_print();

    let mut csv = format!(
        "{},t_char_s,final_front,final_radius_m,frozen_at_step,freeze_time_s\n",
        def.parameter.key()
    );
    for p in &result.points {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.value,
            p.t_char_s,
            p.final_front,
            p.final_radius_m,
            p.frozen_at_step.map(|j| j.to_string()).unwrap_or_default(),
            p.freeze_time_s.map(|t| t.to_string()).unwrap_or_default(),
        ));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} sweep points to {}",
            result.points.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_runs(store_dir: PathBuf) -> CliResult<()> {
    let store = RunStore::new(store_dir)?;
    let runs = store.list_runs()?;

    if runs.is_empty() {
        println!("No stored runs in {}", store.root_dir().display());
    } else {
        println!("Stored runs:");
        for manifest in runs {
            println!(
                "  {} - {} ({})",
                manifest.run_id, manifest.name, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(store_dir: PathBuf, run_id: &str) -> CliResult<()> {
    println!("Loading run: {}", run_id);
    let store = RunStore::new(store_dir)?;
    let manifest = store.load_manifest(run_id)?;

    println!("\nRun Summary:");
    println!("  Name: {}", manifest.name);
    println!("  Created: {}", manifest.timestamp);
    println!("  Solver version: {}", manifest.solver_version);
    print_manifest(&manifest);
    Ok(())
}

fn cmd_export_series(
    store_dir: PathBuf,
    run_id: &str,
    variable: SeriesVariable,
    output: Option<&Path>,
) -> CliResult<()> {
    let store = RunStore::new(store_dir)?;
    let records = store.load_front(run_id)?;

    let mut csv = format!("time_s,{}\n", variable.header());
    for record in &records {
        csv.push_str(&format!("{},{}\n", record.time_s, variable.value(record)));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            records.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
