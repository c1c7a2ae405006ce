//! forage: run forager scenarios from the command line.
//!
//! ```text
//! forage grid  --scenario scenarios/grid_four_spots.toml --out output/grid
//! forage swarm --scenario scenarios/swarm.toml --out output/swarm
//! forage clusters output/swarm/adjacency.csv --foragers 35
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for per-tick lines.

mod frames;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fg_analysis::{DEFAULT_INTERVAL, frame_step, largest_cluster_series, mean_squared_displacement};
use fg_output::{CsvWriter, OutputWriter, SimOutputObserver, read_adjacency_csv};
use fg_sim::{ModelKind, ScenarioConfig, Simulation, build_simulation};

use frames::FrameRecorder;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "forage")]
#[command(version, about = "Foraging simulations on a food grid or a continuous torus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the grid model until the food runs low
    Grid {
        #[command(flatten)]
        run: RunArgs,

        /// Stop once remaining food falls below this fraction of the start
        #[arg(long, default_value = "0.1")]
        until: f64,
    },

    /// Run the continuous model for a fixed number of ticks
    Swarm {
        #[command(flatten)]
        run: RunArgs,

        /// Ticks to run (default: the scenario's total_ticks)
        #[arg(short, long)]
        ticks: Option<u64>,
    },

    /// Largest-cluster series from a recorded adjacency file
    Clusters {
        /// adjacency.csv written by a previous run
        path: PathBuf,

        /// Number of foragers in that run
        #[arg(short, long)]
        foragers: usize,

        /// Minimum edge weight that joins two foragers
        #[arg(short, long, default_value = "1.0")]
        interval: f64,
    },
}

#[derive(Args)]
struct RunArgs {
    /// TOML scenario file (defaults apply to anything it leaves out)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Safety cap on ticks for depletion runs
    #[arg(long, default_value = "100000")]
    max_ticks: u64,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Commands::Grid { run, until } => {
            let config = load_scenario(&run, ModelKind::Grid)?;
            with_writer(&run, |writer| run_grid(&config, &run, until, writer))
        }
        Commands::Swarm { run, ticks } => {
            let config = load_scenario(&run, ModelKind::Continuous)?;
            let ticks = ticks.unwrap_or(config.run.total_ticks);
            with_writer(&run, |writer| run_swarm(&config, ticks, writer))
        }
        Commands::Clusters { path, foragers, interval } => clusters(&path, foragers, interval),
    }
}

fn load_scenario(args: &RunArgs, model: ModelKind) -> Result<ScenarioConfig> {
    let mut config = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            toml::from_str::<ScenarioConfig>(&text)
                .with_context(|| format!("parsing scenario {}", path.display()))?
        }
        None => ScenarioConfig { model, ..ScenarioConfig::default() },
    };
    if config.model != model {
        bail!("scenario describes the {:?} model, but this command runs {:?}", config.model, model);
    }
    if let Some(seed) = args.seed {
        config.run.seed = seed;
    }
    config.validate().context("invalid scenario")?;
    Ok(config)
}

/// Open the chosen backend in `args.out` and hand it to `f`.
fn with_writer(args: &RunArgs, f: impl FnOnce(Box<dyn OutputWriter>) -> Result<()>) -> Result<()> {
    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let writer: Box<dyn OutputWriter> = match args.format {
        Format::Csv => Box::new(CsvWriter::new(&args.out)?),
        #[cfg(feature = "parquet")]
        Format::Parquet => Box::new(fg_output::ParquetWriter::new(&args.out)?),
        #[cfg(not(feature = "parquet"))]
        Format::Parquet => bail!("this build has no Parquet support; rebuild with --features parquet"),
    };
    f(writer)
}

// ── Grid ──────────────────────────────────────────────────────────────────────

fn run_grid(config: &ScenarioConfig, args: &RunArgs, until: f64, writer: Box<dyn OutputWriter>) -> Result<()> {
    let mut sim = build_simulation(config)?;
    let mut obs = SimOutputObserver::new(writer, &config.run);

    let t0 = Instant::now();
    let taken = sim.run_until_food_below(until, args.max_ticks, &mut obs)?;
    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }

    let stats = sim.foraging_stats();
    println!("Finished in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  variant          : {}", config.foragers.variant());
    println!("  food left        : {} of {}", sim.total_food(), sim.initial_food());
    match taken {
        Some(ticks) => println!(
            "  depletion        : {ticks} ticks ({:.2} h simulated)",
            sim.clock().hours_for_ticks(ticks)
        ),
        None => println!("  depletion        : not reached within {} ticks", args.max_ticks),
    }
    println!("  sense frequency  : {:.3}", stats.sense_frequency());
    println!("  food consumed    : {}", stats.consumed);
    Ok(())
}

// ── Swarm ─────────────────────────────────────────────────────────────────────

fn run_swarm(config: &ScenarioConfig, ticks: u64, writer: Box<dyn OutputWriter>) -> Result<()> {
    let max_step = frame_step(config.swarm.speed, config.run.output_interval_ticks);
    ensure!(
        2.0 * max_step < config.space.domain_size,
        "snapshots every {} ticks let a forager move {max_step} between frames, \
         too far to unwrap on a {}-wide domain; lower run.output_interval_ticks",
        config.run.output_interval_ticks,
        config.space.domain_size,
    );
    let mut sim = build_simulation(config)?;
    let inner = SimOutputObserver::new(writer, &config.run).with_adjacency(DEFAULT_INTERVAL);
    let mut obs = FrameRecorder::new(inner, DEFAULT_INTERVAL);

    let t0 = Instant::now();
    sim.run_ticks(ticks, &mut obs)?;
    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }
    info!(ticks, frames = obs.frames.len(), "swarm run recorded");

    let series = largest_cluster_series(&obs.matrices, 1.0);
    let msd = mean_squared_displacement(&obs.frames, max_step, config.space.domain_size)?;

    println!("Finished {ticks} ticks in {:.3} s", t0.elapsed().as_secs_f64());
    println!("  snapshots        : {}", obs.frames.len());
    println!("  largest cluster  : peak {}, final {}", peak(&series), series.last().copied().unwrap_or(0));
    if let Some(last) = msd.last() {
        println!("  final MSD        : {last:.1}");
    }
    println!("  sense frequency  : {:.3}", sim.foraging_stats().sense_frequency());
    Ok(())
}

// ── Clusters ──────────────────────────────────────────────────────────────────

fn clusters(path: &Path, foragers: usize, interval: f64) -> Result<()> {
    let steps = read_adjacency_csv(path, foragers).with_context(|| format!("reading {}", path.display()))?;
    let matrices: Vec<_> = steps.iter().map(|(_, m)| m.clone()).collect();
    let series = largest_cluster_series(&matrices, interval);

    println!("{:<10} {:<8}", "Step", "Largest");
    println!("{}", "-".repeat(18));
    for ((step, _), size) in steps.iter().zip(&series) {
        println!("{step:<10} {size:<8}");
    }
    println!();
    println!("peak largest cluster: {}", peak(&series));
    Ok(())
}

fn peak(series: &[usize]) -> usize {
    series.iter().max().copied().unwrap_or(0)
}
