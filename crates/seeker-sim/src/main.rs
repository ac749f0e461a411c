//! `seeker-sim` - run the seeker headless against a level file.
//!
//! - `seeker-sim run --level <file>` - tick the agent and report transitions
//! - `seeker-sim config` - print the default tunables as YAML

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use seeker_core::SeekerConfig;
use seeker_sim::{load_config, load_level, JsonLinesSink, LogSink, Simulation};

#[derive(Parser)]
#[command(name = "seeker-sim")]
#[command(about = "Headless seeker simulation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a level
    Run {
        /// Level file (.yaml, .yml or .json)
        #[arg(long)]
        level: PathBuf,

        /// Seeker config file; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 1800)]
        ticks: u64,

        /// Seconds per tick
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Print trace events to stdout as JSON lines
        #[arg(long)]
        trace_json: bool,
    },

    /// Print the default seeker config as YAML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            level,
            config,
            ticks,
            dt,
            trace_json,
        } => run_level(&level, config.as_deref(), ticks, dt, trace_json),
        Commands::Config => print_config(),
    }
}

fn run_level(level_path: &Path, config_path: Option<&Path>, ticks: u64, dt: f32, trace_json: bool) -> Result<()> {
    if !(dt.is_finite() && dt > 0.0) {
        bail!("--dt must be a positive number of seconds (got {dt})");
    }

    let level = load_level(level_path).with_context(|| format!("loading level {}", level_path.display()))?;
    let config = match config_path {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => SeekerConfig::default(),
    };

    tracing::info!(level = %level_path.display(), ticks, dt, "starting simulation");

    let sim = Simulation::new(&level, config).context("creating seeker")?;
    let mut sim = if trace_json {
        sim.with_trace_sink(JsonLinesSink::new(std::io::stdout()))
    } else {
        sim.with_trace_sink(LogSink)
    };

    let reports = sim.run(ticks, dt);
    let Some(last) = reports.last() else {
        tracing::info!("nothing to simulate");
        return Ok(());
    };

    let seen_ticks = reports.iter().filter(|r| r.seeing).count();
    let opened = sim.world().doors_opened();
    tracing::info!(
        ticks = reports.len(),
        state = %last.state,
        x = last.position.x,
        z = last.position.z,
        seen_ticks,
        doors_opened = opened,
        "simulation finished"
    );
    Ok(())
}

fn print_config() -> Result<()> {
    let yaml = serde_yaml::to_string(&SeekerConfig::default()).context("encoding default config")?;
    print!("{yaml}");
    Ok(())
}
