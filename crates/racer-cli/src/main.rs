// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `racer` developer CLI.
//!
//! - `racer run <scenario.json>` drives the simulation and writes a JSON
//!   summary to stdout.
//! - `racer config` writes the default configuration to stdout.
//!
//! Logs go to stderr; set `RUST_LOG=racer_core=debug` for per-tick sensor
//! lines.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use racer_core::{
    Obstacle, ObstacleMotion, RunOutcome, ScrollMotion, SimConfig, Simulation, Static,
    Termination, Vehicle,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod scenario;

use scenario::Scenario;

#[derive(Parser)]
#[command(
    name = "racer",
    version,
    about = "Deterministic fixed-point vehicle simulation",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print a JSON summary.
    Run(RunArgs),
    /// Print the default simulation config as JSON.
    Config,
}

#[derive(Args)]
struct RunArgs {
    /// Scenario JSON (config, vehicle, obstacles, spawn).
    scenario: PathBuf,

    /// Maximum number of ticks to run.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Override the scenario's spawn seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct RunSummary {
    ticks_requested: u64,
    ticks_completed: u64,
    termination: Termination,
    vehicle: Vehicle,
    obstacle_count: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => run(&args),
        Commands::Config => write_json(&SimConfig::default()),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let obstacles = scenario.obstacles(args.seed);
    info!(
        scenario = %args.scenario.display(),
        obstacles = obstacles.len(),
        ticks = args.ticks,
        "starting run"
    );

    let outcome = if scenario.obstacle_speed.is_zero() {
        simulate(&scenario, obstacles, &mut Static, args.ticks)?
    } else {
        let mut motion = ScrollMotion::new(&scenario.config, scenario.obstacle_speed);
        simulate(&scenario, obstacles, &mut motion, args.ticks)?
    };

    write_json(&RunSummary {
        ticks_requested: args.ticks,
        ticks_completed: outcome.ticks_completed,
        termination: outcome.termination,
        vehicle: outcome.vehicle,
        obstacle_count: outcome.obstacles.len(),
    })
}

fn simulate(
    scenario: &Scenario,
    obstacles: Vec<Obstacle>,
    motion: &mut impl ObstacleMotion,
    ticks: u64,
) -> Result<RunOutcome> {
    let mut sim = Simulation::new(scenario.config.clone());
    let mut policy = scenario.policy;
    sim.run(scenario.vehicle, obstacles, &mut policy, motion, ticks)
        .context("simulation failed")
}

fn write_json(value: &impl Serialize) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to write json")?;
    writeln!(out)?;
    Ok(())
}
