//! Negamax arena binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use negamax_arena::{chart, console, simulate_all, SimulationConfig};
use rand::RngCore;
use std::io::{self, IsTerminal, Write};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { matchup, seed } => {
            let seed = seed_or_random(seed);
            console::play_to_writer(matchup, seed, &mut io::stdout().lock())?;
        }
        Command::Menu { seed } => {
            let seed = seed_or_random(seed);
            console::run_menu(&mut io::stdin().lock(), &mut io::stdout().lock(), seed)?;
        }
        Command::Simulate {
            config,
            games,
            threads,
            seed,
            matchup,
            chart,
            json,
        } => {
            let mut config = SimulationConfig::load(config.as_deref())?;
            if let Some(games) = games {
                config = config.with_games(games);
            }
            if let Some(threads) = threads {
                config = config.with_threads(threads);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if !matchup.is_empty() {
                config = config.with_matchups(matchup);
            }
            if chart {
                config = config.with_chart(true);
            }
            run_simulate(&config, json)?;
        }
    }

    Ok(())
}

/// Logs to stderr so stdout carries only game output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().next_u64())
}

#[instrument(skip(config), fields(games = config.games()))]
fn run_simulate(config: &SimulationConfig, json: bool) -> Result<()> {
    info!(matchups = config.matchups().len(), "Running simulations");
    let reports = simulate_all(config)?;

    let interactive = *config.chart() && !json && io::stdout().is_terminal();
    {
        let mut out = io::stdout().lock();
        if json {
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        } else {
            let text_chart = *config.chart() && !interactive;
            for report in &reports {
                console::print_report(&mut out, report, text_chart)?;
            }
        }
    }

    if interactive {
        chart::show_reports(&reports)?;
    }
    Ok(())
}
