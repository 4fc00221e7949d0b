mod cli_modes;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli_modes::{CliModeResult, read_mode, shell_mode, use_color};
use render::{ColorMode, RenderOptions, Renderer};
use runlog_core::{Config, Ledger};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// runlog: a personal running log
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Run file to load (`distance,time[,date]` per line). Overrides `runs_file` from the config.
    #[arg(long, short, env = "RUNLOG_FILE")]
    file: Option<PathBuf>,
    /// Only shows one line per run.
    #[arg(long, short)]
    short: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the run with the best pace
    Fastest,
    /// Show the run with the greatest distance
    Longest,
    /// Show the most recent runs, oldest first
    Recent {
        /// How many runs to show. Defaults to `recent_count` from the config (7).
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },
    /// Show the run logged on a date (e.g. `runlog show 2024-11-26`)
    Show { date: String },
    /// Show every run, oldest first
    List,
    /// Interactive shell (default when no command is given)
    Shell,
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("runlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUNLOG_LOG` (e.g. `RUNLOG_LOG=debug`). Default is `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RUNLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: use_color(cli.color),
        short_mode: cli.short,
    }));

    let mut ledger = Ledger::new();
    if let Some(path) = cli.file.as_ref().or(config.runs_file.as_ref()) {
        let added = ledger
            .load_file(path)
            .with_context(|| format!("loading runs from {}", path.display()))?;
        info!(added, path = %path.display(), "loaded run file");
    }

    if let CliModeResult::Finish = read_mode(cli.command.as_ref(), &renderer, &ledger, &config)? {
        return Ok(());
    }

    shell_mode(io::stdin().lock(), &renderer, &mut ledger, &config)
}
