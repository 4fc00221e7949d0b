use super::CliModeResult;
use crate::{Command, render::Renderer};
use anyhow::Result;
use runlog_core::{Config, Ledger};

/// Runs a one-shot query against the loaded ledger.
pub fn read_mode(
    command: Option<&Command>,
    renderer: &Renderer,
    ledger: &Ledger,
    config: &Config,
) -> Result<CliModeResult> {
    let Some(command) = command else {
        return Ok(CliModeResult::NothingToDo);
    };

    match command {
        Command::Fastest => match ledger.fastest() {
            Some(run) => {
                renderer.print_info("Your fastest run:");
                renderer.print_run(run);
            }
            None => print_empty(renderer),
        },
        Command::Longest => match ledger.longest() {
            Some(run) => {
                renderer.print_info("Your longest run:");
                renderer.print_run(run);
            }
            None => print_empty(renderer),
        },
        Command::Recent { count } => {
            if ledger.is_empty() {
                print_empty(renderer);
            } else {
                let runs = ledger.latest(count.unwrap_or(config.recent_count));
                renderer.print_info(&format!("Your {} most recent runs:", runs.len()));
                renderer.print_runs(runs);
            }
        }
        Command::Show { date } => {
            let run = ledger.find_by_date(date)?;
            renderer.print_run(run);
        }
        Command::List => {
            renderer.print_info(&format!("{} runs logged.", ledger.len()));
            renderer.print_runs(ledger.runs());
        }
        Command::Shell => return Ok(CliModeResult::NothingToDo),
    }
    Ok(CliModeResult::Finish)
}

pub(crate) fn print_empty(renderer: &Renderer) {
    renderer.print_info("You have no runs in this log yet. Load or add some runs first.");
}
