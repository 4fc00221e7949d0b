//! Line-oriented interactive mode: one command per line until `quit` or end of input.

use super::read_mode::print_empty;
use crate::render::Renderer;
use anyhow::{Context, Result, anyhow, bail};
use runlog_core::{Config, Ledger, RunEntry, RunLogError};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Verb {
    Load,
    Add,
    #[strum(to_string = "delete", serialize = "remove")]
    Delete,
    Title,
    Rate,
    #[strum(to_string = "fast", serialize = "fastest")]
    Fast,
    #[strum(to_string = "long", serialize = "longest")]
    Long,
    Recent,
    List,
    Help,
    #[strum(to_string = "quit", serialize = "exit")]
    Quit,
}

impl Verb {
    fn usage(self) -> &'static str {
        match self {
            Verb::Load => "load <path>                  load runs from a distance,time[,date] file",
            Verb::Add => "add <distance> <time> [date] add a run, date defaults to today",
            Verb::Delete => "delete <date>                delete the run on a date",
            Verb::Title => "title <date> <text>          set the title of a run",
            Verb::Rate => "rate <date> <1-10>           rate a run",
            Verb::Fast => "fast                         show your fastest run",
            Verb::Long => "long                         show your longest run",
            Verb::Recent => "recent [n]                   show your most recent runs",
            Verb::List => "list                         show every run",
            Verb::Help => "help                         show this list",
            Verb::Quit => "quit                         leave the shell",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Load(PathBuf),
    Add {
        distance: f64,
        time: String,
        date: Option<String>,
    },
    Delete(String),
    Title {
        date: String,
        title: String,
    },
    Rate {
        date: String,
        rating: u8,
    },
    Fast,
    Long,
    Recent(Option<usize>),
    List,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));
        let verb = Verb::from_str(word)
            .map_err(|_| anyhow!("Unknown command '{word}'. Type 'help' to list commands."))?;
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match verb {
            Verb::Load => {
                if rest.is_empty() {
                    bail!("Usage: {}", verb.usage());
                }
                ShellCommand::Load(PathBuf::from(rest))
            }
            Verb::Add => match args.as_slice() {
                [distance, time] | [distance, time, _] => ShellCommand::Add {
                    distance: distance
                        .parse()
                        .with_context(|| format!("'{distance}' is not a valid distance"))?,
                    time: time.to_string(),
                    date: args.get(2).map(|d| d.to_string()),
                },
                _ => bail!("Usage: {}", verb.usage()),
            },
            Verb::Delete => match args.as_slice() {
                [date] => ShellCommand::Delete(date.to_string()),
                _ => bail!("Usage: {}", verb.usage()),
            },
            Verb::Title => match rest.split_once(char::is_whitespace) {
                Some((date, title)) if !title.trim().is_empty() => ShellCommand::Title {
                    date: date.to_string(),
                    title: title.trim().to_string(),
                },
                _ => bail!("Usage: {}", verb.usage()),
            },
            Verb::Rate => match args.as_slice() {
                [date, rating] => ShellCommand::Rate {
                    date: date.to_string(),
                    rating: rating
                        .parse()
                        .with_context(|| format!("'{rating}' is not a rating from 1 to 10"))?,
                },
                _ => bail!("Usage: {}", verb.usage()),
            },
            Verb::Recent => match args.as_slice() {
                [] => ShellCommand::Recent(None),
                [n] => ShellCommand::Recent(Some(
                    n.parse()
                        .with_context(|| format!("'{n}' is not a number of runs"))?,
                )),
                _ => bail!("Usage: {}", verb.usage()),
            },
            Verb::Fast => ShellCommand::Fast,
            Verb::Long => ShellCommand::Long,
            Verb::List => ShellCommand::List,
            Verb::Help => ShellCommand::Help,
            Verb::Quit => ShellCommand::Quit,
        };
        Ok(command)
    }
}

/// What a command produced, for the renderer to show.
#[derive(Debug)]
pub enum Outcome {
    Info(String),
    Run { heading: String, run: RunEntry },
    Runs { heading: String, runs: Vec<RunEntry> },
    Empty,
    Help,
    Quit,
}

/// Applies one command to the ledger.
pub fn execute(
    ledger: &mut Ledger,
    config: &Config,
    command: ShellCommand,
) -> runlog_core::Result<Outcome> {
    debug!(?command, "executing shell command");
    let outcome = match command {
        ShellCommand::Load(path) => {
            let added = ledger.load_file(&path)?;
            Outcome::Info(format!("Loaded {added} runs from {}.", path.display()))
        }
        ShellCommand::Add {
            distance,
            time,
            date,
        } => {
            let run = RunEntry::new(distance, &time, date.as_deref())?;
            ledger.add(run.clone());
            Outcome::Run {
                heading: "Run has been added to your log!".to_string(),
                run,
            }
        }
        ShellCommand::Delete(date) => {
            let found = ledger.find_by_date(&date)?.date();
            match ledger.remove_by_date(found) {
                Some(run) => Outcome::Run {
                    heading: "The following run was removed:".to_string(),
                    run,
                },
                None => Outcome::Info(format!("No run found on {date}.")),
            }
        }
        ShellCommand::Title { date, title } => {
            let run = ledger.edit(&date, |run| {
                run.set_title(title);
                Ok(run.clone())
            })?;
            Outcome::Run {
                heading: "The following run has been edited:".to_string(),
                run,
            }
        }
        ShellCommand::Rate { date, rating } => {
            let run = ledger.edit(&date, |run| {
                run.set_rating(rating)?;
                Ok(run.clone())
            })?;
            Outcome::Run {
                heading: "The following run has been rated:".to_string(),
                run,
            }
        }
        ShellCommand::Fast => match ledger.fastest() {
            Some(run) => Outcome::Run {
                heading: "Your fastest run:".to_string(),
                run: run.clone(),
            },
            None => Outcome::Empty,
        },
        ShellCommand::Long => match ledger.longest() {
            Some(run) => Outcome::Run {
                heading: "Your longest run:".to_string(),
                run: run.clone(),
            },
            None => Outcome::Empty,
        },
        ShellCommand::Recent(count) => {
            if ledger.is_empty() {
                Outcome::Empty
            } else {
                let runs = ledger.latest(count.unwrap_or(config.recent_count)).to_vec();
                Outcome::Runs {
                    heading: format!("Your {} most recent runs:", runs.len()),
                    runs,
                }
            }
        }
        ShellCommand::List => {
            if ledger.is_empty() {
                Outcome::Empty
            } else {
                Outcome::Runs {
                    heading: format!("{} runs logged.", ledger.len()),
                    runs: ledger.runs().to_vec(),
                }
            }
        }
        ShellCommand::Help => Outcome::Help,
        ShellCommand::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Bad commands and failed operations are reported and the loop carries on.
pub fn shell_mode<R: BufRead>(
    input: R,
    renderer: &Renderer,
    ledger: &mut Ledger,
    config: &Config,
) -> Result<()> {
    renderer.print_info("Welcome to your running log! Type 'help' to list commands.");
    let mut lines = input.lines();
    loop {
        print!("runlog> ");
        std::io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::from_str(&line) {
            Ok(command) => command,
            Err(error) => {
                renderer.print_error(&error.to_string());
                continue;
            }
        };

        match execute(ledger, config, command) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => print_outcome(renderer, outcome),
            Err(error) => print_core_error(renderer, ledger, &error),
        }
    }
    renderer.print_info("Thanks for logging your runs. See you soon!");
    Ok(())
}

fn print_outcome(renderer: &Renderer, outcome: Outcome) {
    match outcome {
        Outcome::Info(message) => renderer.print_info(&message),
        Outcome::Run { heading, run } => {
            renderer.print_info(&heading);
            renderer.print_run(&run);
        }
        Outcome::Runs { heading, runs } => {
            renderer.print_info(&heading);
            renderer.print_runs(&runs);
        }
        Outcome::Empty => print_empty(renderer),
        Outcome::Help => {
            let help: Vec<&str> = Verb::iter().map(Verb::usage).collect();
            renderer.print_md(&format!("```\n{}\n```", help.join("\n")));
        }
        Outcome::Quit => {}
    }
}

fn print_core_error(renderer: &Renderer, ledger: &Ledger, error: &RunLogError) {
    renderer.print_error(&error.to_string());
    if let Some(line) = error.line() {
        renderer.print_info(&format!(
            "Runs before line {line} were kept. The log now has {} runs.",
            ledger.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::from_str(line).unwrap()
    }

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .bulk_load([
                "6.0,30:00,2024-03-01",
                "10.0,55:00,2024-03-02",
                "3.0,15:00,2024-03-03",
            ])
            .unwrap();
        ledger
    }

    #[test]
    fn verbs_are_case_insensitive_with_aliases() {
        assert_eq!(parse("FAST"), ShellCommand::Fast);
        assert_eq!(parse("Longest"), ShellCommand::Long);
        assert_eq!(parse("remove 2024-03-01"), ShellCommand::Delete("2024-03-01".into()));
        assert_eq!(parse("exit"), ShellCommand::Quit);
        assert_eq!(Verb::Delete.as_ref(), "delete");
    }

    #[test]
    fn parses_add_with_and_without_date() {
        assert_eq!(
            parse("add 4.13 00:42:14"),
            ShellCommand::Add {
                distance: 4.13,
                time: "00:42:14".into(),
                date: None
            }
        );
        assert_eq!(
            parse("add 6 30:00 2024-11-26"),
            ShellCommand::Add {
                distance: 6.0,
                time: "30:00".into(),
                date: Some("2024-11-26".into())
            }
        );
    }

    #[test]
    fn title_keeps_inner_spaces() {
        assert_eq!(
            parse("title 2024-03-01   Sunny   river loop "),
            ShellCommand::Title {
                date: "2024-03-01".into(),
                title: "Sunny   river loop".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_commands() {
        assert!(ShellCommand::from_str("dance").is_err());
        assert!(ShellCommand::from_str("add 5").is_err());
        assert!(ShellCommand::from_str("add five 30:00").is_err());
        assert!(ShellCommand::from_str("rate 2024-03-01 great").is_err());
        assert!(ShellCommand::from_str("title 2024-03-01").is_err());
        assert!(ShellCommand::from_str("load").is_err());
        assert!(ShellCommand::from_str("recent 1 2").is_err());
    }

    #[test]
    fn add_and_delete_round_trip() {
        let mut ledger = Ledger::new();
        let config = Config::default();
        execute(&mut ledger, &config, parse("add 5 25:00 2024-03-01")).unwrap();
        assert_eq!(ledger.len(), 1);

        let outcome = execute(&mut ledger, &config, parse("delete 2024-03-01")).unwrap();
        assert!(matches!(outcome, Outcome::Run { ref run, .. } if run.distance() == 5.0));
        assert!(ledger.is_empty());
    }

    #[test]
    fn delete_missing_date_is_not_found() {
        let mut ledger = seeded();
        let err = execute(&mut ledger, &Config::default(), parse("delete 2020-01-01")).unwrap_err();
        assert!(matches!(err, RunLogError::NotFound { .. }));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn invalid_add_leaves_ledger_unchanged() {
        let mut ledger = seeded();
        let err = execute(&mut ledger, &Config::default(), parse("add 5 00:00 2024-03-09")).unwrap_err();
        assert!(matches!(err, RunLogError::Validation(_)));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn fast_long_and_recent() {
        let mut ledger = seeded();
        let config = Config {
            recent_count: 2,
            ..Config::default()
        };

        match execute(&mut ledger, &config, ShellCommand::Fast).unwrap() {
            Outcome::Run { run, .. } => assert_eq!(run.pace().to_string(), "5:00"),
            other => panic!("unexpected {other:?}"),
        }
        match execute(&mut ledger, &config, ShellCommand::Long).unwrap() {
            Outcome::Run { run, .. } => assert_eq!(run.distance(), 10.0),
            other => panic!("unexpected {other:?}"),
        }
        match execute(&mut ledger, &config, ShellCommand::Recent(None)).unwrap() {
            Outcome::Runs { runs, .. } => {
                let dates: Vec<_> = runs.iter().map(|r| r.date().to_string()).collect();
                assert_eq!(dates, ["2024-03-02", "2024-03-03"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn queries_on_empty_ledger_are_empty() {
        let mut ledger = Ledger::new();
        let config = Config::default();
        for command in [ShellCommand::Fast, ShellCommand::Long, ShellCommand::Recent(None), ShellCommand::List] {
            assert!(matches!(
                execute(&mut ledger, &config, command).unwrap(),
                Outcome::Empty
            ));
        }
    }

    #[test]
    fn title_and_rate_edit_the_run() {
        let mut ledger = seeded();
        let config = Config::default();
        execute(&mut ledger, &config, parse("title 2024-03-02 Long Sunday")).unwrap();
        execute(&mut ledger, &config, parse("rate 2024-03-02 9")).unwrap();
        let run = ledger.find_by_date("2024-03-02").unwrap();
        assert_eq!(run.title(), Some("Long Sunday"));
        assert_eq!(run.rating(), 9);

        let err = execute(&mut ledger, &config, parse("rate 2024-03-02 11")).unwrap_err();
        assert!(matches!(err, RunLogError::Validation(_)));
        assert_eq!(ledger.find_by_date("2024-03-02").unwrap().rating(), 9);
    }

    #[test]
    fn load_keeps_runs_before_a_bad_line() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("runs.csv");
        fs::write(&path, "6.0,30:00,2024-03-01\n5.0,bad,2024-03-02\n").unwrap();

        let mut ledger = Ledger::new();
        let err = execute(&mut ledger, &Config::default(), ShellCommand::Load(path)).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert_eq!(ledger.len(), 1);
    }
}
