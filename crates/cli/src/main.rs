// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod report;
mod script;

use clap::{Parser, Subcommand, ValueEnum};
use ladder_cup::{EventState, archive_event};
use ladder_cup_domain::{
    AggregatedRecord, ArchivedEvent, PhaseFilter, PlayerName, RecordSortKey, Roster,
    SortDirection, aggregate_records, champion_tally, head_to_head, matches_from_archive,
    sort_records, validate_roster_member,
};
use ladder_cup_persistence::{ArchiveStore, Persistence};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::CliError;
use crate::report::{
    format_event, format_history, format_records, format_rivals, format_standings, format_titles,
    now_millis,
};
use crate::script::{EventScript, ScriptOutcome, parse_script, run_script};

/// Ladder Cup - run league-and-stepladder cups and browse their history
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` archive database. If not provided, uses in-memory database.
    #[arg(short, long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum CliCommand {
    /// List archived events
    History,
    /// Show one archived event: final table and knockout
    Show {
        /// Archived event id
        event_id: String,
    },
    /// Lifetime statistics across all archived events
    Stats {
        /// Which matches to count
        #[arg(long, value_enum, default_value_t = PhaseArg::All)]
        phase: PhaseArg,
        /// Column to sort on (default: points, then goals for)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Sort smallest first
        #[arg(long)]
        ascending: bool,
    },
    /// One player's record against each opponent
    Rivals {
        /// The player
        player: String,
        /// Which matches to count
        #[arg(long, value_enum, default_value_t = PhaseArg::All)]
        phase: PhaseArg,
    },
    /// Titles per champion
    Titles,
    /// Run a scripted event and archive it once a champion is crowned
    Run {
        /// JSON script with a roster and commands
        script: PathBuf,
    },
    /// Append an already-archived event
    Import {
        /// JSON archived event
        event: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseArg {
    All,
    League,
    Knockout,
}

impl From<PhaseArg> for PhaseFilter {
    fn from(value: PhaseArg) -> Self {
        match value {
            PhaseArg::All => Self::All,
            PhaseArg::League => Self::League,
            PhaseArg::Knockout => Self::Knockout,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SortArg {
    Name,
    Matches,
    Wins,
    Draws,
    Losses,
    Gf,
    Ga,
    WinRate,
    Points,
}

impl From<SortArg> for RecordSortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Name => Self::Name,
            SortArg::Matches => Self::Matches,
            SortArg::Wins => Self::Wins,
            SortArg::Draws => Self::Draws,
            SortArg::Losses => Self::Losses,
            SortArg::Gf => Self::GoalsFor,
            SortArg::Ga => Self::GoalsAgainst,
            SortArg::WinRate => Self::WinRate,
            SortArg::Points => Self::Points,
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn open_store(database: Option<&str>) -> Result<Persistence, CliError> {
    let persistence: Persistence = if let Some(db_path) = database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

/// Runs one subcommand against the archive.
///
/// # Arguments
///
/// * `store` - The archive
/// * `command` - The subcommand
/// * `now_ms` - Completion time stamped on newly archived events
///
/// # Returns
///
/// The text to print.
fn execute(store: &mut Persistence, command: CliCommand, now_ms: i64) -> Result<String, CliError> {
    match command {
        CliCommand::History => format_history(&store.list_summaries()?),
        CliCommand::Show { event_id } => format_event(&store.get_event(&event_id)?),
        CliCommand::Stats {
            phase,
            sort,
            ascending,
        } => {
            let events: Vec<ArchivedEvent> = store.load_all()?;
            let mut records: Vec<AggregatedRecord> =
                aggregate_records(matches_from_archive(&events), phase.into());
            if sort.is_some() || ascending {
                let direction: SortDirection = if ascending {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                };
                sort_records(
                    &mut records,
                    sort.map_or(RecordSortKey::Points, Into::into),
                    direction,
                );
            }
            Ok(format_records(&records))
        }
        CliCommand::Rivals { player, phase } => {
            let events: Vec<ArchivedEvent> = store.load_all()?;
            let rivals = head_to_head(
                matches_from_archive(&events),
                &PlayerName::new(&player),
                phase.into(),
            );
            Ok(format_rivals(&player, &rivals))
        }
        CliCommand::Titles => Ok(format_titles(&champion_tally(&store.load_all()?))),
        CliCommand::Run { script } => {
            let script: EventScript = parse_script(&read_file(&script)?)?;
            run_and_archive(store, script, now_ms)
        }
        CliCommand::Import { event } => {
            let event: ArchivedEvent = serde_json::from_str(&read_file(&event)?)?;
            let roster: Roster = Roster::new(event.players.clone())?;
            validate_roster_member(&roster, &event.winner)?;
            store.append_one(&event)?;
            Ok(format!("Imported {} (champion {})", event.id, event.winner))
        }
    }
}

fn run_and_archive<S: ArchiveStore>(
    store: &mut S,
    script: EventScript,
    now_ms: i64,
) -> Result<String, CliError> {
    let id: Option<String> = script.id.clone();
    let outcome: ScriptOutcome = run_script(script)?;
    let state: &EventState = &outcome.state;

    let mut lines: Vec<String> = outcome
        .actions
        .iter()
        .map(|action| match &action.details {
            Some(details) => format!("{}: {details}", action.name),
            None => action.name.clone(),
        })
        .collect();
    lines.push(String::new());
    lines.push(format_standings(&state.standings()));
    lines.push(String::new());

    if state.champion.is_some() {
        let id: String = id.unwrap_or_else(|| format!("event-{now_ms}"));
        let event: ArchivedEvent = archive_event(state, &id, now_ms)?;
        store.append_one(&event)?;
        lines.push(format!("Champion {} archived as {id}", event.winner));
    } else {
        lines.push(format!(
            "Event not finished ({}); nothing archived",
            state.bracket_phase()
        ));
    }

    Ok(lines.join("\n"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store: Persistence = open_store(args.database.as_deref())?;

    match execute(&mut store, args.command, now_millis()) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(%err, "Command failed");
            Err(err.into())
        }
    }
}
