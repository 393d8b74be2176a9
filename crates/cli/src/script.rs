// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted events.
//!
//! A script is a JSON object with a roster and an ordered list of commands:
//!
//! ```json
//! {
//!   "id": "autumn-cup",
//!   "roster": ["A", "B", "C", "D"],
//!   "commands": [
//!     {"command": "assign_player", "match_id": "L1", "slot": "first", "player": "A"},
//!     {"command": "finalize_league"}
//!   ]
//! }
//! ```
//!
//! Commands run in order through the event lifecycle. The first rejection
//! stops the script.

use ladder_cup::{Action, Command, EventState, TransitionResult, apply};
use ladder_cup_domain::Roster;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// A scripted event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventScript {
    /// Archive id; generated from the completion time when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// The players.
    pub roster: Roster,
    /// Commands in order.
    pub commands: Vec<Command>,
}

/// Final state of a script run and what each command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// The event after the last command.
    pub state: EventState,
    /// One action per command.
    pub actions: Vec<Action>,
}

/// Parses a script from JSON text.
///
/// # Errors
///
/// Returns `CliError::Json` if the text is not a valid script, including
/// an invalid roster.
pub fn parse_script(text: &str) -> Result<EventScript, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// Runs every command of a script against a fresh event.
///
/// # Errors
///
/// Returns `CliError::Rejected` naming the first command that failed.
pub fn run_script(script: EventScript) -> Result<ScriptOutcome, CliError> {
    let mut state: EventState = EventState::new(script.roster);
    let mut actions: Vec<Action> = Vec::with_capacity(script.commands.len());

    for (index, command) in script.commands.into_iter().enumerate() {
        let name: &'static str = command.name();
        let result: TransitionResult =
            apply(&state, command).map_err(|source| CliError::Rejected {
                index: index + 1,
                name,
                source,
            })?;
        debug!(step = index + 1, command = name, "Script step applied");
        state = result.new_state;
        actions.push(result.action);
    }

    Ok(ScriptOutcome { state, actions })
}
