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

//! Event lifecycle for a league-and-stepladder cup.
//!
//! An event is an [`EventState`] changed only through [`apply`], which takes
//! a [`Command`] and returns either a whole new state or a [`CoreError`].

mod apply;
mod archive;
mod bracket;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use archive::archive_event;
pub use bracket::{
    Bracket, BracketPhase, FINAL_ID, PREFINAL_ID, SEMIFINAL_ID, bracket_phase, confirm_stage,
    final_winner,
};
pub use command::Command;
pub use error::CoreError;
pub use state::{Action, EventState, LEAGUE_ROUNDS, MATCHES_PER_ROUND, TransitionResult};
