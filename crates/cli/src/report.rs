// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text tables for the terminal.

use ladder_cup_domain::{
    AggregatedRecord, ArchivedEvent, Match, OpponentRecord, Standing, TitleCount,
};
use ladder_cup_persistence::ArchivedEventSummary;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::CliError;

const DATE_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

/// Formats a millisecond Unix timestamp as a UTC date and time.
///
/// # Errors
///
/// Returns `CliError::Timestamp` if the value is out of range.
pub fn format_timestamp(millis: i64) -> Result<String, CliError> {
    let invalid = |reason: String| CliError::Timestamp { millis, reason };

    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .map_err(|e| invalid(e.to_string()))?
        .format(DATE_FORMAT)
        .map_err(|e| invalid(e.to_string()))
}

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    now.unix_timestamp() * 1000 + i64::from(now.millisecond())
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// One line per archived event.
///
/// # Errors
///
/// Returns an error if an event timestamp cannot be formatted.
pub fn format_history(events: &[ArchivedEventSummary]) -> Result<String, CliError> {
    if events.is_empty() {
        return Ok(String::from("No archived events"));
    }

    let mut lines: Vec<String> = vec![format!(
        "{:<20} {:<22} {:<12} Players",
        "Event", "Completed", "Champion"
    )];
    for event in events {
        lines.push(format!(
            "{:<20} {:<22} {:<12} {}",
            event.event_id,
            format_timestamp(event.recorded_at)?,
            event.champion,
            event.player_count
        ));
    }
    Ok(lines.join("\n"))
}

fn format_score(score: Option<u32>) -> String {
    score.map_or_else(|| String::from("-"), |s| s.to_string())
}

/// The knockout matches of an event, in ladder order.
#[must_use]
pub fn format_knockout(matches: &[Match]) -> String {
    matches
        .iter()
        .map(|m| {
            let stage: &str = m.stage().map_or("", |stage| stage.as_str());
            let mut line: String = format!(
                "{:<10} {:<12} {:>3}-{:<3} {}",
                stage,
                m.p1,
                format_score(m.s1),
                format_score(m.s2),
                m.p2
            );
            if let Some((Some(pk1), Some(pk2))) = m.penalties() {
                line.push_str(&format!(" (pens {pk1}-{pk2})"));
            }
            line
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// One archived event: header, frozen league table and knockout.
///
/// # Errors
///
/// Returns an error if the event timestamp cannot be formatted.
pub fn format_event(event: &ArchivedEvent) -> Result<String, CliError> {
    Ok([
        format!(
            "{}  completed {}  champion {}",
            event.id,
            format_timestamp(event.timestamp)?,
            event.winner
        ),
        String::new(),
        format_standings(&event.standings),
        String::new(),
        format_knockout(&event.knockout_matches),
    ]
    .join("\n"))
}

/// A league table.
#[must_use]
pub fn format_standings(standings: &[Standing]) -> String {
    let mut lines: Vec<String> = vec![format!(
        "{:>2}  {:<12} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
        "#", "Player", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    )];
    for s in standings {
        lines.push(format!(
            "{:>2}  {:<12} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
            s.rank,
            s.name,
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.gf,
            s.ga,
            signed(s.gd),
            s.points
        ));
    }
    lines.join("\n")
}

/// The lifetime statistics table.
#[must_use]
pub fn format_records(records: &[AggregatedRecord]) -> String {
    if records.is_empty() {
        return String::from("No matches recorded");
    }

    let mut lines: Vec<String> = vec![format!(
        "{:<12} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>6} {:>4}",
        "Player", "M", "W", "D", "L", "GF", "GA", "Win%", "Pts"
    )];
    for r in records {
        lines.push(format!(
            "{:<12} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5.1}% {:>4}",
            r.name,
            r.matches,
            r.wins,
            r.draws,
            r.losses,
            r.gf,
            r.ga,
            r.win_rate() * 100.0,
            r.points
        ));
    }
    lines.join("\n")
}

/// A player's record against each opponent.
#[must_use]
pub fn format_rivals(player: &str, rivals: &[OpponentRecord]) -> String {
    if rivals.is_empty() {
        return format!("No recorded matches for {player}");
    }

    let mut lines: Vec<String> = vec![format!(
        "{:<12} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
        "Opponent", "M", "W", "D", "L", "GF", "GA"
    )];
    for r in rivals {
        lines.push(format!(
            "{:<12} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            r.opponent, r.played, r.wins, r.draws, r.losses, r.gf, r.ga
        ));
    }
    lines.join("\n")
}

/// Titles per champion.
#[must_use]
pub fn format_titles(tally: &[TitleCount]) -> String {
    if tally.is_empty() {
        return String::from("No champions yet");
    }

    tally
        .iter()
        .map(|t| format!("{:<12} {}", t.name, t.titles))
        .collect::<Vec<String>>()
        .join("\n")
}
