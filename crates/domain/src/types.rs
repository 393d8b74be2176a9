// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Wire form of a league slot nobody has been assigned to yet.
pub const UNASSIGNED_MARKER: &str = "";

/// Wire form of a knockout slot waiting on an earlier round's winner.
pub const AWAITING_WINNER_MARKER: &str = "TBD";

/// A player's display name.
///
/// Players have no numeric identity; the name is the key everywhere,
/// including inside archived events.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a new `PlayerName`.
    ///
    /// No validation happens here; see `validate_player_name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Stable identifier of a match, unique within one event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Creates a new `MatchId`.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// One side of a match slot.
///
/// Serialized as a bare string so archived events keep the `""` / `"TBD"`
/// sentinels other tools expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Participant {
    /// League slot not yet filled in.
    Unassigned,
    /// Knockout slot waiting for the winner of an earlier round.
    AwaitingWinner,
    /// A named player.
    Player(PlayerName),
}

impl Participant {
    /// Convenience constructor for a named player.
    #[must_use]
    pub fn player(name: &str) -> Self {
        Self::Player(PlayerName::new(name))
    }

    /// Returns the player's name if this slot holds one.
    #[must_use]
    pub const fn name(&self) -> Option<&PlayerName> {
        match self {
            Self::Player(name) => Some(name),
            Self::Unassigned | Self::AwaitingWinner => None,
        }
    }

    /// Whether a real player occupies this slot.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Player(_))
    }

    /// Whether this slot holds the given player.
    #[must_use]
    pub fn is(&self, player: &PlayerName) -> bool {
        self.name() == Some(player)
    }
}

impl From<String> for Participant {
    fn from(value: String) -> Self {
        match value.as_str() {
            UNASSIGNED_MARKER => Self::Unassigned,
            AWAITING_WINNER_MARKER => Self::AwaitingWinner,
            _ => Self::Player(PlayerName(value)),
        }
    }
}

impl From<Participant> for String {
    fn from(value: Participant) -> Self {
        match value {
            Participant::Unassigned => Self::from(UNASSIGNED_MARKER),
            Participant::AwaitingWinner => Self::from(AWAITING_WINNER_MARKER),
            Participant::Player(name) => name.0,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned => f.pad("-"),
            Self::AwaitingWinner => f.pad(AWAITING_WINNER_MARKER),
            Self::Player(name) => std::fmt::Display::fmt(name, f),
        }
    }
}

/// Which of the two slots of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// `p1`.
    First,
    /// `p2`.
    Second,
}

impl Side {
    /// The opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Position of a knockout match in the stepladder.
///
/// The ladder is strictly ordered: semifinal, prefinal, final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnockoutStage {
    /// League rank 3 against rank 4.
    Semifinal,
    /// Semifinal winner against league rank 2.
    Prefinal,
    /// Prefinal winner against league rank 1.
    Final,
}

impl KnockoutStage {
    /// All stages in ladder order.
    pub const ALL: [Self; 3] = [Self::Semifinal, Self::Prefinal, Self::Final];

    /// Converts this stage to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Semifinal => "semifinal",
            Self::Prefinal => "prefinal",
            Self::Final => "final",
        }
    }

    /// The stage the winner of this one advances into.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Semifinal => Some(Self::Prefinal),
            Self::Prefinal => Some(Self::Final),
            Self::Final => None,
        }
    }

    /// League rank of the seeded player waiting in this stage.
    ///
    /// The semifinal has two seeded players (3 and 4) and no waiting seed.
    #[must_use]
    pub const fn waiting_seed(self) -> Option<usize> {
        match self {
            Self::Semifinal => None,
            Self::Prefinal => Some(2),
            Self::Final => Some(1),
        }
    }
}

impl FromStr for KnockoutStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semifinal" => Ok(Self::Semifinal),
            "prefinal" => Ok(Self::Prefinal),
            "final" => Ok(Self::Final),
            _ => Err(DomainError::InvalidStage(s.to_string())),
        }
    }
}

impl std::fmt::Display for KnockoutStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Competition phase a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Round-robin league.
    League,
    /// Stepladder knockout.
    Knockout,
}

impl Phase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::League => "league",
            Self::Knockout => "knockout",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a match sits in the event.
///
/// Penalty scores only exist on knockout matches; a league match cannot
/// carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum MatchRole {
    /// A league fixture in the given round.
    League {
        /// Round-robin round number (1-based).
        round: u32,
    },
    /// A stepladder match.
    Knockout {
        /// Ladder position.
        stage: KnockoutStage,
        /// Penalty shoot-out score for `p1`.
        #[serde(default)]
        pk1: Option<u32>,
        /// Penalty shoot-out score for `p2`.
        #[serde(default)]
        pk2: Option<u32>,
    },
}

/// The unit of recorded competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Stable identifier.
    pub id: MatchId,
    /// First participant.
    pub p1: Participant,
    /// Second participant.
    pub p2: Participant,
    /// Goals scored by `p1`.
    pub s1: Option<u32>,
    /// Goals scored by `p2`.
    pub s2: Option<u32>,
    /// League: mirrors score completeness. Knockout: the confirmed/locked bit.
    pub completed: bool,
    /// Phase and stage.
    #[serde(flatten)]
    pub role: MatchRole,
}

impl Match {
    /// Creates an empty league fixture for the given round.
    #[must_use]
    pub fn league(id: &str, round: u32) -> Self {
        Self {
            id: MatchId::new(id),
            p1: Participant::Unassigned,
            p2: Participant::Unassigned,
            s1: None,
            s2: None,
            completed: false,
            role: MatchRole::League { round },
        }
    }

    /// Creates an unseeded knockout match for the given stage.
    #[must_use]
    pub fn knockout(id: &str, stage: KnockoutStage) -> Self {
        Self {
            id: MatchId::new(id),
            p1: Participant::AwaitingWinner,
            p2: Participant::AwaitingWinner,
            s1: None,
            s2: None,
            completed: false,
            role: MatchRole::Knockout {
                stage,
                pk1: None,
                pk2: None,
            },
        }
    }

    /// The phase this match belongs to.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.role {
            MatchRole::League { .. } => Phase::League,
            MatchRole::Knockout { .. } => Phase::Knockout,
        }
    }

    /// League round, if this is a league match.
    #[must_use]
    pub const fn round(&self) -> Option<u32> {
        match self.role {
            MatchRole::League { round } => Some(round),
            MatchRole::Knockout { .. } => None,
        }
    }

    /// Ladder stage, if this is a knockout match.
    #[must_use]
    pub const fn stage(&self) -> Option<KnockoutStage> {
        match self.role {
            MatchRole::League { .. } => None,
            MatchRole::Knockout { stage, .. } => Some(stage),
        }
    }

    /// Penalty scores `(pk1, pk2)`; `None` for league matches.
    #[must_use]
    pub const fn penalties(&self) -> Option<(Option<u32>, Option<u32>)> {
        match self.role {
            MatchRole::League { .. } => None,
            MatchRole::Knockout { pk1, pk2, .. } => Some((pk1, pk2)),
        }
    }

    /// Both scores have been entered.
    #[must_use]
    pub const fn is_score_complete(&self) -> bool {
        self.s1.is_some() && self.s2.is_some()
    }

    /// Both slots hold real players.
    #[must_use]
    pub const fn has_both_players(&self) -> bool {
        self.p1.is_assigned() && self.p2.is_assigned()
    }

    /// The participant in the given slot.
    #[must_use]
    pub const fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::First => &self.p1,
            Side::Second => &self.p2,
        }
    }

    /// Which slot the given player occupies, if any.
    #[must_use]
    pub fn side_of(&self, player: &PlayerName) -> Option<Side> {
        if self.p1.is(player) {
            Some(Side::First)
        } else if self.p2.is(player) {
            Some(Side::Second)
        } else {
            None
        }
    }

    /// Goals scored from the given slot.
    #[must_use]
    pub const fn score(&self, side: Side) -> Option<u32> {
        match side {
            Side::First => self.s1,
            Side::Second => self.s2,
        }
    }

    /// Whether this match is between exactly these two players, in either order.
    #[must_use]
    pub fn is_between(&self, a: &PlayerName, b: &PlayerName) -> bool {
        (self.p1.is(a) && self.p2.is(b)) || (self.p1.is(b) && self.p2.is(a))
    }
}

/// The ordered, fixed set of players taking part in one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerName>", into = "Vec<PlayerName>")]
pub struct Roster(Vec<PlayerName>);

impl Roster {
    /// Creates a roster, rejecting empty, reserved or repeated names.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The roster is empty
    /// - A name is empty or equal to a reserved marker
    /// - A name appears twice
    pub fn new(players: Vec<PlayerName>) -> Result<Self, DomainError> {
        crate::validation::validate_roster(&players)?;
        Ok(Self(players))
    }

    /// Builds a roster from plain string names.
    ///
    /// # Errors
    ///
    /// Same as [`Roster::new`].
    pub fn from_names(names: &[&str]) -> Result<Self, DomainError> {
        Self::new(names.iter().map(|n| PlayerName::new(n)).collect())
    }

    /// Players in roster order.
    #[must_use]
    pub fn players(&self) -> &[PlayerName] {
        &self.0
    }

    /// Whether the player is on this roster.
    #[must_use]
    pub fn contains(&self, player: &PlayerName) -> bool {
        self.0.contains(player)
    }

    /// Roster position of the player (0-based).
    #[must_use]
    pub fn position(&self, player: &PlayerName) -> Option<usize> {
        self.0.iter().position(|p| p == player)
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed roster; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<PlayerName>> for Roster {
    type Error = DomainError;

    fn try_from(value: Vec<PlayerName>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roster> for Vec<PlayerName> {
    fn from(value: Roster) -> Self {
        value.0
    }
}
