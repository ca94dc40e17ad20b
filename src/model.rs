use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureStatus {
    pub short: String,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub elapsed: Option<u16>,
}

impl FixtureStatus {
    pub fn new(short: &str, elapsed: Option<u16>) -> Self {
        Self {
            short: short.to_string(),
            long: None,
            elapsed,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(
            self.short.as_str(),
            "1H" | "HT" | "2H" | "ET" | "BT" | "P" | "LIVE" | "INT"
        )
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.short.as_str(), "FT" | "AET" | "PEN")
    }

    pub fn is_not_started(&self) -> bool {
        matches!(self.short.as_str(), "NS" | "TBD")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u64,
    #[serde(default)]
    pub date: Option<String>,
    pub status: FixtureStatus,
}

impl Fixture {
    /// Kickoff time, if the upstream timestamp is valid RFC 3339.
    pub fn kickoff(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.date.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Team {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            logo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub home: Option<u8>,
    pub away: Option<u8>,
}

/// One fixture as the fixtures list delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub fixture: Fixture,
    pub league: League,
    pub teams: Teams,
    #[serde(default)]
    pub goals: Goals,
}

impl MatchSnapshot {
    pub fn fixture_id(&self) -> String {
        self.fixture.id.to_string()
    }

    pub fn score_line(&self) -> String {
        match (self.goals.home, self.goals.away) {
            (Some(home), Some(away)) => format!("{home} - {away}"),
            _ => "- : -".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Goal,
    Card,
    Subst,
    Var,
    Other(String),
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Goal" => EventKind::Goal,
            "Card" => EventKind::Card,
            "subst" | "Subst" => EventKind::Subst,
            "Var" => EventKind::Var,
            _ => EventKind::Other(raw),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Goal => "Goal".to_string(),
            EventKind::Card => "Card".to_string(),
            EventKind::Subst => "subst".to_string(),
            EventKind::Var => "Var".to_string(),
            EventKind::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub elapsed: Option<u16>,
    pub team: Team,
    pub player: String,
    pub kind: EventKind,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub assist: Option<String>,
}

impl Event {
    /// Goals and cards are the only events shown on the match timeline.
    pub fn is_highlight(&self) -> bool {
        matches!(self.kind, EventKind::Goal | EventKind::Card)
    }

    pub fn is_yellow_card(&self) -> bool {
        self.kind == EventKind::Card && self.detail == "Yellow Card"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "G")]
    Goalkeeper,
    #[serde(rename = "D")]
    Defender,
    #[serde(rename = "M")]
    Midfielder,
    #[serde(rename = "F")]
    Forward,
}

impl Position {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "G" => Some(Position::Goalkeeper),
            "D" => Some(Position::Defender),
            "M" => Some(Position::Midfielder),
            "F" => Some(Position::Forward),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "G",
            Position::Defender => "D",
            Position::Midfielder => "M",
            Position::Forward => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub number: Option<u8>,
    pub pos: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub team: Team,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub formation: Option<String>,
    pub start_xi: Vec<PlayerSlot>,
    #[serde(default)]
    pub substitutes: Vec<PlayerSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team: Team,
    pub points: u32,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goals_diff: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: String,
    pub match_id: String,
    pub league: String,
    pub teams: Teams,
}
