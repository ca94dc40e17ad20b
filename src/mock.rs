use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Event, EventKind, Favorite, Fixture, FixtureStatus, Goals, League, Lineup, MatchSnapshot,
    PlayerSlot, Position, Team, Teams,
};
use crate::source::DataSource;

pub const MOCK_USER: &str = "mock-user-1";

const FIRST_NAMES: [&str; 10] = [
    "Marek", "Peter", "Juraj", "Tomáš", "Lukáš", "Martin", "Michal", "Ján", "Ivan", "Dušan",
];
const SURNAMES: [&str; 10] = [
    "Kováč", "Varga", "Tóth", "Nagy", "Horváth", "Molnár", "Novák", "Baláž", "Sokol", "Zelený",
];
const FIRST_PLAYER_ID: u64 = 2000;
const SUBSTITUTES: usize = 7;
const FOUR_FOUR_TWO: [(Position, usize); 4] = [
    (Position::Goalkeeper, 1),
    (Position::Defender, 4),
    (Position::Midfielder, 4),
    (Position::Forward, 2),
];

/// Fake rosters for fixtures the sample feed knows about.
pub struct LineupGenerator {
    rng: StdRng,
    next_player_id: u64,
}

impl LineupGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_player_id: FIRST_PLAYER_ID,
        }
    }

    /// `lines` includes the goalkeeper group.
    pub fn team_lineup(&mut self, team: Team, lines: &[(Position, usize)]) -> Lineup {
        let mut start_xi = Vec::new();
        for &(pos, count) in lines {
            for _ in 0..count {
                start_xi.push(self.player(pos));
            }
        }

        let substitutes = (0..SUBSTITUTES)
            .map(|i| {
                let pos = match i % 3 {
                    0 => Position::Defender,
                    1 => Position::Midfielder,
                    _ => Position::Forward,
                };
                self.player(pos)
            })
            .collect();

        let formation = lines
            .iter()
            .filter(|(pos, _)| *pos != Position::Goalkeeper)
            .map(|(_, count)| count.to_string())
            .collect::<Vec<_>>()
            .join("-");
        let coach_suffix = team.name.split_whitespace().last().unwrap_or_default();

        Lineup {
            coach: Some(format!("Hlavný tréner {coach_suffix}")),
            formation: Some(formation),
            start_xi,
            substitutes,
            team,
        }
    }

    fn player(&mut self, pos: Position) -> PlayerSlot {
        let id = self.next_player_id;
        self.next_player_id += 1;
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = SURNAMES[self.rng.gen_range(0..SURNAMES.len())];
        PlayerSlot {
            id: Some(id),
            name: format!("{first} {last}"),
            number: Some(self.rng.gen_range(1..=99)),
            pos: Some(pos),
        }
    }
}

/// Offline feed backed by the bundled sample data.
pub struct MockSource {
    seed: u64,
}

impl MockSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DataSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn live_fixtures(&self) -> Result<Vec<MatchSnapshot>> {
        Ok(sample_fixtures())
    }

    fn match_events(&self, fixture_id: &str) -> Result<Vec<Event>> {
        Ok(sample_events(fixture_id))
    }

    fn match_lineups(&self, fixture_id: &str) -> Result<Vec<Lineup>> {
        let Some(fixture) = detailed_fixture(fixture_id) else {
            return Ok(Vec::new());
        };
        let mut generator = LineupGenerator::new(self.seed);
        Ok(vec![
            generator.team_lineup(fixture.teams.home, &FOUR_FOUR_TWO),
            generator.team_lineup(fixture.teams.away, &FOUR_FOUR_TWO),
        ])
    }
}

// Only these two fixtures carry events and lineups in the sample feed.
fn detailed_fixture(fixture_id: &str) -> Option<MatchSnapshot> {
    if fixture_id != "1000001" && fixture_id != "1000006" {
        return None;
    }
    sample_fixtures()
        .into_iter()
        .find(|m| m.fixture_id() == fixture_id)
}

fn logo_team(id: u32, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        logo: Some(format!("https://media.api-sports.io/football/teams/{id}.png")),
    }
}

fn snapshot(
    id: u64,
    date: &str,
    status: (&str, &str, Option<u16>),
    league: (u32, &str, &str),
    home: (u32, &str),
    away: (u32, &str),
    goals: (Option<u8>, Option<u8>),
) -> MatchSnapshot {
    MatchSnapshot {
        fixture: Fixture {
            id,
            date: Some(date.to_string()),
            status: FixtureStatus {
                short: status.0.to_string(),
                long: Some(status.1.to_string()),
                elapsed: status.2,
            },
        },
        league: League {
            id: league.0,
            name: league.1.to_string(),
            country: league.2.to_string(),
        },
        teams: Teams {
            home: logo_team(home.0, home.1),
            away: logo_team(away.0, away.1),
        },
        goals: Goals {
            home: goals.0,
            away: goals.1,
        },
    }
}

pub fn sample_fixtures() -> Vec<MatchSnapshot> {
    vec![
        snapshot(
            1000001,
            "2025-12-03T20:00:00+00:00",
            ("2H", "Second Half", Some(75)),
            (10, "Mock Super Liga", "SVK"),
            (541, "FC Mock Domov"),
            (542, "SC Mock Hostia"),
            (Some(3), Some(1)),
        ),
        snapshot(
            1000002,
            "2025-12-03T20:00:00+00:00",
            ("FT", "Match Finished", None),
            (11, "Mock Pohár", "CZE"),
            (543, "Test Sparta"),
            (544, "Test Slavia"),
            (Some(0), Some(2)),
        ),
        snapshot(
            1000003,
            "2025-12-04T18:30:00+00:00",
            ("HT", "Halftime", Some(45)),
            (39, "Premier League Mock", "ENG"),
            (33, "Man Utd Mock"),
            (40, "Liverpool Mock"),
            (Some(1), Some(1)),
        ),
        snapshot(
            1000004,
            "2025-12-04T21:00:00+00:00",
            ("NS", "Not Started", Some(0)),
            (78, "Bundesliga Mock", "GER"),
            (161, "Bayern Mock"),
            (165, "Dortmund Mock"),
            (None, None),
        ),
        snapshot(
            1000005,
            "2025-12-05T15:00:00+00:00",
            ("1H", "First Half", Some(5)),
            (128, "Série A Mock", "BRA"),
            (131, "Mock A"),
            (133, "Mock B"),
            (Some(0), Some(0)),
        ),
        snapshot(
            1000006,
            "2025-12-05T17:00:00+00:00",
            ("2H", "Second Half", Some(60)),
            (140, "La Liga Mock", "ESP"),
            (529, "Mock C"),
            (530, "Mock D"),
            (Some(2), Some(2)),
        ),
    ]
}

fn event(elapsed: u16, team: (u32, &str), player: &str, kind: EventKind, detail: &str) -> Event {
    Event {
        elapsed: Some(elapsed),
        team: Team::new(team.0, team.1),
        player: player.to_string(),
        kind,
        detail: detail.to_string(),
        assist: None,
    }
}

pub fn sample_events(fixture_id: &str) -> Vec<Event> {
    match fixture_id {
        "1000001" => {
            let home = (541, "FC Mock Domov");
            let away = (542, "SC Mock Hostia");
            vec![
                event(15, home, "Peter Golista", EventKind::Goal, "Normal Goal"),
                event(30, away, "Ján Rýchly", EventKind::Goal, "Normal Goal"),
                event(40, away, "Karol Agresor", EventKind::Card, "Yellow Card"),
                event(65, home, "Peter Golista", EventKind::Goal, "Normal Goal"),
                event(75, home, "Ivan Striedač", EventKind::Subst, "Substitution"),
            ]
        }
        "1000006" => {
            let home = (529, "Mock C");
            let away = (530, "Mock D");
            vec![
                event(10, home, "Rýchly Gól", EventKind::Goal, "Normal Goal"),
                event(25, away, "Odpoveď", EventKind::Goal, "Penalty"),
                event(55, home, "Druhý Strelec", EventKind::Goal, "Normal Goal"),
                event(60, away, "Žltý Faul", EventKind::Card, "Yellow Card"),
                event(70, away, "Kopáč", EventKind::Goal, "Normal Goal"),
            ]
        }
        _ => Vec::new(),
    }
}

pub fn sample_favorites() -> Vec<Favorite> {
    let fixtures = sample_fixtures();
    let teams = fixtures
        .iter()
        .find(|m| m.fixture.id == 1000003)
        .map(|m| m.teams.clone())
        .unwrap_or_else(|| Teams {
            home: Team::new(33, "Man Utd Mock"),
            away: Team::new(40, "Liverpool Mock"),
        });
    vec![Favorite {
        id: 1,
        user_id: MOCK_USER.to_string(),
        match_id: "1000003".to_string(),
        league: "Premier League Mock".to_string(),
        teams,
    }]
}
