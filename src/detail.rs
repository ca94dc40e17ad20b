use serde::Serialize;

use crate::favorites::find_favorite;
use crate::formation::{PlacedPlayer, place_starters};
use crate::model::{Event, Favorite, Lineup, MatchSnapshot, StandingsRow};
use crate::standings::reconcile_standings;

/// Everything the match screen needs, already resolved by the fetch layer.
#[derive(Debug, Clone, Copy)]
pub struct MatchDetailInput<'a> {
    pub snapshot: &'a MatchSnapshot,
    pub events: &'a [Event],
    pub lineups: &'a [Lineup],
    pub standings: &'a [StandingsRow],
    pub favorites: &'a [Favorite],
}

#[derive(Debug, Clone, Serialize)]
pub struct LineupView {
    pub lineup: Lineup,
    pub starters: Vec<PlacedPlayer>,
}

impl LineupView {
    fn new(lineup: &Lineup) -> Self {
        Self {
            starters: place_starters(lineup.formation.as_deref(), &lineup.start_xi),
            lineup: lineup.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LineupPair {
    pub home: LineupView,
    pub away: LineupView,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchDetailView {
    pub snapshot: MatchSnapshot,
    /// Goals and cards in feed order.
    pub timeline: Vec<Event>,
    pub event_count: usize,
    pub lineups: Option<LineupPair>,
    pub standings: Option<Vec<StandingsRow>>,
    pub favorite_id: Option<i64>,
    pub is_favorite: bool,
}

pub fn build_match_detail(input: MatchDetailInput<'_>) -> MatchDetailView {
    let snapshot = input.snapshot;

    let timeline = input
        .events
        .iter()
        .filter(|event| event.is_highlight())
        .cloned()
        .collect();

    let lineups = match input.lineups {
        [home, away, ..] => Some(LineupPair {
            home: LineupView::new(home),
            away: LineupView::new(away),
        }),
        _ => None,
    };

    let standings = if input.standings.is_empty() {
        None
    } else {
        Some(reconcile_standings(
            input.standings,
            snapshot.teams.home.id,
            snapshot.teams.away.id,
        ))
    };

    let favorite_id = find_favorite(input.favorites, &snapshot.fixture_id()).map(|fav| fav.id);

    MatchDetailView {
        snapshot: snapshot.clone(),
        timeline,
        event_count: input.events.len(),
        lineups,
        standings,
        favorite_id,
        is_favorite: favorite_id.is_some(),
    }
}
