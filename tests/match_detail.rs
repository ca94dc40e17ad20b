use matchday::detail::{MatchDetailInput, build_match_detail};
use matchday::mock::{self, MockSource};
use matchday::model::{EventKind, Favorite, MatchSnapshot};
use matchday::source::DataSource;
use matchday::standings::table_for;

fn fixture(id: u64) -> MatchSnapshot {
    mock::sample_fixtures()
        .into_iter()
        .find(|m| m.fixture.id == id)
        .expect("sample fixture should exist")
}

#[test]
fn timeline_keeps_goals_and_cards_in_order() {
    let snapshot = fixture(1000001);
    let events = mock::sample_events("1000001");
    let kinds: Vec<EventKind> = events.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![EventKind::Goal, EventKind::Goal, EventKind::Card, EventKind::Goal, EventKind::Subst]
    );

    let view = build_match_detail(MatchDetailInput {
        snapshot: &snapshot,
        events: &events,
        lineups: &[],
        standings: &[],
        favorites: &[],
    });
    assert_eq!(view.timeline.len(), 4);
    assert_eq!(view.timeline, events[..4].to_vec());
    assert_eq!(view.event_count, 5);
    assert!(view.timeline.iter().all(|e| e.kind != EventKind::Subst));
}

#[test]
fn full_detail_for_live_fixture() {
    let snapshot = fixture(1000001);
    let source = MockSource::new(42);
    let events = source.match_events("1000001").unwrap();
    let lineups = source.match_lineups("1000001").unwrap();
    let favorites = vec![Favorite {
        id: 77,
        user_id: "u1".to_string(),
        match_id: "1000001".to_string(),
        league: snapshot.league.name.clone(),
        teams: snapshot.teams.clone(),
    }];

    let view = build_match_detail(MatchDetailInput {
        snapshot: &snapshot,
        events: &events,
        lineups: &lineups,
        standings: table_for(snapshot.league.id),
        favorites: &favorites,
    });

    let pair = view.lineups.expect("two lineups should pair up");
    assert_eq!(pair.home.lineup.team.id, 541);
    assert_eq!(pair.away.lineup.team.id, 542);
    assert_eq!(pair.home.starters.len(), 11);
    assert_eq!(pair.home.starters[0].pos.y, 85.0);

    let standings = view.standings.expect("league 10 has a table");
    assert_eq!(standings.len(), 15);
    assert_eq!(standings[0].team.id, 541);
    assert_eq!(standings[3].team.id, 542);

    assert!(view.is_favorite);
    assert_eq!(view.favorite_id, Some(77));
}

#[test]
fn missing_sections_degrade_to_none() {
    let snapshot = fixture(1000004);
    let source = MockSource::new(1);
    let lineups = source.match_lineups("1000001").unwrap();

    let view = build_match_detail(MatchDetailInput {
        snapshot: &snapshot,
        events: &[],
        lineups: &lineups[..1],
        standings: table_for(snapshot.league.id),
        favorites: &mock::sample_favorites(),
    });
    assert!(view.timeline.is_empty());
    assert!(view.lineups.is_none());
    assert!(view.standings.is_none());
    assert!(!view.is_favorite);
    assert_eq!(view.favorite_id, None);
}

#[test]
fn sample_favorite_marks_its_fixture() {
    let snapshot = fixture(1000003);
    let favorites = mock::sample_favorites();
    let view = build_match_detail(MatchDetailInput {
        snapshot: &snapshot,
        events: &[],
        lineups: &[],
        standings: &[],
        favorites: &favorites,
    });
    assert!(view.is_favorite);
    assert_eq!(view.favorite_id, Some(1));
}
