use anyhow::{Result, anyhow};

use matchday::mock::{self, MockSource};
use matchday::model::{Event, Lineup, MatchSnapshot};
use matchday::source::{DataSource, fetch_match_bundle, find_fixture, load_fixtures};

struct Offline;

impl DataSource for Offline {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn live_fixtures(&self) -> Result<Vec<MatchSnapshot>> {
        Err(anyhow!("network unreachable"))
    }

    fn match_events(&self, _fixture_id: &str) -> Result<Vec<Event>> {
        Err(anyhow!("network unreachable"))
    }

    fn match_lineups(&self, fixture_id: &str) -> Result<Vec<Lineup>> {
        MockSource::new(3).match_lineups(fixture_id)
    }
}

#[test]
fn failed_fixture_fetch_falls_back_to_samples() {
    let fixtures = load_fixtures(&Offline);
    assert_eq!(fixtures, mock::sample_fixtures());
    assert!(find_fixture(&fixtures, "1000003").is_some());
    assert!(find_fixture(&fixtures, "42").is_none());
}

#[test]
fn failed_half_of_bundle_comes_back_empty() {
    let bundle = fetch_match_bundle(&Offline, "1000006");
    assert!(bundle.events.is_empty());
    assert_eq!(bundle.lineups.len(), 2);
}

#[test]
fn mock_source_only_details_two_fixtures() {
    let source = MockSource::new(2000);
    assert_eq!(source.live_fixtures().unwrap().len(), 6);
    for id in ["1000001", "1000006"] {
        let bundle = fetch_match_bundle(&source, id);
        assert_eq!(bundle.events.len(), 5);
        assert_eq!(bundle.lineups.len(), 2);
    }
    let bundle = fetch_match_bundle(&source, "1000002");
    assert!(bundle.events.is_empty());
    assert!(bundle.lineups.is_empty());
}

#[test]
fn mock_lineups_are_reproducible_per_seed() {
    let a = MockSource::new(11).match_lineups("1000001").unwrap();
    let b = MockSource::new(11).match_lineups("1000001").unwrap();
    assert_eq!(a, b);
    assert_eq!(a[0].team.id, 541);
    assert_eq!(a[1].start_xi[0].id, Some(2018));
}

#[test]
fn sample_statuses_cover_each_phase() {
    let fixtures = mock::sample_fixtures();
    let finished = find_fixture(&fixtures, "1000002").unwrap();
    assert!(finished.fixture.status.is_finished());
    assert!(!finished.fixture.status.is_live());

    let half_time = find_fixture(&fixtures, "1000003").unwrap();
    assert!(half_time.fixture.status.is_live());
    assert!(!half_time.fixture.status.is_finished());

    let upcoming = find_fixture(&fixtures, "1000004").unwrap();
    assert!(upcoming.fixture.status.is_not_started());
    assert!(!upcoming.fixture.status.is_finished());
}
