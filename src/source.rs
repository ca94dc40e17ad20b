use std::thread;

use anyhow::Result;
use tracing::{info, warn};

use crate::api_football::ApiFootball;
use crate::config::Config;
use crate::mock::{self, MockSource};
use crate::model::{Event, Lineup, MatchSnapshot};

/// Where fixtures, events and lineups come from. Chosen once at startup.
pub trait DataSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn live_fixtures(&self) -> Result<Vec<MatchSnapshot>>;
    fn match_events(&self, fixture_id: &str) -> Result<Vec<Event>>;
    fn match_lineups(&self, fixture_id: &str) -> Result<Vec<Lineup>>;
}

pub fn source_from_config(config: &Config) -> Result<Box<dyn DataSource>> {
    let source: Box<dyn DataSource> = if config.use_real_api {
        Box::new(ApiFootball::from_config(config)?)
    } else {
        Box::new(MockSource::new(config.mock_seed))
    };
    info!(source = source.name(), "data source selected");
    Ok(source)
}

/// Live fixtures, or the bundled sample fixtures when the source fails.
pub fn load_fixtures(source: &dyn DataSource) -> Vec<MatchSnapshot> {
    match source.live_fixtures() {
        Ok(fixtures) => fixtures,
        Err(err) => {
            warn!(source = source.name(), "live fixtures unavailable, using samples: {err:#}");
            mock::sample_fixtures()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchBundle {
    pub events: Vec<Event>,
    pub lineups: Vec<Lineup>,
}

/// Fetches events and lineups side by side. A failed half comes back empty.
pub fn fetch_match_bundle(source: &dyn DataSource, fixture_id: &str) -> MatchBundle {
    let (events, lineups) = thread::scope(|scope| {
        let events = scope.spawn(|| source.match_events(fixture_id));
        let lineups = source.match_lineups(fixture_id);
        let events = events
            .join()
            .unwrap_or_else(|_| Err(anyhow::anyhow!("events fetch panicked")));
        (events, lineups)
    });

    MatchBundle {
        events: events.unwrap_or_else(|err| {
            warn!(fixture = fixture_id, "events fetch failed: {err:#}");
            Vec::new()
        }),
        lineups: lineups.unwrap_or_else(|err| {
            warn!(fixture = fixture_id, "lineups fetch failed: {err:#}");
            Vec::new()
        }),
    }
}

pub fn find_fixture<'a>(
    fixtures: &'a [MatchSnapshot],
    fixture_id: &str,
) -> Option<&'a MatchSnapshot> {
    fixtures.iter().find(|m| m.fixture_id() == fixture_id)
}
