use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::http_client::http_client;
use crate::model::{Event, Lineup, MatchSnapshot, PlayerSlot, Position, Team};
use crate::source::DataSource;

const API_KEY_HEADER: &str = "x-apisports-key";

/// API-Football v3 over blocking HTTP.
#[derive(Debug, Clone)]
pub struct ApiFootball {
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl ApiFootball {
    /// Every instance goes through the process-wide client from
    /// [`http_client`], so only the first `timeout_secs` seen takes effect.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout_secs,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let key = config
            .api_key
            .as_deref()
            .context("API_FOOTBALL_KEY is not set")?;
        Ok(Self::new(&config.api_url, key, config.http_timeout_secs))
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let client = http_client(self.timeout_secs)?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "api-football request");
        let resp = client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .context("request failed")?;
        let status = resp.status();
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            bail!("http {}: {}", status, body);
        }
        Ok(body)
    }
}

impl DataSource for ApiFootball {
    fn name(&self) -> &'static str {
        "api-football"
    }

    fn live_fixtures(&self) -> Result<Vec<MatchSnapshot>> {
        let body = self.get("/fixtures", &[("live", "all")])?;
        parse_fixtures_json(&body)
    }

    fn match_events(&self, fixture_id: &str) -> Result<Vec<Event>> {
        let body = self.get("/fixtures/events", &[("fixture", fixture_id)])?;
        parse_events_json(&body)
    }

    fn match_lineups(&self, fixture_id: &str) -> Result<Vec<Lineup>> {
        let body = self.get("/fixtures/lineups", &[("fixture", fixture_id)])?;
        parse_lineups_json(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    errors: Value,
    #[serde(default = "Vec::new")]
    response: Vec<T>,
}

fn parse_envelope<T: DeserializeOwned>(raw: &str, what: &str) -> Result<Vec<T>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let envelope: Envelope<T> =
        serde_json::from_str(trimmed).with_context(|| format!("invalid {what} json"))?;
    if has_errors(&envelope.errors) {
        bail!("api-football {what} error: {}", envelope.errors);
    }
    Ok(envelope.response)
}

// The API reports errors as either `[]` or `{"token": "..."}`.
fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<MatchSnapshot>> {
    parse_envelope(raw, "fixtures")
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    #[serde(default)]
    time: WireTime,
    team: Team,
    #[serde(default)]
    player: WireName,
    #[serde(default)]
    assist: WireName,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireTime {
    elapsed: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct WireName {
    #[serde(default)]
    name: Option<String>,
}

pub fn parse_events_json(raw: &str) -> Result<Vec<Event>> {
    let rows: Vec<WireEvent> = parse_envelope(raw, "events")?;
    Ok(rows
        .into_iter()
        .map(|row| Event {
            elapsed: row.time.elapsed,
            team: row.team,
            player: row.player.name.unwrap_or_default(),
            kind: row.kind.into(),
            detail: row.detail.unwrap_or_default(),
            assist: row.assist.name.filter(|name| !name.is_empty()),
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct WireLineup {
    team: Team,
    #[serde(default)]
    coach: WireName,
    #[serde(default)]
    formation: Option<String>,
    #[serde(rename = "startXI", default)]
    start_xi: Vec<WireSlot>,
    #[serde(default)]
    substitutes: Vec<WireSlot>,
}

#[derive(Debug, Deserialize)]
struct WireSlot {
    player: WirePlayer,
}

#[derive(Debug, Deserialize)]
struct WirePlayer {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    number: Option<u8>,
    #[serde(default)]
    pos: Option<String>,
}

impl From<WireSlot> for PlayerSlot {
    fn from(slot: WireSlot) -> Self {
        let p = slot.player;
        PlayerSlot {
            id: p.id,
            name: p.name.unwrap_or_default(),
            number: p.number,
            pos: p.pos.as_deref().and_then(Position::from_code),
        }
    }
}

pub fn parse_lineups_json(raw: &str) -> Result<Vec<Lineup>> {
    let rows: Vec<WireLineup> = parse_envelope(raw, "lineups")?;
    Ok(rows
        .into_iter()
        .map(|row| Lineup {
            team: row.team,
            coach: row.coach.name,
            formation: row.formation,
            start_xi: row.start_xi.into_iter().map(PlayerSlot::from).collect(),
            substitutes: row.substitutes.into_iter().map(PlayerSlot::from).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::has_errors;
    use serde_json::json;

    #[test]
    fn error_member_shapes() {
        assert!(!has_errors(&json!([])));
        assert!(!has_errors(&json!({})));
        assert!(!has_errors(&json!(null)));
        assert!(has_errors(&json!({"token": "missing key"})));
        assert!(has_errors(&json!(["rate limit"])));
    }
}
