use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use matchday::config::Config;
use matchday::detail::{LineupView, MatchDetailInput, MatchDetailView, build_match_detail};
use matchday::favorites::{FavoriteError, FavoriteToggle, toggle_favorite};
use matchday::favorites_db;
use matchday::session::Session;
use matchday::source::{self, fetch_match_bundle, find_fixture, load_fixtures};
use matchday::standings;

enum Command {
    List,
    Detail(String),
    ToggleFavorite(String),
    Favorites,
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    let command = parse_command(std::env::args().skip(1).collect())?;
    let source = source::source_from_config(&config)?;
    let session = Session::from_user(config.user_id.clone());
    let store = favorites_db::open_store(&config)?;

    match command {
        Command::List => {
            for m in load_fixtures(source.as_ref()) {
                let minute = m
                    .fixture
                    .status
                    .elapsed
                    .filter(|_| m.fixture.status.is_live())
                    .map(|min| format!(" {min}'"))
                    .unwrap_or_default();
                println!(
                    "{:>8}  [{}{}]  {} {} {}  ({})",
                    m.fixture.id,
                    m.fixture.status.short,
                    minute,
                    m.teams.home.name,
                    m.score_line(),
                    m.teams.away.name,
                    m.league.name
                );
            }
        }
        Command::Detail(fixture_id) => {
            let fixtures = load_fixtures(source.as_ref());
            let snapshot = find_fixture(&fixtures, &fixture_id)
                .with_context(|| format!("fixture {fixture_id} not found"))?;
            let bundle = fetch_match_bundle(source.as_ref(), &fixture_id);
            let favorites = match session.user_id() {
                Some(user) => store.list(user)?,
                None => Vec::new(),
            };
            let view = build_match_detail(MatchDetailInput {
                snapshot,
                events: &bundle.events,
                lineups: &bundle.lineups,
                standings: standings::table_for(snapshot.league.id),
                favorites: &favorites,
            });
            print_detail(&view);
        }
        Command::ToggleFavorite(fixture_id) => {
            let fixtures = load_fixtures(source.as_ref());
            let snapshot = find_fixture(&fixtures, &fixture_id)
                .with_context(|| format!("fixture {fixture_id} not found"))?;
            match toggle_favorite(store.as_ref(), &session, snapshot) {
                Ok(FavoriteToggle::Added(fav)) => {
                    println!("Added {} to favorites (#{})", fav.match_id, fav.id)
                }
                Ok(FavoriteToggle::Removed(id)) => println!("Removed favorite #{id}"),
                Err(FavoriteError::NotSignedIn) => {
                    bail!("set MATCHDAY_USER to save favorite matches")
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Favorites => {
            let Some(user) = session.user_id() else {
                bail!("set MATCHDAY_USER to list favorite matches");
            };
            let favorites = store.list(user)?;
            if favorites.is_empty() {
                println!("No favorites for {user}");
            }
            for fav in favorites {
                println!(
                    "#{:<4} {:>8}  {} vs {}  ({})",
                    fav.id, fav.match_id, fav.teams.home.name, fav.teams.away.name, fav.league
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("matchday=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_command(args: Vec<String>) -> Result<Command> {
    let mut iter = args.into_iter();
    let Some(cmd) = iter.next() else {
        return Ok(Command::List);
    };
    let mut fixture_arg = |name: &str| -> Result<String> {
        iter.next()
            .filter(|id| !id.trim().is_empty())
            .with_context(|| format!("usage: matchday {name} <fixture-id>"))
    };
    match cmd.as_str() {
        "list" => Ok(Command::List),
        "detail" => Ok(Command::Detail(fixture_arg("detail")?)),
        "fav" => Ok(Command::ToggleFavorite(fixture_arg("fav")?)),
        "favs" => Ok(Command::Favorites),
        other => bail!("unknown command `{other}` (expected list, detail, fav, favs)"),
    }
}

fn print_detail(view: &MatchDetailView) {
    let m = &view.snapshot;
    println!(
        "{} {} {}   [{}]{}",
        m.teams.home.name,
        m.score_line(),
        m.teams.away.name,
        m.fixture.status.long.as_deref().unwrap_or(&m.fixture.status.short),
        if view.is_favorite { "  *favorite*" } else { "" }
    );
    println!("{} ({})", m.league.name, m.league.country);

    println!();
    println!("Goals & cards ({} of {} events)", view.timeline.len(), view.event_count);
    if view.timeline.is_empty() {
        println!("  none recorded");
    }
    for event in &view.timeline {
        let minute = event.elapsed.map(|m| format!("{m}'")).unwrap_or_default();
        let detail = if event.detail.is_empty() {
            String::new()
        } else {
            format!(" ({})", event.detail)
        };
        println!("  {:>4} {:<14} {}{}", minute, event.team.name, event.player, detail);
        if let Some(assist) = &event.assist {
            println!("       assist: {assist}");
        }
    }

    println!();
    match &view.lineups {
        Some(pair) => {
            print_lineup(&pair.home);
            print_lineup(&pair.away);
        }
        None => println!("Lineups not available yet"),
    }

    if let Some(rows) = &view.standings {
        println!();
        println!("Table - {}", m.league.name);
        for row in rows {
            let playing = row.team.id == m.teams.home.id || row.team.id == m.teams.away.id;
            println!(
                "  {}{:>2}  {:<18} {:>3}",
                if playing { ">" } else { " " },
                row.rank,
                row.team.name,
                row.points
            );
        }
    }
}

fn print_lineup(side: &LineupView) {
    let lineup = &side.lineup;
    println!(
        "{} {}  coach: {}",
        lineup.team.name,
        lineup.formation.as_deref().unwrap_or("-"),
        lineup.coach.as_deref().unwrap_or("-")
    );
    for placed in &side.starters {
        let p = &placed.player;
        println!(
            "  {:>2} {:<1} {:<22} ({:>3}, {:>3})",
            p.number.map(|n| n.to_string()).unwrap_or_default(),
            p.pos.map(|pos| pos.code()).unwrap_or(""),
            p.name,
            placed.pos.x,
            placed.pos.y
        );
    }
    if !lineup.substitutes.is_empty() {
        let subs = lineup
            .substitutes
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  subs: {subs}");
    }
}
