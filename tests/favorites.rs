use std::path::PathBuf;

use matchday::config::{Config, DEFAULT_API_URL};
use matchday::favorites::{
    FavoriteError, FavoriteToggle, FavoritesStore, MemoryFavorites, StoreError, find_favorite,
    is_favorite, toggle_favorite,
};
use matchday::favorites_db::{self, SqliteFavorites};
use matchday::mock::{self, MOCK_USER};
use matchday::model::{Favorite, MatchSnapshot};
use matchday::session::Session;

fn fixture(id: u64) -> MatchSnapshot {
    mock::sample_fixtures()
        .into_iter()
        .find(|m| m.fixture.id == id)
        .expect("sample fixture should exist")
}

#[test]
fn resolves_by_string_fixture_id() {
    let favorites = mock::sample_favorites();
    let found = find_favorite(&favorites, "1000003").expect("favorite should resolve");
    assert_eq!(found.user_id, MOCK_USER);
    assert!(find_favorite(&favorites, "999999").is_none());
    assert!(!is_favorite(&[], "1000003"));
}

#[test]
fn first_duplicate_wins() {
    let mut favorites = mock::sample_favorites();
    let mut dup: Favorite = favorites[0].clone();
    dup.id = 2;
    favorites.push(dup);
    assert_eq!(find_favorite(&favorites, "1000003").map(|f| f.id), Some(1));
}

#[test]
fn toggle_requires_a_signed_in_user() {
    let store = MemoryFavorites::new();
    let snapshot = fixture(1000001);
    for session in [Session::anonymous(), Session::pending()] {
        let err = toggle_favorite(&store, &session, &snapshot).unwrap_err();
        assert!(matches!(err, FavoriteError::NotSignedIn));
    }
}

#[test]
fn toggle_adds_then_removes() {
    let store = MemoryFavorites::with_rows(mock::sample_favorites());
    let session = Session::signed_in(MOCK_USER);
    let snapshot = fixture(1000001);

    let fav = match toggle_favorite(&store, &session, &snapshot).unwrap() {
        FavoriteToggle::Added(fav) => fav,
        other => panic!("expected an added favorite, got {other:?}"),
    };
    assert_eq!(fav.id, 2);
    assert_eq!(fav.match_id, "1000001");
    assert_eq!(fav.league, "Mock Super Liga");
    assert_eq!(store.list(MOCK_USER).unwrap().len(), 2);

    let removed = toggle_favorite(&store, &session, &snapshot).unwrap();
    assert_eq!(removed, FavoriteToggle::Removed(2));
    let left = store.list(MOCK_USER).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].match_id, "1000003");
}

#[test]
fn memory_store_scopes_by_user() {
    let store = MemoryFavorites::new();
    store.add("a", &fixture(1000002)).unwrap();
    store.add("b", &fixture(1000005)).unwrap();
    assert_eq!(store.list("a").unwrap().len(), 1);
    assert!(store.list("c").unwrap().is_empty());
    assert!(matches!(store.remove(99), Err(StoreError::NotFound(99))));
}

#[test]
fn sqlite_store_round_trips_team_snapshot() {
    let store = SqliteFavorites::open_in_memory().unwrap();
    let snapshot = fixture(1000006);

    let added = store.add("user-9", &snapshot).unwrap();
    let listed = store.list("user-9").unwrap();
    assert_eq!(listed, vec![added.clone()]);
    assert_eq!(listed[0].teams, snapshot.teams);

    store.remove(added.id).unwrap();
    assert!(store.list("user-9").unwrap().is_empty());
    assert!(matches!(store.remove(added.id), Err(StoreError::NotFound(_))));
}

#[test]
fn sqlite_store_backs_toggle() {
    let store = SqliteFavorites::open_in_memory().unwrap();
    let session = Session::signed_in("user-1");
    let snapshot = fixture(1000003);

    assert!(matches!(
        toggle_favorite(&store, &session, &snapshot).unwrap(),
        FavoriteToggle::Added(_)
    ));
    assert!(is_favorite(&store.list("user-1").unwrap(), "1000003"));
    assert!(matches!(
        toggle_favorite(&store, &session, &snapshot).unwrap(),
        FavoriteToggle::Removed(_)
    ));
}

#[test]
fn seeding_only_fills_an_empty_table() {
    let store = SqliteFavorites::open_in_memory().unwrap();
    let seed = mock::sample_favorites();

    assert_eq!(store.seed_if_empty(&seed).unwrap(), seed.len());
    assert_eq!(store.seed_if_empty(&seed).unwrap(), 0);
    assert_eq!(store.list(MOCK_USER).unwrap().len(), seed.len());
}

fn mock_config(db: PathBuf) -> Config {
    Config {
        use_real_api: false,
        api_key: None,
        api_url: DEFAULT_API_URL.to_string(),
        favorites_db: Some(db),
        user_id: Some(MOCK_USER.to_string()),
        mock_seed: 2000,
        http_timeout_secs: 10,
    }
}

#[test]
fn mock_mode_favorites_survive_reopen() {
    let db = std::env::temp_dir().join(format!(
        "matchday-favorites-{}-{}.sqlite",
        std::process::id(),
        line!()
    ));
    let _ = std::fs::remove_file(&db);
    let config = mock_config(db.clone());
    let session = Session::signed_in(MOCK_USER);
    let snapshot = fixture(1000001);

    {
        let store = favorites_db::open_store(&config).unwrap();
        let seeded = store.list(MOCK_USER).unwrap();
        assert_eq!(seeded.len(), mock::sample_favorites().len());
        assert!(matches!(
            toggle_favorite(store.as_ref(), &session, &snapshot).unwrap(),
            FavoriteToggle::Added(_)
        ));
    }

    let store = favorites_db::open_store(&config).unwrap();
    let listed = store.list(MOCK_USER).unwrap();
    assert!(is_favorite(&listed, "1000001"));
    assert_eq!(listed.len(), mock::sample_favorites().len() + 1);
    assert!(matches!(
        toggle_favorite(store.as_ref(), &session, &snapshot).unwrap(),
        FavoriteToggle::Removed(_)
    ));
    drop(store);

    let store = favorites_db::open_store(&config).unwrap();
    let listed = store.list(MOCK_USER).unwrap();
    assert!(!is_favorite(&listed, "1000001"));
    assert_eq!(listed.len(), mock::sample_favorites().len());
    drop(store);

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", db.display()));
    }
}

#[test]
fn session_hides_user_while_pending() {
    assert_eq!(Session::signed_in("x").user_id(), Some("x"));
    assert!(Session::pending().is_pending());
    assert_eq!(Session::pending().user_id(), None);
    assert_eq!(Session::from_user(Some("  ".to_string())), Session::anonymous());
}
