use std::sync::Mutex;

use thiserror::Error;
use tracing::info;

use crate::model::{Favorite, MatchSnapshot};
use crate::session::Session;

/// First favorite saved for `fixture_id`. Ids are compared as strings.
pub fn find_favorite<'a>(favorites: &'a [Favorite], fixture_id: &str) -> Option<&'a Favorite> {
    favorites.iter().find(|fav| fav.match_id == fixture_id)
}

pub fn is_favorite(favorites: &[Favorite], fixture_id: &str) -> bool {
    find_favorite(favorites, fixture_id).is_some()
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("favorite {0} not found")]
    NotFound(i64),
    #[error("favorites backend failed: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Backend(format!("team snapshot: {err}"))
    }
}

/// Where a user's saved fixtures live.
pub trait FavoritesStore: Send + Sync {
    fn add(&self, user_id: &str, snapshot: &MatchSnapshot) -> Result<Favorite, StoreError>;
    fn remove(&self, favorite_id: i64) -> Result<(), StoreError>;
    fn list(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError>;
}

/// Favorite row for `snapshot`, before the store assigns an id.
pub fn favorite_from_snapshot(id: i64, user_id: &str, snapshot: &MatchSnapshot) -> Favorite {
    Favorite {
        id,
        user_id: user_id.to_string(),
        match_id: snapshot.fixture_id(),
        league: snapshot.league.name.clone(),
        teams: snapshot.teams.clone(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryFavorites {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: i64,
    rows: Vec<Favorite>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Favorite>) -> Self {
        let next_id = rows.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(MemoryInner { next_id, rows }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("favorites lock poisoned".to_string()))
    }
}

impl FavoritesStore for MemoryFavorites {
    fn add(&self, user_id: &str, snapshot: &MatchSnapshot) -> Result<Favorite, StoreError> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let fav = favorite_from_snapshot(inner.next_id, user_id, snapshot);
        inner.rows.push(fav.clone());
        Ok(fav)
    }

    fn remove(&self, favorite_id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let before = inner.rows.len();
        inner.rows.retain(|f| f.id != favorite_id);
        if inner.rows.len() == before {
            return Err(StoreError::NotFound(favorite_id));
        }
        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .rows
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("sign in to save favorite matches")]
    NotSignedIn,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added(Favorite),
    Removed(i64),
}

/// Flips the favorite status of `snapshot` for the signed-in user.
pub fn toggle_favorite(
    store: &dyn FavoritesStore,
    session: &Session,
    snapshot: &MatchSnapshot,
) -> Result<FavoriteToggle, FavoriteError> {
    let user_id = session.user_id().ok_or(FavoriteError::NotSignedIn)?;
    let fixture_id = snapshot.fixture_id();
    let favorites = store.list(user_id)?;

    if let Some(existing) = find_favorite(&favorites, &fixture_id) {
        store.remove(existing.id)?;
        info!(user = user_id, fixture = %fixture_id, "favorite removed");
        return Ok(FavoriteToggle::Removed(existing.id));
    }

    let added = store.add(user_id, snapshot)?;
    info!(user = user_id, fixture = %fixture_id, id = added.id, "favorite added");
    Ok(FavoriteToggle::Added(added))
}
