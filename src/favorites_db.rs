use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::favorites::{FavoritesStore, MemoryFavorites, StoreError, favorite_from_snapshot};
use crate::mock;
use crate::model::{Favorite, MatchSnapshot, Teams};

/// Favorites kept in a local SQLite file.
pub struct SqliteFavorites {
    conn: Mutex<Connection>,
}

impl SqliteFavorites {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn =
            Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory sqlite db")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Copies `rows` in when the table holds no favorites yet. Returns how many
    /// rows were written.
    pub fn seed_if_empty(&self, rows: &[Favorite]) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let existing: i64 =
            conn.query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(0);
        }
        for fav in rows {
            let teams = serde_json::to_string(&fav.teams)?;
            conn.execute(
                "INSERT INTO favorites (user_id, match_id, league, teams) VALUES (?1, ?2, ?3, ?4)",
                params![fav.user_id, fav.match_id, fav.league, teams],
            )?;
        }
        Ok(rows.len())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("favorites db lock poisoned".to_string()))
    }
}

/// Favorites store for this run. Always the SQLite file when a path resolves,
/// whichever data source is active; mock mode seeds the sample favorite into
/// an empty file.
pub fn open_store(config: &Config) -> Result<Box<dyn FavoritesStore>> {
    let seed = if config.use_real_api {
        Vec::new()
    } else {
        mock::sample_favorites()
    };

    let Some(path) = config.favorites_db.as_deref() else {
        warn!("no favorites db path resolved, favorites will not persist");
        return Ok(Box::new(MemoryFavorites::with_rows(seed)));
    };

    let store = SqliteFavorites::open(path)?;
    let seeded = store.seed_if_empty(&seed)?;
    if seeded > 0 {
        info!(rows = seeded, path = %path.display(), "seeded sample favorites");
    }
    Ok(Box::new(store))
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            match_id TEXT NOT NULL,
            league TEXT NOT NULL,
            teams TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        CREATE INDEX IF NOT EXISTS idx_favorites_user ON favorites(user_id);
        "#,
    )
    .context("create favorites schema")?;
    Ok(())
}

impl FavoritesStore for SqliteFavorites {
    fn add(&self, user_id: &str, snapshot: &MatchSnapshot) -> Result<Favorite, StoreError> {
        let conn = self.conn()?;
        let teams = serde_json::to_string(&snapshot.teams)?;
        conn.execute(
            "INSERT INTO favorites (user_id, match_id, league, teams) VALUES (?1, ?2, ?3, ?4)",
            params![user_id, snapshot.fixture_id(), snapshot.league.name, teams],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, user = user_id, "favorite row inserted");
        Ok(favorite_from_snapshot(id, user_id, snapshot))
    }

    fn remove(&self, favorite_id: i64) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM favorites WHERE id = ?1", params![favorite_id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(favorite_id));
        }
        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, match_id, league, teams FROM favorites \
             WHERE user_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, user_id, match_id, league, teams) = row?;
            let teams: Teams = serde_json::from_str(&teams)?;
            out.push(Favorite {
                id,
                user_id,
                match_id,
                league,
                teams,
            });
        }
        Ok(out)
    }
}
