use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{StandingsRow, Team};

/// Position (0-based) the away side is promoted to, clamped to table length.
const AWAY_SLOT: usize = 3;

static TABLES: Lazy<HashMap<u32, Vec<StandingsRow>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(10, mock_super_liga());
    tables
});

/// Static league table for `league_id`; unknown leagues have no rows.
pub fn table_for(league_id: u32) -> &'static [StandingsRow] {
    TABLES.get(&league_id).map(Vec::as_slice).unwrap_or(&[])
}

/// Stand-in row for a playing team missing from the table.
pub fn placeholder_row(team_id: u32, name: &str) -> StandingsRow {
    StandingsRow {
        rank: 0,
        team: Team::new(team_id, name),
        points: 0,
        played: 0,
        win: 0,
        draw: 0,
        loss: 0,
        goals_for: 0,
        goals_against: 0,
        goals_diff: 0,
    }
}

/// Reorders `rows` so the two sides of a fixture sit near the top: home first,
/// away at the fourth slot (or the end of a shorter table). Ranks are
/// renumbered by final position, so they no longer reflect the real table.
pub fn reconcile_standings(rows: &[StandingsRow], home_id: u32, away_id: u32) -> Vec<StandingsRow> {
    let mut out = rows.to_vec();

    let home = take_row(&mut out, home_id).unwrap_or_else(|| placeholder_row(home_id, "Home"));
    let away = take_row(&mut out, away_id).unwrap_or_else(|| placeholder_row(away_id, "Away"));

    out.insert(0, home);
    let slot = AWAY_SLOT.min(out.len());
    out.insert(slot, away);

    for (idx, row) in out.iter_mut().enumerate() {
        row.rank = idx as u32 + 1;
    }
    out
}

fn take_row(rows: &mut Vec<StandingsRow>, team_id: u32) -> Option<StandingsRow> {
    let idx = rows.iter().position(|row| row.team.id == team_id)?;
    Some(rows.remove(idx))
}

fn mock_super_liga() -> Vec<StandingsRow> {
    // (team id, name, points, win, draw, loss, goals for, goals against)
    const ROWS: [(u32, &str, u32, u32, u32, u32, u32, u32); 15] = [
        (541, "FC Mock Domov", 45, 14, 3, 3, 40, 18),
        (542, "SC Mock Hostia", 42, 13, 3, 4, 36, 20),
        (600, "Rival FC", 37, 11, 4, 5, 30, 22),
        (601, "City Mock", 33, 10, 3, 7, 28, 24),
        (602, "United Mock", 30, 8, 6, 6, 25, 23),
        (603, "AC Mock", 28, 8, 4, 8, 22, 21),
        (604, "Town FC", 26, 7, 5, 8, 21, 24),
        (605, "Athletic Mock", 24, 6, 6, 8, 20, 25),
        (606, "County Mock", 22, 6, 4, 10, 18, 26),
        (607, "Rovers", 20, 5, 5, 10, 17, 29),
        (608, "Olympic Mock", 18, 4, 6, 10, 16, 28),
        (609, "Harbor FC", 17, 4, 5, 11, 15, 30),
        (610, "Valley United", 15, 3, 6, 11, 14, 31),
        (611, "Wanderers", 12, 2, 6, 12, 12, 35),
        (612, "Bottom FC", 8, 1, 5, 14, 10, 40),
    ];

    ROWS.iter()
        .enumerate()
        .map(|(idx, &(id, name, points, win, draw, loss, gf, ga))| {
            let mut team = Team::new(id, name);
            if id == 541 || id == 542 {
                team.logo = Some(format!("https://media.api-sports.io/football/teams/{id}.png"));
            }
            StandingsRow {
                rank: idx as u32 + 1,
                team,
                points,
                played: win + draw + loss,
                win,
                draw,
                loss,
                goals_for: gf,
                goals_against: ga,
                goals_diff: gf as i32 - ga as i32,
            }
        })
        .collect()
}
