use serde::{Deserialize, Serialize};

use crate::model::PlayerSlot;

pub const DEFAULT_LINES: [u32; 3] = [4, 4, 2];
pub const STARTERS: usize = 11;

const GOALKEEPER: PitchPos = PitchPos { x: 50.0, y: 85.0 };
const FALLBACK: PitchPos = PitchPos { x: 50.0, y: 50.0 };
const Y_START: f32 = 65.0;
const Y_END: f32 = 18.0;
const X_LEFT: f32 = 15.0;
const X_SPAN: f32 = 70.0;

/// Normalized pitch coordinate; both axes run 0..=100, goal line at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPos {
    pub x: f32,
    pub y: f32,
}

/// Outfield line sizes for a descriptor like "4-3-3".
///
/// Non-numeric and zero tokens are dropped; if nothing usable is left the
/// default 4-4-2 split is returned.
pub fn parse_formation(descriptor: Option<&str>) -> Vec<u32> {
    let lines: Vec<u32> = descriptor
        .unwrap_or_default()
        .split('-')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .collect();
    if lines.is_empty() {
        DEFAULT_LINES.to_vec()
    } else {
        lines
    }
}

/// Lays out `starters` players: goalkeeper first, then each outfield line from
/// the back forwards. Short formations are padded at the centre spot; layout
/// stops as soon as every starter has a spot, so oversized lines are cut off.
pub fn pitch_positions(lines: &[u32], starters: usize) -> Vec<PitchPos> {
    let mut out = Vec::with_capacity(starters);
    if starters == 0 {
        return out;
    }
    out.push(GOALKEEPER);

    let y_step = if lines.len() > 1 {
        (Y_START - Y_END) / (lines.len() - 1) as f32
    } else {
        0.0
    };

    'lines: for (line, &n) in lines.iter().enumerate() {
        if out.len() == starters {
            break;
        }
        let y = (Y_START - line as f32 * y_step).round();
        if n == 1 {
            out.push(PitchPos { x: 50.0, y });
            continue;
        }
        let step = X_SPAN / (n - 1) as f32;
        for i in 0..n {
            if out.len() == starters {
                break 'lines;
            }
            let x = (X_LEFT + i as f32 * step).round();
            out.push(PitchPos { x, y });
        }
    }

    out.resize(starters, FALLBACK);
    out
}

/// A starter with the spot they occupy on the pitch diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlayer {
    pub player: PlayerSlot,
    pub pos: PitchPos,
}

pub fn place_starters(formation: Option<&str>, starters: &[PlayerSlot]) -> Vec<PlacedPlayer> {
    let lines = parse_formation(formation);
    let positions = pitch_positions(&lines, starters.len());
    starters
        .iter()
        .zip(positions)
        .map(|(player, pos)| PlacedPlayer {
            player: player.clone(),
            pos,
        })
        .collect()
}
