// File: crates/gw-core/src/levels.rs
// Summary: Vertical label placement ("levels") for the release timeline.

use std::collections::HashMap;

use crate::error::DataError;

/// How timeline levels are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelMode {
    /// Alternate series above/below the axis and stack labels outward.
    #[default]
    Auto,
    /// Use the hand-tuned table for the canonical release list.
    Manual,
}

impl std::str::FromStr for LevelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            other => Err(format!("unknown level mode '{other}' (expected auto|manual)")),
        }
    }
}

const FIRST_LEVEL: i32 = 2;
const MAX_LEVEL: i32 = 16;
/// The lower side restarts one step further out than it first started.
const LOWER_RESTART: i32 = -3;

/// Assign a level to every entry of `series` (one per release, in release order).
///
/// A series gets a side the first time it appears, alternating between above (+)
/// and below (-). Each side climbs outward one step per label: above runs 2..=16
/// then wraps to 2, below runs -2..=-16 then wraps to -3.
pub fn generate_levels<S: AsRef<str>>(series: &[S]) -> Vec<i32> {
    let mut side: HashMap<&str, i32> = HashMap::new();
    let mut next_side = 1;
    let mut upper = FIRST_LEVEL;
    let mut lower = -FIRST_LEVEL;
    let mut levels = Vec::with_capacity(series.len());

    for s in series {
        let c = *side.entry(s.as_ref()).or_insert_with(|| {
            let c = next_side;
            next_side = -next_side;
            c
        });
        if c > 0 {
            levels.push(upper);
            upper = if upper == MAX_LEVEL { FIRST_LEVEL } else { upper + 1 };
        } else {
            levels.push(lower);
            lower = if lower == -MAX_LEVEL { LOWER_RESTART } else { lower - 1 };
        }
    }
    levels
}

#[rustfmt::skip]
const MANUAL_LEVELS: [i32; 63] = [
    2, 3, 4, 5, 6, -2, -3, -4, 8, 9,          // 1-10
    10, 11, 12, 13, 14, 15, 16, 17, -2, -3,   // 11-20
    2, -4, -5, -6, -7, 6, 7, 8, 3, -8,        // 21-30
    9, 4, 11, 12, 13, -9, 14, -10, -14, -15,  // 31-40
    15, -2, -3, 16, -4, -11, 5, -12, -7, -8,  // 41-50
    -9, -13, 13, -14, 6, 7, 8, -15, -16, 9,   // 51-60
    2, 2, 3,                                  // 61-63
];

/// First `n` entries of the hand-tuned level table.
pub fn manual_levels(n: usize) -> Result<Vec<i32>, DataError> {
    if n > MANUAL_LEVELS.len() {
        return Err(DataError::TooManyForManualLevels { requested: n, available: MANUAL_LEVELS.len() });
    }
    Ok(MANUAL_LEVELS[..n].to_vec())
}

pub fn levels_for<S: AsRef<str>>(mode: LevelMode, series: &[S]) -> Result<Vec<i32>, DataError> {
    match mode {
        LevelMode::Auto => Ok(generate_levels(series)),
        LevelMode::Manual => manual_levels(series.len()),
    }
}
