//! Scoring module - score values, level goals, and the gravity schedule

use gridfall_types::{
    ClearCategory, BASE_FALL_MS, GRID_WIDTH, LEVEL_GOAL_STEP, MIN_FALL_MS, SOFT_DROP_DIVISOR,
};

/// Score awarded for one line-clear resolution pass
///
/// The category base is multiplied by `level + 1`, plus a flat bonus of
/// grid-width points per cleared row.
pub fn clear_score(category: ClearCategory, rows: usize, level: u32) -> u32 {
    category.base_score() * (level + 1) + rows as u32 * GRID_WIDTH as u32
}

/// Goal points required to move past `level`
pub fn level_goal(level: u32) -> u32 {
    LEVEL_GOAL_STEP * (level + 1)
}

/// Gravity interval for pieces spawned at `level`
///
/// Starts at 1000ms and keeps two thirds per level, floored at 16ms where
/// further levels stop mattering at the tick rate.
pub fn fall_interval_ms(level: u32) -> u32 {
    let mut ms = BASE_FALL_MS;
    for _ in 0..level {
        ms = ms * 2 / 3;
        if ms <= MIN_FALL_MS {
            return MIN_FALL_MS;
        }
    }
    ms.max(MIN_FALL_MS)
}

/// Gravity interval while soft drop is held
pub fn soft_drop_interval_ms(base: u32) -> u32 {
    (base / SOFT_DROP_DIVISOR).max(1)
}
