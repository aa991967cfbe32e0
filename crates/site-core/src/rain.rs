//! Randomized layout for the matrix-rain backdrop. The falling animation
//! itself is CSS; this only decides where each column sits and how its
//! animation is timed.

use crate::constants::{
    RAIN_COLUMN_COUNT, RAIN_DELAY_MAX_SEC, RAIN_FALL_MIN_SEC, RAIN_FALL_SPAN_SEC,
};
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct RainColumn {
    pub left_pct: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

pub fn rain_columns(rng: &mut StdRng) -> Vec<RainColumn> {
    (0..RAIN_COLUMN_COUNT)
        .map(|_| RainColumn {
            left_pct: rng.gen::<f32>() * 100.0,
            duration_sec: RAIN_FALL_MIN_SEC + rng.gen::<f32>() * RAIN_FALL_SPAN_SEC,
            delay_sec: rng.gen::<f32>() * RAIN_DELAY_MAX_SEC,
        })
        .collect()
}
