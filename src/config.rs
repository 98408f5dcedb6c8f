//! Match tuning values
//!
//! Defaults mirror the `consts` module; a host can override sizes and the
//! win score when building a [`crate::GameState`]. Physics curves stay
//! fixed.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// When a collected boost effect is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EffectApplication {
    /// One application at the moment of pickup; the timer only bounds how
    /// long the effect lives before auto-reset
    #[default]
    OnPickup,
    /// Re-applied every tick while the effect timer runs (growth still
    /// bounded by the per-effect caps)
    EveryTick,
}

/// Match configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Config {
    pub ball_size: f32,
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub game_over_score: u32,
    pub effect_application: EffectApplication,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            game_over_score: GAME_OVER_SCORE,
            effect_application: EffectApplication::OnPickup,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
