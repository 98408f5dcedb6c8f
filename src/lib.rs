//! Starpong - two-paddle Pong with boost power-ups
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `config`: Match tuning values
//! - `audio`: Sound-effect boundary for the hosting frontend
//!
//! The crate is the simulation core only. Windowing, drawing and keyboard
//! plumbing belong to the hosting frontend, which calls [`sim::tick`] at a
//! fixed rate, feeds it an [`sim::InputState`], and pulls a
//! [`sim::Snapshot`] for rendering.

pub mod audio;
pub mod config;
pub mod sim;

pub use config::{Config, EffectApplication};
pub use sim::{GameState, InputState, MatchPhase, Playfield, Snapshot, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate the host scheduler should target
    pub const TICK_RATE: f32 = 90.0;
    /// Fixed simulation timestep
    pub const TICK_DT: f32 = 1.0 / TICK_RATE;

    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Fraction of the field height playable; the strip above is the menu bar
    pub const TOP_MARGIN: f32 = 0.9;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 50.0;
    /// Horizontal serve speed, units per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Hard cap on |velocity.x|, units per tick
    pub const MAX_BALL_VX: f32 = 12.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Paddle travel per tick while a key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// First score to reach this wins the match
    pub const GAME_OVER_SCORE: u32 = 10;

    /// Boost pickup widget size
    pub const BOOST_SIZE: f32 = 40.0;
    /// One spawn roll in [0, BOOST_SPAWN_DIE) per tick; this face spawns
    pub const BOOST_SPAWN_DIE: u32 = 200;
    pub const BOOST_SPAWN_FACE: u32 = 5;
    /// Effect duration bounds, whole seconds in [min, max)
    pub const BOOST_DURATION_MIN: u32 = 20;
    pub const BOOST_DURATION_MAX: u32 = 60;
    /// Multiplicative growth per pickup
    pub const BOOST_FACTOR: f32 = 1.3;
    /// Paddle speed penalty per PaddleSize pickup
    pub const PADDLE_SLOWDOWN: f32 = 0.8;
    /// Paddle height cap, relative to match-start height
    pub const PADDLE_SIZE_CAP: f32 = 1.5;
    /// Ball size cap per axis, relative to match-start size
    pub const BALL_SIZE_CAP: f32 = 2.0;

    /// Off-screen coordinate marking the boost slot as logically absent
    pub const SENTINEL: f32 = -100.0;

    /// Starfield density bounds, count in [min, max)
    pub const STARS_MIN: u32 = 30;
    pub const STARS_MAX: u32 = 60;
}
