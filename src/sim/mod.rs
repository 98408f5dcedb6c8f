//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Input arrives as a plain value each tick
//! - No rendering, audio or platform dependencies

pub mod boost;
pub mod collision;
pub mod entities;
pub mod rect;
pub mod state;
pub mod tick;

pub use boost::Boost;
pub use entities::{Ball, BoostKind, Paddle, PlayerId, Star};
pub use rect::Rect;
pub use state::{BoostView, Events, GameRng, GameState, MatchPhase, Playfield, Snapshot, StarView};
pub use tick::{InputState, tick};
