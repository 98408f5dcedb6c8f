//! Sound-effect boundary
//!
//! The simulation never talks to an audio device. It reports what happened
//! through [`crate::sim::Events`]; the host implements [`AudioSink`] and the
//! dispatcher forwards events to it. A sink failure (missing device, codec
//! error) is logged and dropped; it must never abort a tick.

use std::fmt;

use crate::sim::Events;

/// Error surfaced by an audio backend
#[derive(Debug)]
pub struct AudioError(pub String);

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio error: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

/// Fire-and-forget sound effects, implemented by the hosting frontend
pub trait AudioSink {
    fn paddle_hit(&mut self) -> Result<(), AudioError>;

    fn wall_hit(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn score(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// A sink that plays nothing; useful for headless runs and tests
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn paddle_hit(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Forward this tick's events to the sink, swallowing every failure
pub fn dispatch(events: &Events, sink: &mut dyn AudioSink) {
    if events.paddle_hit.is_some() {
        if let Err(e) = sink.paddle_hit() {
            log::debug!("{e}");
        }
    }
    if events.wall_hit {
        if let Err(e) = sink.wall_hit() {
            log::debug!("{e}");
        }
    }
    if events.scored.is_some() {
        if let Err(e) = sink.score() {
            log::debug!("{e}");
        }
    }
}
