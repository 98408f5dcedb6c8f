//! Fixed-tick game loop driver
//!
//! The host scheduler calls [`tick`] at a nominal 90 Hz with the current
//! input state and playfield geometry. Movement is tick-based: positions
//! advance by per-tick velocities and `dt` only feeds the boost timer, so a
//! late frame never changes a trajectory. Within the Playing phase the
//! update order is strict and must not be reshuffled.

use super::collision;
use super::entities::{BoostKind, Paddle, PlayerId};
use super::state::{Events, GameState, MatchPhase, Playfield};
use crate::config::EffectApplication;

/// Pressed-state of the logical keys, refreshed by the host before each tick
///
/// All flags are plain held state; the menu toggle is edge-detected inside
/// [`tick`], so holding it down fires once per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub toggle_menu: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a logical key name to its flag. Returns false for unknown keys
    /// so hosts can forward their whole keymap without filtering.
    pub fn set_key(&mut self, name: &str, pressed: bool) -> bool {
        match name {
            "left_up" => self.left_up = pressed,
            "left_down" => self.left_down = pressed,
            "right_up" => self.right_up = pressed,
            "right_down" => self.right_down = pressed,
            "toggle_menu" => self.toggle_menu = pressed,
            _ => return false,
        }
        true
    }
}

/// Advance the match by one tick
pub fn tick(state: &mut GameState, input: &InputState, field: &Playfield, dt: f32) -> Events {
    let mut events = Events::new();
    state.time_ticks += 1;

    if state.toggle_pressed(input.toggle_menu) {
        state.toggle_menu(field);
    }

    match state.phase {
        MatchPhase::Start | MatchPhase::Menu => {
            state.hold_centered(field);
        }
        MatchPhase::GameOver => {
            // One-shot announcement: freeze this tick, collapse into Menu
            state.hold_centered(field);
            state.phase = MatchPhase::Menu;
        }
        MatchPhase::Playing => {
            playing_tick(state, input, field, dt, &mut events);
        }
    }

    events
}

/// The Playing-phase update, in its mandated order
fn playing_tick(
    state: &mut GameState,
    input: &InputState,
    field: &Playfield,
    dt: f32,
    events: &mut Events,
) {
    // 1. Boost timer, then the spawn roll
    if state.boost.tick_expire(dt) {
        state.reset_boost_effects();
        events.boost_expired = true;
        log::debug!("boost expired, stats reset");
    }
    events.boost_spawned = state.boost.tick_spawn(&mut state.rng, field);

    // 2. Ball motion
    collision::move_ball(&mut state.ball);

    // 3. Boost pickup
    let mut applied = None;
    if collision::detect_boost_pickup(&state.ball, &mut state.boost) {
        state.boost.mark_collected();
        if let Some(kind) = state.boost.kind {
            if state.config.effect_application == EffectApplication::OnPickup {
                state.apply_boost_effect(kind);
                applied = Some(kind);
            }
            events.boost_collected = Some(kind);
            log::debug!("boost collected: {}", kind.as_str());
        }
    }
    if state.config.effect_application == EffectApplication::EveryTick
        && state.boost.collected
        && state.boost.timer > 0.0
    {
        if let Some(kind) = state.boost.kind {
            state.apply_boost_effect(kind);
            applied = Some(kind);
        }
    }
    // Grown paddles near a wall get nudged back inside the band
    if applied == Some(BoostKind::PaddleSize) {
        clamp_into_band(&mut state.left, field);
        clamp_into_band(&mut state.right, field);
    }

    // 4. Paddle bounces, left first; both may fire in the same tick
    if let Some(who) = collision::bounce_off_paddle(&state.left, PlayerId::Left, &mut state.ball) {
        state.last_contact = Some(who);
        events.paddle_hit = Some(who);
    }
    if let Some(who) = collision::bounce_off_paddle(&state.right, PlayerId::Right, &mut state.ball)
    {
        state.last_contact = Some(who);
        events.paddle_hit = Some(who);
    }

    // 5. Wall bounce
    if collision::bounce_off_walls(&mut state.ball, field) {
        events.wall_hit = true;
    }

    // 6. Scoring: the ball must fully exit the field
    if state.ball.rect.right() < 0.0 {
        events.scored = Some(PlayerId::Right);
        events.game_over = state.award_point(PlayerId::Right, field);
    } else if state.ball.rect.pos.x > field.width {
        events.scored = Some(PlayerId::Left);
        events.game_over = state.award_point(PlayerId::Left, field);
    }

    // 7. Paddle movement from held keys
    state.pin_paddles_x(field);
    let speed = state.paddle_speed;
    move_paddle(&mut state.left, input.left_up, input.left_down, speed, field);
    move_paddle(&mut state.right, input.right_up, input.right_down, speed, field);
}

/// Pull a paddle's center back into the playable band, if the band exists
fn clamp_into_band(paddle: &mut Paddle, field: &Playfield) {
    let hi = field.top_bound() - paddle.rect.height() / 2.0;
    let lo = paddle.rect.height() / 2.0;
    if hi >= lo {
        paddle.set_center_y(paddle.center_y().clamp(lo, hi));
    }
}

/// Two-tier paddle stepping
///
/// A full-speed step is taken only when it stays inside the margin-adjusted
/// bound; otherwise the paddle creeps by single units so it eases up to the
/// wall instead of stopping a full step short.
fn move_paddle(paddle: &mut Paddle, up: bool, down: bool, speed: f32, field: &Playfield) {
    let hi = field.top_bound() - paddle.rect.height() / 2.0;
    let lo = paddle.rect.height() / 2.0;

    if up {
        if paddle.center_y() + speed < hi {
            paddle.rect.pos.y += speed;
        } else if paddle.center_y() < hi {
            paddle.rect.pos.y += 1.0;
        }
    }
    if down {
        if paddle.center_y() - speed > lo {
            paddle.rect.pos.y -= speed;
        } else if paddle.center_y() > lo {
            paddle.rect.pos.y -= 1.0;
        }
    }
}
