//! Boost pickup lifecycle: spawn timing, effect application, expiry, reset
//!
//! One boost slot exists per match. The timer does double duty, exactly as
//! upstream: before pickup it is the time the effect will last; after pickup
//! the slot is hidden and the same timer counts the effect down to its
//! auto-reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Ball, BoostKind, Paddle};
use super::rect::Rect;
use super::state::{GameRng, Playfield};
use crate::consts::*;

/// Stat values captured at match start, restored by every reset
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchDefaults {
    pub ball_size: Vec2,
    pub paddle_height: f32,
    pub ball_speed: f32,
    pub paddle_speed: f32,
}

/// The single boost pickup slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boost {
    pub rect: Rect,
    pub kind: Option<BoostKind>,
    /// Seconds of effect remaining; zero means the slot is idle
    pub timer: f32,
    /// Set once the ball has consumed the pickup
    pub collected: bool,
}

impl Default for Boost {
    fn default() -> Self {
        Self::new()
    }
}

impl Boost {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(SENTINEL, SENTINEL, BOOST_SIZE, BOOST_SIZE),
            kind: None,
            timer: 0.0,
            collected: false,
        }
    }

    /// A pickup is on the field when it is away from the sentinel corner
    #[inline]
    pub fn visible(&self) -> bool {
        self.rect.pos != Vec2::splat(SENTINEL)
    }

    /// Hide the pickup without touching the timer (pickup consumed)
    pub fn hide(&mut self) {
        self.rect.pos = Vec2::splat(SENTINEL);
    }

    pub fn mark_collected(&mut self) {
        self.collected = true;
    }

    /// Forcibly clear the slot: sentinel position, zero timer, no kind
    pub fn clear(&mut self) {
        self.hide();
        self.timer = 0.0;
        self.kind = None;
        self.collected = false;
    }

    /// Place a pickup directly (tests and scripted scenarios)
    pub fn spawn_at(&mut self, center: Vec2, kind: BoostKind, secs: f32) {
        self.rect.set_center(center);
        self.kind = Some(kind);
        self.timer = secs;
        self.collected = false;
    }

    /// Count the timer down; returns true when an active boost just ended
    pub fn tick_expire(&mut self, dt: f32) -> bool {
        if self.timer > 0.0 {
            self.timer -= dt;
            false
        } else if self.kind.is_some() {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Probabilistic spawn roll, one draw per tick
    ///
    /// Only fires while the slot is idle. The pickup lands inside the inner
    /// 75% of the width and the lower 80% of the height; a degenerate field
    /// skips the spawn rather than panicking.
    pub fn tick_spawn(&mut self, rng: &mut GameRng, field: &Playfield) -> Option<BoostKind> {
        if self.kind.is_some() || self.timer != 0.0 {
            return None;
        }
        if rng.roll(BOOST_SPAWN_DIE) != BOOST_SPAWN_FACE {
            return None;
        }

        let x_lo = field.width / 8.0;
        let x_hi = field.width * 7.0 / 8.0;
        let y_hi = field.height * 0.8;
        if x_hi <= x_lo || y_hi <= 0.0 {
            return None;
        }

        let kind = *rng.pick(&BoostKind::ALL);
        self.kind = Some(kind);
        self.timer = rng.range_u32(BOOST_DURATION_MIN, BOOST_DURATION_MAX) as f32;
        self.rect.pos = Vec2::new(
            rng.range_u32(x_lo as u32, x_hi as u32) as f32,
            rng.range_u32(0, y_hi as u32) as f32,
        );
        self.collected = false;

        log::debug!(
            "boost spawned: {} for {}s at {:?}",
            kind.as_str(),
            self.timer,
            self.rect.pos
        );
        Some(kind)
    }
}

/// Apply one application of a boost effect, bounded by its cap
pub fn apply_effect(
    kind: BoostKind,
    ball: &mut Ball,
    left: &mut Paddle,
    right: &mut Paddle,
    paddle_speed: &mut f32,
    defaults: &MatchDefaults,
) {
    match kind {
        BoostKind::BallSpeed => {
            ball.vel.x = (ball.vel.x * BOOST_FACTOR).clamp(-MAX_BALL_VX, MAX_BALL_VX);
        }
        BoostKind::PaddleSize => {
            let cap = defaults.paddle_height * PADDLE_SIZE_CAP;
            // The speed penalty only compounds while the height still grows
            if left.rect.height() < cap {
                let h = (left.rect.height() * BOOST_FACTOR).min(cap);
                left.rect.resize_centered(Vec2::new(left.rect.width(), h));
                right.rect.resize_centered(Vec2::new(right.rect.width(), h));
                *paddle_speed *= PADDLE_SLOWDOWN;
            }
        }
        BoostKind::BallSize => {
            // Each axis grows and caps independently
            let w = (ball.rect.width() * BOOST_FACTOR).min(defaults.ball_size.x * BALL_SIZE_CAP);
            let h = (ball.rect.height() * BOOST_FACTOR).min(defaults.ball_size.y * BALL_SIZE_CAP);
            ball.rect.resize_centered(Vec2::new(w, h));
        }
    }
}

/// Restore every boosted stat to its match-start value
///
/// A moving ball has its horizontal speed rescaled to the serve base,
/// keeping its direction; a held ball stays at rest.
pub fn reset_effects(
    ball: &mut Ball,
    left: &mut Paddle,
    right: &mut Paddle,
    paddle_speed: &mut f32,
    ball_speed: &mut f32,
    defaults: &MatchDefaults,
) {
    ball.rect.resize_centered(defaults.ball_size);
    if ball.vel.x != 0.0 {
        ball.vel.x = defaults.ball_speed.copysign(ball.vel.x);
    }
    left.rect
        .resize_centered(Vec2::new(left.rect.width(), defaults.paddle_height));
    right
        .rect
        .resize_centered(Vec2::new(right.rect.width(), defaults.paddle_height));
    *paddle_speed = defaults.paddle_speed;
    *ball_speed = defaults.ball_speed;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> MatchDefaults {
        MatchDefaults {
            ball_size: Vec2::splat(BALL_SIZE),
            paddle_height: PADDLE_HEIGHT,
            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
        }
    }

    fn entities() -> (Ball, Paddle, Paddle) {
        (
            Ball::new(BALL_SIZE),
            Paddle::new(0.0, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            Paddle::new(100.0, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
        )
    }

    #[test]
    fn test_new_boost_is_idle_at_sentinel() {
        let boost = Boost::new();
        assert!(!boost.visible());
        assert_eq!(boost.timer, 0.0);
        assert!(boost.kind.is_none());
    }

    #[test]
    fn test_spawn_sets_duration_in_range() {
        let mut rng = GameRng::new(7);
        let field = Playfield::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut boost = Boost::new();

        // Force rolls until the die comes up; bounded so a bad seed fails loud
        let mut spawned = None;
        for _ in 0..10_000 {
            spawned = boost.tick_spawn(&mut rng, &field);
            if spawned.is_some() {
                break;
            }
        }
        assert!(spawned.is_some(), "spawn roll never fired in 10k ticks");
        assert!(boost.timer >= BOOST_DURATION_MIN as f32);
        assert!(boost.timer < BOOST_DURATION_MAX as f32);
        assert!(boost.visible());

        // Spawn window: inner 75% of width, lower 80% of height
        assert!(boost.rect.pos.x >= FIELD_WIDTH / 8.0);
        assert!(boost.rect.pos.x < FIELD_WIDTH * 7.0 / 8.0);
        assert!(boost.rect.pos.y >= 0.0);
        assert!(boost.rect.pos.y < FIELD_HEIGHT * 0.8);
    }

    #[test]
    fn test_no_spawn_while_pending() {
        let mut rng = GameRng::new(7);
        let field = Playfield::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut boost = Boost::new();
        boost.spawn_at(Vec2::new(400.0, 300.0), BoostKind::BallSize, 30.0);

        for _ in 0..1000 {
            assert!(boost.tick_spawn(&mut rng, &field).is_none());
        }
    }

    #[test]
    fn test_no_spawn_on_degenerate_field() {
        let mut rng = GameRng::new(7);
        let field = Playfield::new(0.0, 0.0);
        let mut boost = Boost::new();

        for _ in 0..10_000 {
            assert!(boost.tick_spawn(&mut rng, &field).is_none());
        }
    }

    #[test]
    fn test_expire_counts_down_then_clears() {
        let mut boost = Boost::new();
        boost.spawn_at(Vec2::new(400.0, 300.0), BoostKind::BallSpeed, 1.0);

        // Pickup consumed: hidden, timer still runs
        boost.hide();
        boost.mark_collected();

        // 0.5 is exact in binary, so the countdown hits 0.0 exactly
        let dt = 0.5;
        assert!(!boost.tick_expire(dt));
        assert_eq!(boost.timer, 0.5);
        assert!(!boost.tick_expire(dt));
        assert_eq!(boost.timer, 0.0);

        // Idle timer with a kind still set: this tick reports the expiry
        assert!(boost.tick_expire(dt));
        assert!(boost.kind.is_none());
        assert!(!boost.collected);
        assert!(!boost.visible());
        assert_eq!(boost.timer, 0.0);

        // And only once
        assert!(!boost.tick_expire(dt));
    }

    #[test]
    fn test_ball_speed_effect_caps_at_max() {
        let (mut ball, mut left, mut right) = entities();
        let d = defaults();
        let mut speed = PADDLE_SPEED;
        ball.vel.x = 10.0;

        apply_effect(BoostKind::BallSpeed, &mut ball, &mut left, &mut right, &mut speed, &d);
        assert_eq!(ball.vel.x, MAX_BALL_VX);

        // Negative direction caps symmetrically
        ball.vel.x = -10.0;
        apply_effect(BoostKind::BallSpeed, &mut ball, &mut left, &mut right, &mut speed, &d);
        assert_eq!(ball.vel.x, -MAX_BALL_VX);
    }

    #[test]
    fn test_paddle_size_effect_caps_and_slows() {
        let (mut ball, mut left, mut right) = entities();
        let d = defaults();
        let mut speed = PADDLE_SPEED;

        for _ in 0..10 {
            apply_effect(BoostKind::PaddleSize, &mut ball, &mut left, &mut right, &mut speed, &d);
        }
        assert!(left.rect.height() <= PADDLE_HEIGHT * PADDLE_SIZE_CAP + 1e-3);
        assert_eq!(left.rect.height(), right.rect.height());

        // Slowdown stops compounding once the height cap is hit:
        // 200 -> 260 -> capped at 300, so exactly two applications
        let expected = PADDLE_SPEED * PADDLE_SLOWDOWN * PADDLE_SLOWDOWN;
        assert!((speed - expected).abs() < 1e-4);
    }

    #[test]
    fn test_ball_size_effect_caps_per_axis() {
        let (mut ball, mut left, mut right) = entities();
        let d = defaults();
        let mut speed = PADDLE_SPEED;

        for _ in 0..10 {
            apply_effect(BoostKind::BallSize, &mut ball, &mut left, &mut right, &mut speed, &d);
        }
        assert!(ball.rect.width() <= BALL_SIZE * BALL_SIZE_CAP + 1e-3);
        assert!(ball.rect.height() <= BALL_SIZE * BALL_SIZE_CAP + 1e-3);
    }

    #[test]
    fn test_reset_effects_restores_defaults() {
        let (mut ball, mut left, mut right) = entities();
        let d = defaults();
        let mut paddle_speed = PADDLE_SPEED;
        let mut ball_speed = BALL_SPEED;
        ball.vel.x = -BALL_SPEED;

        for _ in 0..3 {
            apply_effect(BoostKind::PaddleSize, &mut ball, &mut left, &mut right, &mut paddle_speed, &d);
            apply_effect(BoostKind::BallSize, &mut ball, &mut left, &mut right, &mut paddle_speed, &d);
            apply_effect(BoostKind::BallSpeed, &mut ball, &mut left, &mut right, &mut paddle_speed, &d);
        }
        reset_effects(&mut ball, &mut left, &mut right, &mut paddle_speed, &mut ball_speed, &d);

        assert_eq!(ball.rect.size, Vec2::splat(BALL_SIZE));
        // Speed returns to the serve base, direction preserved
        assert_eq!(ball.vel.x, -BALL_SPEED);
        assert_eq!(left.rect.height(), PADDLE_HEIGHT);
        assert_eq!(right.rect.height(), PADDLE_HEIGHT);
        assert_eq!(paddle_speed, PADDLE_SPEED);
        assert_eq!(ball_speed, BALL_SPEED);
    }

    #[test]
    fn test_reset_effects_leaves_held_ball_at_rest() {
        let (mut ball, mut left, mut right) = entities();
        let d = defaults();
        let mut paddle_speed = PADDLE_SPEED;
        let mut ball_speed = BALL_SPEED;

        reset_effects(&mut ball, &mut left, &mut right, &mut paddle_speed, &mut ball_speed, &d);
        assert_eq!(ball.vel, Vec2::ZERO);
    }
}
