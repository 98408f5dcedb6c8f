//! Field entities: ball, paddles, boost kinds, background stars

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    Left,
    Right,
}

impl PlayerId {
    /// The opponent of this player
    pub fn other(self) -> Self {
        match self {
            PlayerId::Left => PlayerId::Right,
            PlayerId::Right => PlayerId::Left,
        }
    }
}

/// The pong ball
///
/// Size is mutable: the BallSize boost grows it about its center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, size, size),
            vel: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Hold the ball at a point with no motion (menu/start/game-over)
    pub fn freeze_at(&mut self, c: Vec2) {
        self.rect.set_center(c);
        self.vel = Vec2::ZERO;
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            score: 0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }

    pub fn set_center_y(&mut self, y: f32) {
        self.rect.pos.y = y - self.rect.height() / 2.0;
    }
}

/// Boost pickup kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostKind {
    BallSpeed,
    PaddleSize,
    BallSize,
}

impl BoostKind {
    /// All kinds the spawner can draw from
    pub const ALL: [BoostKind; 3] = [
        BoostKind::BallSpeed,
        BoostKind::PaddleSize,
        BoostKind::BallSize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoostKind::BallSpeed => "ball_speed",
            BoostKind::PaddleSize => "paddle_size",
            BoostKind::BallSize => "ball_size",
        }
    }
}

/// A background star, stored as percent-of-field coordinates so the
/// field can resize without re-rolling
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    /// Horizontal position, percent of field width in [0, 100)
    pub x_pct: f32,
    /// Vertical position, percent of field height in [0, 100)
    pub y_pct: f32,
    /// Line width for the render sink
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_other() {
        assert_eq!(PlayerId::Left.other(), PlayerId::Right);
        assert_eq!(PlayerId::Right.other(), PlayerId::Left);
    }

    #[test]
    fn test_ball_freeze() {
        let mut ball = Ball::new(50.0);
        ball.vel = Vec2::new(5.0, 3.0);
        ball.freeze_at(Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_paddle_center_y() {
        let mut p = Paddle::new(0.0, 0.0, 25.0, 200.0);
        p.set_center_y(300.0);
        assert_eq!(p.center_y(), 300.0);
    }
}
