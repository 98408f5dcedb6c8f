//! Collision detection and response
//!
//! Ball integration is tick-based: position advances by the raw velocity
//! vector once per tick, regardless of wall-clock dt. The resolver enforces
//! the horizontal speed cap as an invariant rather than an error.

use super::boost::Boost;
use super::entities::{Ball, Paddle, PlayerId};
use super::state::Playfield;
use crate::consts::MAX_BALL_VX;

/// Clamp the horizontal speed cap, then advance the ball by one tick
pub fn move_ball(ball: &mut Ball) {
    ball.vel.x = ball.vel.x.clamp(-MAX_BALL_VX, MAX_BALL_VX);
    ball.rect.pos += ball.vel;
}

/// Bounce the ball off a paddle if they overlap
///
/// Reflects `vel.x` and steers `vel.y` by the normalized vertical strike
/// position. The offset is deliberately unclamped; corner hits can push it
/// past [-1, 1]. Returns the paddle owner as the new last contact.
pub fn bounce_off_paddle(paddle: &Paddle, who: PlayerId, ball: &mut Ball) -> Option<PlayerId> {
    if !ball.rect.intersects(&paddle.rect) {
        return None;
    }

    let offset = (ball.center().y - paddle.center_y()) / (paddle.rect.height() / 2.0);
    ball.vel.x = -ball.vel.x;
    ball.vel.y += offset;

    Some(who)
}

/// Reflect the ball off the bottom edge or the 0.9-height top margin
///
/// The top 10% of the field is reserved for the menu bar. A single negation
/// per call, even when a degenerate field breaches both margins at once.
/// Returns true if the ball bounced.
pub fn bounce_off_walls(ball: &mut Ball, field: &Playfield) -> bool {
    if ball.rect.pos.y < 0.0 || ball.rect.top() > field.top_bound() {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Circular-distance pickup test
///
/// Both entities are treated as circles of radius width/2. On a hit the
/// pickup is hidden to its sentinel position as a side effect; its timer is
/// left running and now measures the remaining effect duration.
pub fn detect_boost_pickup(ball: &Ball, boost: &mut Boost) -> bool {
    if !boost.visible() {
        return false;
    }

    let ball_r = ball.rect.width() / 2.0;
    let boost_r = boost.rect.width() / 2.0;
    let dist = ball.center().distance(boost.rect.center());

    if dist <= ball_r + boost_r {
        boost.hide();
        return true;
    }
    false
}
