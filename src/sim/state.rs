//! Match state: phase machine, scores, serve/restart, render snapshot
//!
//! A `GameState` owns exactly one ball, two paddles, one boost slot, the
//! starfield and the seeded RNG. No sharing, no cycles; the host holds one
//! `GameState` and drives it through [`super::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boost::{self, Boost, MatchDefaults};
use super::entities::{Ball, BoostKind, Paddle, PlayerId, Star};
use super::rect::Rect;
use crate::config::Config;
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Fresh match, start overlay visible, ball held at center
    Start,
    /// Paused overlay reachable from Playing; toggling resumes
    Menu,
    /// Full simulation active
    Playing,
    /// Transient announcement; collapses into Menu on the next tick
    GameOver,
}

/// Playfield geometry, supplied by the host every tick (resizable)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Dimensions clamp to zero so degenerate windows stay non-fatal
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Upper playable edge; the strip above is reserved for the menu bar
    #[inline]
    pub fn top_bound(&self) -> f32 {
        self.height * TOP_MARGIN
    }
}

/// Seedable uniform source for every random draw in the simulation
#[derive(Debug, Clone)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// One uniform draw in [0, die)
    pub fn roll(&mut self, die: u32) -> u32 {
        self.0.random_range(0..die)
    }

    /// Uniform integer in [lo, hi); an empty range collapses to lo
    pub fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo { lo } else { self.0.random_range(lo..hi) }
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.range_u32(0, items.len() as u32) as usize]
    }
}

/// Everything that happened during one tick, for the audio/render hosts
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub paddle_hit: Option<PlayerId>,
    pub wall_hit: bool,
    pub boost_spawned: Option<BoostKind>,
    pub boost_collected: Option<BoostKind>,
    pub boost_expired: bool,
    pub scored: Option<PlayerId>,
    /// Winner, set on the tick the match ends
    pub game_over: Option<PlayerId>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub phase: MatchPhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub boost: Boost,
    /// Current paddle travel per tick; shrinks under the PaddleSize boost
    pub paddle_speed: f32,
    /// Current horizontal serve speed base
    pub ball_speed: f32,
    /// Whichever paddle most recently redirected the ball (diagnostic)
    pub last_contact: Option<PlayerId>,
    pub stars: Vec<Star>,
    pub rng: GameRng,
    pub time_ticks: u64,
    defaults: MatchDefaults,
    /// Previous tick's toggle key state, for edge detection
    toggle_held: bool,
}

impl GameState {
    /// Create a match in the Start phase with everything held at center
    pub fn new(seed: u64, config: Config, field: &Playfield) -> Self {
        let defaults = MatchDefaults {
            ball_size: Vec2::splat(config.ball_size),
            paddle_height: config.paddle_height,
            ball_speed: config.ball_speed,
            paddle_speed: config.paddle_speed,
        };

        let mut state = Self {
            phase: MatchPhase::Start,
            ball: Ball::new(config.ball_size),
            left: Paddle::new(0.0, 0.0, config.paddle_width, config.paddle_height),
            right: Paddle::new(0.0, 0.0, config.paddle_width, config.paddle_height),
            boost: Boost::new(),
            paddle_speed: config.paddle_speed,
            ball_speed: config.ball_speed,
            last_contact: None,
            stars: Vec::new(),
            rng: GameRng::new(seed),
            time_ticks: 0,
            defaults,
            toggle_held: false,
            config,
        };

        state.reroll_stars();
        state.hold_centered(field);
        log::info!("new match, seed {seed}");
        state
    }

    /// Reposition the ball at center and launch it toward one side
    pub fn serve_toward(&mut self, toward: PlayerId, field: &Playfield) {
        let vx = match toward {
            PlayerId::Left => -self.ball_speed,
            PlayerId::Right => self.ball_speed,
        };
        self.ball.rect.set_center(field.center());
        self.ball.vel = Vec2::new(vx, 0.0);
    }

    /// Hold the ball frozen at center and re-center both paddles
    /// (every non-Playing phase does this each tick)
    pub fn hold_centered(&mut self, field: &Playfield) {
        self.ball.freeze_at(field.center());
        let mid = field.top_bound() / 2.0;
        self.left.set_center_y(mid);
        self.right.set_center_y(mid);
        self.pin_paddles_x(field);
    }

    /// Keep paddles glued to their side under resizes
    pub fn pin_paddles_x(&mut self, field: &Playfield) {
        self.left.rect.pos.x = 0.0;
        self.right.rect.pos.x = (field.width - self.right.rect.width()).max(0.0);
    }

    /// Zero scores, clear the boost slot, restore boosted stats, serve,
    /// and re-roll the starfield
    pub fn restart(&mut self, field: &Playfield) {
        self.left.score = 0;
        self.right.score = 0;
        self.boost.clear();
        self.reset_boost_effects();
        self.last_contact = None;
        self.serve_toward(PlayerId::Right, field);
        self.reroll_stars();
        log::info!("match restarted");
    }

    /// Edge-detect the toggle key: true only on the tick it went down,
    /// so a host may forward raw held key state
    pub fn toggle_pressed(&mut self, held: bool) -> bool {
        let pressed = held && !self.toggle_held;
        self.toggle_held = held;
        pressed
    }

    /// Handle the menu-toggle press according to the phase table
    pub fn toggle_menu(&mut self, field: &Playfield) {
        match self.phase {
            MatchPhase::Start => {
                self.restart(field);
                self.phase = MatchPhase::Playing;
                log::info!("match started");
            }
            MatchPhase::Playing => {
                self.ball.freeze_at(field.center());
                self.phase = MatchPhase::Menu;
                log::info!("menu opened");
            }
            MatchPhase::Menu => {
                self.serve_toward(PlayerId::Right, field);
                self.phase = MatchPhase::Playing;
                log::info!("menu closed, ball served");
            }
            // Transient; it resolves itself on the next tick
            MatchPhase::GameOver => {}
        }
    }

    /// Restore every boosted stat to its match-start value
    pub fn reset_boost_effects(&mut self) {
        boost::reset_effects(
            &mut self.ball,
            &mut self.left,
            &mut self.right,
            &mut self.paddle_speed,
            &mut self.ball_speed,
            &self.defaults,
        );
    }

    /// Apply one application of the given boost effect
    pub fn apply_boost_effect(&mut self, kind: BoostKind) {
        boost::apply_effect(
            kind,
            &mut self.ball,
            &mut self.left,
            &mut self.right,
            &mut self.paddle_speed,
            &self.defaults,
        );
    }

    /// Credit a point, reset boost state, and either end the match or
    /// re-serve toward the side that did not score. Returns the winner
    /// when the point ends the match.
    pub fn award_point(&mut self, scorer: PlayerId, field: &Playfield) -> Option<PlayerId> {
        let score = match scorer {
            PlayerId::Left => {
                self.left.score += 1;
                self.left.score
            }
            PlayerId::Right => {
                self.right.score += 1;
                self.right.score
            }
        };
        log::debug!(
            "point for {scorer:?}: {} - {}",
            self.left.score,
            self.right.score
        );

        self.boost.clear();
        self.reset_boost_effects();

        if score >= self.config.game_over_score {
            self.ball.freeze_at(field.center());
            self.phase = MatchPhase::GameOver;
            log::info!("game over, {scorer:?} wins {score}");
            Some(scorer)
        } else {
            self.serve_toward(scorer.other(), field);
            None
        }
    }

    /// Re-roll the decorative starfield (match start and restart)
    pub fn reroll_stars(&mut self) {
        let count = self.rng.range_u32(STARS_MIN, STARS_MAX);
        self.stars = (0..count)
            .map(|_| Star {
                x_pct: self.rng.range_u32(0, 100) as f32,
                y_pct: self.rng.range_u32(0, 100) as f32,
                width: self.rng.range_u32(5, 20) as f32 / 10.0,
            })
            .collect();
    }

    /// Read-only view for the render sink, scaled to the current field
    pub fn snapshot(&self, field: &Playfield) -> Snapshot {
        let stars = self
            .stars
            .iter()
            .map(|s| {
                let x = field.width / 100.0 * s.x_pct;
                let mut y = field.height / 100.0 * s.y_pct;
                // Stars rolled into the menu bar fold down into the field
                if y > field.top_bound() {
                    y *= 0.5;
                }
                StarView {
                    pos: Vec2::new(x, y),
                    width: s.width,
                }
            })
            .collect();

        Snapshot {
            phase: self.phase,
            left_score: self.left.score,
            right_score: self.right.score,
            ball: self.ball.rect,
            ball_vel: self.ball.vel,
            left_paddle: self.left.rect,
            right_paddle: self.right.rect,
            boost: self.boost.kind.filter(|_| self.boost.visible()).map(|kind| BoostView {
                kind,
                rect: self.boost.rect,
                timer: self.boost.timer,
            }),
            stars,
            last_contact: self.last_contact,
        }
    }
}

/// A visible boost pickup, as the render sink sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoostView {
    pub kind: BoostKind,
    pub rect: Rect,
    pub timer: f32,
}

/// A background star scaled to the current field
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StarView {
    pub pos: Vec2,
    pub width: f32,
}

/// Per-tick read-only state for drawing
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub left_score: u32,
    pub right_score: u32,
    pub ball: Rect,
    pub ball_vel: Vec2,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub boost: Option<BoostView>,
    pub stars: Vec<StarView>,
    pub last_contact: Option<PlayerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameState, Playfield) {
        let field = Playfield::new(FIELD_WIDTH, FIELD_HEIGHT);
        let state = GameState::new(42, Config::default(), &field);
        (state, field)
    }

    #[test]
    fn test_new_match_starts_frozen() {
        let (state, field) = setup();
        assert_eq!(state.phase, MatchPhase::Start);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.center(), field.center());
        assert_eq!(state.left.center_y(), field.top_bound() / 2.0);
        assert!(!state.boost.visible());
    }

    #[test]
    fn test_starfield_density_in_range() {
        let (state, _) = setup();
        let n = state.stars.len() as u32;
        assert!((STARS_MIN..STARS_MAX).contains(&n));
        for s in &state.stars {
            assert!((0.0..100.0).contains(&s.x_pct));
            assert!((0.5..2.0).contains(&s.width));
        }
    }

    #[test]
    fn test_toggle_from_start_begins_playing() {
        let (mut state, field) = setup();
        state.toggle_menu(&field);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(state.ball_speed, 0.0));
        assert_eq!(state.left.score, 0);
        assert_eq!(state.right.score, 0);
    }

    #[test]
    fn test_toggle_playing_menu_roundtrip() {
        let (mut state, field) = setup();
        state.toggle_menu(&field); // Start -> Playing

        state.toggle_menu(&field); // Playing -> Menu
        assert_eq!(state.phase, MatchPhase::Menu);
        assert_eq!(state.ball.vel, Vec2::ZERO);

        state.toggle_menu(&field); // Menu -> Playing, re-serve
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(state.ball_speed, 0.0));
    }

    #[test]
    fn test_award_point_serves_toward_non_scorer() {
        let (mut state, field) = setup();
        state.phase = MatchPhase::Playing;

        let winner = state.award_point(PlayerId::Right, &field);
        assert_eq!(winner, None);
        assert_eq!(state.right.score, 1);
        // Right scored, so the ball goes out toward the left side
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.center(), field.center());
    }

    #[test]
    fn test_award_point_at_threshold_ends_match() {
        let (mut state, field) = setup();
        state.phase = MatchPhase::Playing;
        state.right.score = GAME_OVER_SCORE - 1;

        let winner = state.award_point(PlayerId::Right, &field);
        assert_eq!(winner, Some(PlayerId::Right));
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_award_point_clears_boost() {
        let (mut state, field) = setup();
        state.phase = MatchPhase::Playing;
        state.boost.spawn_at(Vec2::new(400.0, 300.0), BoostKind::BallSize, 30.0);
        state.apply_boost_effect(BoostKind::BallSize);
        assert!(state.ball.rect.width() > state.config.ball_size);

        state.award_point(PlayerId::Left, &field);
        assert!(!state.boost.visible());
        assert_eq!(state.boost.timer, 0.0);
        assert_eq!(state.ball.rect.width(), state.config.ball_size);
    }

    #[test]
    fn test_restart_zeroes_everything() {
        let (mut state, field) = setup();
        state.phase = MatchPhase::Playing;
        state.left.score = 7;
        state.right.score = 3;
        state.apply_boost_effect(BoostKind::PaddleSize);

        state.restart(&field);
        assert_eq!(state.left.score, 0);
        assert_eq!(state.right.score, 0);
        assert_eq!(state.left.rect.height(), state.config.paddle_height);
        assert_eq!(state.paddle_speed, state.config.paddle_speed);
        assert_eq!(state.ball.vel, Vec2::new(state.ball_speed, 0.0));
    }

    #[test]
    fn test_snapshot_folds_menu_bar_stars() {
        let (mut state, field) = setup();
        state.stars = vec![Star {
            x_pct: 50.0,
            y_pct: 95.0,
            width: 1.0,
        }];

        let snap = state.snapshot(&field);
        let y = snap.stars[0].pos.y;
        assert!((y - field.height * 0.95 * 0.5).abs() < 1e-3);
        assert!(y <= field.top_bound());
    }

    #[test]
    fn test_snapshot_hides_sentinel_boost() {
        let (mut state, field) = setup();
        assert!(state.snapshot(&field).boost.is_none());

        state.boost.spawn_at(Vec2::new(400.0, 300.0), BoostKind::BallSpeed, 25.0);
        let snap = state.snapshot(&field);
        assert_eq!(snap.boost.as_ref().map(|b| b.kind), Some(BoostKind::BallSpeed));

        // Consumed pickup: hidden again even while the timer runs
        state.boost.hide();
        assert!(state.snapshot(&field).boost.is_none());
    }

    #[test]
    fn test_degenerate_playfield_is_non_fatal() {
        let field = Playfield::new(-5.0, 0.0);
        assert_eq!(field.width, 0.0);
        assert_eq!(field.height, 0.0);
        let state = GameState::new(1, Config::default(), &field);
        assert_eq!(state.ball.center(), Vec2::ZERO);
    }
}
