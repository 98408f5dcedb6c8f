//! Axis-aligned rectangle geometry
//!
//! Every entity on the field is a rect: bottom-left corner plus size, y up.
//! Overlap testing is inclusive on the boundary, matching the widget
//! collision test the original game was built on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move the rect so its center lands on `c`
    pub fn set_center(&mut self, c: Vec2) {
        self.pos = c - self.size / 2.0;
    }

    /// Resize in place, keeping the center fixed
    pub fn resize_centered(&mut self, size: Vec2) {
        let c = self.center();
        self.size = size;
        self.set_center(c);
    }

    /// Inclusive AABB overlap: projections overlap on both axes
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x <= other.right()
            && self.right() >= other.pos.x
            && self.pos.y <= other.top()
            && self.top() >= other.pos.y
    }
}
