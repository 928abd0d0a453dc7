//! Axis-aligned rectangle geometry for paddles and the ball
//!
//! Screen space: origin at the top-left corner of the field, +y pointing down.
//! All overlap tests use strict inequalities, so shapes that only share an
//! edge do not intersect. A ball resting flush against a paddle face is
//! therefore never resolved twice.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict circle overlap test against the closest point of the rectangle
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.left(), self.right()),
            center.y.clamp(self.top(), self.bottom()),
        );
        center.distance_squared(closest) < radius * radius
    }
}

/// Shape tested against a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

/// Check whether `rect` overlaps `other` (edge contact is a miss)
pub fn intersects(rect: &Rect, other: &Collider) -> bool {
    match *other {
        Collider::Rect(ref b) => rect.intersects(b),
        Collider::Circle { center, radius } => rect.intersects_circle(center, radius),
    }
}
