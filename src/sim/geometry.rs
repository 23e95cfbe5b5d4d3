//! Shape primitives for the play field
//!
//! Screen convention: x grows to the right, y grows downward, and a
//! rectangle's `pos` is its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
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

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Closest point inside the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.pos, self.pos + self.size)
    }
}

/// Triangle given by its three corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { points: [a, b, c] }
    }

    /// Upward spike standing on `base_left`, apex centered above the base
    pub fn spike(base_left: Vec2, base: f32, height: f32) -> Self {
        Self::new(
            Vec2::new(base_left.x + base / 2.0, base_left.y - height),
            base_left,
            Vec2::new(base_left.x + base, base_left.y),
        )
    }

    pub fn apex(&self) -> Vec2 {
        self.points[0]
    }

    pub fn bounding_box(&self) -> Rect {
        let min = self.points[0].min(self.points[1]).min(self.points[2]);
        let max = self.points[0].max(self.points[1]).max(self.points[2]);
        Rect::from_pos_size(min, max - min)
    }
}

/// Circle (the goal region)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle inscribed in the square box at `origin` with side `size`
    pub fn inscribed(origin: Vec2, size: f32) -> Self {
        let radius = size / 2.0;
        Self {
            center: origin + Vec2::splat(radius),
            radius,
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_pos_size(
            self.center - Vec2::splat(self.radius),
            Vec2::splat(self.radius * 2.0),
        )
    }
}

/// Anything the player can touch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rect),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Rectangle(r) => *r,
            Shape::Triangle(t) => t.bounding_box(),
            Shape::Circle(c) => c.bounding_box(),
        }
    }
}

/// Play field bounds, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height
    }

    /// Horizontal center
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}
