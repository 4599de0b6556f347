//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Rectangles are anchored at their top-left corner, in arena coordinates
//! (origin top-left, +y downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), 80.0, 20.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 90.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 40.0);
        assert_eq!(rect.center(), Vec2::new(50.0, 30.0));
    }
}
