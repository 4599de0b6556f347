//! Collision detection between the ball and rectangular bodies
//!
//! The ball is tested as its axis-aligned bounding square rather than as a
//! true circle: a ball grazing a brick corner registers as a hit even when
//! the circle itself would miss. This matches the observed gameplay and is
//! kept as-is.

use glam::Vec2;

use super::rect::Rect;

/// Returns true iff the smallest square enclosing the circle intersects `rect`
///
/// Axis-separated bounding check: the circle's extent `[x-r, x+r] x [y-r, y+r]`
/// is compared against the rectangle's bounds; disjoint on either axis means
/// no collision. Pure, no side effects.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    if center.x + radius < rect.left() || rect.right() < center.x - radius {
        return false;
    }
    if center.y + radius < rect.top() || rect.bottom() < center.y - radius {
        return false;
    }
    true
}
