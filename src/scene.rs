//! Renderer-agnostic scene snapshots
//!
//! The core never touches a drawing surface. Each frame it can be asked for
//! an ordered list of shape descriptors; the host renderer draws them against
//! its own fixed-size 2D surface.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// A drawable primitive in arena coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// The ball: center position, radius, fill color
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    /// The paddle or a brick: top-left position, size, fill color
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
}

/// Snapshot the current state as drawable shapes
///
/// Draw order: ball, paddle, then every non-destroyed brick. Destroyed
/// bricks are omitted entirely. Pure; no state is mutated.
pub fn scene(state: &GameState) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(2 + state.bricks.len());

    shapes.push(Shape::Circle {
        x: state.ball.pos.x,
        y: state.ball.pos.y,
        radius: state.ball.radius,
        color: state.ball.color.clone(),
    });

    let paddle = &state.paddle;
    shapes.push(Shape::Rect {
        x: paddle.rect.pos.x,
        y: paddle.rect.pos.y,
        width: paddle.rect.width,
        height: paddle.rect.height,
        color: paddle.color.clone(),
    });

    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        shapes.push(Shape::Rect {
            x: brick.rect.pos.x,
            y: brick.rect.pos.y,
            width: brick.rect.width,
            height: brick.rect.height,
            color: brick.color.clone(),
        });
    }

    shapes
}
