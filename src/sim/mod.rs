//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::circle_rect_overlap;
pub use rect::Rect;
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, RngState, build_brick_grid};
pub use tick::{TickInput, tick};
