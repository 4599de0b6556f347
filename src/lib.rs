//! Brickfall - a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Construction-time game configuration
//! - `scene`: Renderer-agnostic scene snapshots
//!
//! The crate owns no drawing surface or input device. A host frame driver
//! feeds a [`sim::TickInput`] into [`sim::tick`] once per display refresh and
//! hands the resulting [`scene::Shape`] list to whatever renderer it likes.

pub mod config;
pub mod scene;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use scene::{Shape, scene};

/// Default tuning values, used by [`GameConfig::default`]
pub mod consts {
    /// Arena dimensions (pixels, origin top-left, +y downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal paddle movement per tick
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball movement per tick; launch velocity components are exactly this magnitude
    pub const BALL_SPEED: f32 = 5.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;

    /// One color per brick row, cycled when there are more rows than colors
    pub const BRICK_PALETTE: [&str; 5] = ["#dc2723", "#eb7814", "#ffc100", "green", "blue"];
    pub const BALL_COLOR: &str = "#8418e7";
    pub const PADDLE_COLOR: &str = "white";
}
