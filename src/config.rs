//! Game configuration
//!
//! All tuning values are fixed at construction time. Validation happens once
//! at startup; a bad configuration is a fatal construction error, there is no
//! runtime recovery path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Configuration rejected by [`GameConfig::validate`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NonPositiveDimension(&'static str),
    #[error("brick grid needs at least one row and one column")]
    EmptyGrid,
    #[error("brick palette must not be empty")]
    EmptyPalette,
    #[error("brick grid is wider than the arena ({grid_width} > {arena_width})")]
    GridTooWide { grid_width: f32, arena_width: f32 },
    #[error("brick grid overlaps the paddle row ({grid_bottom} > {paddle_top})")]
    GridTooTall { grid_bottom: f32, paddle_top: f32 },
    #[error("paddle is wider than the arena ({paddle_width} > {arena_width})")]
    PaddleTooWide { paddle_width: f32, arena_width: f32 },
}

/// Game tuning, fixed for the lifetime of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena dimensions (origin top-left, +y downward)
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal paddle movement per tick
    pub paddle_speed: f32,

    pub ball_radius: f32,
    /// Launch speed; each launch velocity component is exactly this magnitude
    pub ball_speed: f32,

    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Spacing between grid cells, both axes
    pub brick_gap: f32,

    /// Row colors, indexed by `row % palette.len()`
    pub palette: Vec<String>,
    pub ball_color: String,
    pub paddle_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: consts::ARENA_WIDTH,
            arena_height: consts::ARENA_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            ball_radius: consts::BALL_RADIUS,
            ball_speed: consts::BALL_SPEED,
            brick_rows: consts::BRICK_ROWS,
            brick_cols: consts::BRICK_COLS,
            brick_width: consts::BRICK_WIDTH,
            brick_height: consts::BRICK_HEIGHT,
            brick_gap: consts::BRICK_GAP,
            palette: consts::BRICK_PALETTE.iter().map(|c| c.to_string()).collect(),
            ball_color: consts::BALL_COLOR.to_string(),
            paddle_color: consts::PADDLE_COLOR.to_string(),
        }
    }
}

impl GameConfig {
    /// Width of the brick block as laid out by the grid builder
    pub fn grid_width(&self) -> f32 {
        self.brick_cols as f32 * (self.brick_width + self.brick_gap - 1.0)
    }

    /// Horizontal offset centering the brick block in the arena
    pub fn grid_x_offset(&self) -> f32 {
        (self.arena_width - self.grid_width()) / 2.0
    }

    /// Vertical margin reserved above the brick block
    pub fn grid_y_offset(&self) -> f32 {
        2.0 * self.brick_height
    }

    /// Check construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension(name));
            }
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.grid_width() > self.arena_width {
            return Err(ConfigError::GridTooWide {
                grid_width: self.grid_width(),
                arena_width: self.arena_width,
            });
        }
        if self.paddle_width > self.arena_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }
        let grid_bottom = self.grid_y_offset()
            + self.brick_rows as f32 * (self.brick_height + self.brick_gap);
        let paddle_top = self.arena_height - self.paddle_height;
        if grid_bottom > paddle_top {
            return Err(ConfigError::GridTooTall {
                grid_bottom,
                paddle_top,
            });
        }
        Ok(())
    }
}
