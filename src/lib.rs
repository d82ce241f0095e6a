//! Dino Dash - headless core for an endless runner
//!
//! Core modules:
//! - `sim`: the complete simulation (obstacles, physics, collision, scoring, theme)
//! - `scene`: the per-frame view a rendering shell consumes
//! - `tuning`: data-driven game balance
//!
//! The crate owns no window, clock, or assets. A shell collects its input
//! events into a [`sim::TickInput`], calls [`sim::tick`] once per frame at
//! [`consts::FPS`], and draws whatever [`scene::Scene::capture`] returns.

pub mod scene;
pub mod sim;
pub mod tuning;

pub use scene::Scene;
pub use sim::{GamePhase, GameState, TickInput, tick};
pub use tuning::Tuning;

/// Playfield geometry and sprite dimensions
pub mod consts {
    /// Playfield size in pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 300.0;
    /// Ground line; no hitbox bottom ever sits below it
    pub const GROUND_Y: f32 = HEIGHT - 50.0;
    /// Frame rate the shell is expected to drive `tick` at
    pub const FPS: u32 = 60;

    /// Player hitbox size per pose (w, h)
    pub const DINO_SIZE: (f32, f32) = (44.0, 47.0);
    pub const DINO_DUCK_SIZE: (f32, f32) = (59.0, 30.0);
    /// Fixed horizontal center of the player hitbox
    pub const PLAYER_X: f32 = 100.0;

    pub const CACTUS_SIZE: (f32, f32) = (25.0, 50.0);
    pub const PTERODACTYL_SIZE: (f32, f32) = (46.0, 40.0);
    /// Midbottom heights the flyer kinds pick between
    pub const PTERODACTYL_HEIGHTS: [f32; 2] = [GROUND_Y - 65.0, GROUND_Y - 95.0];

    /// Obstacles are culled once fully past the left edge, or once their top
    /// sinks this far below the bottom boundary
    pub const CULL_MARGIN: f32 = 20.0;

    /// Dark-mode snowfall
    pub const NUM_SNOWFLAKES: usize = 150;
    /// Flakes respawn above the top once they leave the sides or bottom by this margin
    pub const SNOW_MARGIN: f32 = 10.0;
}
