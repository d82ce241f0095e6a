//! The simulation: all gameplay logic, no rendering or platform dependencies
//!
//! One [`tick`] per rendered frame advances everything: player physics, spawn
//! control, obstacle motion, collision, scoring, and the theme cycle. All
//! randomness flows through the state-owned seeded RNG, so a fixed seed and
//! input sequence replay the same run.

pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod theme;
pub mod tick;

pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{DuckSource, Player, Pose};
pub use rect::Rect;
pub use spawn::Spawner;
pub use state::{GamePhase, GameState};
pub use theme::{Palette, Rgb, Snowflake, Theme};
pub use tick::{TickInput, tick};
