//! Day/night theme cycle and the dark-mode snowfall
//!
//! The palette is a pure function of score: every `theme_interval` points the
//! theme level ticks up, and odd levels are dark. Snow is cosmetic only; it
//! never touches collision or scoring.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const DARK_GREY: Rgb = Rgb(50, 50, 50);
pub const LIGHT_GREY: Rgb = Rgb(200, 200, 200);

/// Background/foreground/line colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub line: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: WHITE,
    foreground: BLACK,
    line: BLACK,
};

pub const DARK_PALETTE: Palette = Palette {
    background: DARK_GREY,
    foreground: LIGHT_GREY,
    line: LIGHT_GREY,
};

/// One ambient snowflake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub pos: Vec2,
    drift: Vec2,
    pub radius: f32,
}

impl Snowflake {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=WIDTH),
                rng.random_range(-HEIGHT..=HEIGHT),
            ),
            drift: Vec2::new(
                rng.random_range(-0.3..=0.3),
                rng.random_range(0.8..=1.8),
            ),
            radius: rng.random_range(1..=3) as f32,
        }
    }
}

/// Theme controller state
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub palette: Palette,
    /// Fixed-size flake field; only drawn (and drifted) in dark mode
    pub snow: Vec<Snowflake>,
}

impl Theme {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            dark: false,
            palette: LIGHT_PALETTE,
            snow: (0..NUM_SNOWFLAKES).map(|_| Snowflake::spawn(rng)).collect(),
        }
    }

    /// Re-derive the palette from the score. Dark iff the theme level is odd.
    pub fn update(&mut self, score: u32, theme_interval: u32) {
        let level = score / theme_interval;
        let dark = level % 2 == 1;
        if dark != self.dark {
            self.dark = dark;
            self.palette = if dark { DARK_PALETTE } else { LIGHT_PALETTE };
            log::debug!("theme level {level}: {}", if dark { "dark" } else { "light" });
        }
    }

    /// Drift every flake one frame; flakes leaving the bounds respawn above
    /// the top edge at a fresh column.
    pub fn drift_snow(&mut self, rng: &mut impl Rng) {
        for flake in &mut self.snow {
            flake.pos += flake.drift;
            let out = flake.pos.y > HEIGHT + SNOW_MARGIN
                || flake.pos.x < -SNOW_MARGIN
                || flake.pos.x > WIDTH + SNOW_MARGIN;
            if out {
                flake.pos.y = rng.random_range(-50.0..=-10.0);
                flake.pos.x = rng.random_range(0.0..=WIDTH);
            }
        }
    }

    /// Back to light mode. The flake field persists across runs.
    pub fn reset(&mut self) {
        self.dark = false;
        self.palette = LIGHT_PALETTE;
    }
}
