//! Per-frame view handed to the rendering shell
//!
//! A `Scene` is a cheap borrowed snapshot of everything a renderer needs for
//! one frame. Capturing it has no side effects; drawing stays entirely on the
//! shell's side.

use crate::sim::theme::{Rgb, Snowflake};
use crate::sim::{GamePhase, GameState, Obstacle, Player};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub background: Rgb,
    pub foreground: Rgb,
    pub line: Rgb,
    /// Player hitbox and pose (via [`Player::pose`])
    pub player: &'a Player,
    /// Active obstacles in spawn order
    pub obstacles: &'a [Obstacle],
    /// Flakes to draw; empty outside dark mode
    pub snow: &'a [Snowflake],
    pub score: u32,
    /// Session best, folded with the current run so the game-over screen
    /// never shows a high score below the score that just beat it
    pub high_score: u32,
    pub phase: GamePhase,
}

impl<'a> Scene<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let palette = state.theme.palette;
        Self {
            background: palette.background,
            foreground: palette.foreground,
            line: palette.line,
            player: &state.player,
            obstacles: &state.obstacles,
            snow: if state.theme.dark {
                &state.theme.snow
            } else {
                &[]
            },
            score: state.score,
            high_score: state.high_score.max(state.score),
            phase: state.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::theme::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn light_mode_hides_the_snow() {
        let state = GameState::new(3);
        let scene = Scene::capture(&state);
        assert_eq!(scene.background, LIGHT_PALETTE.background);
        assert!(scene.snow.is_empty());
    }

    #[test]
    fn dark_mode_exposes_palette_and_snow() {
        let mut state = GameState::new(3);
        state.theme.update(2500, state.tuning.theme_interval);
        let scene = Scene::capture(&state);
        assert_eq!(scene.background, DARK_PALETTE.background);
        assert_eq!(scene.foreground, DARK_PALETTE.foreground);
        assert_eq!(scene.snow.len(), state.theme.snow.len());
    }

    #[test]
    fn game_over_hud_never_understates_the_high_score() {
        let mut state = GameState::new(3);
        state.score = 450;
        state.high_score = 300;
        state.phase = GamePhase::GameOver;
        let scene = Scene::capture(&state);
        assert_eq!(scene.score, 450);
        assert_eq!(scene.high_score, 450);
    }
}
