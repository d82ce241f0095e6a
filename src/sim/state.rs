//! Session state: everything one run owns
//!
//! One aggregate, exclusively mutated by the frame tick. The RNG is seeded at
//! construction, so a fixed seed plus a fixed input sequence replays the same
//! run.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacle::Obstacle;
use super::player::Player;
use super::spawn::Spawner;
use super::theme::Theme;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; waiting for a restart
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    /// +1 per running frame, +10 per obstacle passed
    pub score: u32,
    /// Best score across every run of this process; the only field a reset keeps
    pub high_score: u32,
    /// World scroll speed; steps up with score, never back down within a run
    pub obstacle_speed: f32,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub player: Player,
    pub theme: Theme,
    pub tuning: Tuning,
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session with the shipped balance.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let theme = Theme::new(&mut rng);
        Self {
            phase: GamePhase::Running,
            score: 0,
            high_score: 0,
            obstacle_speed: tuning.initial_speed,
            obstacles: Vec::new(),
            spawner: Spawner::new(&tuning),
            player: Player::new(),
            theme,
            tuning,
            rng,
        }
    }

    /// Start a fresh run. The finished run's score is folded into the high
    /// score; everything else returns to its initial value.
    pub fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score);
        log::info!("restart: high score {}", self.high_score);
        self.score = 0;
        self.obstacle_speed = self.tuning.initial_speed;
        self.obstacles.clear();
        self.spawner = Spawner::new(&self.tuning);
        self.player = Player::new();
        self.theme.reset();
        self.phase = GamePhase::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::player::Pose;

    #[test]
    fn new_state_starts_running_and_empty() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert_eq!(state.obstacle_speed, state.tuning.initial_speed);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.rect.centerx(), PLAYER_X);
        assert_eq!(state.player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn reset_keeps_only_the_high_score() {
        let mut state = GameState::new(42);
        state.score = 450;
        state.high_score = 300;
        state.obstacle_speed = 9.0;
        state.phase = GamePhase::GameOver;
        state.obstacles.push(crate::sim::Obstacle::cactus(&mut state.rng));
        state.theme.update(2500, state.tuning.theme_interval);

        state.reset();

        assert_eq!(state.high_score, 450);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacle_speed, state.tuning.initial_speed);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pose(), Pose::Standing);
        assert_eq!(state.player.rect.centerx(), PLAYER_X);
        assert_eq!(state.player.rect.bottom(), GROUND_Y);
        assert!(!state.theme.dark);
    }

    #[test]
    fn reset_never_lowers_the_high_score() {
        let mut state = GameState::new(42);
        state.score = 100;
        state.high_score = 300;
        state.reset();
        assert_eq!(state.high_score, 300);
    }
}
