//! Per-frame simulation step
//!
//! One `tick` per rendered frame. Input is applied first, then score, speed,
//! theme, player physics, spawning, and the obstacle sweep. The first
//! collision found ends the sweep and the run.

use super::player::DuckSource;
use super::state::{GamePhase, GameState};

/// Input events the shell collected for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump requested
    pub jump: bool,
    /// Duck pressed, tagged with the initiating surface
    pub duck: Option<DuckSource>,
    /// Duck released, tagged with the releasing surface
    pub duck_release: Option<DuckSource>,
    /// Restart requested; only meaningful in `GameOver`
    pub restart: bool,
}

/// Advance the game by one frame.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
                return;
            }
            // The world is frozen; only the ambient snowfall keeps moving
            if state.theme.dark {
                state.theme.drift_snow(&mut state.rng);
            }
        }
        GamePhase::Running => run_frame(state, input),
    }
}

fn run_frame(state: &mut GameState, input: &TickInput) {
    // Input first: jump/duck gating reads the previous frame's ground state
    if input.jump {
        state.player.press_jump(state.tuning.jump_impulse);
    }
    if let Some(source) = input.duck {
        state.player.press_duck(source);
    }
    if let Some(source) = input.duck_release {
        state.player.release_duck(source);
    }

    state.score += 1;

    // Speed steps up with score and never back down within a run
    let stepped = state.tuning.initial_speed
        + (state.score / state.tuning.speed_step_score) as f32 * state.tuning.speed_step;
    if stepped > state.obstacle_speed {
        state.obstacle_speed = stepped;
    }

    state.theme.update(state.score, state.tuning.theme_interval);
    if state.theme.dark {
        state.theme.drift_snow(&mut state.rng);
    }

    state.player.step(state.tuning.gravity);

    state.spawner.advance(
        state.score,
        state.obstacle_speed,
        &mut state.obstacles,
        &state.tuning,
        &mut state.rng,
    );

    // Obstacle sweep: advance, award passes, stop at the first hit. Obstacles
    // after a hit keep their previous positions for the frame.
    let player_rect = state.player.rect;
    let mut collided = false;
    for obstacle in &mut state.obstacles {
        obstacle.advance(state.obstacle_speed);
        if !obstacle.passed && obstacle.rect.right() < player_rect.left() {
            obstacle.passed = true;
            state.score += 10;
        }
        if obstacle.rect.intersects(&player_rect) {
            collided = true;
            break;
        }
    }

    if collided {
        log::info!("collision at score {}", state.score);
        state.phase = GamePhase::GameOver;
        return;
    }

    state.obstacles.retain(|o| !o.offscreen());
}
