//! Obstacle spawn control: what to spawn, and when
//!
//! A frame timer gates spawn attempts. Each attempt resolves a kind through
//! score-gated weighted rolls, then a spacing guard may still discard the
//! candidate when the previous spawn is too close to the right edge.

use rand::Rng;

use super::obstacle::Obstacle;
use crate::consts::*;
use crate::tuning::Tuning;

/// Spawn timing state, one per session
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    timer: u32,
    /// Frames between attempts; shrinks with score down to the floor
    pub delay: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: 0,
            delay: tuning.initial_spawn_delay,
        }
    }

    /// Advance one frame. When the timer elapses, roll a candidate and push
    /// it unless the spacing guard rejects it.
    pub fn advance(
        &mut self,
        score: u32,
        speed: f32,
        obstacles: &mut Vec<Obstacle>,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        self.timer += 1;
        if self.timer < self.delay {
            return;
        }
        self.timer = 0;

        let candidate = roll_kind(score, tuning, rng);

        if let Some(last) = obstacles.last() {
            let min_gap = tuning.min_gap_base + speed * tuning.min_gap_per_speed;
            if WIDTH - last.rect.right() < min_gap {
                // Too close behind the previous spawn; retry sooner than a
                // full cycle.
                self.timer = (self.delay as f32 * 0.3) as u32;
                return;
            }
        }

        log::debug!("spawn {} at score {score}, speed {speed:.1}", candidate.label());
        obstacles.push(candidate);
        self.delay = tuning
            .initial_spawn_delay
            .saturating_sub(score / tuning.spawn_delay_step_score)
            .max(tuning.min_spawn_delay);
    }
}

/// Resolve the candidate kind for one attempt. The two rare rolls are checked
/// first (kamikaze before levitating) and exclude the pterodactyl roll.
fn roll_kind(score: u32, tuning: &Tuning, rng: &mut impl Rng) -> Obstacle {
    if score >= tuning.kamikaze_min_score && rng.random_bool(tuning.kamikaze_chance) {
        return Obstacle::kamikaze(rng);
    }
    if score >= tuning.levitating_min_score && rng.random_bool(tuning.levitating_chance) {
        return Obstacle::levitating_cactus(rng);
    }
    if score >= tuning.pterodactyl_min_score && rng.random_bool(tuning.pterodactyl_chance) {
        if rng.random_bool(tuning.swoop_chance) {
            return Obstacle::swooping_pterodactyl(rng);
        }
        return Obstacle::pterodactyl(rng);
    }
    Obstacle::cactus(rng)
}
