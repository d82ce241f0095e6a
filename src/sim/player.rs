//! Player physics and pose state
//!
//! Gravity-integrated vertical motion with a hard ground clamp. The hitbox
//! swaps size when the pose changes, keeping the bottom edge and horizontal
//! center fixed so the player never sinks or slides on a pose change.

use super::rect::Rect;
use crate::consts::*;

/// Player posture; picks the hitbox size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Standing,
    Ducking,
}

/// Which input surface initiated the active duck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuckSource {
    /// Key held down
    Hold,
    /// Touch press held until release
    TapHold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vertical_velocity: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    pub on_ground: bool,
    /// Source that started the active duck. A release from any other source
    /// must not clear the duck.
    pub duck_source: Option<DuckSource>,
    pose: Pose,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Standing at the fixed column, feet on the ground.
    pub fn new() -> Self {
        Self {
            rect: Rect::from_midbottom(PLAYER_X, GROUND_Y, DINO_SIZE),
            vertical_velocity: 0.0,
            is_jumping: false,
            is_ducking: false,
            on_ground: true,
            duck_source: None,
            pose: Pose::Standing,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Jump if permitted: grounded and not ducking. Disallowed requests are
    /// ignored.
    pub fn press_jump(&mut self, impulse: f32) {
        if self.on_ground && !self.is_ducking {
            self.vertical_velocity = impulse;
            self.is_jumping = true;
            self.on_ground = false;
        }
    }

    /// Start (or re-tag) a duck. Only permitted on the ground; a press while
    /// already ducking hands the duck to the newest source.
    pub fn press_duck(&mut self, source: DuckSource) {
        if self.on_ground {
            self.is_ducking = true;
            self.duck_source = Some(source);
        }
    }

    /// End the duck, but only when the release comes from the source that
    /// owns it.
    pub fn release_duck(&mut self, source: DuckSource) {
        if self.duck_source == Some(source) {
            self.is_ducking = false;
            self.duck_source = None;
        }
    }

    /// One frame of physics: gravity, ground clamp, then pose resolution.
    pub fn step(&mut self, gravity: f32) {
        self.vertical_velocity += gravity;
        self.rect.y += self.vertical_velocity;

        if self.rect.bottom() >= GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
            self.vertical_velocity = 0.0;
            self.is_jumping = false;
            self.on_ground = true;
        }

        self.resolve_pose();
    }

    /// Ducking only renders while grounded; otherwise the pose is standing.
    fn resolve_pose(&mut self) {
        let target = if self.is_ducking && self.on_ground {
            Pose::Ducking
        } else {
            Pose::Standing
        };
        if target != self.pose {
            self.pose = target;
            let size = match target {
                Pose::Standing => DINO_SIZE,
                Pose::Ducking => DINO_DUCK_SIZE,
            };
            self.rect.resize_midbottom(size);
            if self.rect.bottom() > GROUND_Y {
                self.rect.set_bottom(GROUND_Y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY: f32 = 0.8;
    const JUMP: f32 = -15.0;

    #[test]
    fn jump_arcs_and_lands_back_on_ground() {
        let mut player = Player::new();
        player.press_jump(JUMP);
        assert!(player.is_jumping);
        assert!(!player.on_ground);

        let mut frames = 0;
        while !player.on_ground {
            player.step(GRAVITY);
            assert!(player.rect.bottom() <= GROUND_Y);
            frames += 1;
            assert!(frames < 120, "jump must land");
        }
        assert!(!player.is_jumping);
        assert_eq!(player.vertical_velocity, 0.0);
        assert_eq!(player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn no_jump_while_ducking() {
        let mut player = Player::new();
        player.press_duck(DuckSource::Hold);
        player.press_jump(JUMP);
        assert!(!player.is_jumping);
        assert!(player.on_ground);
    }

    #[test]
    fn no_duck_while_airborne() {
        let mut player = Player::new();
        player.press_jump(JUMP);
        player.step(GRAVITY);
        player.press_duck(DuckSource::Hold);
        assert!(!player.is_ducking);
    }

    #[test]
    fn duck_resizes_hitbox_preserving_midbottom() {
        let mut player = Player::new();
        player.press_duck(DuckSource::Hold);
        player.step(GRAVITY);
        assert_eq!(player.pose(), Pose::Ducking);
        assert_eq!(player.rect.w, DINO_DUCK_SIZE.0);
        assert_eq!(player.rect.h, DINO_DUCK_SIZE.1);
        assert_eq!(player.rect.centerx(), PLAYER_X);
        assert_eq!(player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn pose_round_trip_restores_exact_hitbox() {
        let mut player = Player::new();
        let standing_rect = player.rect;

        for _ in 0..3 {
            player.press_duck(DuckSource::Hold);
            player.step(GRAVITY);
            player.release_duck(DuckSource::Hold);
            player.step(GRAVITY);
        }

        assert_eq!(player.pose(), Pose::Standing);
        assert_eq!(player.rect, standing_rect);
    }

    #[test]
    fn cross_source_release_is_ignored() {
        let mut player = Player::new();
        player.press_duck(DuckSource::TapHold);
        player.release_duck(DuckSource::Hold);
        assert!(player.is_ducking, "keyboard release must not end a touch duck");

        player.release_duck(DuckSource::TapHold);
        assert!(!player.is_ducking);
        assert_eq!(player.duck_source, None);
    }

    #[test]
    fn newest_duck_press_takes_over_the_release() {
        let mut player = Player::new();
        player.press_duck(DuckSource::TapHold);
        player.press_duck(DuckSource::Hold);

        // The touch release no longer owns the duck
        player.release_duck(DuckSource::TapHold);
        assert!(player.is_ducking);

        player.release_duck(DuckSource::Hold);
        assert!(!player.is_ducking);
    }

    #[test]
    fn airborne_duck_request_does_not_latch() {
        let mut player = Player::new();
        player.press_jump(JUMP);
        player.press_duck(DuckSource::Hold);
        while !player.on_ground {
            player.step(GRAVITY);
        }
        player.step(GRAVITY);
        // The mid-air press was ignored outright, not deferred to landing
        assert_eq!(player.pose(), Pose::Standing);
    }
}
