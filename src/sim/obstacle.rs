//! Obstacle entities and their vertical-motion policies
//!
//! Five kinds share one horizontal rule (scroll left at world speed) and
//! differ only in vertical behavior. Per-variant motion state rides in the
//! `ObstacleKind` payload, so a single dispatch in [`Obstacle::advance`]
//! covers every policy.

use rand::Rng;

use super::rect::Rect;
use crate::consts::*;

/// Obstacle variant, with per-variant motion state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Ground cactus, fixed at ground level
    Cactus,
    /// Cactus that rises to a hover height once it scrolls past a trigger column
    LevitatingCactus {
        launching: bool,
        levitating: bool,
        /// Launch fires once the center scrolls left of this column
        trigger_x: f32,
        /// Center height to rise to, then hold
        target_y: f32,
        rise_speed: f32,
    },
    /// Flyer at one of two fixed heights, no vertical motion
    Pterodactyl,
    /// Flyer that descends toward jump height once past a trigger column
    SwoopingPterodactyl {
        swooping: bool,
        /// Bottom edge descends to this height, never past it
        target_y: f32,
        swoop_speed: f32,
        trigger_x: f32,
    },
    /// Spawns near the top and dives straight down until it grounds
    KamikazePterodactyl { dive_speed: f32, grounded: bool },
}

/// A single moving obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Scoring credit already awarded for scrolling behind the player
    pub passed: bool,
}

impl Obstacle {
    fn new(rect: Rect, kind: ObstacleKind) -> Self {
        Self {
            rect,
            kind,
            passed: false,
        }
    }

    pub fn cactus(rng: &mut impl Rng) -> Self {
        let cx = WIDTH + rng.random_range(50.0..=150.0);
        Self::new(
            Rect::from_midbottom(cx, GROUND_Y, CACTUS_SIZE),
            ObstacleKind::Cactus,
        )
    }

    pub fn levitating_cactus(rng: &mut impl Rng) -> Self {
        let cx = WIDTH + rng.random_range(50.0..=150.0);
        let kind = ObstacleKind::LevitatingCactus {
            launching: false,
            levitating: false,
            trigger_x: WIDTH * rng.random_range(0.4..=0.75),
            target_y: rng.random_range(HEIGHT / 2.0 - 10.0..=HEIGHT / 2.0 + 30.0),
            rise_speed: rng.random_range(4.0..=6.5),
        };
        Self::new(Rect::from_midbottom(cx, GROUND_Y, CACTUS_SIZE), kind)
    }

    pub fn pterodactyl(rng: &mut impl Rng) -> Self {
        let cx = WIDTH + rng.random_range(50.0..=150.0);
        let height = PTERODACTYL_HEIGHTS[rng.random_range(0..PTERODACTYL_HEIGHTS.len())];
        Self::new(
            Rect::from_midbottom(cx, height, PTERODACTYL_SIZE),
            ObstacleKind::Pterodactyl,
        )
    }

    pub fn swooping_pterodactyl(rng: &mut impl Rng) -> Self {
        let cx = WIDTH + rng.random_range(50.0..=150.0);
        let height = PTERODACTYL_HEIGHTS[rng.random_range(0..PTERODACTYL_HEIGHTS.len())];
        let kind = ObstacleKind::SwoopingPterodactyl {
            swooping: false,
            target_y: GROUND_Y - DINO_SIZE.1 - rng.random_range(5.0..=20.0),
            swoop_speed: rng.random_range(1.8..=3.2),
            trigger_x: WIDTH * rng.random_range(0.55..=0.75),
        };
        Self::new(Rect::from_midbottom(cx, height, PTERODACTYL_SIZE), kind)
    }

    pub fn kamikaze(rng: &mut impl Rng) -> Self {
        let cx = WIDTH + rng.random_range(70.0..=200.0);
        let top = rng.random_range(5.0..=25.0);
        let kind = ObstacleKind::KamikazePterodactyl {
            dive_speed: rng.random_range(5.0..=7.5),
            grounded: false,
        };
        Self::new(Rect::from_midtop(cx, top, PTERODACTYL_SIZE), kind)
    }

    /// Advance one frame at the current world speed.
    pub fn advance(&mut self, speed: f32) {
        self.rect.x -= speed;

        match &mut self.kind {
            ObstacleKind::Cactus | ObstacleKind::Pterodactyl => {}

            ObstacleKind::LevitatingCactus {
                launching,
                levitating,
                trigger_x,
                target_y,
                rise_speed,
            } => {
                if !*levitating {
                    if *launching {
                        self.rect.y -= *rise_speed;
                        if self.rect.centery() <= *target_y {
                            self.rect.set_centery(*target_y);
                            *launching = false;
                            *levitating = true;
                        }
                    } else if self.rect.centerx() < *trigger_x {
                        *launching = true;
                    }
                }
            }

            ObstacleKind::SwoopingPterodactyl {
                swooping,
                target_y,
                swoop_speed,
                trigger_x,
            } => {
                if !*swooping && self.rect.centerx() < *trigger_x {
                    *swooping = true;
                }
                if *swooping && self.rect.bottom() < *target_y {
                    self.rect.y += *swoop_speed;
                    if self.rect.bottom() > *target_y {
                        self.rect.set_bottom(*target_y);
                    }
                }
            }

            ObstacleKind::KamikazePterodactyl {
                dive_speed,
                grounded,
            } => {
                if !*grounded {
                    self.rect.y += *dive_speed;
                    if self.rect.bottom() >= GROUND_Y {
                        self.rect.set_bottom(GROUND_Y);
                        *grounded = true;
                    }
                }
            }
        }
    }

    /// True once the obstacle should leave the active set: fully past the
    /// left edge, or sunk below the bottom boundary.
    pub fn offscreen(&self) -> bool {
        self.rect.right() <= 0.0 || self.rect.top() >= HEIGHT + CULL_MARGIN
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            ObstacleKind::Cactus => "cactus",
            ObstacleKind::LevitatingCactus { .. } => "levitating cactus",
            ObstacleKind::Pterodactyl => "pterodactyl",
            ObstacleKind::SwoopingPterodactyl { .. } => "swooping pterodactyl",
            ObstacleKind::KamikazePterodactyl { .. } => "kamikaze pterodactyl",
        }
    }
}
