//! Data-driven game balance
//!
//! Every difficulty knob lives in one serde-friendly struct. `Default` is the
//! shipped balance; a shell can override any subset of fields from JSON.

use serde::{Deserialize, Serialize};

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied to the player every frame (px/frame²)
    pub gravity: f32,
    /// Vertical velocity set when a jump starts (negative is up)
    pub jump_impulse: f32,

    /// World scroll speed at score 0 (px/frame)
    pub initial_speed: f32,
    /// Score between speed steps
    pub speed_step_score: u32,
    /// Speed added per step
    pub speed_step: f32,

    /// Frames between spawn attempts at score 0
    pub initial_spawn_delay: u32,
    /// Cadence floor (frames)
    pub min_spawn_delay: u32,
    /// Score divisor feeding the cadence formula
    pub spawn_delay_step_score: u32,
    /// Base of the minimum-gap formula (px)
    pub min_gap_base: f32,
    /// Gap added per unit of world speed
    pub min_gap_per_speed: f32,

    /// Score gate for the pterodactyl family roll
    pub pterodactyl_min_score: u32,
    pub pterodactyl_chance: f64,
    /// Within the family: chance the flyer swoops
    pub swoop_chance: f64,
    /// Score gate for the levitating cactus roll
    pub levitating_min_score: u32,
    pub levitating_chance: f64,
    /// Score gate for the kamikaze roll (checked before levitating)
    pub kamikaze_min_score: u32,
    pub kamikaze_chance: f64,

    /// Score between light/dark theme flips
    pub theme_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_impulse: -15.0,

            initial_speed: 5.0,
            speed_step_score: 500,
            speed_step: 0.5,

            initial_spawn_delay: 120,
            min_spawn_delay: 60,
            spawn_delay_step_score: 150,
            min_gap_base: 150.0,
            min_gap_per_speed: 5.0,

            pterodactyl_min_score: 300,
            pterodactyl_chance: 0.25,
            swoop_chance: 0.4,
            levitating_min_score: 450,
            levitating_chance: 0.10,
            kamikaze_min_score: 600,
            kamikaze_chance: 0.07,

            theme_interval: 2500,
        }
    }
}

impl Tuning {
    /// Parse a tuning override. Fields left out of the JSON keep their
    /// shipped values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_shipped_balance() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.jump_impulse, -15.0);
        assert_eq!(t.initial_spawn_delay, 120);
        assert_eq!(t.min_spawn_delay, 60);
        assert_eq!(t.theme_interval, 2500);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let t = Tuning::from_json(r#"{"gravity": 1.2, "kamikaze_chance": 0.5}"#).unwrap();
        assert_eq!(t.gravity, 1.2);
        assert_eq!(t.kamikaze_chance, 0.5);
        // Untouched fields keep defaults
        assert_eq!(t.jump_impulse, -15.0);
        assert_eq!(t.initial_speed, 5.0);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let mut t = Tuning::default();
        t.initial_speed = 7.5;
        t.pterodactyl_min_score = 100;
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }
}
