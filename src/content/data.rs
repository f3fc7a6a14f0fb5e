//! Data definitions for the RON gameplay configuration.
//!
//! Mirrors assets/data/gameplay_defaults.ron. Every section has defaults so a partial file
//! only overrides what it names.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::ParticleTuning;
use crate::movement::MovementTuning;

/// Newest configuration layout this build understands.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Level entered at startup and whenever play (re)starts.
    pub starting_level: String,
    pub spawn_point: [f32; 2],
    /// Where the character is put back after dying or a debug reset.
    pub respawn_point: [f32; 2],
    /// Fixed RNG seed; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    pub play_area: PlayArea,
    pub movement: MovementTuning,
    pub particles: ParticleTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            starting_level: "Level_0".to_string(),
            spawn_point: [10.0, 100.0],
            respawn_point: [60.0, 60.0],
            seed: None,
            play_area: PlayArea::default(),
            movement: MovementTuning::default(),
            particles: ParticleTuning::default(),
        }
    }
}

impl GameplayDefaults {
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::from(self.spawn_point)
    }

    pub fn respawn_position(&self) -> Vec2 {
        Vec2::from(self.respawn_point)
    }
}

/// Visible play area in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 180.0,
        }
    }
}
