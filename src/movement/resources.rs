//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    /// Vertical velocity set by a jump (negative is up).
    pub jump_impulse: f32,
    pub hitbox_width: f32,
    pub hitbox_height: f32,
    /// Extra reach on every side of the hitbox for pickups, doors, and hazards.
    pub interact_margin: f32,
    /// Horizontal inset of the two foot probes from the hitbox corners.
    pub foot_probe_inset: f32,
    /// Maximum number of remembered positions for the inventory trail.
    pub path_capacity: usize,
    /// Path entries between consecutive trailing inventory items.
    pub trail_spacing: usize,
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Animation frames advanced per second while running and while idle.
    pub run_frames_speed: u32,
    pub idle_frames_speed: u32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 900.0,
            terminal_velocity: 600.0,
            max_speed: 120.0,
            accel: 700.0,
            decel: 1100.0,
            jump_impulse: -300.0,
            hitbox_width: 10.0,
            hitbox_height: 17.0,
            interact_margin: 4.0,
            foot_probe_inset: 2.0,
            path_capacity: 100,
            trail_spacing: 12,
            sprite_width: 16.0,
            sprite_height: 17.0,
            run_frames_speed: 6,
            idle_frames_speed: 2,
        }
    }
}

impl MovementTuning {
    pub fn hitbox_size(&self) -> Vec2 {
        Vec2::new(self.hitbox_width, self.hitbox_height)
    }

    /// Peak height of a jump from rest: h = v² / (2g)
    #[cfg(test)]
    pub fn jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }
}

/// Logical actions the simulation understands, independent of device bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Interact,
    ResetDebug,
    ToggleInspector,
    SingleStep,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Interact,
        Action::ResetDebug,
        Action::ToggleInspector,
        Action::SingleStep,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Device that produced the most recent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDevice {
    #[default]
    Keyboard,
    Gamepad(usize),
}

/// Most gamepads tracked at once.
pub const MAX_GAMEPADS: usize = 4;

/// Per-frame snapshot of held / just pressed / just released actions.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionInput {
    held: [bool; Action::ALL.len()],
    pressed: [bool; Action::ALL.len()],
    released: [bool; Action::ALL.len()],
    /// Connected gamepads, capped at `MAX_GAMEPADS`.
    pub gamepads_connected: usize,
    /// Device that produced input this frame, if any did.
    pub device: Option<InputDevice>,
}

impl ActionInput {
    pub fn held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.released[action.index()]
    }

    /// Mark an action as pressed this frame (and therefore held).
    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
        self.pressed[action.index()] = true;
    }

    pub fn hold(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
        self.released[action.index()] = true;
    }

    /// Forget everything sampled last frame.
    pub fn reset(&mut self) {
        self.held = Default::default();
        self.pressed = Default::default();
        self.released = Default::default();
        self.device = None;
    }

    #[cfg(test)]
    pub fn with_held(mut self, action: Action) -> Self {
        self.hold(action);
        self
    }

    #[cfg(test)]
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.press(action);
        self
    }

    #[cfg(test)]
    pub fn any_held(&self) -> bool {
        self.held.iter().any(|h| *h)
    }
}
