//! Movement domain: the player character, its collision response, and input sampling.

mod character;
mod collisions;
mod input;
mod interaction;
mod resources;

#[cfg(test)]
mod tests;

pub use character::{Character, ExitFlags, Facing, LastAction, SpriteAnimation};
pub use resources::{Action, ActionInput, InputDevice, MAX_GAMEPADS, MovementTuning};

pub(crate) use input::read_input;

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionInput>()
            .add_systems(PreUpdate, read_input.after(bevy::input::InputSystems));
    }
}
