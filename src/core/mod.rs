//! Core domain: game state machine, frame loop, and startup wiring.

mod game;
mod inspector;
mod resources;
mod state;
mod systems;


pub use game::{Game, GameInitError};
pub use inspector::FrameInspector;
pub use resources::{LaunchOptions, game_ready};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{handle_state_keys, load_game, report_launch_warnings, run_frame};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LaunchOptions>()
            .add_systems(Startup, (report_launch_warnings, load_game).chain())
            .add_systems(
                Update,
                (handle_state_keys, run_frame).chain().run_if(game_ready),
            );
    }
}
