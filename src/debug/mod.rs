//! Debug domain: developer hotkeys and an on-screen state readout.
//!
//! Features:
//! - Toggle hitbox, interact box, and collision outlines
//! - Toggle verbose per-frame state logging
//! - Info overlay with frame counters, position, and frame inspector status

mod state;
mod systems;


pub use state::DebugState;
pub use systems::{DebugInfoOverlay, info_text};

use bevy::prelude::*;

use crate::core::game_ready;
use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain()
                .run_if(game_ready),
        );
    }
}
