//! UI domain: menu and pause overlays drawn over the scene.

mod menu;

#[cfg(test)]
mod tests;

pub use menu::{MenuButton, overlay_title};

use bevy::prelude::*;

use crate::core::game_ready;
use crate::ui::menu::{handle_menu_buttons, spawn_menu, sync_menu};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_menu).add_systems(
            Update,
            (handle_menu_buttons, sync_menu).chain().run_if(game_ready),
        );
    }
}
