//! Debug domain: state for the developer overlay.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (frame counters, position, inspector) is shown
    pub show_info: bool,
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count the status message down, dropping it once expired.
    pub fn tick_message(&mut self, delta: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}
