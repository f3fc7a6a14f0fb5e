//! UI domain: tests for overlay visibility per state.

use super::overlay_title;
use crate::core::GameState;

#[test]
fn test_overlay_shown_in_menu_and_pause_only() {
    assert_eq!(overlay_title(GameState::MainMenu), Some("TILEHOP"));
    assert_eq!(overlay_title(GameState::Paused), Some("PAUSED"));
    assert_eq!(overlay_title(GameState::Playing), None);
    assert_eq!(overlay_title(GameState::TimeStop), None);
}
