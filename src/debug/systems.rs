//! Debug domain: hotkeys and the info overlay.

use bevy::prelude::*;

use crate::core::Game;
use crate::debug::state::DebugState;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// F1 toggles hitbox outlines, F4 toggles per-frame state logging, backtick toggles the overlay.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut game: ResMut<Game>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        game.renderer.debug = !game.renderer.debug;
        let msg = if game.renderer.debug {
            "Hitboxes ON"
        } else {
            "Hitboxes OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("{}", msg);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        game.verbose = !game.verbose;
        let msg = if game.verbose {
            "Verbose logging ON"
        } else {
            "Verbose logging OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("{}", msg);
    }

    if keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Text shown in the info overlay.
pub fn info_text(game: &Game, status: Option<&str>) -> String {
    let c = &game.character;
    let inspector = if game.inspector.enabled {
        "ON ([F3] step)"
    } else {
        "off"
    };

    let mut text = format!(
        "Frame: {} (sim {})\nState: {:?}\nLevel: {}\nPos: ({:.1}, {:.1})\nVel: ({:.1}, {:.1})\nGround: {}\nKeys: {}\nInspector: {}\nDevice: {:?}",
        game.absolute_frame,
        game.current_frame,
        game.state,
        game.current_level().name,
        c.position.x,
        c.position.y,
        c.velocity.x,
        c.velocity.y,
        c.on_ground,
        c.key_count(),
        inspector,
        game.device,
    );

    if let Some(status) = status {
        text.push('\n');
        text.push_str(status);
    }

    text
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game: Res<Game>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let Ok(mut text) = overlay_query.single_mut() {
        let status = debug_state.status_message.as_ref().map(|(m, _)| m.as_str());
        **text = info_text(&game, status);
    }
}
