//! Core domain: startup loading, state keys, and the per-frame driver.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::resources::LaunchOptions;
use crate::core::{Game, GameState};
use crate::movement::ActionInput;
use crate::render::DrawList;

/// Arguments are parsed before logging exists, so their warnings are replayed here.
pub(crate) fn report_launch_warnings(options: Res<LaunchOptions>) {
    for warning in &options.warnings {
        warn!("{}", warning);
    }
}

pub(crate) fn load_game(
    mut commands: Commands,
    options: Res<LaunchOptions>,
    mut exit: MessageWriter<AppExit>,
) {
    match Game::from_files(&options.map_path, &options.config_path, options.debug) {
        Ok(game) => {
            info!(
                "Game ready: {} levels, starting at {}",
                game.world.levels.len(),
                game.current_level().name
            );
            commands.insert_resource(game);
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}

/// Escape toggles pause; Enter or Start resumes from the menu or from pause.
pub(crate) fn handle_state_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut game: ResMut<Game>,
) {
    let start = gamepads
        .iter()
        .any(|g| g.just_pressed(GamepadButton::Start));
    let confirm = keyboard.just_pressed(KeyCode::Enter) || start;
    let toggle = keyboard.just_pressed(KeyCode::Escape);

    let state = game.state;
    match state {
        GameState::Playing if toggle || start => game.set_state(GameState::Paused),
        GameState::Paused | GameState::MainMenu if confirm => game.set_state(GameState::Playing),
        GameState::Paused if toggle => game.set_state(GameState::Playing),
        _ => {}
    }
}

pub(crate) fn run_frame(
    time: Res<Time>,
    input: Res<ActionInput>,
    mut game: ResMut<Game>,
    mut draw_list: ResMut<DrawList>,
) {
    let area = game.config.play_area;
    draw_list.clear();
    draw_list.viewport = Vec2::new(area.width, area.height);

    game.frame(&input, time.delta_secs(), &mut *draw_list);
}
