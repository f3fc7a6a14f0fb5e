//! Movement domain: sampling keyboard and gamepads into logical actions.

use bevy::prelude::*;

use crate::movement::{Action, ActionInput, InputDevice, MAX_GAMEPADS};

/// Analog stick deflection that counts as a held direction.
const STICK_THRESHOLD: f32 = 0.5;

fn keys(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::KeyA, KeyCode::ArrowLeft],
        Action::MoveRight => &[KeyCode::KeyD, KeyCode::ArrowRight],
        Action::Jump => &[KeyCode::Space, KeyCode::KeyK],
        Action::Interact => &[KeyCode::KeyE, KeyCode::KeyJ],
        Action::ResetDebug => &[KeyCode::KeyR],
        Action::ToggleInspector => &[KeyCode::F2],
        Action::SingleStep => &[KeyCode::F3],
    }
}

fn buttons(action: Action) -> &'static [GamepadButton] {
    match action {
        Action::MoveLeft => &[GamepadButton::DPadLeft],
        Action::MoveRight => &[GamepadButton::DPadRight],
        Action::Jump => &[GamepadButton::South],
        Action::Interact => &[GamepadButton::West],
        Action::ResetDebug => &[GamepadButton::Select],
        Action::ToggleInspector => &[],
        Action::SingleStep => &[],
    }
}

fn stick_held(action: Action, gamepad: &Gamepad) -> bool {
    let x = gamepad.left_stick().x;
    match action {
        Action::MoveLeft => x < -STICK_THRESHOLD,
        Action::MoveRight => x > STICK_THRESHOLD,
        _ => false,
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<ActionInput>,
) {
    input.reset();
    input.gamepads_connected = gamepads.iter().count().min(MAX_GAMEPADS);

    for action in Action::ALL {
        let keys = keys(action);
        let mut held = keyboard.any_pressed(keys.iter().copied());
        let mut pressed = keyboard.any_just_pressed(keys.iter().copied());
        let mut released = keyboard.any_just_released(keys.iter().copied());

        if held || pressed {
            input.device = Some(InputDevice::Keyboard);
        }

        for (index, gamepad) in gamepads.iter().take(MAX_GAMEPADS).enumerate() {
            let buttons = buttons(action);
            let pad_held =
                buttons.iter().any(|b| gamepad.pressed(*b)) || stick_held(action, gamepad);
            let pad_pressed = buttons.iter().any(|b| gamepad.just_pressed(*b));

            if (pad_held || pad_pressed) && input.device.is_none() {
                input.device = Some(InputDevice::Gamepad(index));
            }

            held |= pad_held;
            pressed |= pad_pressed;
            released |= buttons.iter().any(|b| gamepad.just_released(*b));
        }

        if pressed {
            input.press(action);
        } else if held {
            input.hold(action);
        }
        if released && !held {
            input.release(action);
        }
    }
}
