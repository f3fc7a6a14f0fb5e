//! UI domain: main menu and pause overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{Game, GameState};

const PANEL_COLOR: Color = Color::srgb_u8(88, 68, 34);
const BORDER_COLOR: Color = Color::srgb_u8(94, 133, 73);
const HOVER_COLOR: Color = Color::srgb_u8(212, 210, 155);
const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Marker for the overlay root
#[derive(Component)]
pub struct MenuOverlay;

/// Marker for the title line, which reads differently when paused
#[derive(Component)]
pub struct MenuTitle;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Quit,
}

impl MenuButton {
    fn label(self) -> &'static str {
        match self {
            MenuButton::Play => "PLAY",
            MenuButton::Quit => "QUIT",
        }
    }
}

/// Overlay title for a state, or `None` when the overlay should be hidden.
pub fn overlay_title(state: GameState) -> Option<&'static str> {
    match state {
        GameState::MainMenu => Some("TILEHOP"),
        GameState::Paused => Some("PAUSED"),
        _ => None,
    }
}

pub(crate) fn spawn_menu(mut commands: Commands) {
    commands
        .spawn((
            MenuOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            ZIndex(100),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                MenuTitle,
                Text::new("TILEHOP"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(HOVER_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            for button in [MenuButton::Play, MenuButton::Quit] {
                parent
                    .spawn((
                        button,
                        Button,
                        Node {
                            width: Val::Px(200.0),
                            padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                            margin: UiRect::bottom(Val::Px(12.0)),
                            border: UiRect::all(Val::Px(2.0)),
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        BackgroundColor(PANEL_COLOR),
                        BorderColor::all(BORDER_COLOR),
                    ))
                    .with_child((
                        Text::new(button.label()),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
            }

            parent.spawn((
                Text::new("[Enter] play  [Esc] pause  [R] reset"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn sync_menu(
    game: Res<Game>,
    mut overlay: Query<&mut Visibility, With<MenuOverlay>>,
    mut title: Query<&mut Text, With<MenuTitle>>,
) {
    let shown = overlay_title(game.state);

    for mut visibility in &mut overlay {
        let wanted = if shown.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }

    if let Some(label) = shown {
        for mut text in &mut title {
            if text.0 != label {
                text.0 = label.to_string();
            }
        }
    }
}

pub(crate) fn handle_menu_buttons(
    mut buttons: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut game: ResMut<Game>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, button, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => match button {
                MenuButton::Play => game.set_state(GameState::Playing),
                MenuButton::Quit => {
                    info!("Quit requested from menu");
                    exit.write(AppExit::Success);
                }
            },
            Interaction::Hovered => background.0 = HOVER_COLOR,
            Interaction::None => background.0 = PANEL_COLOR,
        }
    }
}
