mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod geometry;
mod level;
mod movement;
mod render;
mod ui;
mod vfx;

use bevy::prelude::*;

use crate::core::LaunchOptions;
use crate::render::PIXEL_SCALE;

fn main() {
    let options = LaunchOptions::from_args(std::env::args().skip(1));
    let width = (320.0 * PIXEL_SCALE) as u32;
    let height = (180.0 * PIXEL_SCALE) as u32;

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "tilehop".to_string(),
                    resolution: (width, height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(ClearColor(Color::BLACK))
    .insert_resource(options)
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        render::PresentPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
