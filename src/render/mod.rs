//! Render domain: draw sink, scene renderer, and the Bevy presenter behind them.

mod present;
mod renderer;
mod surface;


pub use present::{DrawnSprite, PIXEL_SCALE, Textures, fallback_color, world_center};
pub use renderer::{
    PLAYER_TEXTURE, PROPS_TEXTURE, Renderer, TILESET_TEXTURE, VFX_TEXTURE, draw_overlay,
};
pub use surface::{DrawCommand, DrawList, RenderSurface};

use bevy::prelude::*;

use crate::render::present::{load_textures, present_draw_list, setup_camera};

pub struct PresentPlugin;

impl Plugin for PresentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .init_resource::<Textures>()
            .add_systems(Startup, (setup_camera, load_textures))
            .add_systems(PostUpdate, present_draw_list);
    }
}
