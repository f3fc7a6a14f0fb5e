//! Render domain: presenting recorded draw commands with Bevy sprites and gizmos.

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::geometry::Aabb;
use crate::render::renderer::{PLAYER_TEXTURE, PROPS_TEXTURE, TILESET_TEXTURE, VFX_TEXTURE};
use crate::render::{DrawCommand, DrawList};

/// Camera zoom from virtual pixels to window pixels.
pub const PIXEL_SCALE: f32 = 3.0;

const ASSET_ROOT: &str = "assets";

/// Texture identifiers and the asset files they come from.
const TEXTURE_FILES: &[(&str, &str)] = &[
    (TILESET_TEXTURE, "sprites/tileset-ground.png"),
    (PLAYER_TEXTURE, "sprites/player.png"),
    (PROPS_TEXTURE, "sprites/props.png"),
    (VFX_TEXTURE, "sprites/vfx.png"),
    ("background-daylight-sky", "sprites/background-daylight-sky.png"),
    ("background-underground", "sprites/background-underground.png"),
];

/// Loaded textures by identifier. Identifiers without a file on disk are drawn as flat colour.
#[derive(Resource, Debug, Default)]
pub struct Textures {
    handles: HashMap<String, Handle<Image>>,
}

impl Textures {
    pub fn get(&self, id: &str) -> Option<&Handle<Image>> {
        self.handles.get(id)
    }
}

/// Marker for pooled sprite entities reused every frame.
#[derive(Component, Debug)]
pub struct DrawnSprite;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXEL_SCALE)),
    ));
}

pub(crate) fn load_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut textures = Textures::default();

    for (id, file) in TEXTURE_FILES {
        if !Path::new(ASSET_ROOT).join(file).exists() {
            warn!("Texture {} not found at {}, drawing flat colour", id, file);
            continue;
        }
        textures
            .handles
            .insert(id.to_string(), asset_server.load(*file));
    }

    info!("Loaded {} textures", textures.handles.len());
    commands.insert_resource(textures);
}

/// Stand-in colour for a texture that is not available.
pub fn fallback_color(texture: &str) -> Color {
    match texture {
        id if id.starts_with("tileset") => Color::srgb(0.35, 0.27, 0.13),
        PLAYER_TEXTURE => Color::srgb(0.83, 0.82, 0.61),
        PROPS_TEXTURE => Color::srgb(0.37, 0.52, 0.29),
        VFX_TEXTURE => Color::srgba(0.9, 0.9, 0.9, 0.7),
        id if id.contains("underground") => Color::srgb(0.12, 0.09, 0.06),
        _ => Color::srgb(0.45, 0.68, 0.85),
    }
}

/// Centre of a virtual-pixel rectangle in world space (origin at screen centre, y up).
pub fn world_center(rect: &Aabb, viewport: Vec2) -> Vec2 {
    Vec2::new(
        rect.x - viewport.x / 2.0 + rect.width / 2.0,
        viewport.y / 2.0 - rect.y - rect.height / 2.0,
    )
}

fn sprite_for(
    command: &DrawCommand,
    textures: &Textures,
    viewport: Vec2,
) -> Option<(Sprite, Aabb)> {
    match command {
        DrawCommand::Background { texture } => {
            let rect = Aabb::from_position_size(Vec2::ZERO, viewport);
            let sprite = match textures.get(texture) {
                Some(image) => Sprite {
                    image: image.clone(),
                    custom_size: Some(viewport),
                    ..default()
                },
                None => Sprite::from_color(fallback_color(texture), viewport),
            };
            Some((sprite, rect))
        }
        DrawCommand::Sprite {
            texture,
            source,
            position,
            flip_x,
        } => {
            let rect = Aabb::from_position_size(*position, source.size());
            let sprite = match textures.get(texture) {
                Some(image) => Sprite {
                    image: image.clone(),
                    rect: Some(Rect::new(source.x, source.y, source.right(), source.bottom())),
                    flip_x: *flip_x,
                    ..default()
                },
                None => Sprite::from_color(fallback_color(texture), source.size()),
            };
            Some((sprite, rect))
        }
        DrawCommand::Rect { rect, color } => {
            Some((Sprite::from_color(*color, rect.size()), *rect))
        }
        DrawCommand::Point { position, color } => Some((
            Sprite::from_color(*color, Vec2::ONE),
            Aabb::from_position_size(*position, Vec2::ONE),
        )),
        DrawCommand::Outline { .. } => None,
    }
}

/// Map the frame's draw list onto pooled sprites, in painter's order, and outlines onto gizmos.
pub(crate) fn present_draw_list(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    textures: Res<Textures>,
    mut pool: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<DrawnSprite>>,
    mut gizmos: Gizmos,
) {
    let viewport = draw_list.viewport;
    let mut slots = pool.iter_mut();

    for (index, command) in draw_list.commands.iter().enumerate() {
        if let DrawCommand::Outline { rect, color } = command {
            let center = world_center(rect, viewport);
            gizmos.rect_2d(Isometry2d::from_translation(center), rect.size(), *color);
            continue;
        }

        let Some((sprite, rect)) = sprite_for(command, &textures, viewport) else {
            continue;
        };
        let translation = world_center(&rect, viewport).extend(index as f32 * 0.01);

        match slots.next() {
            Some((mut pooled, mut transform, mut visibility)) => {
                *pooled = sprite;
                transform.translation = translation;
                *visibility = Visibility::Inherited;
            }
            None => {
                commands.spawn((DrawnSprite, sprite, Transform::from_translation(translation)));
            }
        }
    }

    for (_, _, mut visibility) in slots {
        *visibility = Visibility::Hidden;
    }
}
