//! Static ground tiles.

use bevy::math::Vec2;

use crate::content::ldtk::LdtkGridTile;
use crate::geometry::Aabb;

/// Edge length of a map cell in pixels.
pub const TILE_SIZE: f32 = 8.0;

/// A ground cell: where it sits, which tileset cell draws it, and the box it blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub position: Vec2,
    pub source: Aabb,
    pub hitbox: Aabb,
}

impl Tile {
    pub fn new(position: Vec2, source_offset: Vec2) -> Self {
        let size = Vec2::splat(TILE_SIZE);
        Self {
            position,
            source: Aabb::from_position_size(source_offset, size),
            hitbox: Aabb::from_position_size(position, size),
        }
    }
}

impl From<&LdtkGridTile> for Tile {
    fn from(raw: &LdtkGridTile) -> Self {
        Tile::new(Vec2::from(raw.px), Vec2::from(raw.src))
    }
}
