//! Interactive level props: keys, doors, spikes, and decoration.

use bevy::math::Vec2;

use crate::content::ldtk::LdtkEntity;
use crate::geometry::Aabb;
use crate::level::TILE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Key,
    Door,
    Spike,
    Grass,
    Generic,
}

impl PropKind {
    /// Map an entity identifier from the map source to a kind. Unknown identifiers are generic.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.to_ascii_lowercase().as_str() {
            "key" => PropKind::Key,
            "door" => PropKind::Door,
            "spike" | "spikes" => PropKind::Spike,
            "grass" => PropKind::Grass,
            _ => PropKind::Generic,
        }
    }

    /// Offset and size of the hitbox relative to the prop position. Generic props use the
    /// size authored in the map.
    fn hitbox_shape(self, authored: Vec2) -> (Vec2, Vec2) {
        match self {
            PropKind::Key => (Vec2::ZERO, Vec2::splat(TILE_SIZE)),
            PropKind::Door => (Vec2::ZERO, Vec2::new(TILE_SIZE, TILE_SIZE * 2.0)),
            PropKind::Spike => (
                Vec2::new(0.0, TILE_SIZE / 2.0),
                Vec2::new(TILE_SIZE, TILE_SIZE / 2.0),
            ),
            PropKind::Grass => (Vec2::ZERO, Vec2::splat(TILE_SIZE)),
            PropKind::Generic => {
                let size = if authored.x > 0.0 && authored.y > 0.0 {
                    authored
                } else {
                    Vec2::splat(TILE_SIZE)
                };
                (Vec2::ZERO, size)
            }
        }
    }

    /// (walkable, pickable) before any per-entity override.
    fn default_flags(self) -> (bool, bool) {
        match self {
            PropKind::Key => (true, true),
            PropKind::Door => (false, false),
            PropKind::Spike => (true, false),
            PropKind::Grass => (true, false),
            PropKind::Generic => (false, false),
        }
    }

    /// Top-left of the sprite cell in the props sheet.
    pub fn sprite_offset(self, is_open: bool) -> Vec2 {
        match (self, is_open) {
            (PropKind::Key, _) => Vec2::new(0.0, 0.0),
            (PropKind::Door, false) => Vec2::new(8.0, 0.0),
            (PropKind::Door, true) => Vec2::new(16.0, 0.0),
            (PropKind::Spike, _) => Vec2::new(24.0, 0.0),
            (PropKind::Grass, _) => Vec2::new(32.0, 0.0),
            (PropKind::Generic, _) => Vec2::new(40.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Vec2,
    pub hitbox: Aabb,
    hitbox_offset: Vec2,
    pub walkable: bool,
    pub pickable: bool,
    pub is_open: bool,
}

impl Prop {
    pub fn new(kind: PropKind, position: Vec2) -> Self {
        Self::with_size(kind, position, Vec2::ZERO)
    }

    fn with_size(kind: PropKind, position: Vec2, authored: Vec2) -> Self {
        let (offset, size) = kind.hitbox_shape(authored);
        let (walkable, pickable) = kind.default_flags();
        Self {
            kind,
            position,
            hitbox: Aabb::from_position_size(position + offset, size),
            hitbox_offset: offset,
            walkable,
            pickable,
            is_open: false,
        }
    }

    /// Build a prop from an entity record. Custom fields `walkable` and `pickable` override the
    /// kind defaults only when they hold a boolean.
    pub fn from_ldtk(entity: &LdtkEntity) -> Self {
        let kind = PropKind::from_identifier(&entity.identifier);
        let mut prop = Self::with_size(
            kind,
            Vec2::from(entity.px),
            Vec2::new(entity.width, entity.height),
        );

        if let Some(walkable) = entity.field("walkable").and_then(|v| v.as_bool()) {
            prop.walkable = walkable;
        }
        if let Some(pickable) = entity.field("pickable").and_then(|v| v.as_bool()) {
            prop.pickable = pickable;
        }

        prop
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.hitbox = self.hitbox.moved_to(position + self.hitbox_offset);
    }

    /// Open a closed door and make it walkable. Returns false for anything else.
    pub fn open(&mut self) -> bool {
        if self.kind != PropKind::Door || self.is_open {
            return false;
        }

        self.is_open = true;
        self.walkable = true;
        true
    }

    pub fn sprite_source(&self) -> Aabb {
        Aabb::from_position_size(
            self.kind.sprite_offset(self.is_open),
            Vec2::new(TILE_SIZE, self.hitbox.height.max(TILE_SIZE)),
        )
    }
}
