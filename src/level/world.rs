//! Level and world model: layers, neighbour links, props, particles, and collision geometry.

use bevy::math::Vec2;
use bevy::prelude::{debug, info, warn};
use rand::Rng;
use std::path::Path;

use crate::content::ldtk::{LdtkEntity, LdtkGridTile, LdtkLayer, LdtkLevel, LdtkWorld};
use crate::geometry::Aabb;
use crate::level::{Particle, ParticleTuning, Prop, Tile};

pub const GROUND_LAYER: &str = "Ground";
pub const ENTITIES_LAYER: &str = "Entities";

/// Compass direction of a neighbour link or a boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Parse the single-letter form used by the map source.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "n" => Some(Direction::North),
            "e" => Some(Direction::East),
            "s" => Some(Direction::South),
            "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::East => "e",
            Direction::South => "s",
            Direction::West => "w",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbour {
    pub direction: Direction,
    pub level_id: String,
}

/// A named layer. Ground layers hold tile records, entity layers hold entity records; both are
/// kept raw until the owning level loads.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub tileset: Option<String>,
    raw_tiles: Vec<LdtkGridTile>,
    raw_entities: Vec<LdtkEntity>,
    pub tiles: Vec<Tile>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_tile(mut self, px: [f32; 2], src: [f32; 2]) -> Self {
        self.raw_tiles.push(LdtkGridTile { px, src });
        self
    }

    #[cfg(test)]
    pub fn with_entity(mut self, entity: LdtkEntity) -> Self {
        self.raw_entities.push(entity);
        self
    }

    pub fn entities(&self) -> &[LdtkEntity] {
        &self.raw_entities
    }

    fn load_layout(&mut self) {
        self.tiles = self.raw_tiles.iter().map(Tile::from).collect();
    }
}

impl From<LdtkLayer> for Layer {
    fn from(raw: LdtkLayer) -> Self {
        let mut raw_tiles = raw.grid_tiles;
        raw_tiles.extend(raw.auto_layer_tiles);

        Self {
            id: raw.iid,
            name: raw.identifier,
            tileset: raw.tileset_rel_path.map(|p| asset_identifier(&p)),
            raw_tiles,
            raw_entities: raw.entity_instances,
            tiles: Vec::new(),
        }
    }
}

/// Reduce an asset path such as `../assets/background-sky.png` to `background-sky`.
pub fn asset_identifier(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

#[derive(Debug, Clone, Default)]
pub struct Level {
    pub id: String,
    pub name: String,
    /// Pixel size authored in the map; zero when unknown.
    pub size: Vec2,
    pub layers: Vec<Layer>,
    pub neighbours: Vec<Neighbour>,
    pub props: Vec<Prop>,
    pub particles: Vec<Particle>,
    background_path: Option<String>,
    /// Bare background identifier, available while loaded.
    pub background: Option<String>,
    collisionables: Vec<Aabb>,
    loaded: bool,
}

impl Level {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    #[cfg(test)]
    pub fn with_neighbour(mut self, direction: Direction, level_id: impl Into<String>) -> Self {
        self.neighbours.push(Neighbour {
            direction,
            level_id: level_id.into(),
        });
        self
    }

    #[cfg(test)]
    pub fn with_background(mut self, path: impl Into<String>) -> Self {
        self.background_path = Some(path.into());
        self
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Area particles spawn in: the authored pixel size, or `fallback` when the map leaves it
    /// unset.
    pub fn visible_bounds(&self, fallback: Vec2) -> Vec2 {
        if self.size.x > 0.0 && self.size.y > 0.0 {
            self.size
        } else {
            fallback
        }
    }

    pub fn ground(&self) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == GROUND_LAYER)
    }

    pub fn tiles(&self) -> &[Tile] {
        self.ground().map(|l| l.tiles.as_slice()).unwrap_or(&[])
    }

    /// Materialize tiles, props, particles, and collision geometry. Loading an already loaded
    /// level does nothing.
    pub fn load<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &ParticleTuning, bounds: Vec2) {
        if self.loaded {
            return;
        }

        match self.layers.iter_mut().find(|l| l.name == GROUND_LAYER) {
            Some(ground) => ground.load_layout(),
            None => warn!("Level {} has no {} layer", self.name, GROUND_LAYER),
        }

        self.props = self
            .layers
            .iter()
            .find(|l| l.name == ENTITIES_LAYER)
            .map(|l| l.entities().iter().map(Prop::from_ldtk).collect())
            .unwrap_or_default();

        self.particles = (0..tuning.count)
            .map(|_| Particle::spawn(rng, bounds, tuning))
            .collect();

        self.background = self.background_path.as_deref().map(asset_identifier);
        self.load_collisionables();
        self.loaded = true;

        info!(
            "Loaded level {} ({} tiles, {} props, {} particles)",
            self.name,
            self.tiles().len(),
            self.props.len(),
            self.particles.len()
        );
    }

    /// Drop everything materialized by `load`. Unloading an unloaded level does nothing.
    pub fn unload(&mut self) {
        if !self.loaded {
            return;
        }

        self.particles.clear();
        self.props.clear();
        self.collisionables.clear();
        for layer in &mut self.layers {
            layer.tiles.clear();
        }
        self.loaded = false;
        debug!("Unloaded level {}", self.name);
    }

    /// Advance particles, respawning expired ones in the same slot.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        rng: &mut R,
        tuning: &ParticleTuning,
        bounds: Vec2,
    ) {
        for particle in &mut self.particles {
            let drift_sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            particle.step(delta, drift_sign, tuning);

            if particle.is_expired() {
                *particle = Particle::spawn(rng, bounds, tuning);
            }
        }
    }

    /// Rebuild the blocking geometry from ground tiles and every non-walkable prop.
    pub fn load_collisionables(&mut self) {
        let tiles = self.tiles().iter().map(|t| t.hitbox);
        let props = self.props.iter().filter(|p| !p.walkable).map(|p| p.hitbox);
        self.collisionables = tiles.chain(props).collect();
    }

    pub fn collisionables(&self) -> &[Aabb] {
        &self.collisionables
    }

    pub fn neighbour(&self, direction: Direction) -> Option<&Neighbour> {
        self.neighbours.iter().find(|n| n.direction == direction)
    }
}

impl From<LdtkLevel> for Level {
    fn from(raw: LdtkLevel) -> Self {
        let neighbours = raw
            .neighbours
            .into_iter()
            .filter_map(|n| {
                Direction::from_letter(&n.dir).map(|direction| Neighbour {
                    direction,
                    level_id: n.level_iid,
                })
            })
            .collect();

        Self {
            id: raw.iid,
            name: raw.identifier,
            size: Vec2::new(raw.px_width as f32, raw.px_height as f32),
            layers: raw
                .layer_instances
                .unwrap_or_default()
                .into_iter()
                .map(Layer::from)
                .collect(),
            neighbours,
            background_path: raw.bg_rel_path,
            ..Default::default()
        }
    }
}

/// Every level of the map, in authored order.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub id: String,
    pub levels: Vec<Level>,
}

impl World {
    pub fn new(id: impl Into<String>, levels: Vec<Level>) -> Self {
        Self {
            id: id.into(),
            levels,
        }
    }

    pub fn level_index_by_name(&self, name: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.name == name)
    }

    pub fn level_index_by_id(&self, id: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.id == id)
    }

    pub fn level_name_by_id(&self, id: &str) -> Option<&str> {
        self.levels
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.name.as_str())
    }
}

impl From<LdtkWorld> for World {
    fn from(raw: LdtkWorld) -> Self {
        Self {
            id: raw.iid,
            levels: raw.levels.into_iter().map(Level::from).collect(),
        }
    }
}
