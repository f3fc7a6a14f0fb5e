//! Level domain: tiles, props, particles, and the level/world model they live in.

mod particle;
mod prop;
mod tile;
mod world;


pub use particle::{Particle, ParticleTuning};
pub use prop::{Prop, PropKind};
pub use tile::{TILE_SIZE, Tile};
pub use world::{
    Direction, ENTITIES_LAYER, GROUND_LAYER, Layer, Level, Neighbour, World, asset_identifier,
};
