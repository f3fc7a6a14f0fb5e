//! Render domain: turns the simulation state into draw calls.

use bevy::prelude::*;

use crate::geometry::Aabb;
use crate::level::Level;
use crate::movement::{Character, Facing, MovementTuning};
use crate::render::RenderSurface;
use crate::vfx::VfxQueue;

pub const TILESET_TEXTURE: &str = "tileset-ground";
pub const PLAYER_TEXTURE: &str = "player";
pub const PROPS_TEXTURE: &str = "props";
pub const VFX_TEXTURE: &str = "vfx";

const PARTICLE_COLOR: Color = Color::srgba(1.0, 1.0, 0.9, 0.6);
const HITBOX_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const INTERACT_BOX_COLOR: Color = Color::srgb(1.0, 0.85, 0.0);
const COLLISIONABLE_COLOR: Color = Color::srgb(0.0, 1.0, 0.3);

/// Stateless apart from the debug switch; everything drawn comes from the arguments.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Draw hitbox, interact box, and collision outlines on top of the scene.
    pub debug: bool,
}

impl Renderer {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        level: &Level,
        character: &Character,
        vfx: &VfxQueue,
        tuning: &MovementTuning,
    ) {
        self.draw_level(surface, level);
        self.draw_inventory(surface, character, tuning);
        self.draw_character(surface, character, tuning);

        for effect in vfx.iter() {
            surface.draw_sprite(VFX_TEXTURE, effect.sprite_source(), effect.position, false);
        }

        for particle in &level.particles {
            surface.draw_point(particle.position, PARTICLE_COLOR);
        }

        if self.debug {
            self.draw_debug(surface, level, character);
        }
    }

    fn draw_level(&self, surface: &mut dyn RenderSurface, level: &Level) {
        if let Some(background) = &level.background {
            surface.draw_background(background);
        }

        let tileset = level
            .ground()
            .and_then(|l| l.tileset.as_deref())
            .unwrap_or(TILESET_TEXTURE);
        for tile in level.tiles() {
            surface.draw_sprite(tileset, tile.source, tile.position, false);
        }

        for prop in &level.props {
            surface.draw_sprite(PROPS_TEXTURE, prop.sprite_source(), prop.position, false);
        }
    }

    fn draw_inventory(
        &self,
        surface: &mut dyn RenderSurface,
        character: &Character,
        tuning: &MovementTuning,
    ) {
        for (prop, position) in character.inventory_trail(tuning.trail_spacing) {
            surface.draw_sprite(PROPS_TEXTURE, prop.sprite_source(), position, false);
        }
    }

    fn draw_character(
        &self,
        surface: &mut dyn RenderSurface,
        character: &Character,
        tuning: &MovementTuning,
    ) {
        // The sprite cell is wider than the hitbox; keep it centred over the hitbox.
        let offset = Vec2::new((tuning.sprite_width - character.hitbox.width) / 2.0, 0.0);
        surface.draw_sprite(
            PLAYER_TEXTURE,
            character.animation.source,
            character.position - offset,
            character.facing == Facing::Left,
        );
    }

    fn draw_debug(&self, surface: &mut dyn RenderSurface, level: &Level, character: &Character) {
        for rect in level.collisionables() {
            surface.draw_outline(*rect, COLLISIONABLE_COLOR);
        }
        surface.draw_outline(character.interact_box, INTERACT_BOX_COLOR);
        surface.draw_outline(character.hitbox, HITBOX_COLOR);
    }
}

/// Draw a full-screen dimming rectangle, used while the simulation is frozen.
pub fn draw_overlay(surface: &mut dyn RenderSurface, viewport: Vec2, color: Color) {
    surface.draw_rect(Aabb::from_position_size(Vec2::ZERO, viewport), color);
}
