//! Render domain: the drawing sink the simulation core writes into.

use bevy::prelude::*;

use crate::geometry::Aabb;

/// Minimal drawing interface. Coordinates are virtual pixels, origin top-left, y down.
pub trait RenderSurface {
    /// Draw the `source` region of a texture with its top-left corner at `position`.
    fn draw_sprite(&mut self, texture: &str, source: Aabb, position: Vec2, flip_x: bool);
    fn draw_rect(&mut self, rect: Aabb, color: Color);
    /// Draw a full-screen background image by its bare identifier.
    fn draw_background(&mut self, texture: &str);
    fn draw_point(&mut self, position: Vec2, color: Color);
    fn draw_outline(&mut self, rect: Aabb, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        texture: String,
    },
    Sprite {
        texture: String,
        source: Aabb,
        position: Vec2,
        flip_x: bool,
    },
    Rect {
        rect: Aabb,
        color: Color,
    },
    Point {
        position: Vec2,
        color: Color,
    },
    Outline {
        rect: Aabb,
        color: Color,
    },
}

/// Draw commands recorded during one frame, in painter's order.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Size of the virtual screen the commands target.
    pub viewport: Vec2,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSurface for DrawList {
    fn draw_sprite(&mut self, texture: &str, source: Aabb, position: Vec2, flip_x: bool) {
        self.commands.push(DrawCommand::Sprite {
            texture: texture.to_string(),
            source,
            position,
            flip_x,
        });
    }

    fn draw_rect(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_background(&mut self, texture: &str) {
        self.commands.push(DrawCommand::Background {
            texture: texture.to_string(),
        });
    }

    fn draw_point(&mut self, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Point { position, color });
    }

    fn draw_outline(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Outline { rect, color });
    }
}
