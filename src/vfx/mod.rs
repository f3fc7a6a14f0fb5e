//! VFX domain: fire-and-forget animated overlays such as jump dust and death bursts.

#[cfg(test)]
mod tests;

use bevy::math::Vec2;
use bevy::prelude::debug;

use crate::geometry::Aabb;

/// Size of one pose cell in the effects sheet.
pub const VFX_CELL_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfxKind {
    Jump,
    Death,
}

impl VfxKind {
    /// (frames per pose, pose count, looping)
    fn animation(self) -> (u32, u32, bool) {
        match self {
            VfxKind::Jump => (4, 4, false),
            VfxKind::Death => (10, 3, false),
        }
    }

    fn sheet_row(self) -> f32 {
        match self {
            VfxKind::Jump => 0.0,
            VfxKind::Death => VFX_CELL_SIZE,
        }
    }
}

/// One running effect. The anchor is captured at spawn and never follows the character.
#[derive(Debug, Clone, PartialEq)]
pub struct Vfx {
    pub kind: VfxKind,
    pub position: Vec2,
    pub frame_counter: u32,
    pub pose: u32,
    pub frames_per_pose: u32,
    pub pose_count: u32,
    pub looping: bool,
}

impl Vfx {
    pub fn new(kind: VfxKind, position: Vec2) -> Self {
        let (frames_per_pose, pose_count, looping) = kind.animation();
        Self {
            kind,
            position,
            frame_counter: 0,
            pose: 0,
            frames_per_pose,
            pose_count,
            looping,
        }
    }

    /// Step one render frame. Returns true once a non-looping effect has shown its last pose.
    pub fn advance(&mut self) -> bool {
        self.frame_counter += 1;
        if self.frame_counter < self.frames_per_pose {
            return false;
        }

        self.frame_counter = 0;
        self.pose += 1;
        if self.pose < self.pose_count {
            return false;
        }

        if self.looping {
            self.pose = 0;
            false
        } else {
            true
        }
    }

    pub fn sprite_source(&self) -> Aabb {
        Aabb::new(
            self.pose as f32 * VFX_CELL_SIZE,
            self.kind.sheet_row(),
            VFX_CELL_SIZE,
            VFX_CELL_SIZE,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct VfxQueue {
    active: Vec<Vfx>,
}

impl VfxQueue {
    pub fn spawn(&mut self, kind: VfxKind, position: Vec2) {
        debug!("Spawning {:?} effect at {}", kind, position);
        self.active.push(Vfx::new(kind, position));
    }

    /// Advance every effect and drop the finished ones.
    pub fn tick(&mut self) {
        self.active.retain_mut(|vfx| !vfx.advance());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vfx> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
