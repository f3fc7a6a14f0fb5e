//! Geometry domain: axis-aligned rectangles, overlap classification, and ray sweeps.
//!
//! All coordinates are screen-space pixels with y growing downwards, matching the map source.

#[cfg(test)]
mod tests;

use bevy::math::Vec2;

/// Axis-aligned rectangle stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Point containment, inclusive on the top/left edges and exclusive on the bottom/right ones.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    pub fn moved_to(&self, position: Vec2) -> Self {
        Self::new(position.x, position.y, self.width, self.height)
    }
}

/// Face of the static rectangle that the moving rectangle ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitFace {
    Top,
    Bottom,
    Left,
    Right,
}

/// Absolute penetration depths of a moving rectangle into a static one, per face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Overlap {
    pub fn between(moving: &Aabb, fixed: &Aabb) -> Self {
        Self {
            top: (moving.bottom() - fixed.y).abs(),
            bottom: (fixed.bottom() - moving.y).abs(),
            left: (moving.right() - fixed.x).abs(),
            right: (fixed.right() - moving.x).abs(),
        }
    }

    /// Face with the smallest depth, compared in Top, Bottom, Left, Right order and replaced
    /// only on strict improvement. Side hits are dropped when the rectangle sits mostly above
    /// the obstacle, which removes ghost collisions on seams between coplanar tiles.
    pub fn face(&self) -> Option<HitFace> {
        let mut min = self.top;
        let mut face = HitFace::Top;

        if self.bottom < min {
            min = self.bottom;
            face = HitFace::Bottom;
        }

        if self.left < min {
            min = self.left;
            face = HitFace::Left;
        }

        if self.right < min {
            face = HitFace::Right;
        }

        let sideways = matches!(face, HitFace::Left | HitFace::Right);
        if sideways && self.bottom > 0.0 && self.bottom > self.top {
            return None;
        }

        Some(face)
    }
}

/// Classify the collision of `moving` against `fixed`. Returns `None` when the rectangles do
/// not overlap or when the hit is a ghost side-collision.
#[allow(dead_code)]
pub fn resolve_rect_collision(moving: &Aabb, fixed: &Aabb) -> Option<HitFace> {
    if !moving.overlaps(fixed) {
        return None;
    }

    Overlap::between(moving, fixed).face()
}

/// Ray with an unnormalized direction; zero-length directions never hit.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRay {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl SweepRay {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }
}

/// Sweep a box of `mover_size` centred on the ray origin against `target`.
///
/// The target is grown by half the mover's size on each axis so the sweep reduces to a ray
/// versus rectangle slab test. Returns the entry distance along the normalized direction,
/// clamped to zero when the origin already starts inside the grown rectangle.
#[allow(dead_code)]
pub fn ray_rect_sweep(ray: SweepRay, target: &Aabb, mover_size: Vec2) -> Option<f32> {
    let length = ray.direction.length();
    if length == 0.0 {
        return None;
    }

    let dir = ray.direction / length;
    let expanded = Aabb::new(
        target.x - mover_size.x / 2.0,
        target.y - mover_size.y / 2.0,
        target.width + mover_size.x,
        target.height + mover_size.y,
    );

    let (near_x, far_x) = slab(ray.origin.x, dir.x, expanded.x, expanded.right())?;
    let (near_y, far_y) = slab(ray.origin.y, dir.y, expanded.y, expanded.bottom())?;

    let enter = near_x.max(near_y);
    let exit = far_x.min(far_y);

    if exit < 0.0 || enter > exit {
        return None;
    }

    Some(enter.max(0.0))
}

/// Entry and exit parameters for one axis. A ray parallel to the slab only passes when the
/// origin already lies between its bounds.
fn slab(origin: f32, dir: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if dir == 0.0 {
        if origin < min || origin > max {
            return None;
        }
        return Some((f32::NEG_INFINITY, f32::INFINITY));
    }

    let a = (min - origin) / dir;
    let b = (max - origin) / dir;
    Some((a.min(b), a.max(b)))
}
