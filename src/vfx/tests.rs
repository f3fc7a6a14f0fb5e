//! VFX domain: tests for pose progression and queue cleanup.

use bevy::math::Vec2;

use super::{Vfx, VfxKind, VfxQueue};
use crate::geometry::Aabb;

#[test]
fn test_jump_effect_runs_sixteen_frames() {
    let mut vfx = Vfx::new(VfxKind::Jump, Vec2::new(5.0, 5.0));

    for frame in 1..16 {
        assert!(!vfx.advance(), "finished early at frame {frame}");
    }
    assert_eq!(vfx.pose, 3);
    assert!(vfx.advance());
}

#[test]
fn test_pose_advances_every_frames_per_pose() {
    let mut vfx = Vfx::new(VfxKind::Death, Vec2::ZERO);

    for _ in 0..9 {
        vfx.advance();
    }
    assert_eq!(vfx.pose, 0);
    vfx.advance();
    assert_eq!(vfx.pose, 1);
    assert_eq!(vfx.sprite_source(), Aabb::new(16.0, 16.0, 16.0, 16.0));
}

#[test]
fn test_looping_effect_restarts() {
    let mut vfx = Vfx::new(VfxKind::Jump, Vec2::ZERO);
    vfx.looping = true;

    for _ in 0..16 {
        assert!(!vfx.advance());
    }
    assert_eq!(vfx.pose, 0);
}

#[test]
fn test_queue_removes_finished_effects_only() {
    let mut queue = VfxQueue::default();
    queue.spawn(VfxKind::Jump, Vec2::ZERO);
    queue.spawn(VfxKind::Death, Vec2::new(10.0, 10.0));

    for _ in 0..16 {
        queue.tick();
    }
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.iter().next().map(|v| v.kind), Some(VfxKind::Death));

    for _ in 0..14 {
        queue.tick();
    }
    assert!(queue.is_empty());
}

#[test]
fn test_anchor_is_fixed_at_spawn() {
    let mut queue = VfxQueue::default();
    queue.spawn(VfxKind::Death, Vec2::new(42.0, 7.0));
    queue.tick();

    assert_eq!(queue.iter().next().map(|v| v.position), Some(Vec2::new(42.0, 7.0)));
}
