//! Geometry domain: tests for overlap classification and ray sweeps.

use bevy::math::Vec2;

use super::{Aabb, HitFace, Overlap, SweepRay, ray_rect_sweep, resolve_rect_collision};

// -----------------------------------------------------------------------------
// Aabb tests
// -----------------------------------------------------------------------------

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Aabb::new(0.0, 0.0, 8.0, 8.0);
    let b = Aabb::new(8.0, 0.0, 8.0, 8.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn test_contains_point_is_inclusive_on_top_left_only() {
    let tile = Aabb::new(0.0, 16.0, 8.0, 8.0);
    assert!(tile.contains_point(Vec2::new(0.0, 16.0)));
    assert!(tile.contains_point(Vec2::new(4.0, 16.0)));
    assert!(!tile.contains_point(Vec2::new(8.0, 16.0)));
    assert!(!tile.contains_point(Vec2::new(4.0, 24.0)));
}

#[test]
fn test_expanded_grows_every_side() {
    let rect = Aabb::new(10.0, 20.0, 10.0, 17.0).expanded(4.0);
    assert_eq!(rect, Aabb::new(6.0, 16.0, 18.0, 25.0));
}

// -----------------------------------------------------------------------------
// resolve_rect_collision tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_overlap_is_no_hit() {
    let moving = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let fixed = Aabb::new(20.0, 20.0, 8.0, 8.0);
    assert_eq!(resolve_rect_collision(&moving, &fixed), None);
}

#[test]
fn test_landing_hits_top() {
    let moving = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let fixed = Aabb::new(0.0, 8.0, 8.0, 8.0);
    assert_eq!(resolve_rect_collision(&moving, &fixed), Some(HitFace::Top));
}

#[test]
fn test_head_bump_hits_bottom() {
    let moving = Aabb::new(0.0, 14.0, 10.0, 10.0);
    let fixed = Aabb::new(0.0, 0.0, 16.0, 16.0);
    assert_eq!(
        resolve_rect_collision(&moving, &fixed),
        Some(HitFace::Bottom)
    );
}

#[test]
fn test_walking_into_wall_hits_sides() {
    let wall = Aabb::new(0.0, 0.0, 8.0, 20.0);

    let from_left = Aabb::new(-8.0, 10.0, 10.0, 10.0);
    assert_eq!(resolve_rect_collision(&from_left, &wall), Some(HitFace::Left));

    let from_right = Aabb::new(6.0, 10.0, 10.0, 10.0);
    assert_eq!(
        resolve_rect_collision(&from_right, &wall),
        Some(HitFace::Right)
    );
}

#[test]
fn test_equal_depths_prefer_top() {
    let rect = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(resolve_rect_collision(&rect, &rect), Some(HitFace::Top));

    let corner = Aabb::new(-2.0, -2.0, 4.0, 4.0);
    let tile = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(resolve_rect_collision(&corner, &tile), Some(HitFace::Top));
}

#[test]
fn test_equal_side_depths_prefer_left() {
    let moving = Aabb::new(2.0, 10.0, 4.0, 10.0);
    let wall = Aabb::new(0.0, 0.0, 8.0, 20.0);

    let overlap = Overlap::between(&moving, &wall);
    assert_eq!(overlap.left, overlap.right);
    assert_eq!(resolve_rect_collision(&moving, &wall), Some(HitFace::Left));
}

#[test]
fn test_ghost_side_hit_is_discarded() {
    // Sunk 2px into the floor while barely crossing the right edge of the tile.
    let moving = Aabb::new(7.0, 8.0, 10.0, 10.0);
    let tile = Aabb::new(0.0, 16.0, 8.0, 8.0);

    let overlap = Overlap::between(&moving, &tile);
    assert!(overlap.right < overlap.top);
    assert_eq!(resolve_rect_collision(&moving, &tile), None);
}

#[test]
fn test_no_side_hits_on_seam_between_floor_tiles() {
    let left_tile = Aabb::new(0.0, 16.0, 8.0, 8.0);
    let right_tile = Aabb::new(8.0, 16.0, 8.0, 8.0);

    for step in 0..=12 {
        let x = -2.0 + step as f32;
        for sink in [0.0_f32, 0.25, 0.5, 1.0, 2.0, 4.0] {
            let character = Aabb::new(x, 6.0 + sink, 10.0, 10.0);
            for tile in [&left_tile, &right_tile] {
                let face = resolve_rect_collision(&character, tile);
                assert!(
                    !matches!(face, Some(HitFace::Left | HitFace::Right)),
                    "side hit at x={x} sink={sink} against {tile:?}"
                );
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ray_rect_sweep tests
// -----------------------------------------------------------------------------

#[test]
fn test_zero_length_ray_never_hits() {
    let ray = SweepRay::new(Vec2::ZERO, Vec2::ZERO);
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(ray_rect_sweep(ray, &target, Vec2::splat(2.0)), None);
}

#[test]
fn test_horizontal_ray_enters_expanded_rect() {
    let ray = SweepRay::new(Vec2::new(-20.0, 4.0), Vec2::new(5.0, 0.0));
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    let hit = ray_rect_sweep(ray, &target, Vec2::splat(2.0));
    assert_eq!(hit, Some(19.0));
}

#[test]
fn test_axis_parallel_ray_outside_slab_misses() {
    let ray = SweepRay::new(Vec2::new(-20.0, 20.0), Vec2::new(1.0, 0.0));
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(ray_rect_sweep(ray, &target, Vec2::splat(2.0)), None);
}

#[test]
fn test_ray_starting_inside_hits_immediately() {
    let ray = SweepRay::new(Vec2::new(4.0, 4.0), Vec2::new(1.0, 0.0));
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(ray_rect_sweep(ray, &target, Vec2::ZERO), Some(0.0));
}

#[test]
fn test_ray_pointing_away_misses() {
    let ray = SweepRay::new(Vec2::new(20.0, 4.0), Vec2::new(1.0, 0.0));
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    assert_eq!(ray_rect_sweep(ray, &target, Vec2::splat(2.0)), None);
}

#[test]
fn test_diagonal_ray_uses_normalized_distance() {
    let ray = SweepRay::new(Vec2::new(-10.0, -10.0), Vec2::new(3.0, 3.0));
    let target = Aabb::new(0.0, 0.0, 8.0, 8.0);
    let hit = ray_rect_sweep(ray, &target, Vec2::ZERO).unwrap();
    assert!((hit - 10.0 * std::f32::consts::SQRT_2).abs() < 1e-3);
}
