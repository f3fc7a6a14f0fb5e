//! Movement domain: tests for the character tick pipeline, collisions, and interactions.

use bevy::math::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::collisions::resolve_collisions;
use super::{Action, ActionInput, Character, ExitFlags, Facing, LastAction, MovementTuning};
use crate::content::PlayArea;
use crate::content::ldtk::LdtkEntity;
use crate::geometry::Aabb;
use crate::level::{
    Direction, ENTITIES_LAYER, GROUND_LAYER, Layer, Level, ParticleTuning, Prop, PropKind,
};

const DELTA: f32 = 1.0 / 60.0;

fn entity(identifier: &str, px: [f32; 2]) -> LdtkEntity {
    LdtkEntity {
        identifier: identifier.to_string(),
        iid: format!("{identifier}-iid"),
        px,
        width: 8.0,
        height: 8.0,
        field_instances: Vec::new(),
    }
}

/// Build and load a level with ground tiles at y=172 for each x, plus the given entities.
fn level(ground_xs: &[f32], entities: Vec<LdtkEntity>) -> Level {
    let mut ground = Layer::new(GROUND_LAYER);
    for x in ground_xs {
        ground = ground.with_tile([*x, 172.0], [0.0, 0.0]);
    }

    let mut layer = Layer::new(ENTITIES_LAYER);
    for e in entities {
        layer = layer.with_entity(e);
    }

    let mut level = Level::new("iid-test", "Test").with_layer(ground).with_layer(layer);
    let particles = ParticleTuning {
        count: 0,
        ..Default::default()
    };
    level.load(
        &mut ChaCha8Rng::seed_from_u64(1),
        &particles,
        Vec2::new(320.0, 180.0),
    );
    level
}

fn tick(character: &mut Character, level: &mut Level, input: &ActionInput) {
    character.tick(
        DELTA,
        level,
        input,
        &MovementTuning::default(),
        PlayArea::default(),
    );
}

fn character_at(x: f32, y: f32) -> Character {
    Character::new(Vec2::new(x, y), &MovementTuning::default())
}

// -----------------------------------------------------------------------------
// Gravity and resting tests
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_converges_to_terminal_velocity() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 10.0);
    let input = ActionInput::default();

    for _ in 0..200 {
        tick(&mut character, &mut level, &input);
        assert!(character.velocity.y <= 600.0);
        assert!(!character.on_ground);
    }

    assert_eq!(character.velocity.y, 600.0);
}

#[test]
fn test_resting_on_ground_keeps_position() {
    let mut level = level(&[0.0, 8.0], Vec::new());
    let mut character = character_at(0.0, 155.0);
    let input = ActionInput::default();

    tick(&mut character, &mut level, &input);

    assert!(character.on_ground);
    assert_eq!(character.velocity.y, 0.0);
    assert_eq!(character.position.y, 155.0);
    assert!(!character.is_falling);
    assert!(character.path.is_empty());
}

#[test]
fn test_idle_animation_advances_every_thirty_ticks() {
    let mut level = level(&[0.0, 8.0], Vec::new());
    let mut character = character_at(0.0, 155.0);
    let input = ActionInput::default();

    for _ in 0..30 {
        tick(&mut character, &mut level, &input);
    }
    assert_eq!(character.animation.current_frame, 1);
    assert_eq!(character.animation.source.x, 16.0);
    assert_eq!(character.animation.source.y, 0.0);

    for _ in 0..30 {
        tick(&mut character, &mut level, &input);
    }
    assert_eq!(character.animation.current_frame, 0);
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_holding_jump_produces_one_impulse() {
    let mut level = level(&[0.0, 8.0], Vec::new());
    let mut character = character_at(0.0, 155.0);
    let held = ActionInput::default().with_held(Action::Jump);

    let mut jumps = 0;
    for _ in 0..120 {
        tick(&mut character, &mut level, &held);
        if character.last_action == LastAction::Jump {
            jumps += 1;
        }
    }

    assert_eq!(jumps, 1);
    assert!(character.on_ground);
    assert!(!character.can_jump);
}

#[test]
fn test_release_rearms_jump() {
    let mut level = level(&[0.0, 8.0], Vec::new());
    let mut character = character_at(0.0, 155.0);
    let held = ActionInput::default().with_held(Action::Jump);
    let released = ActionInput::default();

    for _ in 0..120 {
        tick(&mut character, &mut level, &held);
    }
    tick(&mut character, &mut level, &released);
    assert!(character.can_jump);

    tick(&mut character, &mut level, &held);
    assert_eq!(character.last_action, LastAction::Jump);
    assert_eq!(character.velocity.y, -300.0);
}

#[test]
fn test_jump_height_from_tuning() {
    assert_eq!(MovementTuning::default().jump_height(), 50.0);
}

// -----------------------------------------------------------------------------
// Horizontal input tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_unambiguous_input() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 10.0);

    tick(
        &mut character,
        &mut level,
        &ActionInput::default().with_held(Action::MoveLeft),
    );
    assert_eq!(character.facing, Facing::Left);
    assert!((character.velocity.x + 700.0 * DELTA).abs() < 1e-4);

    let both = ActionInput::default()
        .with_held(Action::MoveLeft)
        .with_held(Action::MoveRight);
    tick(&mut character, &mut level, &both);
    assert_eq!(character.facing, Facing::Left);
    assert_eq!(character.velocity.x, 0.0);
}

#[test]
fn test_acceleration_caps_at_max_speed() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 10.0);
    let right = ActionInput::default().with_held(Action::MoveRight);

    for _ in 0..60 {
        tick(&mut character, &mut level, &right);
    }

    assert_eq!(character.velocity.x, 120.0);
    assert_eq!(character.facing, Facing::Right);
}

#[test]
fn test_deceleration_clamps_at_zero() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 10.0);
    character.velocity.x = 5.0;

    tick(&mut character, &mut level, &ActionInput::default());
    assert_eq!(character.velocity.x, 0.0);

    character.velocity.x = -5.0;
    tick(&mut character, &mut level, &ActionInput::default());
    assert_eq!(character.velocity.x, 0.0);
}

#[test]
fn test_path_history_is_capped() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 10.0);
    let right = ActionInput::default().with_held(Action::MoveRight);

    for _ in 0..150 {
        tick(&mut character, &mut level, &right);
    }

    assert_eq!(character.path.len(), 100);
    assert_eq!(character.path.back().copied(), Some(character.position));
}

// -----------------------------------------------------------------------------
// Collision tests
// -----------------------------------------------------------------------------

#[test]
fn test_later_collisions_override_earlier_ones() {
    let tuning = MovementTuning::default();
    let floor = Aabb::new(0.0, 15.0, 10.0, 10.0);
    let ceiling = Aabb::new(0.0, -10.0, 10.0, 9.0);

    let mut first = character_at(0.0, 0.0);
    resolve_collisions(&mut first, &[floor, ceiling], &tuning);
    assert_eq!(first.position.y, -1.0);
    assert!(first.on_ground);

    let mut second = character_at(0.0, 0.0);
    resolve_collisions(&mut second, &[ceiling, floor], &tuning);
    assert_eq!(second.position.y, -2.0);
    assert!(second.on_ground);
}

#[test]
fn test_side_collision_stops_horizontal_motion() {
    let tuning = MovementTuning::default();
    // A wall tile level with the character's head; tall walls below it are ghost-filtered.
    let wall = Aabb::new(20.0, 8.0, 8.0, 8.0);
    let mut character = character_at(12.0, 10.0);
    character.velocity.x = 120.0;

    resolve_collisions(&mut character, &[wall], &tuning);

    assert_eq!(character.position.x, 10.0);
    assert_eq!(character.velocity.x, 0.0);
    assert!(!character.on_ground);
}

#[test]
fn test_foot_probes_ground_a_character_touching_the_top_edge() {
    let tuning = MovementTuning::default();
    let tile = Aabb::new(0.0, 172.0, 8.0, 8.0);
    // Hitbox bottom sits exactly on the tile top: no strict overlap.
    let mut character = character_at(0.0, 155.0);
    character.velocity.y = 15.0;
    assert!(!character.hitbox.overlaps(&tile));

    resolve_collisions(&mut character, &[tile], &tuning);

    assert!(character.on_ground);
    assert_eq!(character.position.y, 155.0);
    assert_eq!(character.velocity.y, 0.0);
}

#[test]
fn test_foot_probe_inset_skips_thin_corner_contact() {
    // The tile only reaches 2px under the character's left edge.
    let tile = Aabb::new(-6.0, 172.0, 8.0, 8.0);

    let flush = MovementTuning {
        foot_probe_inset: 0.0,
        ..Default::default()
    };
    let mut grounded = character_at(0.0, 155.0);
    resolve_collisions(&mut grounded, &[tile], &flush);
    assert!(grounded.on_ground);

    let inset = MovementTuning {
        foot_probe_inset: 4.0,
        ..Default::default()
    };
    let mut airborne = character_at(0.0, 155.0);
    airborne.velocity.y = 15.0;
    resolve_collisions(&mut airborne, &[tile], &inset);
    assert!(!airborne.on_ground);
    assert_eq!(airborne.velocity.y, 15.0);
}

#[test]
fn test_crossing_bottom_edge_wraps_and_flags_south() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(100.0, 163.0);
    character.velocity.y = 60.0;

    tick(&mut character, &mut level, &ActionInput::default());

    assert_eq!(character.position.y, 0.0);
    assert!(character.exits.south);
    assert_eq!(character.exits.pending(), Some(Direction::South));
}

#[test]
fn test_crossing_left_edge_wraps_and_flags_west() {
    let mut level = level(&[], Vec::new());
    let mut character = character_at(0.5, 50.0);
    character.velocity.x = -120.0;

    tick(&mut character, &mut level, &ActionInput::default());

    assert_eq!(character.position.x, 310.0);
    assert!(character.exits.west);
}

#[test]
fn test_exit_flag_precedence() {
    let mut exits = ExitFlags::default();
    assert_eq!(exits.pending(), None);

    exits.set(Direction::North);
    exits.set(Direction::East);
    assert_eq!(exits.pending(), Some(Direction::East));

    exits.set(Direction::West);
    assert_eq!(exits.pending(), Some(Direction::West));

    exits.clear();
    assert!(!exits.any());
}

// -----------------------------------------------------------------------------
// Interaction tests
// -----------------------------------------------------------------------------

#[test]
fn test_pickup_moves_prop_into_inventory_once() {
    let mut level = level(&[], vec![entity("Key", [40.0, 160.0])]);
    let mut character = character_at(36.0, 150.0);
    let interact = ActionInput::default().with_pressed(Action::Interact);

    tick(&mut character, &mut level, &interact);
    assert_eq!(character.inventory.len(), 1);
    assert_eq!(character.last_action, LastAction::PickupProp);
    assert!(level.props.is_empty());

    tick(&mut character, &mut level, &interact);
    assert_eq!(character.inventory.len(), 1);
    assert_eq!(character.last_action, LastAction::None);
}

#[test]
fn test_pickup_without_interact_does_nothing() {
    let mut level = level(&[], vec![entity("Key", [40.0, 160.0])]);
    let mut character = character_at(36.0, 150.0);

    tick(&mut character, &mut level, &ActionInput::default());

    assert!(character.inventory.is_empty());
    assert_eq!(level.props.len(), 1);
}

#[test]
fn test_door_opens_with_key_and_updates_collisions() {
    let ground = [0.0, 8.0, 16.0, 24.0, 32.0];
    let mut level = level(&ground, vec![entity("Door", [24.0, 156.0])]);
    let door_box = level.props[0].hitbox;
    assert!(level.collisionables().contains(&door_box));

    let mut character = character_at(12.0, 155.0);
    character.inventory.push(Prop::new(PropKind::Key, Vec2::ZERO));

    tick(
        &mut character,
        &mut level,
        &ActionInput::default().with_pressed(Action::Interact),
    );

    assert!(level.props[0].is_open);
    assert!(level.props[0].walkable);
    assert_eq!(character.key_count(), 0);
    assert!(!level.collisionables().contains(&door_box));
}

#[test]
fn test_door_stays_closed_without_key() {
    let ground = [0.0, 8.0, 16.0, 24.0, 32.0];
    let mut level = level(&ground, vec![entity("Door", [24.0, 156.0])]);
    let door_box = level.props[0].hitbox;
    let mut character = character_at(12.0, 155.0);

    tick(
        &mut character,
        &mut level,
        &ActionInput::default().with_pressed(Action::Interact),
    );

    assert!(!level.props[0].is_open);
    assert!(level.collisionables().contains(&door_box));
}

#[test]
fn test_spike_overlap_marks_character_dead() {
    let mut level = level(&[], vec![entity("Spike", [40.0, 160.0])]);
    let mut character = character_at(36.0, 150.0);

    tick(&mut character, &mut level, &ActionInput::default());

    assert!(character.is_dead);
    assert_eq!(level.props.len(), 1);
}

#[test]
fn test_respawn_clears_death_and_path() {
    let tuning = MovementTuning::default();
    let mut character = character_at(10.0, 10.0);
    character.is_dead = true;
    character.velocity = Vec2::new(30.0, 40.0);
    character.path.push_back(Vec2::ONE);

    character.respawn(Vec2::new(60.0, 60.0), &tuning);

    assert!(!character.is_dead);
    assert_eq!(character.velocity, Vec2::ZERO);
    assert!(character.path.is_empty());
    assert_eq!(character.hitbox, Aabb::new(60.0, 60.0, 10.0, 17.0));
}

#[test]
fn test_inventory_trails_behind_along_path() {
    let mut character = character_at(0.0, 0.0);
    for i in 0..30 {
        character.path.push_back(Vec2::new(i as f32, 0.0));
    }
    character.inventory.push(Prop::new(PropKind::Key, Vec2::ZERO));
    character.inventory.push(Prop::new(PropKind::Key, Vec2::ZERO));
    character.inventory.push(Prop::new(PropKind::Key, Vec2::ZERO));

    let trail: Vec<Vec2> = character.inventory_trail(12).map(|(_, p)| p).collect();

    assert_eq!(trail[0], Vec2::new(17.0, 0.0));
    assert_eq!(trail[1], Vec2::new(5.0, 0.0));
    assert_eq!(trail[2], character.position);
}
