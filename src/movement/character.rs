//! Movement domain: the player character and its per-tick pipeline.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::content::PlayArea;
use crate::geometry::Aabb;
use crate::level::{Direction, Level, Prop};
use crate::movement::collisions::{resolve_collisions, wrap_play_area};
use crate::movement::interaction::{check_hazards, open_doors, pick_up_props};
use crate::movement::{Action, ActionInput, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// What the character did during the last tick, consumed by effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastAction {
    #[default]
    None,
    Jump,
    PickupProp,
}

/// One-shot flags raised when the character leaves the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitFlags {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl ExitFlags {
    pub fn set(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::East => self.east = true,
            Direction::South => self.south = true,
            Direction::West => self.west = true,
        }
    }

    pub fn any(&self) -> bool {
        self.north || self.east || self.south || self.west
    }

    /// The exit to act on when several are raised: west, then south, east, north.
    pub fn pending(&self) -> Option<Direction> {
        if self.west {
            Some(Direction::West)
        } else if self.south {
            Some(Direction::South)
        } else if self.east {
            Some(Direction::East)
        } else if self.north {
            Some(Direction::North)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sprite-sheet animation cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteAnimation {
    pub current_frame: u32,
    pub frames_counter: u32,
    pub frames_speed: u32,
    pub source: Aabb,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub position: Vec2,
    pub velocity: Vec2,
    pub hitbox: Aabb,
    /// Hitbox grown by the interact margin; never blocks movement.
    pub interact_box: Aabb,
    pub facing: Facing,
    pub on_ground: bool,
    pub is_running: bool,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub is_dead: bool,
    /// Armed while the jump input is released; a jump disarms it.
    pub can_jump: bool,
    pub exits: ExitFlags,
    pub inventory: Vec<Prop>,
    /// Recent positions, oldest first.
    pub path: VecDeque<Vec2>,
    pub last_action: LastAction,
    pub animation: SpriteAnimation,
    /// Interact press waiting for the next tick.
    pub pending_interact: bool,
}

impl Character {
    pub fn new(position: Vec2, tuning: &MovementTuning) -> Self {
        let hitbox = Aabb::from_position_size(position, tuning.hitbox_size());
        Self {
            position,
            velocity: Vec2::ZERO,
            hitbox,
            interact_box: hitbox.expanded(tuning.interact_margin),
            facing: Facing::Right,
            on_ground: false,
            is_running: false,
            is_jumping: false,
            is_falling: false,
            is_dead: false,
            can_jump: true,
            exits: ExitFlags::default(),
            inventory: Vec::new(),
            path: VecDeque::with_capacity(tuning.path_capacity),
            last_action: LastAction::None,
            animation: SpriteAnimation {
                frames_speed: tuning.idle_frames_speed,
                source: Aabb::new(0.0, 0.0, tuning.sprite_width, tuning.sprite_height),
                ..default()
            },
            pending_interact: false,
        }
    }

    /// Advance one simulation step. The order of the stages is load-bearing: input read at the
    /// end of a tick only affects motion on the next one.
    pub fn tick(
        &mut self,
        delta: f32,
        level: &mut Level,
        input: &ActionInput,
        tuning: &MovementTuning,
        area: PlayArea,
    ) {
        self.last_action = LastAction::None;

        self.apply_gravity(delta, tuning);
        self.position += self.velocity * delta;
        self.update_hitbox(tuning);

        resolve_collisions(self, level.collisionables(), tuning);
        wrap_play_area(self, area, tuning);

        self.update_state(tuning);
        self.update_animation(tuning);
        self.record_path(tuning);

        check_hazards(self, level);

        if input.just_pressed(Action::Interact) {
            self.pending_interact = true;
        }
        if std::mem::take(&mut self.pending_interact) {
            pick_up_props(self, level);
            open_doors(self, level);
        }

        self.apply_input(delta, input, tuning);
    }

    fn apply_gravity(&mut self, delta: f32, tuning: &MovementTuning) {
        self.velocity.y += tuning.gravity * delta;
        if self.velocity.y > tuning.terminal_velocity {
            self.velocity.y = tuning.terminal_velocity;
        }
    }

    pub fn update_hitbox(&mut self, tuning: &MovementTuning) {
        self.hitbox = self.hitbox.moved_to(self.position);
        self.interact_box = self.hitbox.expanded(tuning.interact_margin);
    }

    /// Bottom-edge points used to keep contact with the ground the character rests on.
    pub fn foot_probes(&self, inset: f32) -> [Vec2; 2] {
        let y = self.hitbox.bottom();
        [
            Vec2::new(self.hitbox.x + inset, y),
            Vec2::new(self.hitbox.right() - inset, y),
        ]
    }

    fn update_state(&mut self, tuning: &MovementTuning) {
        self.is_running = self.velocity.x != 0.0;
        self.is_jumping = self.velocity.y < 0.0;
        self.is_falling = self.velocity.y > 0.0;
        self.animation.frames_speed = if self.is_running {
            tuning.run_frames_speed
        } else {
            tuning.idle_frames_speed
        };
    }

    fn update_animation(&mut self, tuning: &MovementTuning) {
        let anim = &mut self.animation;
        anim.frames_counter += 1;

        if anim.frames_counter < 60 / anim.frames_speed.max(1) {
            return;
        }

        anim.frames_counter = 0;
        anim.current_frame += 1;

        let last_frame = if self.is_running { 7 } else { 1 };
        if anim.current_frame > last_frame {
            anim.current_frame = 0;
        }

        anim.source.y = if self.is_running { 31.0 } else { 0.0 };
        anim.source.x = anim.current_frame as f32 * tuning.sprite_width;
    }

    fn record_path(&mut self, tuning: &MovementTuning) {
        if self.velocity == Vec2::ZERO {
            return;
        }

        while self.path.len() >= tuning.path_capacity.max(1) {
            self.path.pop_front();
        }
        self.path.push_back(self.position);
    }

    fn apply_input(&mut self, delta: f32, input: &ActionInput, tuning: &MovementTuning) {
        let left = input.held(Action::MoveLeft);
        let right = input.held(Action::MoveRight);

        match (left, right) {
            (true, false) => {
                self.facing = Facing::Left;
                self.accelerate_toward(-tuning.max_speed, tuning.accel * delta);
            }
            (false, true) => {
                self.facing = Facing::Right;
                self.accelerate_toward(tuning.max_speed, tuning.accel * delta);
            }
            _ => self.decelerate(tuning.decel * delta),
        }

        if !input.held(Action::Jump) {
            self.can_jump = true;
        } else if self.on_ground && self.can_jump {
            self.velocity.y = tuning.jump_impulse;
            self.can_jump = false;
            self.last_action = LastAction::Jump;
        }
    }

    fn accelerate_toward(&mut self, target: f32, step: f32) {
        if self.velocity.x < target {
            self.velocity.x = (self.velocity.x + step).min(target);
        } else {
            self.velocity.x = (self.velocity.x - step).max(target);
        }
    }

    fn decelerate(&mut self, step: f32) {
        if self.velocity.x > 0.0 {
            self.velocity.x = (self.velocity.x - step).max(0.0);
        } else {
            self.velocity.x = (self.velocity.x + step).min(0.0);
        }
    }

    /// Put the character back at `position` at rest, alive, with a fresh path.
    pub fn respawn(&mut self, position: Vec2, tuning: &MovementTuning) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.is_dead = false;
        self.path.clear();
        self.update_hitbox(tuning);
    }

    pub fn key_count(&self) -> usize {
        self.inventory
            .iter()
            .filter(|p| p.kind == crate::level::PropKind::Key)
            .count()
    }

    /// Where each inventory item trails behind the character, following the path history.
    pub fn inventory_trail(&self, spacing: usize) -> impl Iterator<Item = (&Prop, Vec2)> {
        self.inventory.iter().enumerate().map(move |(i, prop)| {
            let back = (i + 1) * spacing;
            let position = self
                .path
                .len()
                .checked_sub(back + 1)
                .and_then(|idx| self.path.get(idx))
                .copied()
                .unwrap_or(self.position);
            (prop, position)
        })
    }
}
