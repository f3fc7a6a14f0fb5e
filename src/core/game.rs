//! Core domain: the game instance that owns the world, the character, and the frame loop.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use crate::content::{ContentLoadError, GameplayDefaults, load_gameplay_defaults, load_world};
use crate::core::{FrameInspector, GameState};
use crate::level::{Level, World};
use crate::movement::{Action, ActionInput, Character, InputDevice, LastAction};
use crate::render::{RenderSurface, Renderer, draw_overlay};
use crate::vfx::{VFX_CELL_SIZE, VfxKind, VfxQueue};

const PAUSE_DIM: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

/// Reasons a game cannot be created.
#[derive(Debug)]
pub enum GameInitError {
    Content(ContentLoadError),
    /// The configured starting level is not in the map.
    MissingLevel(String),
}

impl std::fmt::Display for GameInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameInitError::Content(e) => write!(f, "{}", e),
            GameInitError::MissingLevel(name) => {
                write!(f, "Starting level {} is not in the map", name)
            }
        }
    }
}

impl std::error::Error for GameInitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameInitError::Content(e) => Some(e),
            GameInitError::MissingLevel(_) => None,
        }
    }
}

impl From<ContentLoadError> for GameInitError {
    fn from(e: ContentLoadError) -> Self {
        GameInitError::Content(e)
    }
}

#[derive(Resource, Debug)]
pub struct Game {
    pub state: GameState,
    pub config: GameplayDefaults,
    pub world: World,
    current_level: usize,
    pub character: Character,
    pub inspector: FrameInspector,
    pub renderer: Renderer,
    pub vfx: VfxQueue,
    /// Device that produced the most recent input.
    pub device: InputDevice,
    pub gamepads_connected: usize,
    /// Real frames since start, ticking or not.
    pub absolute_frame: u64,
    /// Frames in which the simulation advanced.
    pub current_frame: u64,
    /// Absolute frame of the last jump or pickup.
    pub last_action_frame: u64,
    /// Log a state snapshot after every simulated frame.
    pub verbose: bool,
    rng: ChaCha8Rng,
}

impl Game {
    /// Build a game over an already loaded world and load the starting level.
    pub fn new(
        world: World,
        config: GameplayDefaults,
        debug: bool,
    ) -> Result<Self, GameInitError> {
        let current_level = world
            .level_index_by_name(&config.starting_level)
            .ok_or_else(|| GameInitError::MissingLevel(config.starting_level.clone()))?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("Starting game with seed {}", seed);

        let mut game = Self {
            state: GameState::default(),
            character: Character::new(config.spawn_position(), &config.movement),
            config,
            world,
            current_level,
            inspector: FrameInspector::default(),
            renderer: Renderer::new(debug),
            vfx: VfxQueue::default(),
            device: InputDevice::default(),
            gamepads_connected: 0,
            absolute_frame: 0,
            current_frame: 0,
            last_action_frame: 0,
            verbose: debug,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.enter_level(current_level);

        Ok(game)
    }

    pub fn from_files(map: &Path, config: &Path, debug: bool) -> Result<Self, GameInitError> {
        let config = load_gameplay_defaults(config)?;
        let world = load_world(map)?;
        Self::new(world, config, debug)
    }

    pub fn current_level(&self) -> &Level {
        &self.world.levels[self.current_level]
    }

    #[cfg(test)]
    pub fn current_level_mut(&mut self) -> &mut Level {
        &mut self.world.levels[self.current_level]
    }

    /// Change state. Entering `Playing` from the menu or from pause restarts at the starting
    /// level.
    pub fn set_state(&mut self, state: GameState) {
        if state == self.state {
            return;
        }

        if state == GameState::Playing && self.state.restarts_on_play() {
            let starting = self.config.starting_level.clone();
            self.load_level(&starting);
        }

        info!("Game state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Unload the current level and load the one named `name`. Returns false, leaving the current
    /// level in place, when no level has that name.
    pub fn load_level(&mut self, name: &str) -> bool {
        let Some(index) = self.world.level_index_by_name(name) else {
            warn!("No level named {}", name);
            return false;
        };

        self.enter_level(index);
        true
    }

    fn enter_level(&mut self, index: usize) {
        self.world.levels[self.current_level].unload();

        let area = self.config.play_area;
        let level = &mut self.world.levels[index];
        let bounds = level.visible_bounds(Vec2::new(area.width, area.height));
        level.load(&mut self.rng, &self.config.particles, bounds);
        self.current_level = index;
        self.character.path.clear();
    }

    /// Run one real frame: draw, count, read meta input, follow exits, and tick when allowed.
    pub fn frame(&mut self, input: &ActionInput, delta: f32, surface: &mut dyn RenderSurface) {
        self.render(surface);
        self.absolute_frame += 1;
        self.detect_device(input);

        if self.state != GameState::Playing {
            return;
        }

        self.process_meta_input(input);
        self.check_room_change();

        if !self.inspector.can_tick() {
            return;
        }

        self.tick(delta, input);

        if self.verbose {
            self.log_state(input);
        }
    }

    fn render(&mut self, surface: &mut dyn RenderSurface) {
        let level = &self.world.levels[self.current_level];
        self.renderer.draw(
            surface,
            level,
            &self.character,
            &self.vfx,
            &self.config.movement,
        );
        if self.state == GameState::Playing {
            self.vfx.tick();
        }

        if self.state == GameState::Paused {
            let area = self.config.play_area;
            draw_overlay(surface, Vec2::new(area.width, area.height), PAUSE_DIM);
        }
    }

    fn detect_device(&mut self, input: &ActionInput) {
        self.gamepads_connected = input.gamepads_connected;

        if let Some(device) = input.device
            && device != self.device
        {
            debug!("Active input device is now {:?}", device);
            self.device = device;
        }
    }

    fn process_meta_input(&mut self, input: &ActionInput) {
        // Held over until a frame actually ticks.
        if input.just_pressed(Action::Interact) {
            self.character.pending_interact = true;
        }

        if input.just_pressed(Action::ResetDebug) {
            self.reset();
        }

        if input.just_pressed(Action::ToggleInspector) {
            self.inspector.toggle();
            info!(
                "Frame inspector {}",
                if self.inspector.enabled { "on" } else { "off" }
            );
        }

        if input.just_pressed(Action::SingleStep) {
            self.inspector.request_step();
        }
    }

    /// Put the character back at the respawn point and restart the starting level.
    pub fn reset(&mut self) {
        let respawn = self.config.respawn_position();
        self.character.position = respawn;
        self.character.velocity.y = 0.0;
        self.character.update_hitbox(&self.config.movement);
        self.vfx.clear();

        let starting = self.config.starting_level.clone();
        self.load_level(&starting);
        info!("Reset to {} at {}", starting, respawn);
    }

    /// Follow the neighbour link matching a raised exit flag. All flags are cleared either way.
    pub fn check_room_change(&mut self) {
        let pending = self.character.exits.pending();
        self.character.exits.clear();

        let Some(direction) = pending else {
            return;
        };

        let Some(neighbour) = self.current_level().neighbour(direction) else {
            debug!(
                "{} has no neighbour to the {:?}",
                self.current_level().name,
                direction
            );
            return;
        };

        let Some(index) = self.world.level_index_by_id(&neighbour.level_id) else {
            warn!(
                "{} links {:?} to unknown level {}",
                self.current_level().name,
                direction,
                neighbour.level_id
            );
            return;
        };

        info!(
            "Room change {:?}: {} -> {}",
            direction,
            self.current_level().name,
            self.world
                .level_name_by_id(&neighbour.level_id)
                .unwrap_or_default()
        );
        self.enter_level(index);
    }

    fn tick(&mut self, delta: f32, input: &ActionInput) {
        self.trigger_effects();

        if self.character.is_dead {
            info!("Character died in {}", self.current_level().name);
            let respawn = self.config.respawn_position();
            self.character.respawn(respawn, &self.config.movement);
        }

        let area = self.config.play_area;
        let level = &mut self.world.levels[self.current_level];
        let bounds = level.visible_bounds(Vec2::new(area.width, area.height));

        self.character.tick(delta, level, input, &self.config.movement, area);
        level.tick(delta, &mut self.rng, &self.config.particles, bounds);

        self.current_frame += 1;
        if self.character.last_action != LastAction::None {
            self.last_action_frame = self.absolute_frame;
        }
    }

    fn trigger_effects(&mut self) {
        let hitbox = self.character.hitbox;

        if self.character.last_action == LastAction::Jump {
            // Dust sits under the feet, centred on the hitbox.
            let anchor = Vec2::new(
                hitbox.center().x - VFX_CELL_SIZE / 2.0,
                hitbox.bottom() - VFX_CELL_SIZE,
            );
            self.vfx.spawn(VfxKind::Jump, anchor);
        }

        if self.character.is_dead {
            let anchor = hitbox.center() - Vec2::splat(VFX_CELL_SIZE / 2.0);
            self.vfx.spawn(VfxKind::Death, anchor);
        }
    }

    fn log_state(&self, input: &ActionInput) {
        let c = &self.character;
        info!("=======");
        info!(
            "frame: {} (sim {}), state: {:?}",
            self.absolute_frame, self.current_frame, self.state
        );
        info!("level: {}", self.current_level().name);
        info!("position: {}, velocity: {}", c.position, c.velocity);
        info!(
            "on_ground: {}, running: {}, jumping: {}, falling: {}",
            c.on_ground, c.is_running, c.is_jumping, c.is_falling
        );
        info!("exits: {:?}", c.exits);
        info!(
            "input: left {}, right {}, jump {}",
            input.held(Action::MoveLeft),
            input.held(Action::MoveRight),
            input.held(Action::Jump)
        );
    }
}
