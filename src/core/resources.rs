//! Core domain: launch options and run conditions.

use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::Game;

pub const DEFAULT_MAP_PATH: &str = "assets/levels/world.ldtk";
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/gameplay_defaults.ron";

/// Command-line choices made before the app starts.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub map_path: PathBuf,
    pub config_path: PathBuf,
    /// Verbose per-frame logging and hitbox outlines.
    pub debug: bool,
    /// Problems found while parsing, logged once the log plugin is up.
    pub warnings: Vec<String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            debug: false,
            warnings: Vec::new(),
        }
    }
}

impl LaunchOptions {
    /// Parse `--debug`, `--map <path>`, and `--config <path>`. Unknown arguments are skipped and
    /// recorded in `warnings`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => options.debug = true,
                "--map" => match args.next() {
                    Some(path) => options.map_path = PathBuf::from(path),
                    None => options.warnings.push("--map expects a path".to_string()),
                },
                "--config" => match args.next() {
                    Some(path) => options.config_path = PathBuf::from(path),
                    None => options.warnings.push("--config expects a path".to_string()),
                },
                other => options
                    .warnings
                    .push(format!("Ignoring unknown argument {}", other)),
            }
        }

        options
    }
}

/// Run condition: the game finished loading.
pub fn game_ready(game: Option<Res<Game>>) -> bool {
    game.is_some()
}

