//! Loader for the map document and the RON gameplay configuration.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::{CONFIG_SCHEMA_VERSION, GameplayDefaults};
use super::ldtk::LdtkWorld;
use crate::level::World;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Read and convert the whole map document.
pub fn load_world(path: &Path) -> Result<World, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let world = parse_world(&file_name, &contents)?;
    info!(
        "Loaded world {} with {} levels from {}",
        world.id,
        world.levels.len(),
        file_name
    );
    Ok(world)
}

/// Parse a map document already held in memory.
pub fn parse_world(file_name: &str, contents: &str) -> Result<World, ContentLoadError> {
    let raw: LdtkWorld = serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    Ok(World::from(raw))
}

/// Load the gameplay configuration. A missing file yields the built-in defaults; a file that
/// exists but does not parse is an error.
pub fn load_gameplay_defaults(path: &Path) -> Result<GameplayDefaults, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using built-in gameplay defaults", file_name);
            return Ok(GameplayDefaults::default());
        }
        Err(e) => {
            return Err(ContentLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    parse_gameplay_defaults(&file_name, &contents)
}

pub fn parse_gameplay_defaults(
    file_name: &str,
    contents: &str,
) -> Result<GameplayDefaults, ContentLoadError> {
    let config: GameplayDefaults = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if config.schema_version > CONFIG_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Unsupported schema_version {} (newest known is {})",
                config.schema_version, CONFIG_SCHEMA_VERSION
            ),
        });
    }

    Ok(config)
}
