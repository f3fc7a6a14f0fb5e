//! Content domain: map document records, gameplay configuration, and their loaders.

mod data;
pub mod ldtk;
mod loader;


pub use data::{GameplayDefaults, PlayArea};
pub use ldtk::FieldValue;
pub use loader::{
    ContentLoadError, load_gameplay_defaults, load_world, parse_gameplay_defaults, parse_world,
};
