//! Raw records of the LDtk-style map document.
//!
//! These mirror the JSON layout one-to-one and are only read at load time. Unknown keys are
//! ignored and missing optional keys fall back to empty values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkWorld {
    pub iid: String,
    #[serde(default)]
    pub levels: Vec<LdtkLevel>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkLevel {
    pub iid: String,
    pub identifier: String,
    #[serde(rename = "pxWid", default)]
    pub px_width: i64,
    #[serde(rename = "pxHei", default)]
    pub px_height: i64,
    #[serde(rename = "bgRelPath", default)]
    pub bg_rel_path: Option<String>,
    #[serde(rename = "__neighbours", default)]
    pub neighbours: Vec<LdtkNeighbour>,
    #[serde(rename = "layerInstances", default)]
    pub layer_instances: Option<Vec<LdtkLayer>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkNeighbour {
    #[serde(rename = "levelIid")]
    pub level_iid: String,
    /// Compass letter: "n", "e", "s", "w" (LDtk also emits depth markers such as "<" and ">").
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkLayer {
    #[serde(default)]
    pub iid: String,
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__tilesetRelPath", default)]
    pub tileset_rel_path: Option<String>,
    #[serde(rename = "gridTiles", default)]
    pub grid_tiles: Vec<LdtkGridTile>,
    #[serde(rename = "autoLayerTiles", default)]
    pub auto_layer_tiles: Vec<LdtkGridTile>,
    #[serde(rename = "entityInstances", default)]
    pub entity_instances: Vec<LdtkEntity>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LdtkGridTile {
    /// Pixel position of the cell inside the level.
    pub px: [f32; 2],
    /// Pixel offset of the source cell inside the tileset image.
    pub src: [f32; 2],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkEntity {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(default)]
    pub iid: String,
    pub px: [f32; 2],
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(rename = "fieldInstances", default)]
    pub field_instances: Vec<LdtkFieldInstance>,
}

impl LdtkEntity {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.field_instances
            .iter()
            .find(|f| f.identifier == name)
            .map(|f| &f.value)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LdtkFieldInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__value", default)]
    pub value: FieldValue,
}

/// Typed custom field value; anything that is not a scalar lands in `Other`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}
