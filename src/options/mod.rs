//! Centralized camera-control options with TOML preset support.
//!
//! All tweakable settings (orbit geometry, gesture speeds, per-device
//! bindings) are consolidated here. Options serialize to/from TOML so a
//! host can ship control presets.

mod bindings;
mod gestures;
mod rig;

use std::path::Path;

pub use bindings::{
    KeyboardOptions, MouseDragBinding, MouseOptions, MouseZoomBinding,
    TouchDragBinding, TouchOptions, TouchZoomBinding,
};
pub use gestures::GestureOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[mouse]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit geometry, projection, and movement-plane parameters.
    pub rig: RigOptions,
    /// Gesture enable flags and speed multipliers.
    pub gestures: GestureOptions,
    /// Touch device configuration.
    pub touch: TouchOptions,
    /// Mouse device configuration.
    pub mouse: MouseOptions,
    /// Keyboard device configuration.
    pub keyboard: KeyboardOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitaError> {
        log::info!("loading options from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(OrbitaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbitaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitaError> {
        log::info!("saving options to {}", path.display());
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitaError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
