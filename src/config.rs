//! On-disk demo configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Startup configuration, persisted as JSON next to the binary.
/// Missing file or missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Scene index selected at startup
    pub start_scene: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            start_scene: 0,
        }
    }
}

impl DemoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}
