//! Level and config files.
//!
//! Both are plain serde documents; the format is picked from the file
//! extension. Missing fields fall back to defaults, so a config file only
//! needs the tunables it changes.

use std::path::Path;

use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use seeker_core::{Aabb, Anchor, Collider, SeekerConfig};

use crate::LevelError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelFile {
    pub name: String,
    pub anchors: Vec<Anchor>,
    pub colliders: Vec<Collider>,
    pub doors: Vec<DoorSpec>,
    pub target: TargetScript,
}

/// A door and the box that blocks the doorway while it is shut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub name: String,
    pub position: Vec3,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub blocker: Option<Aabb>,
}

/// Path the target walks, eye position per waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetScript {
    pub waypoints: Vec<Vec3>,
    /// Units per second.
    pub speed: f32,
    /// Start over from the first waypoint after the last one.
    pub looping: bool,
    /// Ticks before the target appears.
    pub appear_after: u64,
}

impl Default for TargetScript {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            speed: 1.5,
            looping: true,
            appear_after: 0,
        }
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Result<Format, LevelError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(LevelError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read and deserialize a YAML or JSON document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LevelError> {
    let format = format_of(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| LevelError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        Format::Json => serde_json::from_str(&content).map_err(|source| LevelError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn load_level(path: &Path) -> Result<LevelFile, LevelError> {
    let level: LevelFile = load_document(path)?;
    tracing::debug!(
        level = %level.name,
        anchors = level.anchors.len(),
        colliders = level.colliders.len(),
        doors = level.doors.len(),
        "level loaded"
    );
    Ok(level)
}

/// Load and validate a seeker config.
pub fn load_config(path: &Path) -> Result<SeekerConfig, LevelError> {
    let config: SeekerConfig = load_document(path)?;
    config.validate()?;
    Ok(config)
}
