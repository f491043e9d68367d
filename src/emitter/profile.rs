use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::emitter::EmitterError;

/// Static flight characteristics attached to every record of a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub speed: f64,
}

/// Identifier to profile mapping. Tracks without an entry fall back to the
/// ground profile (altitude 0, speed 0).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileTable {
    #[serde(default)]
    profiles: HashMap<String, Profile>,
}

impl ProfileTable {
    /// The overrides the original feed shipped with: one airborne unit.
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "WS61-4".to_string(),
            Profile {
                altitude: 300.0,
                speed: 20.0,
            },
        );
        Self { profiles }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EmitterError> {
        let content = std::fs::read_to_string(path)?;
        let table: ProfileTable = serde_yaml::from_str(&content)?;
        Ok(table)
    }

    pub fn lookup(&self, id: &str) -> Profile {
        self.profiles.get(id).copied().unwrap_or_default()
    }
}
