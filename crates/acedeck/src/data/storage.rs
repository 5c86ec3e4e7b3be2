//! Data directory layout (native only)
//!
//! ```text
//! ~/.acedeck/
//!   config.yaml        # Preferences (boundary policy)
//!   keybindings.yaml   # Key strings per action
//!   acedeck.log        # Trace output
//! ```
//!
//! Navigation position is never written here.

#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use acedeck_core::BoundaryPolicy;
use serde::{Deserialize, Serialize};

#[cfg(feature = "native")]
use super::keybindings_data::KeybindingsConfig;

/// Preferences stored in config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Behavior at either end of the deck; `None` uses the built-in default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryPolicy>,
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Handle on the data directory (native only)
#[cfg(feature = "native")]
pub struct DataDirectory {
    root: PathBuf,
}

#[cfg(feature = "native")]
impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default location (~/.acedeck/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".acedeck")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn keybindings_path(&self) -> PathBuf {
        self.root.join("keybindings.yaml")
    }

    /// Create the directory and seed a default keybindings file so users
    /// have something to edit.
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", self.root.display(), e))
        })?;

        let path = self.keybindings_path();
        if !path.exists() {
            let yaml = serde_saphyr::to_string(&KeybindingsConfig::default()).map_err(|e| {
                StorageError::Serialize(format!("Failed to serialize keybindings: {}", e))
            })?;
            fs::write(&path, yaml).map_err(|e| {
                StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "Wrote default keybindings");
        }
        Ok(())
    }

    /// Load config.yaml. A missing file is the default configuration.
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(DataConfig::default());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(DataConfig::default());
        }
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Load keybindings.yaml, falling back to defaults on any problem.
    pub fn load_keybindings(&self) -> KeybindingsConfig {
        let path = self.keybindings_path();
        let Ok(content) = fs::read_to_string(&path) else {
            return KeybindingsConfig::default();
        };
        match serde_saphyr::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings, using defaults");
                KeybindingsConfig::default()
            }
        }
    }
}
