use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ComponentRegistry, EditorError, Label};

pub const DEFAULT_CONFIG_NAME: &str = "strata.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Start new sessions with one empty text block
    #[serde(default = "default_seed_block")]
    pub seed_block: bool,

    /// Allow deleting the last remaining block
    #[serde(default)]
    pub allow_empty_document: bool,

    /// Components available for insertion
    #[serde(default = "default_components")]
    pub components: Vec<ComponentEntry>,
}

fn default_seed_block() -> bool {
    true
}

fn default_components() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry {
            name: "Component1".to_string(),
            label: "📊 Chart Component".to_string(),
        },
        ComponentEntry {
            name: "Component2".to_string(),
            label: "📷 Image Component".to_string(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component type stored in blocks
    pub name: String,

    /// Text shown when the component is rendered
    pub label: String,
}

impl EditorConfig {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load `strata.config.json` from a directory, falling back to defaults
    pub fn load_or_default(dir: &Path) -> Result<Self, EditorError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the component registry described by this config
    pub fn registry(&self) -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        for entry in &self.components {
            registry.register(entry.name.clone(), Label(entry.label.clone()));
        }
        registry
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            seed_block: default_seed_block(),
            allow_empty_document: false,
            components: default_components(),
        }
    }
}
