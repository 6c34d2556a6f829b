// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration files for diatonic.
//!
//! A theory configuration names a key and, optionally, extra scale types.
//! Files are YAML unless their extension is `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::music::{CustomScaleDefinition, Key, Scale, ScaleRegistry};

/// Root configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TheoryConfig {
    /// Key to work in
    #[serde(default)]
    pub key: KeyConfig,
    /// Additional scale types, by name
    #[serde(default)]
    pub scales: Vec<CustomScaleDefinition>,
}

impl TheoryConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = if is_toml(path) {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        debug!(?path, key = %config.key.root, mode = %config.key.mode, "loaded theory config");
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration, choosing the format by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))?;
        debug!(?path, "saved theory config");
        Ok(())
    }

    /// The configured key
    pub fn key(&self) -> Result<Key> {
        Key::parse(&self.key.root, &self.key.mode)
            .with_context(|| format!("Invalid key: {} {}", self.key.root, self.key.mode))
    }

    /// A registry holding every configured scale
    pub fn registry(&self) -> Result<ScaleRegistry> {
        let mut registry = ScaleRegistry::new();
        for def in &self.scales {
            registry
                .register(def)
                .with_context(|| format!("Invalid scale definition: {}", def.name))?;
        }
        Ok(registry)
    }

    /// Scale `name` on the configured key's root, spelled like the key
    pub fn scale(&self, name: &str) -> Result<Scale> {
        let key = self.key()?;
        let scale_type = self.registry()?.require(name)?;
        Ok(Scale::new(key.root(), scale_type).with_preferred_accidental(key.preferred_accidental()))
    }

    /// Check that the key and every scale definition are usable
    pub fn validate(&self) -> Result<()> {
        self.key()?;
        self.registry()?;
        Ok(())
    }
}

/// Key settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    /// Tonic (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: String,
    /// Mode (e.g., "major", "minor", "dorian")
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_mode() -> String {
    "major".to_string()
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            mode: default_mode(),
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Load a configuration file and check it fully
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<TheoryConfig> {
    let config = TheoryConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{Mode, PitchClass};
    use tempfile::tempdir;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
key:
  root: "F#"
  mode: dorian

scales:
  - name: harmonic_minor
    steps: [0, 2, 3, 5, 7, 8, 11]
"#;

        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key.root, "F#");
        assert_eq!(config.scales.len(), 1);

        let key = config.key().unwrap();
        assert_eq!(key.root(), PitchClass::F_SHARP);
        assert_eq!(key.mode(), Mode::Dorian);

        let registry = config.registry().unwrap();
        assert!(registry.get("harmonic_minor").is_some());
    }

    #[test]
    fn test_parse_toml_config() {
        let text = r#"
[key]
root = "Bb"
mode = "major"

[[scales]]
name = "lydian_dominant"
steps = [0, 2, 4, 6, 7, 9, 10]
"#;

        let config = TheoryConfig::from_toml(text).unwrap();
        assert_eq!(config.key().unwrap().root(), PitchClass::B_FLAT);
        assert_eq!(config.scales[0].steps, [0, 2, 4, 6, 7, 9, 10]);
    }

    #[test]
    fn test_default_values() {
        let config = TheoryConfig::from_yaml("scales: []").unwrap();
        assert_eq!(config.key.root, "C");
        assert_eq!(config.key.mode, "major");

        let yaml = r#"
key:
  mode: minor
"#;
        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key.root, "C");
        assert_eq!(config.key().unwrap().mode(), Mode::Minor);
    }

    #[test]
    fn test_invalid_key() {
        let yaml = r#"
key:
  root: "H"
  mode: major
"#;
        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert!(config.key().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_scale_definition() {
        let yaml = r#"
scales:
  - name: broken
    steps: [0, 4, 2, 5, 7, 9, 11]
"#;
        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert!(config.registry().is_err());
    }

    #[test]
    fn test_scale_uses_key_spelling() {
        let yaml = r#"
key:
  root: "Eb"
  mode: major
"#;
        let config = TheoryConfig::from_yaml(yaml).unwrap();
        let scale = config.scale("minor").unwrap();
        assert_eq!(scale.note_names()[2], PitchClass::G_FLAT);
        assert!(config.scale("bebop").is_err());
    }

    #[test]
    fn test_round_trip() {
        let original = TheoryConfig {
            key: KeyConfig {
                root: "G".to_string(),
                mode: "mixolydian".to_string(),
            },
            scales: vec![CustomScaleDefinition {
                name: "melodic_minor".to_string(),
                steps: [0, 2, 3, 5, 7, 9, 11],
            }],
        };

        let yaml = original.to_yaml().unwrap();
        assert_eq!(TheoryConfig::from_yaml(&yaml).unwrap(), original);

        let toml_text = original.to_toml().unwrap();
        assert_eq!(TheoryConfig::from_toml(&toml_text).unwrap(), original);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config = TheoryConfig::default();

        for file in ["theory.yaml", "theory.toml"] {
            let path = dir.path().join(file);
            config.save(&path).unwrap();
            assert_eq!(TheoryConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_validate_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.yaml");

        fs::write(&file_path, "this is not valid yaml: [").unwrap();
        assert!(validate_config(&file_path).is_err());

        let file_path = dir.path().join("valid.yaml");
        fs::write(&file_path, "key:\n  root: A\n  mode: minor\n").unwrap();
        let config = validate_config(&file_path).unwrap();
        assert_eq!(config.key.mode, "minor");
    }
}
