// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named scale types, built-in and user-defined.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::key::Mode;
use super::pitch::PitchClass;
use super::scale::{Scale, ScaleType, DEGREES};
use crate::error::{Result, TheoryError};

/// Custom scale definitions that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Semitones from root, starting with 0
    pub steps: [i32; DEGREES],
}

impl CustomScaleDefinition {
    pub fn to_scale_type(&self) -> Result<ScaleType> {
        ScaleType::custom(self.name.clone(), self.steps)
    }
}

/// Registry for custom scale types
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, ScaleType>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale, replacing any earlier one with the same name
    pub fn register(&mut self, def: &CustomScaleDefinition) -> Result<()> {
        let scale_type = def.to_scale_type()?;
        debug!(name = %def.name, steps = ?def.steps, "registered custom scale");
        if self.custom_scales.insert(def.name.clone(), scale_type).is_some() {
            warn!(name = %def.name, "custom scale replaced an earlier definition");
        }
        Ok(())
    }

    /// Look up a scale type by name (checks custom first, then the modes)
    pub fn get(&self, name: &str) -> Option<ScaleType> {
        if let Some(scale_type) = self.custom_scales.get(name) {
            return Some(scale_type.clone());
        }
        name.parse::<Mode>().ok().map(Mode::scale_type)
    }

    pub fn require(&self, name: &str) -> Result<ScaleType> {
        self.get(name)
            .ok_or_else(|| TheoryError::UnknownScale(name.to_string()))
    }

    pub fn scale(&self, root: PitchClass, name: &str) -> Option<Scale> {
        self.get(name).map(|scale_type| Scale::new(root, scale_type))
    }

    /// List all available scale names
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();
        names.extend(Mode::ALL.iter().map(|m| m.name().to_lowercase()));
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harmonic_minor() -> CustomScaleDefinition {
        CustomScaleDefinition {
            name: "harmonic_minor".to_string(),
            steps: [0, 2, 3, 5, 7, 8, 11],
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ScaleRegistry::new();
        registry.register(&harmonic_minor()).unwrap();

        let scale_type = registry.get("harmonic_minor").unwrap();
        assert_eq!(scale_type.steps(), &[0, 2, 3, 5, 7, 8, 11]);
        assert_eq!(scale_type.label(), "harmonic_minor");
    }

    #[test]
    fn test_builtin_fallback() {
        let registry = ScaleRegistry::new();
        assert_eq!(registry.get("dorian"), Some(ScaleType::dorian()));
        assert_eq!(registry.get("Aeolian"), Some(ScaleType::minor()));
        assert_eq!(registry.get("bebop"), None);
        assert_eq!(
            registry.require("bebop"),
            Err(TheoryError::UnknownScale("bebop".to_string()))
        );
    }

    #[test]
    fn test_custom_shadows_builtin() {
        let mut registry = ScaleRegistry::new();
        registry
            .register(&CustomScaleDefinition {
                name: "dorian".to_string(),
                steps: [0, 2, 3, 5, 7, 9, 11],
            })
            .unwrap();
        assert_eq!(registry.get("dorian").unwrap().steps()[6], 11);
    }

    #[test]
    fn test_invalid_definition_rejected() {
        let mut registry = ScaleRegistry::new();
        let result = registry.register(&CustomScaleDefinition {
            name: "broken".to_string(),
            steps: [0, 2, 2, 5, 7, 8, 11],
        });
        assert!(matches!(result, Err(TheoryError::InvalidScaleSteps { .. })));
        assert_eq!(registry.get("broken"), None);
    }

    #[test]
    fn test_scale_lookup() {
        let mut registry = ScaleRegistry::new();
        registry.register(&harmonic_minor()).unwrap();
        let scale = registry.scale(PitchClass::A, "harmonic_minor").unwrap();
        assert_eq!(scale.note_names()[6], PitchClass::G_SHARP);
    }

    #[test]
    fn test_available() {
        let mut registry = ScaleRegistry::new();
        registry.register(&harmonic_minor()).unwrap();
        let names = registry.available();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"harmonic_minor".to_string()));
        assert!(names.contains(&"mixolydian".to_string()));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
