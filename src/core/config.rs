//! User-facing configuration for naming preferences.
//!
//! Preferences are immutable for the duration of a run: constructed once
//! from defaults, a named preset, or a JSON file, then passed by reference
//! into the policy engine. Invalid preferences are fatal at load time,
//! before any file is touched.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{NameshiftError, Result};
use crate::core::style::NamingStyle;

/// Per-identifier-kind naming preferences.
///
/// Defaults mirror a mixed codebase convention: snake_case data names,
/// camelCase callables, PascalCase classes, SCREAMING_SNAKE_CASE constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingPreferences {
    /// Target style for local and module-level variables
    pub variables: NamingStyle,
    /// Target style for free functions
    pub functions: NamingStyle,
    /// Target style for classes
    pub classes: NamingStyle,
    /// Target style for methods
    pub methods: NamingStyle,
    /// Target style for function and method arguments
    pub arguments: NamingStyle,
    /// Target style for class and instance attributes
    pub attributes: NamingStyle,
    /// Target style for constants
    pub constants: NamingStyle,
    /// Leave `_private` and `__dunder__` names untouched
    pub preserve_private: bool,
    /// Leave ALL_CAPS names untouched
    pub preserve_constants: bool,
}

impl Default for NamingPreferences {
    fn default() -> Self {
        Self {
            variables: NamingStyle::Snake,
            functions: NamingStyle::Camel,
            classes: NamingStyle::Pascal,
            methods: NamingStyle::Camel,
            arguments: NamingStyle::Snake,
            attributes: NamingStyle::Snake,
            constants: NamingStyle::ScreamingSnake,
            preserve_private: true,
            preserve_constants: true,
        }
    }
}

/// Names of the shipped preset configurations.
pub const PRESET_NAMES: [&str; 3] = ["python_standard", "java_style", "mixed_style"];

impl NamingPreferences {
    /// A uniform preference set with every kind targeting the same style.
    pub fn uniform(style: NamingStyle) -> Self {
        Self {
            variables: style,
            functions: style,
            classes: style,
            methods: style,
            arguments: style,
            attributes: style,
            constants: style,
            ..Self::default()
        }
    }

    /// Look up a named preset, or `None` if the name is unknown.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "python_standard" => Some(Self {
                variables: NamingStyle::Snake,
                functions: NamingStyle::Snake,
                classes: NamingStyle::Pascal,
                methods: NamingStyle::Snake,
                arguments: NamingStyle::Snake,
                attributes: NamingStyle::Snake,
                constants: NamingStyle::ScreamingSnake,
                ..Self::default()
            }),
            "java_style" => Some(Self {
                variables: NamingStyle::Camel,
                functions: NamingStyle::Camel,
                classes: NamingStyle::Pascal,
                methods: NamingStyle::Camel,
                arguments: NamingStyle::Camel,
                attributes: NamingStyle::Camel,
                constants: NamingStyle::ScreamingSnake,
                ..Self::default()
            }),
            "mixed_style" => Some(Self::default()),
            _ => None,
        }
    }

    /// Parse preferences from a JSON value.
    ///
    /// The fields may appear at the top level or nested under a
    /// `naming_preferences` key. Unknown styles and unknown fields are
    /// rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let payload = match value {
            serde_json::Value::Object(mut map) => match map.remove("naming_preferences") {
                Some(nested) => nested,
                None => serde_json::Value::Object(map),
            },
            other => other,
        };

        serde_json::from_value(payload).map_err(|e| {
            NameshiftError::config_field(
                format!("invalid naming preferences: {e}"),
                "naming_preferences",
            )
        })
    }

    /// Load preferences from a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NameshiftError::io(format!("failed to read config file {}", path.display()), e)
        })?;

        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            NameshiftError::config(format!("malformed JSON in {}: {e}", path.display()))
        })?;

        Self::from_json(value)
    }

    /// Serialize preferences to the on-disk JSON shape.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "naming_preferences": self })
    }

    /// Save preferences to a JSON file.
    pub fn save_json_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| NameshiftError::internal(format!("failed to serialize preferences: {e}")))?;

        fs::write(path, content).map_err(|e| {
            NameshiftError::io(format!("failed to write config file {}", path.display()), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_convention() {
        let prefs = NamingPreferences::default();
        assert_eq!(prefs.variables, NamingStyle::Snake);
        assert_eq!(prefs.functions, NamingStyle::Camel);
        assert_eq!(prefs.classes, NamingStyle::Pascal);
        assert_eq!(prefs.constants, NamingStyle::ScreamingSnake);
        assert!(prefs.preserve_private);
        assert!(prefs.preserve_constants);
    }

    #[test]
    fn test_presets_exist() {
        for name in PRESET_NAMES {
            assert!(NamingPreferences::preset(name).is_some(), "missing preset {name}");
        }
        assert!(NamingPreferences::preset("klingon").is_none());

        let python = NamingPreferences::preset("python_standard").unwrap();
        assert_eq!(python.methods, NamingStyle::Snake);
        let java = NamingPreferences::preset("java_style").unwrap();
        assert_eq!(java.attributes, NamingStyle::Camel);
    }

    #[test]
    fn test_from_json_top_level_and_nested() {
        let top = serde_json::json!({ "functions": "snake_case" });
        let prefs = NamingPreferences::from_json(top).unwrap();
        assert_eq!(prefs.functions, NamingStyle::Snake);
        // Unspecified fields keep their defaults
        assert_eq!(prefs.classes, NamingStyle::Pascal);

        let nested = serde_json::json!({
            "naming_preferences": { "classes": "camelCase", "preserve_private": false }
        });
        let prefs = NamingPreferences::from_json(nested).unwrap();
        assert_eq!(prefs.classes, NamingStyle::Camel);
        assert!(!prefs.preserve_private);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let bad = serde_json::json!({ "variables": "SHOUTY-KEBAB" });
        let err = NamingPreferences::from_json(bad).unwrap_err();
        assert!(!err.is_recoverable(), "invalid preferences must be fatal");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let bad = serde_json::json!({ "varaibles": "snake_case" });
        assert!(NamingPreferences::from_json(bad).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let prefs = NamingPreferences::preset("java_style").unwrap();
        let restored = NamingPreferences::from_json(prefs.to_json()).unwrap();
        assert_eq!(prefs, restored);
    }
}
