//! Toolbar feature flags
//!
//! The resolved [`ToolbarConfig`] gates which actions are available. It is
//! built once from defaults plus user overrides and never mutated.

use std::collections::BTreeMap;

/// A toolbar feature group that can be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    UndoRedo,
    FontSize,
    FontFamily,
    Formatting,
    Colors,
    Alignment,
    Lists,
    Insert,
    Blocks,
    Table,
    FindReplace,
    Fullscreen,
    Export,
    Advanced,
}

impl Feature {
    pub const ALL: [Feature; 14] = [
        Feature::UndoRedo,
        Feature::FontSize,
        Feature::FontFamily,
        Feature::Formatting,
        Feature::Colors,
        Feature::Alignment,
        Feature::Lists,
        Feature::Insert,
        Feature::Blocks,
        Feature::Table,
        Feature::FindReplace,
        Feature::Fullscreen,
        Feature::Export,
        Feature::Advanced,
    ];

    /// Key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            Feature::UndoRedo => "undoRedo",
            Feature::FontSize => "fontSize",
            Feature::FontFamily => "fontFamily",
            Feature::Formatting => "formatting",
            Feature::Colors => "colors",
            Feature::Alignment => "alignment",
            Feature::Lists => "lists",
            Feature::Insert => "insert",
            Feature::Blocks => "blocks",
            Feature::Table => "table",
            Feature::FindReplace => "findReplace",
            Feature::Fullscreen => "fullscreen",
            Feature::Export => "export",
            Feature::Advanced => "advanced",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Map a surface format command to the feature that gates it
pub fn feature_for_command(command: &str) -> Feature {
    match command {
        "undo" | "redo" => Feature::UndoRedo,
        "bold" | "italic" | "underline" | "strikethrough" => Feature::Formatting,
        "fontSize" => Feature::FontSize,
        "fontName" => Feature::FontFamily,
        "foreColor" | "hiliteColor" | "backColor" => Feature::Colors,
        "justifyLeft" | "justifyCenter" | "justifyRight" | "justifyFull" => Feature::Alignment,
        "insertUnorderedList" | "insertOrderedList" | "indent" | "outdent" => Feature::Lists,
        "formatBlock" => Feature::Blocks,
        "insertImage" | "insertHorizontalRule" | "createLink" => Feature::Insert,
        _ => Feature::Advanced,
    }
}

/// Resolved feature flags: every known feature defaults to enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarConfig {
    enabled: BTreeMap<Feature, bool>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            enabled: Feature::ALL.into_iter().map(|f| (f, true)).collect(),
        }
    }
}

impl ToolbarConfig {
    /// Merge overrides onto the defaults. Override wins per key; unknown keys are ignored.
    pub fn resolve(overrides: &BTreeMap<String, bool>) -> Self {
        let mut config = Self::default();
        for (key, &on) in overrides {
            match Feature::from_key(key) {
                Some(feature) => {
                    config.enabled.insert(feature, on);
                }
                None => tracing::debug!(key = %key, "ignoring unknown toolbar feature"),
            }
        }
        config
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled.get(&feature).copied().unwrap_or(true)
    }

    /// Features that are switched off
    pub fn disabled(&self) -> impl Iterator<Item = Feature> + '_ {
        self.enabled
            .iter()
            .filter(|(_, on)| !**on)
            .map(|(feature, _)| *feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_defaults_all_enabled() {
        let config = ToolbarConfig::resolve(&BTreeMap::new());
        for feature in Feature::ALL {
            assert!(config.is_enabled(feature), "{:?} should default on", feature);
        }
        assert_eq!(config.disabled().count(), 0);
    }

    #[test]
    fn test_override_wins_per_key() {
        let config = ToolbarConfig::resolve(&overrides(&[("colors", false), ("table", true)]));
        assert!(!config.is_enabled(Feature::Colors));
        assert!(config.is_enabled(Feature::Table));
        assert!(config.is_enabled(Feature::Lists));
        assert_eq!(config.disabled().collect::<Vec<_>>(), vec![Feature::Colors]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = ToolbarConfig::resolve(&overrides(&[("sparkles", false)]));
        assert_eq!(config, ToolbarConfig::default());
    }

    #[test]
    fn test_keys_roundtrip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_key(feature.key()), Some(feature));
        }
        assert_eq!(Feature::from_key("UndoRedo"), None);
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(feature_for_command("bold"), Feature::Formatting);
        assert_eq!(feature_for_command("fontName"), Feature::FontFamily);
        assert_eq!(feature_for_command("hiliteColor"), Feature::Colors);
        assert_eq!(feature_for_command("justifyFull"), Feature::Alignment);
        assert_eq!(feature_for_command("insertOrderedList"), Feature::Lists);
        assert_eq!(feature_for_command("formatBlock"), Feature::Blocks);
        assert_eq!(feature_for_command("removeFormat"), Feature::Advanced);
    }
}
