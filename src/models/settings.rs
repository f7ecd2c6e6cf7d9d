use ink_remap::{ChannelMapping, ConfigurationError, Destination};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default export quality (rasterization scale).
pub const DEFAULT_QUALITY: u32 = 4;

/// Lowest accepted export quality.
pub const MIN_QUALITY: u32 = 1;

/// Highest accepted export quality.
pub const MAX_QUALITY: u32 = 8;

/// File name used when `OUT_OF_INK_SETTINGS` is not set.
pub const DEFAULT_SETTINGS_FILE: &str = "out-of-ink.yaml";

/// Error reading or writing the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid setting value: {0}")]
    Value(#[source] serde_yaml::Error),

    #[error("Invalid setting: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Last-used channel mapping and export quality, persisted between runs.
///
/// Stored as YAML under fixed keys:
///
/// ```yaml
/// cyan-channel: cyan
/// magenta-channel: magenta
/// yellow-channel: yellow
/// quality: 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "cyan-channel", default = "default_cyan")]
    pub cyan: Destination,

    #[serde(rename = "magenta-channel", default = "default_magenta")]
    pub magenta: Destination,

    #[serde(rename = "yellow-channel", default = "default_yellow")]
    pub yellow: Destination,

    #[serde(default = "default_quality")]
    pub quality: u32,
}

fn default_cyan() -> Destination {
    Destination::Cyan
}

fn default_magenta() -> Destination {
    Destination::Magenta
}

fn default_yellow() -> Destination {
    Destination::Yellow
}

fn default_quality() -> u32 {
    DEFAULT_QUALITY
}

/// Check an export quality factor.
pub fn validate_quality(quality: u32) -> Result<u32, ConfigurationError> {
    if (MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        Ok(quality)
    } else {
        Err(ConfigurationError::InvalidQuality {
            value: quality,
            min: MIN_QUALITY,
            max: MAX_QUALITY,
        })
    }
}

impl Settings {
    /// Settings file location: `OUT_OF_INK_SETTINGS`, or `out-of-ink.yaml`
    /// in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var("OUT_OF_INK_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    pub fn mapping(&self) -> ChannelMapping {
        ChannelMapping::new(self.cyan, self.magenta, self.yellow)
    }

    pub fn set_mapping(&mut self, mapping: ChannelMapping) {
        self.cyan = mapping.cyan;
        self.magenta = mapping.magenta;
        self.yellow = mapping.yellow;
    }

    /// Parse settings from YAML, rejecting unknown mapping tokens,
    /// wrongly typed values and out-of-range quality.
    ///
    /// Syntax errors are `SettingsError::Yaml`; a well-formed document whose
    /// values do not fit is `SettingsError::Value`. An empty document is the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, SettingsError> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_value(value).map_err(SettingsError::Value)?;
        validate_quality(settings.quality)?;
        Ok(settings)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A file that is not valid YAML is
    /// logged and replaced by defaults; a well-formed file carrying an
    /// invalid value is an error, so a bad mapping is never silently
    /// swapped for the identity.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        match Self::from_yaml(&content) {
            Ok(settings) => {
                tracing::info!(
                    path = %path.display(),
                    mapping = %settings.mapping(),
                    quality = settings.quality,
                    "Loaded settings"
                );
                Ok(settings)
            }
            Err(SettingsError::Yaml(e)) => {
                tracing::warn!(%e, path = %path.display(), "Failed to parse settings, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Write settings to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        validate_quality(self.quality)?;
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        tracing::debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Remove the settings file and return the defaults.
    pub fn reset(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::info!(path = %path.display(), "Settings reset"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(Self::default())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cyan: Destination::Cyan,
            magenta: Destination::Magenta,
            yellow: Destination::Yellow,
            quality: DEFAULT_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert!(settings.mapping().is_identity());
        assert_eq!(settings.quality, 4);
    }

    #[test]
    fn test_deserialize_settings() {
        let yaml = r#"
cyan-channel: black
magenta-channel: "cyan+yellow"
yellow-channel: none
quality: 2
"#;

        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings.cyan, Destination::Black);
        assert_eq!(settings.magenta, Destination::CyanYellow);
        assert_eq!(settings.yellow, Destination::None);
        assert_eq!(settings.quality, 2);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = Settings::from_yaml("magenta-channel: none\n").unwrap();

        assert_eq!(settings.cyan, Destination::Cyan);
        assert_eq!(settings.magenta, Destination::None);
        assert_eq!(settings.yellow, Destination::Yellow);
        assert_eq!(settings.quality, DEFAULT_QUALITY);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let result = Settings::from_yaml("cyan-channel: turquoise\n");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown channel mapping 'turquoise'"));
    }

    #[test]
    fn test_wrongly_typed_value_rejected() {
        assert!(matches!(
            Settings::from_yaml("magenta-channel: [cyan]\n"),
            Err(SettingsError::Value(_))
        ));
        assert!(matches!(
            Settings::from_yaml("quality: high\n"),
            Err(SettingsError::Value(_))
        ));
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml("# nothing\n").unwrap(), Settings::default());
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        assert!(matches!(
            Settings::from_yaml("quality: 0\n"),
            Err(SettingsError::Configuration(
                ConfigurationError::InvalidQuality { value: 0, .. }
            ))
        ));
        assert!(Settings::from_yaml("quality: 9\n").is_err());
    }

    #[test]
    fn test_validate_quality_bounds() {
        assert_eq!(validate_quality(1), Ok(1));
        assert_eq!(validate_quality(8), Ok(8));
        assert!(validate_quality(0).is_err());
        assert!(validate_quality(9).is_err());
    }

    #[test]
    fn test_save_load_and_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut settings = Settings::default();
        settings.set_mapping(ChannelMapping::from_tokens("none", "magenta", "black").unwrap());
        settings.quality = 6;
        settings.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("cyan-channel: none"));
        assert!(written.contains("yellow-channel: black"));

        assert_eq!(Settings::load(&path).unwrap(), settings);

        assert_eq!(Settings::reset(&path).unwrap(), Settings::default());
        assert!(!path.exists());
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_garbage_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "cyan-channel: [unclosed").unwrap();

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_invalid_token_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "yellow-channel: gold\n").unwrap();

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_load_sequence_value_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "cyan-channel: black\nmagenta-channel: [cyan]\n").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Value(_))
        ));
        assert!(path.exists());
    }
}
