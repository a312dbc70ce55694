use review_prism_engine::{CueKeywords, FormatOptions, UnterminatedFence};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk formatter settings.
///
/// Everything is optional: a missing file or an empty table falls back to
/// the built-in behavior (flush unterminated fences, default bilingual
/// cue vocabulary).
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy for reports that end while still inside a code fence.
    pub unterminated_fence: UnterminatedFence,
    /// Extra cue keywords merged into the default table per category.
    pub cues: CueKeywords,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/review-prism");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Engine options carried by this config.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            unterminated_fence: self.unterminated_fence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/review-prism/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            unterminated_fence: UnterminatedFence::Discard,
            cues: CueKeywords {
                error: vec!["blocker".to_string()],
                ..Default::default()
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.unterminated_fence, deserialized.unterminated_fence);
        assert_eq!(original.cues, deserialized.cues);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from_path(dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "unterminated_fence = \"discard\"\n\n[cues]\nwarning = [\"nitpick\"]\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.unterminated_fence, UnterminatedFence::Discard);
        assert_eq!(config.cues.warning, vec!["nitpick".to_string()]);
        assert!(config.cues.error.is_empty());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cues]\ntip = [\"micro-opt\"]\n").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.unterminated_fence, UnterminatedFence::Flush);
        assert_eq!(config.cues.tip, vec!["micro-opt".to_string()]);
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "unterminated_fence = 42\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            unterminated_fence: UnterminatedFence::Discard,
            cues: CueKeywords::default(),
        };
        config.save_to_path(&path).unwrap();

        let reloaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(reloaded.unterminated_fence, UnterminatedFence::Discard);
    }
}
