// Chunk: docs/chunks/editor_config - Editor configuration file
//!
//! Editor configuration.
//!
//! Configuration is read from a JSON file. Every field has a default, so a
//! partial file only overrides what it names and a missing file means "all
//! defaults".
//!
//! ## File Location
//!
//! The config file is stored at `<config dir>/parsec/config.json`, e.g.
//! - macOS: `~/Library/Application Support/parsec/config.json`
//! - Linux: `~/.config/parsec/config.json`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use parsec_buffer::GapConfig;

/// Application name used for the config directory.
const APP_NAME: &str = "parsec";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for the editor view and its text buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in pixels.
    pub font_size: f32,
    /// Height of one rendered line in pixels.
    pub line_height: f32,
    /// Horizontal advance of one glyph in pixels (monospace).
    pub glyph_advance: f32,
    /// Width of the line-number gutter, in glyph columns.
    pub gutter_columns: usize,
    /// Space between the gutter and the text, in pixels.
    pub gutter_gap: f32,
    /// Bytes available to each frame's arena.
    pub frame_arena_bytes: usize,
    /// Gap sizing for newly created buffers.
    pub gap: GapConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 28.0,
            line_height: 28.0,
            glyph_advance: 16.8,
            gutter_columns: 3,
            gutter_gap: 28.0,
            frame_arena_bytes: 64 * 1024,
            gap: GapConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads the config at `path`, falling back to defaults if the file does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(?path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "loaded config");
        Ok(config)
    }

    /// Loads the config from the default location.
    ///
    /// Returns defaults when no config directory can be determined.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Width of the gutter in pixels, excluding the gap after it.
    pub fn gutter_width(&self) -> f32 {
        self.gutter_columns as f32 * self.glyph_advance
    }

    /// X coordinate where line text starts.
    pub fn text_origin_x(&self) -> f32 {
        self.gutter_width() + self.gutter_gap
    }
}

/// Returns the default config file path, if the platform has a config dir.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.gutter_columns, 3);
        assert_eq!(config.gap, GapConfig::default());
        assert!((config.gutter_width() - 50.4).abs() < 1e-3);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config =
            EditorConfig::from_json(r#"{ "line_height": 20.0, "gap": { "gap_increment": 16 } }"#)
                .unwrap();
        assert_eq!(config.line_height, 20.0);
        assert_eq!(config.font_size, 28.0);
        assert_eq!(config.gap.gap_increment, 16);
        assert_eq!(config.gap.initial_gap, GapConfig::default().initial_gap);
    }

    #[test]
    fn test_huge_gap_in_file_builds_a_buffer() {
        let config =
            EditorConfig::from_json(r#"{ "gap": { "initial_gap": 18446744073709551615 } }"#)
                .unwrap();
        let mut buffer = parsec_buffer::TextBuffer::with_config(config.gap);
        assert_eq!(buffer.config().initial_gap, parsec_buffer::MAX_INITIAL_GAP);
        buffer.insert_str("ok").unwrap();
        assert_eq!(buffer.content(), "ok");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "gutter_columns": 5 }}"#).unwrap();
        let config = EditorConfig::load_from(file.path()).unwrap();
        assert_eq!(config.gutter_columns, 5);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = EditorConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_config_file_path_ends_with_app_dir() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("parsec/config.json"));
        }
    }
}
