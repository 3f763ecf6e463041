//! Editor configuration.
//!
//! Stored as JSON. Every field has a default, so an empty object (or a file
//! that only sets a few keys) is a valid configuration.

use std::path::{Path, PathBuf};

use gapedit_buffer::DEFAULT_INITIAL_GAP;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::viewport::GlyphMetrics;

/// Errors from loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for an [`EditorCore`](crate::EditorCore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spare gap capacity reserved beyond the initial content.
    pub initial_gap: usize,
    /// Monospace glyph advance in pixels.
    pub glyph_width: f32,
    /// Line height in pixels.
    pub line_height: f32,
    /// Spaces inserted by the Tab command; 0 inserts a literal tab.
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_gap: DEFAULT_INITIAL_GAP,
            glyph_width: GlyphMetrics::DEFAULT.glyph_width,
            line_height: GlyphMetrics::DEFAULT.line_height,
            tab_width: 4,
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Glyph metrics described by this configuration.
    pub fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics::new(self.glyph_width, self.line_height)
    }

    /// Replaces unusable glyph metrics with the defaults.
    fn sanitized(mut self) -> Self {
        if !self.metrics().is_valid() {
            log::warn!(
                "config glyph metrics {}x{} are unusable, using defaults",
                self.glyph_width,
                self.line_height
            );
            self.glyph_width = GlyphMetrics::DEFAULT.glyph_width;
            self.line_height = GlyphMetrics::DEFAULT.line_height;
        }
        self
    }
}
