//! User-facing display settings, loaded from an optional TOML file.

use crate::game::SortOrder;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display preferences for the interface.
///
/// All fields are optional in the file; a missing file means defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Starting display order of the move list.
    pub start_order: SortOrder,

    /// Whether to draw the 1-based row and column labels around the grid.
    pub show_coordinates: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_order: SortOrder::Ascending,
            show_coordinates: true,
        }
    }
}

impl UiSettings {
    /// Loads settings from a TOML file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] when the file exists but cannot be
    /// read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("settings file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("loading settings from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "settings loaded");
        Ok(settings)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = UiSettings::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, UiSettings::default());
        assert!(settings.show_coordinates);
    }

    #[test]
    fn test_well_formed_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "start_order = \"descending\"").expect("write");
        writeln!(file, "show_coordinates = false").expect("write");

        let settings = UiSettings::load(file.path()).expect("parsed");
        assert_eq!(settings.start_order, SortOrder::Descending);
        assert!(!settings.show_coordinates);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "start_order = \"descending\"").expect("write");

        let settings = UiSettings::load(file.path()).expect("parsed");
        assert_eq!(settings.start_order, SortOrder::Descending);
        assert!(settings.show_coordinates);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "start_order = \"sideways\"").expect("write");

        let err = UiSettings::load(file.path()).expect_err("parse failure");
        assert!(err.message.contains("parse"));
    }
}
