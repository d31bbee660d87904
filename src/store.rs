//! Options store — the persisted [`ThemeOptions`], one TOML file.
//!
//! Color values are kept in whatever shape they were written in; the store
//! never normalizes them. A missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use glass_theme::ThemeOptions;

use crate::config::ConfigError;
use crate::writer::write_atomic;

#[derive(Debug, Clone)]
pub struct OptionsStore {
    path: PathBuf,
}

impl OptionsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Unreadable or unparseable file.
    pub fn load(&self) -> Result<ThemeOptions, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no options file, using defaults");
                Ok(ThemeOptions::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace the stored options.
    ///
    /// # Errors
    ///
    /// Serialization or write failure.
    pub fn save(&self, options: &ThemeOptions) -> Result<(), ConfigError> {
        let text = toml::to_string(options)?;
        write_atomic(&self.path, &text)?;
        tracing::debug!(path = %self.path.display(), "saved options");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glass_theme::defaults::DEFAULT_SEED;
    use glass_theme::{ColorInput, ThemeDefaults};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = OptionsStore::new(dir.path().join("options.toml"));
        assert_eq!(store.load().unwrap(), ThemeOptions::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = OptionsStore::new(dir.path().join("sub").join("options.toml"));
        let options = ThemeOptions {
            light_primary: ColorInput::Components(vec![12, 34, 56]),
            reset: true,
            ..ThemeOptions::default()
        };
        store.save(&options).unwrap();
        assert_eq!(store.load().unwrap(), options);
    }

    #[test]
    fn reads_hand_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(
            &path,
            "light_primary = \"#FF0000\"\ndark_primary = [0, 0, 255]\ndark_background = \"/local/n.jpg\"\n",
        )
        .unwrap();
        let options = OptionsStore::new(&path).load().unwrap();
        assert_eq!(options.light_primary, ColorInput::Text("#FF0000".to_string()));
        assert_eq!(options.dark_primary, ColorInput::Components(vec![0, 0, 255]));
        assert_eq!(options.dark_background, "/local/n.jpg");
        assert!(!options.reset);
    }

    #[test]
    fn unsupported_color_shape_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "light_primary = [106.0, 116.0, 211.0]\ndark_primary = true\n").unwrap();
        let options = OptionsStore::new(&path).load().unwrap();
        let resolved = options.resolve(&ThemeDefaults::default());
        assert_eq!(resolved.light.primary, DEFAULT_SEED);
        assert_eq!(resolved.dark.primary, DEFAULT_SEED);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        std::fs::write(&path, "reset = \"maybe\"").unwrap();
        assert!(matches!(
            OptionsStore::new(&path).load(),
            Err(ConfigError::Parse { .. })
        ));
    }
}
