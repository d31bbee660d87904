//! Theme file output.
//!
//! Files are replaced atomically: contents go to a temp file in the target
//! directory, which is then renamed over the destination. A reader sees
//! either the old file or the new one, never a partial write.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create directory {}: {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("write worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Write `contents` to `path` atomically, creating parent directories.
///
/// Blocking; call from a worker thread.
///
/// # Errors
///
/// Directory creation, temp file, or rename failures.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Writes finished themes into the themes directory.
#[derive(Debug, Clone)]
pub struct ThemeWriter {
    themes_dir: PathBuf,
}

impl ThemeWriter {
    #[must_use]
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
        }
    }

    #[must_use]
    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    #[must_use]
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.themes_dir.join(filename)
    }

    /// Replace `filename` with `contents` on a blocking worker and wait for
    /// it to finish.
    ///
    /// # Errors
    ///
    /// See [`write_atomic`]; a panicked worker is [`WriteError::Worker`].
    pub async fn write(&self, filename: &str, contents: String) -> Result<PathBuf, WriteError> {
        let path = self.path_for(filename);
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&target, &contents)).await??;
        tracing::info!(path = %path.display(), "wrote theme");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ThemeWriter::new(dir.path().join("nested").join("themes"));
        let path = writer.write("a.yaml", "hello".to_string()).await.unwrap();
        assert_eq!(path, writer.themes_dir().join("a.yaml"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[tokio::test]
    async fn overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ThemeWriter::new(dir.path());
        writer.write("a.yaml", "a much longer first version".to_string()).await.unwrap();
        writer.write("a.yaml", "short".to_string()).await.unwrap();
        let text = std::fs::read_to_string(dir.path().join("a.yaml")).unwrap();
        assert_eq!(text, "short");
    }

    #[tokio::test]
    async fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ThemeWriter::new(dir.path());
        writer.write("a.yaml", "x".to_string()).await.unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.yaml")]);
    }

    #[tokio::test]
    async fn directory_blocked_by_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("themes");
        std::fs::write(&blocker, "not a directory").unwrap();
        let writer = ThemeWriter::new(&blocker);
        let err = writer.write("a.yaml", "x".to_string()).await.unwrap_err();
        assert!(matches!(err, WriteError::CreateDir { .. }), "{err}");
    }

    #[test]
    fn paths_join_the_themes_dir() {
        let writer = ThemeWriter::new("/config/themes");
        assert_eq!(
            writer.path_for("frosted_glass_lite.yaml"),
            PathBuf::from("/config/themes/frosted_glass_lite.yaml")
        );
    }
}
