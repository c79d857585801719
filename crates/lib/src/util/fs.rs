//! Filesystem helpers shared by `init` and `add`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A filesystem write that failed, with the path it failed on.
#[derive(Debug, Error)]
pub enum WriteError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: io::Error },
}

/// Creates `dir` and all of its missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
  fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
    path: dir.to_path_buf(),
    source,
  })
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
  if let Some(parent) = path.parent() {
    ensure_dir(parent)?;
  }
  fs::write(path, content).map_err(|source| WriteError::WriteFile {
    path: path.to_path_buf(),
    source,
  })
}
