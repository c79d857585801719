//! Reading and writing `getatomic.components.json`.
//!
//! The file lives in the project root and holds the operator's raw choices
//! (see [`ProjectConfig`]). Resolved paths are never persisted.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::CONFIG_FILE_NAME;

pub use types::{AliasConfig, ProjectConfig, ResolvedConfig, ResolvedPaths, ThemeConfig};

/// Errors that can occur while loading or storing the project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("no getatomic.components.json found in {}; run `atomic init` first", dir.display())]
  NotFound { dir: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("failed to serialize configuration: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Returns the location of the configuration file inside `project_dir`.
pub fn config_path(project_dir: &Path) -> PathBuf {
  project_dir.join(CONFIG_FILE_NAME)
}

/// Loads the configuration stored in `project_dir`.
pub fn read_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
  let path = config_path(project_dir);
  if !path.is_file() {
    return Err(ConfigError::NotFound {
      dir: project_dir.to_path_buf(),
    });
  }

  let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
    path: path.clone(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Writes `config` as pretty JSON into `project_dir`, returning the file path.
pub fn write_config(project_dir: &Path, config: &ProjectConfig) -> Result<PathBuf, ConfigError> {
  let path = config_path(project_dir);
  let mut content = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
  content.push('\n');

  fs::write(&path, content).map_err(|source| ConfigError::Write {
    path: path.clone(),
    source,
  })?;

  debug!(path = %path.display(), "wrote project configuration");
  Ok(path)
}

/// Removes the configuration file from `project_dir`.
///
/// Best effort: a missing file is fine, other failures are logged.
pub fn remove_config(project_dir: &Path) {
  let path = config_path(project_dir);
  match fs::remove_file(&path) {
    Ok(()) => debug!(path = %path.display(), "removed project configuration"),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => warn!(path = %path.display(), error = %e, "failed to remove project configuration"),
  }
}

/// Returns the raw bytes of the configuration file in `project_dir`, if any.
pub fn snapshot_config(project_dir: &Path) -> Option<Vec<u8>> {
  fs::read(config_path(project_dir)).ok()
}

/// Puts `previous` back as the configuration file, or removes the file when
/// there was nothing before.
///
/// Best effort, like [`remove_config`].
pub fn restore_config(project_dir: &Path, previous: Option<&[u8]>) {
  let Some(bytes) = previous else {
    remove_config(project_dir);
    return;
  };

  let path = config_path(project_dir);
  match fs::write(&path, bytes) {
    Ok(()) => debug!(path = %path.display(), "restored previous project configuration"),
    Err(e) => warn!(path = %path.display(), error = %e, "failed to restore project configuration"),
  }
}
