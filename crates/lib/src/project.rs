//! Validation of the target project.
//!
//! A project qualifies when its directory exists, it has a `package.json`,
//! and that manifest declares one of [`SUPPORTED_FRAMEWORKS`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::{PACKAGE_JSON, SUPPORTED_FRAMEWORKS};

/// Reasons a target project is rejected.
#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("directory does not exist: {}", path.display())]
  MissingDirectory { path: PathBuf },

  #[error("no package.json found in {}; run this command in a JavaScript project", dir.display())]
  MissingManifest { dir: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  ReadManifest { path: PathBuf, source: std::io::Error },

  #[error("failed to parse {}: {source}", path.display())]
  ParseManifest { path: PathBuf, source: serde_json::Error },

  #[error("no supported framework found in package.json (expected one of: {})", SUPPORTED_FRAMEWORKS.join(", "))]
  UnsupportedFramework,
}

/// The parts of `package.json` the tool cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
  #[serde(default)]
  pub dependencies: BTreeMap<String, String>,
  #[serde(default)]
  pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
  /// Returns true if `package` appears in dependencies or devDependencies.
  pub fn declares(&self, package: &str) -> bool {
    self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
  }

  /// Returns the first supported framework the manifest declares.
  pub fn framework(&self) -> Option<&'static str> {
    SUPPORTED_FRAMEWORKS.iter().copied().find(|fw| self.declares(fw))
  }
}

/// Checks that the target directory exists.
pub fn validate_target(dir: &Path) -> Result<PathBuf, ProjectError> {
  if !dir.is_dir() {
    return Err(ProjectError::MissingDirectory { path: dir.to_path_buf() });
  }
  dunce::canonicalize(dir).map_err(|_| ProjectError::MissingDirectory { path: dir.to_path_buf() })
}

/// Reads `package.json` from `root`.
pub fn read_manifest(root: &Path) -> Result<PackageManifest, ProjectError> {
  let path = root.join(PACKAGE_JSON);
  if !path.is_file() {
    return Err(ProjectError::MissingManifest { dir: root.to_path_buf() });
  }

  let content = fs::read_to_string(&path).map_err(|source| ProjectError::ReadManifest {
    path: path.clone(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|source| ProjectError::ParseManifest { path, source })
}

/// Returns the supported framework `manifest` declares.
pub fn validate_framework(manifest: &PackageManifest) -> Result<&'static str, ProjectError> {
  let framework = manifest.framework().ok_or(ProjectError::UnsupportedFramework)?;
  debug!(framework, "detected framework");
  Ok(framework)
}
