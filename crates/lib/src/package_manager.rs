//! Package manager detection.
//!
//! The manager is picked from the lockfiles present in the project root.
//! When several lockfiles exist the first match in [`LOCKFILES`] wins.

use std::fmt;
use std::path::Path;

use tracing::debug;

/// A JavaScript package manager that can install dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
  #[default]
  Npm,
  Pnpm,
  Yarn,
  Bun,
}

/// Lockfile markers in priority order.
const LOCKFILES: &[(&str, PackageManager)] = &[
  ("bun.lockb", PackageManager::Bun),
  ("bun.lock", PackageManager::Bun),
  ("pnpm-lock.yaml", PackageManager::Pnpm),
  ("yarn.lock", PackageManager::Yarn),
  ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
  /// Returns the executable name.
  pub fn as_str(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm",
      PackageManager::Pnpm => "pnpm",
      PackageManager::Yarn => "yarn",
      PackageManager::Bun => "bun",
    }
  }

  /// Returns the subcommand that adds packages to the project.
  pub fn install_verb(&self) -> &'static str {
    match self {
      PackageManager::Npm => "install",
      PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "add",
    }
  }

  /// Builds the argument list for installing `dependencies`.
  pub fn install_args(&self, dependencies: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(dependencies.len() + 1);
    args.push(self.install_verb().to_string());
    args.extend(dependencies.iter().cloned());
    args
  }
}

impl fmt::Display for PackageManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Detects the package manager used by the project at `project_dir`.
///
/// Falls back to npm when no lockfile is found.
pub fn detect(project_dir: &Path) -> PackageManager {
  for (lockfile, manager) in LOCKFILES {
    if project_dir.join(lockfile).is_file() {
      debug!(lockfile, manager = %manager, "detected package manager");
      return *manager;
    }
  }

  debug!(path = %project_dir.display(), "no lockfile found, defaulting to npm");
  PackageManager::default()
}
