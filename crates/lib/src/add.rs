//! Add registry components to an initialized project.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{self, ConfigError, ResolvedConfig};
use crate::install::{InstallError, Installer};
use crate::package_manager::{self, PackageManager};
use crate::project::{self, ProjectError};
use crate::registry::{Registry, RegistryError};
use crate::resolve::{self, ResolveError};
use crate::util::fs::{self as fs_util, WriteError};

/// Errors that can occur while adding components.
#[derive(Debug, Error)]
pub enum AddError {
  #[error("no components given")]
  NothingToAdd,

  #[error("invalid file name '{file}' in component '{component}'")]
  InvalidFileName { component: String, file: String },

  #[error(transparent)]
  Project(#[from] ProjectError),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Resolve(#[from] ResolveError),

  #[error(transparent)]
  Registry(#[from] RegistryError),

  #[error(transparent)]
  Write(#[from] WriteError),

  #[error(transparent)]
  Install(#[from] InstallError),
}

/// Options for adding components.
#[derive(Debug, Clone)]
pub struct AddOptions {
  /// Target project directory
  pub cwd: PathBuf,
  /// Component names, in the order given
  pub components: Vec<String>,
  /// Replace files that already exist
  pub overwrite: bool,
}

/// Result of a successful `add`.
#[derive(Debug)]
pub struct AddReport {
  pub resolved: ResolvedConfig,
  /// Files written
  pub written: Vec<PathBuf>,
  /// Files left alone because they already existed
  pub skipped: Vec<PathBuf>,
  pub package_manager: PackageManager,
  /// Dependencies installed (deduplicated, first-seen order)
  pub dependencies: Vec<String>,
}

/// Fetch `options.components` from the registry and write them into the
/// project's components directory, then install their dependencies.
pub async fn run_add<R, I>(options: &AddOptions, registry: &R, installer: &I) -> Result<AddReport, AddError>
where
  R: Registry,
  I: Installer,
{
  if options.components.is_empty() {
    return Err(AddError::NothingToAdd);
  }

  let project_dir = project::validate_target(&options.cwd)?;
  let config = config::read_config(&project_dir)?;
  let resolved = resolve::resolve_strict(&project_dir, &config)?;
  let components_dir = &resolved.resolved_paths.components;

  // Every component is fetched and every file name checked before any write.
  let mut planned = Vec::new();
  let mut dependencies: Vec<String> = Vec::new();

  for name in &options.components {
    let component = registry.fetch_component(name).await?;

    for file in component.files {
      let target = component_file_path(components_dir, &file.name).ok_or_else(|| AddError::InvalidFileName {
        component: component.name.clone(),
        file: file.name.clone(),
      })?;
      planned.push((component.name.clone(), target, file.content));
    }

    for dep in component.dependencies {
      if !dependencies.contains(&dep) {
        dependencies.push(dep);
      }
    }
  }

  let mut written = Vec::new();
  let mut skipped = Vec::new();

  for (component, target, content) in planned {
    if target.exists() && !options.overwrite {
      debug!(path = %target.display(), "file exists, skipping");
      skipped.push(target);
      continue;
    }

    fs_util::write_file(&target, &content)?;
    info!(component = %component, path = %target.display(), "wrote component file");
    written.push(target);
  }

  let manager = package_manager::detect(&project_dir);
  if dependencies.is_empty() {
    info!("no dependencies to install, skipping");
  } else {
    installer.install(&project_dir, manager, &dependencies).await?;
  }

  Ok(AddReport {
    resolved,
    written,
    skipped,
    package_manager: manager,
    dependencies,
  })
}

/// Joins a registry-supplied file name onto the components directory.
///
/// Only plain relative names are accepted so a component can never write
/// outside the components directory.
fn component_file_path(components_dir: &Path, name: &str) -> Option<PathBuf> {
  let relative = Path::new(name);
  let plain = !name.is_empty() && relative.components().all(|c| matches!(c, Component::Normal(_)));
  plain.then(|| components_dir.join(relative))
}
