//! Initialize component tooling in an existing project.
//!
//! This module provides the core logic for the `atomic init` command, which
//! runs these steps in order, stopping at the first failure:
//!
//! 1. validate the target directory, its `package.json` and framework
//! 2. ask for theme, stylesheet and alias, resolve paths, confirm
//! 3. write `getatomic.components.json`
//! 4. create the components directory
//! 5. fetch the theme's init payload and write the stylesheet
//! 6. install the payload's dependencies
//!
//! Once the configuration file is written, any later failure puts back the
//! file that was there before, or removes it if there was none, so a
//! half-initialized project is never left behind.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{self, ConfigError, ProjectConfig, ResolvedConfig};
use crate::consts::{CONFIG_FILE_NAME, DEFAULT_COMPONENTS_ALIAS, DEFAULT_CSS_PATH};
use crate::install::{InstallError, Installer};
use crate::package_manager::{self, PackageManager};
use crate::project::{self, ProjectError};
use crate::prompt::{PromptError, Prompter};
use crate::registry::{Registry, RegistryError};
use crate::resolve::{self, ResolveError};
use crate::util::fs::{self as fs_util, WriteError};

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
  #[error(transparent)]
  Project(#[from] ProjectError),

  #[error(transparent)]
  Resolve(#[from] ResolveError),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Registry(#[from] RegistryError),

  #[error("the registry returned no themes")]
  NoThemes,

  #[error(transparent)]
  Prompt(#[from] PromptError),

  #[error(transparent)]
  Write(#[from] WriteError),

  #[error(transparent)]
  Install(#[from] InstallError),
}

impl InitError {
  /// Returns true if the operator aborted a prompt.
  pub fn is_cancelled(&self) -> bool {
    matches!(self, InitError::Prompt(PromptError::Cancelled))
  }
}

/// The stages of an `init` run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
  ValidateTarget,
  ValidatePackageJson,
  ValidateFramework,
  PromptAndResolve,
  PersistConfig,
  EnsureComponentsDir,
  FetchInitPayload,
  WriteStylesheet,
  InstallDependencies,
}

impl fmt::Display for InitStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      InitStep::ValidateTarget => "validate-target",
      InitStep::ValidatePackageJson => "validate-package-json",
      InitStep::ValidateFramework => "validate-framework",
      InitStep::PromptAndResolve => "prompt-and-resolve",
      InitStep::PersistConfig => "persist-config",
      InitStep::EnsureComponentsDir => "ensure-components-dir",
      InitStep::FetchInitPayload => "fetch-init-payload",
      InitStep::WriteStylesheet => "write-stylesheet",
      InitStep::InstallDependencies => "install-dependencies",
    };
    f.write_str(name)
  }
}

/// Options for initializing a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
  /// Target project directory
  pub cwd: PathBuf,
}

/// Result of a successful initialization.
#[derive(Debug)]
pub struct InitReport {
  /// The project root (canonicalized)
  pub project_dir: PathBuf,
  /// Framework package that qualified the project
  pub framework: &'static str,
  /// Path to the written configuration file
  pub config_file: PathBuf,
  /// Configuration with resolved paths
  pub resolved: ResolvedConfig,
  /// Package manager used for installation
  pub package_manager: PackageManager,
  /// Dependencies that were installed (empty if installation was skipped)
  pub dependencies: Vec<String>,
}

/// How an `init` run ended without error.
#[derive(Debug)]
pub enum InitOutcome {
  Completed(InitReport),
  /// The operator declined the final confirmation; nothing was written.
  Declined,
}

/// Initialize component tooling in the project at `options.cwd`.
///
/// # Errors
///
/// Returns an error if:
/// - the directory, `package.json` or a supported framework is missing
/// - a prompt is cancelled or a resolved path is empty
/// - the registry call, a file write or dependency installation fails
pub async fn run_init<R, P, I>(
  options: &InitOptions,
  registry: &R,
  prompter: &mut P,
  installer: &I,
) -> Result<InitOutcome, InitError>
where
  R: Registry,
  P: Prompter,
  I: Installer,
{
  debug!(step = %InitStep::ValidateTarget, "init step");
  let root = project::validate_target(&options.cwd)?;
  let project_dir = root.as_path();

  debug!(step = %InitStep::ValidatePackageJson, "init step");
  let manifest = project::read_manifest(project_dir)?;

  debug!(step = %InitStep::ValidateFramework, "init step");
  let framework = project::validate_framework(&manifest)?;
  info!(path = %project_dir.display(), framework, "initializing project");

  debug!(step = %InitStep::PromptAndResolve, "init step");
  let Some(resolved) = prompt_and_resolve(project_dir, registry, prompter).await? else {
    info!("configuration declined, nothing written");
    return Ok(InitOutcome::Declined);
  };

  debug!(step = %InitStep::PersistConfig, "init step");
  let previous = config::snapshot_config(project_dir);
  let config_file = config::write_config(project_dir, &resolved.config)?;

  match complete(project_dir, &resolved, registry, installer).await {
    Ok((package_manager, dependencies)) => Ok(InitOutcome::Completed(InitReport {
      project_dir: project_dir.to_path_buf(),
      framework,
      config_file,
      resolved,
      package_manager,
      dependencies,
    })),
    Err(e) => {
      warn!(error = %e, "init failed, rolling back {}", CONFIG_FILE_NAME);
      config::restore_config(project_dir, previous.as_deref());
      Err(e)
    }
  }
}

/// Collects the operator's choices and resolves them.
///
/// Returns `None` if the operator declines the final confirmation.
async fn prompt_and_resolve<R, P>(
  project_dir: &Path,
  registry: &R,
  prompter: &mut P,
) -> Result<Option<ResolvedConfig>, InitError>
where
  R: Registry,
  P: Prompter,
{
  let themes = registry.list_themes().await?;
  if themes.is_empty() {
    return Err(InitError::NoThemes);
  }

  let theme = prompter.select_theme(&themes)?;
  let css = prompter.stylesheet_path(DEFAULT_CSS_PATH)?;
  let alias = prompter.components_alias(DEFAULT_COMPONENTS_ALIAS)?;

  let config = ProjectConfig::new(theme.name, css, alias);
  let resolved = resolve::resolve_strict(project_dir, &config)?;

  let message = if config::config_path(project_dir).exists() {
    format!("Overwrite the existing {}?", CONFIG_FILE_NAME)
  } else {
    format!("Write configuration to {}?", CONFIG_FILE_NAME)
  };

  if !prompter.confirm(&message)? {
    return Ok(None);
  }

  Ok(Some(resolved))
}

/// Runs every step after the configuration file has been written.
async fn complete<R, I>(
  project_dir: &Path,
  resolved: &ResolvedConfig,
  registry: &R,
  installer: &I,
) -> Result<(PackageManager, Vec<String>), InitError>
where
  R: Registry,
  I: Installer,
{
  let paths = &resolved.resolved_paths;

  debug!(step = %InitStep::EnsureComponentsDir, "init step");
  fs_util::ensure_dir(&paths.components)?;

  debug!(step = %InitStep::FetchInitPayload, "init step");
  let payload = registry.fetch_init_data(&resolved.config.theme.name).await?;

  debug!(step = %InitStep::WriteStylesheet, "init step");
  fs_util::write_file(&paths.css, &payload.css)?;
  info!(path = %paths.css.display(), "wrote stylesheet");

  debug!(step = %InitStep::InstallDependencies, "init step");
  let manager = package_manager::detect(project_dir);
  if payload.dependencies.is_empty() {
    info!("no dependencies to install, skipping");
    return Ok((manager, Vec::new()));
  }

  installer.install(project_dir, manager, &payload.dependencies).await?;
  Ok((manager, payload.dependencies))
}
