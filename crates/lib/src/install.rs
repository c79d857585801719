//! Dependency installation through the project's package manager.

use std::ffi::OsStr;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::package_manager::PackageManager;

/// Errors that can occur while installing dependencies.
#[derive(Debug, Error)]
pub enum InstallError {
  /// The package manager executable could not be started.
  #[error("failed to run {manager}: {source}")]
  Spawn {
    manager: PackageManager,
    #[source]
    source: std::io::Error,
  },

  /// The package manager ran but reported failure.
  #[error("{manager} {verb} exited with {}", code.map_or_else(|| "a signal".to_string(), |c| format!("code {c}")))]
  Failed {
    manager: PackageManager,
    verb: &'static str,
    code: Option<i32>,
  },
}

/// Installs packages into a project.
pub trait Installer {
  /// Installs `dependencies` into the project at `project_dir` using `manager`.
  fn install(
    &self,
    project_dir: &Path,
    manager: PackageManager,
    dependencies: &[String],
  ) -> impl Future<Output = Result<(), InstallError>> + Send;
}

/// [`Installer`] that spawns the package manager as a subprocess.
///
/// The child inherits stdin, stdout and stderr so the operator sees its
/// progress output directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInstaller;

impl Installer for CommandInstaller {
  async fn install(
    &self,
    project_dir: &Path,
    manager: PackageManager,
    dependencies: &[String],
  ) -> Result<(), InstallError> {
    let args = manager.install_args(dependencies);
    info!(manager = %manager, args = ?args, "installing dependencies");

    run(OsStr::new(manager.as_str()), &args, project_dir, manager).await?;

    info!(manager = %manager, "dependencies installed");
    Ok(())
  }
}

/// Runs `program` in `project_dir` and maps its exit status onto `manager`.
async fn run(program: &OsStr, args: &[String], project_dir: &Path, manager: PackageManager) -> Result<(), InstallError> {
  debug!(program = ?program, working_dir = %project_dir.display(), "spawning package manager");

  let status = Command::new(program)
    .args(args)
    .current_dir(project_dir)
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .await
    .map_err(|source| InstallError::Spawn { manager, source })?;

  if !status.success() {
    return Err(InstallError::Failed {
      manager,
      verb: manager.install_verb(),
      code: status.code(),
    });
  }

  Ok(())
}
