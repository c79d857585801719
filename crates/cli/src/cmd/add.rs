//! Implementation of the `atomic add` command.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use atomic_lib::add::{AddOptions, run_add};
use atomic_lib::install::CommandInstaller;
use atomic_lib::registry::HttpRegistry;

use crate::output::{print_success, symbols};

/// Execute the add command.
///
/// Fetches each named component from the registry into the components
/// directory configured by `atomic init`, then installs their dependencies.
pub fn cmd_add(cwd: &Path, components: Vec<String>, overwrite: bool, registry_url: &str) -> Result<()> {
  let registry = HttpRegistry::new(registry_url).context("Failed to set up registry client")?;
  debug!(registry = registry.base_url(), "using registry");
  let options = AddOptions {
    cwd: cwd.to_path_buf(),
    components,
    overwrite,
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = rt
    .block_on(run_add(&options, &registry, &CommandInstaller))
    .context("Failed to add components")?;

  for path in &report.written {
    println!("  {} {}", symbols::ADD.green(), path.display());
  }
  for path in &report.skipped {
    println!(
      "  {} {} {}",
      symbols::SKIP.dimmed(),
      path.display(),
      "(exists, use --overwrite to replace)".dimmed()
    );
  }

  if !report.dependencies.is_empty() {
    println!(
      "  {} Installed with {}: {}",
      symbols::INFO.dimmed(),
      report.package_manager,
      report.dependencies.join(", ")
    );
  }

  print_success(&format!(
    "Added {} into {}",
    options.components.join(", "),
    report.resolved.resolved_paths.components.display()
  ));

  Ok(())
}
