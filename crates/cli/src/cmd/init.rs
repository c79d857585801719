//! Implementation of the `atomic init` command.
//!
//! This command validates the target project, asks the operator for theme,
//! stylesheet and alias, writes `getatomic.components.json`, writes the theme
//! stylesheet and installs the theme's dependencies.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use tracing::debug;

use atomic_lib::init::{InitOptions, InitOutcome, run_init};
use atomic_lib::install::CommandInstaller;
use atomic_lib::registry::HttpRegistry;

use crate::output::{format_duration, print_info, print_stat, symbols};
use crate::prompts::TerminalPrompter;

/// Execute the init command.
///
/// Declining the final confirmation is not an error: nothing is written and
/// the command succeeds.
///
/// # Errors
///
/// Returns an error if validation fails, a prompt is cancelled, the registry
/// cannot be reached, or dependency installation fails.
pub fn cmd_init(cwd: &Path, registry_url: &str) -> Result<()> {
  let start = Instant::now();
  let registry = HttpRegistry::new(registry_url).context("Failed to set up registry client")?;
  debug!(registry = registry.base_url(), "using registry");
  let mut prompter = TerminalPrompter::new();
  let options = InitOptions { cwd: cwd.to_path_buf() };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let outcome = match rt.block_on(run_init(&options, &registry, &mut prompter, &CommandInstaller)) {
    Ok(outcome) => outcome,
    Err(e) if e.is_cancelled() => bail!("Operation cancelled, no configuration was written"),
    Err(e) => return Err(e).context("Initialization failed"),
  };

  let report = match outcome {
    InitOutcome::Completed(report) => report,
    InitOutcome::Declined => {
      print_info("Configuration not written. Run `atomic init` again when you are ready.");
      return Ok(());
    }
  };

  let paths = &report.resolved.resolved_paths;

  println!();
  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    "Project initialized!".green().bold()
  );
  println!();
  print_stat("Framework", report.framework);
  print_stat("Theme", &report.resolved.config.theme.name);
  print_stat("Config", &report.config_file.display().to_string());
  print_stat("Components", &paths.components.display().to_string());
  print_stat("Stylesheet", &paths.css.display().to_string());
  if report.dependencies.is_empty() {
    print_stat("Dependencies", "none");
  } else {
    print_stat(
      "Dependencies",
      &format!("{} (via {})", report.dependencies.join(", "), report.package_manager),
    );
  }
  print_stat("Duration", &format_duration(start.elapsed()));
  println!();
  println!("{}", "Next steps:".bold());
  println!(
    "  {} Add a component: {}",
    symbols::ARROW.cyan(),
    "atomic add button".cyan()
  );

  Ok(())
}
