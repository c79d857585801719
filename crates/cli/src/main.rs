mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use atomic_lib::consts::{DEFAULT_REGISTRY_URL, REGISTRY_URL_ENV};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::print_error;

/// atomic - add UI components to your web project
#[derive(Parser)]
#[command(name = "atomic")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Base URL of the component registry
  #[arg(long, global = true, env = REGISTRY_URL_ENV, default_value = DEFAULT_REGISTRY_URL)]
  registry_url: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Initialize components and theme in a project
  Init {
    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    cwd: PathBuf,
  },

  /// Add components to an initialized project
  Add {
    /// Names of the components to add
    #[arg(required = true)]
    components: Vec<String>,

    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    cwd: PathBuf,

    /// Overwrite component files that already exist
    #[arg(short, long)]
    overwrite: bool,
  },
}

fn init_tracing(verbose: bool) {
  let default_directive = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Init { cwd } => cmd::cmd_init(&cwd, &cli.registry_url),
    Commands::Add {
      components,
      cwd,
      overwrite,
    } => cmd::cmd_add(&cwd, components, overwrite, &cli.registry_url),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
