//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Registry URL that refuses connections.
pub const UNREACHABLE_REGISTRY: &str = "http://127.0.0.1:9";

/// `package.json` declaring Next.js.
pub const NEXT_MANIFEST: &str = r#"{ "name": "web", "dependencies": { "next": "14.2.0", "react": "18.3.0" } }"#;

/// `tsconfig.json` mapping `@/*` to `./src/*`.
pub const NEXT_TSCONFIG: &str = r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#;

/// Isolated test environment.
///
/// Each test gets its own temporary project directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty project directory.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Create a Next.js project with `@/*` path aliases.
  pub fn next_project() -> Self {
    let env = Self::empty();
    env.write_file("package.json", NEXT_MANIFEST);
    env.write_file("tsconfig.json", NEXT_TSCONFIG);
    env
  }

  /// Project root.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// Path to `getatomic.components.json` in the project.
  pub fn config_file(&self) -> PathBuf {
    self.path().join("getatomic.components.json")
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Get a pre-configured Command for the atomic binary.
  ///
  /// Points the registry at `registry_url` and clears `RUST_LOG` so log
  /// output does not depend on the caller's environment.
  pub fn atomic_cmd(&self, registry_url: &str) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("atomic");
    cmd.env("ATOMIC_REGISTRY_URL", registry_url);
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
