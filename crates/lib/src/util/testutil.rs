//! Test doubles for atomic-lib.
//!
//! Stand-ins for the registry, the operator and the package manager so the
//! `init` and `add` flows can run without network, terminal or subprocess.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::install::{InstallError, Installer};
use crate::package_manager::PackageManager;
use crate::prompt::{PromptError, Prompter};
use crate::registry::{ComponentFile, ComponentPayload, InitPayload, Registry, RegistryError, Theme};

/// In-memory registry.
#[derive(Default)]
pub struct FakeRegistry {
  pub themes: Vec<Theme>,
  /// `None` makes `fetch_init_data` fail with a service error
  pub init: Option<InitPayload>,
  pub components: HashMap<String, ComponentPayload>,
  /// Names passed to `fetch_init_data`, in call order
  pub init_requests: Mutex<Vec<String>>,
}

impl FakeRegistry {
  pub fn with_payload(css: &str, dependencies: &[&str]) -> Self {
    Self {
      themes: vec![theme("1", "slate"), theme("2", "rose")],
      init: Some(InitPayload {
        css: css.to_string(),
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
      }),
      ..Default::default()
    }
  }

  pub fn with_component(mut self, name: &str, files: &[(&str, &str)], dependencies: &[&str]) -> Self {
    self.components.insert(
      name.to_string(),
      ComponentPayload {
        name: name.to_string(),
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        files: files
          .iter()
          .map(|(name, content)| ComponentFile {
            name: name.to_string(),
            content: content.to_string(),
          })
          .collect(),
      },
    );
    self
  }
}

fn service_error(what: &str) -> RegistryError {
  RegistryError::Service {
    url: format!("fake://{}", what),
    message: "HTTP 500".to_string(),
  }
}

impl Registry for FakeRegistry {
  async fn list_themes(&self) -> Result<Vec<Theme>, RegistryError> {
    Ok(self.themes.clone())
  }

  async fn fetch_init_data(&self, theme_name: &str) -> Result<InitPayload, RegistryError> {
    self.init_requests.lock().unwrap().push(theme_name.to_string());
    self.init.clone().ok_or_else(|| service_error("init"))
  }

  async fn fetch_component(&self, name: &str) -> Result<ComponentPayload, RegistryError> {
    self.components.get(name).cloned().ok_or_else(|| service_error(name))
  }
}

pub fn theme(id: &str, name: &str) -> Theme {
  Theme {
    id: id.to_string(),
    name: name.to_string(),
  }
}

/// Prompter with canned answers. A `None` answer cancels that prompt.
pub struct ScriptedPrompter {
  pub theme_index: Option<usize>,
  pub css: Option<String>,
  pub alias: Option<String>,
  pub confirm: Option<bool>,
  /// Prompts shown so far, in order
  pub asked: Vec<&'static str>,
}

impl ScriptedPrompter {
  /// Picks the first theme, answers `css` and `alias`, then confirms.
  pub fn accepting(css: &str, alias: &str) -> Self {
    Self {
      theme_index: Some(0),
      css: Some(css.to_string()),
      alias: Some(alias.to_string()),
      confirm: Some(true),
      asked: Vec::new(),
    }
  }
}

impl Prompter for ScriptedPrompter {
  fn select_theme(&mut self, themes: &[Theme]) -> Result<Theme, PromptError> {
    self.asked.push("theme");
    let index = self.theme_index.ok_or(PromptError::Cancelled)?;
    themes
      .get(index)
      .cloned()
      .ok_or_else(|| PromptError::Interaction(format!("no theme at index {}", index)))
  }

  fn stylesheet_path(&mut self, _default: &str) -> Result<String, PromptError> {
    self.asked.push("css");
    self.css.clone().ok_or(PromptError::Cancelled)
  }

  fn components_alias(&mut self, _default: &str) -> Result<String, PromptError> {
    self.asked.push("alias");
    self.alias.clone().ok_or(PromptError::Cancelled)
  }

  fn confirm(&mut self, _message: &str) -> Result<bool, PromptError> {
    self.asked.push("confirm");
    self.confirm.ok_or(PromptError::Cancelled)
  }
}

/// Installer that records what it was asked to do.
#[derive(Default)]
pub struct RecordingInstaller {
  pub calls: Mutex<Vec<(PathBuf, PackageManager, Vec<String>)>>,
  /// Exit code to fail with, if any
  pub fail_with: Option<i32>,
}

impl RecordingInstaller {
  pub fn failing(code: i32) -> Self {
    Self {
      fail_with: Some(code),
      ..Default::default()
    }
  }

  pub fn calls(&self) -> Vec<(PathBuf, PackageManager, Vec<String>)> {
    self.calls.lock().unwrap().clone()
  }
}

impl Installer for RecordingInstaller {
  async fn install(
    &self,
    project_dir: &Path,
    manager: PackageManager,
    dependencies: &[String],
  ) -> Result<(), InstallError> {
    self
      .calls
      .lock()
      .unwrap()
      .push((project_dir.to_path_buf(), manager, dependencies.to_vec()));

    match self.fail_with {
      Some(code) => Err(InstallError::Failed {
        manager,
        verb: manager.install_verb(),
        code: Some(code),
      }),
      None => Ok(()),
    }
  }
}

/// `package.json` declaring Next.js.
pub const NEXT_MANIFEST: &str = r#"{ "name": "web", "dependencies": { "next": "14.2.0", "react": "18.3.0" } }"#;

/// `tsconfig.json` mapping `@/*` to `./src/*`.
pub const NEXT_TSCONFIG: &str = r#"{
  "compilerOptions": {
    // path aliases
    "paths": { "@/*": ["./src/*"] },
  },
}"#;

/// Creates a temp project with the given `package.json` and `tsconfig.json`.
pub fn project(manifest: Option<&str>, tsconfig: Option<&str>) -> TempDir {
  let temp = TempDir::new().unwrap();
  if let Some(content) = manifest {
    fs::write(temp.path().join("package.json"), content).unwrap();
  }
  if let Some(content) = tsconfig {
    fs::write(temp.path().join("tsconfig.json"), content).unwrap();
  }
  temp
}

/// A Next.js project with `@/*` path aliases.
pub fn next_project() -> TempDir {
  project(Some(NEXT_MANIFEST), Some(NEXT_TSCONFIG))
}

/// Canonical root of `temp`, matching what project validation returns.
pub fn root(temp: &TempDir) -> PathBuf {
  dunce::canonicalize(temp.path()).unwrap()
}
