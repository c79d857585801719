//! Resolution of configured aliases to absolute filesystem paths.
//!
//! Component aliases are looked up in the project's `tsconfig.json` (or
//! `jsconfig.json`) `compilerOptions.paths`. The stylesheet location is taken
//! relative to the project root. Nothing here fails: a path that cannot be
//! resolved comes back empty and the caller decides what to do about it.

mod tsconfig;

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ProjectConfig, ResolvedConfig, ResolvedPaths};

pub use tsconfig::{PathMapping, load_path_mapping};

/// A configured value that did not resolve to a usable path.
#[derive(Debug, Error)]
#[error("could not resolve {field} path from '{value}'; check the alias against your tsconfig.json paths")]
pub struct ResolveError {
  pub field: &'static str,
  pub value: String,
}

/// Resolves the paths of `config` for the project rooted at `project_dir`.
///
/// `project_dir` is expected to be absolute.
pub fn resolve(project_dir: &Path, config: &ProjectConfig) -> ResolvedConfig {
  let mapping = load_path_mapping(project_dir);

  let components = resolve_alias(project_dir, mapping.as_ref(), &config.alias.components);
  let css = resolve_file(project_dir, &config.theme.css);

  debug!(
    components = %components.display(),
    css = %css.display(),
    "resolved configuration paths"
  );

  ResolvedConfig {
    config: config.clone(),
    resolved_paths: ResolvedPaths { components, css },
  }
}

/// Resolves `config` and rejects it if any path came back empty.
pub fn resolve_strict(project_dir: &Path, config: &ProjectConfig) -> Result<ResolvedConfig, ResolveError> {
  let resolved = resolve(project_dir, config);
  match resolved.unresolved() {
    None => Ok(resolved),
    Some(field) => {
      let value = match field {
        "components" => config.alias.components.clone(),
        _ => config.theme.css.clone(),
      };
      Err(ResolveError { field, value })
    }
  }
}

fn resolve_alias(project_dir: &Path, mapping: Option<&PathMapping>, alias: &str) -> PathBuf {
  if alias.is_empty() {
    return PathBuf::new();
  }

  if alias.starts_with("./") || alias.starts_with("../") {
    return normalize(&project_dir.join(alias));
  }

  match mapping.and_then(|m| m.match_alias(alias)) {
    Some(path) => path,
    None => {
      warn!(alias, "no matching path alias declared");
      PathBuf::new()
    }
  }
}

fn resolve_file(project_dir: &Path, file: &str) -> PathBuf {
  if file.is_empty() {
    return PathBuf::new();
  }
  normalize(&project_dir.join(file))
}

/// Lexically normalizes `path`, dropping `.` and folding `..` components.
pub(crate) fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if !out.pop() {
          out.push(component);
        }
      }
      other => out.push(other),
    }
  }
  out
}
