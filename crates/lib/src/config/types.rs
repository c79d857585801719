//! Project configuration types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Theme selection as stored in the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
  /// Name of the chosen theme
  pub name: String,
  /// Location of the global stylesheet, as entered by the operator
  pub css: String,
}

/// Import aliases as stored in the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
  /// Import alias under which generated components live (e.g. `@/components`)
  pub components: String,
}

/// The operator's raw, unresolved choices.
///
/// Serialized verbatim to `getatomic.components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
  pub theme: ThemeConfig,
  pub alias: AliasConfig,
}

impl ProjectConfig {
  pub fn new(theme_name: impl Into<String>, css: impl Into<String>, components: impl Into<String>) -> Self {
    Self {
      theme: ThemeConfig {
        name: theme_name.into(),
        css: css.into(),
      },
      alias: AliasConfig {
        components: components.into(),
      },
    }
  }
}

/// Absolute filesystem locations derived from a [`ProjectConfig`].
///
/// A path is empty when it could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaths {
  pub components: PathBuf,
  pub css: PathBuf,
}

/// A [`ProjectConfig`] together with its resolved paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
  #[serde(flatten)]
  pub config: ProjectConfig,
  pub resolved_paths: ResolvedPaths,
}

impl ResolvedConfig {
  /// Returns the name of the first path that failed to resolve, if any.
  pub fn unresolved(&self) -> Option<&'static str> {
    if !is_resolved(&self.resolved_paths.components) {
      Some("components")
    } else if !is_resolved(&self.resolved_paths.css) {
      Some("css")
    } else {
      None
    }
  }
}

fn is_resolved(path: &Path) -> bool {
  !path.as_os_str().is_empty() && path.is_absolute()
}
