//! Records returned by the component registry.

use serde::{Deserialize, Serialize};

/// A selectable theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
  pub id: String,
  pub name: String,
}

/// Data needed to finish `init` for a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitPayload {
  /// Global stylesheet content
  pub css: String,
  /// Packages to install, in order
  pub dependencies: Vec<String>,
}

/// A single file belonging to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFile {
  /// File name relative to the components directory
  pub name: String,
  pub content: String,
}

/// A component as served by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPayload {
  pub name: String,
  #[serde(default)]
  pub dependencies: Vec<String>,
  pub files: Vec<ComponentFile>,
}
