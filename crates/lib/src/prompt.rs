//! Operator interaction used by `init`.
//!
//! The library only drives the questions; rendering them is up to the
//! caller's [`Prompter`].

use thiserror::Error;

use crate::registry::Theme;

/// Errors raised while asking the operator something.
#[derive(Debug, Error)]
pub enum PromptError {
  /// The operator aborted the prompt.
  #[error("operation cancelled")]
  Cancelled,

  /// The prompt could not be shown or read.
  #[error("prompt failed: {0}")]
  Interaction(String),
}

/// Asks the operator the `init` questions, one at a time.
pub trait Prompter {
  /// Picks exactly one theme out of `themes`.
  fn select_theme(&mut self, themes: &[Theme]) -> Result<Theme, PromptError>;

  /// Asks where the global stylesheet lives, suggesting `default`.
  fn stylesheet_path(&mut self, default: &str) -> Result<String, PromptError>;

  /// Asks for the components import alias, suggesting `default`.
  fn components_alias(&mut self, default: &str) -> Result<String, PromptError>;

  /// Asks a yes/no question. `false` means the operator declined.
  fn confirm(&mut self, message: &str) -> Result<bool, PromptError>;
}
