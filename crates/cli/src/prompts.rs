//! Interactive prompts for `atomic init`, rendered with dialoguer.

use std::io::{self, IsTerminal};

use atomic_lib::prompt::{PromptError, Prompter};
use atomic_lib::registry::Theme;
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// Returns the dialoguer theme used by every atomic prompt.
pub fn atomic_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// [`Prompter`] that asks on the operator's terminal.
pub struct TerminalPrompter {
  theme: ColorfulTheme,
}

impl TerminalPrompter {
  pub fn new() -> Self {
    Self { theme: atomic_theme() }
  }
}

impl Default for TerminalPrompter {
  fn default() -> Self {
    Self::new()
  }
}

fn ensure_interactive() -> Result<(), PromptError> {
  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    return Err(PromptError::Interaction(
      "cannot prompt in non-interactive mode; run `atomic init` from a terminal".to_string(),
    ));
  }
  Ok(())
}

fn map_dialoguer_err(err: dialoguer::Error) -> PromptError {
  match err {
    dialoguer::Error::IO(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof) => {
      PromptError::Cancelled
    }
    dialoguer::Error::IO(e) => PromptError::Interaction(e.to_string()),
  }
}

impl Prompter for TerminalPrompter {
  fn select_theme(&mut self, themes: &[Theme]) -> Result<Theme, PromptError> {
    ensure_interactive()?;

    let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
    let selection = Select::with_theme(&self.theme)
      .with_prompt("Which theme would you like to use?")
      .items(&names)
      .default(0)
      .interact_opt()
      .map_err(map_dialoguer_err)?;

    match selection {
      Some(index) => Ok(themes[index].clone()),
      None => Err(PromptError::Cancelled),
    }
  }

  fn stylesheet_path(&mut self, default: &str) -> Result<String, PromptError> {
    ensure_interactive()?;

    Input::<String>::with_theme(&self.theme)
      .with_prompt("Where is your global CSS file?")
      .default(default.to_string())
      .interact_text()
      .map(|s| s.trim().to_string())
      .map_err(map_dialoguer_err)
  }

  fn components_alias(&mut self, default: &str) -> Result<String, PromptError> {
    ensure_interactive()?;

    Input::<String>::with_theme(&self.theme)
      .with_prompt("Configure the import alias for components")
      .default(default.to_string())
      .interact_text()
      .map(|s| s.trim().to_string())
      .map_err(map_dialoguer_err)
  }

  fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
    ensure_interactive()?;

    Confirm::with_theme(&self.theme)
      .with_prompt(message)
      .default(true)
      .interact_opt()
      .map_err(map_dialoguer_err)?
      .ok_or(PromptError::Cancelled)
  }
}
