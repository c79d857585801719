//! Loading path mappings from `tsconfig.json` / `jsconfig.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::normalize;

/// Config files searched for path aliases, in order.
const CONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
  #[serde(default)]
  compiler_options: RawCompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompilerOptions {
  base_url: Option<String>,
  #[serde(default)]
  paths: serde_json::Map<String, serde_json::Value>,
}

/// Path aliases declared by the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
  /// Absolute directory that alias targets are relative to
  pub base_url: PathBuf,
  /// Alias patterns and their target lists
  pub paths: Vec<(String, Vec<String>)>,
}

impl PathMapping {
  /// Maps `alias` to an absolute path using TypeScript's path-mapping rules.
  ///
  /// Exact patterns beat wildcard ones; among wildcards the longest prefix
  /// wins. Only the first target of the winning pattern is used.
  pub fn match_alias(&self, alias: &str) -> Option<PathBuf> {
    let mut best: Option<(&str, &[String], usize)> = None;

    for (pattern, targets) in &self.paths {
      match pattern.split_once('*') {
        None => {
          if pattern == alias {
            best = Some(("", targets.as_slice(), usize::MAX));
            break;
          }
        }
        Some((prefix, suffix)) => {
          let fits = alias.len() >= prefix.len() + suffix.len()
            && alias.starts_with(prefix)
            && alias.ends_with(suffix);
          if !fits {
            continue;
          }
          if best.is_some_and(|(_, _, len)| len >= prefix.len()) {
            continue;
          }
          let captured = &alias[prefix.len()..alias.len() - suffix.len()];
          best = Some((captured, targets.as_slice(), prefix.len()));
        }
      }
    }

    let (captured, targets, _) = best?;
    let target = targets.first()?;
    let path = self.base_url.join(target.replacen('*', captured, 1));
    Some(normalize(&path))
  }
}

/// Loads the path mapping for the project at `project_dir`.
///
/// Returns `None` when no config file exists or it cannot be parsed.
pub fn load_path_mapping(project_dir: &Path) -> Option<PathMapping> {
  let path = CONFIG_FILES
    .iter()
    .map(|name| project_dir.join(name))
    .find(|p| p.is_file())?;

  let content = match fs::read_to_string(&path) {
    Ok(c) => c,
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to read path alias config");
      return None;
    }
  };

  let raw: RawConfig = match serde_json::from_str(&strip_jsonc(&content)) {
    Ok(raw) => raw,
    Err(e) => {
      warn!(path = %path.display(), error = %e, "failed to parse path alias config");
      return None;
    }
  };

  let config_dir = path.parent().unwrap_or(project_dir);
  let base_url = match raw.compiler_options.base_url {
    Some(base) => normalize(&config_dir.join(base)),
    None => config_dir.to_path_buf(),
  };

  let paths = raw
    .compiler_options
    .paths
    .into_iter()
    .map(|(pattern, targets)| {
      let targets = targets
        .as_array()
        .map(|list| list.iter().filter_map(|t| t.as_str().map(str::to_string)).collect())
        .unwrap_or_default();
      (pattern, targets)
    })
    .collect();

  debug!(path = %path.display(), base_url = %base_url.display(), "loaded path aliases");
  Some(PathMapping { base_url, paths })
}

/// Turns JSON-with-comments into plain JSON.
///
/// Drops a leading byte order mark, `//` and `/* */` comments, and trailing
/// commas before `}` or `]`. String literals are left untouched.
pub(crate) fn strip_jsonc(input: &str) -> String {
  let input = input.strip_prefix('\u{feff}').unwrap_or(input);
  let without_comments = strip_comments(input);
  strip_trailing_commas(&without_comments)
}

fn strip_comments(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.chars().peekable();
  let mut in_string = false;

  while let Some(c) = chars.next() {
    if in_string {
      out.push(c);
      match c {
        '\\' => {
          if let Some(escaped) = chars.next() {
            out.push(escaped);
          }
        }
        '"' => in_string = false,
        _ => {}
      }
      continue;
    }

    let next = chars.peek().copied();
    match (c, next) {
      ('"', _) => {
        in_string = true;
        out.push(c);
      }
      ('/', Some('/')) => {
        for skipped in chars.by_ref() {
          if skipped == '\n' {
            out.push('\n');
            break;
          }
        }
      }
      ('/', Some('*')) => {
        chars.next();
        let mut prev = '\0';
        for skipped in chars.by_ref() {
          if prev == '*' && skipped == '/' {
            break;
          }
          prev = skipped;
        }
        out.push(' ');
      }
      _ => out.push(c),
    }
  }

  out
}

fn strip_trailing_commas(input: &str) -> String {
  let chars: Vec<char> = input.chars().collect();
  let mut out = String::with_capacity(input.len());
  let mut in_string = false;
  let mut i = 0;

  while i < chars.len() {
    let c = chars[i];
    if in_string {
      out.push(c);
      if c == '\\' {
        if let Some(&escaped) = chars.get(i + 1) {
          out.push(escaped);
          i += 1;
        }
      } else if c == '"' {
        in_string = false;
      }
    } else if c == '"' {
      in_string = true;
      out.push(c);
    } else if c == ',' {
      let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
      if !matches!(next, Some('}') | Some(']')) {
        out.push(c);
      }
    } else {
      out.push(c);
    }
    i += 1;
  }

  out
}
