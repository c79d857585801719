//! Init command integration tests.
//!
//! Interactive success paths are covered by the library tests; these check
//! every way `atomic init` can fail before it needs a terminal.

use predicates::prelude::*;

use super::common::{TestEnv, UNREACHABLE_REGISTRY};

#[test]
fn init_missing_directory_fails() {
  let env = TestEnv::empty();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .arg("init")
    .arg("--cwd")
    .arg(env.path().join("missing"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn init_without_package_json_fails() {
  let env = TestEnv::empty();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .arg("init")
    .arg("-c")
    .arg(env.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("package.json"));

  assert!(!env.config_file().exists());
}

#[test]
fn init_without_framework_fails() {
  let env = TestEnv::empty();
  env.write_file("package.json", r#"{ "dependencies": { "express": "4.19.0" } }"#);

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .arg("init")
    .arg("--cwd")
    .arg(env.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("supported framework"));

  assert!(!env.config_file().exists());
}

#[test]
fn init_defaults_to_current_directory() {
  let env = TestEnv::empty();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .current_dir(env.path())
    .arg("init")
    .assert()
    .failure()
    .stderr(predicate::str::contains("package.json"));
}

#[test]
fn init_unreachable_registry_fails_without_writing() {
  let env = TestEnv::next_project();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .arg("init")
    .arg("--cwd")
    .arg(env.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("could not reach registry"));

  assert!(!env.config_file().exists());
}

#[test]
fn init_registry_error_status_fails() {
  let env = TestEnv::next_project();
  let mut server = mockito::Server::new();
  server.mock("GET", "/themes").with_status(500).create();

  env
    .atomic_cmd(&server.url())
    .arg("init")
    .arg("--cwd")
    .arg(env.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("HTTP 500"));

  assert!(!env.config_file().exists());
}

#[test]
fn init_without_terminal_fails_before_writing() {
  let env = TestEnv::next_project();
  let mut server = mockito::Server::new();
  let themes = server
    .mock("GET", "/themes")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"[{"id":"1","name":"slate"}]"#)
    .create();

  env
    .atomic_cmd(&server.url())
    .arg("init")
    .arg("--cwd")
    .arg(env.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("non-interactive"));

  themes.assert();
  assert!(!env.config_file().exists());
}

#[test]
fn registry_url_flag_overrides_env() {
  let env = TestEnv::next_project();
  let mut server = mockito::Server::new();
  let themes = server.mock("GET", "/themes").with_status(503).create();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .arg("--registry-url")
    .arg(server.url())
    .arg("init")
    .arg("--cwd")
    .arg(env.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("HTTP 503"));

  themes.assert();
}
