//! Add command integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, UNREACHABLE_REGISTRY};

fn initialized_project() -> TestEnv {
  let env = TestEnv::next_project();
  let config = serde_json::json!({
    "theme": { "name": "slate", "css": "src/styles/globals.css" },
    "alias": { "components": "@/components" }
  });
  env.write_file(
    "getatomic.components.json",
    &serde_json::to_string_pretty(&config).unwrap(),
  );
  env
}

#[test]
fn add_without_config_fails() {
  let env = TestEnv::next_project();

  env
    .atomic_cmd(UNREACHABLE_REGISTRY)
    .args(["add", "button", "--cwd"])
    .arg(env.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("atomic init"));
}

#[test]
fn add_writes_component_files() {
  let env = initialized_project();
  let mut server = mockito::Server::new();
  let component = server
    .mock("GET", "/components/button")
    .with_status(200)
    .with_body(r#"{"name":"button","files":[{"name":"button.tsx","content":"export const Button = () => null;\n"}]}"#)
    .create();

  env
    .atomic_cmd(&server.url())
    .args(["add", "button", "--cwd"])
    .arg(env.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Added button"));

  component.assert();
  let written = std::fs::read_to_string(env.path().join("src/components/button.tsx")).unwrap();
  assert_eq!(written, "export const Button = () => null;\n");
}

#[test]
fn add_keeps_existing_files_without_overwrite() {
  let env = initialized_project();
  env.write_file("src/components/button.tsx", "// customized");
  let mut server = mockito::Server::new();
  server
    .mock("GET", "/components/button")
    .with_status(200)
    .with_body(r#"{"name":"button","files":[{"name":"button.tsx","content":"fresh"}]}"#)
    .create();

  env
    .atomic_cmd(&server.url())
    .args(["add", "button", "--cwd"])
    .arg(env.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("--overwrite"));

  let kept = std::fs::read_to_string(env.path().join("src/components/button.tsx")).unwrap();
  assert_eq!(kept, "// customized");
}

#[test]
fn add_unknown_component_fails() {
  let env = initialized_project();
  let mut server = mockito::Server::new();
  server.mock("GET", "/components/carousel").with_status(404).create();

  env
    .atomic_cmd(&server.url())
    .args(["add", "carousel", "--cwd"])
    .arg(env.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("HTTP 404"));
}
