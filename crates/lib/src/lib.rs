//! atomic-lib: Core types and logic for atomic
//!
//! This crate provides everything behind the `atomic` CLI except terminal I/O:
//! - `init`: validate a project, collect choices, write config, fetch theme, install
//! - `add`: fetch components into an initialized project
//! - `resolve`: turn import aliases into absolute paths via tsconfig paths
//! - `registry`: the remote component registry client
//! - `package_manager` / `install`: detect and run the project's package manager

pub mod add;
pub mod config;
pub mod consts;
pub mod init;
pub mod install;
pub mod package_manager;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod resolve;
pub mod util;
