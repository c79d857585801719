//! CLI integration tests.

mod add_tests;
mod common;
mod init_tests;
