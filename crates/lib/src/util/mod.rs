//! Shared utilities.
//!
//! Filesystem helpers and test doubles for the registry, prompt and installer seams.

pub mod fs;

#[cfg(test)]
pub mod testutil;
