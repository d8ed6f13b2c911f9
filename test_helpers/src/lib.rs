//! Test helpers shared across the workspace.
//!
//! [`blog`] holds the small article domain the step examples are written
//! against, and [`logs`] captures `tracing` output so tests can assert on
//! warnings.

pub mod blog;
pub mod logs;
