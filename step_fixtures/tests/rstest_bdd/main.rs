//! `rstest-bdd` behavioural suite for `step_fixtures`.
//!
//! [`fixtures`] provides the shared scenario state, [`steps`] registers the
//! step implementations, and [`scenarios`] binds the feature files.

mod fixtures;
mod scenarios;
mod steps;
