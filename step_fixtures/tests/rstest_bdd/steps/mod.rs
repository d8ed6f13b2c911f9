//! Behavioural step modules registered with `rstest-bdd`.

pub mod registration_steps;
