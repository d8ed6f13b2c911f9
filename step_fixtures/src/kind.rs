//! Step kinds recognised by the registrar.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The three kinds of step a phrase can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Sets up state; the step function becomes a reusable named provider.
    Given,
    /// Performs the action under test.
    When,
    /// Asserts on the outcome.
    Then,
}

impl StepKind {
    /// Every kind, in scenario order.
    pub const ALL: [Self; 3] = [Self::Given, Self::When, Self::Then];

    /// Lowercase keyword for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
        }
    }

    /// Whether registering a step of this kind promotes the step function
    /// to a named provider that the trampoline looks up by name.
    ///
    /// `When` and `Then` steps run their function directly instead.
    #[must_use]
    pub const fn promotes_function(self) -> bool {
        matches!(self, Self::Given)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`StepKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step kind '{0}'; expected given, when or then")]
pub struct ParseStepKindError(String);

impl FromStr for StepKind {
    type Err = ParseStepKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStepKindError(s.to_owned()))
    }
}
