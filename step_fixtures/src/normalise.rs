//! Canonical step phrases.
//!
//! Feature files prefix every step with a keyword (`Given`, `When`, `Then`,
//! `And`, `But`). Registrations and lookups both strip that keyword so the
//! same phrase is reached whichever conjunction the feature file uses.

use std::{borrow::Borrow, fmt};

const KEYWORDS: [&str; 5] = ["given", "when", "then", "and", "but"];

/// Remove one leading step keyword and surrounding whitespace from `raw`.
///
/// The keyword is matched case-insensitively and must be followed by
/// whitespace, so `"Andrew logs in"` keeps its first word. Phrases without a
/// keyword are returned trimmed.
///
/// # Examples
///
/// ```
/// use step_fixtures::normalise_phrase;
///
/// assert_eq!(normalise_phrase("Given I have an article"), "I have an article");
/// assert_eq!(normalise_phrase("  but   nothing else "), "nothing else");
/// assert_eq!(normalise_phrase("I have an article"), "I have an article");
/// ```
#[must_use]
pub fn normalise_phrase(raw: &str) -> String {
    strip_keyword(raw.trim()).to_owned()
}

fn strip_keyword(phrase: &str) -> &str {
    let Some((head, rest)) = phrase.split_once(char::is_whitespace) else {
        return phrase;
    };
    if KEYWORDS.iter().any(|kw| head.eq_ignore_ascii_case(kw)) {
        rest.trim_start()
    } else {
        phrase
    }
}

/// A normalised step phrase, used verbatim as a provider name.
///
/// The only way to build one is through [`StepPhrase::new`], so every value
/// has had its keyword removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepPhrase(String);

impl StepPhrase {
    /// Normalise `raw` into a phrase.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalise_phrase(raw))
    }

    /// Borrow the phrase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the phrase, returning the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StepPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StepPhrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StepPhrase {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepPhrase {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepPhrase {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for StepPhrase {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
