//! A tiny blog domain for step examples.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Author of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
}

impl Author {
    /// Create an author called `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

/// An article written by an [`Author`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Sequential identifier.
    pub id: usize,
    /// Article title.
    pub title: String,
    /// Who wrote it.
    pub author: Author,
}

/// Issues article identifiers and counts how many articles were created.
///
/// Clones share the counter, so a provider closure can hold one clone while
/// the test inspects another.
#[derive(Debug, Clone, Default)]
pub struct ArticleFactory {
    created: Arc<AtomicUsize>,
}

impl ArticleFactory {
    /// Create a factory that has produced nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an article titled `title` by `author`.
    #[must_use]
    pub fn create(&self, title: &str, author: Author) -> Article {
        let id = self.created.fetch_add(1, Ordering::SeqCst) + 1;
        Article {
            id,
            title: title.to_owned(),
            author,
        }
    }

    /// Number of articles created so far.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}
