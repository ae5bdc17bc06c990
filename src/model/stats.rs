//! Live document statistics derived from markup

use serde::Serialize;

use crate::util::markup::strip_tags;

/// Character and word counts of the plain text behind some markup.
///
/// Always derived from content; never stored apart from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub char_count: usize,
    pub word_count: usize,
}

impl Stats {
    /// Compute stats for serialized markup.
    ///
    /// Tags are removed; whitespace is kept in `char_count`. Words are the
    /// non-empty runs between whitespace.
    pub fn of(content: &str) -> Self {
        let plain = strip_tags(content);
        Self {
            char_count: plain.chars().count(),
            word_count: plain.split_whitespace().count(),
        }
    }
}
