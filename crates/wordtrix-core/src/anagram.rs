//! The anagram predicate.
//!
//! Two subjects are anagrams when, after normalization, every character
//! occurs the same number of times in both. Normalization removes U+0020
//! spaces (other whitespace is kept) and, unless the comparison is
//! case-sensitive, folds to lowercase.

use std::collections::HashMap;

/// Normalization policy for anagram comparison.
///
/// The default is case-insensitive, which is what the record collection
/// uses for both `check` and `find_matches`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnagramOptions {
    pub case_sensitive: bool,
}

impl AnagramOptions {
    pub fn case_sensitive() -> Self {
        Self { case_sensitive: true }
    }

    /// Apply the normalization step alone: drop spaces, then fold case
    /// unless `case_sensitive` is set.
    pub fn normalize(&self, subject: &str) -> String {
        let stripped: String = subject.chars().filter(|&c| c != ' ').collect();
        if self.case_sensitive {
            stripped
        } else {
            stripped.to_lowercase()
        }
    }

    pub fn is_anagram(&self, a: &str, b: &str) -> bool {
        let a = self.normalize(a);
        let b = self.normalize(b);

        if a.chars().count() != b.chars().count() {
            return false;
        }

        histogram(&a) == histogram(&b)
    }
}

/// Check whether `a` and `b` are anagrams of each other.
///
/// Never fails: empty and space-only subjects normalize to the empty string,
/// which is an anagram of itself only.
pub fn is_anagram(a: &str, b: &str, case_sensitive: bool) -> bool {
    AnagramOptions { case_sensitive }.is_anagram(a, b)
}

fn histogram(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
