// src/locale.rs
//! Locale preference list
//!
//! An empty list is a sentinel meaning "use the environment default". What
//! that default is belongs to the consumer; see [`Locale::or_fallback`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Vec<String>);

impl Locale {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Configured tags in preference order, duplicates included
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_environment_default(&self) -> bool {
        self.0.is_empty()
    }

    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Tags in preference order with case-insensitive repeats dropped
    pub fn unique(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.0.len());
        for tag in &self.0 {
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                seen.push(tag);
            }
        }
        seen
    }

    /// Tags repeated (case-insensitively) after their first occurrence
    pub fn duplicates(&self) -> Vec<&str> {
        self.0
            .iter()
            .enumerate()
            .filter(|(i, tag)| self.0[..*i].iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .map(|(_, tag)| tag.as_str())
            .collect()
    }

    /// Configured tags, or `fallback` when the list defers to the environment
    pub fn or_fallback<'a>(&'a self, fallback: &'a str) -> Vec<&'a str> {
        if self.is_environment_default() {
            vec![fallback]
        } else {
            self.unique()
        }
    }
}
