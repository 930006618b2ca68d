// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HyperlinkFilter, LinkMatch};
use regex::Regex;
use std::sync::LazyLock;

/// Scheme or `www.` prefix, then URL characters. The last character may not be
/// punctuation that usually ends a sentence (`.`, `,`, `;`, `:`, `!`, `?`).
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:mailto:|(?:news|(?:ht|f)tps?)://|www\.)[-A-Za-z0-9+$&@#/%?=~_|!:,.;]*[-A-Za-z0-9+$&@#/%=~_|]",
    )
    .expect("Invalid URL regex")
});

/// Matches `http(s)://`, `ftp(s)://`, `news://`, `mailto:` and bare `www.` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlFilter;

impl UrlFilter {
    /// Cheap check that rules out most lines before the regex runs.
    #[must_use]
    pub fn can_contain_url(line: &str) -> bool {
        line.contains("://") || line.contains("mailto:") || line.contains("www.")
    }
}

impl HyperlinkFilter for UrlFilter {
    fn apply(&self, line: &str) -> Option<LinkMatch> {
        if !Self::can_contain_url(line) {
            return None;
        }

        URL_REGEX
            .find_iter(line)
            .find(|found| !is_embedded_www(line, found.start(), found.as_str()))
            .map(|found| LinkMatch::new(found.range(), found.as_str()))
    }
}

/// `www.` glued to a preceding word or dot, like `foo.www.bar`, is not a link.
fn is_embedded_www(line: &str, start: usize, matched: &str) -> bool {
    matched.starts_with("www.")
        && line[..start]
            .chars()
            .next_back()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_' || ch == '.')
}
