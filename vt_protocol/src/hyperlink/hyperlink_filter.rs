// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Where a link points. How it is opened (browser, editor, ...) is up to the embedder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkInfo {
    pub destination: String,
}

/// A link found in one line of decoded text. Recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkMatch {
    /// Byte offsets into the line that was scanned.
    pub range: Range<usize>,
    pub link: LinkInfo,
}

impl LinkMatch {
    pub fn new(range: Range<usize>, destination: impl Into<String>) -> Self {
        Self {
            range,
            link: LinkInfo {
                destination: destination.into(),
            },
        }
    }

    /// The matched text, or [`None`] if `line` is not the line this match came from.
    #[must_use]
    pub fn text<'a>(&self, line: &'a str) -> Option<&'a str> { line.get(self.range.clone()) }

    /// The span in display columns, for highlighting on a grid where wide characters
    /// take two cells.
    #[must_use]
    pub fn column_range(&self, line: &str) -> Option<Range<usize>> {
        let start = line.get(..self.range.start)?.width();
        let width = self.text(line)?.width();
        Some(start..start + width)
    }

    pub(crate) fn offset_by(mut self, delta: usize) -> Self {
        self.range = self.range.start + delta..self.range.end + delta;
        self
    }

    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

/// Scans a line of decoded text for a link. Returns the first match only; see
/// [`TextProcessing`] to collect all of them.
///
/// Any `Fn(&str) -> Option<LinkMatch>` closure is a filter too.
///
/// [`TextProcessing`]: crate::TextProcessing
pub trait HyperlinkFilter: Send + Sync {
    fn apply(&self, line: &str) -> Option<LinkMatch>;
}

impl<F> HyperlinkFilter for F
where
    F: Fn(&str) -> Option<LinkMatch> + Send + Sync,
{
    fn apply(&self, line: &str) -> Option<LinkMatch> { self(line) }
}
