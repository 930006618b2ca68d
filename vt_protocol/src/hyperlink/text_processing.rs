// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HyperlinkFilter, LinkMatch};

/// An ordered list of filters, run over a whole line.
///
/// Each filter is applied repeatedly to the text after its previous match, so one that
/// only reports the first match still finds all of them. When matches from different
/// filters overlap, the filter added first wins.
#[derive(Default)]
pub struct TextProcessing {
    filters: Vec<Box<dyn HyperlinkFilter>>,
}

impl std::fmt::Debug for TextProcessing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextProcessing")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl TextProcessing {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_filter(mut self, filter: impl HyperlinkFilter + 'static) -> Self {
        self.add_filter(filter);
        self
    }

    pub fn add_filter(&mut self, filter: impl HyperlinkFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.filters.is_empty() }

    /// Every link in `line`, sorted by start offset, with no two overlapping.
    #[must_use]
    pub fn find_links(&self, line: &str) -> Vec<LinkMatch> {
        let mut links: Vec<LinkMatch> = vec![];

        for filter in &self.filters {
            let mut offset = 0;
            while let Some(rest) = line.get(offset..).filter(|rest| !rest.is_empty()) {
                let Some(found) = filter.apply(rest) else { break };

                // A filter that returns an empty span or one outside `rest` would loop
                // forever or panic when sliced.
                if found.range.is_empty() || rest.get(found.range.clone()).is_none() {
                    tracing::debug!(range = ?found.range, "filter returned an invalid range");
                    break;
                }

                let found = found.offset_by(offset);
                offset = found.range.end;
                if !links.iter().any(|link| link.overlaps(&found)) {
                    links.push(found);
                }
            }
        }

        links.sort_by_key(|link| link.range.start);
        links
    }
}
