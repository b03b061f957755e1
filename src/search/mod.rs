//! Full-text search over parsed documentation sections.
//!
//! [`DocsIndex`] owns the per-repository [`SectionStore`] and [`SearchIndex`]
//! and keeps them in step: a reindex replaces both for one repository and
//! leaves every other repository untouched.

pub(crate) mod index;
pub(crate) mod ranking;
pub(crate) mod store;
pub(crate) mod tokenize;

pub use index::{Field, SearchHit, SearchIndex};
pub use ranking::{RankedSection, rank};
pub use store::SectionStore;

use crate::config::EngineConfig;
use crate::format::format_sections;
use crate::types::DocumentSection;

#[derive(Debug)]
pub struct DocsIndex {
    store: SectionStore,
    index: SearchIndex,
    max_results: usize,
}

impl DocsIndex {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            store: SectionStore::default(),
            index: SearchIndex::new(config.fuzzy_ratio),
            max_results: config.max_results,
        }
    }

    /// Replaces `repository`'s sections and index entries with `sections`.
    /// Returns the number of sections now indexed for it.
    pub fn reindex(&mut self, repository: &str, sections: Vec<DocumentSection>) -> usize {
        self.index.replace(repository, &sections);
        let previous = self.store.replace(repository, sections);
        let count = self.store.len(repository);
        tracing::info!(
            "Reindexed '{}': {} sections (previously {})",
            repository,
            count,
            previous
        );
        count
    }

    /// Ranked sections of `repository` matching `query`, at most `max_results`.
    pub fn ranked(&self, query: &str, repository: &str) -> Vec<RankedSection<'_>> {
        let hits = self.index.search(repository, query);
        tracing::debug!(
            "Query '{}' matched {} sections in '{}'",
            query,
            hits.len(),
            repository
        );
        rank(&hits, self.store.sections(repository), self.max_results)
    }

    /// Ranked results rendered as text blocks separated by a blank line.
    /// Empty when nothing matched.
    pub fn search(&self, query: &str, repository: &str, include_examples: bool) -> String {
        let ranked = self.ranked(query, repository);
        format_sections(ranked.iter().map(|r| r.section), query, include_examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::types::Priority;
    use assert2::check;

    fn feed_with(count: usize) -> String {
        let mut text = String::from("preamble\n");
        for i in 0..count {
            text.push_str(&format!(
                "---\n**Description:** Widget number {i}\n# Widget {i}\nA widget section.\n"
            ));
        }
        text
    }

    #[test]
    fn test_search_caps_results() {
        let mut docs = DocsIndex::new(&EngineConfig::default());
        docs.reindex("preact", parse(&feed_with(25), "preact"));

        check!(docs.ranked("widget", "preact").len() == 10);
        check!(docs.search("widget", "preact", true).matches("### Widget").count() == 10);
    }

    #[test]
    fn test_lower_priority_number_always_first() {
        let text = "pre
---
**Description:** Reference material about refs and refs and refs
# API Reference: refs
refs refs refs refs
---
**Description:** Learn the basics
# Tutorial
Mentions refs once.
";
        let mut docs = DocsIndex::new(&EngineConfig::default());
        docs.reindex("preact", parse(text, "preact"));

        let ranked = docs.ranked("refs", "preact");
        check!(ranked.len() == 2);
        check!(ranked[0].section.priority == Priority::Tutorial);
        check!(ranked[1].section.priority == Priority::ApiReference);
        check!(ranked[1].score > ranked[0].score);
    }

    #[test]
    fn test_reindex_replaces_previous_generation() {
        let mut docs = DocsIndex::new(&EngineConfig::default());
        docs.reindex("preact", parse(&feed_with(3), "preact"));
        docs.reindex("@preact/signals", parse(&feed_with(2), "@preact/signals"));
        docs.reindex(
            "preact",
            parse("pre\n---\n**Description:** Gadget\n# Gadget\n", "preact"),
        );

        check!(docs.search("widget", "preact", false).is_empty());
        check!(docs.search("gadget", "preact", false) == "### Gadget\nGadget\n**Tags:** gadget");
        check!(docs.ranked("widget", "@preact/signals").len() == 2);
    }
}
