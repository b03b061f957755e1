//! Orders raw index hits for presentation.
//!
//! Priority class comes first (lower rank wins), then raw score (higher
//! wins). The sort is stable, so equal keys keep the index's insertion order.

use super::index::SearchHit;
use crate::types::DocumentSection;
use std::collections::HashSet;

/// A section paired with the score it matched with.
#[derive(Debug, Clone, Copy)]
pub struct RankedSection<'a> {
    pub section: &'a DocumentSection,
    pub score: f32,
}

/// Resolves `hits` against `sections`, ranks them, drops duplicate ids and
/// keeps at most `limit`.
pub fn rank<'a>(
    hits: &[SearchHit],
    sections: &'a [DocumentSection],
    limit: usize,
) -> Vec<RankedSection<'a>> {
    let mut ranked: Vec<RankedSection<'a>> = hits
        .iter()
        .filter_map(|hit| {
            sections.get(hit.ordinal).map(|section| RankedSection {
                section,
                score: hit.score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.section
            .priority
            .rank()
            .cmp(&b.section.priority.rank())
            .then_with(|| b.score.total_cmp(&a.score))
    });

    let mut seen = HashSet::new();
    ranked.retain(|r| seen.insert(r.section.id.as_str()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority};
    use assert2::check;

    fn section(id: &str, priority: Priority) -> DocumentSection {
        DocumentSection {
            id: id.to_string(),
            title: id.to_string(),
            description: "d".to_string(),
            content: String::new(),
            code_examples: vec![],
            tags: vec![],
            category: Category::General,
            related: vec![],
            searchable_text: String::new(),
            priority,
            repository: "preact".to_string(),
        }
    }

    fn hit(ordinal: usize, score: f32) -> SearchHit {
        SearchHit { ordinal, score }
    }

    fn ids(ranked: &[RankedSection<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.section.id.clone()).collect()
    }

    #[test]
    fn test_priority_beats_score() {
        let sections = vec![
            section("api", Priority::ApiReference),
            section("tutorial", Priority::Tutorial),
            section("other", Priority::Other),
        ];
        let hits = [hit(0, 100.0), hit(1, 0.1), hit(2, 50.0)];

        check!(ids(&rank(&hits, &sections, 10)) == vec!["tutorial", "api", "other"]);
    }

    #[test]
    fn test_score_breaks_priority_ties() {
        let sections = vec![
            section("low", Priority::CoreConcept),
            section("high", Priority::Setup),
        ];
        let hits = [hit(0, 1.0), hit(1, 2.0)];

        check!(ids(&rank(&hits, &sections, 10)) == vec!["high", "low"]);
    }

    #[test]
    fn test_full_ties_keep_insertion_order() {
        let sections = vec![
            section("a", Priority::CodeExample),
            section("b", Priority::CodeExample),
            section("c", Priority::CodeExample),
        ];
        let hits = [hit(0, 1.0), hit(1, 1.0), hit(2, 1.0)];

        check!(ids(&rank(&hits, &sections, 10)) == vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dedupes_and_caps() {
        let mut sections: Vec<_> = (0..15)
            .map(|i| section(&format!("s{i}"), Priority::Other))
            .collect();
        sections[1].id = "s0".to_string();
        let hits: Vec<_> = (0..15).map(|i| hit(i, 1.0)).collect();

        let ranked = rank(&hits, &sections, 10);
        check!(ranked.len() == 10);
        check!(ranked.iter().filter(|r| r.section.id == "s0").count() == 1);
    }

    #[test]
    fn test_stale_ordinals_are_ignored() {
        let sections = vec![section("only", Priority::Other)];
        check!(rank(&[hit(5, 1.0)], &sections, 10).is_empty());
    }
}
