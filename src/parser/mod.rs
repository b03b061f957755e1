//! Splits a docs feed into sections and enriches each with derived metadata.
//!
//! The feed is a flat markdown document where every section starts with a
//! horizontal rule immediately followed by a bold `**Description:**` label.
//! Anything before the first such boundary is preamble and is discarded.
//! Parsing never fails: text without boundaries simply yields no sections.

mod extract;
pub(crate) mod rules;

use crate::types::DocumentSection;
use regex::Regex;
use rules::Subject;
use std::sync::LazyLock;

pub(crate) use extract::slug;

/// Section boundary: a `---` rule line, optional blank lines, then the label.
/// Group 1 is the label, which stays with the following fragment.
/// A setext heading underline followed by the label also counts as a boundary;
/// the heading text then stays at the end of the previous fragment.
static SECTION_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^-{3,}[ \t]*\r?\n\s*(\*\*description:\*\*)").unwrap()
});

/// Splits `text` at section boundaries. Index 0 is the preamble.
pub fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for caps in SECTION_BOUNDARY.captures_iter(text) {
        let (Some(rule), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        fragments.push(&text[start..rule.start()]);
        start = label.start();
    }
    fragments.push(&text[start..]);

    fragments
}

/// Parses a docs feed into sections owned by `repository`.
///
/// Deterministic: the same input always yields the same sections in the same
/// order. Sections without a title or description are dropped.
pub fn parse(text: &str, repository: &str) -> Vec<DocumentSection> {
    let sections: Vec<DocumentSection> = split_fragments(text)
        .into_iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, fragment)| parse_fragment(fragment, index, repository))
        .collect();

    tracing::debug!(
        "Parsed {} sections for '{}' from {} bytes",
        sections.len(),
        repository,
        text.len()
    );
    sections
}

fn parse_fragment(fragment: &str, index: usize, repository: &str) -> Option<DocumentSection> {
    let lines = extract::content_lines(fragment);
    let description = extract::description(&lines);
    let title = extract::title(&lines);
    if title.is_empty() || description.is_empty() {
        return None;
    }

    let subject = Subject::new(&title, fragment);

    Some(DocumentSection {
        id: format!("{}-{}-{}", repository, slug(&title), index),
        code_examples: extract::code_examples(fragment),
        tags: rules::tags(&title, fragment),
        category: rules::category(&subject),
        related: rules::related(&subject),
        searchable_text: extract::searchable_text(&title, &description, fragment),
        priority: rules::priority(&subject),
        content: fragment.to_string(),
        repository: repository.to_string(),
        title,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority};
    use assert2::check;

    #[test]
    fn test_single_section_scenario() {
        let text = "preamble\n---\n**Description:** Hook for state\n# useState\nReturns state and setter.";
        let sections = parse(text, "preact");

        check!(sections.len() == 1);
        let section = &sections[0];
        check!(section.title == "useState");
        check!(section.description == "Hook for state");
        check!(section.category == Category::Hooks);
        check!(section.id == "preact-usestate-1");
        check!(section.repository == "preact");
        check!(section.searchable_text.contains("returns state and setter"));
    }

    #[test]
    fn test_boundary_allows_blank_lines_and_longer_rules() {
        let text = "intro\n------\n\n**Description:** First\n## One\n---\n\n\n**Description:** Second\n## Two\n";
        let fragments = split_fragments(text);

        check!(fragments.len() == 3);
        check!(fragments[0] == "intro\n");
        check!(fragments[1].starts_with("**Description:** First"));
        check!(fragments[2].starts_with("**Description:** Second"));
    }

    #[test]
    fn test_plain_rules_are_not_boundaries() {
        let text = "intro\n---\n**Description:** Only\n# Only\n\nbody\n\n---\n\nmore body\n";
        let sections = parse(text, "preact");

        check!(sections.len() == 1);
        check!(sections[0].content.contains("more body"));
    }

    #[test]
    fn test_setext_underline_before_label_is_a_boundary() {
        let text = "pre\n---\n**Description:** A\n# Alpha\nSetext Title\n---\n**Description:** B\n# Beta\n";
        let sections = parse(text, "preact");

        check!(sections.len() == 2);
        check!(sections[0].content.ends_with("Setext Title\n"));
        check!(sections[1].title == "Beta");
        check!(!sections[1].content.contains("Setext Title"));
    }

    #[test]
    fn test_text_without_boundaries_yields_nothing() {
        check!(parse("# README\n\nJust some text.", "preact").is_empty());
        check!(parse("", "preact").is_empty());
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let text = "pre\n---\n**Description:**\n# Title Only\n---\n**Description:** Kept\n# Kept\n";
        let sections = parse(text, "preact");

        check!(sections.len() == 1);
        check!(sections[0].title == "Kept");
        check!(sections[0].id == "preact-kept-2");
    }

    #[test]
    fn test_priority_is_computed_per_section() {
        let text = "pre\n---\n**Description:** Start here\n# Getting Started\n---\n**Description:** Ref docs\n# API Reference\n```jsx\nh('div')\n```\n";
        let sections = parse(text, "preact");

        check!(sections[0].priority == Priority::Tutorial);
        check!(sections[1].priority == Priority::ApiReference);
        check!(sections[1].code_examples == vec!["```jsx\nh('div')\n```".to_string()]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "pre\n---\n**Description:** A\n# useEffect\nused to run effects. `useEffect(() => {}, [])`\n---\n**Description:** B\n## Components\nA component renders.\n";
        check!(parse(text, "preact") == parse(text, "preact"));
    }
}
