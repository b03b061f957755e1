//! Ordered classification tables.
//!
//! Each table is a list of `(predicate, value)` rules over a lower-cased view
//! of a section. Category rules are first-match-wins; priority rules are
//! last-match-wins so later, more specific classes override earlier ones.

use crate::types::{Category, Priority};
use regex::Regex;
use std::sync::LazyLock;

/// Lower-cased view of a section that rules are evaluated against.
#[derive(Debug, Clone)]
pub(crate) struct Subject {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl Subject {
    pub(crate) fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            content: content.to_lowercase(),
        }
    }
}

pub(crate) struct Rule<T: 'static> {
    pub(crate) name: &'static str,
    pub(crate) matches: fn(&Subject) -> bool,
    pub(crate) value: T,
}

fn title_has_any(subject: &Subject, needles: &[&str]) -> bool {
    needles.iter().any(|n| subject.title.contains(n))
}

pub(crate) static CATEGORY_RULES: &[Rule<Category>] = &[
    Rule {
        name: "hooks",
        matches: |s| {
            s.title.contains("hook") || s.content.contains("usehook") || s.title.starts_with("use")
        },
        value: Category::Hooks,
    },
    Rule {
        name: "components",
        matches: |s| s.title.contains("component"),
        value: Category::Components,
    },
    Rule {
        name: "api",
        matches: |s| title_has_any(s, &["api", "reference"]),
        value: Category::Api,
    },
    Rule {
        name: "guides",
        matches: |s| title_has_any(s, &["guide", "getting started", "tutorial", "introduction"]),
        value: Category::Guides,
    },
    Rule {
        name: "signals",
        matches: |s| s.title.contains("signal") || s.content.contains("@preact/signals"),
        value: Category::Signals,
    },
    Rule {
        name: "routing",
        matches: |s| {
            s.title.contains("rout")
                || s.content.contains("preact-iso")
                || s.content.contains("preact-router")
        },
        value: Category::Routing,
    },
    Rule {
        name: "testing",
        matches: |s| s.title.contains("test") || s.content.contains("@testing-library"),
        value: Category::Testing,
    },
    Rule {
        name: "typescript",
        matches: |s| s.title.contains("typescript") || s.content.contains("```ts"),
        value: Category::TypeScript,
    },
];

pub(crate) fn category(subject: &Subject) -> Category {
    let rule = CATEGORY_RULES.iter().find(|rule| (rule.matches)(subject));
    if let Some(rule) = rule {
        tracing::trace!("Category rule '{}' matched '{}'", rule.name, subject.title);
    }
    rule.map_or(Category::General, |rule| rule.value)
}

pub(crate) static PRIORITY_RULES: &[Rule<Priority>] = &[
    Rule {
        name: "tutorial",
        matches: |s| title_has_any(s, &["getting started", "tutorial", "hello world", "example"]),
        value: Priority::Tutorial,
    },
    Rule {
        name: "code-example",
        matches: |s| s.content.contains("```js") || s.content.contains("```typescript"),
        value: Priority::CodeExample,
    },
    Rule {
        name: "core-concept",
        matches: |s| {
            title_has_any(s, &["component", "hooks", "signals", "forms", "state", "props"])
        },
        value: Priority::CoreConcept,
    },
    Rule {
        name: "setup",
        matches: |s| title_has_any(s, &["installation", "configuration", "setup"]),
        value: Priority::Setup,
    },
    Rule {
        name: "api-reference",
        matches: |s| title_has_any(s, &["api", "reference"]),
        value: Priority::ApiReference,
    },
];

pub(crate) fn priority(subject: &Subject) -> Priority {
    let rule = PRIORITY_RULES
        .iter()
        .rev()
        .find(|rule| (rule.matches)(subject));
    if let Some(rule) = rule {
        tracing::trace!("Priority rule '{}' matched '{}'", rule.name, subject.title);
    }
    rule.map_or(Priority::Other, |rule| rule.value)
}

/// Concept vocabulary detected by substring anywhere in a section.
pub(crate) const CONCEPT_VOCABULARY: &[&str] = &[
    "hooks",
    "state",
    "props",
    "component",
    "jsx",
    "render",
    "effect",
    "context",
    "router",
    "signal",
    "fragment",
    "portal",
    "suspense",
    "lazy",
    "memo",
    "ref",
    "lifecycle",
    "event",
    "form",
    "testing",
    "typescript",
    "ssr",
];

static CALL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z_$][\w$]*\([^()\n]*\)").unwrap());
static API_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:api|interface)\b").unwrap());

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// Title words, matched vocabulary, plus the `function` and `api` markers.
pub(crate) fn tags(title: &str, content: &str) -> Vec<String> {
    let mut tags = Vec::new();

    for word in title.split(|c: char| !c.is_alphabetic()) {
        if word.chars().count() > 2 {
            push_unique(&mut tags, &word.to_lowercase());
        }
    }

    let content_lower = content.to_lowercase();
    for term in CONCEPT_VOCABULARY {
        if content_lower.contains(term) {
            push_unique(&mut tags, term);
        }
    }

    if CALL_TOKEN.is_match(content) || title.contains("()") {
        push_unique(&mut tags, "function");
    }
    if API_MENTION.is_match(content) {
        push_unique(&mut tags, "api");
    }

    tags
}

/// Concept associations, additive.
pub(crate) static RELATED_RULES: &[Rule<&[&str]>] = &[
    Rule {
        name: "usestate",
        matches: |s| s.title.contains("usestate"),
        value: &["useState", "useEffect", "hooks"],
    },
    Rule {
        name: "useeffect",
        matches: |s| s.title.contains("useeffect"),
        value: &["useEffect", "lifecycle", "useState"],
    },
    Rule {
        name: "component",
        matches: |s| s.content.contains("component"),
        value: &["props", "state", "render"],
    },
    Rule {
        name: "signal",
        matches: |s| s.content.contains("signal"),
        value: &["reactive", "state management", "computed"],
    },
];

pub(crate) fn related(subject: &Subject) -> Vec<String> {
    let mut related = Vec::new();
    for rule in RELATED_RULES.iter().filter(|rule| (rule.matches)(subject)) {
        tracing::trace!("Related rule '{}' matched '{}'", rule.name, subject.title);
        for concept in rule.value {
            push_unique(&mut related, concept);
        }
    }
    related
}
