//! Renders ranked sections as human-readable text blocks.

use crate::types::{Category, DocumentSection};
use std::fmt::Write as _;

/// Concept → one-line usage note. Checked in order against the query first,
/// then the section title; the first concept found wins.
const USAGE_NOTES: &[(&str, &str)] = &[
    (
        "usestate",
        "Use `useState` to keep local state in a function component; calling the setter re-renders it.",
    ),
    (
        "useeffect",
        "Use `useEffect` for side effects that run after render; return a cleanup function to undo them.",
    ),
    (
        "usecontext",
        "Use `useContext` to read the nearest provider's value without threading props through every level.",
    ),
    (
        "useref",
        "Use `useRef` to hold a mutable value or DOM node that survives re-renders without triggering one.",
    ),
    (
        "usememo",
        "Use `useMemo` to cache an expensive computation until its dependencies change.",
    ),
    (
        "usecallback",
        "Use `useCallback` to keep a function identity stable between renders.",
    ),
    (
        "computed",
        "Use `computed` to derive a signal whose value updates automatically when its inputs change.",
    ),
    (
        "signal",
        "Use signals for reactive state: reading `.value` subscribes, writing it updates only the dependents.",
    ),
    (
        "context",
        "Use context to share values such as themes or the current user across a component tree.",
    ),
    (
        "fragment",
        "Use `Fragment` (or `<>...</>`) to return several siblings without an extra wrapper element.",
    ),
    (
        "portal",
        "Use `createPortal` to render children into a DOM node outside the parent hierarchy.",
    ),
    (
        "suspense",
        "Use `Suspense` with `lazy` to show a fallback while code or data is loading.",
    ),
    (
        "hydrate",
        "Use `hydrate` to attach event listeners to server-rendered markup instead of re-rendering it.",
    ),
    (
        "router",
        "Use a router to map URLs to components and navigate without full page reloads.",
    ),
    (
        "form",
        "Use controlled inputs with `onInput` to keep form fields in sync with component state.",
    ),
    (
        "props",
        "Props are read-only inputs passed from parent to child; derive state from them rather than mutating them.",
    ),
    (
        "render",
        "Use `render(<App />, container)` to mount a component tree into a DOM element.",
    ),
];

/// Fallback usage note when no concept matched.
fn category_note(category: Category) -> Option<&'static str> {
    match category {
        Category::Hooks => Some("Hooks let function components use state and side effects; call them at the top level of the component."),
        Category::Components => Some("Components are functions or classes that take props and return a virtual DOM tree."),
        Category::Api => Some("Check the signature and return value before use; this section documents a public API."),
        Category::Guides => Some("Follow the steps in order; later sections build on earlier ones."),
        Category::Signals => Some("Signals hold reactive values; components that read them update automatically."),
        Category::Routing => Some("Routing maps the current URL to the component that should render."),
        Category::Testing => Some("Render the component in a test environment and assert on the resulting DOM."),
        Category::TypeScript => Some("Type annotations here are checked at compile time and have no runtime cost."),
        Category::General => None,
    }
}

fn usage_note(section: &DocumentSection, query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    let title = section.title.to_lowercase();

    USAGE_NOTES
        .iter()
        .find(|(concept, _)| query.contains(concept))
        .or_else(|| USAGE_NOTES.iter().find(|(concept, _)| title.contains(concept)))
        .map(|(_, note)| *note)
        .or_else(|| category_note(section.category))
}

/// Renders one section. The example block, when requested, holds exactly the
/// first code example.
pub fn format_section(section: &DocumentSection, query: &str, include_examples: bool) -> String {
    let mut output = format!("### {}\n", section.title);

    if section.category != Category::General {
        writeln!(output, "**Category:** {}", section.category).unwrap();
    }
    writeln!(output, "{}", section.description).unwrap();

    if include_examples && let Some(example) = section.code_examples.first() {
        writeln!(output, "**Example:**\n{}", example).unwrap();
    }
    if let Some(note) = usage_note(section, query) {
        writeln!(output, "**Usage:** {}", note).unwrap();
    }
    if !section.related.is_empty() {
        writeln!(output, "**Related:** {}", section.related.join(", ")).unwrap();
    }
    if !section.tags.is_empty() {
        writeln!(output, "**Tags:** {}", section.tags.join(", ")).unwrap();
    }

    output.truncate(output.trim_end().len());
    output
}

/// Renders sections in order, separated by a blank line.
pub fn format_sections<'a>(
    sections: impl IntoIterator<Item = &'a DocumentSection>,
    query: &str,
    include_examples: bool,
) -> String {
    sections
        .into_iter()
        .map(|section| format_section(section, query, include_examples))
        .collect::<Vec<_>>()
        .join("\n\n")
}
