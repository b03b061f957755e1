//! Per-fragment field extraction: title, description, code and search text.

use regex::Regex;
use std::sync::LazyLock;

/// Fallback title when a fragment has no usable line at all.
pub(crate) const UNKNOWN_TITLE: &str = "Unknown";

const FALLBACK_TITLE_CHARS: usize = 50;
const MAX_INLINE_EXAMPLES: usize = 3;
const MIN_INLINE_EXAMPLE_CHARS: usize = 10;

/// Phrases that mark a sentence as explanatory enough to index.
const TRIGGER_PHRASES: &[&str] = &["used to", "allows you to", "returns"];

static DESCRIPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*\*description:\*\*\s*").unwrap());
static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.+?)(?:\s+#+)?$").unwrap());
static BOLD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^*]+?)\*\*$").unwrap());
static SIGNATURE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^`([^`]*\([^`]*)`$").unwrap());
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^[ \t]*```[^\n]*\n.*?^[ \t]*```[ \t]*$").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SLUG_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Trimmed, non-empty lines of a fragment.
pub(crate) fn content_lines(fragment: &str) -> Vec<&str> {
    fragment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn strip_label(line: &str) -> String {
    DESCRIPTION_LABEL.replace(line, "").trim().to_string()
}

/// First non-empty line with the `**Description:**` label removed.
pub(crate) fn description(lines: &[&str]) -> String {
    lines.first().map(|line| strip_label(line)).unwrap_or_default()
}

/// Picks a header, then a bold line, then a backticked call signature. The
/// description line itself and lines inside code fences are never candidates.
pub(crate) fn title(lines: &[&str]) -> String {
    let candidates: Vec<&str> = outside_fences(lines.get(1..).unwrap_or_default());

    if let Some(title) = first_capture(&candidates, &HEADER_LINE)
        .or_else(|| first_capture(&candidates, &BOLD_LINE))
        .or_else(|| first_capture(&candidates, &SIGNATURE_LINE))
    {
        return title;
    }

    let fallback: String = lines
        .first()
        .map(|line| strip_label(line))
        .unwrap_or_default()
        .chars()
        .take(FALLBACK_TITLE_CHARS)
        .collect();

    if fallback.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        fallback
    }
}

fn first_capture(lines: &[&str], pattern: &Regex) -> Option<String> {
    lines.iter().find_map(|line| {
        pattern
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
            .filter(|title| !title.is_empty())
    })
}

fn outside_fences<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut in_fence = false;
    let mut kept = Vec::with_capacity(lines.len());
    for line in lines {
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            kept.push(*line);
        }
    }
    kept
}

/// Every fenced block in order, then up to three long inline spans.
pub(crate) fn code_examples(fragment: &str) -> Vec<String> {
    let mut examples: Vec<String> = FENCED_BLOCK
        .find_iter(fragment)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let prose = FENCED_BLOCK.replace_all(fragment, "");
    examples.extend(
        INLINE_CODE
            .captures_iter(&prose)
            .filter(|caps| caps[1].chars().count() > MIN_INLINE_EXAMPLE_CHARS)
            .take(MAX_INLINE_EXAMPLES)
            .map(|caps| caps[0].to_string()),
    );

    examples
}

/// Lower-cased text the index searches beyond the structured fields.
pub(crate) fn searchable_text(title: &str, description: &str, content: &str) -> String {
    let bare_title = PARENTHESIZED.replace_all(title, "");
    let mut parts = vec![title.to_string(), bare_title.trim().to_string(), description.to_string()];

    parts.extend(
        content
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
            })
            .map(str::to_string),
    );

    parts.join(" ").to_lowercase()
}

/// URL-ish identifier fragment: lower-case, word characters and single hyphens.
pub(crate) fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lower, "");
    SLUG_SEPARATORS
        .replace_all(&cleaned, "-")
        .trim_matches('-')
        .to_string()
}
