use std::fmt;

/// Topical classification of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hooks,
    Components,
    Api,
    Guides,
    Signals,
    Routing,
    Testing,
    TypeScript,
    General,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hooks => "hooks",
            Self::Components => "components",
            Self::Api => "api",
            Self::Guides => "guides",
            Self::Signals => "signals",
            Self::Routing => "routing",
            Self::Testing => "testing",
            Self::TypeScript => "typescript",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse usefulness class used to order search hits before their score.
/// Lower rank = shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Tutorial,
    CodeExample,
    CoreConcept,
    Setup,
    ApiReference,
    Other,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Self::Tutorial => 1,
            Self::CodeExample => 2,
            Self::CoreConcept | Self::Setup => 3,
            Self::ApiReference => 4,
            Self::Other => 5,
        }
    }
}

/// A parsed, addressable unit of documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    /// `{repository}-{slug(title)}-{fragment index}`
    pub id: String,
    pub title: String,
    pub description: String,
    /// Raw text of the whole fragment.
    pub content: String,
    /// Fenced blocks first, then up to three long inline spans.
    pub code_examples: Vec<String>,
    pub tags: Vec<String>,
    pub category: Category,
    pub related: Vec<String>,
    pub searchable_text: String,
    pub priority: Priority,
    pub repository: String,
}
