//! Currently indexed sections, scoped per repository.

use crate::types::DocumentSection;
use std::collections::HashMap;

/// Holds one generation of sections per repository. Replacing a repository's
/// sections never touches another repository's entries.
#[derive(Debug, Default)]
pub struct SectionStore {
    repositories: HashMap<String, Vec<DocumentSection>>,
}

impl SectionStore {
    /// Swaps in a new generation for `repository`, returning how many sections
    /// the old generation had.
    pub fn replace(&mut self, repository: &str, sections: Vec<DocumentSection>) -> usize {
        self.repositories
            .insert(repository.to_string(), sections)
            .map_or(0, |old| old.len())
    }

    /// Sections of `repository` in insertion order.
    pub fn sections(&self, repository: &str) -> &[DocumentSection] {
        self.repositories
            .get(repository)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, repository: &str, id: &str) -> Option<&DocumentSection> {
        self.sections(repository).iter().find(|s| s.id == id)
    }

    pub fn len(&self, repository: &str) -> usize {
        self.sections(repository).len()
    }

    pub fn total(&self) -> usize {
        self.repositories.values().map(Vec::len).sum()
    }
}
