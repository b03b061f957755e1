//! Weighted inverted index over document sections, partitioned by repository.
//!
//! Each partition is rebuilt wholesale on reindex. Scores are TF-IDF with a
//! per-field boost; query terms are combined with OR and may match indexed
//! terms exactly, by prefix, or within a small edit distance.

use super::tokenize::Tokenizer;
use crate::types::DocumentSection;
use ahash::AHashMap;
use rapidfuzz::distance::levenshtein;

/// Weight of a prefix match relative to an exact one.
const PREFIX_WEIGHT: f32 = 0.6;
/// Weight of a one-edit fuzzy match; further edits divide it.
const FUZZY_WEIGHT: f32 = 0.45;

/// Indexed section fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Category,
    SearchableText,
    Tags,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Category,
        Self::SearchableText,
        Self::Tags,
    ];

    pub fn boost(self) -> f32 {
        match self {
            Self::Title => 3.0,
            Self::Description | Self::Category => 2.0,
            Self::SearchableText => 1.5,
            Self::Tags => 1.0,
        }
    }

    fn text(self, section: &DocumentSection) -> String {
        match self {
            Self::Title => section.title.clone(),
            Self::Description => section.description.clone(),
            Self::Category => section.category.as_str().to_string(),
            Self::SearchableText => section.searchable_text.clone(),
            Self::Tags => section.tags.join(" "),
        }
    }
}

/// A raw index hit: the section's position within its partition and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub ordinal: usize,
    pub score: f32,
}

/// One repository's terms: term → (ordinal, tf-idf weight).
#[derive(Debug, Default)]
struct Partition {
    doc_count: usize,
    postings: AHashMap<String, Vec<(usize, f32)>>,
}

#[derive(Debug)]
pub struct SearchIndex {
    partitions: AHashMap<String, Partition>,
    tokenizer: Tokenizer,
    fuzzy_ratio: f32,
}

impl SearchIndex {
    pub fn new(fuzzy_ratio: f32) -> Self {
        Self {
            partitions: AHashMap::new(),
            tokenizer: Tokenizer::default(),
            fuzzy_ratio,
        }
    }

    /// Drops whatever `repository` had indexed and indexes `sections` in order.
    pub fn replace(&mut self, repository: &str, sections: &[DocumentSection]) {
        self.partitions.remove(repository);

        let mut term_freqs: AHashMap<(String, usize), f32> = AHashMap::new();
        for (ordinal, section) in sections.iter().enumerate() {
            for field in Field::ALL {
                for term in self.tokenizer.tokenize(&field.text(section)) {
                    *term_freqs.entry((term, ordinal)).or_insert(0.0) += field.boost();
                }
            }
        }

        let mut grouped: AHashMap<String, Vec<(usize, f32)>> = AHashMap::new();
        for ((term, ordinal), tf) in term_freqs {
            grouped.entry(term).or_default().push((ordinal, tf));
        }

        let doc_count = sections.len();
        let postings = grouped
            .into_iter()
            .map(|(term, mut docs)| {
                let idf = (1.0 + doc_count as f32 / docs.len() as f32).ln();
                for (_, weight) in &mut docs {
                    *weight = (1.0 + weight.ln()) * idf;
                }
                docs.sort_by_key(|(ordinal, _)| *ordinal);
                (term, docs)
            })
            .collect::<AHashMap<_, _>>();

        tracing::debug!(
            "Indexed {} sections with {} terms for '{}'",
            doc_count,
            postings.len(),
            repository
        );

        self.partitions.insert(
            repository.to_string(),
            Partition {
                doc_count,
                postings,
            },
        );
    }

    pub fn document_count(&self, repository: &str) -> usize {
        self.partitions.get(repository).map_or(0, |p| p.doc_count)
    }

    /// Returns every section of `repository` that matches at least one query
    /// term, in insertion order.
    pub fn search(&self, repository: &str, query: &str) -> Vec<SearchHit> {
        let Some(partition) = self.partitions.get(repository) else {
            return vec![];
        };

        let tokens = self.tokenizer.tokenize(query);
        if tokens.is_empty() {
            return vec![];
        }

        let mut scores = vec![0.0_f32; partition.doc_count];
        for token in &tokens {
            for (term, docs) in &partition.postings {
                let Some(quality) = self.match_quality(token, term) else {
                    continue;
                };
                for (ordinal, weight) in docs {
                    scores[*ordinal] += quality * weight;
                }
            }
        }

        scores
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score > 0.0)
            .map(|(ordinal, score)| SearchHit { ordinal, score })
            .collect()
    }

    /// How well an indexed `term` answers a query `token`, if at all.
    fn match_quality(&self, token: &str, term: &str) -> Option<f32> {
        if term == token {
            return Some(1.0);
        }
        if term.starts_with(token) {
            return Some(PREFIX_WEIGHT);
        }

        let max_edits = self.max_edits(token);
        let (token_len, term_len) = (token.chars().count(), term.chars().count());
        if max_edits == 0 || token_len.abs_diff(term_len) > max_edits {
            return None;
        }

        let distance = levenshtein::distance(token.chars(), term.chars());
        (distance <= max_edits).then(|| FUZZY_WEIGHT / distance.max(1) as f32)
    }

    fn max_edits(&self, token: &str) -> usize {
        (self.fuzzy_ratio * token.chars().count() as f32).round() as usize
    }
}
