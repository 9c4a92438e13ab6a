//! Term graph: the statement set collected for one generation run
//!
//! Statements are kept in arrival order; re-asserting a statement is a no-op.

use super::types::{RdfSubject, Triple};
use indexmap::{IndexMap, IndexSet};

/// Set-valued statement store with a subject index
///
/// Vocabulary materialization walks the graph subject by subject, so the
/// index keeps each subject's statement positions in arrival order.
#[derive(Debug, Clone, Default)]
pub struct TermGraph {
    /// All triples (primary storage, arrival order)
    triples: IndexSet<Triple>,

    /// Subject -> statement positions
    subject_index: IndexMap<RdfSubject, Vec<usize>>,
}

impl TermGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple, returning `false` if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        let subject = triple.subject.clone();
        let (position, inserted) = self.triples.insert_full(triple);
        if inserted {
            self.subject_index.entry(subject).or_default().push(position);
        }
        inserted
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Distinct subjects, in order of first appearance
    pub fn subjects(&self) -> impl Iterator<Item = &RdfSubject> {
        self.subject_index.keys()
    }

    /// Get triples with a specific subject, in arrival order
    pub fn triples_with_subject(&self, subject: &RdfSubject) -> Vec<&Triple> {
        self.subject_index
            .get(subject)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&i| self.triples.get_index(i))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Extend<Triple> for TermGraph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}
