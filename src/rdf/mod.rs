//! RDF statement model for vocabulary generation
//!
//! This module provides the pieces the generator consumes:
//! - RDF triples (subject-predicate-object)
//! - The set-valued term graph that collects them
//! - Namespace prefixes for compact IRIs
//! - Turtle / N-Triples input
//!
//! # Example
//!
//! ```rust
//! use rdf_vocabgen::rdf::{TermGraph, Triple, NamedNode, Literal, RdfPredicate};
//!
//! let mut graph = TermGraph::new();
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = RdfPredicate::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let object = Literal::new_simple_literal("Alice");
//!
//! let triple = Triple::new(subject.clone().into(), predicate, object.into());
//! assert!(graph.insert(triple.clone()));
//! assert!(!graph.insert(triple));
//!
//! assert_eq!(graph.len(), 1);
//! assert_eq!(graph.triples_with_subject(&subject.into()).len(), 1);
//! ```

mod types;
mod store;
mod namespace;
mod serialization;

pub use types::{
    RdfSubject, RdfPredicate, RdfObject,
    NamedNode, BlankNode, Literal, Triple,
    RdfError, RdfResult,
};

pub use store::TermGraph;

pub use namespace::{
    NamespaceManager,
    PrefixError, PrefixResult,
    RDF, RDFS, XSD, OWL, SCHEMA,
};

pub use serialization::{
    RdfFormat, RdfParser,
    ParseError, ParseResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_module_exports() {
        let _graph: TermGraph = TermGraph::new();
        let _ns_mgr = NamespaceManager::new();
        let _format = RdfFormat::default();
    }
}
