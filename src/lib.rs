//! RDF Vocabulary Generator
//!
//! Converts the RDF statements that describe a controlled vocabulary
//! (classes, properties, datatypes and their metadata) into a Ruby
//! `RDF::Vocabulary` source file that can be compiled into an application
//! as a constant table of terms.
//!
//! # Pipeline
//!
//! 1. Statements are parsed (Turtle / N-Triples) and collected into a
//!    set-valued [`TermGraph`](rdf::TermGraph).
//! 2. On end of input the graph is materialized into a
//!    [`Vocabulary`](vocab::Vocabulary) under the configured base URI,
//!    and operator-supplied extra attributes are merged in.
//! 3. Every term is classified into the class, property, datatype or
//!    other section from its declared types.
//! 4. Sections are written in fixed order, terms sorted by IRI and
//!    attributes sorted by key, each value as a frozen literal.
//!
//! Output is deterministic: regenerating from the same statements in any
//! order produces byte-identical source.
//!
//! ## Example Usage
//!
//! ```rust
//! use rdf_vocabgen::{GeneratorConfig, RdfFormat, RdfParser, VocabularyGenerator};
//!
//! let input = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     <http://ex.org/v#Foo> a rdfs:Class ;
//!         rdfs:comment "A (test) value" .
//! "#;
//!
//! let config = GeneratorConfig::new("http://ex.org/v#", "Ex");
//! let mut generator = VocabularyGenerator::new(Vec::new(), config).unwrap();
//! generator.insert_all(RdfParser::parse(input, RdfFormat::Turtle, None).unwrap()).unwrap();
//! generator.finish().unwrap();
//!
//! let source = String::from_utf8(generator.into_inner()).unwrap();
//! assert!(source.contains("comment: %(A \\(test\\) value).freeze"));
//! ```

#![warn(clippy::all)]

pub mod rdf;
pub mod vocab;

// Re-export main types for convenience
pub use rdf::{
    NamedNode, BlankNode, Literal, Triple,
    RdfSubject, RdfPredicate, RdfObject,
    TermGraph, NamespaceManager,
    RdfFormat, RdfParser, ParseError, ParseResult,
};

pub use vocab::{
    Bucket, GenerationReport, GeneratorConfig, GeneratorState,
    VocabError, VocabResult, Vocabulary, VocabularyGenerator,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
