//! Vocabulary source generation
//!
//! Turns the statements describing a vocabulary into a Ruby `RDF::Vocabulary`
//! class body:
//! - Terms are materialized from the term graph under a base URI
//! - Each term is classified as a class, property, datatype or other term
//! - Terms are ordered by IRI and attributes by key
//! - Attribute values are written as frozen literals
//!
//! # Example
//!
//! ```rust
//! use rdf_vocabgen::rdf::{NamedNode, RdfPredicate, Triple};
//! use rdf_vocabgen::vocab::{GeneratorConfig, VocabularyGenerator};
//!
//! let config = GeneratorConfig::new("http://ex.org/v#", "Ex");
//! let mut generator = VocabularyGenerator::new(Vec::new(), config).unwrap();
//!
//! generator.insert(Triple::new(
//!     NamedNode::new("http://ex.org/v#Foo").unwrap().into(),
//!     RdfPredicate::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").unwrap(),
//!     NamedNode::new("http://www.w3.org/2002/07/owl#Class").unwrap().into(),
//! )).unwrap();
//!
//! let report = generator.finish().unwrap();
//! assert_eq!(report.total_terms(), 1);
//!
//! let source = String::from_utf8(generator.into_inner()).unwrap();
//! assert!(source.contains("    term :Foo,\n      type: \"owl:Class\".freeze"));
//! ```

mod classify;
mod config;
mod emit;
mod error;
mod generator;
mod serialize;
mod term;
mod value;

pub use classify::{classify, Bucket, TypeResolution};
pub use config::{GeneratorConfig, DEFAULT_MODULE, NO_MODULE};
pub use emit::emit_declaration;
pub use error::{VocabError, VocabResult};
pub use generator::{GenerationReport, GeneratorState, VocabularyGenerator};
pub use serialize::{
    escape_free_text, inspect, is_free_text_key, serialize_attribute, serialize_value, symbol,
    COMMENT_KEY,
};
pub use term::{parse_extra, AttributeMap, ExtraTerms, Term, Vocabulary, TYPE_KEY, VOCAB_KEY};
pub use value::{AttributeValue, Value};
