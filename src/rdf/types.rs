//! Statement terms
//!
//! Thin wrappers over oxrdf so every IRI and language tag entering the term
//! graph has been validated once, at parse time.

use oxrdf::{
    NamedNode as OxNamedNode,
    BlankNode as OxBlankNode,
    Literal as OxLiteral,
};
use thiserror::Error;

/// Term construction errors
#[derive(Error, Debug)]
pub enum RdfError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid blank node: {0}")]
    InvalidBlankNode(String),

    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    pub fn new(iri: &str) -> RdfResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| RdfError::InvalidIri(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Strip a namespace from the IRI, returning the local part.
    ///
    /// Returns `None` when the IRI is outside the namespace or names the
    /// namespace itself.
    pub fn local_name<'a>(&'a self, namespace: &str) -> Option<&'a str> {
        self.as_str()
            .strip_prefix(namespace)
            .filter(|local| !local.is_empty())
    }
}

/// Blank node; never names a vocabulary term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(OxBlankNode);

impl BlankNode {
    pub fn new(id: &str) -> RdfResult<Self> {
        OxBlankNode::new(id)
            .map(Self)
            .map_err(|e| RdfError::InvalidBlankNode(e.to_string()))
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    pub fn new_language_tagged_literal(value: impl Into<String>, language: impl Into<String>) -> RdfResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| RdfError::InvalidLiteral(e.to_string()))
    }

    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Lexical form
    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }
}

/// Statement subject
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfSubject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl RdfSubject {
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfSubject::NamedNode(n) => Some(n),
            RdfSubject::BlankNode(_) => None,
        }
    }
}

impl From<NamedNode> for RdfSubject {
    fn from(node: NamedNode) -> Self {
        RdfSubject::NamedNode(node)
    }
}

impl From<BlankNode> for RdfSubject {
    fn from(node: BlankNode) -> Self {
        RdfSubject::BlankNode(node)
    }
}

/// Statement predicate (always an IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfPredicate(NamedNode);

impl RdfPredicate {
    pub fn new(iri: &str) -> RdfResult<Self> {
        Ok(Self(NamedNode::new(iri)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Statement object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<BlankNode> for RdfObject {
    fn from(node: BlankNode) -> Self {
        RdfObject::BlankNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(lit: Literal) -> Self {
        RdfObject::Literal(lit)
    }
}

/// One statement about a term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: RdfSubject,
    pub predicate: RdfPredicate,
    pub object: RdfObject,
}

impl Triple {
    pub fn new(subject: RdfSubject, predicate: RdfPredicate, object: RdfObject) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node() {
        let node = NamedNode::new("http://ex.org/v#Foo").unwrap();
        assert_eq!(node.as_str(), "http://ex.org/v#Foo");
        assert!(NamedNode::new("not an iri").is_err());
    }

    #[test]
    fn test_local_name() {
        let node = NamedNode::new("http://ex.org/v#Foo").unwrap();
        assert_eq!(node.local_name("http://ex.org/v#"), Some("Foo"));
        assert_eq!(node.local_name("http://other.org/"), None);

        let ontology = NamedNode::new("http://ex.org/v#").unwrap();
        assert_eq!(ontology.local_name("http://ex.org/v#"), None);
    }

    #[test]
    fn test_literal_language() {
        let lit = Literal::new_simple_literal("Foo");
        assert_eq!(lit.value(), "Foo");
        assert_eq!(lit.language(), None);

        let lit = Literal::new_language_tagged_literal("Foo", "en").unwrap();
        assert_eq!(lit.language(), Some("en"));
        assert!(Literal::new_language_tagged_literal("Foo", "not a tag!").is_err());
    }

    #[test]
    fn test_blank_subject_has_no_name() {
        let subject: RdfSubject = BlankNode::new("b0").unwrap().into();
        assert_eq!(subject.as_named_node(), None);

        let subject: RdfSubject = NamedNode::new("http://ex.org/v#Foo").unwrap().into();
        assert_eq!(subject.as_named_node().map(|n| n.as_str()), Some("http://ex.org/v#Foo"));
    }
}
