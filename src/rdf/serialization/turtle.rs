//! Turtle and N-Triples format implementation

use crate::rdf::{
    Triple, NamedNode, BlankNode, Literal, RdfSubject, RdfPredicate, RdfObject
};
use super::{ParseResult, ParseError};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use std::io::BufRead;

/// Turtle / N-Triples parser
pub struct TurtleParserWrapper;

impl TurtleParserWrapper {
    /// Parse Turtle to Triples, resolving relative IRIs against `base_iri`
    pub fn parse_turtle<R: BufRead>(reader: R, base_iri: Option<&str>) -> ParseResult<Vec<Triple>> {
        let base = base_iri
            .map(|b| oxiri::Iri::parse(b.to_string()))
            .transpose()
            .map_err(|e| ParseError::Parse(format!("invalid base IRI: {}", e)))?;

        let mut parser = TurtleParser::new(reader, base);
        collect(&mut parser)
    }

    /// Parse N-Triples to Triples
    pub fn parse_ntriples<R: BufRead>(reader: R) -> ParseResult<Vec<Triple>> {
        let mut parser = NTriplesParser::new(reader);
        collect(&mut parser)
    }
}

fn collect<P>(parser: &mut P) -> ParseResult<Vec<Triple>>
where
    P: TriplesParser,
    ParseError: From<P::Error>,
{
    let mut triples = Vec::new();
    parser.parse_all(&mut |t| -> ParseResult<()> {
        let subject = convert_subject(t.subject)?;
        let predicate = convert_predicate(t.predicate)?;
        let object = convert_object(t.object)?;

        triples.push(Triple::new(subject, predicate, object));
        Ok(())
    })?;
    Ok(triples)
}

fn convert_subject(s: rio_api::model::Subject) -> Result<RdfSubject, ParseError> {
    match s {
        rio_api::model::Subject::NamedNode(n) => {
            Ok(RdfSubject::NamedNode(NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?))
        },
        rio_api::model::Subject::BlankNode(b) => {
            Ok(RdfSubject::BlankNode(BlankNode::new(b.id).map_err(|e| ParseError::Parse(e.to_string()))?))
        },
        _ => Err(ParseError::Parse("Unsupported subject type".to_string())),
    }
}

fn convert_predicate(p: rio_api::model::NamedNode) -> Result<RdfPredicate, ParseError> {
    RdfPredicate::new(p.iri).map_err(|e| ParseError::Parse(e.to_string()))
}

fn convert_object(o: rio_api::model::Term) -> Result<RdfObject, ParseError> {
    match o {
        rio_api::model::Term::NamedNode(n) => {
            Ok(RdfObject::NamedNode(NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?))
        },
        rio_api::model::Term::BlankNode(b) => {
            Ok(RdfObject::BlankNode(BlankNode::new(b.id).map_err(|e| ParseError::Parse(e.to_string()))?))
        },
        rio_api::model::Term::Literal(l) => {
            match l {
                rio_api::model::Literal::Simple { value } => {
                    Ok(RdfObject::Literal(Literal::new_simple_literal(value)))
                },
                rio_api::model::Literal::LanguageTaggedString { value, language } => {
                    Ok(RdfObject::Literal(
                        Literal::new_language_tagged_literal(value, language)
                            .map_err(|e| ParseError::Parse(e.to_string()))?
                    ))
                },
                rio_api::model::Literal::Typed { value, datatype } => {
                    let dt = NamedNode::new(datatype.iri)
                        .map_err(|e| ParseError::Parse(e.to_string()))?;
                    Ok(RdfObject::Literal(Literal::new_typed_literal(value, dt)))
                }
            }
        },
        _ => Err(ParseError::Parse("Unsupported object type".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turtle_prefixes_and_literals() {
        let input = r#"
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ex: <http://ex.org/v#> .
            ex:Foo a rdfs:Class ;
                rdfs:label "Foo"@en ;
                rdfs:comment "A (test) class" .
        "#;
        let triples = TurtleParserWrapper::parse_turtle(input.as_bytes(), None).unwrap();
        assert_eq!(triples.len(), 3);
        assert!(triples.iter().all(|t| t.subject.as_named_node().is_some()));
        assert!(matches!(triples[0].object, RdfObject::NamedNode(_)));
        assert!(matches!(&triples[1].object, RdfObject::Literal(l) if l.language() == Some("en")));
    }

    #[test]
    fn test_turtle_relative_iris_use_base() {
        let input = "<#Foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2000/01/rdf-schema#Class> .";
        let triples = TurtleParserWrapper::parse_turtle(input.as_bytes(), Some("http://ex.org/v")).unwrap();
        assert_eq!(
            triples[0].subject.as_named_node().map(|n| n.as_str()),
            Some("http://ex.org/v#Foo")
        );
    }

    #[test]
    fn test_ntriples() {
        let input = "<http://example.org/a> <http://example.org/b> \"c\" .\n_:x <http://example.org/b> <http://example.org/a> .\n";
        let triples = TurtleParserWrapper::parse_ntriples(input.as_bytes()).unwrap();
        assert_eq!(triples.len(), 2);
        assert!(matches!(triples[1].subject, RdfSubject::BlankNode(_)));
    }
}
