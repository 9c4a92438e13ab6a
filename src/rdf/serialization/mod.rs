//! RDF input formats
//!
//! Supports:
//! - Turtle (TTL)
//! - N-Triples (NT)

mod turtle;

pub use turtle::TurtleParserWrapper;

use super::Triple;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// RDF input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    #[default]
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
}

impl RdfFormat {
    /// Guess the format from a file extension, defaulting to Turtle
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("nt") => RdfFormat::NTriples,
            _ => RdfFormat::Turtle,
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error reported by the Turtle / N-Triples reader
    #[error("Syntax error: {0}")]
    Syntax(#[from] rio_turtle::TurtleError),

    /// Statement could not be converted into the graph model
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// RDF parser
pub struct RdfParser;

impl RdfParser {
    /// Parse RDF data from a string
    pub fn parse(input: &str, format: RdfFormat, base_iri: Option<&str>) -> ParseResult<Vec<Triple>> {
        Self::parse_reader(input.as_bytes(), format, base_iri)
    }

    /// Parse RDF data from a buffered reader
    pub fn parse_reader<R: BufRead>(
        reader: R,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> ParseResult<Vec<Triple>> {
        match format {
            RdfFormat::Turtle => TurtleParserWrapper::parse_turtle(reader, base_iri),
            RdfFormat::NTriples => TurtleParserWrapper::parse_ntriples(reader),
        }
    }

    /// Parse RDF data from a file
    pub fn parse_file(path: &Path, format: RdfFormat, base_iri: Option<&str>) -> ParseResult<Vec<Triple>> {
        let file = std::fs::File::open(path)?;
        Self::parse_reader(std::io::BufReader::new(file), format, base_iri)
    }
}
