//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation.

use std::collections::BTreeMap;
use thiserror::Error;

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const SCHEMA: &str = "http://schema.org/";

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace manager with common prefixes
///
/// Prefixes live in a sorted map so that compaction is deterministic when
/// several namespaces match the same IRI.
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: BTreeMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self {
            prefixes: BTreeMap::new(),
        };

        // Add common RDF/RDFS/OWL prefixes
        mgr.add_prefix("rdf", RDF);
        mgr.add_prefix("rdfs", RDFS);
        mgr.add_prefix("xsd", XSD);
        mgr.add_prefix("owl", OWL);
        mgr.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        mgr.add_prefix("dc", "http://purl.org/dc/terms/");
        mgr.add_prefix("dc11", "http://purl.org/dc/elements/1.1/");
        mgr.add_prefix("skos", "http://www.w3.org/2004/02/skos/core#");
        mgr.add_prefix("schema", SCHEMA);
        mgr.add_prefix("vs", "http://www.w3.org/2003/06/sw-vocab-status/ns#");

        mgr
    }

    /// Add a prefix, replacing any previous mapping for it
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        if let Some((prefix, local)) = compact_iri.split_once(':') {
            let iri = self.get_iri(prefix)?;
            Ok(format!("{}{}", iri, local))
        } else {
            Err(PrefixError::InvalidIri(compact_iri.to_string()))
        }
    }

    /// Compact an IRI using known prefixes
    ///
    /// The longest matching namespace wins; ties go to the alphabetically
    /// first prefix. Returns `None` if no namespace matches or the remaining
    /// local part is not a plain name.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter_map(|(prefix, namespace_iri)| {
                iri.strip_prefix(namespace_iri.as_str())
                    .map(|local| (prefix, namespace_iri.len(), local))
            })
            .filter(|(_, _, local)| is_plain_local_name(local))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(prefix, _, local)| format!("{}:{}", prefix, local))
    }

    /// Compact an IRI, falling back to the full IRI
    pub fn compact_or_iri(&self, iri: &str) -> String {
        self.compact(iri).unwrap_or_else(|| iri.to_string())
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

fn is_plain_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.ends_with('.')
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
