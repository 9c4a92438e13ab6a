//! Vocabulary terms materialized from a term graph

use super::classify::TypeResolution;
use super::error::VocabResult;
use super::value::{AttributeValue, Value};
use crate::rdf::{
    NamedNode, NamespaceManager, RdfObject, RdfPredicate, TermGraph, RDF, RDFS, SCHEMA,
};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// Reserved attribute recording the owning vocabulary
pub const VOCAB_KEY: &str = "vocab";

/// Attribute key used for declared types
pub const TYPE_KEY: &str = "type";

/// Attribute key → value, in first-seen order
pub type AttributeMap = IndexMap<String, AttributeValue>;

/// Operator-supplied extra attributes: term name → attribute → JSON value
pub type ExtraTerms = IndexMap<String, IndexMap<String, serde_json::Value>>;

/// Parse extra term data from JSON
pub fn parse_extra(json: &str) -> VocabResult<ExtraTerms> {
    Ok(serde_json::from_str(json)?)
}

/// A named vocabulary term
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    iri: String,
    name: String,
    types: Vec<String>,
    attributes: AttributeMap,
}

impl Term {
    fn new(base_uri: &str, name: &str, vocab: &str) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert(
            VOCAB_KEY.to_string(),
            AttributeValue::Scalar(Value::Reference(vocab.to_string())),
        );
        Self {
            iri: format!("{}{}", base_uri, name),
            name: name.to_string(),
            types: Vec::new(),
            attributes,
        }
    }

    /// Full IRI (the term's identity)
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// Local name relative to the vocabulary base URI
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type IRIs
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn add_attribute(&mut self, key: String, value: Value) {
        match self.attributes.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                self.attributes.insert(key, AttributeValue::Scalar(value));
            }
        }
    }
}

/// Read-only view of a term graph as a vocabulary
#[derive(Debug, Clone)]
pub struct Vocabulary {
    base_uri: String,
    class_name: String,
    namespaces: NamespaceManager,
    terms: IndexMap<String, Term>,
}

impl Vocabulary {
    /// Materialize the terms under `base_uri` from a graph
    ///
    /// The vocabulary's own namespace is registered under the lower-cased
    /// class name so references between its terms compact to `prefix:Name`.
    pub fn from_graph(graph: &TermGraph, base_uri: &str, class_name: &str) -> Self {
        let mut namespaces = NamespaceManager::new();
        if !class_name.is_empty() {
            namespaces.add_prefix(class_name.to_lowercase(), base_uri);
        }

        let mut vocab = Self {
            base_uri: base_uri.to_string(),
            class_name: class_name.to_string(),
            namespaces,
            terms: IndexMap::new(),
        };

        let mut skipped = 0usize;
        for subject in graph.subjects() {
            let statements = graph.triples_with_subject(subject);
            let Some(name) = subject.as_named_node().and_then(|n| n.local_name(base_uri)) else {
                skipped += statements.len();
                continue;
            };

            for triple in statements {
                let key = vocab.attribute_key(&triple.predicate);
                let value = match &triple.object {
                    RdfObject::NamedNode(n) => Some(Value::Reference(vocab.namespaces.compact_or_iri(n.as_str()))),
                    RdfObject::Literal(l) if is_english(l.language()) => Some(Value::String(l.value().to_string())),
                    RdfObject::Literal(_) | RdfObject::BlankNode(_) => None,
                };

                let term = vocab.term_entry(name);
                if key == TYPE_KEY {
                    if let RdfObject::NamedNode(n) = &triple.object {
                        term.types.push(n.as_str().to_string());
                    }
                }
                if let Some(value) = value {
                    term.add_attribute(key, value);
                }
            }
        }

        debug!(
            "Materialized {} terms under <{}>, skipped {} statements outside the namespace",
            vocab.terms.len(),
            base_uri,
            skipped
        );
        vocab
    }

    /// Merge operator-supplied attributes, overriding keys already present
    ///
    /// Entries are matched to terms by local name, so `Foo` and
    /// `<base>Foo` name the same term. Returns how many entries landed on a
    /// term an earlier entry had already supplied.
    pub fn merge_extra(&mut self, extra: &ExtraTerms) -> usize {
        let mut merged: IndexSet<String> = IndexSet::new();
        let mut overwrites = 0;

        for (term_name, attributes) in extra {
            let name = term_name
                .strip_prefix(self.base_uri.as_str())
                .unwrap_or(term_name.as_str())
                .to_string();
            if name.is_empty() {
                warn!("Ignoring extra attributes for the vocabulary namespace itself");
                continue;
            }
            if !merged.insert(name.clone()) {
                overwrites += 1;
                warn!("Extra entry {} redefines term {}; later values win", term_name, name);
            }

            let types: Option<Vec<String>> = attributes.get(TYPE_KEY).map(|t| {
                AttributeValue::from(t.clone())
                    .values()
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| self.expand(s))
                    .collect()
            });

            let term = self.term_entry(&name);
            for (key, value) in attributes {
                term.attributes.insert(key.clone(), AttributeValue::from(value.clone()));
            }
            if let Some(types) = types {
                term.types = types;
            }
        }
        overwrites
    }

    /// Resolve a term's declared types
    ///
    /// A type under the vocabulary's own namespace that names no term is
    /// unresolved (a forward or self reference).
    pub fn resolve_types(&self, term: &Term) -> TypeResolution {
        let mut resolved = Vec::with_capacity(term.types.len());
        for type_iri in &term.types {
            if let Some(local) = type_iri.strip_prefix(self.base_uri.as_str()) {
                if !local.is_empty() && !self.terms.contains_key(local) {
                    return TypeResolution::Unresolved {
                        reference: type_iri.clone(),
                    };
                }
            }
            resolved.push(type_iri.as_str());
        }
        TypeResolution::Resolved(resolved.join(", "))
    }

    /// Terms ordered by IRI
    pub fn sorted_terms(&self) -> Vec<&Term> {
        let mut terms: Vec<&Term> = self.terms.values().collect();
        terms.sort_by(|a, b| a.iri.cmp(&b.iri));
        terms
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn term_entry(&mut self, name: &str) -> &mut Term {
        let (base_uri, class_name) = (&self.base_uri, &self.class_name);
        self.terms
            .entry(name.to_string())
            .or_insert_with(|| Term::new(base_uri, name, class_name))
    }

    fn attribute_key(&self, predicate: &RdfPredicate) -> String {
        let iri = predicate.as_str();
        let short = if let Some(local) = iri.strip_prefix(RDFS) {
            match local {
                "subClassOf" | "subPropertyOf" | "domain" | "range" | "comment" | "label" => Some(local),
                _ => None,
            }
        } else if let Some(local) = iri.strip_prefix(SCHEMA) {
            match local {
                "inverseOf" | "domainIncludes" | "rangeIncludes" => Some(local),
                _ => None,
            }
        } else if iri == format!("{}type", RDF) {
            Some(TYPE_KEY)
        } else {
            None
        };

        match short {
            Some(key) => key.to_string(),
            None => self.namespaces.compact_or_iri(iri),
        }
    }

    fn expand(&self, reference: &str) -> String {
        self.namespaces
            .expand(reference)
            .ok()
            .filter(|iri| NamedNode::new(iri).is_ok())
            .unwrap_or_else(|| reference.to_string())
    }
}

fn is_english(language: Option<&str>) -> bool {
    match language {
        None => true,
        Some(lang) => {
            let lang = lang.to_ascii_lowercase();
            lang == "en" || lang.starts_with("en-")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, Triple, OWL};

    const BASE: &str = "http://ex.org/v#";

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn pred(iri: &str) -> RdfPredicate {
        RdfPredicate::new(iri).unwrap()
    }

    fn graph(triples: Vec<Triple>) -> TermGraph {
        let mut g = TermGraph::new();
        g.extend(triples);
        g
    }

    fn rdf_type() -> RdfPredicate {
        pred(&format!("{}type", RDF))
    }

    #[test]
    fn test_from_graph_collects_terms_and_keys() {
        let foo = node("http://ex.org/v#Foo");
        let g = graph(vec![
            Triple::new(foo.clone().into(), rdf_type(), node(&format!("{}Class", RDFS)).into()),
            Triple::new(foo.clone().into(), pred(&format!("{}label", RDFS)), Literal::new_simple_literal("Foo").into()),
            Triple::new(foo.clone().into(), pred(&format!("{}subClassOf", RDFS)), node("http://ex.org/v#Bar").into()),
            Triple::new(foo.into(), pred("http://purl.org/dc/terms/title"), Literal::new_simple_literal("T").into()),
        ]);

        let vocab = Vocabulary::from_graph(&g, BASE, "Ex");
        let term = vocab.get("Foo").unwrap();

        assert_eq!(term.iri(), "http://ex.org/v#Foo");
        assert_eq!(term.types(), &[format!("{}Class", RDFS)]);
        assert_eq!(
            term.attributes().get("type"),
            Some(&AttributeValue::Scalar(Value::Reference("rdfs:Class".into())))
        );
        assert_eq!(
            term.attributes().get("subClassOf"),
            Some(&AttributeValue::Scalar(Value::Reference("ex:Bar".into())))
        );
        assert!(term.attributes().contains_key("dc:title"));
        assert!(term.attributes().contains_key(VOCAB_KEY));
    }

    #[test]
    fn test_from_graph_filters_subjects_and_languages() {
        let foo = node("http://ex.org/v#Foo");
        let label = pred(&format!("{}label", RDFS));
        let g = graph(vec![
            Triple::new(node("http://other.org/X").into(), label.clone(), Literal::new_simple_literal("X").into()),
            Triple::new(node(BASE).into(), label.clone(), Literal::new_simple_literal("Ontology").into()),
            Triple::new(foo.clone().into(), label.clone(), Literal::new_language_tagged_literal("Foo", "en-GB").unwrap().into()),
            Triple::new(foo.into(), label, Literal::new_language_tagged_literal("Fu", "de").unwrap().into()),
        ]);

        let vocab = Vocabulary::from_graph(&g, BASE, "Ex");
        assert_eq!(vocab.len(), 1);
        assert_eq!(
            vocab.get("Foo").unwrap().attributes().get("label"),
            Some(&AttributeValue::Scalar(Value::String("Foo".into())))
        );
    }

    #[test]
    fn test_repeated_predicate_accumulates() {
        let foo = node("http://ex.org/v#Foo");
        let sub = pred(&format!("{}subClassOf", RDFS));
        let g = graph(vec![
            Triple::new(foo.clone().into(), sub.clone(), node("http://ex.org/v#A").into()),
            Triple::new(foo.into(), sub, node("http://ex.org/v#B").into()),
        ]);

        let vocab = Vocabulary::from_graph(&g, BASE, "Ex");
        assert_eq!(
            vocab.get("Foo").unwrap().attributes().get("subClassOf"),
            Some(&AttributeValue::List(vec![
                Value::Reference("ex:A".into()),
                Value::Reference("ex:B".into()),
            ]))
        );
    }

    #[test]
    fn test_resolve_types() {
        let foo = node("http://ex.org/v#Foo");
        let bar = node("http://ex.org/v#Bar");
        let g = graph(vec![
            Triple::new(foo.clone().into(), rdf_type(), node(&format!("{}Class", OWL)).into()),
            Triple::new(foo.clone().into(), rdf_type(), node("http://ex.org/v#Foo").into()),
            Triple::new(bar.into(), rdf_type(), node("http://ex.org/v#MissingClass").into()),
        ]);

        let vocab = Vocabulary::from_graph(&g, BASE, "Ex");
        assert_eq!(
            vocab.resolve_types(vocab.get("Foo").unwrap()),
            TypeResolution::Resolved(format!("{}Class, http://ex.org/v#Foo", OWL))
        );
        assert_eq!(
            vocab.resolve_types(vocab.get("Bar").unwrap()),
            TypeResolution::Unresolved { reference: "http://ex.org/v#MissingClass".into() }
        );
    }

    #[test]
    fn test_merge_extra() {
        let foo = node("http://ex.org/v#Foo");
        let g = graph(vec![Triple::new(
            foo.into(),
            pred(&format!("{}label", RDFS)),
            Literal::new_simple_literal("Foo").into(),
        )]);
        let mut vocab = Vocabulary::from_graph(&g, BASE, "Ex");

        let extra = parse_extra(
            r#"{
                "http://ex.org/v#Foo": {"label": "Renamed", "deprecated": true},
                "Baz": {"type": "rdf:Property", "domain": ["ex:Foo", "ex:Bar"]}
            }"#,
        )
        .unwrap();
        assert_eq!(vocab.merge_extra(&extra), 0);

        let foo = vocab.get("Foo").unwrap();
        assert_eq!(foo.attributes().get("label"), Some(&AttributeValue::Scalar(Value::from("Renamed"))));
        assert_eq!(foo.attributes().get("deprecated"), Some(&AttributeValue::Scalar(Value::Boolean(true))));

        let baz = vocab.get("Baz").unwrap();
        assert_eq!(baz.iri(), "http://ex.org/v#Baz");
        assert_eq!(baz.types(), &[format!("{}Property", RDF)]);
        assert!(matches!(baz.attributes().get("domain"), Some(AttributeValue::List(v)) if v.len() == 2));
    }

    #[test]
    fn test_merge_extra_counts_redefined_terms() {
        let mut vocab = Vocabulary::from_graph(&TermGraph::new(), BASE, "Ex");
        let extra = parse_extra(
            r#"{"Foo": {"label": "first", "comment": "kept"}, "http://ex.org/v#Foo": {"label": "second"}, "Bar": {}}"#,
        )
        .unwrap();

        assert_eq!(vocab.merge_extra(&extra), 1);
        let foo = vocab.get("Foo").unwrap();
        assert_eq!(foo.attributes().get("label"), Some(&AttributeValue::Scalar(Value::from("second"))));
        assert_eq!(foo.attributes().get("comment"), Some(&AttributeValue::Scalar(Value::from("kept"))));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_parse_extra_rejects_malformed() {
        assert!(parse_extra("{not json").is_err());
        assert!(parse_extra(r#"{"Foo": "not an object"}"#).is_err());
        assert!(parse_extra("[]").is_err());
    }

    #[test]
    fn test_sorted_terms_by_iri() {
        let label = pred(&format!("{}label", RDFS));
        let g = graph(vec![
            Triple::new(node("http://ex.org/v#B").into(), label.clone(), Literal::new_simple_literal("B").into()),
            Triple::new(node("http://ex.org/v#A").into(), label, Literal::new_simple_literal("A").into()),
        ]);
        let vocab = Vocabulary::from_graph(&g, BASE, "Ex");
        let names: Vec<&str> = vocab.sorted_terms().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
