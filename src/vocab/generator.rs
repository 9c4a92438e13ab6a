//! Vocabulary generator
//!
//! Collects statements into a [`TermGraph`], then on [`finish`] materializes
//! the vocabulary, classifies and orders its terms and writes the complete
//! source document to the sink.
//!
//! [`finish`]: VocabularyGenerator::finish

use super::classify::{classify, Bucket, TypeResolution};
use super::config::GeneratorConfig;
use super::emit::emit_declaration;
use super::error::{VocabError, VocabResult};
use super::serialize::inspect_str;
use super::term::{parse_extra, AttributeMap, ExtraTerms, Vocabulary};
use crate::rdf::{TermGraph, Triple};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, info};

/// Lifecycle of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Accepting statements
    Collecting,
    /// Materializing the vocabulary
    Finalizing,
    /// Writing output
    Emitting,
    /// Output written; no further input accepted
    Done,
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Distinct statements collected
    pub statements: usize,
    /// Terms emitted per bucket
    pub terms: BTreeMap<Bucket, usize>,
    /// Terms whose declared type could not be resolved
    pub unresolved: usize,
    /// Extra entries that redefined a term an earlier entry already supplied
    pub overwrites: usize,
}

impl GenerationReport {
    /// Number of terms emitted in `bucket`
    pub fn count(&self, bucket: Bucket) -> usize {
        self.terms.get(&bucket).copied().unwrap_or(0)
    }

    /// Total number of terms emitted
    pub fn total_terms(&self) -> usize {
        self.terms.values().sum()
    }
}

/// Terms grouped by bucket, in IRI order
#[derive(Debug, Default)]
struct Sections<'a> {
    buckets: BTreeMap<Bucket, Vec<(&'a str, &'a AttributeMap)>>,
    unresolved: usize,
}

impl<'a> Sections<'a> {
    fn from_vocabulary(vocab: &'a Vocabulary) -> Self {
        let mut sections = Self::default();
        for term in vocab.sorted_terms() {
            let resolution = vocab.resolve_types(term);
            if let TypeResolution::Unresolved { reference } = &resolution {
                debug!("Type {} of {} is not defined; classifying as other", reference, term.iri());
                sections.unresolved += 1;
            }
            sections
                .buckets
                .entry(classify(&resolution))
                .or_default()
                .push((term.name(), term.attributes()));
        }
        sections
    }
}

/// Generates vocabulary source from a stream of statements
pub struct VocabularyGenerator<W: Write> {
    config: GeneratorConfig,
    extra: Option<ExtraTerms>,
    graph: TermGraph,
    sink: W,
    state: GeneratorState,
}

impl<W: Write> VocabularyGenerator<W> {
    /// Create a generator writing to `sink`
    ///
    /// Fails if no base URI is configured, a header field would not form
    /// valid Ruby, or the extra data is malformed.
    pub fn new(sink: W, config: GeneratorConfig) -> VocabResult<Self> {
        config.validate()?;
        let extra = config.extra.as_deref().map(parse_extra).transpose()?;

        Ok(Self {
            config,
            extra,
            graph: TermGraph::new(),
            sink,
            state: GeneratorState::Collecting,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Number of distinct statements collected so far
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Add one statement; returns `false` if it was already collected
    pub fn insert(&mut self, triple: Triple) -> VocabResult<bool> {
        if self.state != GeneratorState::Collecting {
            return Err(VocabError::AlreadyFinished);
        }
        Ok(self.graph.insert(triple))
    }

    /// Add many statements
    pub fn insert_all<I: IntoIterator<Item = Triple>>(&mut self, triples: I) -> VocabResult<()> {
        for triple in triples {
            self.insert(triple)?;
        }
        Ok(())
    }

    /// Signal end of input: build the vocabulary and write the document
    pub fn finish(&mut self) -> VocabResult<GenerationReport> {
        if self.state != GeneratorState::Collecting {
            return Err(VocabError::AlreadyFinished);
        }

        self.state = GeneratorState::Finalizing;
        let graph = std::mem::take(&mut self.graph);
        info!("Finalizing vocabulary <{}> from {} statements", self.config.base_uri, graph.len());

        let mut vocab = Vocabulary::from_graph(&graph, &self.config.base_uri, &self.config.class_name);
        let overwrites = match &self.extra {
            Some(extra) => vocab.merge_extra(extra),
            None => 0,
        };
        let sections = Sections::from_vocabulary(&vocab);

        self.state = GeneratorState::Emitting;
        self.write_document(&sections)?;
        self.sink.flush()?;
        self.state = GeneratorState::Done;

        let report = GenerationReport {
            statements: graph.len(),
            terms: sections
                .buckets
                .iter()
                .map(|(bucket, terms)| (*bucket, terms.len()))
                .collect(),
            unresolved: sections.unresolved,
            overwrites,
        };
        info!(
            "Generated {} terms ({} unresolved types, {} overwrites)",
            report.total_terms(),
            report.unresolved,
            report.overwrites
        );
        Ok(report)
    }

    /// Consume the generator, returning the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_document(&mut self, sections: &Sections<'_>) -> VocabResult<()> {
        let wrapped = self.config.wraps_output();
        if wrapped {
            self.write_header()?;
        }

        for bucket in Bucket::ALL {
            let Some(terms) = sections.buckets.get(&bucket).filter(|t| !t.is_empty()) else {
                continue;
            };
            writeln!(self.sink, "\n    # {}", bucket.section_comment())?;
            for (name, attributes) in terms {
                writeln!(self.sink, "{}", emit_declaration(name, attributes, bucket))?;
            }
        }

        if wrapped {
            writeln!(self.sink, "  end\nend")?;
        }
        Ok(())
    }

    fn write_header(&mut self) -> VocabResult<()> {
        let config = &self.config;
        let parent = if config.strict { "StrictVocabulary" } else { "Vocabulary" };

        writeln!(self.sink, "# -*- encoding: utf-8 -*-")?;
        writeln!(self.sink, "# frozen_string_literal: true")?;
        writeln!(
            self.sink,
            "# This file generated automatically using rdf vocabulary format from {}",
            config.source()
        )?;
        if config.timestamp {
            writeln!(
                self.sink,
                "# Generated at {}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
            )?;
        }
        writeln!(self.sink, "require 'rdf'")?;
        writeln!(self.sink, "module {}", config.module_name)?;
        writeln!(self.sink, "  # @!parse")?;
        writeln!(self.sink, "  #   # Vocabulary for <{}>", config.base_uri)?;
        writeln!(self.sink, "  #   #")?;
        writeln!(self.sink, "  #   class {} < RDF::{}", config.class_name, parent)?;
        writeln!(self.sink, "  #   end")?;
        writeln!(
            self.sink,
            "  class {} < RDF::{}({})",
            config.class_name,
            parent,
            inspect_str(&config.base_uri)
        )?;
        Ok(())
    }
}
