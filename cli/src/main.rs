//! rdf-vocabgen CLI — generate a Ruby vocabulary class from an RDF document
//!
//! Reads Turtle or N-Triples from a file or stdin and writes the generated
//! source to a file or stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use rdf_vocabgen::{GeneratorConfig, RdfFormat, RdfParser, VocabularyGenerator};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rdf-vocabgen", version, about = "Generate an RDF::Vocabulary class from RDF statements")]
struct Cli {
    /// Input document (stdin when omitted)
    input: Option<PathBuf>,

    /// YAML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vocabulary namespace
    #[arg(long, env = "VOCABGEN_BASE_URI")]
    base_uri: Option<String>,

    /// Name of the generated class
    #[arg(long)]
    class_name: Option<String>,

    /// Enclosing module, or "-" to emit only the term sections
    #[arg(long = "module")]
    module_name: Option<String>,

    /// Generate a strict vocabulary
    #[arg(long)]
    strict: bool,

    /// Extra term attributes as a JSON object
    #[arg(long)]
    extra: Option<String>,

    /// Source label for the provenance header
    #[arg(long)]
    location: Option<String>,

    /// Record the generation time in the header
    #[arg(long)]
    timestamp: bool,

    /// Input format (guessed from the file extension when omitted)
    #[arg(long)]
    format: Option<InputFormat>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum InputFormat {
    Turtle,
    Ntriples,
}

impl From<InputFormat> for RdfFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Turtle => RdfFormat::Turtle,
            InputFormat::Ntriples => RdfFormat::NTriples,
        }
    }
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(base_uri) = &self.base_uri {
            config.base_uri = base_uri.clone();
        }
        if let Some(class_name) = &self.class_name {
            config.class_name = class_name.clone();
        }
        if let Some(module_name) = &self.module_name {
            config.module_name = module_name.clone();
        }
        if self.extra.is_some() {
            config.extra = self.extra.clone();
        }
        if self.location.is_some() {
            config.location = self.location.clone();
        }
        config.strict |= self.strict;
        config.timestamp |= self.timestamp;
        Ok(config)
    }

    fn input_format(&self) -> RdfFormat {
        match (self.format, &self.input) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => RdfFormat::from_path(path),
            (None, None) => RdfFormat::default(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.generator_config()?;
    let base_uri = config.base_uri.clone();
    let mut generator = VocabularyGenerator::new(Vec::new(), config)?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let triples = RdfParser::parse_reader(reader, cli.input_format(), Some(&base_uri))
        .context("parsing input statements")?;

    generator.insert_all(triples)?;
    let report = generator.finish()?;

    // The output is only opened once the whole document exists, so a failed
    // run leaves an existing file untouched.
    let source = generator.into_inner();
    match &cli.output {
        Some(path) => std::fs::write(path, &source)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&source)?;
            stdout.flush()?;
        }
    }

    tracing::info!(
        "Wrote {} terms from {} statements",
        report.total_terms(),
        report.statements
    );
    if report.overwrites > 0 {
        tracing::warn!("{} extra entries redefined a term given earlier", report.overwrites);
    }
    Ok(())
}
