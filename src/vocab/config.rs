//! Generator configuration

use super::error::{VocabError, VocabResult};
use serde::Deserialize;
use std::path::Path;

/// Module the generated class is placed in when none is configured
pub const DEFAULT_MODULE: &str = "RDF";

/// Module name that suppresses the header and all wrapping declarations
pub const NO_MODULE: &str = "-";

/// Generator configuration
///
/// Can be loaded from YAML; missing keys take their defaults:
///
/// ```yaml
/// base_uri: "http://xmlns.com/foaf/0.1/"
/// class_name: FOAF
/// strict: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Vocabulary namespace; required
    pub base_uri: String,
    /// Name of the generated class
    pub class_name: String,
    /// Enclosing module, or `-` for bare sections
    pub module_name: String,
    /// Emit a strict vocabulary parent
    pub strict: bool,
    /// Extra term attributes as a JSON object
    pub extra: Option<String>,
    /// Source label for the provenance header (defaults to the base URI)
    pub location: Option<String>,
    /// Record the generation time in the provenance header
    pub timestamp: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_uri: String::new(),
            class_name: String::new(),
            module_name: DEFAULT_MODULE.to_string(),
            strict: false,
            extra: None,
            location: None,
            timestamp: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for a base URI and class name
    pub fn new(base_uri: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Parse a YAML configuration document
    pub fn from_yaml_str(yaml: &str) -> VocabResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML configuration file
    pub fn from_yaml_file(path: &Path) -> VocabResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    #[must_use]
    pub fn with_module(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether the output is wrapped in header, module and class
    pub fn wraps_output(&self) -> bool {
        self.module_name != NO_MODULE
    }

    /// Label written in the provenance header
    pub fn source(&self) -> &str {
        self.location.as_deref().unwrap_or(&self.base_uri)
    }

    /// Check the fields that are written verbatim into the document header
    ///
    /// Comment-line fields must not contain control characters; when output
    /// is wrapped, the class and module names must be Ruby constants.
    pub fn validate(&self) -> VocabResult<()> {
        if self.base_uri.is_empty() {
            return Err(VocabError::MissingBaseUri);
        }
        check_field("base_uri", &self.base_uri, |v| !has_control(v))?;
        if let Some(location) = &self.location {
            check_field("location", location, |v| !has_control(v))?;
        }
        if self.wraps_output() {
            check_field("class_name", &self.class_name, is_constant_name)?;
            check_field("module_name", &self.module_name, |v| {
                v.split("::").all(is_constant_name)
            })?;
        }
        Ok(())
    }
}

fn check_field(field: &'static str, value: &str, valid: impl Fn(&str) -> bool) -> VocabResult<()> {
    if valid(value) {
        Ok(())
    } else {
        Err(VocabError::InvalidField {
            field,
            value: value.to_string(),
        })
    }
}

fn has_control(value: &str) -> bool {
    value.chars().any(char::is_control)
}

fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("http://ex.org/v#", "Ex");
        assert_eq!(config.module_name, "RDF");
        assert!(!config.strict);
        assert!(config.wraps_output());
        assert_eq!(config.source(), "http://ex.org/v#");

        let config = config.with_location("vocab.ttl").with_module("-");
        assert_eq!(config.source(), "vocab.ttl");
        assert!(!config.wraps_output());
    }

    #[test]
    fn test_from_yaml() {
        let config = GeneratorConfig::from_yaml_str(
            "base_uri: http://xmlns.com/foaf/0.1/\nclass_name: FOAF\nstrict: true\n",
        )
        .unwrap();
        assert_eq!(config.base_uri, "http://xmlns.com/foaf/0.1/");
        assert_eq!(config.class_name, "FOAF");
        assert!(config.strict);
        assert_eq!(config.module_name, "RDF");
        assert_eq!(config.extra, None);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_uri: http://ex.org/v#\nmodule_name: Vocab").unwrap();

        let config = GeneratorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.module_name, "Vocab");
        assert_eq!(config.class_name, "");
    }

    #[test]
    fn test_validate_header_fields() {
        assert!(GeneratorConfig::new("http://ex.org/v#", "Ex").validate().is_ok());
        assert!(GeneratorConfig::new("http://ex.org/v#", "Ex")
            .with_module("Vocab::Terms")
            .validate()
            .is_ok());

        let config = GeneratorConfig::new("http://ex.org/v#", "Ex").with_location("vocab.ttl\nsystem('id')");
        assert!(matches!(
            config.validate(),
            Err(VocabError::InvalidField { field: "location", .. })
        ));

        let config = GeneratorConfig::new("http://ex.org/v#\n", "Ex");
        assert!(matches!(
            config.validate(),
            Err(VocabError::InvalidField { field: "base_uri", .. })
        ));

        let cases = [("ex", "RDF"), ("Ex < Object; end", "RDF"), ("Ex", "RDF\nputs 1"), ("", "RDF"), ("Ex", "Vocab::")];
        for (class_name, module_name) in cases {
            let config = GeneratorConfig::new("http://ex.org/v#", class_name).with_module(module_name);
            assert!(config.validate().is_err(), "{:?} / {:?}", class_name, module_name);
        }
    }

    #[test]
    fn test_unwrapped_output_skips_name_checks() {
        let config = GeneratorConfig::new("http://ex.org/v#", "").with_module(NO_MODULE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(GeneratorConfig::from_yaml_str("strict: [not, a, bool]").is_err());
    }
}
