//! Vocabulary generation errors

use thiserror::Error;

/// Generation errors
#[derive(Error, Debug)]
pub enum VocabError {
    /// No base URI configured
    #[error("Missing base URI: a vocabulary namespace is required")]
    MissingBaseUri,

    /// A header field would not form valid Ruby (control characters,
    /// or a class/module name that is not a constant)
    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// Extra term data is not a JSON object of objects
    #[error("Invalid extra data: {0}")]
    InvalidExtra(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_yaml::Error),

    /// Statement or finish call after output was produced
    #[error("Generator already finished")]
    AlreadyFinished,

    /// IO error on the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VocabResult<T> = Result<T, VocabError>;
