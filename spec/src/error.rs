//! Error types for taxonomy resolution.

use thiserror::Error;

/// Errors produced while loading or resolving a taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier cannot be split into a namespace and a local name.
    #[error("malformed identifier `{identifier}`: no namespace separator")]
    MalformedIdentifier {
        /// The offending identifier.
        identifier: String,
    },

    /// A structured annotation lacks its scope or its text.
    ///
    /// Resolvers recover from this locally: the annotation is dropped and
    /// resolution continues.
    #[error("annotation on `{property}` is incomplete: {reason}")]
    MissingAnnotationData {
        /// Identifier of the annotated property.
        property: String,
        /// What is missing.
        reason: &'static str,
    },

    /// The serialized input could not be parsed into triples.
    #[error("failed to parse {format} input: {message}")]
    Parse {
        /// Input format name (e.g. `"turtle"`).
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// A settings document is not valid.
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn malformed(identifier: impl Into<String>) -> Self {
        Error::MalformedIdentifier {
            identifier: identifier.into(),
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
