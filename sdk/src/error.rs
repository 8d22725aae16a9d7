//! Error type for header generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning an entity catalog into a header
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The catalog file could not be opened
    #[error("Failed to read entity catalog '{}'", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or not a JSON object
    #[error("Failed to parse entity catalog '{}'", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two distinct entities normalize to the same enum member
    #[error("Entities '{first}' and '{second}' both normalize to identifier '{identifier}'")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// An entity name has no alphanumeric or whitespace characters
    #[error("Entity '{entity}' normalizes to an empty identifier")]
    EmptyIdentifier { entity: String },

    /// The header could not be written
    #[error("Failed to write header '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for header generation
pub type GenerateResult<T> = Result<T, GenerateError>;
