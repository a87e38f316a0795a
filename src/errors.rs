/*!
 * Error types for the subfit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Note that over-length units which cannot be split are not errors: the reflow
 * engine leaves them as they are.
 */

use thiserror::Error;

/// Errors that can occur while reflowing subtitle or plain text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReflowError {
    /// The input was empty or contained only whitespace
    #[error("Input is empty: nothing to process")]
    EmptyInput,
}

/// Errors that can occur while repairing a project file
#[derive(Error, Debug)]
pub enum ProjectFixError {
    /// The gzip stream could not be decompressed
    #[error("Failed to decompress project file, it might be corrupted: {0}")]
    Decompress(#[source] std::io::Error),

    /// The (decompressed) content is not valid UTF-8
    #[error("Project file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Re-compressing the normalized content failed
    #[error("Failed to compress project file: {0}")]
    Compress(#[source] std::io::Error),
}

/// Errors raised by configuration validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Length bounds are outside `1 <= min <= max <= 50`
    #[error("Invalid length bounds: min {min}, max {max} (expected 1 <= min <= max <= {limit})")]
    InvalidBounds {
        /// Configured minimum length
        min: usize,
        /// Configured maximum length
        max: usize,
        /// Upper limit for the maximum length
        limit: usize,
    },

    /// A preview limit was set to zero
    #[error("Preview limit '{0}' must be greater than zero")]
    InvalidPreviewLimit(&'static str),
}
