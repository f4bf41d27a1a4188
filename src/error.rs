//! Error types for pokefetch
//!
//! A single `Error` enum covers the failure modes of a run: transport
//! and decoding failures on individual requests, non-success HTTP
//! statuses, I/O failures writing the output file, and the one fatal
//! condition: an empty generation listing.

use thiserror::Error;

/// Result type alias for pokefetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pokefetch
#[derive(Debug, Error)]
pub enum Error {
    /// Network error (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The status code returned by the remote endpoint
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// JSON serialization or deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The generation listing came back empty, so there is nothing to process.
    /// This is the only fatal error of a run.
    #[error("generation {generation} listing is empty; check connectivity to {url}")]
    EmptyGeneration {
        /// The generation id that was requested
        generation: u32,
        /// The listing URL that failed or returned no species
        url: String,
    },
}
