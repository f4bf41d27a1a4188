//! # pokefetch
//!
//! Sequential PokeAPI data collector: fetches the Generation 1 species
//! list, enriches each Pokemon with its dex id, official artwork URL,
//! and the Yellow-version English flavor text, and writes the id-sorted
//! result to a JSON file.
//!
//! Per-identifier failures are collected and summarized, never retried.
//! The only fatal error is an empty generation listing; a run with
//! partial failures still succeeds and writes the records it got.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokefetch::{pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> pokefetch::Result<()> {
//!     let report = pipeline::run(&Config::default()).await?;
//!     println!("fetched {} records", report.records.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP access to the PokeAPI endpoints
pub mod client;
/// Run configuration
pub mod config;
/// Error types
pub mod error;
/// Field extraction over the optional response schemas
pub mod extract;
/// The sequential fetch-enrich-write pipeline
pub mod pipeline;
/// Response schemas and the persisted record type
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::Config;
pub use error::{Error, Result};
pub use types::{PokemonRecord, RunReport};
