//! Configuration for a pokefetch run
//!
//! There is no CLI or environment surface; the defaults here ARE the
//! run parameters. The struct exists so the pipeline can be pointed at
//! a different base URL and output path under test.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Run configuration (API base, endpoints, output path, pacing)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the PokeAPI v2 endpoint (default: "https://pokeapi.co/api/v2")
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Generation whose species list is fetched (default: 1)
    #[serde(default = "default_generation")]
    pub generation: u32,

    /// Path of the output JSON file (default: "gen1_pokemon.json")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Courtesy delay inserted after each identifier's processing
    /// (default: 100 ms). This bounds outbound request rate; it is not
    /// a correctness mechanism.
    #[serde(default = "default_request_delay", with = "duration_millis")]
    pub request_delay: Duration,

    /// HTTP request timeout (default: 30 s)
    #[serde(default = "default_http_timeout", with = "duration_millis")]
    pub http_timeout: Duration,

    /// Game version whose flavor text is extracted (default: "yellow")
    #[serde(default = "default_flavor_version")]
    pub flavor_version: String,

    /// Language of the extracted flavor text (default: "en")
    #[serde(default = "default_flavor_language")]
    pub flavor_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            generation: default_generation(),
            output_path: default_output_path(),
            request_delay: default_request_delay(),
            http_timeout: default_http_timeout(),
            flavor_version: default_flavor_version(),
            flavor_language: default_flavor_language(),
        }
    }
}

fn default_api_base() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_generation() -> u32 {
    1
}

fn default_output_path() -> PathBuf {
    PathBuf::from("gen1_pokemon.json")
}

fn default_request_delay() -> Duration {
    Duration::from_millis(100)
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_flavor_version() -> String {
    "yellow".to_string()
}

fn default_flavor_language() -> String {
    "en".to_string()
}

/// Serde adapter storing durations as integer milliseconds
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
