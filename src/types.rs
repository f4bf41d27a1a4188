//! Core types for pokefetch
//!
//! The response schemas mirror the PokeAPI payloads with every nested
//! field optional: absence at any level must degrade to a default, not
//! an error. `PokemonRecord` is the persisted unit; `RunReport` is the
//! accumulator threaded through the pipeline.

use serde::{Deserialize, Serialize};

/// A named API resource reference, e.g. `{"name": "yellow", "url": ...}`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NamedResource {
    /// Resource name, used as a lookup key
    pub name: Option<String>,
}

/// Response of `GET /generation/{id}`; only the species list matters
#[derive(Clone, Debug, Deserialize)]
pub struct GenerationResponse {
    /// Species belonging to the generation, in API order
    pub pokemon_species: Option<Vec<NamedResource>>,
}

/// Response of `GET /pokemon/{name}`
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonResponse {
    /// National dex number
    pub id: Option<i64>,
    /// Canonical lowercase name
    pub name: Option<String>,
    /// Sprite collection; the official artwork hangs off a nested chain
    pub sprites: Option<Sprites>,
}

/// Sprite collection of a Pokemon
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sprites {
    /// Non-game sprite sets
    pub other: Option<OtherSprites>,
}

/// Non-game sprite sets (`sprites.other`)
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtherSprites {
    /// The official artwork set
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

/// Official artwork sprite set
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArtworkSprites {
    /// Front-facing artwork URL; the API serves `null` for some forms
    pub front_default: Option<String>,
}

/// Response of `GET /pokemon-species/{name}`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpeciesResponse {
    /// Flavor text entries across all game versions and languages
    pub flavor_text_entries: Option<Vec<FlavorTextEntry>>,
}

/// One localized flavor text entry
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FlavorTextEntry {
    /// Raw flavor text, with embedded line breaks and form feeds
    pub flavor_text: Option<String>,
    /// Language of the entry
    pub language: Option<NamedResource>,
    /// Game version the entry belongs to
    pub version: Option<NamedResource>,
}

/// The persisted unit: one enriched Pokemon
///
/// Created once per successfully fetched identifier and never mutated
/// afterwards. The output file is a JSON array of these, sorted
/// ascending by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// National dex number; unique and positive in any valid output
    pub id: i64,
    /// Canonical name from the primary endpoint; never empty
    pub name: String,
    /// Official artwork URL, `null` when absent upstream
    pub official_artwork: Option<String>,
    /// Normalized flavor text; empty when no matching entry exists
    pub flavor_text_yellow: String,
}

/// Outcome accumulator for one run
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Successfully enriched records, sorted by id once the run finishes
    pub records: Vec<PokemonRecord>,
    /// Identifiers whose enrichment did not complete, in encounter order
    pub failures: Vec<String>,
}

impl RunReport {
    /// Record one enrichment outcome
    pub fn push(&mut self, name: &str, outcome: Option<PokemonRecord>) {
        match outcome {
            Some(record) => self.records.push(record),
            None => self.failures.push(name.to_string()),
        }
    }
}
