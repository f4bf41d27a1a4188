//! Field extraction over the optional response schemas
//!
//! Every lookup degrades to a default when a level of the chain is
//! absent. A missing official-artwork sub-path and one that is present
//! but `null` are deliberately indistinguishable in the output.

use crate::types::{PokemonResponse, SpeciesResponse};

/// Extract the official artwork URL from a Pokemon response
///
/// Flattens `sprites.other.official-artwork.front_default`; absence at
/// any level yields `None`.
pub fn official_artwork(pokemon: &PokemonResponse) -> Option<String> {
    pokemon
        .sprites
        .as_ref()
        .and_then(|sprites| sprites.other.as_ref())
        .and_then(|other| other.official_artwork.as_ref())
        .and_then(|artwork| artwork.front_default.clone())
}

/// Extract the flavor text for one version/language pair
///
/// Scans entries in source order and returns the first whose version
/// and language names both match. Entries missing any sub-field are
/// skipped, never fatal. Returns `""` when the record carries no
/// entries or nothing matches.
pub fn flavor_text(species: &SpeciesResponse, version: &str, language: &str) -> String {
    let Some(entries) = species.flavor_text_entries.as_ref() else {
        return String::new();
    };

    for entry in entries {
        let entry_version = entry.version.as_ref().and_then(|v| v.name.as_deref());
        let entry_language = entry.language.as_ref().and_then(|l| l.name.as_deref());

        if entry_version == Some(version) && entry_language == Some(language) {
            if let Some(text) = entry.flavor_text.as_deref() {
                return normalize_flavor_text(text);
            }
        }
    }

    String::new()
}

/// Collapse embedded line breaks and form feeds to single spaces and
/// trim outer whitespace. The Game Boy era texts use `\n` and `\f` as
/// screen-layout control characters, not content.
fn normalize_flavor_text(raw: &str) -> String {
    raw.replace(['\n', '\u{0C}'], " ").trim().to_string()
}
