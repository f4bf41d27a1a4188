//! The sequential fetch-enrich-write pipeline
//!
//! Control flow is strictly linear: list fetch, then the
//! per-identifier enrich loop, then sort, one file write, and the
//! summary. Every await is serialized; the only error that aborts the
//! run before the loop is an empty generation listing, and the only
//! one after it is a failed output write.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract;
use crate::types::{PokemonRecord, RunReport};
use tracing::{info, warn};

/// Enrich one identifier: required primary fetch, best-effort species
/// fetch, field extraction with defaults
///
/// Returns `None` when the primary fetch fails or its payload lacks an
/// id or name; the caller records the identifier as failed. A species
/// failure only costs the flavor text.
async fn process_pokemon(client: &ApiClient, config: &Config, name: &str) -> Option<PokemonRecord> {
    let pokemon = match client.fetch_pokemon(name).await {
        Ok(pokemon) => pokemon,
        Err(err) => {
            warn!("failed to fetch pokemon '{name}': {err}");
            return None;
        }
    };

    let (Some(id), Some(canonical_name)) = (pokemon.id, pokemon.name.clone()) else {
        warn!("pokemon '{name}' response is missing id or name");
        return None;
    };

    let flavor_text_yellow = match client.fetch_species(name).await {
        Ok(species) => extract::flavor_text(&species, &config.flavor_version, &config.flavor_language),
        Err(err) => {
            warn!("failed to fetch species for '{name}', continuing without flavor text: {err}");
            String::new()
        }
    };

    Some(PokemonRecord {
        id,
        name: canonical_name,
        official_artwork: extract::official_artwork(&pokemon),
        flavor_text_yellow,
    })
}

/// Run the full pipeline and write the output file
///
/// # Errors
/// Returns [`Error::EmptyGeneration`] when the listing comes back
/// empty (before any per-item work or file write), and I/O or
/// serialization errors if the final write fails. Per-identifier
/// failures never fail the run; they are reported in the returned
/// [`RunReport`].
pub async fn run(config: &Config) -> Result<RunReport> {
    let client = ApiClient::new(config)?;

    println!("Fetching generation {} species list...", config.generation);
    let names = client.fetch_generation(config.generation).await;
    if names.is_empty() {
        return Err(Error::EmptyGeneration {
            generation: config.generation,
            url: client.generation_url(config.generation),
        });
    }
    println!("Found {} species in generation {}\n", names.len(), config.generation);

    let mut report = RunReport::default();
    let total = names.len();

    for (index, name) in names.iter().enumerate() {
        println!("[{}/{}] Processing {name}...", index + 1, total);
        let outcome = process_pokemon(&client, config, name).await;
        report.push(name, outcome);

        // Courtesy throttle, not a correctness mechanism.
        tokio::time::sleep(config.request_delay).await;
    }

    report.records.sort_by_key(|record| record.id);

    let json = serde_json::to_string_pretty(&report.records)?;
    tokio::fs::write(&config.output_path, json).await?;
    info!(
        "wrote {} records to {}",
        report.records.len(),
        config.output_path.display()
    );

    print_summary(config, &report)?;
    Ok(report)
}

/// Operator-facing summary: counts, failure list, one sample record
fn print_summary(config: &Config, report: &RunReport) -> Result<()> {
    println!("\nSuccessfully fetched data for {} Pokemon", report.records.len());
    println!("Data saved to: {}", config.output_path.display());

    if !report.failures.is_empty() {
        println!(
            "Failed to fetch {} Pokemon: {}",
            report.failures.len(),
            report.failures.join(", ")
        );
    }

    if let Some(sample) = report.records.first() {
        println!("\nSample entry:");
        println!("{}", serde_json::to_string_pretty(sample)?);
    }

    Ok(())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Config pointed at a mock server and a tempdir, with no throttle
    fn test_config(server: &MockServer, output_path: PathBuf) -> Config {
        Config {
            api_base: server.uri(),
            output_path,
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    async fn mount_generation(server: &MockServer, names: &[&str]) {
        let species: Vec<_> = names
            .iter()
            .map(|name| serde_json::json!({"name": name}))
            .collect();
        Mock::given(method("GET"))
            .and(path("/generation/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"pokemon_species": species})),
            )
            .mount(server)
            .await;
    }

    async fn mount_pokemon(server: &MockServer, name: &str, id: i64, artwork: Option<&str>) {
        let artwork_value = match artwork {
            Some(url) => serde_json::json!(url),
            None => serde_json::Value::Null,
        };
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": id,
                "name": name,
                "sprites": {"other": {"official-artwork": {"front_default": artwork_value}}}
            })))
            .mount(server)
            .await;
    }

    async fn mount_species(server: &MockServer, name: &str, flavor: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon-species/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "flavor_text_entries": [
                    {
                        "flavor_text": "Texte francais",
                        "language": {"name": "fr"},
                        "version": {"name": "yellow"}
                    },
                    {
                        "flavor_text": flavor,
                        "language": {"name": "en"},
                        "version": {"name": "yellow"}
                    }
                ]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn end_to_end_bulbasaur_scenario() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        mount_generation(&server, &["bulbasaur"]).await;
        mount_pokemon(&server, "bulbasaur", 1, Some("https://img/1.png")).await;
        mount_species(&server, "bulbasaur", "A strange seed\nwas planted...").await;

        let config = test_config(&server, output_path.clone());
        let report = run(&config).await.unwrap();

        assert_eq!(report.records.len(), 1);
        assert!(report.failures.is_empty());

        let written = std::fs::read_to_string(&output_path).unwrap();
        let records: Vec<PokemonRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(
            records,
            vec![PokemonRecord {
                id: 1,
                name: "bulbasaur".into(),
                official_artwork: Some("https://img/1.png".into()),
                flavor_text_yellow: "A strange seed was planted...".into(),
            }]
        );
    }

    #[tokio::test]
    async fn output_is_sorted_ascending_by_id() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        // Listing order deliberately disagrees with id order.
        mount_generation(&server, &["pidgey", "bulbasaur", "eevee"]).await;
        mount_pokemon(&server, "pidgey", 16, None).await;
        mount_pokemon(&server, "bulbasaur", 1, None).await;
        mount_pokemon(&server, "eevee", 133, None).await;
        for name in ["pidgey", "bulbasaur", "eevee"] {
            mount_species(&server, name, "text").await;
        }

        let config = test_config(&server, output_path.clone());
        let report = run(&config).await.unwrap();

        let ids: Vec<i64> = report.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 16, 133]);

        let written = std::fs::read_to_string(&output_path).unwrap();
        let records: Vec<PokemonRecord> = serde_json::from_str(&written).unwrap();
        let written_ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(written_ids, vec![1, 16, 133]);
    }

    #[tokio::test]
    async fn primary_failure_is_reported_and_run_completes() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        mount_generation(&server, &["bulbasaur", "missingno", "ivysaur"]).await;
        mount_pokemon(&server, "bulbasaur", 1, None).await;
        mount_pokemon(&server, "ivysaur", 2, None).await;
        // No mock for /pokemon/missingno, so wiremock answers 404.
        for name in ["bulbasaur", "ivysaur"] {
            mount_species(&server, name, "text").await;
        }

        let config = test_config(&server, output_path.clone());
        let report = run(&config).await.unwrap();

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failures, vec!["missingno".to_string()]);

        let written = std::fs::read_to_string(&output_path).unwrap();
        let records: Vec<PokemonRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn species_failure_degrades_to_empty_flavor_text() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        mount_generation(&server, &["bulbasaur"]).await;
        mount_pokemon(&server, "bulbasaur", 1, Some("https://img/1.png")).await;
        // No species mock, so the secondary fetch 404s.

        let config = test_config(&server, output_path);
        let report = run(&config).await.unwrap();

        assert_eq!(report.records.len(), 1);
        assert!(report.failures.is_empty());
        assert_eq!(report.records[0].flavor_text_yellow, "");
        assert_eq!(
            report.records[0].official_artwork.as_deref(),
            Some("https://img/1.png")
        );
    }

    #[tokio::test]
    async fn missing_id_counts_as_primary_failure() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        mount_generation(&server, &["glitch", "bulbasaur"]).await;
        Mock::given(method("GET"))
            .and(path("/pokemon/glitch"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "glitch"})),
            )
            .mount(&server)
            .await;
        mount_pokemon(&server, "bulbasaur", 1, None).await;
        mount_species(&server, "bulbasaur", "text").await;

        let config = test_config(&server, output_path);
        let report = run(&config).await.unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.failures, vec!["glitch".to_string()]);
    }

    #[tokio::test]
    async fn empty_listing_aborts_before_writing_output() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        Mock::given(method("GET"))
            .and(path("/generation/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = test_config(&server, output_path.clone());
        let err = run(&config).await.unwrap_err();

        assert!(matches!(err, Error::EmptyGeneration { generation: 1, .. }));
        assert!(!output_path.exists(), "no output file on early abort");
    }

    #[tokio::test]
    async fn output_file_overwrites_prior_content() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");
        std::fs::write(&output_path, "stale content from a previous run").unwrap();

        mount_generation(&server, &["bulbasaur"]).await;
        mount_pokemon(&server, "bulbasaur", 1, None).await;
        mount_species(&server, "bulbasaur", "text").await;

        let config = test_config(&server, output_path.clone());
        run(&config).await.unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(!written.contains("stale content"));
        let records: Vec<PokemonRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn enriched_records_have_positive_ids_and_nonempty_names() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("gen1.json");

        mount_generation(&server, &["bulbasaur", "ivysaur"]).await;
        mount_pokemon(&server, "bulbasaur", 1, None).await;
        mount_pokemon(&server, "ivysaur", 2, None).await;
        for name in ["bulbasaur", "ivysaur"] {
            mount_species(&server, name, "text").await;
        }

        let config = test_config(&server, output_path);
        let report = run(&config).await.unwrap();

        let mut seen_ids = std::collections::HashSet::new();
        for record in &report.records {
            assert!(record.id > 0);
            assert!(!record.name.is_empty());
            assert!(seen_ids.insert(record.id), "duplicate id {}", record.id);
        }
    }
}
