//! Binary entry point for pokefetch

use pokefetch::{pipeline, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> pokefetch::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    pipeline::run(&Config::default()).await?;
    Ok(())
}
