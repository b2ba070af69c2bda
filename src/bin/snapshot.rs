use holocron::config::Config;
use holocron::snapshot::{DEFAULT_SNAPSHOT_PATH, write_snapshot};
use holocron::source::SwapiClient;
use holocron::utils::logging::init_tracing;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from);

    info!(
        source_root_url = %cfg.source.root_url,
        path = %path.display(),
        "Fetching characters for snapshot"
    );

    let source = SwapiClient::new(&cfg.source)?;
    write_snapshot(&source, &path).await?;
    Ok(())
}
