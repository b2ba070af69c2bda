//! Static JSON snapshot of the external source, read by the browser client
//! when it runs without the API.

use crate::error::HolocronError;
use crate::source::SwapiClient;
use std::path::Path;
use tracing::info;

pub const DEFAULT_SNAPSHOT_PATH: &str = "public/data/characters.json";

/// Walks the whole source and writes every record as a pretty JSON array to `path`,
/// creating parent directories. Returns the number of records written.
pub async fn write_snapshot(source: &SwapiClient, path: &Path) -> Result<usize, HolocronError> {
    let people = source.fetch_all(None).await?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(&people)?;
    tokio::fs::write(path, json).await?;

    info!(path = %path.display(), count = people.len(), "Snapshot written");
    Ok(people.len())
}
