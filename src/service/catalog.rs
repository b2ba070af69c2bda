use crate::db::{CharacterCreate, DbActorHandle, DbCharacter};
use crate::error::HolocronError;
use crate::service::report::ImportReport;
use crate::source::SwapiClient;
use crate::utils::logging::pretty_json_if_debug;
use futures::{StreamExt, stream};
use holocron_schema::SwapiPerson;
use tracing::{debug, info, warn};

/// Result of [`CatalogService::favorite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// The character was already stored and is now flagged.
    Marked { name: String },
    /// The character was missing locally, imported from the source, then flagged.
    ImportedAndMarked { name: String },
    /// Neither the store nor the source knows the name.
    NotFound,
}

impl FavoriteOutcome {
    pub fn affected(&self) -> u64 {
        match self {
            FavoriteOutcome::Marked { .. } | FavoriteOutcome::ImportedAndMarked { .. } => 1,
            FavoriteOutcome::NotFound => 0,
        }
    }
}

/// Synchronizes the external character source with the local store.
///
/// Holds no state of its own besides the injected store handle and source client;
/// every call re-checks the store.
#[derive(Clone)]
pub struct CatalogService {
    db: DbActorHandle,
    source: SwapiClient,
    import_concurrency: usize,
}

impl CatalogService {
    pub fn new(db: DbActorHandle, source: SwapiClient, import_concurrency: usize) -> Self {
        Self {
            db,
            source,
            import_concurrency: import_concurrency.max(1),
        }
    }

    pub async fn fetch_all_from_source(
        &self,
        name_filter: Option<&str>,
    ) -> Result<Vec<SwapiPerson>, HolocronError> {
        self.source.fetch_all(name_filter).await
    }

    /// Upserts one record by name. The favorite flag of an existing row is kept.
    pub async fn import_character(&self, person: &SwapiPerson) -> Result<i64, HolocronError> {
        let id = self.db.upsert(CharacterCreate::from(person)).await?;
        debug!(id, name = %person.name, "Character imported or updated");
        Ok(id)
    }

    /// Fetches the whole source and upserts every record, at most
    /// `import_concurrency` writes in flight. Individual failures are collected in
    /// the report; only a failed fetch fails the call.
    pub async fn import_all(&self) -> Result<ImportReport, HolocronError> {
        let people = self.source.fetch_all(None).await?;
        let fetched = people.len();

        let outcomes: Vec<(String, Result<i64, HolocronError>)> = stream::iter(people)
            .map(|person| async move {
                let res = self.import_character(&person).await;
                (person.name, res)
            })
            .buffer_unordered(self.import_concurrency)
            .collect()
            .await;

        let report = ImportReport::from_outcomes(fetched, outcomes);

        for failure in &report.failed {
            warn!(name = %failure.name, error = %failure.error, "Character import failed");
        }
        info!(
            fetched = report.fetched,
            imported = report.imported,
            failed = report.failed.len(),
            "Bulk import finished"
        );
        if let Some(pretty) = pretty_json_if_debug(&report) {
            debug!(report = %pretty, "Bulk import report");
        }

        Ok(report)
    }

    /// Flags a character as favorite, importing it from the source first when the
    /// store does not have it.
    ///
    /// Steps: existence check, conditional import, update. No lock spans them. Two
    /// concurrent calls for the same unknown name may both import it; the unique
    /// name constraint turns the second import into an update of the same row.
    ///
    /// An unreachable source during the fallback surfaces as an upstream error, not
    /// as [`FavoriteOutcome::NotFound`].
    pub async fn favorite(&self, name: &str) -> Result<FavoriteOutcome, HolocronError> {
        if let Some(existing) = self.db.get_by_name(name).await? {
            if self.db.set_favorite(&existing.name, true).await? > 0 {
                info!(name = %existing.name, "Character marked as favorite");
                return Ok(FavoriteOutcome::Marked {
                    name: existing.name,
                });
            }
            // Deleted between the check and the update; fall back to the source.
        }

        let Some(person) = self.source.find_by_name(name).await? else {
            info!(name, "Favorite requested for a character unknown to the source");
            return Ok(FavoriteOutcome::NotFound);
        };

        self.import_character(&person).await?;
        if self.db.set_favorite(&person.name, true).await? == 0 {
            return Ok(FavoriteOutcome::NotFound);
        }

        info!(name = %person.name, "Character imported and marked as favorite");
        Ok(FavoriteOutcome::ImportedAndMarked { name: person.name })
    }

    /// Clears the favorite flag. Never contacts the source; returns the number of
    /// rows changed (0 when the name is not stored).
    pub async fn unfavorite(&self, name: &str) -> Result<u64, HolocronError> {
        let affected = self.db.set_favorite(name, false).await?;
        if affected > 0 {
            info!(name, "Character unmarked as favorite");
        }
        Ok(affected)
    }

    pub async fn list_favorites(&self) -> Result<Vec<DbCharacter>, HolocronError> {
        self.db.list_favorites().await
    }

    pub async fn list_all(&self) -> Result<Vec<DbCharacter>, HolocronError> {
        self.db.list_all().await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<DbCharacter>, HolocronError> {
        self.db.get_by_name(name).await
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<u64, HolocronError> {
        let affected = self.db.delete_by_name(name).await?;
        if affected > 0 {
            info!(name, "Character deleted");
        }
        Ok(affected)
    }

    pub async fn delete_all(&self) -> Result<u64, HolocronError> {
        let affected = self.db.delete_all().await?;
        info!(deleted = affected, "All characters deleted");
        Ok(affected)
    }
}
