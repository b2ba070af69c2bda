use super::extract::{NameBody, NameQuery, SearchQuery};
use crate::db::DbCharacter;
use crate::error::HolocronError;
use crate::server::router::HolocronState;
use crate::service::FavoriteOutcome;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use holocron_schema::SwapiPerson;
use tracing::debug;

/// GET /characters/external?name=
pub(super) async fn external_characters(
    State(state): State<HolocronState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SwapiPerson>>, HolocronError> {
    let people = state
        .catalog
        .fetch_all_from_source(query.name.as_deref())
        .await?;
    debug!(count = people.len(), filter = ?query.name, "External characters fetched");
    Ok(Json(people))
}

/// PATCH /characters/favorite
pub(super) async fn favorite_character(
    State(state): State<HolocronState>,
    NameBody(name): NameBody,
) -> Result<String, HolocronError> {
    match state.catalog.favorite(&name).await? {
        FavoriteOutcome::Marked { name } => Ok(format!("Character \"{name}\" marked as favorite!")),
        FavoriteOutcome::ImportedAndMarked { name } => Ok(format!(
            "Character \"{name}\" imported and marked as favorite!"
        )),
        FavoriteOutcome::NotFound => Err(HolocronError::NotFound(format!(
            "Character \"{name}\" not found in the external source"
        ))),
    }
}

/// PATCH /characters/unfavorite
pub(super) async fn unfavorite_character(
    State(state): State<HolocronState>,
    NameBody(name): NameBody,
) -> Result<String, HolocronError> {
    if state.catalog.unfavorite(&name).await? == 0 {
        return Err(HolocronError::NotFound(format!(
            "Character \"{name}\" not found"
        )));
    }
    Ok(format!("Character \"{name}\" unmarked as favorite!"))
}

/// GET /characters/favorites
pub(super) async fn list_favorites(
    State(state): State<HolocronState>,
) -> Result<Json<Vec<DbCharacter>>, HolocronError> {
    let rows = state.catalog.list_favorites().await?;
    if rows.is_empty() {
        return Err(HolocronError::NotFound(
            "No favorite characters found".to_string(),
        ));
    }
    Ok(Json(rows))
}

/// POST /characters/import
pub(super) async fn import_characters(
    State(state): State<HolocronState>,
) -> Result<String, HolocronError> {
    let report = state.catalog.import_all().await?;
    Ok(format!(
        "Characters imported successfully! Total: {}, imported: {}, failed: {}",
        report.fetched,
        report.imported,
        report.failed.len()
    ))
}

/// GET /characters
pub(super) async fn list_characters(
    State(state): State<HolocronState>,
) -> Result<Json<Vec<DbCharacter>>, HolocronError> {
    let rows = state.catalog.list_all().await?;
    if rows.is_empty() {
        return Err(HolocronError::NotFound("No characters found".to_string()));
    }
    Ok(Json(rows))
}

/// GET /characters/{name}
pub(super) async fn get_character(
    State(state): State<HolocronState>,
    Path(name): Path<String>,
) -> Result<Json<DbCharacter>, HolocronError> {
    state
        .catalog
        .get_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| HolocronError::NotFound(format!("Character \"{name}\" not found")))
}

/// DELETE /characters?name=
pub(super) async fn delete_character(
    State(state): State<HolocronState>,
    NameQuery(name): NameQuery,
) -> Result<String, HolocronError> {
    if state.catalog.delete_by_name(&name).await? == 0 {
        return Err(HolocronError::NotFound(format!(
            "Character \"{name}\" not found"
        )));
    }
    Ok(format!("Character \"{name}\" deleted successfully!"))
}

/// DELETE /characters/all
pub(super) async fn delete_all_characters(
    State(state): State<HolocronState>,
) -> Result<String, HolocronError> {
    let deleted = state.catalog.delete_all().await?;
    Ok(format!(
        "All characters deleted successfully! Removed: {deleted}"
    ))
}
