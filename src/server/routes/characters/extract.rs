use crate::error::HolocronError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NameField {
    #[serde(default)]
    name: Option<String>,
}

fn require_name(name: Option<String>) -> Result<String, HolocronError> {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| HolocronError::Validation("character name is required".to_string()))
}

/// `{"name": "..."}` JSON body with a non-blank name.
pub(crate) struct NameBody(pub(crate) String);

impl<S> FromRequest<S> for NameBody
where
    S: Send + Sync,
{
    type Rejection = HolocronError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<NameField>::from_request(req, state)
            .await
            .map_err(|e| HolocronError::Validation(e.body_text()))?;
        require_name(body.name).map(Self)
    }
}

/// `?name=...` query parameter with a non-blank name.
pub(crate) struct NameQuery(pub(crate) String);

impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = HolocronError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<NameField>::from_request_parts(parts, state)
            .await
            .map_err(|e| HolocronError::Validation(e.body_text()))?;
        require_name(query.name).map(Self)
    }
}

/// Optional `?name=...` search filter.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) name: Option<String>,
}
