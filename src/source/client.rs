use crate::config::SourceConfig;
use crate::error::HolocronError;
use holocron_schema::{SwapiPage, SwapiPerson};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

use super::HOLOCRON_USER_AGENT;

const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;

/// Walks the paginated people listing of the external character source.
///
/// Notes:
/// - Every walk starts at `root_url` and follows `next` until it is `null`.
/// - Any transport error, non-2xx status or undecodable page aborts the whole walk;
///   partial results are discarded and nothing is retried.
/// - A `next` cursor that points back to an already visited page is treated as a
///   malformed payload.
#[derive(Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    root_url: Url,
}

impl SwapiClient {
    pub fn new(cfg: &SourceConfig) -> Result<Self, HolocronError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(HOLOCRON_USER_AGENT)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.timeout_secs));

        if let Some(proxy_url) = cfg.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }

        Ok(Self::with_client(builder.build()?, cfg.root_url.clone()))
    }

    pub fn with_client(client: reqwest::Client, root_url: Url) -> Self {
        Self { client, root_url }
    }

    /// Fetches every page and returns the accumulated records.
    ///
    /// With `name_filter`, each page is narrowed to substring matches on `name`
    /// (ASCII case ignored) before accumulation. Pagination still visits every
    /// page. An empty filter means no filter.
    pub async fn fetch_all(
        &self,
        name_filter: Option<&str>,
    ) -> Result<Vec<SwapiPerson>, HolocronError> {
        let filter = name_filter.filter(|f| !f.is_empty());
        let start = Instant::now();

        let mut visited: HashSet<Url> = HashSet::new();
        let mut next = Some(self.root_url.clone());
        let mut people = Vec::new();
        let mut pages = 0usize;

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                return Err(HolocronError::UpstreamPayload(format!(
                    "pagination cursor loops back to {url}"
                )));
            }

            let page = self.fetch_page(&url).await?;
            pages += 1;

            next = page
                .next
                .as_deref()
                .map(|cursor| {
                    url.join(cursor).map_err(|e| {
                        HolocronError::UpstreamPayload(format!("invalid next cursor {cursor:?}: {e}"))
                    })
                })
                .transpose()?;

            let fetched = page.results.len();
            match filter {
                Some(needle) => people.extend(
                    page.results
                        .into_iter()
                        .filter(|p| p.name_contains(needle)),
                ),
                None => people.extend(page.results),
            }

            debug!(
                page = pages,
                url = %url,
                fetched,
                accumulated = people.len(),
                has_next = next.is_some(),
                "[Source] Page fetched"
            );
        }

        info!(
            pages,
            total = people.len(),
            filter = filter.unwrap_or("<none>"),
            took_ms = start.elapsed().as_millis() as u64,
            "[Source] Pagination walk complete"
        );

        Ok(people)
    }

    /// Looks a character up by name: a filtered walk narrowed to the exact match,
    /// ignoring ASCII case like the store does.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SwapiPerson>, HolocronError> {
        let candidates = self.fetch_all(Some(name)).await?;
        Ok(candidates.into_iter().find(|p| p.name_is(name)))
    }

    async fn fetch_page(&self, url: &Url) -> Result<SwapiPage, HolocronError> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body_preview = match resp.bytes().await {
                Ok(bytes) => {
                    let raw_body = String::from_utf8_lossy(&bytes);
                    format!("{:.len$}", raw_body, len = UPSTREAM_BODY_PREVIEW_CHARS)
                }
                Err(e) => format!("<failed to read body: {e}>"),
            };
            warn!(
                %status,
                url = %url,
                body = %body_preview,
                "[Source] Upstream returned an error status"
            );
            return Err(HolocronError::UpstreamStatus(status));
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice::<SwapiPage>(&bytes).map_err(|e| {
            HolocronError::UpstreamPayload(format!("failed to decode page {url}: {e}"))
        })
    }
}
