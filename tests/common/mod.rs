#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use holocron::CatalogService;
use holocron::db::{DbActorHandle, DbSettings};
use holocron::source::SwapiClient;
use serde::Deserialize;
use serde_json::{Value, json};
use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use url::Url;

/// In-process stand-in for the SWAPI people listing.
pub struct MockSwapi {
    pub root_url: Url,
    hits: Arc<AtomicUsize>,
}

impl MockSwapi {
    /// Number of page requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> SwapiClient {
        SwapiClient::with_client(reqwest::Client::new(), self.root_url.clone())
    }
}

#[derive(Clone)]
struct MockState {
    base: String,
    pages: Arc<Vec<Vec<Value>>>,
    fail_with: Option<StatusCode>,
    hits: Arc<AtomicUsize>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

async fn people_handler(
    State(state): State<MockState>,
    Query(query): Query<PageQuery>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if let Some(status) = state.fail_with {
        return (status, Json(json!({ "detail": "upstream down" })));
    }

    let page = query.page.unwrap_or(1);
    let Some(results) = page.checked_sub(1).and_then(|i| state.pages.get(i)) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" })));
    };

    let total: usize = state.pages.iter().map(Vec::len).sum();
    let next = if page < state.pages.len() {
        Value::String(format!("{}/api/people/?page={}", state.base, page + 1))
    } else {
        Value::Null
    };

    (
        StatusCode::OK,
        Json(json!({
            "count": total,
            "next": next,
            "previous": null,
            "results": results,
        })),
    )
}

pub async fn spawn_mock_swapi(pages: Vec<Vec<Value>>) -> MockSwapi {
    spawn_mock_swapi_with(pages, None).await
}

/// Mock whose every page answers with `status`.
pub async fn spawn_failing_swapi(status: StatusCode) -> MockSwapi {
    spawn_mock_swapi_with(Vec::new(), Some(status)).await
}

async fn spawn_mock_swapi_with(
    pages: Vec<Vec<Value>>,
    fail_with: Option<StatusCode>,
) -> MockSwapi {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let base = format!("http://{addr}");

    let hits = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        base: base.clone(),
        pages: Arc::new(pages),
        fail_with,
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/api/people", get(people_handler))
        .route("/api/people/", get(people_handler))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    MockSwapi {
        root_url: Url::parse(&format!("{base}/api/people")).expect("valid root url"),
        hits,
    }
}

pub fn person(name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "url": format!("https://swapi.dev/api/people/{}/", name.len()),
    })
}

/// Three pages of ten records each; "Luke Skywalker" sits on page 1 and
/// "Leia Organa" on page 3. No other name contains "sky" or "organa".
pub fn three_pages() -> Vec<Vec<Value>> {
    (0..3)
        .map(|p| {
            (0..10)
                .map(|i| match (p, i) {
                    (0, 0) => person("Luke Skywalker"),
                    (2, 9) => person("Leia Organa"),
                    _ => person(&format!("Trooper TK-{p}{i:02}")),
                })
                .collect()
        })
        .collect()
}

pub fn unique_sqlite_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "holocron-{prefix}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

pub async fn spawn_db(path: &Path) -> DbActorHandle {
    holocron::db::spawn(DbSettings {
        database_url: format!("sqlite:{}", path.display()),
        max_connections: 4,
    })
    .await
    .expect("failed to spawn DbActor")
}

pub async fn catalog(mock: &MockSwapi, path: &Path) -> (CatalogService, DbActorHandle) {
    let db = spawn_db(path).await;
    (CatalogService::new(db.clone(), mock.client(), 4), db)
}

pub fn cleanup_sqlite(path: &Path) {
    let _ = std::fs::remove_file(format!("{}-wal", path.display()));
    let _ = std::fs::remove_file(format!("{}-shm", path.display()));
    let _ = std::fs::remove_file(path);
}
