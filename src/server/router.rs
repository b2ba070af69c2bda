use crate::server::routes::{characters, home};
use crate::service::CatalogService;

use axum::{
    Router,
    extract::Request,
    http::{
        HeaderName, HeaderValue, Method, StatusCode, Version,
        header::{CONTENT_TYPE, USER_AGENT},
    },
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use base64::Engine as _;
use rand::RngCore;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct HolocronState {
    pub catalog: CatalogService,
}

impl HolocronState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// CORS for the browser client. An empty origin list allows any origin.
///
/// Origins are checked when the configuration is loaded; one that still fails to
/// parse here is skipped.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %o, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(parsed)
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let protocol = format_http_version(req.version());

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    macro_rules! log_request {
        ($level:ident) => {
            $level!(
                status = status.as_u16(),
                request_id = %request_id,
                method = %method,
                protocol,
                path = %path,
                latency_ms,
                user_agent = %user_agent,
                "request handled"
            )
        };
    }

    if status.is_server_error() {
        log_request!(error);
    } else if status.is_client_error() {
        log_request!(warn);
    } else {
        log_request!(info);
    }

    resp
}

pub fn holocron_router(state: HolocronState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home::welcome))
        .merge(characters::router())
        .nest("/api", characters::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(access_log))
}
