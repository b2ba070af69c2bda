use holocron::config::Config;
use holocron::db::DbSettings;
use holocron::server::router::{HolocronState, build_cors_layer, holocron_router};
use holocron::service::CatalogService;
use holocron::source::SwapiClient;
use holocron::utils::logging::init_tracing;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        max_connections = cfg.basic.max_connections,
        loglevel = %cfg.basic.loglevel,
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        cors_origins = ?cfg.basic.cors_origins,
        "Basic config loaded"
    );
    info!(
        source_root_url = %cfg.source.root_url,
        source_proxy = %cfg.source.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        source_timeout_secs = cfg.source.timeout_secs,
        source_import_concurrency = cfg.source.import_concurrency,
        "Source config loaded"
    );

    let db = holocron::db::spawn(DbSettings::from(&cfg.basic)).await?;
    let source = SwapiClient::new(&cfg.source)?;
    let catalog = CatalogService::new(db, source, cfg.source.import_concurrency);

    let cors = build_cors_layer(&cfg.basic.cors_origins);
    let app = holocron_router(HolocronState::new(catalog), cors);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
