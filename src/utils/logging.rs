use serde::Serialize;

/// Pretty-printed JSON of `value`, rendered only when DEBUG is enabled.
pub(crate) fn pretty_json_if_debug<T>(value: &T) -> Option<String>
where
    T: Serialize,
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return None;
    }

    Some(
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>")),
    )
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();
}
