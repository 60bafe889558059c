use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Install the process-wide subscriber for the catalog service.
///
/// `format` is the validated `logging.format` value: `json` emits one JSON
/// object per event, anything else the compact single-line layout. `RUST_LOG`
/// replaces [`DEFAULT_FILTER`] when set. Output goes to stdout. A second call
/// leaves the first subscriber in place.
pub fn init_logging(format: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        "json" => builder.json().try_init(),
        _ => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_first_subscriber() {
        init_logging("json");
        init_logging("compact");
    }
}
