use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "PROJDASH_LOG";

/// Install the stderr subscriber. `--debug` wins over `PROJDASH_LOG`;
/// without either only errors are shown.
pub(crate) fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
