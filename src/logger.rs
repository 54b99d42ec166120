use crate::config::LogFormat;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level`. Calling this more than once is a no-op, so
/// embedding hosts and tests can initialize freely.
pub fn init_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let default_directive = match (verbose, level) {
        (true, _) => "campaign_pacing=debug,warn".to_string(),
        (false, Some(level)) => format!("campaign_pacing={},warn", level),
        (false, None) => "campaign_pacing=warn".to_string(),
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
    };
    if installed.is_err() {
        tracing::trace!("logger already initialized");
    }
}
