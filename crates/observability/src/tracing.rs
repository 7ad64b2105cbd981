//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" | "plain" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG` (default `info`). Logs go to stderr so they never mix
/// with catalog output on stdout. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
