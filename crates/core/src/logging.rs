use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init_logging(
    component: &str,
    to_stderr: bool,
    log_dir: &Path,
    default_filter: &str,
) -> WorkerGuard {
    let _ = std::fs::create_dir_all(log_dir);

    // Roll daily, with the component name as the prefix
    let file_appender = tracing_appender::rolling::daily(log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    // Reports go to stdout, so the terminal layer writes to stderr only.
    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        let _ = registry.with(stderr_layer).try_init();
    } else {
        let _ = registry.try_init();
    }

    guard
}
