use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set. `verbose` wins over
/// `level`, which comes from the `[logging]` table of the settings file.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "small_utils=debug,info".to_string()
    } else {
        format!("small_utils={}", level.unwrap_or("info"))
    }
}

fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)))
}

/// 初始化 CLI 日誌
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

/// JSON logs for running under a log collector. Same filtering as
/// [`init_cli_logger`].
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .try_init();
}
