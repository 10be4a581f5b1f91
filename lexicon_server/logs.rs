use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes `tracing_subscriber` with a stdout layer and a daily rotating
/// file layer under `logs/`.
///
/// `RUST_LOG` controls the levels; without it everything logs at `info`
/// and the lexicon crates at `debug`.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "lexicon.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lexicon=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // the writer thread stops when the guard drops; it must live as long as the process
    std::mem::forget(guard);
}
