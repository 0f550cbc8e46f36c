//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber pipeline from `tracing` macros to a
//! dated log file in the data directory. Stdout is never used: the terminal
//! is owned by the renderer, so all diagnostics go to the file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths::data_dir;
use crate::Config;

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (accepts `EnvFilter` directives, e.g.
///    `"debug"` or `"firmscout=trace"`)
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are appended to `~/.local/share/firmscout/firmscout-YYYY-MM-DD.log`
/// (or the `XDG_DATA_HOME` equivalent), one file per day.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let filename = format!("firmscout-{}.log", chrono::Local::now().format("%Y-%m-%d"));
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(filename))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
