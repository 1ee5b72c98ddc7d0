//! Log sink setup: console output mirrored to an append-only file.
//!
//! The file layer is best-effort. A log directory that cannot be created
//! or written degrades to console-only output with a warning; it is
//! never fatal.

// Standard library
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// 3rd party crates
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the configured log directory.
pub const LOG_FILE_NAME: &str = "app.log";

/// Installs the global tracing subscriber. `debug` lowers the default
/// level to debug; `RUST_LOG` still takes precedence when set.
pub fn init(debug: bool, log_dir: &str) {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("lettre=error".parse().unwrap());

    let console_layer = tracing_subscriber::fmt::layer().with_level(true);

    match open_log_file(Path::new(log_dir)) {
        Ok((file, path)) => {
            // Arc<File> appends through a shared handle; each event is
            // written in a single call, so writers on the signal path
            // and the worker path do not interleave within a line.
            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file));

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            tracing::debug!("Logging to console and {}", path.display());
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .init();

            warn!(
                "Could not open log file under '{}', continuing console-only: {}",
                log_dir, e
            );
        }
    }
}

fn open_log_file(log_dir: &Path) -> io::Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)?;

    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Ok((file, path))
}
