//! File logging. The terminal belongs to the TUI, so logs never go to stdout.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `CAMPADMIN_LOG=debug`.
pub const LOG_ENV: &str = "CAMPADMIN_LOG";

/// Route `tracing` output to `path`. Returns false (and logs nothing) when the
/// file cannot be opened or a subscriber is already installed.
pub fn init(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
