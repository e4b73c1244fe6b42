//! Log setup. The game owns the terminal's alternate screen, so logs go to
//! a file instead of stderr.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE: &str = "flappy.log";

/// Default log location in the system temp directory.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Install the global subscriber writing to `log_path`, or the default
/// location. Filtering follows `RUST_LOG`, falling back to `info`.
/// Returns the path in use.
pub fn init(log_path: Option<&Path>) -> io::Result<PathBuf> {
    let path = log_path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
