use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: the TUI owns stdout/stderr, and a fmt
/// layer writing there would corrupt the display. Set `MEALDECK_LOG` to a
/// file path to enable it. `RUST_LOG` controls the filter as usual.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("MEALDECK_LOG").ok() else {
        return;
    };
    init_tracing_to(Path::new(&log_path));
}

pub fn init_tracing_to(path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(path) else {
        eprintln!("Warning: failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
