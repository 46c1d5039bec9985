use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::config::LoggingSettings;

/// Install the global subscriber. The terminal belongs to the UI, so events
/// only go to the configured file. `RUST_LOG` overrides the configured filter.
pub fn init(settings: &LoggingSettings) -> anyhow::Result<()> {
    let file_layer = match &settings.file {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter)))
        .try_init()?;
    Ok(())
}
