use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::MatchError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Format `pretty`
/// selects multi-line output; anything else logs compactly.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), MatchError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| MatchError::Logging(format!("invalid log level '{}': {}", settings.level, e)))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.compact().try_init()
    };

    installed.map_err(|e| MatchError::Logging(e.to_string()))?;
    tracing::info!("Logging initialized (level: {}, format: {})", settings.level, settings.format);
    Ok(())
}
