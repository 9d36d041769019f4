use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LogConfig;
use crate::errors::ObserveError;
use crate::format::LogFormat;

/// Install the process-wide subscriber described by `cfg`.
///
/// This is a one-time bootstrap owned by the harness binary; library code
/// never calls it. A second call fails with
/// [`ObserveError::AlreadyInitialized`].
pub fn init_logging(cfg: &LogConfig) -> Result<(), ObserveError> {
    let filter = EnvFilter::try_new(&cfg.level)
        .map_err(|_| ObserveError::InvalidLevel(cfg.level.clone()))?;
    let timer = mk_timer();

    let registry = tracing_subscriber::registry().with(filter);
    let result = match cfg.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_ansi(cfg.use_color)
                    .with_target(cfg.with_targets)
                    .with_timer(timer),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(cfg.with_targets)
                    .with_timer(timer),
            )
            .try_init(),
    };
    result.map_err(as_init_error)?;

    debug!(format = %cfg.format, level = %cfg.level, "logging initialized");
    Ok(())
}

fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn as_init_error(err: impl std::fmt::Display) -> ObserveError {
    let msg = err.to_string();
    if msg.contains("already been set") {
        ObserveError::AlreadyInitialized
    } else {
        ObserveError::Init(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_level_filter_is_rejected() {
        let cfg = LogConfig {
            level: "===".to_string(),
            ..LogConfig::default()
        };

        let result = init_logging(&cfg);
        assert!(matches!(result, Err(ObserveError::InvalidLevel(_))));
    }

    #[test]
    fn second_init_reports_already_initialized() {
        let cfg = LogConfig::default();

        // Whichever call wins the global dispatcher, the next one must
        // fail with the typed error rather than panic.
        let _ = init_logging(&cfg);
        let second = init_logging(&cfg);
        assert!(matches!(second, Err(ObserveError::AlreadyInitialized)));
    }
}
