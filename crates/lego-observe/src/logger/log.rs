use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

/// Install the subscriber matching `cfg.format` as the process-wide default.
pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.level.filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LoggerFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(cfg.use_color)
                .with_target(cfg.with_targets)
                .with_timer(local_rfc3339());
            try_install(registry.with(layer))
        }
        LoggerFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(cfg.with_targets)
                .with_timer(local_rfc3339());
            try_install(registry.with(layer))
        }
        LoggerFormat::Journald => journald(registry),
    }
}

/// Timestamps in local time, falling back to UTC when the offset is unknown.
fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn try_install<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let msg = e.to_string();
        if msg.contains("SetGlobalDefaultError") || msg.contains("global default") {
            LoggerError::AlreadyInitialized
        } else {
            LoggerError::InitializationFailed(msg)
        }
    })
}

type Filtered = tracing_subscriber::layer::Layered<EnvFilter, tracing_subscriber::Registry>;

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald(registry: Filtered) -> Result<(), LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?;
    try_install(registry.with(layer))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald(_registry: Filtered) -> Result<(), LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_timer_formats_rfc3339() {
        use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

        let timer = local_rfc3339();
        let mut out = String::new();
        timer.format_time(&mut Writer::new(&mut out)).unwrap();
        assert!(time::OffsetDateTime::parse(&out, &Rfc3339).is_ok(), "{out}");
    }
}
