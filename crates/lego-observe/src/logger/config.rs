use crate::logger::{error::LoggerError, format::LoggerFormat, level::LoggerLevel};

const ENV_LEVEL: &str = "LEGO_LOG";
const ENV_FORMAT: &str = "LEGO_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Default config overridden by `LEGO_LOG` and `LEGO_LOG_FORMAT` when set.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            cfg.level = LoggerLevel::new(level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            cfg.format = format.parse()?;
        }
        if cfg.format != LoggerFormat::Text {
            cfg.use_color = false;
        }
        Ok(cfg)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || atty::is(atty::Stream::Stdout);
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_without_vars_is_default() {
        let cfg = LoggerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level.as_str(), "info");
    }

    #[test]
    fn lookup_overrides_level_and_format() {
        let cfg = LoggerConfig::from_lookup(|key| match key {
            ENV_LEVEL => Some("debug".to_string()),
            ENV_FORMAT => Some("json".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level.as_str(), "debug");
        assert!(!cfg.use_color);
    }

    #[test]
    fn lookup_propagates_bad_format() {
        let err = LoggerConfig::from_lookup(|key| (key == ENV_FORMAT).then(|| "yaml".to_string()))
            .unwrap_err();
        assert_eq!(err, LoggerError::InvalidFormat("yaml".to_string()));
    }
}
