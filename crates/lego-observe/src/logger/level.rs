use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// A filter directive accepted by [`EnvFilter`], e.g. `info` or `lego_core=debug,warn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(directive: impl Into<String>) -> Result<Self, LoggerError> {
        let directive = directive.into();
        EnvFilter::try_new(&directive)
            .map_err(|_| LoggerError::InvalidLogLevel(directive.clone()))?;
        Ok(Self(directive))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.0).map_err(|_| LoggerError::InvalidLogLevel(self.0.clone()))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_directives() {
        assert!(LoggerLevel::new("debug").is_ok());
        assert!(LoggerLevel::new("lego_core=trace,warn").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            LoggerLevel::new("lego_core=loud"),
            Err(LoggerError::InvalidLogLevel("lego_core=loud".to_string()))
        );
    }
}
