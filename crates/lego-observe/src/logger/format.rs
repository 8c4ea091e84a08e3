use std::str::FromStr;

use crate::logger::error::LoggerError;

/// Output format of the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggerFormat {
    /// Human-readable lines, coloured on a terminal.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
    /// Native systemd journal fields.
    Journald,
}

impl LoggerFormat {
    /// Whether this build can emit the format.
    pub fn is_supported(&self) -> bool {
        match self {
            LoggerFormat::Text | LoggerFormat::Json => true,
            LoggerFormat::Journald => cfg!(all(target_os = "linux", feature = "journald")),
        }
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => LoggerFormat::Text,
            "json" => LoggerFormat::Json,
            "journald" | "journal" => LoggerFormat::Journald,
            _ => return Err(LoggerError::InvalidFormat(s.to_string())),
        };
        if !format.is_supported() {
            return Err(LoggerError::JournaldNotSupported);
        }
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_json() {
        assert_eq!(" TEXT ".parse::<LoggerFormat>().unwrap(), LoggerFormat::Text);
        assert_eq!("plain".parse::<LoggerFormat>().unwrap(), LoggerFormat::Text);
        assert_eq!("json".parse::<LoggerFormat>().unwrap(), LoggerFormat::Json);
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(
            "xml".parse::<LoggerFormat>(),
            Err(LoggerError::InvalidFormat("xml".to_string()))
        );
    }

    #[cfg(not(all(target_os = "linux", feature = "journald")))]
    #[test]
    fn journald_needs_feature() {
        assert!(!LoggerFormat::Journald.is_supported());
        assert_eq!(
            "journald".parse::<LoggerFormat>(),
            Err(LoggerError::JournaldNotSupported)
        );
    }
}
