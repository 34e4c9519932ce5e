use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Source unavailable: {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Could not parse markup: {0}")]
    Parse(String),

    #[error("Invalid tee time {input:?}: expected H:MM followed by AM or PM")]
    TimeFormat { input: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        ExportError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn time_format(input: impl Into<String>) -> Self {
        ExportError::TimeFormat { input: input.into() }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
