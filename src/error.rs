use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The user failed to make a valid selection within the allowed number
    /// of prompt attempts. Carries the last raw input, or `''` when the
    /// final input was blank.
    #[error("Invalid selection: {input}")]
    InvalidSelection { input: String },

    /// Stdin reached end of input while a prompt was waiting for a line.
    /// The session loop treats this as a clean exit, not a failure.
    #[error("Input stream closed")]
    InputClosed,

    #[error("No CSV datasets were found in {dir}")]
    NoDatasets { dir: String },

    #[error("Failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset {file} is missing required column: {column}")]
    MissingColumn { file: String, column: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid-selection error from the last raw input, mapping a
    /// blank line to the explicit empty-input marker.
    pub fn invalid_selection(raw: &str) -> Self {
        let input = if raw.is_empty() {
            "''".to_string()
        } else {
            raw.to_string()
        };
        Self::InvalidSelection { input }
    }
}
