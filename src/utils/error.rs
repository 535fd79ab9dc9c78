use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeltError {
    #[error("Malformed descriptor line {line}: expected `LABEL: value`")]
    MalformedLine { line: usize },

    #[error("Unknown descriptor field: {label}")]
    UnknownField { label: String },

    #[error("Descriptor field {field} appears more than once")]
    DuplicateField { field: &'static str },

    #[error("Descriptor field {field} is missing")]
    MissingField { field: &'static str },

    #[error("Invalid VERSION value: {value}")]
    InvalidVersion { value: String },

    #[error("Invalid release date '{value}': {source}")]
    InvalidReleaseDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid LICENSE value: {value}")]
    InvalidLicense { value: String },

    #[error("Unknown module variant: {name}")]
    UnknownVariant { name: String },

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("TOML parsing error: {0}")]
    TomlDeserializeError(#[from] toml::de::Error),

    #[error("Logger initialization failed: {0}")]
    LoggerInitError(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, MeltError>;
