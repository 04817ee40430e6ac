use std::fmt;

/// Error types for apifix operations
#[derive(Debug)]
pub enum ApifixError {
    /// IO error (reading, writing or renaming source files)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking error
    FileWalking(ignore::Error),
}

impl fmt::Display for ApifixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApifixError::Io(err) => write!(f, "IO error: {err}"),
            ApifixError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ApifixError::Regex(err) => write!(f, "Regex error: {err}"),
            ApifixError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ApifixError::FileNotFound(path) => write!(f, "File not found: {path}"),
            ApifixError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ApifixError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for ApifixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApifixError::Io(err) => Some(err),
            ApifixError::Regex(err) => Some(err),
            ApifixError::TomlParsing(err) => Some(err),
            ApifixError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ApifixError {
    fn from(err: std::io::Error) -> Self {
        ApifixError::Io(err)
    }
}

impl From<tempfile::PersistError> for ApifixError {
    fn from(err: tempfile::PersistError) -> Self {
        ApifixError::Io(err.error)
    }
}

impl From<regex::Error> for ApifixError {
    fn from(err: regex::Error) -> Self {
        ApifixError::Regex(err)
    }
}

impl From<toml::de::Error> for ApifixError {
    fn from(err: toml::de::Error) -> Self {
        ApifixError::TomlParsing(err)
    }
}

impl From<ignore::Error> for ApifixError {
    fn from(err: ignore::Error) -> Self {
        ApifixError::FileWalking(err)
    }
}

/// Type alias for Results using ApifixError
pub type Result<T> = std::result::Result<T, ApifixError>;
