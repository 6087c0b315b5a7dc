//! Error types and definitions for modgraph

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for modgraph operations
#[derive(Debug, Error)]
pub enum ModgraphError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Module list file could not be parsed
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input file does not exist
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// A module record breaks the input contract
    #[error("Invalid module '{name}': {reason}")]
    InvalidModule { name: String, reason: String },

    /// A relative import could not be turned into an absolute name
    #[error("Cannot resolve relative import '{import}' from '{source_module}': {reason}")]
    RelativeImport {
        import: String,
        source_module: String,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Analysis errors carrying a free-form message
    #[error("Analysis error: {message}")]
    Analysis { message: String },
}

impl ModgraphError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ModgraphError::RelativeImport { .. } => ErrorSeverity::Warning,
            ModgraphError::InvalidModule { .. } => ErrorSeverity::Warning,

            ModgraphError::InputNotFound { .. } => ErrorSeverity::Critical,
            ModgraphError::JsonParse { .. } => ErrorSeverity::Critical,
            ModgraphError::Config { .. } => ErrorSeverity::Critical,
            ModgraphError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ModgraphError::ConfigRead { .. } => ErrorSeverity::Critical,
            ModgraphError::ConfigParse { .. } => ErrorSeverity::Critical,
            ModgraphError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            ModgraphError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ModgraphError::OutputWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ModgraphError::JsonParse { file, source } => {
                format!(
                    "Invalid module list in '{}': {}. Expected a JSON array of {{name, path, imports}} records.",
                    file.display(),
                    source
                )
            }
            ModgraphError::InputNotFound { path } => {
                format!("Input file '{}' does not exist.", path.display())
            }
            ModgraphError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ModgraphError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with --init or use command line options.",
                    path.display()
                )
            }
            ModgraphError::OutputWrite { path, source } => {
                format!(
                    "Cannot write output to '{}': {}. Check that the directory exists and is writable.",
                    path.display(),
                    source
                )
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ModgraphError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ModgraphError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ModgraphError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid module error
    pub fn invalid_module(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModgraphError::InvalidModule {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a relative import resolution error
    pub fn relative_import(
        import: impl Into<String>,
        source_module: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModgraphError::RelativeImport {
            import: import.into(),
            source_module: source_module.into(),
            reason: reason.into(),
        }
    }

    /// Create a free-form analysis error
    pub fn analysis_error(message: impl Into<String>) -> Self {
        ModgraphError::Analysis {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ModgraphError {
    fn from(err: std::io::Error) -> Self {
        ModgraphError::io_error(err)
    }
}

impl From<glob::PatternError> for ModgraphError {
    fn from(err: glob::PatternError) -> Self {
        ModgraphError::GlobPattern { source: err }
    }
}

impl From<csv::Error> for ModgraphError {
    fn from(err: csv::Error) -> Self {
        ModgraphError::Csv { source: err }
    }
}

impl From<serde_json::Error> for ModgraphError {
    fn from(err: serde_json::Error) -> Self {
        ModgraphError::JsonSerialize { source: err }
    }
}

/// Result type alias for modgraph operations
pub type Result<T> = std::result::Result<T, ModgraphError>;
