// ScanScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ScanScope operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ScanScopeError {
    /// The scan document could not be parsed.
    Malformed(MalformedInputError),

    /// The scan file could not be read.
    Unreadable(UnreadableFileError),

    /// Filter operation failed.
    Filter(FilterError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for ScanScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "Malformed scan document: {e}"),
            Self::Unreadable(e) => write!(f, "Cannot read scan file: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ScanScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::Unreadable(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Malformed input errors
// ---------------------------------------------------------------------------

/// Errors raised while extracting service records from a scan document.
///
/// The parse is atomic: the first of these aborts the whole document with no
/// partial result.
#[derive(Debug)]
pub enum MalformedInputError {
    /// The document is not well-formed XML.
    Xml { source: roxmltree::Error },

    /// The document root is not `<nmaprun>`.
    UnexpectedRoot { found: String },

    /// A `<host>` element has no `<address addr="...">`.
    MissingAddress { host_index: usize },

    /// A `<port>` element has no `portid` attribute.
    MissingPortId { host: String },

    /// A `portid` attribute is not a valid port number.
    InvalidPortId {
        host: String,
        raw: String,
        source: std::num::ParseIntError,
    },
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml { source } => write!(f, "not well-formed XML: {source}"),
            Self::UnexpectedRoot { found } => {
                write!(f, "document root is <{found}>, expected <nmaprun>")
            }
            Self::MissingAddress { host_index } => {
                write!(f, "host #{host_index} has no <address addr> element")
            }
            Self::MissingPortId { host } => {
                write!(f, "host '{host}' has a <port> without a portid attribute")
            }
            Self::InvalidPortId { host, raw, source } => {
                write!(f, "host '{host}' has a non-numeric portid '{raw}': {source}")
            }
        }
    }
}

impl std::error::Error for MalformedInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml { source } => Some(source),
            Self::InvalidPortId { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<MalformedInputError> for ScanScopeError {
    fn from(e: MalformedInputError) -> Self {
        Self::Malformed(e)
    }
}

// ---------------------------------------------------------------------------
// Unreadable file errors
// ---------------------------------------------------------------------------

/// Errors raised while reading a scan file from disk, before parsing.
#[derive(Debug)]
pub enum UnreadableFileError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The file exceeds the maximum allowed document size.
    TooLarge { path: PathBuf, size: u64, max: u64 },

    /// Any other I/O failure (permissions, encoding, device errors).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for UnreadableFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::TooLarge { path, size, max } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "'{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for UnreadableFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<UnreadableFileError> for ScanScopeError {
    fn from(e: UnreadableFileError) -> Self {
        Self::Unreadable(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to filter operations.
#[derive(Debug)]
pub enum FilterError {
    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid filter regex '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
        }
    }
}

impl From<FilterError> for ScanScopeError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed the maximum row count.
    TooManyRows { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyRows { count, max } => write!(
                f,
                "Export of {count} rows exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for ScanScopeError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config file exceeds the maximum allowed size.
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge { path, size, max } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max} bytes",
                path.display()
            ),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ScanScopeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ScanScope results.
pub type Result<T> = std::result::Result<T, ScanScopeError>;
