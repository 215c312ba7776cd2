//! Error types for the leafkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a configuration file cannot be read or
//!   contains a malformed line.
//! - [`BadIpv4Error`]: Returned by every IPv4 conversion when the input is not
//!   a valid dotted-quad or is outside the 32-bit range.
//! - [`ParseObjectIdError`]: Returned when text is not 24 hexadecimal digits.
//!
//! ## Example Usage
//!
//! ```
//! use leafkit::config::Config;
//! use leafkit::error::ConfigError;
//!
//! let err = "name=tom\nbroken line".parse::<Config>().unwrap_err();
//! assert!(matches!(err, ConfigError::Parse { line_number: 2, .. }));
//! assert!(err.to_string().contains("broken line"));
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when loading a configuration fails.
///
/// I/O failures keep the path that was being read and the underlying
/// [`io::Error`], reachable through [`std::error::Error::source`]. A malformed
/// line aborts the whole load and is reported with its 1-based line number.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// A non-blank, non-comment line did not hold exactly one `=`.
    Parse { line_number: usize, line: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line_number: usize, line: impl Into<String>) -> Self {
        Self::Parse {
            line_number,
            line: line.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config file {}: {}", path.display(), source)
            },
            Self::Parse { line_number, line } => {
                write!(f, "parse error at line {}: {}", line_number, line)
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// BadIpv4Error
// ---------------------------------------------------------------------------

/// Error returned when a value is not a correct IPv4 address.
///
/// Covers a wrong segment count, a non-numeric segment, an out-of-range octet
/// and an integer that does not fit in 32 bits.
///
/// # Example
///
/// ```
/// use leafkit::error::BadIpv4Error;
/// use leafkit::net::ipv4::ipv4_to_int;
///
/// assert_eq!(ipv4_to_int("192.168.1"), Err(BadIpv4Error));
/// assert_eq!(BadIpv4Error.to_string(), "bad ipv4 value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadIpv4Error;

impl fmt::Display for BadIpv4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bad ipv4 value")
    }
}

impl std::error::Error for BadIpv4Error {}

// ---------------------------------------------------------------------------
// ParseObjectIdError
// ---------------------------------------------------------------------------

/// Error returned when parsing an [`ObjectId`](crate::hash::ObjectId) from
/// text fails. Carries the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseObjectIdError(String);

impl ParseObjectIdError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseObjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid object id {:?}: expected 24 hex digits", self.0)
    }
}

impl std::error::Error for ParseObjectIdError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
