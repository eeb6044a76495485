//! Fault classification: the closed taxonomy and the error type behind it.
//!
//! Every failure a scenario provokes ends up as exactly one [`FaultError`]
//! variant, and every variant maps to exactly one [`FaultKind`]. I/O-backed
//! failures are classified by matching the most specific `io::ErrorKind`
//! first; only what nothing else claims falls through to [`FaultError::Io`].

use std::fmt;
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Closed classification of every failure the scenarios can provoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    ResourceClosed,
    ResourceNotFound,
    EndOfData,
    DependencyUnavailable,
    UnitNotFound,
    InvalidArithmetic,
    InvalidReference,
    OutOfRange,
    InvalidConversion,
    InvalidArgument,
    MalformedInput,
    /// Generic fallback for I/O failures no specific kind claims.
    Io,
}

impl FaultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultKind::ResourceClosed => "ResourceClosed",
            FaultKind::ResourceNotFound => "ResourceNotFound",
            FaultKind::EndOfData => "EndOfData",
            FaultKind::DependencyUnavailable => "DependencyUnavailable",
            FaultKind::UnitNotFound => "UnitNotFound",
            FaultKind::InvalidArithmetic => "InvalidArithmetic",
            FaultKind::InvalidReference => "InvalidReference",
            FaultKind::OutOfRange => "OutOfRange",
            FaultKind::InvalidConversion => "InvalidConversion",
            FaultKind::InvalidArgument => "InvalidArgument",
            FaultKind::MalformedInput => "MalformedInput",
            FaultKind::Io => "Io",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure, one variant per [`FaultKind`].
///
/// Variants carry the context a report line needs; where a native error
/// exists (io, parse) it is kept as `#[source]` so the original text
/// survives into the report.
#[derive(Debug, Error)]
pub enum FaultError {
    #[error("resource '{resource}' is already closed")]
    ResourceClosed { resource: String },

    #[error("no resource found at '{path}'")]
    ResourceNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("the data source ended before a complete value could be read")]
    EndOfData {
        #[source]
        source: io::Error,
    },

    #[error("dependency at {endpoint} is unreachable")]
    DependencyUnavailable {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("no unit registered under the name '{name}'")]
    UnitNotFound { name: String },

    #[error("arithmetic operation '{operation}' is undefined")]
    InvalidArithmetic { operation: String },

    #[error("required value was absent while {context}")]
    InvalidReference { context: String },

    #[error("index {index} is out of bounds for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("cannot convert {from} into {to}")]
    InvalidConversion {
        from: &'static str,
        to: &'static str,
    },

    #[error("{reason}")]
    InvalidArgument { reason: String },

    #[error("'{input}' is not a valid number")]
    MalformedInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected I/O failure")]
    Io(#[source] io::Error),
}

impl FaultError {
    /// Which taxonomy entry this failure belongs to.
    pub fn kind(&self) -> FaultKind {
        match self {
            FaultError::ResourceClosed { .. } => FaultKind::ResourceClosed,
            FaultError::ResourceNotFound { .. } => FaultKind::ResourceNotFound,
            FaultError::EndOfData { .. } => FaultKind::EndOfData,
            FaultError::DependencyUnavailable { .. } => FaultKind::DependencyUnavailable,
            FaultError::UnitNotFound { .. } => FaultKind::UnitNotFound,
            FaultError::InvalidArithmetic { .. } => FaultKind::InvalidArithmetic,
            FaultError::InvalidReference { .. } => FaultKind::InvalidReference,
            FaultError::OutOfRange { .. } => FaultKind::OutOfRange,
            FaultError::InvalidConversion { .. } => FaultKind::InvalidConversion,
            FaultError::InvalidArgument { .. } => FaultKind::InvalidArgument,
            FaultError::MalformedInput { .. } => FaultKind::MalformedInput,
            FaultError::Io(_) => FaultKind::Io,
        }
    }

    /// Classify a bare I/O error. A short read is `EndOfData`; anything
    /// without a more specific kind stays the generic `Io` fallback.
    pub fn classify_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => FaultError::EndOfData { source: err },
            _ => FaultError::Io(err),
        }
    }

    /// Classify the failure of opening a named resource for reading.
    pub fn from_open(path: impl Into<String>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FaultError::ResourceNotFound {
                path: path.into(),
                source: err,
            },
            _ => Self::classify_io(err),
        }
    }

    /// Classify the failure of connecting to an external endpoint.
    pub fn from_connect(endpoint: impl Into<String>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::TimedOut => FaultError::DependencyUnavailable {
                endpoint: endpoint.into(),
                source: err,
            },
            _ => Self::classify_io(err),
        }
    }

    /// Classify a failed integer parse, keeping the native error as detail.
    pub fn malformed_input(input: impl Into<String>, err: ParseIntError) -> Self {
        FaultError::MalformedInput {
            input: input.into(),
            source: err,
        }
    }
}

// Bare `?` on an I/O operation still gets the specificity ordering.
impl From<io::Error> for FaultError {
    fn from(err: io::Error) -> Self {
        FaultError::classify_io(err)
    }
}
