//! Error types for running a program
//!
//! Each stage has its own error enum; [`ProgramError`] wraps whichever stage
//! failed so callers can match on it or fall back to `io::Error`.

use crate::language::ParseError;
use crate::resolve::ResolveError;
use crate::table::TableError;
use std::fmt;
use std::io;

/// Any failure while loading or running a program
#[derive(Debug)]
pub enum ProgramError {
    /// The source text is not a valid program
    Parse(ParseError),
    /// An identifier was redefined or used before definition
    Resolve(ResolveError),
    /// A show request could not be answered
    Table(TableError),
    /// IO error wrapper
    ///
    /// Wraps errors from reading a program file or writing its output.
    Io(io::Error),
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Parse(err) => write!(f, "Parse error: {}", err),
            ProgramError::Resolve(err) => write!(f, "Resolve error: {}", err),
            ProgramError::Table(err) => write!(f, "{}", err),
            ProgramError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProgramError::Parse(err) => Some(err),
            ProgramError::Resolve(err) => Some(err),
            ProgramError::Table(err) => Some(err),
            ProgramError::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for ProgramError {
    fn from(err: ParseError) -> Self {
        ProgramError::Parse(err)
    }
}

impl From<ResolveError> for ProgramError {
    fn from(err: ResolveError) -> Self {
        ProgramError::Resolve(err)
    }
}

impl From<TableError> for ProgramError {
    fn from(err: TableError) -> Self {
        ProgramError::Table(err)
    }
}

impl From<io::Error> for ProgramError {
    fn from(err: io::Error) -> Self {
        ProgramError::Io(err)
    }
}

// Lets `?` lift program errors into io::Result
impl From<ProgramError> for io::Error {
    fn from(err: ProgramError) -> Self {
        match err {
            ProgramError::Parse(err) => err.into(),
            ProgramError::Resolve(err) => err.into(),
            ProgramError::Table(err) => err.into(),
            ProgramError::Io(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::Arc;

    #[test]
    fn test_table_error_passes_through_display() {
        let err = ProgramError::from(TableError::UnknownShowTarget {
            name: Arc::from("q"),
        });
        assert_eq!(err.to_string(), "Show variable 'q' is not found");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_resolve_error_display_is_prefixed() {
        let err = ProgramError::from(ResolveError::AlreadyDefined {
            name: Arc::from("x"),
        });
        assert!(err.to_string().starts_with("Resolve error: "));
        assert!(err.to_string().contains('x'));
    }

    #[test]
    fn test_io_round_trip_keeps_kind() {
        let original = io::Error::new(io::ErrorKind::NotFound, "missing.tt");
        let err = ProgramError::from(original);
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_table_error_to_io_error_kind() {
        let err = ProgramError::from(TableError::VariableCountExceeded {
            count: 30,
            limit: 24,
        });
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
