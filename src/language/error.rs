//! Error types for source text parsing

use lalrpop_util::ParseError as LalrpopError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// A position in the source text
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1
    pub line: usize,
    /// Column number in characters, starting at 1
    pub column: usize,
    /// Byte offset into the source
    pub offset: usize,
}

impl Location {
    /// Compute the line and column of a byte offset in `source`
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Location {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors produced while parsing program text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that starts no token
    InvalidToken {
        /// Where the offending character is
        location: Location,
    },
    /// A token that the grammar does not allow at this point
    UnexpectedToken {
        /// The token text
        token: Arc<str>,
        /// Terminals the grammar would have accepted
        expected: Vec<String>,
        /// Where the token starts
        location: Location,
    },
    /// The input ended in the middle of a statement
    UnexpectedEnd {
        /// Terminals the grammar would have accepted
        expected: Vec<String>,
        /// End of the input
        location: Location,
    },
}

impl ParseError {
    /// Location of the error in the source text
    pub fn location(&self) -> Location {
        match self {
            ParseError::InvalidToken { location }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEnd { location, .. } => *location,
        }
    }

    /// Convert a parser error, resolving byte offsets against `source`
    pub(crate) fn from_lalrpop<T, E>(source: &str, err: LalrpopError<usize, T, E>) -> Self
    where
        T: fmt::Display,
        E: fmt::Display,
    {
        match err {
            LalrpopError::InvalidToken { location } => ParseError::InvalidToken {
                location: Location::from_offset(source, location),
            },
            LalrpopError::UnrecognizedEof { location, expected } => ParseError::UnexpectedEnd {
                expected,
                location: Location::from_offset(source, location),
            },
            LalrpopError::UnrecognizedToken {
                token: (start, token, _),
                expected,
            } => ParseError::UnexpectedToken {
                token: Arc::from(token.to_string()),
                expected,
                location: Location::from_offset(source, start),
            },
            LalrpopError::ExtraToken {
                token: (start, token, _),
            } => ParseError::UnexpectedToken {
                token: Arc::from(token.to_string()),
                expected: Vec::new(),
                location: Location::from_offset(source, start),
            },
            // The grammar has no fallible actions, so this only carries lexer text
            LalrpopError::User { error } => ParseError::UnexpectedToken {
                token: Arc::from(error.to_string()),
                expected: Vec::new(),
                location: Location::from_offset(source, 0),
            },
        }
    }
}

fn write_expected(f: &mut fmt::Formatter<'_>, expected: &[String]) -> fmt::Result {
    if !expected.is_empty() {
        write!(f, "; expected one of {}", expected.join(", "))?;
    }
    Ok(())
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken { location } => {
                write!(f, "Invalid token at {}", location)
            }
            ParseError::UnexpectedToken {
                token,
                expected,
                location,
            } => {
                write!(f, "Unexpected token `{}` at {}", token, location)?;
                write_expected(f, expected)
            }
            ParseError::UnexpectedEnd { expected, location } => {
                write!(f, "Unexpected end of input at {}", location)?;
                write_expected(f, expected)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let source = "var x;\nz = x and;\n";
        let loc = Location::from_offset(source, 16);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 10);
        assert_eq!(loc.offset, 16);
    }

    #[test]
    fn test_location_clamps_to_end() {
        let loc = Location::from_offset("ab", 10);
        assert_eq!(loc, Location { line: 1, column: 3, offset: 2 });
    }

    #[test]
    fn test_unexpected_token_display() {
        let err = ParseError::UnexpectedToken {
            token: Arc::from("or"),
            expected: vec!["\";\"".to_string(), "\"and\"".to_string()],
            location: Location { line: 3, column: 15, offset: 40 },
        };
        let msg = err.to_string();
        assert!(msg.contains("`or`"));
        assert!(msg.contains("line 3, column 15"));
        assert!(msg.contains("expected one of"));
    }

    #[test]
    fn test_parse_error_to_io_error() {
        let err = ParseError::InvalidToken {
            location: Location { line: 1, column: 1, offset: 0 },
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
