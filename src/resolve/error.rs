//! Error types for identifier resolution

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while binding identifiers to expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A name was declared or assigned a second time
    AlreadyDefined {
        /// The offending identifier
        name: Arc<str>,
    },
    /// An expression refers to a name that has not been declared or assigned yet
    Undefined {
        /// The unknown identifier
        name: Arc<str>,
        /// The assignment whose expression mentions it
        in_assignment: Arc<str>,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::AlreadyDefined { name } => {
                write!(f, "Identifier '{}' was declared or assigned before", name)
            }
            ResolveError::Undefined {
                name,
                in_assignment,
            } => write!(
                f,
                "Identifier '{}' in the expression for '{}' was not declared or assigned before",
                name, in_assignment
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<ResolveError> for io::Error {
    fn from(err: ResolveError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
