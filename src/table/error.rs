//! Error types for truth table construction

use crate::expression::Expr;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that abort a show request
///
/// None of these are recoverable for the request that raised them; no
/// partial table is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A show request names an identifier with no resolved expression
    UnknownShowTarget {
        /// The unknown name
        name: Arc<str>,
    },
    /// A target expression mentions a variable outside the declared order
    ///
    /// Resolved programs never produce such trees; this guards expressions
    /// built through the API.
    MalformedExpression {
        /// The show target whose expression is not closed
        target: Arc<str>,
        /// The offending free variable
        variable: Arc<str>,
    },
    /// Too many declared variables for an exhaustive search
    VariableCountExceeded {
        /// Number of declared variables
        count: usize,
        /// Largest count the search accepts
        limit: usize,
    },
    /// An expression was still symbolic after every declared variable was bound
    IncompleteEvaluation {
        /// What remained after substitution
        residual: Expr,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::UnknownShowTarget { name } => {
                write!(f, "Show variable '{}' is not found", name)
            }
            TableError::MalformedExpression { target, variable } => write!(
                f,
                "Expression for '{}' refers to undeclared variable '{}'",
                target, variable
            ),
            TableError::VariableCountExceeded { count, limit } => write!(
                f,
                "{} declared variables exceed the limit of {} for exhaustive search",
                count, limit
            ),
            TableError::IncompleteEvaluation { residual } => write!(
                f,
                "Expression did not reduce to a literal after binding every variable: {}",
                residual
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        let kind = match err {
            TableError::UnknownShowTarget { .. } | TableError::VariableCountExceeded { .. } => {
                io::ErrorKind::InvalidInput
            }
            TableError::MalformedExpression { .. } | TableError::IncompleteEvaluation { .. } => {
                io::ErrorKind::InvalidData
            }
        };
        io::Error::new(kind, err)
    }
}
