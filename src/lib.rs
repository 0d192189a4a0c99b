//! # Truth Tables
//!
//! Truth tables for a small boolean declaration language, computed by
//! exhaustive search with partial evaluation.
//!
//! ## Overview
//!
//! A program declares input variables, assigns derived boolean expressions
//! and asks for truth tables:
//!
//! ```text
//! var x y;
//! z = (x or y) and (not (x and y));
//! show_ones z;
//! show z;
//! ```
//!
//! For every show request the engine enumerates all assignments of the
//! declared variables, reducing each target expression one variable at a
//! time, and reports one row per assignment as a bit string: inputs in
//! declaration order followed by the outputs in request order.
//!
//! - `show_ones` reports only the assignments under which at least one
//!   target is true.
//! - `show` reports all `2^n` assignments in ascending binary order.
//!
//! ## Running Programs
//!
//! ```
//! use truth_tables::{Program, TableConfig};
//!
//! # fn main() -> Result<(), truth_tables::ProgramError> {
//! let program = Program::parse("var x y; z = (x or y) and (not (x and y)); show_ones z;")?;
//! let tables = program.run(&TableConfig::default())?;
//!
//! assert_eq!(tables[0].header(), "x y | z");
//! assert_eq!(tables[0].to_string(), "011\n101");
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with Expressions Directly
//!
//! The expression model and the table builder can be used without the
//! language front end:
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use truth_tables::{expr, Expr, ShowRequest, TableBuilder, TableConfig};
//!
//! # fn main() -> Result<(), truth_tables::TableError> {
//! let declared: Vec<Arc<str>> = vec![Arc::from("a"), Arc::from("b")];
//! let mut identifiers: HashMap<Arc<str>, Expr> = HashMap::new();
//! identifiers.insert(Arc::from("nand"), expr!(!("a" & "b")));
//!
//! let config = TableConfig::default();
//! let table = TableBuilder::new(&declared, &identifiers, &config)?
//!     .build(&ShowRequest::full(["nand"]))?;
//! assert_eq!(table.to_string(), "001\n011\n101\n110");
//! # Ok(())
//! # }
//! ```
//!
//! ## Cost
//!
//! The search visits `2^n` leaves for `n` declared variables, so
//! [`TableConfig::max_variables`] refuses larger programs before any work is
//! done. Enabling [`TableConfig::prune`] skips subtrees whose outcome is
//! already decided.

// Public modules
pub mod error;
pub mod expression;
pub mod language;
pub mod program;
pub mod resolve;
pub mod table;

// Re-export high-level public API
pub use error::ProgramError;
pub use expression::{Expr, ExprKind, ExprNode};
pub use language::ParseError;
pub use program::Program;
pub use resolve::{Resolution, ResolveError};
pub use table::{
    densify, format_rows, search, Assignment, ShowMode, ShowRequest, TableBuilder, TableError,
    TableRow, TruthTable,
};
pub use truth_tables_macros::expr;

/// Configuration for table construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Largest number of declared variables accepted for exhaustive search
    pub max_variables: usize,
    /// Stop descending once a branch has folded to a literal
    pub prune: bool,
    /// Search each target of a request on its own thread
    pub parallel: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            max_variables: 24,
            prune: false,
            parallel: false,
        }
    }
}

impl TableConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::new();
        assert_eq!(config.max_variables, 24);
        assert!(!config.prune);
        assert!(!config.parallel);
    }

    #[test]
    fn test_end_to_end_xor() {
        let program = Program::parse(
            "# We declare two variables: x and y\n\
             var x y;\n\
             z = (x or y) and (not (x and y));\n\
             show_ones z;\n\
             show z;\n",
        )
        .unwrap();
        let tables = program.run(&TableConfig::default()).unwrap();
        assert_eq!(tables[0].to_string(), "011\n101");
        assert_eq!(tables[1].to_string(), "000\n011\n101\n110");
    }
}
