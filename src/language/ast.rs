//! Syntax tree produced by the grammar, before identifier resolution

/// An expression as written in the source
///
/// Identifiers are kept by name; [`Resolution`](crate::Resolution) replaces
/// them with closed [`Expr`](crate::Expr) trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// `True` or `False`
    Literal(bool),
    /// A reference to a declared or assigned identifier
    Identifier(String),
    /// `not <element>`
    Not(Box<Term>),
    /// `<left> and <right>`
    And(Box<Term>, Box<Term>),
    /// `<left> or <right>`
    Or(Box<Term>, Box<Term>),
}

/// A top level statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `var a b c;`
    Declaration(Vec<String>),
    /// `name = <expr>;`
    Assignment {
        /// The identifier being defined
        name: String,
        /// Its defining expression
        term: Term,
    },
    /// `show a b;` or `show_ones a b;`
    Show {
        /// Identifiers whose values form the output columns
        targets: Vec<String>,
        /// Whether only rows with a true output are listed
        ones_only: bool,
    },
}
