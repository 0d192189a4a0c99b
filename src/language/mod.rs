//! Source language front end
//!
//! Programs declare input variables, define derived expressions by
//! assignment and request truth tables:
//!
//! ```text
//! # We declare two variables: x and y
//! var x y;
//! # We assign (x or y) and (not (x and y)) to z
//! z = (x or y) and (not (x and y));
//! show_ones z;
//! show z;
//! ```
//!
//! `and` and `or` chains are left-associative and cannot be mixed without
//! parentheses. `not` applies to a single element or parenthesised
//! expression. Comments run from `#` to the end of the line.
//!
//! The grammar is compiled by lalrpop at build time. Parsing only builds the
//! syntax tree; names are resolved by [`Resolution`](crate::Resolution).

pub mod ast;
pub mod error;

pub use ast::{Statement, Term};
pub use error::{Location, ParseError};

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/language/grammar.rs"));
}

/// Parse a whole program into its statements
///
/// # Examples
///
/// ```
/// use truth_tables::language::{parse_program, Statement};
///
/// let statements = parse_program("var x y; show_ones x;").unwrap();
/// assert_eq!(statements.len(), 2);
/// assert_eq!(
///     statements[1],
///     Statement::Show { targets: vec!["x".to_string()], ones_only: true }
/// );
/// ```
pub fn parse_program(source: &str) -> Result<Vec<Statement>, ParseError> {
    parser_impl::ProgramParser::new()
        .parse(source)
        .map_err(|e| ParseError::from_lalrpop(source, e))
}

/// Parse a single expression
pub fn parse_term(source: &str) -> Result<Term, ParseError> {
    parser_impl::TermParser::new()
        .parse(source)
        .map_err(|e| ParseError::from_lalrpop(source, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Box<Term> {
        Box::new(Term::Identifier(name.to_string()))
    }

    #[test]
    fn test_parse_statements() {
        let source = "
            # We declare two variables: x and y
            var x y;
            z = (x or y) and (not (x and y));
            show z;
            show_ones z x;
        ";
        let statements = parse_program(source).unwrap();
        assert_eq!(statements.len(), 4);
        assert_eq!(
            statements[0],
            Statement::Declaration(vec!["x".to_string(), "y".to_string()])
        );
        assert_eq!(
            statements[1],
            Statement::Assignment {
                name: "z".to_string(),
                term: Term::And(
                    Box::new(Term::Or(ident("x"), ident("y"))),
                    Box::new(Term::Not(Box::new(Term::And(ident("x"), ident("y"))))),
                ),
            }
        );
        assert_eq!(
            statements[2],
            Statement::Show {
                targets: vec!["z".to_string()],
                ones_only: false
            }
        );
        assert_eq!(
            statements[3],
            Statement::Show {
                targets: vec!["z".to_string(), "x".to_string()],
                ones_only: true
            }
        );
    }

    #[test]
    fn test_empty_program() {
        assert!(parse_program("").unwrap().is_empty());
        assert!(parse_program("  # only a comment").unwrap().is_empty());
    }

    #[test]
    fn test_chains_are_left_associative() {
        assert_eq!(
            parse_term("a and b and c").unwrap(),
            Term::And(Box::new(Term::And(ident("a"), ident("b"))), ident("c"))
        );
        assert_eq!(
            parse_term("a or b or c").unwrap(),
            Term::Or(Box::new(Term::Or(ident("a"), ident("b"))), ident("c"))
        );
    }

    #[test]
    fn test_literals_and_keywords() {
        assert_eq!(parse_term("True").unwrap(), Term::Literal(true));
        assert_eq!(parse_term("False").unwrap(), Term::Literal(false));
        // Identifiers that merely start with a keyword stay identifiers
        assert_eq!(
            parse_term("variable and notice").unwrap(),
            Term::And(ident("variable"), ident("notice"))
        );
        assert_eq!(parse_term("_x1").unwrap(), Term::Identifier("_x1".to_string()));
    }

    #[test]
    fn test_unicode_identifiers() {
        let statements = parse_program("var é ß_2; ü = é or ß_2;").unwrap();
        assert_eq!(
            statements[0],
            Statement::Declaration(vec!["é".to_string(), "ß_2".to_string()])
        );
        assert_eq!(
            statements[1],
            Statement::Assignment {
                name: "ü".to_string(),
                term: Term::Or(ident("é"), ident("ß_2")),
            }
        );
    }

    #[test]
    fn test_show_ones_is_one_keyword() {
        let statements = parse_program("show_ones a;").unwrap();
        assert_eq!(
            statements[0],
            Statement::Show {
                targets: vec!["a".to_string()],
                ones_only: true
            }
        );
    }

    #[test]
    fn test_mixing_and_or_requires_parens() {
        let err = parse_program("var a b c; d = a and b or c;").unwrap_err();
        match err {
            ParseError::UnexpectedToken { token, location, .. } => {
                assert_eq!(&*token, "or");
                assert_eq!(location.line, 1);
                assert_eq!(location.column, 24);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(parse_program("var a b c; d = (a and b) or c;").is_ok());
    }

    #[test]
    fn test_not_takes_single_element() {
        assert!(parse_term("not not x").is_err());
        assert!(parse_term("not x and y").is_err());
        assert_eq!(
            parse_term("not (not x)").unwrap(),
            Term::Not(Box::new(Term::Not(ident("x"))))
        );
    }

    #[test]
    fn test_missing_semicolon_reports_end_of_input() {
        let err = parse_program("var x;\ny = x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
        assert_eq!(err.location().line, 2);
    }

    #[test]
    fn test_invalid_character() {
        let err = parse_program("var x;\ny = x & x;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { .. }));
        assert_eq!(err.location().line, 2);
        assert_eq!(err.location().column, 7);
    }
}
