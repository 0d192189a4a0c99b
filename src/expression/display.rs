//! Display and Debug formatting for boolean expressions

use super::{Expr, ExprKind};
use std::fmt;

/// Position of a subexpression relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,     // Top level or inside parentheses
    AndLeft,  // Left operand of an AND chain
    OrLeft,   // Left operand of an OR chain
    Operand,  // Right operand of AND/OR, or operand of NOT
}

impl Expr {
    /// Format in the source language's syntax
    ///
    /// The grammar only accepts a single element after `not` and does not mix
    /// `and` with `or` without parentheses, so every compound operand is
    /// parenthesised except the left spine of a same-operator chain.
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        let needs_parens = match self.kind() {
            ExprKind::Variable(_) | ExprKind::Literal(_) => false,
            ExprKind::Not(_) => ctx != OpContext::None,
            ExprKind::And(_, _) => !matches!(ctx, OpContext::None | OpContext::AndLeft),
            ExprKind::Or(_, _) => !matches!(ctx, OpContext::None | OpContext::OrLeft),
        };

        if needs_parens {
            write!(f, "(")?;
        }

        match self.kind() {
            ExprKind::Variable(name) => write!(f, "{}", name)?,
            ExprKind::Literal(value) => write!(f, "{}", if *value { "True" } else { "False" })?,
            ExprKind::Not(inner) => {
                write!(f, "not ")?;
                inner.fmt_with_context(f, OpContext::Operand)?;
            }
            ExprKind::And(left, right) => {
                left.fmt_with_context(f, OpContext::AndLeft)?;
                write!(f, " and ")?;
                right.fmt_with_context(f, OpContext::Operand)?;
            }
            ExprKind::Or(left, right) => {
                left.fmt_with_context(f, OpContext::OrLeft)?;
                write!(f, " or ")?;
                right.fmt_with_context(f, OpContext::Operand)?;
            }
        }

        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Debug formatting for boolean expressions
///
/// Uses the same syntax as [`Display`](fmt::Display), which keeps assertion
/// failures readable.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

/// Display formatting for boolean expressions
///
/// Output re-parses to the same tree.
///
/// # Examples
///
/// ```
/// use truth_tables::{expr, Expr};
///
/// let e = expr!(("x" | "y") & !("x" & "y"));
/// assert_eq!(e.to_string(), "(x or y) and (not (x and y))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
