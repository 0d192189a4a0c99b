//! Operator overloading for boolean expressions
//!
//! `&` builds AND, `|` builds OR and `!` builds NOT. Like the builder
//! methods, the operators never simplify.

use super::Expr;
use std::ops::{BitAnd, BitOr, Not};

/// Logical AND operator for references: `&a & &b`
///
/// # Examples
///
/// ```
/// use truth_tables::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// assert_eq!(&a & &b, a.and(&b));
/// ```
impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: &Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a & b` (delegates to reference version)
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a | &b`
///
/// # Examples
///
/// ```
/// use truth_tables::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// assert_eq!(&a | &b, a.or(&b));
/// ```
impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: &Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a | b` (delegates to reference version)
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

/// Logical NOT operator: `!a`
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(&self)
    }
}
