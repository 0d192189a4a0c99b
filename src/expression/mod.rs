//! Boolean expression trees over named variables
//!
//! An [`Expr`] is an immutable tree built from literals, variables, negation,
//! conjunction and disjunction. Nodes are reference counted, so cloning an
//! expression or embedding it in a larger one shares the existing nodes
//! instead of copying them. Nothing ever mutates a node after construction.
//!
//! # Construction
//!
//! ```
//! use truth_tables::{expr, Expr};
//!
//! // Method API
//! let x = Expr::variable("x");
//! let y = Expr::variable("y");
//! let xor = x.or(&y).and(&x.and(&y).not());
//!
//! // Operator overloading (requires explicit &)
//! let same = (&x | &y) & !(&x & &y);
//! assert_eq!(xor, same);
//!
//! // The expr! macro
//! let again = expr!((x | y) & !(x & y));
//! assert_eq!(xor, again);
//! ```
//!
//! # Reduction
//!
//! [`Expr::reduce`] substitutes one variable and folds the boolean identities
//! that become applicable:
//!
//! ```
//! use truth_tables::{expr, Expr};
//!
//! let xor = expr!(("x" | "y") & !("x" & "y"));
//! let half = xor.reduce("x", true);
//! assert_eq!(half.to_string(), "not y");
//! assert_eq!(half.reduce("y", false), Expr::literal(true));
//! ```

mod ast;
mod display;
mod operators;
mod reduce;

#[cfg(test)]
mod tests;

pub use ast::ExprNode;

use std::collections::BTreeSet;
use std::sync::Arc;

/// Shape of a single expression node
///
/// Children are full [`Expr`] handles, so matching on a kind gives direct
/// access to the shared subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// A constant value (`True` or `False`)
    Literal(bool),
    /// A free reference to a declared variable
    Variable(Arc<str>),
    /// Logical NOT of an expression
    Not(Expr),
    /// Logical AND of two expressions
    And(Expr, Expr),
    /// Logical OR of two expressions
    Or(Expr, Expr),
}

/// An immutable boolean expression
///
/// Uses `Arc` internally for cheap cloning and safe sharing across threads.
/// Equality is structural.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    inner: Arc<ExprKind>,
}

impl Expr {
    fn from_kind(kind: ExprKind) -> Self {
        Expr {
            inner: Arc::new(kind),
        }
    }

    /// Create a literal expression
    pub fn literal(value: bool) -> Self {
        Self::from_kind(ExprKind::Literal(value))
    }

    /// Create a variable reference
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::Expr;
    ///
    /// let x = Expr::variable("x");
    /// assert_eq!(x.to_string(), "x");
    /// ```
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Self::from_kind(ExprKind::Variable(name.into()))
    }

    /// Build `self AND other` without any simplification
    pub fn and(&self, other: &Expr) -> Self {
        Self::from_kind(ExprKind::And(self.clone(), other.clone()))
    }

    /// Build `self OR other` without any simplification
    pub fn or(&self, other: &Expr) -> Self {
        Self::from_kind(ExprKind::Or(self.clone(), other.clone()))
    }

    /// Build `NOT self` without any simplification
    pub fn not(&self) -> Self {
        Self::from_kind(ExprKind::Not(self.clone()))
    }

    /// The shape of the root node
    pub fn kind(&self) -> &ExprKind {
        &self.inner
    }

    /// The value of this expression if it is a literal
    pub fn as_literal(&self) -> Option<bool> {
        match self.kind() {
            ExprKind::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the root node is a literal
    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// Whether both handles point at the same node
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Collect the free variables of this expression in alphabetical order
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::expr;
    /// use truth_tables::Expr;
    ///
    /// let e = expr!("y" & ("x" | !"y"));
    /// let vars: Vec<String> = e.collect_variables().iter().map(|v| v.to_string()).collect();
    /// assert_eq!(vars, vec!["x", "y"]);
    /// ```
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut variables = BTreeSet::new();
        self.collect_variables_into(&mut variables);
        variables
    }

    fn collect_variables_into(&self, variables: &mut BTreeSet<Arc<str>>) {
        match self.kind() {
            ExprKind::Literal(_) => {}
            ExprKind::Variable(name) => {
                variables.insert(Arc::clone(name));
            }
            ExprKind::Not(inner) => inner.collect_variables_into(variables),
            ExprKind::And(left, right) | ExprKind::Or(left, right) => {
                left.collect_variables_into(variables);
                right.collect_variables_into(variables);
            }
        }
    }

    /// Substitute each binding in turn and return the final expression
    ///
    /// Bindings are applied left to right, one [`reduce`](Expr::reduce) per
    /// binding. The result is a literal whenever the bindings cover every
    /// free variable.
    pub fn reduce_all<'a, I>(&self, bindings: I) -> Expr
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        bindings
            .into_iter()
            .fold(self.clone(), |expr, (variable, value)| {
                expr.reduce(variable, value)
            })
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::literal(value)
    }
}
