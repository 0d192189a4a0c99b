//! Tree traversal for boolean expressions

use super::{Expr, ExprKind};

/// Node type for expression tree folding
///
/// Carries the shape of one node together with the already folded results of
/// its children. Used with [`Expr::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// A constant boolean value
    Literal(bool),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
}

impl Expr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// Shared subtrees are visited once per occurrence, so the fold sees the
    /// expression as a tree even when nodes are shared.
    ///
    /// # Examples
    ///
    /// Count the number of operators in an expression:
    ///
    /// ```
    /// use truth_tables::{expr, ExprNode, Expr};
    ///
    /// let e = expr!(("x" | "y") & !("x" & "y"));
    ///
    /// let op_count = e.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Literal(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 4);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self.kind() {
            ExprKind::Variable(name) => f(ExprNode::Variable(name)),
            ExprKind::Literal(value) => f(ExprNode::Literal(*value)),
            ExprKind::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            ExprKind::And(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::And(left_result, right_result))
            }
            ExprKind::Or(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Or(left_result, right_result))
            }
        }
    }

    /// Number of nodes in the expression, counting shared subtrees per occurrence
    pub fn node_count(&self) -> usize {
        self.fold(|node: ExprNode<usize>| match node {
            ExprNode::Variable(_) | ExprNode::Literal(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
        })
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.fold(|node: ExprNode<usize>| match node {
            ExprNode::Variable(_) | ExprNode::Literal(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) => l.max(r) + 1,
        })
    }
}
