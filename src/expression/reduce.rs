//! Partial evaluation: substitute one variable and fold literal identities

use super::{Expr, ExprKind};

impl Expr {
    /// Substitute `variable = value` and fold the resulting literals
    ///
    /// Both operands of a binary node are always reduced; only the result is
    /// folded:
    ///
    /// - `False and X`, `X and False` become `False`
    /// - `True and X`, `X and True` become `X`
    /// - `True or X`, `X or True` become `True`
    /// - `False or X`, `X or False` become `X`
    /// - `not True` / `not False` become the opposite literal
    ///
    /// The input is never modified. Subtrees that the substitution does not
    /// touch are shared with the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{expr, Expr};
    ///
    /// let e = expr!("x" & "y");
    /// assert_eq!(e.reduce("x", false), Expr::literal(false));
    /// assert_eq!(e.reduce("x", true), Expr::variable("y"));
    /// assert_eq!(e.reduce("z", true), e);
    /// ```
    pub fn reduce(&self, variable: &str, value: bool) -> Expr {
        match self.kind() {
            ExprKind::Variable(name) if &**name == variable => Expr::literal(value),
            ExprKind::Variable(_) | ExprKind::Literal(_) => self.clone(),
            ExprKind::Not(operand) => {
                let reduced = operand.reduce(variable, value);
                match reduced.as_literal() {
                    Some(inner) => Expr::literal(!inner),
                    None if reduced.ptr_eq(operand) => self.clone(),
                    None => reduced.not(),
                }
            }
            ExprKind::And(left, right) => {
                let reduced_left = left.reduce(variable, value);
                let reduced_right = right.reduce(variable, value);
                match (reduced_left.as_literal(), reduced_right.as_literal()) {
                    (Some(false), _) | (_, Some(false)) => Expr::literal(false),
                    (Some(true), _) => reduced_right,
                    (_, Some(true)) => reduced_left,
                    _ => self.rebuild(left, right, reduced_left, reduced_right, Expr::and),
                }
            }
            ExprKind::Or(left, right) => {
                let reduced_left = left.reduce(variable, value);
                let reduced_right = right.reduce(variable, value);
                match (reduced_left.as_literal(), reduced_right.as_literal()) {
                    (Some(true), _) | (_, Some(true)) => Expr::literal(true),
                    (Some(false), _) => reduced_right,
                    (_, Some(false)) => reduced_left,
                    _ => self.rebuild(left, right, reduced_left, reduced_right, Expr::or),
                }
            }
        }
    }

    /// Reuse `self` when neither operand changed, otherwise build a fresh node
    fn rebuild(
        &self,
        left: &Expr,
        right: &Expr,
        reduced_left: Expr,
        reduced_right: Expr,
        build: fn(&Expr, &Expr) -> Expr,
    ) -> Expr {
        if reduced_left.ptr_eq(left) && reduced_right.ptr_eq(right) {
            self.clone()
        } else {
            build(&reduced_left, &reduced_right)
        }
    }
}
