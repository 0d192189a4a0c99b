//! Exhaustive assignment search
//!
//! Enumerates the total assignments of the declared variables under which a
//! target expression reduces to `True`. The walk is depth-first over the
//! declared order, binding `False` before `True` at each level, so results
//! come out in ascending binary order with the first declared variable as
//! the most significant bit.
//!
//! Without pruning every one of the `2^n` leaves is visited. With pruning, a
//! branch whose expression has already folded to a literal stops reducing:
//! a `False` branch is dropped and a `True` branch emits all of its
//! completions directly. Both walks return the same assignments in the same
//! order.

use super::error::TableError;
use crate::expression::Expr;
use log::trace;
use std::fmt;
use std::sync::Arc;

/// A total assignment of the declared variables
///
/// Values are stored in declared order, so two assignments are equal exactly
/// when their value tuples are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Wrap a value tuple given in declared order
    pub fn new(values: Vec<bool>) -> Self {
        Assignment { values }
    }

    /// Decode `index` as a `width`-bit key, most significant bit first
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::Assignment;
    ///
    /// let a = Assignment::from_index(0b011, 3);
    /// assert_eq!(a.values(), &[false, true, true]);
    /// assert_eq!(a.to_string(), "011");
    /// ```
    pub fn from_index(index: u64, width: usize) -> Self {
        let values = (0..width)
            .map(|position| (index >> (width - 1 - position)) & 1 == 1)
            .collect();
        Assignment { values }
    }

    /// Values in declared order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Number of variables bound
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the assignment binds no variables
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pair each value with its declared variable name
    pub fn bindings<'a>(
        &'a self,
        declared: &'a [Arc<str>],
    ) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        declared
            .iter()
            .map(|name| &**name)
            .zip(self.values.iter().copied())
    }
}

/// Renders the assignment as a bit string in declared order
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{}", if *value { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Every assignment over `declared` that makes `target` true
///
/// `target` must only mention variables in `declared`; a branch that is
/// still symbolic after all variables are bound yields
/// [`TableError::IncompleteEvaluation`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use truth_tables::{expr, search, Expr};
///
/// let declared: Vec<Arc<str>> = vec![Arc::from("x"), Arc::from("y")];
/// let xor = expr!(("x" | "y") & !("x" & "y"));
///
/// let found = search(&xor, &declared, false).unwrap();
/// let bits: Vec<String> = found.iter().map(|a| a.to_string()).collect();
/// assert_eq!(bits, vec!["01", "10"]);
/// ```
pub fn search(
    target: &Expr,
    declared: &[Arc<str>],
    prune: bool,
) -> Result<Vec<Assignment>, TableError> {
    let mut walk = Search {
        declared,
        prune,
        accumulator: Vec::with_capacity(declared.len()),
        results: Vec::new(),
    };
    walk.descend(target)?;
    trace!(
        "search over {} variables found {} assignments",
        declared.len(),
        walk.results.len()
    );
    Ok(walk.results)
}

/// State of one search invocation
///
/// `accumulator` holds the values bound so far; each branch pushes its value
/// before recursing and pops it on return.
struct Search<'a> {
    declared: &'a [Arc<str>],
    prune: bool,
    accumulator: Vec<bool>,
    results: Vec<Assignment>,
}

impl Search<'_> {
    fn descend(&mut self, expr: &Expr) -> Result<(), TableError> {
        let depth = self.accumulator.len();
        if depth == self.declared.len() {
            return match expr.as_literal() {
                Some(true) => {
                    self.results.push(Assignment::new(self.accumulator.clone()));
                    Ok(())
                }
                Some(false) => Ok(()),
                None => Err(TableError::IncompleteEvaluation {
                    residual: expr.clone(),
                }),
            };
        }

        if self.prune {
            match expr.as_literal() {
                Some(false) => return Ok(()),
                Some(true) => {
                    self.complete();
                    return Ok(());
                }
                None => {}
            }
        }

        let variable = &self.declared[depth];
        for value in [false, true] {
            self.accumulator.push(value);
            let reduced = expr.reduce(variable, value);
            let outcome = self.descend(&reduced);
            self.accumulator.pop();
            outcome?;
        }
        Ok(())
    }

    /// Emit every completion of the current prefix in ascending order
    fn complete(&mut self) {
        if self.accumulator.len() == self.declared.len() {
            self.results.push(Assignment::new(self.accumulator.clone()));
            return;
        }
        for value in [false, true] {
            self.accumulator.push(value);
            self.complete();
            self.accumulator.pop();
        }
    }
}
