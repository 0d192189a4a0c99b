//! Truth table construction
//!
//! A show request is answered in three steps:
//!
//! 1. [`TableBuilder::combine`] searches each target for its satisfying
//!    assignments and unions the results, keeping the first occurrence of
//!    each assignment in target order.
//! 2. [`TableBuilder::evaluate`] computes every target's output bit for each
//!    of those assignments.
//! 3. For a full table, [`densify`] expands the sparse rows to all `2^n`
//!    keys in ascending order, filling absent keys with zero outputs.
//!
//! Rows render as the input bits in declared order followed by the output
//! bits in request order, see [`format_rows`].

pub mod error;
mod search;


pub use error::TableError;
pub use search::{search, Assignment};

use crate::expression::Expr;
use crate::TableConfig;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::thread;

/// Which rows a show request reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowMode {
    /// Only assignments under which at least one target is true (`show_ones`)
    OnesOnly,
    /// All `2^n` assignments in ascending order (`show`)
    Full,
}

/// An ordered list of target names plus the reporting mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRequest {
    targets: Vec<Arc<str>>,
    mode: ShowMode,
}

impl ShowRequest {
    /// Create a request for `targets` in the given mode
    pub fn new<I, S>(targets: I, mode: ShowMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        ShowRequest {
            targets: targets.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Shorthand for a `show_ones` request
    pub fn ones_only<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self::new(targets, ShowMode::OnesOnly)
    }

    /// Shorthand for a `show` request
    pub fn full<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self::new(targets, ShowMode::Full)
    }

    /// Target names in request order
    pub fn targets(&self) -> &[Arc<str>] {
        &self.targets
    }

    /// Reporting mode
    pub fn mode(&self) -> ShowMode {
        self.mode
    }
}

/// One table row: an input assignment and the output of each target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Input values in declared order
    pub key: Assignment,
    /// Output values in request order
    pub outputs: Vec<bool>,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        for output in &self.outputs {
            write!(f, "{}", if *output { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Render rows as fixed-width bit strings, one per line
pub fn format_rows(rows: &[TableRow]) -> String {
    rows.iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expand sparse rows to the full table over `n` inputs and `m` outputs
///
/// Produces all `2^n` keys in ascending binary order. A key present in
/// `sparse` keeps its stored outputs; any other key gets `m` false outputs.
///
/// # Examples
///
/// ```
/// use truth_tables::{densify, format_rows, Assignment, TableRow};
///
/// let sparse = vec![TableRow { key: Assignment::from_index(2, 2), outputs: vec![true] }];
/// let full = densify(&sparse, 2, 1).unwrap();
/// assert_eq!(format_rows(&full), "000\n010\n101\n110");
/// ```
pub fn densify(sparse: &[TableRow], n: usize, m: usize) -> Result<Vec<TableRow>, TableError> {
    let limit = u64::BITS as usize - 1;
    if n > limit {
        return Err(TableError::VariableCountExceeded { count: n, limit });
    }

    let lookup: HashMap<&Assignment, &[bool]> = sparse
        .iter()
        .map(|row| (&row.key, row.outputs.as_slice()))
        .collect();

    Ok((0..1u64 << n)
        .map(|index| {
            let key = Assignment::from_index(index, n);
            let outputs = match lookup.get(&key) {
                Some(outputs) => outputs.to_vec(),
                None => vec![false; m],
            };
            TableRow { key, outputs }
        })
        .collect())
}

/// The answer to one show request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    mode: ShowMode,
    inputs: Vec<Arc<str>>,
    outputs: Vec<Arc<str>>,
    rows: Vec<TableRow>,
}

impl TruthTable {
    /// Mode of the request that produced this table
    pub fn mode(&self) -> ShowMode {
        self.mode
    }

    /// Input column names in declared order
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output column names in request order
    pub fn outputs(&self) -> &[Arc<str>] {
        &self.outputs
    }

    /// Rows in output order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, inputs then outputs, separated by ` | `
    pub fn header(&self) -> String {
        let join = |names: &[Arc<str>]| {
            names
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!("{} | {}", join(&self.inputs), join(&self.outputs))
    }
}

/// Renders the rows as newline separated bit strings
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_rows(&self.rows))
    }
}

/// Builds truth tables from resolved expressions
///
/// Construction refuses declared-variable counts above
/// [`TableConfig::max_variables`], so no search is ever started on an
/// intractable input.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    declared: &'a [Arc<str>],
    identifiers: &'a HashMap<Arc<str>, Expr>,
    config: &'a TableConfig,
}

impl<'a> TableBuilder<'a> {
    /// Create a builder over the declared order and the resolved identifiers
    pub fn new(
        declared: &'a [Arc<str>],
        identifiers: &'a HashMap<Arc<str>, Expr>,
        config: &'a TableConfig,
    ) -> Result<Self, TableError> {
        if declared.len() > config.max_variables {
            return Err(TableError::VariableCountExceeded {
                count: declared.len(),
                limit: config.max_variables,
            });
        }
        Ok(TableBuilder {
            declared,
            identifiers,
            config,
        })
    }

    /// Look up every target and check it is closed over the declared order
    fn targets(&self, names: &[Arc<str>]) -> Result<Vec<&'a Expr>, TableError> {
        let exprs = names
            .iter()
            .map(|name| {
                self.identifiers
                    .get(name)
                    .ok_or_else(|| TableError::UnknownShowTarget {
                        name: Arc::clone(name),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (name, expr) in names.iter().zip(&exprs) {
            if let Some(variable) = expr
                .collect_variables()
                .into_iter()
                .find(|variable| !self.declared.contains(variable))
            {
                return Err(TableError::MalformedExpression {
                    target: Arc::clone(name),
                    variable,
                });
            }
        }
        Ok(exprs)
    }

    /// Union of the satisfying assignments of every target
    ///
    /// Assignments keep the order in which they were first found, walking
    /// the targets in request order.
    pub fn combine(&self, names: &[Arc<str>]) -> Result<Vec<Assignment>, TableError> {
        let targets = self.targets(names)?;
        self.combine_targets(&targets)
    }

    fn combine_targets(&self, targets: &[&Expr]) -> Result<Vec<Assignment>, TableError> {
        let declared = self.declared;
        let prune = self.config.prune;

        let per_target: Vec<Result<Vec<Assignment>, TableError>> =
            if self.config.parallel && targets.len() > 1 {
                thread::scope(|scope| {
                    let handles: Vec<_> = targets
                        .iter()
                        .map(|target| scope.spawn(move || search(target, declared, prune)))
                        .collect();
                    handles
                        .into_iter()
                        .map(|handle| {
                            handle
                                .join()
                                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                        })
                        .collect()
                })
            } else {
                targets
                    .iter()
                    .map(|target| search(target, declared, prune))
                    .collect()
            };

        let mut seen = HashSet::new();
        let mut combined = Vec::new();
        for found in per_target {
            for assignment in found? {
                if seen.insert(assignment.clone()) {
                    combined.push(assignment);
                }
            }
        }
        debug!(
            "combined {} targets into {} distinct assignments",
            targets.len(),
            combined.len()
        );
        Ok(combined)
    }

    /// Output bits of every target under each assignment
    pub fn evaluate(
        &self,
        names: &[Arc<str>],
        assignments: &[Assignment],
    ) -> Result<Vec<TableRow>, TableError> {
        let targets = self.targets(names)?;
        self.evaluate_targets(&targets, assignments)
    }

    fn evaluate_targets(
        &self,
        targets: &[&Expr],
        assignments: &[Assignment],
    ) -> Result<Vec<TableRow>, TableError> {
        assignments
            .iter()
            .map(|assignment| {
                let outputs = targets
                    .iter()
                    .map(|target| {
                        let reduced = target.reduce_all(assignment.bindings(self.declared));
                        reduced
                            .as_literal()
                            .ok_or(TableError::IncompleteEvaluation { residual: reduced })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TableRow {
                    key: assignment.clone(),
                    outputs,
                })
            })
            .collect()
    }

    /// Answer a show request
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    /// use truth_tables::{expr, Expr, ShowRequest, TableBuilder, TableConfig};
    ///
    /// let declared: Vec<Arc<str>> = vec![Arc::from("x"), Arc::from("y")];
    /// let mut identifiers: HashMap<Arc<str>, Expr> = HashMap::new();
    /// identifiers.insert(Arc::from("z"), expr!(("x" | "y") & !("x" & "y")));
    ///
    /// let config = TableConfig::default();
    /// let builder = TableBuilder::new(&declared, &identifiers, &config).unwrap();
    ///
    /// let ones = builder.build(&ShowRequest::ones_only(["z"])).unwrap();
    /// assert_eq!(ones.to_string(), "011\n101");
    ///
    /// let full = builder.build(&ShowRequest::full(["z"])).unwrap();
    /// assert_eq!(full.to_string(), "000\n011\n101\n110");
    /// ```
    pub fn build(&self, request: &ShowRequest) -> Result<TruthTable, TableError> {
        debug!(
            "show {:?} over {} variables ({:?})",
            request.targets(),
            self.declared.len(),
            request.mode()
        );
        let targets = self.targets(request.targets())?;
        let combined = self.combine_targets(&targets)?;
        let sparse = self.evaluate_targets(&targets, &combined)?;

        let rows = match request.mode() {
            ShowMode::OnesOnly => sparse,
            ShowMode::Full => densify(&sparse, self.declared.len(), targets.len())?,
        };

        Ok(TruthTable {
            mode: request.mode(),
            inputs: self.declared.to_vec(),
            outputs: request.targets().to_vec(),
            rows,
        })
    }
}
