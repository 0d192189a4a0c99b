//! Identifier resolution
//!
//! Walks the parsed statements in order and binds every identifier to a
//! closed [`Expr`]. A declared name maps to a variable referencing itself.
//! An assigned name maps to its defining expression with every previously
//! assigned identifier already inlined, so stored trees only ever mention
//! declared variables.

pub mod error;

pub use error::ResolveError;

use crate::expression::Expr;
use crate::language::{Statement, Term};
use crate::table::{ShowMode, ShowRequest};
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;

/// The resolved view of a program
///
/// # Examples
///
/// ```
/// use truth_tables::language::parse_program;
/// use truth_tables::Resolution;
///
/// let statements = parse_program("var x y; t = x or y; u = not t;").unwrap();
/// let resolution = Resolution::resolve(&statements).unwrap();
///
/// assert_eq!(resolution.declared().len(), 2);
/// let u = resolution.expression("u").unwrap();
/// assert_eq!(u.to_string(), "not (x or y)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    declared: Vec<Arc<str>>,
    assigned: Vec<Arc<str>>,
    identifiers: HashMap<Arc<str>, Expr>,
    shows: Vec<ShowRequest>,
}

impl Resolution {
    /// Create an empty resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a sequence of statements
    pub fn resolve(statements: &[Statement]) -> Result<Self, ResolveError> {
        let mut resolution = Self::new();
        for statement in statements {
            match statement {
                Statement::Declaration(names) => {
                    for name in names {
                        resolution.declare(name)?;
                    }
                }
                Statement::Assignment { name, term } => resolution.assign(name, term)?,
                Statement::Show { targets, ones_only } => {
                    let mode = if *ones_only {
                        ShowMode::OnesOnly
                    } else {
                        ShowMode::Full
                    };
                    resolution.request(ShowRequest::new(targets.iter().map(String::as_str), mode));
                }
            }
        }
        debug!(
            "resolved {} declared, {} assigned, {} show requests",
            resolution.declared.len(),
            resolution.assigned.len(),
            resolution.shows.len()
        );
        Ok(resolution)
    }

    /// Declare a free input variable
    pub fn declare(&mut self, name: &str) -> Result<(), ResolveError> {
        let name = self.fresh_name(name)?;
        trace!("declare {}", name);
        self.identifiers
            .insert(Arc::clone(&name), Expr::variable(Arc::clone(&name)));
        self.declared.push(name);
        Ok(())
    }

    /// Bind `name` to the closed form of `term`
    pub fn assign(&mut self, name: &str, term: &Term) -> Result<(), ResolveError> {
        let name = self.fresh_name(name)?;
        let expr = self.close(term, &name)?;
        trace!("assign {} = {}", name, expr);
        self.identifiers.insert(Arc::clone(&name), expr);
        self.assigned.push(name);
        Ok(())
    }

    /// Record a show request
    ///
    /// Targets are not checked here; an unknown target is reported when the
    /// request is run.
    pub fn request(&mut self, request: ShowRequest) {
        self.shows.push(request);
    }

    fn fresh_name(&self, name: &str) -> Result<Arc<str>, ResolveError> {
        if self.identifiers.contains_key(name) {
            return Err(ResolveError::AlreadyDefined {
                name: Arc::from(name),
            });
        }
        Ok(Arc::from(name))
    }

    /// Build the closed expression for `term`, inlining known identifiers
    fn close(&self, term: &Term, assignment: &Arc<str>) -> Result<Expr, ResolveError> {
        Ok(match term {
            Term::Literal(value) => Expr::literal(*value),
            Term::Identifier(name) => match self.identifiers.get(name.as_str()) {
                Some(expr) => expr.clone(),
                None => {
                    return Err(ResolveError::Undefined {
                        name: Arc::from(name.as_str()),
                        in_assignment: Arc::clone(assignment),
                    })
                }
            },
            Term::Not(inner) => self.close(inner, assignment)?.not(),
            Term::And(left, right) => self
                .close(left, assignment)?
                .and(&self.close(right, assignment)?),
            Term::Or(left, right) => self
                .close(left, assignment)?
                .or(&self.close(right, assignment)?),
        })
    }

    /// Declared variables in declaration order
    pub fn declared(&self) -> &[Arc<str>] {
        &self.declared
    }

    /// Assigned identifiers in assignment order
    pub fn assigned(&self) -> &[Arc<str>] {
        &self.assigned
    }

    /// Every declared or assigned identifier with its closed expression
    pub fn identifiers(&self) -> &HashMap<Arc<str>, Expr> {
        &self.identifiers
    }

    /// The closed expression bound to `name`, if any
    pub fn expression(&self, name: &str) -> Option<&Expr> {
        self.identifiers.get(name)
    }

    /// Show requests in program order
    pub fn show_requests(&self) -> &[ShowRequest] {
        &self.shows
    }
}
