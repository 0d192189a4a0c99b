//! Loading and running whole programs

use crate::error::ProgramError;
use crate::language::parse_program;
use crate::resolve::Resolution;
use crate::table::{ShowRequest, TableBuilder, TruthTable};
use crate::TableConfig;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// A parsed and resolved program, ready to answer its show requests
///
/// # Examples
///
/// ```
/// use truth_tables::{Program, TableConfig};
///
/// # fn main() -> Result<(), truth_tables::ProgramError> {
/// let program = Program::parse(
///     "var x y;\n\
///      z = (x or y) and (not (x and y));\n\
///      show_ones z;\n\
///      show z;",
/// )?;
///
/// let tables = program.run(&TableConfig::default())?;
/// assert_eq!(tables[0].to_string(), "011\n101");
/// assert_eq!(tables[1].to_string(), "000\n011\n101\n110");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Program {
    resolution: Resolution,
}

impl Program {
    /// Parse and resolve program text
    pub fn parse(source: &str) -> Result<Self, ProgramError> {
        let statements = parse_program(source)?;
        let resolution = Resolution::resolve(&statements)?;
        Ok(Program { resolution })
    }

    /// Read, parse and resolve a program file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProgramError> {
        let source = fs::read_to_string(path.as_ref())?;
        info!(
            "loaded {} ({} bytes)",
            path.as_ref().display(),
            source.len()
        );
        Self::parse(&source)
    }

    /// The resolved identifiers and show requests
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Declared variables in declaration order
    pub fn declared(&self) -> &[Arc<str>] {
        self.resolution.declared()
    }

    /// Show requests in program order
    pub fn show_requests(&self) -> &[ShowRequest] {
        self.resolution.show_requests()
    }

    fn builder<'a>(&'a self, config: &'a TableConfig) -> Result<TableBuilder<'a>, ProgramError> {
        Ok(TableBuilder::new(
            self.resolution.declared(),
            self.resolution.identifiers(),
            config,
        )?)
    }

    /// Answer every show request, one table per request in program order
    ///
    /// The first failing request aborts the run.
    pub fn run(&self, config: &TableConfig) -> Result<Vec<TruthTable>, ProgramError> {
        let builder = self.builder(config)?;
        info!(
            "running {} show requests over {} declared variables",
            self.show_requests().len(),
            self.declared().len()
        );
        self.show_requests()
            .iter()
            .map(|request| builder.build(request).map_err(ProgramError::from))
            .collect()
    }

    /// Answer every show request, writing each table to `out` as soon as it is built
    ///
    /// Each table is written as its rows followed by a newline, so an empty
    /// table still produces an empty line. Tables are separated by a blank
    /// line. `on_table` sees every table right after it is written.
    ///
    /// The first failing request stops the run. Tables written before it stay
    /// in `out`.
    pub fn write_tables<W, F>(
        &self,
        out: &mut W,
        config: &TableConfig,
        mut on_table: F,
    ) -> Result<(), ProgramError>
    where
        W: Write,
        F: FnMut(&ShowRequest, &TruthTable),
    {
        let builder = self.builder(config)?;
        for (index, request) in self.show_requests().iter().enumerate() {
            let table = builder.build(request)?;
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", table)?;
            out.flush()?;
            on_table(request, &table);
        }
        Ok(())
    }

    /// Answer a single request against this program's identifiers
    ///
    /// The request need not appear in the program text.
    pub fn run_request(
        &self,
        request: &ShowRequest,
        config: &TableConfig,
    ) -> Result<TruthTable, ProgramError> {
        Ok(self.builder(config)?.build(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ShowMode, TableError};
    use test_log::test;

    #[test]
    fn test_run_answers_requests_in_order() {
        let program = Program::parse("var a b; c = a and b; show_ones c; show c;").unwrap();
        let tables = program.run(&TableConfig::default()).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].mode(), ShowMode::OnesOnly);
        assert_eq!(tables[0].to_string(), "111");
        assert_eq!(tables[1].mode(), ShowMode::Full);
        assert_eq!(tables[1].to_string(), "000\n010\n100\n111");
    }

    #[test]
    fn test_program_without_shows_yields_nothing() {
        let program = Program::parse("var a; b = not a;").unwrap();
        assert!(program.run(&TableConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_show_target_is_reported_at_run() {
        let program = Program::parse("var x; show y;").unwrap();
        let err = program.run(&TableConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProgramError::Table(TableError::UnknownShowTarget { ref name }) if &**name == "y"
        ));
    }

    #[test]
    fn test_variable_bound_checked_before_search() {
        let program = Program::parse("var a b c; show a;").unwrap();
        let config = TableConfig {
            max_variables: 2,
            ..TableConfig::default()
        };
        assert!(matches!(
            program.run(&config),
            Err(ProgramError::Table(TableError::VariableCountExceeded {
                count: 3,
                limit: 2
            }))
        ));
    }

    #[test]
    fn test_run_request_outside_program() {
        let program = Program::parse("var p q; r = p or q;").unwrap();
        let table = program
            .run_request(&ShowRequest::ones_only(["r", "p"]), &TableConfig::default())
            .unwrap();
        assert_eq!(table.to_string(), "0110\n1011\n1111");
    }

    #[test]
    fn test_write_tables_separates_blocks() {
        let program = Program::parse("var a; show_ones a; show a;").unwrap();
        let mut out = Vec::new();
        let mut seen = Vec::new();
        program
            .write_tables(&mut out, &TableConfig::default(), |request, table| {
                seen.push((request.mode(), table.len()))
            })
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "11\n\n00\n11\n");
        assert_eq!(seen, vec![(ShowMode::OnesOnly, 1), (ShowMode::Full, 2)]);
    }

    #[test]
    fn test_parse_and_resolve_errors_are_wrapped() {
        assert!(matches!(
            Program::parse("var x; y = x &"),
            Err(ProgramError::Parse(_))
        ));
        assert!(matches!(
            Program::parse("var x; y = z;"),
            Err(ProgramError::Resolve(_))
        ));
    }
}
