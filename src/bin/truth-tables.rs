//! Truth Tables - Command Line Interface
//!
//! Runs every show request of a program file and prints the resulting tables

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use truth_tables::{Program, ProgramError, ShowRequest, TableConfig, TruthTable};

#[derive(Parser, Debug)]
#[command(name = "truth-tables")]
#[command(about = "Truth tables for boolean declaration programs", long_about = None)]
#[command(version)]
struct Args {
    /// Input program file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Refuse programs declaring more variables than this
    #[arg(long = "max-vars", default_value_t = TableConfig::default().max_variables)]
    max_vars: usize,

    /// Skip branches whose outcome is already decided
    #[arg(long)]
    prune: bool,

    /// Search the targets of a request in parallel
    #[arg(long)]
    parallel: bool,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn run(args: &Args) -> Result<(), ProgramError> {
    let config = TableConfig {
        max_variables: args.max_vars,
        prune: args.prune,
        parallel: args.parallel,
    };

    let program = Program::from_file(&args.input)?;
    if args.summary {
        let resolution = program.resolution();
        eprintln!("Program: {}", args.input.display());
        eprintln!("  Declared variables:  {}", resolution.declared().len());
        eprintln!("  Assigned names:      {}", resolution.assigned().len());
        eprintln!("  Show requests:       {}", resolution.show_requests().len());
        eprintln!();
    }

    let mut started = Instant::now();
    let summarise = |request: &ShowRequest, table: &TruthTable| {
        if args.summary {
            eprintln!(
                "{:?} {} -> {} rows in {:?}",
                request.mode(),
                table.header(),
                table.len(),
                started.elapsed()
            );
        }
        started = Instant::now();
    };

    // Each table is flushed as soon as it is built
    match args.output_file {
        Some(ref output_path) => {
            let mut out = BufWriter::new(File::create(output_path)?);
            program.write_tables(&mut out, &config, summarise)?;
            if args.summary {
                eprintln!("Wrote output to: {}", output_path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            program.write_tables(&mut stdout.lock(), &config, summarise)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        log_level(args.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error initialising logger: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error running '{}': {}", args.input.display(), e);
        process::exit(1);
    }
}
