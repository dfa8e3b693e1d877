//! Symbolic Logic - Command Line Interface
//!
//! Parses a statement, then either evaluates it under an assignment or
//! prints (part of) its truth table.

use clap::Parser;
use log::{debug, info};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use symbolic_logic::{combine, LogicError, Statement, TableConfig, TruthTable};

#[derive(Parser, Debug)]
#[command(name = "logic")]
#[command(about = "Evaluate propositional logic statements and print truth tables", long_about = None)]
#[command(version)]
struct Args {
    /// Statement to process, e.g. "a & b | !(c -> a)"
    #[arg(value_name = "STATEMENT")]
    statement: String,

    /// Combine the statement with another one using OR (repeatable)
    #[arg(long = "or", value_name = "STATEMENT")]
    or: Vec<String>,

    /// Print the truth table instead of a single evaluation
    #[arg(short = 't', long = "table")]
    table: bool,

    /// First assignment index of the table
    #[arg(long = "start", default_value_t = 0)]
    start: u64,

    /// One past the last assignment index of the table (default: 2^n)
    #[arg(long = "end")]
    end: Option<u64>,

    /// Number of threads used to generate the table
    #[arg(short = 'j', long = "threads", default_value_t = 1)]
    threads: usize,

    /// Variable value for evaluation, e.g. `-a x=true` (repeatable)
    #[arg(short = 'a', long = "assign", value_name = "NAME=BOOL", value_parser = parse_assignment)]
    assign: Vec<(String, bool)>,

    /// Output file for the table (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_assignment(text: &str) -> Result<(String, bool), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BOOL, got {:?}", text))?;
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => true,
        "false" | "f" | "0" => false,
        other => return Err(format!("expected a boolean, got {:?}", other)),
    };
    Ok((name.trim().to_string(), value))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<(), LogicError> {
    let mut statement = Statement::parse(&args.statement)?;
    for other in &args.or {
        statement = combine(&statement, other.as_str())?;
    }
    info!("Statement: {}", statement);

    if args.table {
        let config = TableConfig {
            start: args.start,
            end: args.end,
            threads: args.threads,
        };
        let table = TruthTable::generate_with(&statement, &config)?;
        debug!("Generated {} rows", table.len());

        match &args.output_file {
            Some(path) => {
                table.to_file(path)?;
                info!("Wrote table to: {}", path.display());
            }
            None => print!("{}", table),
        }
        return Ok(());
    }

    let assignment: HashMap<Arc<str>, bool> = args
        .assign
        .iter()
        .map(|(name, value)| (Arc::from(name.as_str()), *value))
        .collect();
    for name in assignment.keys() {
        if !statement.registry().contains(name) {
            log::warn!("Variable {} does not occur in the statement", name);
        }
    }
    let value = statement.evaluate(&assignment)?;
    println!("{} = {}", statement, if value { "True" } else { "False" });
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
