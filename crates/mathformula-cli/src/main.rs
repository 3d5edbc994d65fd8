//! mathformula CLI - evaluate arithmetic formulas from the command line

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use mathformula::{render_postfix, Variables};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mathformula")]
#[command(author, version, about = "Evaluate arithmetic formulas with variables a, b, c and d")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log every pipeline stage (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula and print the result
    #[command(alias = "e")]
    Eval {
        /// Formula, e.g. "a + abs(b * 4 + c)"
        #[arg(allow_hyphen_values = true)]
        formula: String,

        #[command(flatten)]
        vars: VarArgs,
    },

    /// Print the tokens of a formula
    Tokens {
        #[arg(allow_hyphen_values = true)]
        formula: String,
    },

    /// Print the postfix form of a formula
    Postfix {
        #[arg(allow_hyphen_values = true)]
        formula: String,

        #[command(flatten)]
        vars: VarArgs,
    },

    /// Print every stage of an evaluation
    Trace {
        #[arg(allow_hyphen_values = true)]
        formula: String,

        #[command(flatten)]
        vars: VarArgs,
    },
}

/// Values for the formula variables; decimal or 0x-prefixed hex
#[derive(Args, Debug, Clone, Copy)]
struct VarArgs {
    #[arg(short, default_value = "0", allow_hyphen_values = true, value_parser = parse_value)]
    a: f64,

    #[arg(short, default_value = "0", allow_hyphen_values = true, value_parser = parse_value)]
    b: f64,

    #[arg(short, default_value = "0", allow_hyphen_values = true, value_parser = parse_value)]
    c: f64,

    #[arg(short, default_value = "0", allow_hyphen_values = true, value_parser = parse_value)]
    d: f64,
}

impl From<VarArgs> for Variables {
    fn from(args: VarArgs) -> Self {
        Variables::from([args.a, args.b, args.c, args.d])
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Eval { .. } => "eval",
            Commands::Tokens { .. } => "tokens",
            Commands::Postfix { .. } => "postfix",
            Commands::Trace { .. } => "trace",
        }
    }
}

fn parse_value(text: &str) -> Result<f64, String> {
    mathformula::parse_number(text).ok_or_else(|| format!("'{text}' is not a number"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    init_logging(level)?;
    tracing::debug!(command = cli.command.name(), "parsed command line");

    match cli.command {
        Commands::Eval { formula, vars } => eval(&formula, &vars.into()),
        Commands::Tokens { formula } => show_tokens(&formula),
        Commands::Postfix { formula, vars } => show_postfix(&formula, &vars.into()),
        Commands::Trace { formula, vars } => show_trace(&formula, &vars.into()),
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}

fn eval(formula: &str, vars: &Variables) -> Result<()> {
    tracing::debug!(?vars, "variables");
    let result = mathformula::evaluate(formula, vars)
        .with_context(|| format!("Failed to evaluate '{formula}'"))?;
    println!("{}", format_number(result));
    Ok(())
}

fn show_tokens(formula: &str) -> Result<()> {
    for token in mathformula::tokenize(formula) {
        println!("{token:?}");
    }
    Ok(())
}

fn show_postfix(formula: &str, vars: &Variables) -> Result<()> {
    let trace = mathformula::trace(formula, vars)
        .with_context(|| format!("Failed to evaluate '{formula}'"))?;
    println!("{}", render_postfix(&trace.postfix));
    Ok(())
}

fn show_trace(formula: &str, vars: &Variables) -> Result<()> {
    let trace = mathformula::trace(formula, vars)
        .with_context(|| format!("Failed to evaluate '{formula}'"))?;

    println!("Formula:     {formula}");
    println!("Tokens:      {}", mathformula::render(&trace.tokens));
    println!("Substituted: {}", trace.rendered);
    println!("Postfix:     {}", render_postfix(&trace.postfix));
    println!("Result:      {}", format_number(trace.result));
    Ok(())
}

/// Integral values print without a fractional part
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
