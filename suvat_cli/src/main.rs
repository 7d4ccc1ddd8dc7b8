//! # SUVAT CLI
//!
//! Terminal front end for the constant-acceleration solver. Supply any three
//! of s, u, v, a, t and the other two are computed.
//!
//! ```text
//! suvat solve -s 100 -u 0 -v 20
//! suvat solve -u 3 -v -3 -a -2 --json
//! suvat interactive
//! suvat equations
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suvat_core::equations::generate_equations_markdown;
use suvat_core::{MotionInput, Quantity, Solver, SuvatError};

mod config;
mod error;
mod output;

use error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(name = "suvat")]
#[command(about = "Solve the equations of motion under constant acceleration", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Solver settings file (JSON)
    #[arg(long, global = true, env = "SUVAT_CONFIG")]
    config: Option<PathBuf>,

    /// Treat values at or below this magnitude as zero
    #[arg(long, global = true, env = "SUVAT_ZERO_TOLERANCE")]
    zero_tolerance: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve from exactly three known quantities
    Solve(SolveArgs),

    /// Prompt for each quantity; leave blank for unknowns
    Interactive,

    /// Print the equations reference
    Equations,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Displacement
    #[arg(short = 's', long = "displacement", allow_negative_numbers = true)]
    s: Option<f64>,

    /// Initial velocity
    #[arg(short = 'u', long = "initial-velocity", allow_negative_numbers = true)]
    u: Option<f64>,

    /// Final velocity
    #[arg(short = 'v', long = "final-velocity", allow_negative_numbers = true)]
    v: Option<f64>,

    /// Acceleration
    #[arg(short = 'a', long = "acceleration", allow_negative_numbers = true)]
    a: Option<f64>,

    /// Time
    #[arg(short = 't', long = "time", allow_negative_numbers = true)]
    t: Option<f64>,

    /// Print the solution (or error) as JSON
    #[arg(long)]
    json: bool,
}

impl SolveArgs {
    fn input(&self) -> MotionInput {
        MotionInput {
            s: self.s,
            u: self.u,
            v: self.v,
            a: self.a,
            t: self.t,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();
}

/// Blank means unknown
fn parse_optional(input: &str) -> CliResult<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| CliError::Parse {
            input: trimmed.to_string(),
        })
}

fn prompt_optional(prompt: &str) -> CliResult<Option<f64>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    parse_optional(&input)
}

/// JSON form of `error` when requested; `None` falls back to the text report
fn error_json(error: &SuvatError, json: bool) -> Option<String> {
    if !json {
        return None;
    }
    serde_json::to_string_pretty(error)
        .map_err(|e| debug!(%e, "could not serialize error"))
        .ok()
}

fn run_solve(solver: &Solver, args: &SolveArgs) -> CliResult<()> {
    let input = args.input();
    debug!(?input, "solve");

    match solver.solve(&input) {
        Ok(solution) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&solution).map_err(io::Error::from)?
                );
            } else {
                println!("{}", output::format_solution(&solution));
            }
            Ok(())
        }
        Err(e) => {
            match error_json(&e, args.json) {
                Some(json) => println!("{}", json),
                None => eprintln!("{}", output::format_error(&e)),
            }
            Err(e.into())
        }
    }
}

fn run_interactive(solver: &Solver) -> CliResult<()> {
    println!("SUVAT - equations of motion under constant acceleration");
    println!("Enter exactly three values; leave the other two blank.");
    println!();

    let mut input = MotionInput::default();
    for q in Quantity::ALL {
        if let Some(value) = prompt_optional(&format!("  {} ({}): ", q.symbol(), q.name()))? {
            input = input.with(q, value);
        }
    }
    println!();

    match solver.solve(&input) {
        Ok(solution) => {
            println!("{}", output::format_solution(&solution));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            Err(e.into())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let settings = config::load_settings(cli.config.as_deref(), cli.zero_tolerance)?;
    let solver = Solver::new(settings)?;

    match &cli.command {
        Commands::Solve(args) => run_solve(&solver, args),
        Commands::Interactive => run_interactive(&solver),
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Solver errors were already reported with their context
            if !matches!(e, CliError::Solve(_)) {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
