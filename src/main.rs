use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use num::BigInt;
use std::path::{Path, PathBuf};

use hailsolve::crossing::count_future_crossings;
use hailsolve::parser::parse_observations_file;
use hailsolve::puzzle::builtin_observations;
use hailsolve::{Observation, OracleConfig, SolveConfig, solve_with_config};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "hailsolve")]
#[command(about = "hailsolve - find the line that meets every hailstone")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for the thrown line and print the sum of its starting position
    Solve {
        /// Observation file, one `px, py, pz @ vx, vy, vz` per line
        /// (built-in puzzle input if omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Oracle timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Do not require the meeting times to be non-negative
        #[arg(long)]
        allow_negative_time: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Count hailstone pairs whose x/y paths cross inside a test area
    Intersect {
        /// Observation file (built-in puzzle input if omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Lower bound of the test area on both axes
        #[arg(long, default_value = "200000000000000", allow_hyphen_values = true)]
        min: i64,
        /// Upper bound of the test area on both axes
        #[arg(long, default_value = "400000000000000", allow_hyphen_values = true)]
        max: i64,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn load_observations(input: Option<&Path>) -> Result<Vec<Observation>, Box<dyn std::error::Error>> {
    match input {
        Some(path) => {
            info!("reading observations from {}", path.display());
            Ok(parse_observations_file(path)?)
        }
        None => {
            debug!("using built-in observations");
            Ok(builtin_observations())
        }
    }
}

// --- Commands ---

fn run_solve(
    input: Option<&Path>,
    timeout: Option<u64>,
    allow_negative_time: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let observations = load_observations(input)?;
    let oracle = timeout.map_or_else(OracleConfig::no_timeout, OracleConfig::with_timeout_secs);
    let config = SolveConfig::default()
        .with_oracle(oracle)
        .with_non_negative_time(!allow_negative_time);

    let solution = match solve_with_config(&observations, &config) {
        Ok(solution) => solution,
        Err(e) => {
            if let Some(status) = e.status() {
                println!("{}", status);
            }
            return Err(e.into());
        }
    };

    println!("{}", solution.status);
    println!("{}", solution.model);
    println!("x + y + z = {}", solution.sum);
    match solution.sum_as_integer() {
        Some(sum) => println!("{}", sum),
        None => println!("{}", solution.sum),
    }

    if verbose {
        print!("{}", solution.statistics.format_summary());
    }
    Ok(())
}

fn run_intersect(input: Option<&Path>, min: i64, max: i64) -> Result<(), Box<dyn std::error::Error>> {
    if min > max {
        return Err(format!("empty test area: min {} is above max {}", min, max).into());
    }
    let observations = load_observations(input)?;
    let count = count_future_crossings(&observations, &BigInt::from(min), &BigInt::from(max));
    println!("{}", count);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Solve {
            input,
            timeout,
            allow_negative_time,
            verbose,
        } => {
            init_logging(verbose);
            run_solve(input.as_deref(), timeout, allow_negative_time, verbose)
        }
        Commands::Intersect {
            input,
            min,
            max,
            verbose,
        } => {
            init_logging(verbose);
            run_intersect(input.as_deref(), min, max)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
