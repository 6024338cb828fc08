#![allow(dead_code)]

use std::fs::File;
use std::path::Path;
use std::process::exit;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};

use crate::list::List;
use crate::serialization::{parse_values, write_values};
use crate::swap::{Strategy, SwapStats};
use crate::test::random_samples;

mod col;
mod iter;
mod list;
mod primitives;
mod serialization;
mod swap;
mod test;
mod workers;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pairwise adjacent-node swaps over arena-backed singly linked lists"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    #[command(about = "Swap adjacent value pairs of a list read from CSV")]
    Swap(SwapArgs),

    #[command(about = "Run randomized property samples")]
    RunRandom(RunRandomArgs),

    #[command(about = "Run the staggered two-worker logging demo")]
    Workers(WorkersArgs),
}

#[derive(Args, Clone, Debug)]
struct SwapArgs {
    #[arg(
        short = 'i',
        long,
        default_value = "values.csv",
        help = "The value sequence to build the list from."
    )]
    values_path: String,

    #[arg(
        short = 'o',
        long,
        default_value = "swapped.csv",
        help = "The file to write the swapped sequence to."
    )]
    out_filename: String,

    #[arg(
        short = 's',
        long,
        value_enum,
        default_value = "relink",
        help = "Whether to swap payload values or relink the nodes themselves."
    )]
    strategy: Strategy,
}
fn main_swap(args: &SwapArgs) {
    if Path::new(&args.out_filename).exists() {
        error!("Output file already exists: {}", args.out_filename);
        exit(1);
    }

    let values = match File::open(&args.values_path) {
        Ok(file) => parse_values(file).unwrap_or_else(|err| {
            error!("Could not parse {}: {}", args.values_path, err);
            exit(1);
        }),
        Err(err) => {
            error!("Could not open {}: {}", args.values_path, err);
            exit(1);
        }
    };
    info!("Read {} values from {}", values.len(), args.values_path);

    let mut list = List::from_values(values.iter().copied());
    debug!("List before swap: {}", list.describe());

    let time_started = Instant::now();
    args.strategy.apply(&mut list);
    let stats = SwapStats {
        strategy: args.strategy,
        num_nodes: list.num_nodes(),
        num_pairs: list.num_nodes() / 2,
        computation_time: time_started.elapsed(),
    };
    debug!("List after swap: {}", list.describe());
    info!(
        "Swapped {} pairs over {} nodes ({:?}) in {:?}",
        stats.num_pairs, stats.num_nodes, stats.strategy, stats.computation_time
    );

    let out_file = File::create(&args.out_filename).unwrap_or_else(|err| {
        error!("Could not create {}: {}", args.out_filename, err);
        exit(1);
    });
    write_values(out_file, list.values()).unwrap_or_else(|err| {
        error!("Could not write {}: {}", args.out_filename, err);
        exit(1);
    });
    info!("Wrote swapped sequence to {}", args.out_filename);
}

#[derive(Args, Clone, Debug)]
struct RunRandomArgs {
    #[arg(
        short = 'n',
        long,
        default_value_t = 100,
        help = "The number of seeded samples to run."
    )]
    num_samples: u64,
}
fn main_run_random(args: &RunRandomArgs) {
    random_samples::run_samples(args.num_samples);
}

#[derive(Args, Clone, Debug)]
struct WorkersArgs {
    #[arg(short = 'n', long, default_value_t = 5, help = "Iterations per worker.")]
    iterations: usize,

    #[arg(
        long,
        default_value_t = 200,
        help = "Sleep interval of the fast worker in milliseconds."
    )]
    fast_interval_ms: u64,

    #[arg(
        long,
        default_value_t = 500,
        help = "Sleep interval of the slow worker in milliseconds."
    )]
    slow_interval_ms: u64,
}
fn main_workers(args: &WorkersArgs) {
    workers::run_staggered(
        args.iterations,
        Duration::from_millis(args.fast_interval_ms),
        Duration::from_millis(args.slow_interval_ms),
    );
}

fn main() {
    env_logger::builder().parse_env("LOG").init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Swap(args) => main_swap(&args),
        Commands::RunRandom(args) => main_run_random(&args),
        Commands::Workers(args) => main_workers(&args),
    }
}
