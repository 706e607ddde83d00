// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the `knapdp` executable. It either generates a random instance or
//! reads one from file, solves it, and prints the table along with the
//! selected items and their total value.

use std::{io::{self, Write}, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use knapdp::*;

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to an instance file (text, or json when the extension is
    /// .json). A random instance is generated when it is omitted.
    #[clap(short, long)]
    instance: Option<PathBuf>,
    /// The number of random items
    #[clap(short = 'n', long, default_value = "10")]
    count: usize,
    /// The minimum weight of a random item
    #[clap(long, default_value = "1")]
    min_weight: usize,
    /// The maximum weight of a random item
    #[clap(long, default_value = "10")]
    max_weight: usize,
    /// The minimum value of a random item
    #[clap(long, default_value = "1")]
    min_value: usize,
    /// The maximum value of a random item
    #[clap(long, default_value = "10")]
    max_value: usize,
    /// The capacity of the sack (random instances only)
    #[clap(short, long, default_value = "20")]
    capacity: usize,
    /// The seed of the random instance
    #[clap(short, long)]
    seed: Option<u64>,
    /// The number of concurrent threads (0 means all hardware threads)
    #[clap(short, long, default_value = "1")]
    threads: usize,
    /// Print a json report instead of a text one
    #[clap(long)]
    json: bool,
    /// Do not print the table
    #[clap(long)]
    no_table: bool,
}

/// Loads or generates the instance described by the arguments
fn instance(args: &Args) -> anyhow::Result<Knapsack<String>> {
    if let Some(fname) = &args.instance {
        log::info!("reading instance {}", fname.display());
        return io_utils::read_instance(fname)
            .with_context(|| format!("cannot read instance {}", fname.display()));
    }

    let mut config = GeneratorConfigBuilder::default();
    config
        .count(args.count)
        .weight_bounds((args.min_weight, args.max_weight))
        .value_bounds((args.min_value, args.max_value));
    if let Some(seed) = args.seed {
        config.seed(seed);
    }
    let config = config.build().context("invalid generator configuration")?;

    log::info!("generating {} items", config.count());
    Ok(ItemGenerator::new(config).instance(args.capacity)?)
}

/// Fills the table with the requested solver and prints the report
fn run<S: Solver>(solver: S, problem: &Knapsack<String>, args: &Args) -> anyhow::Result<()> {
    let start = Instant::now();
    let table = solver.tabulate(problem);
    let solution = table.solution();
    log::info!(
        "filled a {}x{} table in {:.3} seconds",
        table.nb_rows(),
        table.width(),
        start.elapsed().as_secs_f32()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        JsonReport.write(&mut out, &table, &solution)?;
    } else {
        let config = ReportConfigBuilder::default().show_table(!args.no_table).build()?;
        TextReport::new(&config).write_all(&mut out, &table, &solution)?;
    }
    out.flush()?;
    Ok(())
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to solve a knapsack instance and display the outcome.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let problem = instance(&args)?;

    match args.threads {
        1 => {
            log::info!("using the sequential solver");
            run(SequentialSolver, &problem, &args)
        }
        0 => {
            let solver = ParallelSolver::new();
            log::info!("using the parallel solver with {} threads", solver.nb_threads());
            run(solver, &problem, &args)
        }
        n => {
            log::info!("using the parallel solver with {} threads", n);
            run(ParallelSolver::custom(n), &problem, &args)
        }
    }
}
