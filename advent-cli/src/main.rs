//! advent - run and scaffold Advent of Code solutions

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;
mod scaffold;

// Imported for its side effect: linking the solutions crate submits
// every solver plugin to the inventory.
use advent_solutions as _;

use advent_solver::{PuzzleRegistry, RegistryBuilder};
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(mut args: Args) -> Result<(), CliError> {
    if let Some(Command::Scaffold {
        day,
        year,
        solutions_dir,
        input_dir,
    }) = args.command.take()
    {
        let store = InputStore::new(input_dir);
        let report = scaffold::scaffold_day(year, day, &solutions_dir, &store)?;
        scaffold::print_report(&report, year, day);
        return Ok(());
    }

    let config = Config::from_args(args);
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Flag missing inputs up front; the run still proceeds and reports
    // them per part.
    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .collect();
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for work in &missing {
            println!(
                "  - {}",
                executor.inputs().path(work.year, work.day).display()
            );
        }
        println!("Create them with `advent scaffold --day <N>` and paste the puzzle input.");
    }

    run_executor(executor, config.quiet)
}

fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Results stream in completion order; the aggregator re-orders them
    // by (year, day, part) before printing.
    let formatter = OutputFormatter::new(quiet);
    let mut ordering = aggregator::ResultAggregator::new(expected);
    let mut results = Vec::new();

    for result in rx {
        for ready in ordering.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }
    for ready in ordering.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !ordering.is_complete() {
        eprintln!("Warning: not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);
    Ok(())
}

fn build_registry(tags: &[String]) -> Result<PuzzleRegistry, CliError> {
    let builder = RegistryBuilder::new();
    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };
    Ok(builder.build())
}
