//! Parallel executor for running solutions

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynPuzzle, ParseError, PuzzleRegistry, SolverError};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result of running one part of one day
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: Option<TimeDelta>,
}

/// One registered solver with the parts selected by the filters
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items on a rayon pool and streams results to a channel
pub struct Executor {
    registry: PuzzleRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            parallelize_by: config.parallelize_by,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, sending each part's result to `tx`
    pub fn execute(&self, tx: Sender<RunResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = self.run_work_item(&work, &tx) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_parallel_grouped(by_year, &tx)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| self.run_work_item(&work, tx).err())
                .reduce_with(combine_optional_errors)
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    /// Year-level parallelism: groups run in parallel, their items in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = self.run_work_item(&work, tx) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(combine_optional_errors)
                .flatten()
                .map_or(Ok(()), Err)
        })
    }

    fn run_work_item(
        &self,
        work: &WorkItem,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let input = match self.inputs.get(work.year, work.day) {
            Ok(Some(input)) => input,
            // A missing or unreadable input fails this day's parts, not
            // the whole run.
            Ok(None) => {
                let message = format!(
                    "input file not found: {}",
                    self.inputs.path(work.year, work.day).display()
                );
                return send_error_results(work, tx, &message);
            }
            Err(e) => return send_error_results(work, tx, &e.to_string()),
        };

        if matches!(self.parallelize_by, ParallelizeBy::Part) {
            self.run_parts_parallel(work, &input, tx)
        } else {
            self.run_parts_sequential(work, &input, tx)
        }
    }

    fn run_parts_sequential(
        &self,
        work: &WorkItem,
        input: &str,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let mut solver = match self.registry.create(work.year, work.day, input) {
            Ok(solver) => solver,
            Err(e) => return send_error_results(work, tx, &e.to_string()),
        };
        for part in work.parts.clone() {
            let result = solve_one(work.year, work.day, part, &mut *solver);
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
        }
        Ok(())
    }

    /// Part-level parallelism: each part gets its own parsed instance;
    /// results are buffered so they still leave in part order.
    fn run_parts_parallel(
        &self,
        work: &WorkItem,
        input: &str,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let (result_tx, result_rx) = std::sync::mpsc::channel();
        let (year, day) = (work.year, work.day);
        let registry = &self.registry;

        work.parts
            .clone()
            .into_par_iter()
            .for_each_with(result_tx, |rtx, part| {
                let result = match registry.create(year, day, input) {
                    Ok(mut solver) => solve_one(year, day, part, &mut *solver),
                    Err(e) => error_result(year, day, part, &e.to_string()),
                };
                rtx.send(result).ok();
            });

        let mut buffer: [Option<RunResult>; 2] = [None, None];
        let start_part = *work.parts.start();
        let mut next_part = start_part;

        for result in result_rx {
            let idx = (result.part - start_part) as usize;
            if idx < buffer.len() {
                buffer[idx] = Some(result);
            }
            while let Some(result) = buffer
                .get_mut((next_part - start_part) as usize)
                .and_then(Option::take)
            {
                tx.send(result)
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
                next_part += 1;
            }
        }
        Ok(())
    }
}

fn combine_optional_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (first, second) {
        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Solve a single part, capturing timings
fn solve_one(year: u16, day: u8, part: u8, solver: &mut dyn DynPuzzle) -> RunResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(output) => {
            let solve_duration = Some(output.duration());
            RunResult {
                year,
                day,
                part,
                answer: Ok(output.answer),
                parse_duration,
                solve_duration,
            }
        }
        Err(e) => RunResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: None,
        },
    }
}

fn error_result(year: u16, day: u8, part: u8, message: &str) -> RunResult {
    RunResult {
        year,
        day,
        part,
        answer: Err(SolverError::Parse(ParseError::Other(message.to_string()))),
        parse_duration: None,
        solve_duration: None,
    }
}

fn send_error_results(
    work: &WorkItem,
    tx: &Sender<RunResult>,
    message: &str,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(error_result(work.year, work.day, part, message))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}
