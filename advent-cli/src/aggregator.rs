//! Result aggregator for ordering parallel run results
//!
//! Buffers and orders results for streaming output using two min-heaps:
//! one for the keys still expected, one for results that arrived early.

use crate::executor::RunResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Ordering key (year, day, part), ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&RunResult> for ResultKey {
    fn from(r: &RunResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Wrapper giving `RunResult` min-heap ordering by key
struct OrderedResult(RunResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed for min-heap behavior on BinaryHeap.
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers results and emits them in sorted key order
pub struct ResultAggregator {
    /// Min-heap of keys not yet emitted (next to output on top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting their turn
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result; returns everything now ready to emit, in order.
    pub fn add(&mut self, result: RunResult) -> Vec<RunResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                if let Some(next) = self.pending.pop() {
                    ready.push(next.0);
                }
            } else {
                break;
            }
        }
        ready
    }

    /// Remaining buffered results in key order (for final output).
    pub fn drain(&mut self) -> Vec<RunResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Whether every expected result has been emitted.
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn make_result(year: u16, day: u8, part: u8) -> RunResult {
        RunResult {
            year,
            day,
            part,
            answer: Ok(format!("{}_{}_{}", year, day, part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: Some(TimeDelta::milliseconds(10)),
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    #[test]
    fn in_order_results_pass_through() {
        let mut agg = ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2)]);

        let ready = agg.add(make_result(2025, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2025, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn out_of_order_results_are_buffered() {
        let mut agg =
            ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2), key(2025, 2, 1)]);

        assert!(agg.add(make_result(2025, 1, 2)).is_empty());
        assert!(agg.add(make_result(2025, 2, 1)).is_empty());

        // The missing head releases everything at once, ordered.
        let ready = agg.add(make_result(2025, 1, 1));
        let keys: Vec<(u8, u8)> = ready.iter().map(|r| (r.day, r.part)).collect();
        assert_eq!(keys, vec![(1, 1), (1, 2), (2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_returns_leftovers_in_order() {
        let mut agg = ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2)]);

        agg.add(make_result(2025, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }
}
