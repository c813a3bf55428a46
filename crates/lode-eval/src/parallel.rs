//! Worker-pool evaluation of a pattern stream.
//!
//! ```text
//!   producer ──[task: bounded(200)]──> worker 0..N ──[result: bounded(200)]──> caller
//!   (pattern iterator)                 (shared &PatternEvaluator)             (sink)
//! ```
//!
//! Workers only read the evaluator. The caller thread is the only one that
//! sees results, so a [`PatternStore`](crate::PatternStore) fed from the
//! sink needs no locking.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use lode_sample::{DiggingPattern, VoxelSample};

use crate::evaluator::PatternEvaluator;
use crate::statistics::Statistics;

/// Capacity of the task and result channels.
pub const CHANNEL_CAPACITY: usize = 200;

/// Evaluate every pattern of `patterns` and hand each result to `sink`.
///
/// With `workers <= 1` everything runs on the calling thread in iteration
/// order. Otherwise `workers` scoped threads evaluate concurrently while
/// another thread drains the iterator, and results reach `sink` in
/// completion order. Returning [`ControlFlow::Break`] from `sink` stops
/// the run; patterns still in flight are dropped.
///
/// Returns the number of results handed to `sink`.
pub fn evaluate_all<I, P, F>(
    evaluator: &PatternEvaluator,
    patterns: I,
    workers: usize,
    mut sink: F,
) -> usize
where
    I: IntoIterator<Item = P>,
    I::IntoIter: Send,
    P: DiggingPattern + Send,
    F: FnMut(P, Statistics) -> ControlFlow<()>,
{
    if workers <= 1 {
        let mut scratch = None;
        let mut delivered = 0;
        for pattern in patterns {
            let stats = evaluator.evaluate_into(&pattern, &mut scratch);
            delivered += 1;
            if sink(pattern, stats).is_break() {
                break;
            }
        }
        return delivered;
    }

    let stop = AtomicBool::new(false);
    let patterns = patterns.into_iter();
    thread::scope(|s| {
        let (task_tx, task_rx) = crossbeam_channel::bounded::<P>(CHANNEL_CAPACITY);
        let (result_tx, result_rx) = crossbeam_channel::bounded::<(P, Statistics)>(CHANNEL_CAPACITY);

        let stop = &stop;
        s.spawn(move || {
            for pattern in patterns {
                if stop.load(Ordering::Relaxed) || task_tx.send(pattern).is_err() {
                    break;
                }
            }
        });
        for _ in 0..workers {
            let rx = task_rx.clone();
            let tx = result_tx.clone();
            s.spawn(move || worker_loop(evaluator, rx, tx));
        }
        // Workers hold the remaining handles; the result stream ends when
        // the last of them exits.
        drop(task_rx);
        drop(result_tx);

        let mut delivered = 0;
        for (pattern, stats) in result_rx.iter() {
            delivered += 1;
            if sink(pattern, stats).is_break() {
                stop.store(true, Ordering::Relaxed);
                break;
            }
        }
        delivered
    })
}

fn worker_loop<P: DiggingPattern>(
    evaluator: &PatternEvaluator,
    task_rx: Receiver<P>,
    result_tx: Sender<(P, Statistics)>,
) {
    let mut scratch: Option<VoxelSample> = None;
    while let Ok(pattern) = task_rx.recv() {
        let stats = evaluator.evaluate_into(&pattern, &mut scratch);
        if result_tx.send((pattern, stats)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::EvaluatorConfig;
    use lode_core::{Access, Dimensions, Position};
    use lode_ore::VeinGenerator;

    /// Digs a single column of the given height at x = 0.
    #[derive(Debug, PartialEq)]
    struct Column(i32);

    impl DiggingPattern for Column {
        fn dimensions(&self) -> Dimensions {
            Dimensions::new(4, 4, 4).unwrap()
        }
        fn accesses(&self, ox: i32, oy: i32) -> Vec<Access> {
            vec![Access::new(ox, oy)]
        }
        fn dig_cell(&self, sample: &mut VoxelSample, origin: Position) {
            for y in 0..self.0.max(2) {
                sample.dig_if_inside(Position::new(origin.x, origin.y + y, origin.z));
            }
        }
    }

    fn evaluator() -> PatternEvaluator {
        let config = EvaluatorConfig {
            sample_count: 3,
            ..EvaluatorConfig::default()
        };
        let base = VoxelSample::new(Dimensions::new(8, 4, 8).unwrap());
        PatternEvaluator::new(&VeinGenerator::classic(), &base, &config).unwrap()
    }

    fn patterns() -> Vec<Column> {
        (2..=4).cycle().take(30).map(Column).collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let eval = evaluator();
        let mut seq = Vec::new();
        let n = evaluate_all(&eval, patterns(), 1, |p, s| {
            seq.push((p.0, s));
            ControlFlow::Continue(())
        });
        assert_eq!(n, 30);

        let mut par = Vec::new();
        let n = evaluate_all(&eval, patterns(), 4, |p, s| {
            par.push((p.0, s));
            ControlFlow::Continue(())
        });
        assert_eq!(n, 30);

        let key = |v: &(i32, Statistics)| (v.0, v.1.found_ore(), v.1.dug_blocks());
        seq.sort_by_key(key);
        par.sort_by_key(key);
        assert_eq!(seq, par);
    }

    #[test]
    fn break_stops_early() {
        let eval = evaluator();
        for workers in [1, 3] {
            let mut seen = 0;
            let n = evaluate_all(&eval, patterns(), workers, |_, _| {
                seen += 1;
                if seen == 5 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            assert_eq!(n, 5);
            assert_eq!(seen, 5);
        }
    }

    #[test]
    fn empty_stream() {
        let eval = evaluator();
        let n = evaluate_all(&eval, Vec::<Column>::new(), 4, |_, _| ControlFlow::Continue(()));
        assert_eq!(n, 0);
    }
}
