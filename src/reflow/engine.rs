/*!
 * Merge/balance engine shared by subtitle cues and plain text lines.
 *
 * The engine works on any ordered sequence of [`ReflowUnit`]s in two stages:
 * - a split pass, which chunks every over-length unit, and
 * - a merge/balance loop, which folds short units into a neighbour or
 *   rebalances the pair when the merged text would be too long.
 *
 * Every pass consumes a sequence and produces a new one. Units that cannot
 * be fixed (a lone word over the limit, a pair that cannot be balanced) are
 * left untouched.
 */

use std::collections::VecDeque;

use log::debug;

use super::balance::balanced_split;
use super::chunker::chunk;
use super::direction::{direction, MergeDirection};
use super::markup::stripped_len;

/// Maximum number of merge/balance passes before giving up on convergence
pub const MAX_PASSES: usize = 5;

/// Default merge threshold
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// Default split/balance threshold
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Upper bound accepted for `max_length`
pub const MAX_LENGTH_LIMIT: usize = 50;

/// Length bounds for reflowing.
///
/// Units at or below `min_length` get merged, units above `max_length` get
/// split. Callers are expected to keep `min_length <= max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl ReflowLimits {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length }
    }
}

impl Default for ReflowLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

/// A unit of text the engine can split, merge and rebalance.
///
/// Implementations decide what happens to any data riding along with the
/// text, e.g. subtitle timing.
pub trait ReflowUnit: Sized {
    /// Current text, markup included
    fn text(&self) -> &str;

    /// Replace this unit by one unit per chunk, in order
    fn split_into(self, chunks: Vec<String>) -> Vec<Self>;

    /// Fold `later` into `self`, carrying the combined `text`
    fn merge(self, later: Self, text: String) -> Self;

    /// Redistribute the pair's text as `first` and `second`
    fn rebalance(self, later: Self, first: String, second: String) -> (Self, Self);
}

/// Split every unit whose stripped text exceeds `max_length`
pub fn split_long<U: ReflowUnit>(units: Vec<U>, max_length: usize) -> Vec<U> {
    let before = units.len();
    let result: Vec<U> = units
        .into_iter()
        .flat_map(|unit| {
            let chunks = chunk(unit.text(), max_length);
            if chunks.len() > 1 {
                unit.split_into(chunks)
            } else {
                vec![unit]
            }
        })
        .collect();

    debug!("Split pass: {} -> {} units (max length {})", before, result.len(), max_length);
    result
}

/// Run merge/balance passes until one makes no change, or `MAX_PASSES` ran
pub fn optimize<U: ReflowUnit>(units: Vec<U>, limits: ReflowLimits) -> Vec<U> {
    let mut units = units;

    for pass in 1..=MAX_PASSES {
        let outcome = merge_pass(units, limits);
        units = outcome.units;

        debug!(
            "Merge pass {}: {} merged, {} rebalanced, {} units left",
            pass, outcome.merges, outcome.rebalances, units.len()
        );

        if outcome.merges == 0 && outcome.rebalances == 0 {
            return units;
        }
    }

    debug!("Merge/balance did not converge after {} passes", MAX_PASSES);
    units
}

/// Split pass followed by the merge/balance loop
pub fn reflow<U: ReflowUnit>(units: Vec<U>, limits: ReflowLimits) -> Vec<U> {
    optimize(split_long(units, limits.max_length), limits)
}

struct PassOutcome<U> {
    units: Vec<U>,
    merges: usize,
    rebalances: usize,
}

enum Combined<U> {
    Merged(U),
    Rebalanced(U, U),
    Unchanged(U, U),
}

fn combine<U: ReflowUnit>(earlier: U, later: U, max_length: usize) -> Combined<U> {
    let text = format!("{} {}", earlier.text(), later.text());

    if stripped_len(&text) <= max_length {
        return Combined::Merged(earlier.merge(later, text));
    }

    match balanced_split(&text, max_length) {
        Some((first, second)) if first != earlier.text() || second != later.text() => {
            let (first, second) = earlier.rebalance(later, first, second);
            Combined::Rebalanced(first, second)
        }
        _ => Combined::Unchanged(earlier, later),
    }
}

// One left-to-right scan. `done` holds processed units (its last element is
// the current unit's predecessor), `pending` the units still to visit.
fn merge_pass<U: ReflowUnit>(units: Vec<U>, limits: ReflowLimits) -> PassOutcome<U> {
    let mut done: Vec<U> = Vec::with_capacity(units.len());
    let mut pending: VecDeque<U> = units.into();
    let mut merges = 0;
    let mut rebalances = 0;

    while let Some(current) = pending.pop_front() {
        if stripped_len(current.text()) > limits.min_length {
            done.push(current);
            continue;
        }

        let prev_text = done.last().map(|u| u.text());
        let next_text = pending.front().map(|u| u.text());

        match direction(prev_text, next_text) {
            MergeDirection::None => done.push(current),
            MergeDirection::Prev => {
                let Some(prev) = done.pop() else {
                    done.push(current);
                    continue;
                };
                match combine(prev, current, limits.max_length) {
                    Combined::Merged(unit) => {
                        merges += 1;
                        done.push(unit);
                    }
                    Combined::Rebalanced(first, second) => {
                        rebalances += 1;
                        done.push(first);
                        done.push(second);
                    }
                    Combined::Unchanged(first, second) => {
                        done.push(first);
                        done.push(second);
                    }
                }
            }
            MergeDirection::Next => {
                let Some(next) = pending.pop_front() else {
                    done.push(current);
                    continue;
                };
                match combine(current, next, limits.max_length) {
                    // The merged unit takes the current slot and is visited again
                    Combined::Merged(unit) => {
                        merges += 1;
                        pending.push_front(unit);
                    }
                    Combined::Rebalanced(first, second) => {
                        rebalances += 1;
                        done.push(first);
                        pending.push_front(second);
                    }
                    Combined::Unchanged(first, second) => {
                        done.push(first);
                        pending.push_front(second);
                    }
                }
            }
        }
    }

    PassOutcome {
        units: done,
        merges,
        rebalances,
    }
}
