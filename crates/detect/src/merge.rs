//! Canonical interval merging.

use tracing::debug;

use crate::interval::Interval;

/// Merges a collection of day intervals into the canonical event list:
/// sorted by start, with no two intervals overlapping or adjacent.
///
/// Two intervals coalesce when they overlap or touch (one starts on the
/// day after the other ends); the merged end is the later of the two ends.
/// A one-day gap keeps intervals separate.
///
/// The result is independent of input order, and merging an already
/// canonical list returns it unchanged.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start() <= last.end().next() => {
                if interval.end() > last.end() {
                    *last = Interval::new(last.start(), interval.end())
                        .expect("merged end is not before start");
                }
            }
            _ => merged.push(interval),
        }
    }

    debug!(n_in = intervals.len(), n_out = merged.len(), "intervals merged");
    merged
}
