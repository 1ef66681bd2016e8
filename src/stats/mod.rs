//! The four statistic reporters and their shared counting helpers.
//!
//! Every reporter is a pure function `&Dataset -> String`; the session
//! driver prints the rendered report. An empty subset renders an explicit
//! "no matching data" message instead of computing undefined aggregates.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;

pub const NO_DATA: &str = "No matching data in the current selection.";

/// Most frequent value with its count. Ties go to the smallest value
/// (numeric-lowest, lexicographic-first for strings): the BTreeMap walk
/// only replaces the running best on a strictly greater count.
pub fn mode_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, c)) if count <= *c => {}
            _ => best = Some((value, count)),
        }
    }
    best
}

/// Per-value counts for an optional column, plus how many rows have no
/// value at all. Absent is tracked separately, never as a group.
pub fn group_counts<'a, I>(values: I) -> (BTreeMap<String, usize>, usize)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut absent = 0;

    for v in values {
        match v {
            Some(s) => *counts.entry(s.to_string()).or_insert(0) += 1,
            None => absent += 1,
        }
    }

    (counts, absent)
}
