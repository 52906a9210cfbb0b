//! Packing of span layouts into sub-columns and absolute columns.
//!
//! Each time index holds an ordered list of sub-columns ("seconds"). Gates are
//! taken in circuit insertion order and dropped into the first sub-column of
//! their time index that holds nothing they interfere with, or a new one.
//! Greedy first-fit, not an optimal interval packing: insertion order decides
//! which sub-column a gate lands in.

use std::ops::Range;

use autogate_ir::{Circuit, TimeIndex};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::span::SpanLayout;

/// Position of a sub-column: a time index and the second within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnKey {
    /// Time index.
    pub time: TimeIndex,
    /// Sub-column within the time index.
    pub second: usize,
}

impl ColumnKey {
    /// Create a column key.
    pub fn new(time: TimeIndex, second: usize) -> Self {
        Self { time, second }
    }
}

/// Span layouts packed per time index, plus the flattened absolute columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    /// `slots[t][s]` holds the layouts packed in second `s` of time `t`.
    slots: Vec<Vec<Vec<SpanLayout>>>,
    /// Absolute column order: time first, then second.
    columns: Vec<ColumnKey>,
    /// Inverse of `columns`.
    index: FxHashMap<ColumnKey, usize>,
}

impl ColumnLayout {
    /// Pack every placement of `circuit`.
    ///
    /// Every time index up to the circuit's time extent gets at least one
    /// sub-column, so empty time indices still occupy a (blank) column.
    pub fn pack(circuit: &Circuit) -> Self {
        let mut slots: Vec<Vec<Vec<SpanLayout>>> = vec![vec![vec![]]; circuit.time_extent()];

        for placement in circuit.placements() {
            let Some(layout) = SpanLayout::from_placement(placement) else {
                continue;
            };
            let seconds = &mut slots[placement.time().index()];
            match seconds
                .iter()
                .position(|second| !second.iter().any(|other| other.interferes(&layout)))
            {
                Some(second) => {
                    trace!(time = %placement.time(), second, "packed into existing sub-column");
                    seconds[second].push(layout);
                }
                None => {
                    trace!(time = %placement.time(), second = seconds.len(), "opened sub-column");
                    seconds.push(vec![layout]);
                }
            }
        }

        let columns: Vec<ColumnKey> = slots
            .iter()
            .enumerate()
            .flat_map(|(time, seconds)| {
                (0..seconds.len()).map(move |second| ColumnKey::new(TimeIndex(time as u32), second))
            })
            .collect();
        let index = columns
            .iter()
            .enumerate()
            .map(|(column, &key)| (key, column))
            .collect();

        Self {
            slots,
            columns,
            index,
        }
    }

    /// Number of time indices, empty ones included.
    pub fn time_extent(&self) -> usize {
        self.slots.len()
    }

    /// Number of sub-columns at `time`.
    pub fn seconds(&self, time: TimeIndex) -> usize {
        self.slots.get(time.index()).map_or(0, Vec::len)
    }

    /// Total number of absolute columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Absolute columns in order.
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Absolute column of a `(time, second)` position.
    pub fn column_index(&self, key: ColumnKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Range of absolute columns belonging to `time`.
    pub fn time_columns(&self, time: TimeIndex) -> Range<usize> {
        match self.column_index(ColumnKey::new(time, 0)) {
            Some(first) => first..first + self.seconds(time),
            None => 0..0,
        }
    }

    /// Span layouts packed into an absolute column.
    pub fn layouts(&self, column: usize) -> &[SpanLayout] {
        match self.columns.get(column) {
            Some(key) => &self.slots[key.time.index()][key.second],
            None => &[],
        }
    }

    /// Widest symbol in an absolute column, 0 if it holds none.
    pub fn natural_width(&self, column: usize) -> usize {
        self.layouts(column)
            .iter()
            .map(SpanLayout::max_symbol_width)
            .max()
            .unwrap_or(0)
    }
}
