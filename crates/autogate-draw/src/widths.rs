//! Column widths and character offsets.

use std::ops::Range;

use autogate_ir::TimeIndex;

use crate::packing::ColumnLayout;

/// Number of decimal digits in `n`.
pub(crate) fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Character geometry of every absolute column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Width of each absolute column, trailing separator included.
    widths: Vec<usize>,
    /// Character offset at which each absolute column starts.
    starts: Vec<usize>,
    /// Width of each time index's sub-columns before the label adjustment.
    time_widths: Vec<usize>,
    /// Character range of each time index's block.
    time_blocks: Vec<Range<usize>>,
    /// Total diagram width.
    total: usize,
}

impl ColumnWidths {
    /// Compute widths for packed columns.
    ///
    /// A column is as wide as its widest symbol. Sub-columns of one time index
    /// are separated by one character, and if the time label has more digits
    /// than the sub-columns are wide, the last sub-column absorbs the
    /// difference. Every column then gets one trailing separator.
    pub fn compute(columns: &ColumnLayout) -> Self {
        let mut widths: Vec<usize> = (0..columns.num_columns())
            .map(|column| columns.natural_width(column))
            .collect();

        let mut time_widths = Vec::with_capacity(columns.time_extent());
        for t in 0..columns.time_extent() {
            let range = columns.time_columns(TimeIndex(t as u32));
            if range.is_empty() {
                time_widths.push(0);
                continue;
            }
            let width = widths[range.clone()].iter().sum::<usize>() + range.len() - 1;
            widths[range.end - 1] += digits(t).saturating_sub(width);
            time_widths.push(width);
        }

        for width in &mut widths {
            *width += 1;
        }

        let mut starts = Vec::with_capacity(widths.len());
        let mut total = 0;
        for &width in &widths {
            starts.push(total);
            total += width;
        }

        let time_blocks = (0..columns.time_extent())
            .map(|t| {
                let range = columns.time_columns(TimeIndex(t as u32));
                match (starts.get(range.start), range.is_empty()) {
                    (Some(&start), false) => start..starts[range.end - 1] + widths[range.end - 1],
                    _ => total..total,
                }
            })
            .collect();

        Self {
            widths,
            starts,
            time_widths,
            time_blocks,
            total,
        }
    }

    /// Width of an absolute column, trailing separator included.
    pub fn width(&self, column: usize) -> usize {
        self.widths[column]
    }

    /// Character offset of an absolute column.
    pub fn start(&self, column: usize) -> usize {
        self.starts[column]
    }

    /// Total diagram width in characters.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Character range covered by all sub-columns of `time`.
    pub fn time_block(&self, time: TimeIndex) -> Range<usize> {
        self.time_blocks
            .get(time.index())
            .cloned()
            .unwrap_or(self.total..self.total)
    }

    /// Character ranges of every time block, in time order.
    pub fn time_blocks(&self) -> &[Range<usize>] {
        &self.time_blocks
    }

    /// Time labels, each left-aligned over its block and closed by `|`.
    ///
    /// The result is exactly [`total`](Self::total) characters long.
    pub fn time_header(&self) -> String {
        self.time_widths
            .iter()
            .enumerate()
            .map(|(t, &width)| format!("{t:<width$}|"))
            .collect()
    }
}
