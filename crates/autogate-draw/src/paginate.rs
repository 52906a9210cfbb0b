//! Splitting a diagram into pages of bounded width.

use std::ops::Range;

use autogate_ir::TimeIndex;
use tracing::debug;

use crate::error::{DrawError, DrawResult};
use crate::widths::{ColumnWidths, digits};

/// Fixed characters of the label column besides the qubit index digits.
pub const LABEL_PADDING: usize = 6;

/// A horizontal slice of the diagram holding whole time blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Character range of the diagram on this page.
    pub chars: Range<usize>,
    /// Time indices on this page.
    pub times: Range<usize>,
}

/// Digits needed for the largest qubit index, 0 without qubits.
pub fn qubit_label_width(qubit_extent: usize) -> usize {
    match qubit_extent {
        0 => 0,
        n => digits(n - 1),
    }
}

/// Break the diagram into pages no wider than `max_width`, label column
/// included.
///
/// Time blocks are added to the current page until the next one would exceed
/// the budget; that block then opens a new page. A block too wide for an empty
/// page is a [`DrawError::LayoutOverflow`]. There is always at least one page.
pub fn paginate(
    widths: &ColumnWidths,
    qubit_extent: usize,
    max_width: usize,
) -> DrawResult<Vec<Page>> {
    let available = max_width.saturating_sub(qubit_label_width(qubit_extent) + LABEL_PADDING);

    let mut pages = vec![];
    let mut page_start = 0;
    let mut first_time = 0;
    for (time, block) in widths.time_blocks().iter().enumerate() {
        if block.end - page_start <= available {
            continue;
        }
        if block.start > page_start {
            pages.push(Page {
                chars: page_start..block.start,
                times: first_time..time,
            });
            page_start = block.start;
            first_time = time;
        }
        if block.end - page_start > available {
            return Err(DrawError::LayoutOverflow {
                time: TimeIndex(time as u32),
                block_width: block.len(),
                available,
            });
        }
    }
    pages.push(Page {
        chars: page_start..widths.total(),
        times: first_time..widths.time_blocks().len(),
    });

    debug!(pages = pages.len(), available, "paginated diagram");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::ColumnLayout;
    use autogate_ir::{Circuit, Gate};

    /// One `H` on qubit 0 at each of `times` time indices: 2-wide blocks.
    fn row_of_h(times: i64) -> ColumnWidths {
        let mut circuit = Circuit::new();
        for t in 0..times {
            circuit.add_gate(Gate::single("H"), t, [0]).unwrap();
        }
        ColumnWidths::compute(&ColumnLayout::pack(&circuit))
    }

    #[test]
    fn test_label_width() {
        assert_eq!(qubit_label_width(0), 0);
        assert_eq!(qubit_label_width(1), 1);
        assert_eq!(qubit_label_width(10), 1);
        assert_eq!(qubit_label_width(11), 2);
    }

    #[test]
    fn test_single_page() {
        let pages = paginate(&row_of_h(4), 1, 80).unwrap();
        assert_eq!(
            pages,
            [Page {
                chars: 0..8,
                times: 0..4
            }]
        );
    }

    #[test]
    fn test_breaks_between_time_blocks() {
        // 11 - (1 + 6) leaves 4 characters: two blocks per page.
        let pages = paginate(&row_of_h(5), 1, 11).unwrap();
        assert_eq!(
            pages,
            [
                Page {
                    chars: 0..4,
                    times: 0..2
                },
                Page {
                    chars: 4..8,
                    times: 2..4
                },
                Page {
                    chars: 8..10,
                    times: 4..5
                },
            ]
        );
    }

    #[test]
    fn test_exact_fit_stays_on_page() {
        let pages = paginate(&row_of_h(2), 1, 11).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_overflow_reports_time() {
        let mut circuit = Circuit::new();
        circuit
            .add_gate(Gate::single("H"), 0, [0])
            .unwrap()
            .add_gate(Gate::single("LONGNAME"), 1, [0])
            .unwrap();
        let widths = ColumnWidths::compute(&ColumnLayout::pack(&circuit));

        let err = paginate(&widths, 1, 12).unwrap_err();
        assert_eq!(
            err,
            DrawError::LayoutOverflow {
                time: TimeIndex(1),
                block_width: 9,
                available: 5
            }
        );
    }

    #[test]
    fn test_empty_diagram_has_one_page() {
        let widths = ColumnWidths::compute(&ColumnLayout::pack(&Circuit::new()));
        let pages = paginate(&widths, 0, 1).unwrap();
        assert_eq!(
            pages,
            [Page {
                chars: 0..0,
                times: 0..0
            }]
        );
    }
}
