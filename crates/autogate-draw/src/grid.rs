//! Character grids for wire and join rows.

use std::ops::Range;

use crate::packing::ColumnKey;
use crate::span::SpanLayout;

/// Filler of wire rows.
pub const BUS: char = '-';
/// Filler of join rows.
pub const BLANK: char = ' ';
/// Vertical connector between the rows of one gate.
pub const VERTICAL: char = '|';
/// Wire filler under a multi-time connector.
pub const CONNECTOR_WIRE: char = '=';
/// Join filler under a multi-time connector.
pub const CONNECTOR_JOIN: char = '*';

/// A gate drawn across more than one time column.
///
/// The connector runs from the start of column `from` to the start of column
/// `to` over the rows of `span`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeConnector {
    /// Column the connector starts at.
    pub from: ColumnKey,
    /// Column the connector ends at.
    pub to: ColumnKey,
    /// Rows covered and the symbol-bearing ones among them.
    pub span: SpanLayout,
}

/// Two grids per qubit: the wire row carrying gate symbols, and the join row
/// below it carrying vertical links to the next wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    wire: Vec<Vec<char>>,
    join: Vec<Vec<char>>,
}

impl Grid {
    /// A grid of `rows` qubits and `width` characters with no gates drawn.
    pub fn blank(rows: usize, width: usize) -> Self {
        Self {
            wire: vec![vec![BUS; width]; rows],
            join: vec![vec![BLANK; width]; rows],
        }
    }

    /// Number of qubit rows.
    pub fn rows(&self) -> usize {
        self.wire.len()
    }

    /// Fill `[from, to)` for a multi-time connector over `span`.
    ///
    /// Join rows are filled on every span row but the last; wire rows only
    /// where the span carries a symbol. Gap rows inside the span keep their
    /// plain wire.
    pub fn draw_connector(&mut self, from: usize, to: usize, span: &SpanLayout) {
        let last = span.max_qubit() as usize;
        for (row, symbol) in span.rows() {
            if row < last {
                fill(self.join.get_mut(row), from..to, CONNECTOR_JOIN);
            }
            if symbol.is_some() {
                fill(self.wire.get_mut(row), from..to, CONNECTOR_WIRE);
            }
        }
    }

    /// Draw a gate whose column starts at `start`.
    pub fn draw_span(&mut self, start: usize, span: &SpanLayout) {
        let last = span.max_qubit() as usize;
        for (row, symbol) in span.rows() {
            set(self.wire.get_mut(row), start, VERTICAL);
            if row < last {
                set(self.join.get_mut(row), start, VERTICAL);
            }
            if let Some(symbol) = symbol {
                for (offset, ch) in symbol.chars().enumerate() {
                    set(self.wire.get_mut(row), start + offset, ch);
                }
            }
        }
    }

    /// Characters `range` of wire row `row`.
    pub fn wire_slice(&self, row: usize, range: Range<usize>) -> String {
        slice(&self.wire[row], range)
    }

    /// Characters `range` of join row `row`.
    pub fn join_slice(&self, row: usize, range: Range<usize>) -> String {
        slice(&self.join[row], range)
    }
}

fn set(row: Option<&mut Vec<char>>, column: usize, ch: char) {
    if let Some(cell) = row.and_then(|row| row.get_mut(column)) {
        *cell = ch;
    }
}

fn fill(row: Option<&mut Vec<char>>, range: Range<usize>, ch: char) {
    if let Some(row) = row {
        let end = range.end.min(row.len());
        let start = range.start.min(end);
        row[start..end].fill(ch);
    }
}

fn slice(row: &[char], range: Range<usize>) -> String {
    row[range].iter().collect()
}
