//! Qubit spans of placed gates.

use autogate_ir::{Placement, QubitId};

/// Printing layout of one gate: its inclusive qubit span and the symbol drawn
/// on each row of the span.
///
/// Rows inside the span that the gate does not act on hold `None`; they are
/// drawn as vertical connector only, but still block other gates from sharing
/// the sub-column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanLayout {
    min_qubit: u32,
    max_qubit: u32,
    symbols: Vec<Option<String>>,
}

impl SpanLayout {
    /// Build the span layout of qubit/symbol pairs.
    ///
    /// Returns `None` if `symbols` is empty.
    pub fn build<'a>(symbols: impl IntoIterator<Item = (QubitId, &'a str)>) -> Option<Self> {
        let symbols: Vec<(QubitId, &str)> = symbols.into_iter().collect();
        let min_qubit = symbols.iter().map(|(q, _)| q.0).min()?;
        let max_qubit = symbols.iter().map(|(q, _)| q.0).max()?;

        let mut rows = vec![None; (max_qubit - min_qubit) as usize + 1];
        for (qubit, symbol) in symbols {
            rows[(qubit.0 - min_qubit) as usize] = Some(symbol.to_owned());
        }
        Some(Self {
            min_qubit,
            max_qubit,
            symbols: rows,
        })
    }

    /// Span layout of a circuit placement.
    ///
    /// Always `Some` for placements accepted by a circuit, since every gate
    /// acts on at least one qubit.
    pub fn from_placement(placement: &Placement) -> Option<Self> {
        Self::build(placement.symbols())
    }

    /// Lowest qubit of the span.
    #[inline]
    pub fn min_qubit(&self) -> u32 {
        self.min_qubit
    }

    /// Highest qubit of the span.
    #[inline]
    pub fn max_qubit(&self) -> u32 {
        self.max_qubit
    }

    /// Whether two spans overlap and so cannot share a sub-column.
    pub fn interferes(&self, other: &SpanLayout) -> bool {
        self.min_qubit <= other.max_qubit && other.min_qubit <= self.max_qubit
    }

    /// Width in characters of the widest symbol.
    pub fn max_symbol_width(&self) -> usize {
        self.symbols
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Every row of the span, top to bottom, with its symbol if any.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        (self.min_qubit as usize..)
            .zip(self.symbols.iter().map(Option::as_deref))
    }
}
