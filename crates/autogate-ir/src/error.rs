//! Error types for the IR crate.

use crate::qubit::{QubitId, TimeIndex};
use thiserror::Error;

/// Errors raised when placing a gate into a [`Circuit`](crate::Circuit).
///
/// A failed placement never modifies the circuit; the caller can retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// The time index was negative.
    #[error("Negative time index {time}")]
    NegativeTime {
        /// The rejected time index.
        time: i64,
    },

    /// One of the qubit indices was negative.
    #[error("Negative qubit index {qubit}{}", format_time_context(.time))]
    NegativeQubit {
        /// The rejected qubit index.
        qubit: i64,
        /// Time index of the placement, if it was valid.
        time: Option<TimeIndex>,
    },

    /// An index does not fit in the 32-bit index space.
    #[error("Index {index} exceeds the maximum supported index {}", u32::MAX)]
    IndexOverflow {
        /// The rejected index.
        index: i64,
    },

    /// Number of qubits does not match the gate.
    #[error("Gate acts on {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Number of qubits the gate acts on.
        expected: usize,
        /// Number of qubit indices supplied.
        got: usize,
    },

    /// The same qubit appears twice in one placement.
    #[error("Duplicate qubit {qubit} in placement at {time}")]
    DuplicateQubit {
        /// The repeated qubit.
        qubit: QubitId,
        /// Time index of the placement.
        time: TimeIndex,
    },

    /// The `(time, qubit)` cell is already claimed by another placement.
    #[error("({time}, {qubit}) is already occupied in circuit")]
    CellConflict {
        /// Time index of the conflicting cell.
        time: TimeIndex,
        /// Qubit of the conflicting cell.
        qubit: QubitId,
    },
}

/// Errors raised when constructing a [`Gate`](crate::Gate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GateError {
    /// A gate must act on at least one qubit.
    #[error("Gate must act on at least one qubit")]
    NoQubits,

    /// One display symbol is required per qubit.
    #[error("Gate acts on {qubit_count} qubits but has {symbols} symbols")]
    SymbolCountMismatch {
        /// Declared qubit count.
        qubit_count: usize,
        /// Number of symbols supplied.
        symbols: usize,
    },
}

#[allow(clippy::ref_option)]
fn format_time_context(time: &Option<TimeIndex>) -> String {
    match time {
        Some(time) => format!(" (at {time})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
