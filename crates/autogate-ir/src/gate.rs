//! Gate descriptors.
//!
//! The circuit model treats a gate as opaque apart from the number of qubits
//! it acts on and the labels drawn on each of those qubits. Matrices and any
//! algebra behind them belong to whoever provides the gate.

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// An immutable gate descriptor: qubit count plus one display symbol per qubit.
///
/// `symbols[i]` is drawn on the `i`-th qubit the gate is placed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGate")]
pub struct Gate {
    qubit_count: usize,
    symbols: Vec<String>,
}

#[derive(Deserialize)]
struct RawGate {
    qubit_count: usize,
    symbols: Vec<String>,
}

impl TryFrom<RawGate> for Gate {
    type Error = GateError;

    fn try_from(raw: RawGate) -> Result<Self, Self::Error> {
        Gate::new(raw.qubit_count, raw.symbols)
    }
}

impl Gate {
    /// Create a gate acting on `qubit_count` qubits.
    ///
    /// Fails unless there is exactly one symbol per qubit.
    pub fn new(
        qubit_count: usize,
        symbols: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, GateError> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if qubit_count == 0 {
            return Err(GateError::NoQubits);
        }
        if symbols.len() != qubit_count {
            return Err(GateError::SymbolCountMismatch {
                qubit_count,
                symbols: symbols.len(),
            });
        }
        Ok(Self {
            qubit_count,
            symbols,
        })
    }

    /// Create a gate whose qubit count is the number of symbols.
    pub fn from_symbols(
        symbols: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, GateError> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        Self::new(symbols.len(), symbols)
    }

    /// Create a single-qubit gate drawn as `symbol`.
    pub fn single(symbol: impl Into<String>) -> Self {
        Self {
            qubit_count: 1,
            symbols: vec![symbol.into()],
        }
    }

    /// Single-qubit identity.
    pub fn identity() -> Self {
        Self::single("I")
    }

    /// Number of qubits the gate acts on.
    #[inline]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Display symbols, one per acted-on qubit.
    #[inline]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}
