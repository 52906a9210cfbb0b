//! Sparse circuit model: gates placed on a (time, qubit) grid.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::{QubitId, TimeIndex};

/// One gate bound to a time index and an ordered list of qubits.
///
/// `qubits[i]` carries `gate.symbols()[i]`; the qubits need not be sorted or
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement")]
pub struct Placement {
    time: TimeIndex,
    qubits: Vec<QubitId>,
    gate: Gate,
}

#[derive(Deserialize)]
struct RawPlacement {
    time: TimeIndex,
    qubits: Vec<QubitId>,
    gate: Gate,
}

impl TryFrom<RawPlacement> for Placement {
    type Error = IrError;

    fn try_from(raw: RawPlacement) -> IrResult<Self> {
        check_qubits(&raw.gate, raw.time, &raw.qubits)?;
        Ok(Self {
            time: raw.time,
            qubits: raw.qubits,
            gate: raw.gate,
        })
    }
}

/// One qubit per gate symbol, none repeated.
fn check_qubits(gate: &Gate, time: TimeIndex, qubits: &[QubitId]) -> IrResult<()> {
    if qubits.len() != gate.qubit_count() {
        return Err(IrError::QubitCountMismatch {
            expected: gate.qubit_count(),
            got: qubits.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for &qubit in qubits {
        if !seen.insert(qubit) {
            return Err(IrError::DuplicateQubit { qubit, time });
        }
    }
    Ok(())
}

impl Placement {
    /// The time slot the gate occupies.
    #[inline]
    pub fn time(&self) -> TimeIndex {
        self.time
    }

    /// The qubits the gate acts on, in symbol order.
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// The placed gate.
    #[inline]
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Pairs each qubit with the symbol drawn on it.
    pub fn symbols(&self) -> impl Iterator<Item = (QubitId, &str)> + '_ {
        self.qubits
            .iter()
            .copied()
            .zip(self.gate.symbols().iter().map(String::as_str))
    }
}

/// A quantum circuit as a sparse collection of gate placements.
///
/// Every `(time, qubit)` cell is owned by at most one placement. Placements
/// are append-only; the occupancy caches grow with each insertion so queries
/// never rescan the placements.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Placements in insertion order.
    placements: Vec<Placement>,
    /// Occupied time indices.
    times: BTreeSet<TimeIndex>,
    /// Occupied qubit indices.
    qubits: BTreeSet<QubitId>,
    /// Owner of each occupied cell, as an index into `placements`.
    cells: FxHashMap<(TimeIndex, QubitId), usize>,
    /// Number of gates per qubit count.
    arities: BTreeMap<usize, usize>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `gate` at `time` on `qubits`.
    ///
    /// Indices are taken as signed integers so that out-of-domain input is
    /// reported rather than wrapped. On error the circuit is left unchanged.
    pub fn add_gate(
        &mut self,
        gate: Gate,
        time: i64,
        qubits: impl IntoIterator<Item = i64>,
    ) -> IrResult<&mut Self> {
        let time = TimeIndex::try_from(time)?;
        let qubits = qubits
            .into_iter()
            .map(|q| {
                QubitId::try_from(q).map_err(|e| match e {
                    IrError::NegativeQubit { qubit, .. } => IrError::NegativeQubit {
                        qubit,
                        time: Some(time),
                    },
                    other => other,
                })
            })
            .collect::<IrResult<Vec<_>>>()?;
        self.place(gate, time, qubits)
    }

    /// Place `gate` at `time` on already-typed qubit indices.
    pub fn place(
        &mut self,
        gate: Gate,
        time: TimeIndex,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        self.validate(&gate, time, &qubits)?;

        let index = self.placements.len();
        self.times.insert(time);
        for &qubit in &qubits {
            self.qubits.insert(qubit);
            self.cells.insert((time, qubit), index);
        }
        *self.arities.entry(gate.qubit_count()).or_insert(0) += 1;
        self.placements.push(Placement { time, qubits, gate });
        Ok(self)
    }

    fn validate(&self, gate: &Gate, time: TimeIndex, qubits: &[QubitId]) -> IrResult<()> {
        check_qubits(gate, time, qubits)?;

        for &qubit in qubits {
            if self.cells.contains_key(&(time, qubit)) {
                return Err(IrError::CellConflict { time, qubit });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Gate counts
    // =========================================================================

    /// Total number of gates.
    pub fn num_gates(&self) -> usize {
        self.placements.len()
    }

    /// Number of gates acting on exactly `qubit_count` qubits.
    pub fn num_gates_with_qubits(&self, qubit_count: usize) -> usize {
        self.arities.get(&qubit_count).copied().unwrap_or(0)
    }

    /// Number of 1-qubit gates.
    pub fn num_gates1(&self) -> usize {
        self.num_gates_with_qubits(1)
    }

    /// Number of 2-qubit gates.
    pub fn num_gates2(&self) -> usize {
        self.num_gates_with_qubits(2)
    }

    /// Number of 3-qubit gates.
    pub fn num_gates3(&self) -> usize {
        self.num_gates_with_qubits(3)
    }

    /// Number of 4-qubit gates.
    pub fn num_gates4(&self) -> usize {
        self.num_gates_with_qubits(4)
    }

    /// Largest qubit count over all gates, or 0 for an empty circuit.
    pub fn max_gate_qubits(&self) -> usize {
        self.arities.keys().next_back().copied().unwrap_or(0)
    }

    // =========================================================================
    // Time and qubit extents
    // =========================================================================

    /// Largest occupied time index, `None` if the circuit is empty.
    pub fn max_time(&self) -> Option<TimeIndex> {
        self.times.last().copied()
    }

    /// Number of time indices including empty ones (`max_time + 1`).
    pub fn time_extent(&self) -> usize {
        self.max_time().map_or(0, |t| t.index() + 1)
    }

    /// Number of distinct occupied time indices.
    pub fn num_times(&self) -> usize {
        self.times.len()
    }

    /// Largest occupied qubit index, `None` if the circuit is empty.
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.qubits.last().copied()
    }

    /// Number of qubit rows including untouched ones (`max_qubit + 1`).
    pub fn qubit_extent(&self) -> usize {
        self.max_qubit().map_or(0, |q| q.index() + 1)
    }

    /// Number of distinct occupied qubit indices.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    // =========================================================================
    // Placement access
    // =========================================================================

    /// Placements in insertion order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Look up the placement keyed by `(time, qubits)`.
    pub fn placement(&self, time: TimeIndex, qubits: &[QubitId]) -> Option<&Placement> {
        let first = qubits.first()?;
        self.gate_at(time, *first)
            .filter(|placement| placement.qubits == qubits)
    }

    /// The placement owning the `(time, qubit)` cell, if any.
    pub fn gate_at(&self, time: TimeIndex, qubit: QubitId) -> Option<&Placement> {
        self.cells
            .get(&(time, qubit))
            .map(|&index| &self.placements[index])
    }

    /// Whether the `(time, qubit)` cell is claimed.
    pub fn is_occupied(&self, time: TimeIndex, qubit: QubitId) -> bool {
        self.cells.contains_key(&(time, qubit))
    }

    /// Occupied time indices, ascending.
    pub fn times(&self) -> impl Iterator<Item = TimeIndex> + '_ {
        self.times.iter().copied()
    }

    /// Occupied qubit indices, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cz() -> Gate {
        Gate::new(2, ["@", "@"]).unwrap()
    }

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new();
        assert_eq!(circuit.num_gates(), 0);
        assert_eq!(circuit.max_time(), None);
        assert_eq!(circuit.time_extent(), 0);
        assert_eq!(circuit.max_qubit(), None);
        assert_eq!(circuit.qubit_extent(), 0);
        assert_eq!(circuit.max_gate_qubits(), 0);
    }

    #[test]
    fn test_sparse_extents() {
        let mut circuit = Circuit::new();
        circuit
            .add_gate(Gate::single("H"), 0, [0])
            .unwrap()
            .add_gate(cz(), 4, [5, 2])
            .unwrap();

        assert_eq!(circuit.num_gates(), 2);
        assert_eq!(circuit.num_gates1(), 1);
        assert_eq!(circuit.num_gates2(), 1);
        assert_eq!(circuit.num_gates3(), 0);
        assert_eq!(circuit.max_gate_qubits(), 2);
        assert_eq!(circuit.max_time(), Some(TimeIndex(4)));
        assert_eq!(circuit.time_extent(), 5);
        assert_eq!(circuit.num_times(), 2);
        assert_eq!(circuit.max_qubit(), Some(QubitId(5)));
        assert_eq!(circuit.qubit_extent(), 6);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(
            circuit.qubits().collect::<Vec<_>>(),
            [QubitId(0), QubitId(2), QubitId(5)]
        );
    }

    #[test]
    fn test_cell_conflict_leaves_circuit_unchanged() {
        let mut circuit = Circuit::new();
        circuit.add_gate(cz(), 0, [0, 1]).unwrap();

        let err = circuit.add_gate(Gate::single("H"), 0, [0]).unwrap_err();
        assert_eq!(
            err,
            IrError::CellConflict {
                time: TimeIndex(0),
                qubit: QubitId(0)
            }
        );
        assert_eq!(circuit.num_gates(), 1);
        assert_eq!(circuit.num_gates1(), 0);
        assert_eq!(circuit.qubit_extent(), 2);

        // The conflict is reported even when other qubits of the placement are free.
        let err = circuit.add_gate(cz(), 0, [3, 1]).unwrap_err();
        assert_eq!(
            err,
            IrError::CellConflict {
                time: TimeIndex(0),
                qubit: QubitId(1)
            }
        );
        assert!(!circuit.is_occupied(TimeIndex(0), QubitId(3)));
        assert_eq!(circuit.max_qubit(), Some(QubitId(1)));
    }

    #[test]
    fn test_placement_errors() {
        let mut circuit = Circuit::new();

        assert_eq!(
            circuit.add_gate(Gate::single("H"), -1, [0]).unwrap_err(),
            IrError::NegativeTime { time: -1 }
        );
        assert_eq!(
            circuit.add_gate(cz(), 2, [0, -3]).unwrap_err(),
            IrError::NegativeQubit {
                qubit: -3,
                time: Some(TimeIndex(2))
            }
        );
        assert_eq!(
            circuit.add_gate(cz(), 0, [0]).unwrap_err(),
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(
            circuit.add_gate(cz(), 1, [4, 4]).unwrap_err(),
            IrError::DuplicateQubit {
                qubit: QubitId(4),
                time: TimeIndex(1)
            }
        );
        assert_eq!(circuit.num_gates(), 0);
        assert_eq!(circuit.num_times(), 0);
    }

    #[test]
    fn test_same_qubit_different_times() {
        let mut circuit = Circuit::new();
        circuit
            .add_gate(Gate::single("H"), 0, [0])
            .unwrap()
            .add_gate(Gate::single("H"), 1, [0])
            .unwrap();
        assert_eq!(circuit.num_gates(), 2);
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.num_times(), 2);
    }

    #[test]
    fn test_placement_lookup() {
        let mut circuit = Circuit::new();
        circuit.add_gate(cz(), 3, [2, 0]).unwrap();

        let key = [QubitId(2), QubitId(0)];
        let placement = circuit.placement(TimeIndex(3), &key).unwrap();
        assert_eq!(placement.gate(), &cz());
        assert_eq!(
            placement.symbols().collect::<Vec<_>>(),
            [(QubitId(2), "@"), (QubitId(0), "@")]
        );

        // Same cells, different key order.
        assert!(circuit
            .placement(TimeIndex(3), &[QubitId(0), QubitId(2)])
            .is_none());
        assert!(circuit.gate_at(TimeIndex(3), QubitId(0)).is_some());
        // Qubit 1 lies in the span but is not claimed.
        assert!(circuit.gate_at(TimeIndex(3), QubitId(1)).is_none());
    }

    #[test]
    fn test_placement_serde_validates() {
        let mut circuit = Circuit::new();
        circuit.add_gate(cz(), 3, [2, 0]).unwrap();
        let placement = &circuit.placements()[0];

        let json = serde_json::to_string(placement).unwrap();
        let parsed: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, placement);

        let gate = r#"{"qubit_count":2,"symbols":["@","@"]}"#;
        let short = format!(r#"{{"time":3,"qubits":[2],"gate":{gate}}}"#);
        let err = serde_json::from_str::<Placement>(&short).unwrap_err();
        assert!(err.to_string().contains("Gate acts on 2 qubits, got 1"));

        let repeated = format!(r#"{{"time":3,"qubits":[2,2],"gate":{gate}}}"#);
        let err = serde_json::from_str::<Placement>(&repeated).unwrap_err();
        assert!(err.to_string().contains("Duplicate qubit q2"));
    }
}
