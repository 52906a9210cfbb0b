//! Autogate Circuit Model
//!
//! This crate models a quantum circuit as a sparse grid: each gate occupies
//! one discrete time slot across an arbitrary set of qubits. It is the input
//! to the diagram layout engine in `autogate-draw`.
//!
//! # Core Components
//!
//! - **Indices**: [`TimeIndex`] and [`QubitId`] address the grid
//! - **Gates**: [`Gate`] carries the qubit count and one display symbol per qubit
//! - **Placements**: [`Placement`] binds a gate to a time and an ordered qubit list
//! - **Circuit**: [`Circuit`] owns the placements and enforces that every
//!   `(time, qubit)` cell has at most one owner
//!
//! # Example
//!
//! ```rust
//! use autogate_ir::{Circuit, Gate, IrError, QubitId, TimeIndex};
//!
//! let mut circuit = Circuit::new();
//! circuit.add_gate(Gate::single("H"), 0, [0]).unwrap();
//! circuit.add_gate(Gate::single("H"), 0, [1]).unwrap();
//! circuit.add_gate(Gate::new(2, ["@", "@"]).unwrap(), 1, [0, 1]).unwrap();
//!
//! assert_eq!(circuit.num_gates(), 3);
//! assert_eq!(circuit.time_extent(), 2);
//! assert_eq!(circuit.qubit_extent(), 2);
//!
//! // Qubit 1 is already claimed at time 1.
//! let err = circuit.add_gate(Gate::single("X"), 1, [1]).unwrap_err();
//! assert_eq!(
//!     err,
//!     IrError::CellConflict { time: TimeIndex(1), qubit: QubitId(1) }
//! );
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, Placement};
pub use error::{GateError, IrError, IrResult};
pub use gate::Gate;
pub use qubit::{QubitId, TimeIndex};
