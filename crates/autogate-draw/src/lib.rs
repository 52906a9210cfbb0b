//! Autogate Diagram Layout
//!
//! Lays out an [`autogate_ir::Circuit`] as a fixed-width ASCII diagram and
//! breaks it into pages no wider than a configured maximum.
//!
//! # Pipeline
//!
//! 1. **Spans**: every placement becomes a [`SpanLayout`], the inclusive
//!    qubit range it covers plus the symbol drawn on each row
//! 2. **Packing**: spans of one time index are packed first-fit into
//!    sub-columns so that no two overlapping spans share one ([`ColumnLayout`])
//! 3. **Widths**: each column is as wide as its widest symbol, widened where
//!    the time label needs more room ([`ColumnWidths`])
//! 4. **Grid**: spans are drawn into wire and join rows ([`Grid`])
//! 5. **Pages**: the grid is split between time blocks ([`paginate`])
//!
//! # Example
//!
//! ```rust
//! use autogate_draw::AsciiDiagram;
//! use autogate_ir::{Circuit, Gate};
//!
//! let mut circuit = Circuit::new();
//! circuit.add_gate(Gate::single("H"), 0, [0]).unwrap();
//! circuit.add_gate(Gate::new(2, ["@", "X"]).unwrap(), 1, [0, 1]).unwrap();
//!
//! let text = circuit.ascii_diagram(None).unwrap();
//! assert_eq!(
//!     text,
//!     "T  : |0|1|\n\nq0 : -H-@-\n        | \nq1 : ---X-\n          \nT  : |0|1|\n"
//! );
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod grid;
pub mod packing;
pub mod paginate;
pub mod span;
pub mod widths;

pub use config::{DEFAULT_MAX_WIDTH, DiagramConfig, MAX_WIDTH_ENV};
pub use diagram::{AsciiDiagram, Diagram};
pub use error::{ConfigError, DrawError, DrawResult};
pub use grid::{Grid, TimeConnector};
pub use packing::{ColumnKey, ColumnLayout};
pub use paginate::{LABEL_PADDING, Page, paginate, qubit_label_width};
pub use span::SpanLayout;
pub use widths::ColumnWidths;
