//! Error types for diagram layout and configuration.

use autogate_ir::{QubitId, TimeIndex};
use thiserror::Error;

/// Errors that can occur while laying out or rendering a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DrawError {
    /// A single time index does not fit on a page even on its own.
    #[error(
        "Time index {} is too large to fit: needs {block_width} columns, {available} available",
        .time.0
    )]
    LayoutOverflow {
        /// The time index whose block overflows.
        time: TimeIndex,
        /// Width of that time index's block, separators included.
        block_width: usize,
        /// Diagram width available per page.
        available: usize,
    },

    /// No sub-column exists at the given position.
    #[error("No column at time {} second {second}", .time.0)]
    UnknownColumn {
        /// Time index of the requested column.
        time: TimeIndex,
        /// Sub-column within the time index.
        second: usize,
    },

    /// A time connector must run left to right.
    #[error("Time connector runs backwards: column {from} to column {to}")]
    BackwardConnector {
        /// Absolute column the connector starts at.
        from: usize,
        /// Absolute column the connector ends at.
        to: usize,
    },

    /// A time connector spans qubits with no row in the diagram.
    #[error("Time connector reaches {qubit}, but the diagram has {rows} rows")]
    ConnectorOutOfRange {
        /// Largest qubit in the connector span.
        qubit: QubitId,
        /// Number of qubit rows in the diagram.
        rows: usize,
    },
}

/// Result type for layout operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur while loading a [`DiagramConfig`](crate::DiagramConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file is not valid YAML for this schema.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml_ng::Error),

    /// A value parsed but is unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
