//! Laid-out diagrams and their text rendering.

use autogate_ir::{Circuit, QubitId};
use tracing::{debug, instrument};

use crate::config::DiagramConfig;
use crate::error::{DrawError, DrawResult};
use crate::grid::{Grid, TimeConnector};
use crate::packing::{ColumnKey, ColumnLayout};
use crate::paginate::{Page, paginate, qubit_label_width};
use crate::span::SpanLayout;
use crate::widths::ColumnWidths;

/// The layout of a circuit: packed columns, their widths, and any multi-time
/// connectors.
///
/// A diagram is built once from a circuit and can be rendered any number of
/// times at different widths; rendering never changes it.
#[derive(Debug, Clone)]
pub struct Diagram {
    columns: ColumnLayout,
    widths: ColumnWidths,
    connectors: Vec<TimeConnector>,
    qubit_extent: usize,
}

impl Diagram {
    /// Lay out every placement of `circuit`.
    #[instrument(skip_all, fields(gates = circuit.num_gates()))]
    pub fn build(circuit: &Circuit) -> Self {
        let columns = ColumnLayout::pack(circuit);
        let widths = ColumnWidths::compute(&columns);
        debug!(
            times = columns.time_extent(),
            columns = columns.num_columns(),
            width = widths.total(),
            "laid out circuit"
        );
        Self {
            columns,
            widths,
            connectors: vec![],
            qubit_extent: circuit.qubit_extent(),
        }
    }

    /// Register a connector drawn from column `from` to column `to` over `span`.
    pub fn connect(
        &mut self,
        from: ColumnKey,
        to: ColumnKey,
        span: SpanLayout,
    ) -> DrawResult<&mut Self> {
        let from_column = self.column(from)?;
        let to_column = self.column(to)?;
        if from_column > to_column {
            return Err(DrawError::BackwardConnector {
                from: from_column,
                to: to_column,
            });
        }
        if span.max_qubit() as usize >= self.qubit_extent {
            return Err(DrawError::ConnectorOutOfRange {
                qubit: QubitId(span.max_qubit()),
                rows: self.qubit_extent,
            });
        }
        self.connectors.push(TimeConnector { from, to, span });
        Ok(self)
    }

    fn column(&self, key: ColumnKey) -> DrawResult<usize> {
        self.columns
            .column_index(key)
            .ok_or(DrawError::UnknownColumn {
                time: key.time,
                second: key.second,
            })
    }

    /// Packed columns.
    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    /// Column geometry.
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Registered multi-time connectors.
    pub fn connectors(&self) -> &[TimeConnector] {
        &self.connectors
    }

    /// Number of qubit rows drawn.
    pub fn qubit_extent(&self) -> usize {
        self.qubit_extent
    }

    /// Draw connectors, then gates, into a fresh grid.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::blank(self.qubit_extent, self.widths.total());

        for connector in &self.connectors {
            // Both keys were resolved when the connector was registered.
            if let (Some(from), Some(to)) = (
                self.columns.column_index(connector.from),
                self.columns.column_index(connector.to),
            ) {
                grid.draw_connector(
                    self.widths.start(from),
                    self.widths.start(to),
                    &connector.span,
                );
            }
        }

        for column in 0..self.columns.num_columns() {
            let start = self.widths.start(column);
            for span in self.columns.layouts(column) {
                grid.draw_span(start, span);
            }
        }
        grid
    }

    /// Page breaks for an output no wider than `max_width`.
    pub fn pages(&self, max_width: usize) -> DrawResult<Vec<Page>> {
        paginate(&self.widths, self.qubit_extent, max_width)
    }

    /// Render with the width from `config`.
    pub fn render(&self, config: &DiagramConfig) -> DrawResult<String> {
        self.render_with_width(config.max_width)
    }

    /// Render with an explicit maximum width.
    #[instrument(skip(self))]
    pub fn render_with_width(&self, max_width: usize) -> DrawResult<String> {
        let pages = self.pages(max_width)?;
        let grid = self.grid();
        let header = self.widths.time_header();
        let qwidth = qubit_label_width(self.qubit_extent);

        let mut out = String::new();
        for (index, page) in pages.iter().enumerate() {
            let first = index == 0;
            let time_line = format!(
                "T{:>qwidth$} : {}{}\n",
                " ",
                if first { '|' } else { ' ' },
                &header[page.chars.clone()],
            );

            out.push_str(&time_line);
            out.push('\n');
            for row in 0..self.qubit_extent {
                out.push_str(&format!(
                    "q{row:<qwidth$} : {}{}\n",
                    if first { '-' } else { ' ' },
                    grid.wire_slice(row, page.chars.clone()),
                ));
                out.push_str(&format!(
                    "{:indent$}{}\n",
                    "",
                    grid.join_slice(row, page.chars.clone()),
                    indent = qwidth + 5,
                ));
            }
            out.push_str(&time_line);

            if index + 1 < pages.len() {
                out.push('\n');
            }
        }
        Ok(out)
    }
}

/// Rendering shorthand for circuits.
pub trait AsciiDiagram {
    /// Render an ASCII diagram, paginated to `max_width` or to the default
    /// width when `None`.
    fn ascii_diagram(&self, max_width: Option<usize>) -> DrawResult<String>;
}

impl AsciiDiagram for Circuit {
    fn ascii_diagram(&self, max_width: Option<usize>) -> DrawResult<String> {
        let config = match max_width {
            Some(max_width) => DiagramConfig::default().with_max_width(max_width),
            None => DiagramConfig::default(),
        };
        Diagram::build(self).render(&config)
    }
}
