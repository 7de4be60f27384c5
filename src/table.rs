//! Comma-delimited distance tables and result files.
//!
//! The graph is usually populated from a table with one
//! `origin,destination,cost` row per line, and query results are appended
//! as single rows to a report file. Everything on-disk stays in this
//! module; the rest of the crate only sees rows and graphs.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::TableError;
use crate::graph::RouteGraph;

/// One row of a distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub origin: String,
    pub destination: String,
    pub cost: u64,
}

/// Reads a distance table: one `origin,destination,cost` row per line,
/// empty lines skipped. Rows are returned in file order. Row numbers in
/// errors are 1-based line numbers.
pub fn read_edge_rows(path: impl AsRef<Path>) -> Result<Vec<EdgeRow>, TableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| TableError::io(path, &error))?;

    let mut rows = vec![];
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|error| TableError::io(path, &error))?;
        if line.is_empty() {
            continue;
        }

        let row = index + 1;
        let fields: Vec<&str> = line.split(',').collect();
        let &[origin, destination, cost] = fields.as_slice() else {
            return Err(TableError::MissingFields { row });
        };

        let cost = cost.parse().map_err(|_| TableError::MalformedCost {
            row,
            value: cost.to_string(),
        })?;

        rows.push(EdgeRow {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
        });
    }

    debug!("Read {} edge rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads a distance table and populates a fresh graph from its rows.
pub fn load_graph(path: impl AsRef<Path>) -> Result<RouteGraph, TableError> {
    let mut graph = RouteGraph::new();
    for row in read_edge_rows(path)? {
        graph.add_connection(&row.origin, &row.destination, row.cost);
    }
    Ok(graph)
}

/// Appends one comma-joined row to a result file, creating the file if it
/// does not exist yet.
pub fn append_result_row(path: impl AsRef<Path>, fields: &[&str]) -> Result<(), TableError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|error| TableError::io(path, &error))?;

    writeln!(file, "{}", fields.join(",")).map_err(|error| TableError::io(path, &error))
}
