//! Column-wise extraction over row-oriented tables.
//!
//! Each cell of the named column is matched independently (first address
//! only) and the six [`AddressColumns`] keys are merged back into the same
//! row. Cells are validated as text before any matching happens.

use addrscan_core::{AddressColumns, ColumnError};
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::debug;

use crate::matcher::AddressMatcher;

/// One table row: column name to JSON value.
pub type Row = Map<String, Value>;

/// Applies an [`AddressMatcher`] to one column of a table.
#[derive(Debug, Clone)]
pub struct ColumnApplier<'m> {
    matcher: &'m AddressMatcher,
    column: String,
    prefix: String,
}

impl<'m> ColumnApplier<'m> {
    #[must_use]
    pub fn new(matcher: &'m AddressMatcher, column: impl Into<String>) -> Self {
        Self {
            matcher,
            column: column.into(),
            prefix: String::new(),
        }
    }

    /// Prefix every output column name, e.g. `addr_` gives `addr_city`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Output column names in insertion order.
    #[must_use]
    pub fn output_columns(&self) -> Vec<String> {
        AddressColumns::KEYS
            .iter()
            .map(|key| format!("{}{key}", self.prefix))
            .collect()
    }

    /// First-match columns for each cell, aligned with the input order.
    #[must_use]
    pub fn extract_cells<S>(&self, cells: &[S]) -> Vec<AddressColumns>
    where
        S: AsRef<str> + Sync,
    {
        cells
            .par_iter()
            .map(|cell| AddressColumns::from(self.matcher.extract_first(cell.as_ref())))
            .collect()
    }

    /// Extract addresses from the column and merge the results into `rows`.
    ///
    /// Fails without touching any row if a cell is missing or not a string.
    pub fn apply(&self, rows: &mut [Row]) -> Result<(), ColumnError> {
        let extracted = {
            let cells = rows
                .iter()
                .enumerate()
                .map(|(index, row)| self.cell_text(index, row))
                .collect::<Result<Vec<_>, _>>()?;
            self.extract_cells(&cells)
        };

        let matched = extracted.iter().filter(|c| !c.is_absent()).count();
        debug!(
            column = %self.column,
            rows = rows.len(),
            matched,
            "Applied address extraction to column"
        );

        for (row, columns) in rows.iter_mut().zip(extracted) {
            for (key, value) in columns.into_pairs() {
                row.insert(
                    format!("{}{key}", self.prefix),
                    value.map_or(Value::Null, Value::String),
                );
            }
        }

        Ok(())
    }

    fn cell_text<'r>(&self, index: usize, row: &'r Row) -> Result<&'r str, ColumnError> {
        match row.get(&self.column) {
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(ColumnError::NotText {
                row: index,
                column: self.column.clone(),
                found: json_kind(other),
            }),
            None => Err(ColumnError::MissingColumn {
                row: index,
                column: self.column.clone(),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
