//! Transpose engine: row-major table to column-major form

use crate::table::Table;
use crate::types::{Field, FieldValue};

/// Convert the table to column-major form: one vector per field, in field
/// order, each holding that field's values across all rows.
///
/// The column count is fixed by the record layout, so an empty table
/// yields seven empty columns.
pub fn transpose(table: &Table) -> Vec<Vec<FieldValue>> {
    Field::ALL.iter().map(|&field| table.column(field)).collect()
}
