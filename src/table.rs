//! Record store: the row-oriented character table
//!
//! Insertion order is the only default ordering. Tables are value types:
//! the engines never mutate a table handed to them, and `append` returns
//! an independent copy rather than growing the receiver in place.

use crate::types::{Character, Field, FieldValue};
use serde::{Deserialize, Serialize};

/// Ordered sequence of character records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Character>,
}

impl Table {
    pub fn new() -> Self {
        Table { rows: Vec::new() }
    }

    /// Build a table by zipping seven equal-length parallel columns, one
    /// row per index.
    ///
    /// The caller guarantees equal lengths; the zip is driven by `names`
    /// and performs no length check. Panics if another column is shorter.
    #[allow(clippy::too_many_arguments)]
    pub fn load(
        names: &[&str],
        aliases: &[&str],
        races: &[&str],
        genders: &[&str],
        powers: &[f64],
        intelligences: &[f64],
        speeds: &[f64],
    ) -> Table {
        let mut rows = Vec::with_capacity(names.len());

        for i in 0..names.len() {
            rows.push(Character::new(
                names[i],
                aliases[i],
                races[i],
                genders[i],
                powers[i],
                intelligences[i],
                speeds[i],
            ));
        }

        Table { rows }
    }

    pub fn from_rows(rows: Vec<Character>) -> Table {
        Table { rows }
    }

    /// Return a new table equal to this one plus `record` at the end.
    ///
    /// Copy-on-write: every existing row is duplicated, so the result
    /// shares nothing with the receiver and both stay independently
    /// usable. There is no update or delete operation.
    pub fn append(&self, record: Character) -> Table {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        for row in &self.rows {
            rows.push(row.clone());
        }
        rows.push(record);
        Table { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Character] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.rows.iter()
    }

    /// Column accessor: all values of one field, in row order
    pub fn column(&self, field: Field) -> Vec<FieldValue> {
        self.rows.iter().map(|row| row.field(field)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    fn sample() -> Table {
        Table::load(
            &["A", "B", "C"],
            &["a1", "b1", "c1"],
            &["Saiyan", "Human", "Saiyan"],
            &["M", "F", "M"],
            &[100.0, 80.0, 120.0],
            &[50.0, 90.0, 40.0],
            &[30.0, 40.0, 20.0],
        )
    }

    #[test]
    fn test_load_zips_rows_in_order() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].name, "A");
        assert_eq!(table.rows()[1].race, "Human");
        assert_eq!(table.rows()[2].stat(Stat::Power), 120.0);
    }

    #[test]
    fn test_load_empty_columns() {
        let table = Table::load(&[], &[], &[], &[], &[], &[], &[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_append_leaves_original_untouched() {
        let table = sample();
        let extra = Character::new("D", "d1", "Android", "F", 70.0, 95.0, 60.0);

        let appended = table.append(extra.clone());

        assert_eq!(table.len(), 3);
        assert_eq!(appended.len(), 4);
        assert_eq!(&appended.rows()[..3], table.rows());
        assert_eq!(appended.rows()[3], extra);
    }

    #[test]
    fn test_column_extracts_in_row_order() {
        let table = sample();
        let names = table.column(Field::Name);
        assert_eq!(
            names,
            vec![
                FieldValue::Text("A".to_string()),
                FieldValue::Text("B".to_string()),
                FieldValue::Text("C".to_string()),
            ]
        );

        let powers = table.column(Field::Power);
        assert_eq!(
            powers,
            vec![
                FieldValue::Number(100.0),
                FieldValue::Number(80.0),
                FieldValue::Number(120.0),
            ]
        );
    }
}
