//! Sort engine: selection-sort ordering over row copies
//!
//! All functions are pure: they copy the rows they need and leave the
//! input table untouched. The selection sort is not stable, so the
//! relative order of rows tying on the sort stat is an implementation
//! artifact and must not be asserted.

use crate::filter::by_race_exact;
use crate::table::Table;
use crate::types::{Character, Stat};

/// Index of the extreme (max or min) value of `stat` in `rows[start..]`
fn find_extreme(rows: &[Character], start: usize, stat: Stat, want_max: bool) -> usize {
    let mut pos = start;

    for i in (start + 1)..rows.len() {
        let beats = if want_max {
            rows[i].stat(stat) > rows[pos].stat(stat)
        } else {
            rows[i].stat(stat) < rows[pos].stat(stat)
        };
        if beats {
            pos = i;
        }
    }

    pos
}

/// In-place selection sort: repeatedly swap the extreme of the unsorted
/// suffix into position.
fn selection_sort(rows: &mut [Character], stat: Stat, descending: bool) {
    for i in 0..rows.len().saturating_sub(1) {
        let pos = find_extreme(rows, i, stat, descending);
        rows.swap(i, pos);
    }
}

/// New table sorted by `stat`, descending or ascending.
///
/// When `exclude_race` is given, rows whose race contains it as a raw
/// substring are dropped before sorting (the loose containment rule,
/// not the space-delimited token match).
pub fn sort_by_stat(
    table: &Table,
    stat: Stat,
    descending: bool,
    exclude_race: Option<&str>,
) -> Table {
    let mut rows: Vec<Character> = table
        .iter()
        .filter(|row| exclude_race.map_or(true, |token| !row.race.contains(token)))
        .cloned()
        .collect();

    selection_sort(&mut rows, stat, descending);

    Table::from_rows(rows)
}

/// New table sorted by power descending (compound-sort subroutine)
pub fn sort_by_power_desc(table: &Table) -> Table {
    let mut rows: Vec<Character> = table.rows().to_vec();
    selection_sort(&mut rows, Stat::Power, true);
    Table::from_rows(rows)
}

/// Distinct race values in first-seen order
fn distinct_races(table: &Table) -> Vec<String> {
    let mut races: Vec<String> = Vec::new();
    for row in table.iter() {
        if !races.contains(&row.race) {
            races.push(row.race.clone());
        }
    }
    races
}

/// Compound sort: race lexicographically ascending, then power descending
/// within each race block.
///
/// Races are compared by full-field string equality when grouping, so a
/// composite race like "Saiyan Human" forms its own block. Each block is
/// appended whole before the next race starts, which makes the grouping
/// contiguous by construction.
pub fn sort_by_race_then_power(table: &Table) -> Table {
    let mut races = distinct_races(table);
    races.sort();

    let mut rows: Vec<Character> = Vec::with_capacity(table.len());
    for race in &races {
        let group = Table::from_rows(by_race_exact(table, race));
        let sorted = sort_by_power_desc(&group);
        rows.extend(sorted.rows().iter().cloned());
    }

    Table::from_rows(rows)
}
