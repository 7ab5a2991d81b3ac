//! Console rendering for tables and reports
//!
//! Builders return `String`s; the menu layer decides when to print.
//! The engines themselves never format anything.

use crate::table::Table;
use crate::types::{Character, FieldValue, FIELD_COUNT};

const RULE_WIDTH: usize = 100;

/// Alias column is display-truncated to this many characters
const ALIAS_WIDTH: usize = 15;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn detail_row(character: &Character) -> String {
    // Report column order keeps intelligence ahead of power.
    format!(
        "{:<15} {:<15} {:<15} {:<12} {:<12} {:<8} {:<10}",
        character.name,
        truncate(&character.alias, ALIAS_WIDTH),
        character.race,
        character.gender,
        character.intelligence,
        character.power,
        character.speed,
    )
}

/// Detail report: a titled, ruled table of every row
pub fn detail_report(rows: &[Character], title: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push_str("\n\n");
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "{:<15} {:<15} {:<15} {:<12} {:<12} {:<8} {:<10}\n",
        "Name", "Alias", "Race", "Gender", "Intelligence", "Power", "Speed",
    ));
    out.push_str(&rule());
    out.push('\n');

    for character in rows {
        out.push_str(&detail_row(character));
        out.push('\n');
        out.push_str(&rule());
        out.push('\n');
    }

    out
}

/// Detail report over a whole table
pub fn table_report(table: &Table, title: &str) -> String {
    detail_report(table.rows(), title)
}

/// Transposed report: one numbered block per character, each attribute on
/// its own line, read out of the column-major form.
pub fn transposed_report(columns: &[Vec<FieldValue>]) -> String {
    debug_assert_eq!(columns.len(), FIELD_COUNT);

    let count = columns[0].len();
    let mut out = String::from("TRANSPOSED TABLE\n");

    for i in 0..count {
        out.push_str(&rule());
        out.push('\n');
        out.push_str(&format!("Character {}:\n", i + 1));
        out.push_str(&rule());
        out.push('\n');
        out.push_str(&format!("    Name: {}\n", columns[0][i]));
        out.push_str(&format!("    Alias: {}\n", columns[1][i]));
        out.push_str(&format!("    Race: {}\n", columns[2][i]));
        out.push_str(&format!("    Gender: {}\n", columns[3][i]));
        out.push_str(&format!("    Power: {}\n", columns[4][i]));
        out.push_str(&format!("    Intelligence: {}\n", columns[5][i]));
        out.push_str(&format!("    Speed: {}\n", columns[6][i]));
    }
    out.push_str(&rule());
    out.push('\n');

    out
}
