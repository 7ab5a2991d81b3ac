//! Filter engine: predicate-based row selection
//!
//! Every filter returns a fresh vector of matching rows in input order
//! and never mutates the source table.

use crate::table::Table;
use crate::types::{Character, Stat};

/// True if `token` occurs in `race` as a space-delimited word.
///
/// The rule pads the token with one trailing space and the race string
/// with one leading and one trailing space, then does a substring search.
/// A token that is a prefix of a longer word ("Sai" vs "Saiyan") will not
/// match, but a token ending a hyphen-joined composite ("Human" vs
/// "Half-Human") will, since no space separates the hyphen. This is the
/// historical matching rule and call sites depend on it; do not replace
/// it with an exact word split.
pub fn race_has_token(race: &str, token: &str) -> bool {
    format!(" {} ", race).contains(&format!("{} ", token))
}

/// Rows whose race field contains `token` as a space-delimited word
pub fn by_race_token(table: &Table, token: &str) -> Vec<Character> {
    table
        .iter()
        .filter(|row| race_has_token(&row.race, token))
        .cloned()
        .collect()
}

/// Rows whose race field equals `race` exactly
pub fn by_race_exact(table: &Table, race: &str) -> Vec<Character> {
    table
        .iter()
        .filter(|row| row.race == race)
        .cloned()
        .collect()
}

/// Rows whose gender field equals `gender` exactly
pub fn by_gender_exact(table: &Table, gender: &str) -> Vec<Character> {
    table
        .iter()
        .filter(|row| row.gender == gender)
        .cloned()
        .collect()
}

/// All rows holding the global maximum (or minimum) of `stat`, in input
/// order. Ties are all included.
///
/// The first row seeds the extreme candidate, so the caller must check
/// for emptiness first. Panics on an empty table.
pub fn extreme_by(table: &Table, stat: Stat, want_max: bool) -> Vec<Character> {
    let rows = table.rows();
    let mut extreme = rows[0].stat(stat);
    let mut matches = vec![rows[0].clone()];

    for row in &rows[1..] {
        let value = row.stat(stat);
        let beats = if want_max { value > extreme } else { value < extreme };

        if beats {
            extreme = value;
            matches = vec![row.clone()];
        } else if value == extreme {
            matches.push(row.clone());
        }
    }

    matches
}
