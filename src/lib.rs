//! Roster - character roster analytics engine
//!
//! An in-memory tabular engine over a fixed-shape character record
//! (name, alias, race, gender, power, intelligence, speed) plus the
//! console front end that drives it.
//!
//! # Architecture
//!
//! - Record Store: insertion-ordered row table with copy-on-write append
//! - Column Accessor / Transpose: row-major to column-major views
//! - Filter Engine: race/gender predicates and extremum selection
//! - Aggregate Engine: per-group means and derived threshold filters
//! - Sort Engine: selection-sort ordering and the race/power compound sort
//! - Console Layer: menu dispatch, prompt validation, report rendering

pub mod table;
pub mod types;

// Query engines
pub mod filter;
pub mod sort;
pub mod stats;
pub mod transpose;

// Console application layer
pub mod dataset;
pub mod menu;
pub mod render;
pub mod validate;

pub use table::Table;
pub use types::{Character, Field, FieldValue, Stat, FIELD_COUNT, NON_BINARY};

// Engine exports
pub use filter::{by_gender_exact, by_race_exact, by_race_token, extreme_by};
pub use sort::{sort_by_race_then_power, sort_by_stat};
pub use stats::{average, saiyan_attack_index};
pub use transpose::transpose;

// Console exports
pub use menu::{dispatch, Outcome};
pub use validate::RecordError;
