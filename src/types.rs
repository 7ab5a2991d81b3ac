//! Core type definitions for the Roster engine

use serde::{Deserialize, Serialize};

/// Number of attributes in a character record
pub const FIELD_COUNT: usize = 7;

/// Gender label matched exactly by the non-binary filters
pub const NON_BINARY: &str = "No-Binario";

/// One character record: the seven attributes in fixed column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub alias: String,
    pub race: String,
    pub gender: String,
    pub power: f64,
    pub intelligence: f64,
    pub speed: f64,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        alias: impl Into<String>,
        race: impl Into<String>,
        gender: impl Into<String>,
        power: f64,
        intelligence: f64,
        speed: f64,
    ) -> Self {
        Character {
            name: name.into(),
            alias: alias.into(),
            race: race.into(),
            gender: gender.into(),
            power,
            intelligence,
            speed,
        }
    }

    /// Value of one numeric stat
    pub fn stat(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Power => self.power,
            Stat::Intelligence => self.intelligence,
            Stat::Speed => self.speed,
        }
    }

    /// Value of any column as a heterogeneous cell
    pub fn field(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Alias => FieldValue::Text(self.alias.clone()),
            Field::Race => FieldValue::Text(self.race.clone()),
            Field::Gender => FieldValue::Text(self.gender.clone()),
            Field::Power => FieldValue::Number(self.power),
            Field::Intelligence => FieldValue::Number(self.intelligence),
            Field::Speed => FieldValue::Number(self.speed),
        }
    }

    /// Per-row attack index: mean of the three numeric stats
    pub fn attack_index(&self) -> f64 {
        (self.power + self.intelligence + self.speed) / 3.0
    }
}

/// Column selector (indices 0-6 in the record layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Alias,
    Race,
    Gender,
    Power,
    Intelligence,
    Speed,
}

impl Field {
    /// All columns in record order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Alias,
        Field::Race,
        Field::Gender,
        Field::Power,
        Field::Intelligence,
        Field::Speed,
    ];

    /// Positional index of this column in the record layout
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Alias => 1,
            Field::Race => 2,
            Field::Gender => 3,
            Field::Power => 4,
            Field::Intelligence => 5,
            Field::Speed => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Field::ALL.get(index).copied()
    }

    /// Column name for report headers
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Alias => "Alias",
            Field::Race => "Race",
            Field::Gender => "Gender",
            Field::Power => "Power",
            Field::Intelligence => "Intelligence",
            Field::Speed => "Speed",
        }
    }
}

/// Numeric-column selector (columns 4-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Power,
    Intelligence,
    Speed,
}

impl Stat {
    pub fn field(self) -> Field {
        match self {
            Stat::Power => Field::Power,
            Stat::Intelligence => Field::Intelligence,
            Stat::Speed => Field::Speed,
        }
    }

    pub fn label(self) -> &'static str {
        self.field().label()
    }
}

/// Heterogeneous cell value (column accessor / transpose output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}
