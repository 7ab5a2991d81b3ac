//! Entry-time validation for character records
//!
//! The engines trust their input, so every record passes through here
//! before it reaches `Table::append`.

use crate::types::Character;
use serde::{Deserialize, Serialize};

/// Record validation errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordError {
    EmptyText(String),
    TextContainsDigit(String),
    NotANumber(String),
    NegativeNumber { field: String, value: f64 },
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::EmptyText(field) => write!(f, "Field '{}' cannot be empty", field),
            RecordError::TextContainsDigit(field) => {
                write!(f, "Field '{}' cannot contain digits", field)
            }
            RecordError::NotANumber(field) => {
                write!(f, "Field '{}' must be a valid number", field)
            }
            RecordError::NegativeNumber { field, value } => {
                write!(f, "Field '{}' must be >= 0, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Validate a text attribute: non-empty and free of digits
pub fn validate_text(field: &str, value: &str) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::EmptyText(field.to_string()));
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(RecordError::TextContainsDigit(field.to_string()));
    }
    Ok(())
}

/// Parse a numeric attribute: a finite number greater than or equal to 0
pub fn parse_stat(field: &str, input: &str) -> Result<f64, RecordError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| RecordError::NotANumber(field.to_string()))?;

    if !value.is_finite() {
        return Err(RecordError::NotANumber(field.to_string()));
    }
    if value < 0.0 {
        return Err(RecordError::NegativeNumber {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validate a whole record: all seven attributes complete and in range
pub fn validate_character(character: &Character) -> Result<(), RecordError> {
    validate_text("name", &character.name)?;
    validate_text("alias", &character.alias)?;
    validate_text("race", &character.race)?;
    validate_text("gender", &character.gender)?;

    for (field, value) in [
        ("power", character.power),
        ("intelligence", character.intelligence),
        ("speed", character.speed),
    ] {
        if value < 0.0 || !value.is_finite() {
            return Err(RecordError::NegativeNumber {
                field: field.to_string(),
                value,
            });
        }
    }

    Ok(())
}
