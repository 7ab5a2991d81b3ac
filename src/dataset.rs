//! Seed dataset: seven parallel attribute lists
//!
//! The lists are positional: index `i` across all seven describes one
//! character. They must stay equal in length; `Table::load` trusts that.

/// Character names
pub const NAMES: &[&str] = &[
    "Goku",
    "Vegeta",
    "Gohan",
    "Bulma",
    "Piccolo",
    "Clark Kent",
    "Kara Zor-El",
    "Bruce Wayne",
    "Diana Prince",
    "Androide 17",
    "Androide 18",
    "Cell",
    "Freezer",
    "Krilin",
    "Trunks",
];

/// Aliases (display layer truncates these to 15 characters)
pub const ALIASES: &[&str] = &[
    "Kakarot",
    "Principe Saiyan",
    "Gran Saiyaman Definitivo",
    "Genia de Capsule Corp",
    "Demonio Namekiano",
    "Superman",
    "Supergirl",
    "Batman",
    "Wonder Woman",
    "Lapis",
    "Lazuli",
    "Bioandroide Perfecto",
    "Emperador del Mal",
    "Mejor Terricola",
    "Chico del Futuro",
];

/// Races; composite labels carry multiple space-separated tokens
pub const RACES: &[&str] = &[
    "Saiyan",
    "Saiyan",
    "Saiyan Human",
    "Human",
    "Namekian",
    "Kryptonian",
    "Kryptonian",
    "Human",
    "Amazon",
    "Android Human",
    "Android Human",
    "Android",
    "Frieza Race",
    "Human",
    "Saiyan Human",
];

/// Genders; "No-Binario" is matched exactly by the non-binary filters
pub const GENDERS: &[&str] = &[
    "Masculino",
    "Masculino",
    "Masculino",
    "Femenino",
    "No-Binario",
    "Masculino",
    "Femenino",
    "Masculino",
    "Femenino",
    "Masculino",
    "Femenino",
    "No-Binario",
    "No-Binario",
    "Masculino",
    "Masculino",
];

/// Power values
pub const POWERS: &[f64] = &[
    96.0, 92.0, 88.0, 12.0, 75.0, 94.0, 90.0, 45.0, 85.0, 70.0, 72.0, 89.0, 91.0, 40.0, 83.0,
];

/// Intelligence values
pub const INTELLIGENCES: &[f64] = &[
    55.0, 70.0, 80.0, 98.0, 88.0, 75.0, 72.0, 95.0, 78.0, 65.0, 68.0, 85.0, 82.0, 60.0, 74.0,
];

/// Speed values
pub const SPEEDS: &[f64] = &[
    90.0, 87.0, 82.0, 20.0, 70.0, 92.0, 91.0, 50.0, 80.0, 75.0, 76.0, 78.0, 84.0, 55.0, 81.0,
];
