//! Menu loop and command dispatch for the console application
//!
//! State is explicit: `dispatch` takes the current table by value and
//! returns the next one, so there is no shared mutable table behind the
//! commands. Prompt-retry loops are iterative and terminate on the first
//! valid input.

use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::dataset;
use crate::render;
use crate::table::Table;
use crate::transpose::transpose;
use crate::types::{Character, Stat};
use crate::validate;
use crate::{filter, sort, stats};

/// Number of menu options, including exit
pub const OPTION_COUNT: u32 = 22;

/// Result of dispatching one menu choice
#[derive(Debug)]
pub enum Outcome {
    Continue(Table),
    Exit,
}

/// The numbered option list shown before every prompt
pub fn menu_text() -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str("Main Menu\n");
    out.push_str("01. Load dataset\n");
    out.push_str("02. Add character\n");
    out.push_str("03. Show character count\n");
    out.push_str("04. Show Human character count\n");
    out.push_str("05. Show non-Human character count\n");
    out.push_str("06. Show all characters\n");
    out.push_str("07. Show Saiyan characters\n");
    out.push_str("08. Show strongest characters\n");
    out.push_str("09. Show smartest characters\n");
    out.push_str("10. Filter below-average speed\n");
    out.push_str("11. Filter weaker than Saiyans\n");
    out.push_str("12. Filter fastest non-binary\n");
    out.push_str("13. Android averages\n");
    out.push_str("14. Filter above Kryptonian power\n");
    out.push_str("15. Filter below Saiyan attack index\n");
    out.push_str("16. Sort by intelligence (descending)\n");
    out.push_str("17. Sort by intelligence (ascending, non-Human)\n");
    out.push_str("18. Sort by power (descending, non-Human)\n");
    out.push_str("19. Sort by speed (descending)\n");
    out.push_str("20. Sort by race, then power\n");
    out.push_str("21. Transpose data\n");
    out.push_str("22. Exit\n");
    out.push_str(&"=".repeat(60));
    out
}

/// Parse a menu choice; `None` for anything outside 1-22
pub fn parse_choice(line: &str) -> Option<u32> {
    match line.trim().parse::<u32>() {
        Ok(n) if (1..=OPTION_COUNT).contains(&n) => Some(n),
        _ => None,
    }
}

/// Prompt until the user enters valid text (non-empty, no digits)
pub fn prompt_text(label: &str, input: &mut impl BufRead) -> io::Result<String> {
    loop {
        println!("Enter the character's {}: ", label);
        let mut line = String::new();
        input.read_line(&mut line)?;
        let text = line.trim().to_string();

        match validate::validate_text(label, &text) {
            Ok(()) => return Ok(text),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Prompt until the user enters a valid non-negative number
pub fn prompt_stat(label: &str, input: &mut impl BufRead) -> io::Result<f64> {
    loop {
        println!("Enter the character's {}: ", label);
        let mut line = String::new();
        input.read_line(&mut line)?;

        match validate::parse_stat(label, line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Prompt for all seven attributes of a new character
pub fn prompt_character(input: &mut impl BufRead) -> io::Result<Character> {
    let name = prompt_text("name", input)?;
    let alias = prompt_text("alias", input)?;
    let race = prompt_text("race", input)?;
    let gender = prompt_text("gender", input)?;
    let power = prompt_stat("power", input)?;
    let intelligence = prompt_stat("intelligence", input)?;
    let speed = prompt_stat("speed", input)?;

    Ok(Character::new(
        name, alias, race, gender, power, intelligence, speed,
    ))
}

/// Empty-table guard for the operations the engines leave undefined on
/// zero rows. Prints the error and returns true when the table is empty.
fn blocked_on_empty(table: &Table, operation: &str) -> bool {
    if table.is_empty() {
        println!("Error: cannot {} because the table is empty.", operation);
        return true;
    }
    false
}

/// Execute one menu choice against the current table and hand back the
/// next table state.
pub fn dispatch(choice: u32, table: Table, input: &mut impl BufRead) -> io::Result<Outcome> {
    debug!(choice, rows = table.len(), "dispatching menu choice");

    match choice {
        1 => {
            // Full replace, never a merge.
            let loaded = Table::load(
                dataset::NAMES,
                dataset::ALIASES,
                dataset::RACES,
                dataset::GENDERS,
                dataset::POWERS,
                dataset::INTELLIGENCES,
                dataset::SPEEDS,
            );
            info!(rows = loaded.len(), "dataset loaded");
            println!("Table loaded with {} characters.", loaded.len());
            Ok(Outcome::Continue(loaded))
        }
        2 => {
            if blocked_on_empty(&table, "add a character") {
                return Ok(Outcome::Continue(table));
            }
            let character = prompt_character(input)?;
            match validate::validate_character(&character) {
                Ok(()) => {
                    println!("Character {} added.", character.name);
                    Ok(Outcome::Continue(table.append(character)))
                }
                Err(e) => {
                    println!("Could not add the character: {}", e);
                    Ok(Outcome::Continue(table))
                }
            }
        }
        3 => {
            println!("Character count: {}", table.len());
            Ok(Outcome::Continue(table))
        }
        4 => {
            let humans = filter::by_race_token(&table, "Human");
            println!("Human character count: {}", humans.len());
            Ok(Outcome::Continue(table))
        }
        5 => {
            let humans = filter::by_race_token(&table, "Human");
            println!("Non-Human character count: {}", table.len() - humans.len());
            Ok(Outcome::Continue(table))
        }
        6 => {
            println!("{}", render::table_report(&table, "ALL CHARACTERS"));
            Ok(Outcome::Continue(table))
        }
        7 => {
            let saiyans = filter::by_race_token(&table, "Saiyan");
            println!("{}", render::detail_report(&saiyans, "SAIYAN CHARACTERS"));
            Ok(Outcome::Continue(table))
        }
        8 => {
            if blocked_on_empty(&table, "find the strongest characters") {
                return Ok(Outcome::Continue(table));
            }
            let strongest = filter::extreme_by(&table, Stat::Power, true);
            println!("{}", render::detail_report(&strongest, "STRONGEST CHARACTERS"));
            Ok(Outcome::Continue(table))
        }
        9 => {
            if blocked_on_empty(&table, "find the smartest characters") {
                return Ok(Outcome::Continue(table));
            }
            let smartest = filter::extreme_by(&table, Stat::Intelligence, true);
            println!("{}", render::detail_report(&smartest, "SMARTEST CHARACTERS"));
            Ok(Outcome::Continue(table))
        }
        10 => {
            if blocked_on_empty(&table, "filter by speed") {
                return Ok(Outcome::Continue(table));
            }
            let (matches, mean) = stats::below_average_speed(&table);
            println!("Average speed: {:.2}", mean);
            println!(
                "{}",
                render::detail_report(&matches, "CHARACTERS BELOW AVERAGE SPEED")
            );
            Ok(Outcome::Continue(table))
        }
        11 => {
            if blocked_on_empty(&table, "filter weak characters") {
                return Ok(Outcome::Continue(table));
            }
            let (matches, min_power) = stats::weaker_than_saiyans(&table);
            println!("Minimum Saiyan power: {}", min_power);
            println!(
                "{}",
                render::detail_report(&matches, "CHARACTERS WEAKER THAN THE SAIYANS")
            );
            Ok(Outcome::Continue(table))
        }
        12 => {
            if blocked_on_empty(&table, "filter fast non-binary characters") {
                return Ok(Outcome::Continue(table));
            }
            let (matches, max_speed) = stats::fastest_non_binary(&table);
            println!("Maximum non-binary speed: {:.2}", max_speed);
            println!(
                "{}",
                render::detail_report(&matches, "NON-BINARY CHARACTERS AT MAXIMUM SPEED")
            );
            Ok(Outcome::Continue(table))
        }
        13 => {
            if blocked_on_empty(&table, "compute Android averages") {
                return Ok(Outcome::Continue(table));
            }
            let (intelligence, power) = stats::android_averages(&table);
            println!("Average Android intelligence: {:.2}", intelligence);
            println!("Average Android power: {:.2}", power);
            Ok(Outcome::Continue(table))
        }
        14 => {
            if blocked_on_empty(&table, "filter by Kryptonian power") {
                return Ok(Outcome::Continue(table));
            }
            let (matches, mean) = stats::above_kryptonian_power(&table);
            println!("Average Kryptonian power: {:.2}", mean);
            println!(
                "{}",
                render::detail_report(
                    &matches,
                    "NON-KRYPTONIANS ABOVE THE KRYPTONIAN POWER AVERAGE"
                )
            );
            Ok(Outcome::Continue(table))
        }
        15 => {
            if blocked_on_empty(&table, "filter by Saiyan attack index") {
                return Ok(Outcome::Continue(table));
            }
            let (matches, index) = stats::below_saiyan_attack_index(&table);
            println!("Saiyan attack index: {:.2}", index);
            println!(
                "{}",
                render::detail_report(
                    &matches,
                    "NON-SAIYANS BELOW THE SAIYAN ATTACK INDEX"
                )
            );
            Ok(Outcome::Continue(table))
        }
        16 => {
            if blocked_on_empty(&table, "sort by intelligence") {
                return Ok(Outcome::Continue(table));
            }
            let sorted = sort::sort_by_stat(&table, Stat::Intelligence, true, None);
            println!(
                "{}",
                render::table_report(&sorted, "CHARACTERS BY INTELLIGENCE (DESCENDING)")
            );
            Ok(Outcome::Continue(table))
        }
        17 => {
            if blocked_on_empty(&table, "sort by intelligence") {
                return Ok(Outcome::Continue(table));
            }
            let sorted = sort::sort_by_stat(&table, Stat::Intelligence, false, Some("Human"));
            println!(
                "{}",
                render::table_report(
                    &sorted,
                    "NON-HUMAN CHARACTERS BY INTELLIGENCE (ASCENDING)"
                )
            );
            Ok(Outcome::Continue(table))
        }
        18 => {
            if blocked_on_empty(&table, "sort by power") {
                return Ok(Outcome::Continue(table));
            }
            let sorted = sort::sort_by_stat(&table, Stat::Power, true, Some("Human"));
            println!(
                "{}",
                render::table_report(&sorted, "NON-HUMAN CHARACTERS BY POWER (DESCENDING)")
            );
            Ok(Outcome::Continue(table))
        }
        19 => {
            if blocked_on_empty(&table, "sort by speed") {
                return Ok(Outcome::Continue(table));
            }
            let sorted = sort::sort_by_stat(&table, Stat::Speed, true, None);
            println!(
                "{}",
                render::table_report(&sorted, "CHARACTERS BY SPEED (DESCENDING)")
            );
            Ok(Outcome::Continue(table))
        }
        20 => {
            if blocked_on_empty(&table, "sort by race and power") {
                return Ok(Outcome::Continue(table));
            }
            let sorted = sort::sort_by_race_then_power(&table);
            println!(
                "{}",
                render::table_report(
                    &sorted,
                    "CHARACTERS BY RACE (ASCENDING), POWER (DESCENDING)"
                )
            );
            Ok(Outcome::Continue(table))
        }
        21 => {
            if blocked_on_empty(&table, "transpose the data") {
                return Ok(Outcome::Continue(table));
            }
            let columns = transpose(&table);
            println!("{}", render::transposed_report(&columns));
            Ok(Outcome::Continue(table))
        }
        22 => {
            println!("Goodbye!");
            Ok(Outcome::Exit)
        }
        _ => {
            println!("Error: the option must be between 1 and {}.", OPTION_COUNT);
            Ok(Outcome::Continue(table))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice(" 22 "), Some(22));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("23"), None);
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_prompt_text_retries_until_valid() {
        let mut input = Cursor::new("\nAndroide 17\nGoku\n");
        let text = prompt_text("name", &mut input).unwrap();
        assert_eq!(text, "Goku");
    }

    #[test]
    fn test_prompt_stat_retries_until_valid() {
        let mut input = Cursor::new("strong\n-5\n96\n");
        let value = prompt_stat("power", &mut input).unwrap();
        assert_eq!(value, 96.0);
    }

    #[test]
    fn test_prompt_character_reads_seven_fields() {
        let mut input = Cursor::new("Goku\nKakarot\nSaiyan\nMasculino\n96\n55\n90\n");
        let character = prompt_character(&mut input).unwrap();
        assert_eq!(character.name, "Goku");
        assert_eq!(character.alias, "Kakarot");
        assert_eq!(character.race, "Saiyan");
        assert_eq!(character.gender, "Masculino");
        assert_eq!(character.power, 96.0);
        assert_eq!(character.intelligence, 55.0);
        assert_eq!(character.speed, 90.0);
    }

    #[test]
    fn test_dispatch_load_replaces_table() {
        let stale = Table::from_rows(vec![Character::new(
            "Old", "old", "Human", "Masculino", 1.0, 1.0, 1.0,
        )]);
        let mut input = Cursor::new("");
        match dispatch(1, stale, &mut input).unwrap() {
            Outcome::Continue(table) => {
                assert_eq!(table.len(), dataset::NAMES.len());
                assert!(table.iter().all(|c| c.name != "Old"));
            }
            Outcome::Exit => panic!("load must not exit"),
        }
    }

    #[test]
    fn test_dispatch_add_appends_valid_character() {
        let mut input = Cursor::new("Raditz\nScouter\nSaiyan\nMasculino\n60\n30\n55\n");
        let table = Table::from_rows(vec![Character::new(
            "Goku", "Kakarot", "Saiyan", "Masculino", 96.0, 55.0, 90.0,
        )]);
        match dispatch(2, table, &mut input).unwrap() {
            Outcome::Continue(table) => {
                assert_eq!(table.len(), 2);
                assert_eq!(table.rows()[1].name, "Raditz");
            }
            Outcome::Exit => panic!("add must not exit"),
        }
    }

    #[test]
    fn test_dispatch_guards_empty_table() {
        let mut input = Cursor::new("");
        for choice in [8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21] {
            match dispatch(choice, Table::new(), &mut input).unwrap() {
                Outcome::Continue(table) => assert!(table.is_empty()),
                Outcome::Exit => panic!("guarded option {} must not exit", choice),
            }
        }
    }

    #[test]
    fn test_dispatch_exit() {
        let mut input = Cursor::new("");
        assert!(matches!(
            dispatch(22, Table::new(), &mut input).unwrap(),
            Outcome::Exit
        ));
    }
}
