//! Aggregate engine: means, composite indices, and the threshold filters
//! derived from them
//!
//! The race filter here is a raw substring containment test, looser than
//! the space-delimited token rule in the filter engine. The two rules
//! coexist on purpose; unifying them would silently change results.

use crate::table::Table;
use crate::types::{Character, Stat, NON_BINARY};

/// Arithmetic mean of `stat` over rows whose race contains `race_filter`
/// as a raw substring (`None` averages every row).
///
/// Returns exactly 0.0 when no row matches; an empty reference group is
/// not an error.
pub fn average(table: &Table, stat: Stat, race_filter: Option<&str>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for row in table.iter() {
        if race_filter.map_or(true, |token| row.race.contains(token)) {
            sum += row.stat(stat);
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }

    sum / count as f64
}

/// Mean intelligence and mean power of the Android group
pub fn android_averages(table: &Table) -> (f64, f64) {
    let intelligence = average(table, Stat::Intelligence, Some("Android"));
    let power = average(table, Stat::Power, Some("Android"));

    (intelligence, power)
}

/// Saiyan attack index: mean of the three per-stat Saiyan group means.
///
/// Computed as three independent averages combined, not as the mean of
/// per-row composites. With the same filter on every pass the results
/// coincide numerically, but the mean-of-means form is the contract.
pub fn saiyan_attack_index(table: &Table) -> f64 {
    let power = average(table, Stat::Power, Some("Saiyan"));
    let intelligence = average(table, Stat::Intelligence, Some("Saiyan"));
    let speed = average(table, Stat::Speed, Some("Saiyan"));

    (power + intelligence + speed) / 3.0
}

/// Rows with speed strictly below the global speed mean, plus that mean
pub fn below_average_speed(table: &Table) -> (Vec<Character>, f64) {
    let mean = average(table, Stat::Speed, None);

    let matches = table
        .iter()
        .filter(|row| row.speed < mean)
        .cloned()
        .collect();

    (matches, mean)
}

/// Rows with power strictly below the minimum power found among Saiyans,
/// plus that minimum. No Saiyans present degrades to an empty result and
/// a 0 baseline.
pub fn weaker_than_saiyans(table: &Table) -> (Vec<Character>, f64) {
    let mut min_saiyan_power: Option<f64> = None;

    for row in table.iter() {
        if row.race.contains("Saiyan")
            && min_saiyan_power.map_or(true, |min| row.power < min)
        {
            min_saiyan_power = Some(row.power);
        }
    }

    let Some(min_power) = min_saiyan_power else {
        return (Vec::new(), 0.0);
    };

    let matches = table
        .iter()
        .filter(|row| row.power < min_power)
        .cloned()
        .collect();

    (matches, min_power)
}

/// Non-binary rows holding the maximum speed among non-binary rows, plus
/// that maximum. Gender is compared exactly.
pub fn fastest_non_binary(table: &Table) -> (Vec<Character>, f64) {
    let mut max_speed: Option<f64> = None;

    for row in table.iter() {
        if row.gender == NON_BINARY && max_speed.map_or(true, |max| row.speed > max) {
            max_speed = Some(row.speed);
        }
    }

    let Some(max_speed) = max_speed else {
        return (Vec::new(), 0.0);
    };

    let matches = table
        .iter()
        .filter(|row| row.gender == NON_BINARY && row.speed == max_speed)
        .cloned()
        .collect();

    (matches, max_speed)
}

/// Non-Kryptonian rows with power strictly above the Kryptonian power
/// mean, plus that mean. The reference group itself is excluded.
pub fn above_kryptonian_power(table: &Table) -> (Vec<Character>, f64) {
    let mean = average(table, Stat::Power, Some("Kryptonian"));

    let matches = table
        .iter()
        .filter(|row| !row.race.contains("Kryptonian") && row.power > mean)
        .cloned()
        .collect();

    (matches, mean)
}

/// Non-Saiyan rows whose own attack index is strictly below the Saiyan
/// attack index, plus that index. The reference group itself is excluded.
pub fn below_saiyan_attack_index(table: &Table) -> (Vec<Character>, f64) {
    let index = saiyan_attack_index(table);

    let matches = table
        .iter()
        .filter(|row| !row.race.contains("Saiyan") && row.attack_index() < index)
        .cloned()
        .collect();

    (matches, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Character;

    fn sample() -> Table {
        Table::from_rows(vec![
            Character::new("A", "a1", "Saiyan", "M", 100.0, 50.0, 30.0),
            Character::new("B", "b1", "Human", "F", 80.0, 90.0, 40.0),
            Character::new("C", "c1", "Saiyan", "M", 120.0, 40.0, 20.0),
        ])
    }

    #[test]
    fn test_average_with_race_substring() {
        assert_eq!(average(&sample(), Stat::Power, Some("Saiyan")), 110.0);
    }

    #[test]
    fn test_average_unfiltered() {
        assert_eq!(average(&sample(), Stat::Power, None), 100.0);
    }

    #[test]
    fn test_average_empty_group_is_zero() {
        assert_eq!(average(&sample(), Stat::Power, Some("Kryptonian")), 0.0);
        assert_eq!(average(&Table::new(), Stat::Speed, None), 0.0);
    }

    #[test]
    fn test_average_uses_raw_substring_not_token_rule() {
        // "Saiyan Human" contains "yan Hum" as a plain substring; the
        // aggregate filter accepts it even though the token rule would not.
        let table = Table::from_rows(vec![Character::new(
            "G", "g1", "Saiyan Human", "M", 60.0, 60.0, 60.0,
        )]);
        assert_eq!(average(&table, Stat::Power, Some("yan Hum")), 60.0);
    }

    #[test]
    fn test_android_averages() {
        let table = sample().append(Character::new(
            "E", "e1", "Android", "F", 70.0, 95.0, 60.0,
        ));
        let (intelligence, power) = android_averages(&table);
        assert_eq!(intelligence, 95.0);
        assert_eq!(power, 70.0);
    }

    #[test]
    fn test_saiyan_attack_index_is_mean_of_means() {
        // Power mean 110, intelligence mean 45, speed mean 25.
        assert_eq!(saiyan_attack_index(&sample()), 60.0);
    }

    #[test]
    fn test_below_average_speed() {
        let (matches, mean) = below_average_speed(&sample());
        assert_eq!(mean, 30.0);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[test]
    fn test_weaker_than_saiyans() {
        let (matches, min_power) = weaker_than_saiyans(&sample());
        assert_eq!(min_power, 100.0);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_weaker_than_saiyans_without_saiyans() {
        let table = Table::from_rows(vec![Character::new(
            "B", "b1", "Human", "F", 80.0, 90.0, 40.0,
        )]);
        let (matches, min_power) = weaker_than_saiyans(&table);
        assert!(matches.is_empty());
        assert_eq!(min_power, 0.0);
    }

    #[test]
    fn test_fastest_non_binary_collects_ties() {
        let table = Table::from_rows(vec![
            Character::new("A", "a1", "Saiyan", "No-Binario", 100.0, 50.0, 30.0),
            Character::new("B", "b1", "Human", "F", 80.0, 90.0, 90.0),
            Character::new("C", "c1", "Android", "No-Binario", 120.0, 40.0, 30.0),
        ]);
        let (matches, max_speed) = fastest_non_binary(&table);
        assert_eq!(max_speed, 30.0);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_fastest_non_binary_without_group() {
        let (matches, max_speed) = fastest_non_binary(&sample());
        assert!(matches.is_empty());
        assert_eq!(max_speed, 0.0);
    }

    #[test]
    fn test_above_kryptonian_power_excludes_kryptonians() {
        let table = sample().append(Character::new(
            "K", "k1", "Kryptonian", "M", 90.0, 80.0, 70.0,
        ));
        let (matches, mean) = above_kryptonian_power(&table);
        assert_eq!(mean, 90.0);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_above_kryptonian_power_with_empty_group() {
        // Baseline degrades to 0, so every non-Kryptonian with power > 0 passes.
        let (matches, mean) = above_kryptonian_power(&sample());
        assert_eq!(mean, 0.0);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_below_saiyan_attack_index_excludes_saiyans() {
        let (matches, index) = below_saiyan_attack_index(&sample());
        assert_eq!(index, 60.0);
        // B's own index is 70, not below 60.
        assert!(matches.is_empty());

        let table = sample().append(Character::new(
            "F", "f1", "Human", "F", 10.0, 20.0, 30.0,
        ));
        let (matches, _) = below_saiyan_attack_index(&table);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["F"]);
    }
}
