//! Sequence transforms over a slice of cars.
//!
//! Every function is pure: it borrows the input and returns owned results in
//! input order unless stated otherwise.

use crate::domain::model::Car;
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt::{self, Write};
use std::num::Wrapping;

/// Returned by [`max_id`] when there are no cars.
pub const NO_ID: i32 = -1;

pub fn filter_by_brand(cars: &[Car], brand: &str) -> Vec<Car> {
    cars.iter()
        .filter(|car| car.brand() == brand)
        .cloned()
        .collect()
}

pub fn brands(cars: &[Car]) -> Vec<String> {
    cars.iter().map(|car| car.brand().to_string()).collect()
}

pub fn colors(cars: &[Car]) -> Vec<String> {
    cars.iter().map(|car| car.color().to_string()).collect()
}

pub fn colors_of_brand(cars: &[Car], brand: &str) -> Vec<String> {
    cars.iter()
        .filter(|car| car.brand() == brand)
        .map(|car| car.color().to_string())
        .collect()
}

/// Same as [`colors_of_brand`], logging every element as it passes each step.
pub fn traced_colors_of_brand(cars: &[Car], brand: &str) -> Vec<String> {
    cars.iter()
        .filter(|car| car.brand() == brand)
        .inspect(|car| tracing::debug!("Filtered value: {}", car))
        .map(|car| car.color().to_string())
        .inspect(|color| tracing::debug!("Mapped value: {}", color))
        .collect()
}

/// 保留第一次出現的順序
pub fn distinct_brands(cars: &[Car]) -> Vec<String> {
    cars.iter().map(Car::brand).unique().map(str::to_string).collect()
}

pub fn sorted_brands(cars: &[Car]) -> Vec<String> {
    cars.iter().map(|car| car.brand().to_string()).sorted().collect()
}

pub fn joined_brands(cars: &[Car], separator: &str) -> String {
    cars.iter().map(Car::brand).join(separator)
}

/// Adds up the ids, wrapping on overflow.
pub fn sum_ids(cars: &[Car]) -> i32 {
    cars.iter().map(|car| Wrapping(car.id())).sum::<Wrapping<i32>>().0
}

/// Groups cars by brand. Keys keep first-seen order, members keep input order.
pub fn group_by_brand(cars: &[Car]) -> IndexMap<String, Vec<Car>> {
    cars.iter().fold(IndexMap::new(), |mut groups, car| {
        groups
            .entry(car.brand().to_string())
            .or_insert_with(Vec::new)
            .push(car.clone());
        groups
    })
}

pub fn reduce_ids(cars: &[Car]) -> i32 {
    cars.iter().map(Car::id).fold(0, i32::wrapping_add)
}

pub fn count(cars: &[Car]) -> usize {
    cars.iter().count()
}

pub fn max_id(cars: &[Car]) -> i32 {
    cars.iter().map(Car::id).max().unwrap_or(NO_ID)
}

/// 每台車寫一行
pub fn print_each<W: Write>(cars: &[Car], writer: &mut W) -> fmt::Result {
    cars.iter().try_for_each(|car| writeln!(writer, "{}", car))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{
        fleet, renault_kadjar, skoda_octavia, volkswagen_golf, volkswagen_tiguan, VOLKSWAGEN,
    };
    use std::collections::HashMap;

    #[test]
    fn test_filter_by_brand_keeps_order() {
        let filtered = filter_by_brand(&fleet(), VOLKSWAGEN);
        assert_eq!(filtered, vec![volkswagen_golf(), volkswagen_tiguan()]);
    }

    #[test]
    fn test_filter_by_unknown_brand_is_empty() {
        assert!(filter_by_brand(&fleet(), "Tesla").is_empty());
    }

    #[test]
    fn test_brands() {
        assert_eq!(
            brands(&fleet()),
            vec!["Volkswagen", "Skoda", "Renault", "Volkswagen"]
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(colors(&fleet()), vec!["blue", "green", "red", "red"]);
    }

    #[test]
    fn test_colors_of_brand() {
        assert_eq!(colors_of_brand(&fleet(), VOLKSWAGEN), vec!["blue", "red"]);
    }

    #[test]
    fn test_traced_colors_match_untraced() {
        let cars = fleet();
        assert_eq!(
            traced_colors_of_brand(&cars, VOLKSWAGEN),
            colors_of_brand(&cars, VOLKSWAGEN)
        );
    }

    #[test]
    fn test_distinct_brands_first_seen_order() {
        assert_eq!(
            distinct_brands(&fleet()),
            vec!["Volkswagen", "Skoda", "Renault"]
        );
    }

    #[test]
    fn test_sorted_brands() {
        assert_eq!(
            sorted_brands(&fleet()),
            vec!["Renault", "Skoda", "Volkswagen", "Volkswagen"]
        );
    }

    #[test]
    fn test_joined_brands() {
        assert_eq!(
            joined_brands(&fleet(), ";"),
            "Volkswagen;Skoda;Renault;Volkswagen"
        );
        assert_eq!(joined_brands(&[], ";"), "");
        assert_eq!(
            joined_brands(&fleet(), ""),
            "VolkswagenSkodaRenaultVolkswagen"
        );
    }

    #[test]
    fn test_sum_and_reduce_agree() {
        let cars = fleet();
        assert_eq!(sum_ids(&cars), 6);
        assert_eq!(reduce_ids(&cars), 6);
        assert_eq!(reduce_ids(&[]), 0);
    }

    #[test]
    fn test_id_totals_wrap_on_overflow() {
        let cars = vec![
            Car::new(i32::MAX, "Skoda", "Octavia", "green"),
            Car::new(1, "Renault", "Kadjar", "red"),
        ];
        assert_eq!(sum_ids(&cars), i32::MIN);
        assert_eq!(reduce_ids(&cars), i32::MIN);
    }

    #[test]
    fn test_group_by_brand() {
        let grouped = group_by_brand(&fleet());

        let mut expected = HashMap::new();
        expected.insert("Skoda".to_string(), vec![skoda_octavia()]);
        expected.insert("Renault".to_string(), vec![renault_kadjar()]);
        expected.insert(
            VOLKSWAGEN.to_string(),
            vec![volkswagen_golf(), volkswagen_tiguan()],
        );

        let as_hash_map: HashMap<String, Vec<Car>> = grouped.clone().into_iter().collect();
        assert_eq!(as_hash_map, expected);

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Volkswagen", "Skoda", "Renault"]);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&fleet()), 4);
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn test_max_id() {
        assert_eq!(max_id(&fleet()), 3);
        assert_eq!(max_id(&[]), NO_ID);
    }

    #[test]
    fn test_print_each_writes_one_line_per_car() {
        let mut text = String::new();
        print_each(&fleet(), &mut text).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Car{id=0, brand='Volkswagen', type='Golf', color='blue'}"
        );
        assert_eq!(lines[3], volkswagen_tiguan().to_string());
    }
}
