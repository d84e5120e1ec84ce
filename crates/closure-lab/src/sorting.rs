//! Closures as sort predicates and mapping functions.

use std::cmp::{Ordering, Reverse};

use crate::trailing::map_all;

/// Named predicate: `a` comes before `b` when it is greater.
pub fn backwards(a: &str, b: &str) -> bool {
    a > b
}

/// Stable sort driven by a strict "comes before" predicate.
pub fn sorted_by<S, F>(names: &[S], mut precedes: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> bool,
{
    let mut sorted: Vec<String> = names.iter().map(|name| name.as_ref().to_owned()).collect();
    sorted.sort_by(|a, b| {
        if precedes(a.as_str(), b.as_str()) {
            Ordering::Less
        } else if precedes(b.as_str(), a.as_str()) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    sorted
}

/// The same descending sort written with progressively shorter closures.
pub fn reverse_sorted_forms<S: AsRef<str>>(names: &[S]) -> Vec<(&'static str, Vec<String>)> {
    let owned: Vec<String> = names.iter().map(|name| name.as_ref().to_owned()).collect();

    let mut by_comparator = owned.clone();
    by_comparator.sort_by(|a, b| b.cmp(a));

    let mut by_key = owned.clone();
    by_key.sort_by_key(|name| Reverse(name.clone()));

    vec![
        ("named function", sorted_by(names, backwards)),
        (
            "typed closure",
            sorted_by(names, |s1: &str, s2: &str| -> bool { s1 > s2 }),
        ),
        ("inferred closure", sorted_by(names, |s1, s2| s1 > s2)),
        ("comparator", by_comparator),
        ("reversed key", by_key),
    ]
}

pub const DIGIT_NAMES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Spells every number digit by digit: `510` becomes `"FiveOneZero"`.
/// Zero has no digits to peel and spells as `""`.
pub fn spell_digits(numbers: &[u64]) -> Vec<String> {
    map_all(numbers, |&number| {
        let mut number = number;
        let mut output = String::new();
        while number > 0 {
            output.insert_str(0, DIGIT_NAMES[(number % 10) as usize]);
            number /= 10;
        }
        output
    })
}
