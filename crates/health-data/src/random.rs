//! Uniform draws used by record generation.

use std::ops::RangeInclusive;

use rand::Rng;

/// First names a generated record can carry, in pick order.
pub const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Alex", "Emily", "Chris", "Katie", "Michael", "Sarah",
];

/// Last names a generated record can carry, in pick order.
pub const LAST_NAMES: [&str; 8] = [
    "Doe", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
];

/// Returns an integer drawn uniformly from `range`, both bounds included.
pub fn random_int(rng: &mut impl Rng, range: RangeInclusive<u32>) -> u32 {
    rng.gen_range(range)
}

/// Returns `"<first> <last>"` with each half picked uniformly.
pub fn random_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}
