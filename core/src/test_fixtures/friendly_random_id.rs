// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::Rng;

use crate::{InlineString, inline_string};

const PET_NAMES: [&str; 12] = [
    "buddy", "max", "bella", "charlie", "lucy", "daisy", "molly", "lola", "sadie",
    "duke", "rocky", "zoey",
];

const FRUIT_NAMES: [&str; 12] = [
    "apple", "banana", "orange", "pear", "peach", "grape", "kiwi", "mango", "cherry",
    "lemon", "lime", "plum",
];

/// Eg: `typebelow-lucy-kiwi-421`. Used to name scratch directories so that parallel
/// tests don't collide.
#[must_use]
pub fn generate_friendly_random_id() -> InlineString {
    let mut rng = rand::rng();
    let pet = PET_NAMES[rng.random_range(0..PET_NAMES.len())];
    let fruit = FRUIT_NAMES[rng.random_range(0..FRUIT_NAMES.len())];
    let random_number = rng.random_range(0..100_000);
    inline_string!("typebelow-{pet}-{fruit}-{random_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_friendly_random_id_shape() {
        let id = generate_friendly_random_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "typebelow");
        assert!(PET_NAMES.contains(&parts[1]));
        assert!(FRUIT_NAMES.contains(&parts[2]));
        assert!(parts[3].parse::<u32>().is_ok());
    }
}
