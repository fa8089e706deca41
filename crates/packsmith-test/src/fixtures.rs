//! The reference pack sizes and known-good answers for them.

use packsmith_core::{PackCombination, PackSize, PackSizes};

/// Pack sizes seeded by default.
pub const REFERENCE_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// An order quantity with the `(size, count)` pairs it must ship.
pub type ExpectedPacks = (u64, &'static [(u64, u64)]);

/// Expected solutions over [`REFERENCE_SIZES`].
pub const REFERENCE_TABLE: &[ExpectedPacks] = &[
    (1, &[(250, 1)]),
    (100, &[(250, 1)]),
    (250, &[(250, 1)]),
    (251, &[(500, 1)]),
    (501, &[(500, 1), (250, 1)]),
    (750, &[(500, 1), (250, 1)]),
    (3750, &[(2000, 1), (1000, 1), (500, 1), (250, 1)]),
    (8765, &[(5000, 1), (2000, 2)]),
    (12001, &[(5000, 2), (2000, 1), (250, 1)]),
    (12500, &[(5000, 2), (2000, 1), (500, 1)]),
    (15000, &[(5000, 3)]),
    (50000, &[(5000, 10)]),
    (98765, &[(5000, 19), (2000, 2)]),
    (100000, &[(5000, 20)]),
    (100001, &[(5000, 20), (250, 1)]),
    (123411, &[(5000, 24), (2000, 1), (1000, 1), (500, 1)]),
    (124001, &[(5000, 24), (2000, 2), (250, 1)]),
    (124999, &[(5000, 25)]),
    (500000, &[(5000, 100)]),
    (500001, &[(5000, 100), (250, 1)]),
    (999999, &[(5000, 200)]),
    (1000000, &[(5000, 200)]),
    (1324001, &[(5000, 264), (2000, 2), (250, 1)]),
];

/// Returns [`REFERENCE_SIZES`] as a pack-size set.
pub fn reference_sizes() -> PackSizes {
    PackSizes::new(REFERENCE_SIZES).expect("reference sizes are valid")
}

/// Builds the combination described by `(size, count)` pairs.
pub fn combination(packs: &[(u64, u64)]) -> PackCombination {
    PackCombination::from_counts(
        packs
            .iter()
            .map(|&(size, count)| (PackSize::new(size).expect("nonzero size"), count)),
    )
    .expect("fixture totals fit in u64")
}
