//! Brute-force reference for the best achievable score.
//!
//! Dynamic programming over every exact total up to the first total that
//! must already cover the order. Memory is linear in the quantity, so keep
//! quantities modest.

use packsmith_core::{PackScore, PackSizes};

/// Returns the best score any combination of `sizes` achieves for
/// `quantity`: the smallest total covering it, then the fewest packs.
///
/// # Panics
///
/// Panics if `quantity` is zero.
pub fn oracle(quantity: u64, sizes: &PackSizes) -> PackScore {
    assert!(quantity > 0, "quantity must be positive");

    // Some multiple of the smallest size lands in [quantity, limit].
    let limit = quantity + sizes.smallest().get() - 1;
    let len = usize::try_from(limit).expect("quantity fits in memory") + 1;

    let mut min_packs = vec![u64::MAX; len];
    min_packs[0] = 0;
    for total in 1..len {
        for size in sizes.iter() {
            let size = size.get() as usize;
            if size <= total && min_packs[total - size] != u64::MAX {
                min_packs[total] = min_packs[total].min(min_packs[total - size] + 1);
            }
        }
    }

    (quantity as usize..len)
        .find(|&total| min_packs[total] != u64::MAX)
        .map(|total| PackScore::of(total as u64, min_packs[total]))
        .expect("a multiple of the smallest size always covers the order")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_reference_sizes() {
        let sizes = crate::reference_sizes();
        assert_eq!(oracle(1, &sizes), PackScore::of(250, 1));
        assert_eq!(oracle(251, &sizes), PackScore::of(500, 1));
        assert_eq!(oracle(12001, &sizes), PackScore::of(12250, 4));
    }

    #[test]
    fn test_oracle_non_canonical() {
        let sizes = PackSizes::new([10, 6]).unwrap();
        assert_eq!(oracle(12, &sizes), PackScore::of(12, 2));
        assert_eq!(oracle(7, &sizes), PackScore::of(10, 1));
    }
}
