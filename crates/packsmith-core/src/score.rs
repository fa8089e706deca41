//! PackScore - two-level ranking of pack combinations

use std::cmp::Ordering;
use std::fmt;

/// The quality of a pack combination: shipped items first, packs second.
///
/// Follows the solver convention that a *greater* score is *better*:
/// 1. A smaller total (less overshoot) is better
/// 2. On equal totals, fewer packs is better
///
/// # Examples
///
/// ```
/// use packsmith_core::PackScore;
///
/// let tight = PackScore::of(750, 2);
/// let loose = PackScore::of(1000, 1);
/// assert!(tight > loose);
///
/// let fewer_packs = PackScore::of(750, 2);
/// let more_packs = PackScore::of(750, 3);
/// assert!(fewer_packs.is_better_than(&more_packs));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackScore {
    total: u64,
    pack_count: u64,
}

impl PackScore {
    /// The score of the empty combination.
    pub const ZERO: PackScore = PackScore {
        total: 0,
        pack_count: 0,
    };

    /// Creates a new PackScore.
    #[inline]
    pub const fn of(total: u64, pack_count: u64) -> Self {
        PackScore { total, pack_count }
    }

    /// Returns the number of items shipped.
    #[inline]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of physical packs shipped.
    #[inline]
    pub const fn pack_count(&self) -> u64 {
        self.pack_count
    }

    /// Returns true if this score ranks strictly above `other`.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score ranks strictly below `other`.
    #[inline]
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this combination ships at least `quantity` items.
    #[inline]
    pub const fn covers(&self, quantity: u64) -> bool {
        self.total >= quantity
    }

    /// Adds `count` packs of `size` items, or `None` on overflow.
    pub fn checked_add_packs(&self, size: u64, count: u64) -> Option<Self> {
        let total = self.total.checked_add(size.checked_mul(count)?)?;
        let pack_count = self.pack_count.checked_add(count)?;
        Some(PackScore { total, pack_count })
    }

    /// Sums two scores, or `None` on overflow.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(PackScore {
            total: self.total.checked_add(other.total)?,
            pack_count: self.pack_count.checked_add(other.pack_count)?,
        })
    }
}

impl Ord for PackScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower is better on both levels, so compare reversed.
        match other.total.cmp(&self.total) {
            Ordering::Equal => other.pack_count.cmp(&self.pack_count),
            ord => ord,
        }
    }
}

impl PartialOrd for PackScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for PackScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackScore({}, {})", self.total, self.pack_count)
    }
}

impl fmt::Display for PackScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}total/{}packs", self.total, self.pack_count)
    }
}
