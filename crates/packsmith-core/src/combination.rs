//! PackCombination - how many packs of each size to ship

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PackError, Result};
use crate::pack::PackSize;
use crate::score::PackScore;

/// A mapping from pack size to a positive pack count.
///
/// Sizes with a count of zero are never stored. The combined
/// [`PackScore`] (Total and PackCount) is kept up to date as packs are
/// added, with every addition overflow-checked.
///
/// # Examples
///
/// ```
/// use packsmith_core::{PackCombination, PackSize};
///
/// let five_thousand = PackSize::new(5000).unwrap();
/// let quarter = PackSize::new(250).unwrap();
///
/// let mut packs = PackCombination::new();
/// packs.add(five_thousand, 2).unwrap();
/// packs.add(quarter, 1).unwrap();
///
/// assert_eq!(packs.total(), 10_250);
/// assert_eq!(packs.pack_count(), 3);
/// assert_eq!(packs.count_of(five_thousand), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PackCombination {
    packs: BTreeMap<PackSize, u64>,
    score: PackScore,
}

impl PackCombination {
    /// Creates an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a combination holding `count` packs of one size.
    pub fn of(size: PackSize, count: u64) -> Result<Self> {
        let mut combination = Self::new();
        combination.add(size, count)?;
        Ok(combination)
    }

    /// Creates a combination holding a single pack.
    pub fn single(size: PackSize) -> Self {
        let mut packs = BTreeMap::new();
        packs.insert(size, 1);
        Self {
            packs,
            score: PackScore::of(size.get(), 1),
        }
    }

    /// Builds a combination from `(size, count)` pairs, summing repeats.
    pub fn from_counts(counts: impl IntoIterator<Item = (PackSize, u64)>) -> Result<Self> {
        let mut combination = Self::new();
        for (size, count) in counts {
            combination.add(size, count)?;
        }
        Ok(combination)
    }

    /// Adds `count` packs of `size`. Adding zero packs is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Overflow`] if the total or pack count would
    /// exceed `u64`; the combination is left unchanged.
    pub fn add(&mut self, size: PackSize, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let score = self
            .score
            .checked_add_packs(size.get(), count)
            .ok_or(PackError::Overflow)?;
        *self.packs.entry(size).or_insert(0) += count;
        self.score = score;
        Ok(())
    }

    /// Adds every pack of `other` into this combination.
    pub fn merge(&mut self, other: &PackCombination) -> Result<()> {
        self.score
            .checked_add(&other.score)
            .ok_or(PackError::Overflow)?;
        for (&size, &count) in &other.packs {
            self.add(size, count)?;
        }
        Ok(())
    }

    /// Returns the count for `size`, zero if absent.
    pub fn count_of(&self, size: PackSize) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// Returns the number of items shipped.
    #[inline]
    pub fn total(&self) -> u64 {
        self.score.total()
    }

    /// Returns the number of physical packs shipped.
    #[inline]
    pub fn pack_count(&self) -> u64 {
        self.score.pack_count()
    }

    /// Returns the combined score.
    #[inline]
    pub fn score(&self) -> PackScore {
        self.score
    }

    /// Returns true if no packs are present.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Returns the number of distinct sizes used.
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Iterates `(size, count)` pairs, largest size first.
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.packs.iter().rev().map(|(&size, &count)| (size, count))
    }

    /// Returns the raw `size -> count` mapping.
    pub fn to_map(&self) -> BTreeMap<u64, u64> {
        self.packs
            .iter()
            .map(|(size, &count)| (size.get(), count))
            .collect()
    }
}

impl fmt::Debug for PackCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(size, count)| (size.get(), count)))
            .finish()
    }
}

impl fmt::Display for PackCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (size, count) in self.iter() {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{}x{}", count, size)?;
            first = false;
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PackCombination {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.packs.len()))?;
        for (size, count) in self.iter() {
            map.serialize_entry(&size.get(), &count)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PackCombination {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<u64, u64>::deserialize(deserializer)?;
        let counts = raw
            .into_iter()
            .map(|(size, count)| PackSize::new(size).map(|size| (size, count)))
            .collect::<Result<Vec<_>>>()
            .map_err(serde::de::Error::custom)?;
        PackCombination::from_counts(counts).map_err(serde::de::Error::custom)
    }
}
