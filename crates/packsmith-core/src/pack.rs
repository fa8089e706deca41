//! Pack sizes and order quantities.

use std::fmt;

use crate::error::{PackError, Result};

/// A positive number of items shipped together as one physical pack.
///
/// # Examples
///
/// ```
/// use packsmith_core::{PackError, PackSize};
///
/// let size = PackSize::new(250).unwrap();
/// assert_eq!(size.get(), 250);
///
/// assert_eq!(PackSize::new(0), Err(PackError::InvalidPackSize));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct PackSize(u64);

impl PackSize {
    /// Creates a pack size, rejecting zero.
    #[inline]
    pub const fn new(size: u64) -> Result<Self> {
        if size == 0 {
            return Err(PackError::InvalidPackSize);
        }
        Ok(PackSize(size))
    }

    /// Returns the number of items in one pack.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for PackSize {
    type Error = PackError;

    fn try_from(size: u64) -> Result<Self> {
        PackSize::new(size)
    }
}

impl From<PackSize> for u64 {
    fn from(size: PackSize) -> u64 {
        size.0
    }
}

impl fmt::Debug for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackSize({})", self.0)
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive number of items requested by an order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct OrderQuantity(u64);

impl OrderQuantity {
    /// Creates an order quantity, rejecting zero.
    #[inline]
    pub const fn new(quantity: u64) -> Result<Self> {
        if quantity == 0 {
            return Err(PackError::InvalidQuantity);
        }
        Ok(OrderQuantity(quantity))
    }

    /// Returns the number of items requested.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for OrderQuantity {
    type Error = PackError;

    fn try_from(quantity: u64) -> Result<Self> {
        OrderQuantity::new(quantity)
    }
}

impl From<OrderQuantity> for u64 {
    fn from(quantity: OrderQuantity) -> u64 {
        quantity.0
    }
}

impl fmt::Display for OrderQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of allowed pack sizes, sorted largest first.
///
/// Construction sorts descending and drops duplicates, so every consumer
/// sees the same canonical order. The set is never empty.
///
/// # Examples
///
/// ```
/// use packsmith_core::PackSizes;
///
/// let sizes = PackSizes::new([500, 250, 5000, 250, 1000]).unwrap();
/// assert_eq!(sizes.to_vec(), vec![5000, 1000, 500, 250]);
/// assert_eq!(sizes.largest().get(), 5000);
/// assert_eq!(sizes.smallest().get(), 250);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackSizes {
    sizes: Vec<PackSize>,
}

impl PackSizes {
    /// Builds the set from raw sizes in any order.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::EmptyPackSizes`] for empty input and
    /// [`PackError::InvalidPackSize`] if any size is zero.
    pub fn new(sizes: impl IntoIterator<Item = u64>) -> Result<Self> {
        let mut sizes = sizes
            .into_iter()
            .map(PackSize::new)
            .collect::<Result<Vec<_>>>()?;
        if sizes.is_empty() {
            return Err(PackError::EmptyPackSizes);
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        Ok(Self { sizes })
    }

    /// Returns the largest pack size.
    #[inline]
    pub fn largest(&self) -> PackSize {
        self.sizes[0]
    }

    /// Returns the smallest pack size.
    #[inline]
    pub fn smallest(&self) -> PackSize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Returns the sizes, largest first.
    #[inline]
    pub fn as_slice(&self) -> &[PackSize] {
        &self.sizes
    }

    /// Returns the number of distinct sizes.
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns false; a constructed set always holds at least one size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the size holding exactly `items`, if configured.
    pub fn find(&self, items: u64) -> Option<PackSize> {
        self.sizes
            .binary_search_by(|size| items.cmp(&size.get()))
            .ok()
            .map(|index| self.sizes[index])
    }

    /// Returns true if `items` is exactly one of the sizes.
    pub fn contains(&self, items: u64) -> bool {
        self.find(items).is_some()
    }

    /// Iterates the sizes, largest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = PackSize> + ExactSizeIterator + '_ {
        self.sizes.iter().copied()
    }

    /// Returns the raw sizes, largest first.
    pub fn to_vec(&self) -> Vec<u64> {
        self.sizes.iter().map(|s| s.get()).collect()
    }
}

impl fmt::Debug for PackSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sizes.iter().map(|s| s.get())).finish()
    }
}

impl TryFrom<Vec<u64>> for PackSizes {
    type Error = PackError;

    fn try_from(sizes: Vec<u64>) -> Result<Self> {
        PackSizes::new(sizes)
    }
}
