//! Packing

use smallvec::SmallVec;

use crate::packs::PackSize;

/// A number of packs of a single size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackAllocation {
    /// Pack size
    pub size: PackSize,

    /// Number of packs of this size, always greater than zero
    pub quantity: u64,
}

impl PackAllocation {
    /// Number of items shipped by this allocation.
    pub fn items(&self) -> u64 {
        self.size.get().saturating_mul(self.quantity)
    }
}

/// Packing
///
/// The packs chosen to fulfil an order. Allocations are ordered largest pack size first and
/// sizes that are not used do not appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    order_quantity: u64,
    allocations: SmallVec<[PackAllocation; 8]>,
}

impl Packing {
    /// Create a packing for an order from its allocations.
    ///
    /// Zero-quantity allocations are dropped and the remainder sorted largest size first.
    pub fn new(
        order_quantity: u64,
        allocations: impl IntoIterator<Item = PackAllocation>,
    ) -> Self {
        let mut allocations: SmallVec<[PackAllocation; 8]> = allocations
            .into_iter()
            .filter(|allocation| allocation.quantity > 0)
            .collect();

        allocations.sort_unstable_by(|a, b| b.size.cmp(&a.size));

        Self {
            order_quantity,
            allocations,
        }
    }

    /// The quantity that was ordered.
    pub fn order_quantity(&self) -> u64 {
        self.order_quantity
    }

    /// Iterate over the allocations, largest pack size first.
    pub fn iter(&self) -> impl Iterator<Item = &PackAllocation> {
        self.allocations.iter()
    }

    /// Total number of items shipped.
    pub fn total_items(&self) -> u64 {
        self.allocations.iter().map(PackAllocation::items).sum()
    }

    /// Total number of packs shipped.
    pub fn total_packs(&self) -> u64 {
        self.allocations
            .iter()
            .map(|allocation| allocation.quantity)
            .sum()
    }

    /// Items shipped beyond the ordered quantity.
    pub fn surplus(&self) -> u64 {
        self.total_items().saturating_sub(self.order_quantity)
    }

    /// Number of distinct pack sizes used.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Whether no packs are shipped.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
