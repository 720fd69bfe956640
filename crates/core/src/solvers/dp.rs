//! Dynamic Programming Solver

use smallvec::{SmallVec, smallvec};

use crate::{
    packing::{PackAllocation, Packing},
    packs::PackSizes,
    solvers::{Solver, SolverError},
};

/// Marks a total that no combination of packs can reach exactly.
const UNREACHABLE: u32 = u32::MAX;

/// Highest total the tables may span, whatever the caller's own limits.
///
/// Each total costs eight bytes across both tables, so this caps a solve at roughly 160 MB.
pub const MAX_TABLE_TOTAL: u64 = 20_000_000;

/// Solver using dynamic programming over every total up to one largest pack past the order.
///
/// An order is never worth overshooting by a full largest pack or more: dropping that pack
/// would still cover the order with fewer items. So the tables only span
/// `0..=order_quantity + largest`, and the first reachable total at or after the order
/// quantity is the fewest items that can be shipped. The pack count table holds the fewest
/// packs for each exact total, which settles the second objective.
///
/// When several combinations ship the same items in the same number of packs, larger pack
/// sizes win: the returned packing is the greatest such combination when its packs are
/// listed largest first.
#[derive(Debug)]
pub struct DynamicProgrammingSolver;

impl Solver for DynamicProgrammingSolver {
    fn solve_pack_sizes(
        order_quantity: i64,
        pack_sizes: &PackSizes,
    ) -> Result<Packing, SolverError> {
        let order = u64::try_from(order_quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(SolverError::InvalidOrderQuantity { order_quantity })?;

        let largest = pack_sizes
            .largest()
            .ok_or(SolverError::NoPacksAvailable)?
            .get();

        let limit = table_limit(order, largest)?;

        let sizes = pack_sizes
            .iter()
            .map(|size| usize::try_from(size.get()))
            .collect::<Result<SmallVec<[usize; 8]>, _>>()
            .map_err(|_overflow| SolverError::InvariantViolation {
                message: "pack sizes are bounded by the table limit",
            })?;

        let table = PackTable::build(&sizes, limit)?;

        let start = usize::try_from(order).map_err(|_overflow| SolverError::InvariantViolation {
            message: "order quantity is bounded by the table limit",
        })?;

        let total = table
            .first_reachable_from(start)
            .ok_or(SolverError::Unfulfillable {
                order_quantity: order,
            })?;

        let counts = table.reconstruct(total, &sizes)?;

        Ok(Packing::new(
            order,
            pack_sizes
                .iter()
                .zip(counts)
                .map(|(size, quantity)| PackAllocation { size, quantity }),
        ))
    }
}

/// Highest total the tables need to cover.
fn table_limit(order: u64, largest: u64) -> Result<usize, SolverError> {
    order
        .checked_add(largest)
        .filter(|limit| *limit <= MAX_TABLE_TOTAL)
        .and_then(|limit| usize::try_from(limit).ok())
        .ok_or(SolverError::OrderTooLarge {
            order_quantity: order,
            largest,
        })
}

/// Fewest packs for each exact total, with the pack size chosen last to reach it.
#[derive(Debug)]
struct PackTable {
    min_packs: Vec<u32>,
    last_size: Vec<u32>,
}

impl PackTable {
    /// Fill both tables for totals `0..=limit`.
    ///
    /// Sizes must be ordered largest first. Only a strictly smaller pack count replaces the
    /// current best, so ties go to the larger size.
    fn build(sizes: &[usize], limit: usize) -> Result<Self, SolverError> {
        let len = limit.checked_add(1).ok_or(SolverError::InvariantViolation {
            message: "table limit is bounded by MAX_TABLE_TOTAL",
        })?;

        let mut min_packs: Vec<u32> = Vec::with_capacity(len);
        let mut last_size: Vec<u32> = Vec::with_capacity(len);

        min_packs.push(0);
        last_size.push(UNREACHABLE);

        for total in 1..=limit {
            let mut best = UNREACHABLE;
            let mut best_size = UNREACHABLE;

            for (index, &size) in sizes.iter().enumerate() {
                let Some(rest) = total.checked_sub(size) else {
                    continue;
                };

                let packs = min_packs.get(rest).copied().unwrap_or(UNREACHABLE);

                if packs == UNREACHABLE || packs.saturating_add(1) >= best {
                    continue;
                }

                best = packs.saturating_add(1);
                best_size =
                    u32::try_from(index).map_err(|_overflow| SolverError::InvariantViolation {
                        message: "distinct pack sizes are bounded by the table limit",
                    })?;
            }

            min_packs.push(best);
            last_size.push(best_size);
        }

        Ok(Self {
            min_packs,
            last_size,
        })
    }

    /// The smallest reachable total at or above `start`.
    fn first_reachable_from(&self, start: usize) -> Option<usize> {
        self.min_packs
            .get(start..)?
            .iter()
            .position(|&packs| packs != UNREACHABLE)
            .map(|offset| start + offset)
    }

    /// Walk back from `total` to zero, counting the packs used of each size.
    fn reconstruct(
        &self,
        total: usize,
        sizes: &[usize],
    ) -> Result<SmallVec<[u64; 8]>, SolverError> {
        let mut counts: SmallVec<[u64; 8]> = smallvec![0; sizes.len()];
        let mut remaining = total;

        while remaining > 0 {
            let index = self
                .last_size
                .get(remaining)
                .copied()
                .filter(|&index| index != UNREACHABLE)
                .and_then(|index| usize::try_from(index).ok())
                .ok_or(SolverError::InvariantViolation {
                    message: "every reachable total records the pack size that reached it",
                })?;

            let (Some(&size), Some(count)) = (sizes.get(index), counts.get_mut(index)) else {
                return Err(SolverError::InvariantViolation {
                    message: "recorded pack size index is within the pack sizes",
                });
            };

            *count += 1;
            remaining -= size;
        }

        Ok(counts)
    }
}
