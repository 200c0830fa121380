//! Weighted tile counts and their seeded shuffle
//!
//! Counts are rounded up so the sequence always covers the pixel budget.
//! The realized share of each identifier is therefore never below its
//! requested share; leftover tiles after the shuffle are dropped.

use crate::allocation::sequence::TileSequence;
use crate::allocation::weights::WeightTable;
use crate::io::configuration::ALLOCATION_TOLERANCE;
use crate::io::error::{AllocationError, Result};
use crate::raster::TileLibrary;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Number of tiles per entry needed to cover `pixel_budget`, in table order
///
/// Each count is `ceil(proportion * pixel_budget)`, so the sum is at least the budget.
pub fn allocation_counts(table: &WeightTable, pixel_budget: usize) -> Vec<usize> {
    let budget = pixel_budget as f64;
    table
        .proportions()
        .into_iter()
        .map(|(_, proportion)| {
            let exact = proportion * budget;
            (exact - ALLOCATION_TOLERANCE).ceil().max(0.0) as usize
        })
        .collect()
}

/// Every identifier must resolve before any tile is handed out
fn ensure_resolvable(table: &WeightTable, library: &TileLibrary) -> Result<()> {
    for entry in table.entries() {
        if !library.contains(&entry.identifier) {
            return Err(AllocationError::UnresolvedIdentifier {
                identifier: entry.identifier.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Allocate a reproducible shuffled tile sequence covering `pixel_budget` pixels
///
/// Identifiers are laid out in table order according to [`allocation_counts`],
/// shuffled in full with a generator seeded from `seed`, then truncated to
/// exactly `pixel_budget` items. The same `(table, pixel_budget, seed)` always
/// yields the same sequence.
///
/// # Errors
///
/// Returns an error if:
/// - The table is empty
/// - An identifier has no tile in `library`
pub fn allocate(
    table: &WeightTable,
    library: &TileLibrary,
    pixel_budget: usize,
    seed: u64,
) -> Result<TileSequence> {
    if table.is_empty() {
        return Err(AllocationError::EmptyWeightTable.into());
    }
    ensure_resolvable(table, library)?;

    let counts = allocation_counts(table, pixel_budget);
    let total: usize = counts.iter().sum();

    let mut identifiers = Vec::with_capacity(total);
    for (entry, &count) in table.entries().iter().zip(&counts) {
        log::debug!("allocating {count} x '{}'", entry.identifier);
        identifiers.extend(std::iter::repeat_n(entry.identifier.clone(), count));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    identifiers.shuffle(&mut rng);

    if identifiers.len() > pixel_budget {
        log::debug!(
            "dropping {} surplus tiles beyond budget {pixel_budget}",
            identifiers.len() - pixel_budget
        );
        identifiers.truncate(pixel_budget);
    }

    Ok(TileSequence::new(identifiers))
}
