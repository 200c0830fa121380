//! Weight tables describing how often each tile identifier should appear

use crate::io::error::{AllocationError, Result};
use std::collections::{HashMap, HashSet};

/// Relative frequency of one tile identifier
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    /// Tile identifier, resolved against a tile library
    pub identifier: String,
    /// Non-negative relative weight
    pub weight: f64,
}

impl WeightEntry {
    /// Create a weight entry
    pub fn new(identifier: impl Into<String>, weight: f64) -> Self {
        Self {
            identifier: identifier.into(),
            weight,
        }
    }
}

/// Validated collection of weight entries
///
/// Only entries with a finite positive weight are kept, identifiers are unique
/// and the total weight is positive. Entry order is preserved because it fixes
/// the pre-shuffle layout of a tile sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
    total: f64,
}

impl WeightTable {
    /// Validate entries into a weight table
    ///
    /// Entries whose weight is zero, negative or not finite are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An identifier appears twice
    /// - No entry with positive weight remains
    pub fn new(entries: Vec<WeightEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.identifier.clone()) {
                return Err(AllocationError::DuplicateIdentifier {
                    identifier: entry.identifier,
                }
                .into());
            }
            if entry.weight.is_finite() && entry.weight > 0.0 {
                kept.push(entry);
            } else {
                log::warn!(
                    "dropping '{}' with unusable weight {}",
                    entry.identifier,
                    entry.weight
                );
            }
        }

        let total: f64 = kept.iter().map(|entry| entry.weight).sum();
        if kept.is_empty() || total <= 0.0 || !total.is_finite() {
            return Err(AllocationError::EmptyWeightTable.into());
        }

        Ok(Self {
            entries: kept,
            total,
        })
    }

    /// Build a table from raw occurrence counts
    ///
    /// Repeated identifiers are summed, keeping the position of their first
    /// appearance, so per-level tallies can be fed in directly.
    ///
    /// # Errors
    ///
    /// Returns an error if no identifier has a positive total count
    pub fn from_counts<I, S>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, u64> = HashMap::new();

        for (identifier, count) in counts {
            let identifier = identifier.into();
            match totals.get_mut(&identifier) {
                Some(total) => *total = total.saturating_add(count),
                None => {
                    totals.insert(identifier.clone(), count);
                    order.push(identifier);
                }
            }
        }

        let entries = order
            .into_iter()
            .map(|identifier| {
                let count = totals.get(&identifier).copied().unwrap_or(0);
                WeightEntry::new(identifier, count as f64)
            })
            .collect();
        Self::new(entries)
    }

    /// Entries in table order
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights
    pub const fn total_weight(&self) -> f64 {
        self.total
    }

    /// Normalized proportion of each entry, in table order
    pub fn proportions(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.identifier.as_str(), entry.weight / self.total))
            .collect()
    }
}
