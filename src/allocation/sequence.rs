//! Single-use ordered tile identifiers with an explicit cursor

use std::collections::BTreeMap;

/// Ordered identifiers consumed front to back exactly once
///
/// The cursor only moves forward; a sequence that has been drawn from cannot
/// be rewound, so a second mosaic needs a freshly allocated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSequence {
    identifiers: Vec<String>,
    cursor: usize,
}

impl TileSequence {
    /// Wrap identifiers in a fresh sequence
    pub const fn new(identifiers: Vec<String>) -> Self {
        Self {
            identifiers,
            cursor: 0,
        }
    }

    /// Total number of identifiers, consumed or not
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether the sequence holds no identifiers at all
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Identifiers not yet drawn
    pub fn remaining(&self) -> usize {
        self.identifiers.len().saturating_sub(self.cursor)
    }

    /// Identifiers already drawn
    pub const fn consumed(&self) -> usize {
        self.cursor
    }

    /// Whether every identifier has been drawn
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Full sequence regardless of the cursor
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Draw the next identifier
    pub fn next_identifier(&mut self) -> Option<&str> {
        let identifier = self.identifiers.get(self.cursor)?;
        self.cursor += 1;
        Some(identifier.as_str())
    }

    /// Look at the next `count` identifiers without drawing them
    pub fn peek(&self, count: usize) -> Option<&[String]> {
        let end = self.cursor.checked_add(count)?;
        self.identifiers.get(self.cursor..end)
    }

    /// Draw `count` identifiers at once
    ///
    /// Returns `None` and leaves the cursor untouched when fewer than `count` remain.
    pub fn take(&mut self, count: usize) -> Option<&[String]> {
        let end = self.cursor.checked_add(count)?;
        let drawn = self.identifiers.get(self.cursor..end)?;
        self.cursor = end;
        Some(drawn)
    }

    /// Mark every identifier as drawn, discarding any leftovers
    pub fn exhaust(&mut self) {
        self.cursor = self.identifiers.len();
    }

    /// Occurrences of each identifier over the whole sequence
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for identifier in &self.identifiers {
            *counts.entry(identifier.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
