//! Session-local working copy of a recommendation list.
//!
//! A `StyleBoard` starts out borrowing the catalog list and only clones it
//! on the first swap, so the base catalog is never touched.

use crate::catalog::{self, CatalogEntry, StyleEntry};
use crate::types::{Archetype, Category, Gender};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("slot {index} out of range (board has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Caller-held recommendation list supporting "swap this suggestion".
#[derive(Debug, Clone)]
pub struct StyleBoard {
    gender: Gender,
    archetype: Archetype,
    category: Category,
    entries: Cow<'static, [StyleEntry]>,
}

impl StyleBoard {
    pub fn new(gender: Gender, archetype: Archetype, category: Category) -> Self {
        Self {
            gender,
            archetype,
            category,
            entries: Cow::Borrowed(catalog::lookup(gender, archetype, category)),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// True once any slot has been swapped.
    pub fn is_customized(&self) -> bool {
        matches!(self.entries, Cow::Owned(_))
    }

    /// Replace the entry in `index` with `replacement`.
    pub fn swap(&mut self, index: usize, replacement: StyleEntry) -> Result<(), BoardError> {
        let len = self.entries.len();
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
        tracing::debug!(
            index,
            from = self.entries[index].name,
            to = replacement.name,
            "swapping style suggestion"
        );
        self.entries.to_mut()[index] = replacement;
        Ok(())
    }

    /// Drop all swaps and go back to the catalog list.
    pub fn reset(&mut self) {
        self.entries = Cow::Borrowed(catalog::lookup(self.gender, self.archetype, self.category));
    }

    /// Replacement candidates from every archetype in this board's category.
    pub fn candidates(&self, query: &str) -> Vec<CatalogEntry> {
        catalog::search(self.gender, self.category, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_borrows_catalog() {
        let board = StyleBoard::new(Gender::Female, Archetype::Sanguine, Category::Hair);
        assert!(!board.is_customized());
        assert_eq!(
            board.entries(),
            catalog::lookup(Gender::Female, Archetype::Sanguine, Category::Hair)
        );
    }

    #[test]
    fn test_swap_leaves_catalog_untouched() {
        let base = catalog::lookup(Gender::Male, Archetype::Choleric, Category::Glasses);
        let original_first = base[0];

        let mut board = StyleBoard::new(Gender::Male, Archetype::Choleric, Category::Glasses);
        let replacement = board.candidates("clubmaster")[0].entry;
        board.swap(0, replacement).unwrap();

        assert!(board.is_customized());
        assert_eq!(board.entries()[0], replacement);
        assert_eq!(board.entries()[1..], base[1..]);
        assert_eq!(
            catalog::lookup(Gender::Male, Archetype::Choleric, Category::Glasses)[0],
            original_first
        );

        // A second board for the same key still sees the base list.
        let fresh = StyleBoard::new(Gender::Male, Archetype::Choleric, Category::Glasses);
        assert_eq!(fresh.entries()[0], original_first);
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut board = StyleBoard::new(Gender::Female, Archetype::Melancholic, Category::Hair);
        let entry = board.entries()[0];
        let len = board.entries().len();
        assert_eq!(
            board.swap(len, entry),
            Err(BoardError::IndexOutOfRange { index: len, len })
        );
        assert!(!board.is_customized());
    }

    #[test]
    fn test_reset() {
        let mut board = StyleBoard::new(Gender::Female, Archetype::Phlegmatic, Category::Glasses);
        let other = board.candidates("browline")[0].entry;
        board.swap(2, other).unwrap();
        assert!(board.is_customized());

        board.reset();
        assert!(!board.is_customized());
        assert_eq!(
            board.entries(),
            catalog::lookup(Gender::Female, Archetype::Phlegmatic, Category::Glasses)
        );
    }

    #[test]
    fn test_candidates_span_all_archetypes() {
        let board = StyleBoard::new(Gender::Female, Archetype::Melancholic, Category::Hair);
        let all = board.candidates("");
        assert_eq!(all.len(), catalog::lookup_all(Gender::Female, Category::Hair).len());
        assert!(all.iter().any(|c| c.archetype == Archetype::Sanguine));
    }
}
