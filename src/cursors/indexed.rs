use derive_where::derive_where;

use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::RandomAccessCursor;

/// A sequence addressed by index
///
/// Implementing [`count`](Indexed::count) and [`get`](Indexed::get) is enough
/// to obtain a random-access, bidirectional [`IndexedCursor`] with the whole
/// combinator surface.
pub trait Indexed {
    type Item;

    /// Number of items in the sequence
    fn count(&self) -> usize;

    /// The item at `index`, for `index < count()`
    fn get(&self, index: usize) -> Self::Item;

    /// A cursor over the whole sequence
    fn cursor(&self) -> IndexedCursor<'_, Self> {
        IndexedCursor::new(self)
    }
}

/// Cursor over any [`Indexed`] source
#[derive_where(Clone, Copy)]
#[derive(Debug)]
pub struct IndexedCursor<'a, S: ?Sized> {
    source: &'a S,
    position: usize,
    count: usize,
}

impl<'a, S: Indexed + ?Sized> IndexedCursor<'a, S> {
    pub fn new(source: &'a S) -> Self {
        IndexedCursor {
            source,
            position: 0,
            count: source.count(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, S: Indexed + ?Sized> Cursor for IndexedCursor<'a, S> {
    type Item = S::Item;

    const RANDOM_ACCESS: bool = true;

    fn more(&self) -> bool {
        self.position < self.count
    }

    fn item(&self) -> S::Item {
        self.source.get(self.position)
    }

    fn step(&mut self) {
        self.forward(1);
    }

    fn len(&self) -> usize {
        self.count - self.position
    }

    fn item_at(&self, index: usize) -> S::Item {
        self.source.get(self.position + index)
    }

    fn forward(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.count);
    }
}

impl<'a, S: Indexed + ?Sized> Bidirectional for IndexedCursor<'a, S> {
    fn prev(&mut self) {
        self.rewind(1);
    }

    fn rewind(&mut self, count: usize) {
        self.position = self.position.saturating_sub(count);
    }
}

impl<'a, S: Indexed + ?Sized> RandomAccessCursor for IndexedCursor<'a, S> {}

impl<'a, S: ?Sized> PartialEq for IndexedCursor<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.source, other.source) && self.position == other.position
    }
}

impl<'a, S: ?Sized> Eq for IndexedCursor<'a, S> {}

crate::cursor_operators!(impl['a, S: Indexed + ?Sized,] IndexedCursor<'a, S>, bidirectional);
