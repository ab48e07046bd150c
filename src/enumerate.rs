use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::{RandomAccessCursor, SortedCursor};
use crate::iterable::Iterable;

/// Cursor adaptor pairing each item with its 0-based position
///
/// The positions count up by one, so an enumeration is always sorted (by
/// position first) regardless of the source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerate<C> {
    index: usize,
    inner: C,
}

impl<C> Enumerate<C> {
    pub fn new(inner: C) -> Self {
        Enumerate { index: 0, inner }
    }

    /// Position of the current item
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Enumerate<C> {
    type Item = (usize, C::Item);

    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;
    const SORTED: bool = true;

    #[inline]
    fn more(&self) -> bool {
        self.inner.more()
    }

    #[inline]
    fn item(&self) -> Self::Item {
        (self.index, self.inner.item())
    }

    #[inline]
    fn step(&mut self) {
        self.index += 1;
        self.inner.step();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn item_at(&self, index: usize) -> Self::Item {
        (self.index + index, self.inner.item_at(index))
    }

    fn forward(&mut self, count: usize) {
        if !C::RANDOM_ACCESS {
            for _ in 0..count {
                if !self.more() {
                    break;
                }
                self.step();
            }
            return;
        }

        // The index stops where a clamping source stops
        let count = count.min(self.inner.len());
        self.index += count;
        self.inner.forward(count);
    }
}

impl<C: Bidirectional> Bidirectional for Enumerate<C> {
    fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.inner.prev();
        }
    }

    fn rewind(&mut self, count: usize) {
        let count = count.min(self.index);
        self.index -= count;
        self.inner.rewind(count);
    }
}

impl<C: Cursor> SortedCursor for Enumerate<C> {}

impl<C: RandomAccessCursor> RandomAccessCursor for Enumerate<C> {}

crate::cursor_operators!(impl[C,] Enumerate<C>, bidirectional);

/// Pair each item of an iterable with its position
pub fn enumerate<I: Iterable>(iterable: I) -> Enumerate<I::Cursor> {
    Enumerate::new(iterable.into_cursor())
}

/// Extension trait to add .enumerate() method support for cursors
pub trait EnumerateExt: Cursor {
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }
}

/// Implement EnumerateExt for all cursors
impl<C: Cursor> EnumerateExt for C {}
