use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::{RandomAccessCursor, SortedCursor};

/// Marks a cursor as producing non-decreasing items
///
/// Debug builds verify the order once, at construction. Random access and
/// bidirectionality are kept from the wrapped cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssumeSorted<C> {
    inner: C,
}

impl<C> AssumeSorted<C>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    pub fn new(inner: C) -> Self {
        debug_assert!(
            is_non_decreasing(inner.clone()),
            "cursor marked as sorted yields a decreasing pair"
        );
        AssumeSorted { inner }
    }
}

impl<C> AssumeSorted<C> {
    pub fn into_inner(self) -> C {
        self.inner
    }
}

fn is_non_decreasing<C>(mut cursor: C) -> bool
where
    C: Cursor,
    C::Item: PartialOrd,
{
    if !cursor.more() {
        return true;
    }

    let mut previous = cursor.pull();
    while cursor.more() {
        let current = cursor.pull();
        if current < previous {
            return false;
        }
        previous = current;
    }
    true
}

impl<C: Cursor> Cursor for AssumeSorted<C> {
    type Item = C::Item;

    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;
    const SORTED: bool = true;

    fn more(&self) -> bool {
        self.inner.more()
    }

    fn item(&self) -> C::Item {
        self.inner.item()
    }

    fn step(&mut self) {
        self.inner.step();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn item_at(&self, index: usize) -> C::Item {
        self.inner.item_at(index)
    }

    fn forward(&mut self, count: usize) {
        self.inner.forward(count);
    }

    fn end(&self) -> Self {
        AssumeSorted {
            inner: self.inner.end(),
        }
    }
}

impl<C: Bidirectional> Bidirectional for AssumeSorted<C> {
    fn prev(&mut self) {
        self.inner.prev();
    }

    fn rewind(&mut self, count: usize) {
        self.inner.rewind(count);
    }
}

impl<C: Cursor> SortedCursor for AssumeSorted<C> {}

impl<C: RandomAccessCursor> RandomAccessCursor for AssumeSorted<C> {}

crate::cursor_operators!(impl[C,] AssumeSorted<C>, bidirectional);

/// Extension trait to mark cursors as sorted
pub trait SortExt: Cursor {
    fn assume_sorted(self) -> AssumeSorted<Self>
    where
        Self::Item: PartialOrd,
    {
        AssumeSorted::new(self)
    }
}

impl<C: Cursor> SortExt for C {}

/// Binary search for `key` in a sorted random-access cursor
///
/// Returns the offset of a matching item from the cursor's current position.
/// Only cursors that are both [`RandomAccessCursor`] and [`SortedCursor`]
/// are accepted.
pub fn bsearch<C, K>(cursor: &C, key: &K) -> Option<usize>
where
    C: RandomAccessCursor + SortedCursor,
    C::Item: Borrow<K>,
    K: Ord + ?Sized,
{
    let mut low = 0;
    let mut high = cursor.len();

    while low < high {
        let middle = low + (high - low) / 2;
        let item = cursor.item_at(middle);
        match <C::Item as Borrow<K>>::borrow(&item).cmp(key) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Some(middle),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterable::cursor;
    use crate::{enumerate, filter, is_sorted};

    #[test]
    fn test_bsearch_over_sorted_slice() {
        let glyph_ids = [3u16, 8, 15, 42, 77, 300];
        let sorted = cursor(&glyph_ids).assume_sorted();

        assert_eq!(bsearch(&sorted, &42u16), Some(3));
        assert_eq!(bsearch(&sorted, &3u16), Some(0));
        assert_eq!(bsearch(&sorted, &300u16), Some(5));
        assert_eq!(bsearch(&sorted, &4u16), None);
        assert_eq!(bsearch(&sorted, &1000u16), None);
    }

    #[test]
    fn test_bsearch_is_relative_to_position() {
        let glyph_ids = [1u16, 2, 3, 4];
        let sorted = cursor(&glyph_ids).assume_sorted() + 2;
        assert_eq!(bsearch(&sorted, &4u16), Some(1));
        assert_eq!(bsearch(&sorted, &1u16), None);
    }

    #[test]
    fn test_bsearch_on_enumerate() {
        let names = ["notdef", "space", "a"];
        let entries = enumerate(&names);
        assert!(is_sorted::<crate::Enumerate<crate::SliceCursor<'_, &str>>>());

        assert_eq!(bsearch(&entries, &(1usize, &"space")), Some(1));
        assert_eq!(bsearch(&entries, &(2usize, &"space")), None);
    }

    #[test]
    fn test_flags() {
        let data = [1, 2, 2, 5];
        let sorted = cursor(&data).assume_sorted();
        assert!(is_sorted::<AssumeSorted<crate::SliceCursor<'_, i32>>>());
        assert_eq!(sorted.len(), 4);

        let filtered = sorted | filter(|x: &i32| *x > 1);
        assert_eq!(filtered.walk().count(), 3);
    }

    #[test]
    #[should_panic(expected = "decreasing pair")]
    #[cfg(debug_assertions)]
    fn test_unsorted_input_is_caught_in_debug() {
        let data = [3, 1, 2];
        let _ = cursor(&data).assume_sorted();
    }
}
