use std::cell::Cell;
use std::slice;

use derive_where::derive_where;

use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::RandomAccessCursor;

/// Random-access cursor over a borrowed slice
///
/// Items are `&'a T`. Over a slice of [`Cell`]s (see [`CellCursor`]) the items
/// are writable handles, which is how pipelines overwrite their source.
#[derive_where(Clone, Copy)]
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    /// Index of the current item, `data.len()` once exhausted
    position: usize,
}

/// Writable cursor over a mutable slice, yielding `&'a Cell<T>`
pub type CellCursor<'a, T> = SliceCursor<'a, Cell<T>>;

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor { data, position: 0 }
    }

    /// Build a cursor from a raw `(pointer, length)` pair
    ///
    /// # Safety
    ///
    /// Same contract as [`std::slice::from_raw_parts`]: `ptr` must be non-null,
    /// aligned and valid for reads of `len` consecutive values of `T` for
    /// `'a`, and the memory must not be mutated through another path while the
    /// cursor is alive.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        // SAFETY: forwarded verbatim from the caller's contract
        let data = unsafe { slice::from_raw_parts(ptr, len) };
        SliceCursor::new(data)
    }

    /// Index of the current item within the source slice
    pub fn position(&self) -> usize {
        self.position
    }

    /// The items not yet visited
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.position..]
    }

    /// The whole source slice, regardless of position
    pub fn source(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T> SliceCursor<'a, Cell<T>> {
    /// Writable cursor over a mutable slice
    ///
    /// The exclusive borrow is held for `'a`, so no other path can observe the
    /// slice while the cursor and its copies are alive.
    pub fn new_mut(data: &'a mut [T]) -> Self {
        SliceCursor::new(Cell::from_mut(data).as_slice_of_cells())
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn more(&self) -> bool {
        self.position < self.data.len()
    }

    #[inline]
    fn item(&self) -> &'a T {
        &self.data[self.position]
    }

    #[inline]
    fn step(&mut self) {
        self.forward(1);
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len() - self.position
    }

    #[inline]
    fn item_at(&self, index: usize) -> &'a T {
        &self.data[self.position + index]
    }

    #[inline]
    fn forward(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.data.len());
    }
}

impl<'a, T> Bidirectional for SliceCursor<'a, T> {
    #[inline]
    fn prev(&mut self) {
        self.rewind(1);
    }

    #[inline]
    fn rewind(&mut self, count: usize) {
        self.position = self.position.saturating_sub(count);
    }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.as_ptr() == other.data.as_ptr()
            && self.data.len() == other.data.len()
            && self.position == other.position
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

crate::cursor_operators!(impl['a, T,] SliceCursor<'a, T>, bidirectional);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = [10u32, 20, 30];
        let mut cursor = SliceCursor::new(&data);

        assert!(cursor.more());
        assert_eq!(*cursor.item(), 10);
        assert_eq!(cursor.len(), 3);

        cursor.step();
        assert_eq!(*cursor.item(), 20);
        assert_eq!(*cursor.item_at(1), 30);
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.remaining(), &[20, 30]);
        assert_eq!(cursor.source(), &[10, 20, 30]);
    }

    #[test]
    fn test_empty_slice() {
        let data: [u8; 0] = [];
        let cursor = SliceCursor::new(&data);

        assert!(!cursor.more());
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor, cursor.end());
    }

    #[test]
    fn test_forward_and_rewind_clamp() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::new(&data);

        cursor.forward(10);
        assert_eq!(cursor.position(), 3);
        assert!(!cursor.more());

        cursor.rewind(10);
        assert_eq!(cursor.position(), 0);

        cursor.prev();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_equality_tracks_source_and_position() {
        let data = [1, 2, 3];
        let other = [1, 2, 3];

        let a = SliceCursor::new(&data);
        let b = SliceCursor::new(&data);
        let c = SliceCursor::new(&other);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a + 1);
        assert_eq!(a + 3, a.end());
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = SliceCursor::new(&data);

        let saved_at_5 = cursor;
        let cursor = cursor + 1;
        assert_eq!(*cursor.item(), 10);
        assert_eq!(*saved_at_5.item(), 5);

        let saved_at_10 = cursor;
        let cursor = cursor + 1;
        assert_eq!(*cursor.item(), 15);
        assert_eq!(*saved_at_10.item(), 10);
        assert_eq!(*(saved_at_5 + 1).item(), 10);
    }

    #[test]
    fn test_debug_shows_data_and_position() {
        let data = [1u8, 2];
        let cursor = SliceCursor::new(&data) + 1;
        assert_eq!(format!("{cursor:?}"), "SliceCursor { data: [1, 2], position: 1 }");
    }

    #[test]
    fn test_from_raw_parts() {
        let data = vec![7u16, 8, 9];
        let cursor = unsafe { SliceCursor::from_raw_parts(data.as_ptr(), data.len()) };

        assert_eq!(cursor.len(), 3);
        assert_eq!(*cursor.item_at(2), 9);
        assert_eq!(cursor, SliceCursor::new(&data));
    }

    #[test]
    fn test_writable_cells() {
        let mut data = [1i32, 2, 3];
        let mut cursor = SliceCursor::new_mut(&mut data);

        cursor.item().set(10);
        cursor.step();
        cursor.push(20i32);
        assert_eq!(cursor.item().get(), 3);
        assert_eq!(data, [10, 20, 3]);
    }

    #[test]
    fn test_for_loop() {
        let data = ['a', 'b', 'c'];
        let mut seen = String::new();
        for letter in SliceCursor::new(&data) {
            seen.push(*letter);
        }
        assert_eq!(seen, "abc");
    }
}
