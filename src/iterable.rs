use crate::cursor::Cursor;
use crate::cursors::{CellCursor, SliceCursor};

/// Anything that can be turned into a [`Cursor`]
///
/// Every cursor is iterable as itself. Shared slices, arrays and vectors
/// produce read-only [`SliceCursor`]s; mutable ones produce writable
/// [`CellCursor`]s whose items can be overwritten through the pipeline.
pub trait Iterable {
    type Cursor: Cursor;

    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> Iterable for C {
    type Cursor = C;

    fn into_cursor(self) -> C {
        self
    }
}

impl<'a, T> Iterable for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new(self)
    }
}

impl<'a, T, const N: usize> Iterable for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new(self)
    }
}

impl<'a, T> Iterable for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new(self)
    }
}

impl<'a, T> Iterable for &'a mut [T] {
    type Cursor = CellCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new_mut(self)
    }
}

impl<'a, T, const N: usize> Iterable for &'a mut [T; N] {
    type Cursor = CellCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new_mut(self)
    }
}

impl<'a, T> Iterable for &'a mut Vec<T> {
    type Cursor = CellCursor<'a, T>;

    fn into_cursor(self) -> Self::Cursor {
        SliceCursor::new_mut(self)
    }
}

/// Convert an iterable into its cursor
pub fn cursor<I: Iterable>(iterable: I) -> I::Cursor {
    iterable.into_cursor()
}
