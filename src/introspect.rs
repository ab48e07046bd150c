//! Compile-time capability predicates
//!
//! Capabilities are expressed as trait bounds, so asking a cursor for
//! something it cannot do is a type error rather than a runtime failure:
//!
//! - is-iterable: [`Iterable`](crate::Iterable)
//! - is-iterator-of: [`CursorOf`]
//! - is-random-access: [`RandomAccessCursor`]
//! - is-sorted: [`SortedCursor`]
//!
//! The marker traits mirror the [`Cursor::RANDOM_ACCESS`] and
//! [`Cursor::SORTED`] flags: a cursor type implements a marker exactly when
//! the matching flag is `true`.

use std::borrow::Borrow;

use crate::cursor::Cursor;

/// Cursors with O(1) `len`, `item_at` and `forward`
pub trait RandomAccessCursor: Cursor {}

/// Cursors whose items come in a known monotonic order
pub trait SortedCursor: Cursor {}

/// Cursors whose items can be viewed as a `T`
///
/// Holds for items of type `T`, `&T` and `&mut T`.
pub trait CursorOf<T: ?Sized>: Cursor {}

impl<C, T: ?Sized> CursorOf<T> for C
where
    C: Cursor,
    C::Item: Borrow<T>,
{
}

/// Value of the random-access flag of `C`
pub const fn is_random_access<C: Cursor>() -> bool {
    C::RANDOM_ACCESS
}

/// Value of the sorted flag of `C`
pub const fn is_sorted<C: Cursor>() -> bool {
    C::SORTED
}
