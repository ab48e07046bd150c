use std::iter::FusedIterator;

use crate::cursor::Cursor;

/// Something a cursor can be piped into
///
/// Adaptor factories produce a new cursor wrapping the one they are fed;
/// terminal stages drive the cursor to completion and return a result. Any
/// `FnOnce(C) -> R` is a stage as well.
pub trait Stage<C> {
    type Output;

    fn feed(self, cursor: C) -> Self::Output;
}

impl<C, R, F> Stage<C> for F
where
    F: FnOnce(C) -> R,
{
    type Output = R;

    fn feed(self, cursor: C) -> R {
        self(cursor)
    }
}

/// Bridge from a [`Cursor`] to [`Iterator`]
///
/// Produced by [`Cursor::walk`] and by `IntoIterator` on every cursor type of
/// this crate, so cursors work in `for` loops and with `collect`.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    cursor: C,
}

impl<C> Walk<C> {
    pub fn new(cursor: C) -> Self {
        Walk { cursor }
    }

    /// Recover the cursor at its current position
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.more() {
            Some(self.cursor.pull())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if C::RANDOM_ACCESS {
            let len = self.cursor.len();
            (len, Some(len))
        } else if self.cursor.more() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

/// Implement the cursor operator surface for a cursor type
///
/// Generates `|` (pipe into a [`Stage`]), `+=`/`+` (forward), `<<` (overwrite
/// and advance) and `IntoIterator`. Adding `, bidirectional` also generates
/// `-=`/`-` (rewind) for types that implement
/// [`Bidirectional`](crate::Bidirectional). Generic parameters go in the
/// brackets, each followed by a comma:
///
/// ```
/// use cursorcomb::{Cursor, cursor_operators};
///
/// #[derive(Clone)]
/// struct Ones<'a>(&'a [u8]);
///
/// impl<'a> Cursor for Ones<'a> {
///     type Item = u8;
///     fn more(&self) -> bool { !self.0.is_empty() }
///     fn item(&self) -> u8 { 1 }
///     fn step(&mut self) { self.0 = &self.0[1..]; }
/// }
///
/// cursor_operators!(impl['a,] Ones<'a>);
///
/// let bytes = [7, 8, 9];
/// let total: u8 = Ones(&bytes).into_iter().sum();
/// assert_eq!(total, 3);
/// ```
#[macro_export]
macro_rules! cursor_operators {
    (impl[$($generics:tt)*] $ty:ty, bidirectional) => {
        $crate::cursor_operators!(impl[$($generics)*] $ty);

        impl<$($generics)*> ::core::ops::SubAssign<usize> for $ty
        where
            $ty: $crate::Bidirectional,
        {
            #[inline]
            fn sub_assign(&mut self, count: usize) {
                $crate::Bidirectional::rewind(self, count)
            }
        }

        impl<$($generics)*> ::core::ops::Sub<usize> for $ty
        where
            $ty: $crate::Bidirectional,
        {
            type Output = $ty;

            #[inline]
            fn sub(self, count: usize) -> $ty {
                $crate::Bidirectional::rewound(&self, count)
            }
        }
    };
    (impl[$($generics:tt)*] $ty:ty) => {
        impl<$($generics)* __Stage> ::core::ops::BitOr<__Stage> for $ty
        where
            __Stage: $crate::Stage<$ty>,
        {
            type Output = <__Stage as $crate::Stage<$ty>>::Output;

            #[inline]
            fn bitor(self, stage: __Stage) -> Self::Output {
                $crate::Stage::feed(stage, self)
            }
        }

        impl<$($generics)*> ::core::ops::AddAssign<usize> for $ty
        where
            $ty: $crate::Cursor,
        {
            #[inline]
            fn add_assign(&mut self, count: usize) {
                $crate::Cursor::forward(self, count)
            }
        }

        impl<$($generics)*> ::core::ops::Add<usize> for $ty
        where
            $ty: $crate::Cursor,
        {
            type Output = $ty;

            #[inline]
            fn add(self, count: usize) -> $ty {
                $crate::Cursor::forwarded(&self, count)
            }
        }

        impl<$($generics)* __Value> ::core::ops::Shl<__Value> for $ty
        where
            $ty: $crate::Cursor,
            <$ty as $crate::Cursor>::Item: $crate::Assign<__Value>,
        {
            type Output = $ty;

            #[inline]
            fn shl(mut self, value: __Value) -> $ty {
                $crate::Cursor::push(&mut self, value);
                self
            }
        }

        impl<$($generics)*> ::core::iter::IntoIterator for $ty
        where
            $ty: $crate::Cursor,
        {
            type Item = <$ty as $crate::Cursor>::Item;
            type IntoIter = $crate::Walk<$ty>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::Walk::new(self)
            }
        }
    };
}
