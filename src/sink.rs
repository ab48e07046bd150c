use std::borrow::Borrow;
use std::cell::Cell;

#[cfg(feature = "smallvec")]
use smallvec::{Array, SmallVec};

use crate::cursor::Cursor;
use crate::iterable::Iterable;
use crate::pipe::Stage;

/// A destination that accepts items one at a time
pub trait Sink<T> {
    fn put(&mut self, item: T);
}

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn put(&mut self, item: T) {
        self.push(item);
    }
}

#[cfg(feature = "smallvec")]
impl<A: Array> Sink<A::Item> for SmallVec<A> {
    #[inline]
    fn put(&mut self, item: A::Item) {
        self.push(item);
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn put(&mut self, item: T) {
        (**self).put(item);
    }
}

/// A writable item handle
///
/// Implemented by the items of writable cursors, so `push` and `<<` can
/// overwrite the current position.
pub trait Assign<V> {
    fn assign(self, value: V);
}

impl<'a, T, V> Assign<V> for &'a Cell<T>
where
    T: Clone,
    V: Borrow<T>,
{
    #[inline]
    fn assign(self, value: V) {
        self.set(value.borrow().clone());
    }
}

/// A writable cursor used as a sink
///
/// Each item put into the writer overwrites the cursor's current position and
/// advances it. Putting more items than the cursor has positions is a
/// precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writer<C> {
    cursor: C,
    written: usize,
}

impl<C> Writer<C> {
    pub fn new(cursor: C) -> Self {
        Writer { cursor, written: 0 }
    }

    /// Number of positions overwritten so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// The cursor, positioned after the last overwritten item
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C, V> Sink<V> for Writer<C>
where
    C: Cursor,
    C::Item: Assign<V>,
{
    fn put(&mut self, value: V) {
        self.cursor.push(value);
        self.written += 1;
    }
}

/// Turn a writable iterable into a sink that overwrites it from the start
pub fn writer<I: Iterable>(dest: I) -> Writer<I::Cursor> {
    Writer::new(dest.into_cursor())
}

/// Terminal stage putting every item into a sink, then handing the sink back
#[derive(Debug, Clone, Copy)]
pub struct SinkStage<S> {
    dest: S,
}

impl<C, S> Stage<C> for SinkStage<S>
where
    C: Cursor,
    S: Sink<C::Item>,
{
    type Output = S;

    fn feed(self, mut cursor: C) -> S {
        let mut dest = self.dest;
        while cursor.more() {
            dest.put(cursor.pull());
        }
        dest
    }
}

/// Put every item into `dest`
///
/// Pass `&mut dest` to keep ownership of the destination.
pub fn sink<S>(dest: S) -> SinkStage<S> {
    SinkStage { dest }
}

/// Terminal stage pulling and discarding every item
///
/// Forces the side effects of upstream projections and predicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Drain;

impl<C: Cursor> Stage<C> for Drain {
    type Output = ();

    fn feed(self, mut cursor: C) {
        while cursor.more() {
            cursor.pull();
        }
    }
}

pub fn drain() -> Drain {
    Drain
}

/// Terminal stage splitting pair items across two sinks
#[derive(Debug, Clone, Copy)]
pub struct Unzip<S1, S2> {
    first: S1,
    second: S2,
}

impl<C, X, Y, S1, S2> Stage<C> for Unzip<S1, S2>
where
    C: Cursor<Item = (X, Y)>,
    S1: Sink<X>,
    S2: Sink<Y>,
{
    type Output = (S1, S2);

    fn feed(self, mut cursor: C) -> (S1, S2) {
        let Unzip {
            mut first,
            mut second,
        } = self;
        while cursor.more() {
            let (x, y) = cursor.pull();
            first.put(x);
            second.put(y);
        }
        (first, second)
    }
}

/// Put the first half of each pair into `first` and the second into `second`
pub fn unzip<S1, S2>(first: S1, second: S2) -> Unzip<S1, S2> {
    Unzip { first, second }
}
