use log::debug;

use crate::cursor::Cursor;
use crate::iterable::Iterable;
use crate::sink::{Assign, Sink, sink};

/// Overwrite every position of a writable iterable with `value`
///
/// Returns the number of positions written.
pub fn fill<I, V>(dest: I, value: V) -> usize
where
    I: Iterable,
    <I::Cursor as Cursor>::Item: Assign<V>,
    V: Clone,
{
    let mut cursor = dest.into_cursor();
    let mut written = 0;
    while cursor.more() {
        cursor.push(value.clone());
        written += 1;
    }
    debug!("filled {written} positions");
    written
}

/// Put every item of `source` into `dest` and hand `dest` back
///
/// Use [`writer`](crate::writer) to copy over the items of a writable
/// iterable instead of appending.
pub fn copy<S, D>(source: S, dest: D) -> D
where
    S: Iterable,
    D: Sink<<S::Cursor as Cursor>::Item>,
{
    let cursor = source.into_cursor();
    if <S::Cursor as Cursor>::RANDOM_ACCESS {
        debug!("copying {} items", cursor.len());
    }
    cursor.pipe(sink(dest))
}
