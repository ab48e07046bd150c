use derive_where::derive_where;

use crate::cursor::{Bidirectional, Cursor};
use crate::func::Projection;
use crate::introspect::RandomAccessCursor;
use crate::pipe::Stage;

/// Cursor adaptor that yields the projection of each source item
///
/// Keeps the random access of its source. The projection may reorder values
/// arbitrarily, so the result is never marked sorted. Two maps compare equal
/// when both the source positions and the captured projections do.
#[derive(Clone, Copy, PartialEq, Eq)]
#[derive_where(Debug; C)]
pub struct Map<C, F> {
    inner: C,
    #[derive_where(skip)]
    projection: F,
}

impl<C, F> Map<C, F> {
    pub fn new(inner: C, projection: F) -> Self {
        Map { inner, projection }
    }

    /// Recover the source cursor at its current position
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: Projection<C::Item> + Clone,
{
    type Item = F::Output;

    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;

    #[inline]
    fn more(&self) -> bool {
        self.inner.more()
    }

    #[inline]
    fn item(&self) -> F::Output {
        self.projection.project(self.inner.item())
    }

    #[inline]
    fn step(&mut self) {
        self.inner.step();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn item_at(&self, index: usize) -> F::Output {
        self.projection.project(self.inner.item_at(index))
    }

    fn forward(&mut self, count: usize) {
        self.inner.forward(count);
    }

    fn end(&self) -> Self {
        Map::new(self.inner.end(), self.projection.clone())
    }
}

impl<C, F> Bidirectional for Map<C, F>
where
    C: Bidirectional,
    F: Projection<C::Item> + Clone,
{
    fn prev(&mut self) {
        self.inner.prev();
    }

    fn rewind(&mut self, count: usize) {
        self.inner.rewind(count);
    }
}

impl<C, F> RandomAccessCursor for Map<C, F>
where
    C: RandomAccessCursor,
    F: Projection<C::Item> + Clone,
{
}

crate::cursor_operators!(impl[C, F,] Map<C, F>, bidirectional);

/// Pipeline stage produced by [`map`]
#[derive(Debug, Clone, Copy)]
pub struct MapStage<F> {
    projection: F,
}

impl<C, F> Stage<C> for MapStage<F>
where
    C: Cursor,
    F: Projection<C::Item> + Clone,
{
    type Output = Map<C, F>;

    fn feed(self, cursor: C) -> Map<C, F> {
        Map::new(cursor, self.projection)
    }
}

/// Convenience function to create a map stage for `cursor | map(f)`
pub fn map<F>(projection: F) -> MapStage<F> {
    MapStage { projection }
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor {
    fn map<F, U>(self, projection: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Clone,
    {
        Map::new(self, projection)
    }
}

/// Implement MapExt for all cursors
impl<C: Cursor> MapExt for C {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::iterable::cursor;
    use crate::{iota, sink};

    #[test]
    fn test_map_yields_projection_of_each_item() {
        let advances = [512u16, 0, 1024];
        let doubled = cursor(&advances).map(|advance| u32::from(*advance) * 2);

        assert_eq!(doubled.len(), 3);
        assert_eq!(doubled | sink(Vec::new()), [1024, 0, 2048]);
    }

    #[test]
    fn test_map_keeps_random_access() {
        let data = [1, 2, 3, 4];
        let squares = cursor(&data) | map(|x: &i32| x * x);

        assert!(Map::<crate::SliceCursor<'_, i32>, fn(&i32) -> i32>::RANDOM_ACCESS);
        assert_eq!(squares.item_at(3), 16);
        assert_eq!((squares + 2).item(), 9);
        assert_eq!((squares + 3 - 1).item(), 9);
        assert!(!squares.end().more());
    }

    #[test]
    fn test_map_projects_only_on_demand() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let counted = cursor(&data).map(|x| {
            calls.set(calls.get() + 1);
            *x
        });

        // Skipping over items does not project them
        let skipped = counted + 2;
        assert_eq!(calls.get(), 0);
        assert_eq!(skipped.item(), 3);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_equality_compares_position_and_projection() {
        let negate: fn(i32) -> i32 = |x| -x;
        let halve: fn(i32) -> i32 = |x| x / 2;

        let a = iota(0, 10, 1) | map(negate);
        let b = iota(0, 10, 1) | map(negate);
        let c = iota(0, 10, 1) | map(halve);

        assert_eq!(a, b);
        assert_ne!(a, a + 1);
        assert_ne!(a, c);
        assert_eq!(a.end(), a + 10);
    }

    #[test]
    fn test_map_chaining_and_into_inner() {
        let data = [3u8, 4, 5];
        let chained = cursor(&data)
            .map(|x| u32::from(*x))
            .map(|x| x + 100)
            .map(|x| x.to_string());

        assert_eq!(chained.item(), "103");
        let inner = chained.into_inner().into_inner().into_inner();
        assert_eq!(inner.len(), 3);
    }

    #[test]
    fn test_map_writable_items() {
        let mut glyphs = [(1u16, 0u16); 3];
        let mut slots = cursor(&mut glyphs);
        slots.step();
        let mut slots = slots.map(|cell| cell);
        slots.push((5u16, 6u16));
        assert!(!(slots + 1).more());
        assert_eq!(glyphs[1], (5, 6));
    }
}
