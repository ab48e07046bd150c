use derive_where::derive_where;

use crate::cursor::Cursor;
use crate::func::{Identity, Predicate, Projection};
use crate::introspect::SortedCursor;
use crate::pipe::Stage;

/// Cursor adaptor that skips items rejected by a predicate
///
/// The predicate is tested against `projection(item)`; the items themselves
/// pass through unchanged. Rejected items are skipped when the filter is
/// built and after every step, so the current item always matches.
///
/// The number of matching items is unknown up front, so a filter is never
/// random access. Dropping items cannot break an order, so a filter over a
/// sorted cursor is sorted.
#[derive(Clone, Copy, PartialEq, Eq)]
#[derive_where(Debug; C)]
pub struct Filter<C, P, F = Identity> {
    inner: C,
    #[derive_where(skip)]
    predicate: P,
    #[derive_where(skip)]
    projection: F,
}

impl<C, P, F> Filter<C, P, F>
where
    C: Cursor,
    F: Projection<C::Item>,
    P: Predicate<F::Output>,
{
    pub fn new(inner: C, predicate: P, projection: F) -> Self {
        let mut filter = Filter {
            inner,
            predicate,
            projection,
        };
        filter.skip_rejected();
        filter
    }

    fn accepts_current(&self) -> bool {
        let key = self.projection.project(self.inner.item());
        self.predicate.test(key)
    }

    fn skip_rejected(&mut self) {
        while self.inner.more() && !self.accepts_current() {
            self.inner.step();
        }
    }
}

impl<C, P, F> Filter<C, P, F> {
    /// Recover the source cursor, positioned on the current match
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, P, F> Cursor for Filter<C, P, F>
where
    C: Cursor,
    F: Projection<C::Item> + Clone,
    P: Predicate<F::Output> + Clone,
{
    type Item = C::Item;

    const SORTED: bool = C::SORTED;

    #[inline]
    fn more(&self) -> bool {
        self.inner.more()
    }

    #[inline]
    fn item(&self) -> C::Item {
        self.inner.item()
    }

    fn step(&mut self) {
        self.inner.step();
        self.skip_rejected();
    }

    fn end(&self) -> Self {
        Filter::new(
            self.inner.end(),
            self.predicate.clone(),
            self.projection.clone(),
        )
    }
}

impl<C, P, F> SortedCursor for Filter<C, P, F>
where
    C: SortedCursor,
    F: Projection<C::Item> + Clone,
    P: Predicate<F::Output> + Clone,
{
}

crate::cursor_operators!(impl[C, P, F,] Filter<C, P, F>);

/// Pipeline stage produced by [`filter`] and [`filter_by`]
#[derive(Debug, Clone, Copy)]
pub struct FilterStage<P, F = Identity> {
    predicate: P,
    projection: F,
}

impl<C, P, F> Stage<C> for FilterStage<P, F>
where
    C: Cursor,
    F: Projection<C::Item> + Clone,
    P: Predicate<F::Output> + Clone,
{
    type Output = Filter<C, P, F>;

    fn feed(self, cursor: C) -> Filter<C, P, F> {
        Filter::new(cursor, self.predicate, self.projection)
    }
}

/// Keep the items matching `predicate`
///
/// Pass [`Identity`] to keep the `true` items of a `bool` cursor.
pub fn filter<P>(predicate: P) -> FilterStage<P> {
    FilterStage {
        predicate,
        projection: Identity,
    }
}

/// Keep the items whose projection matches `predicate`
pub fn filter_by<P, F>(predicate: P, projection: F) -> FilterStage<P, F> {
    FilterStage {
        predicate,
        projection,
    }
}

/// Extension trait to add .filter() method support for cursors
pub trait FilterExt: Cursor {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate, Identity)
    }

    fn filter_by<P, F, K>(self, predicate: P, projection: F) -> Filter<Self, P, F>
    where
        F: Fn(Self::Item) -> K + Clone,
        P: Fn(K) -> bool + Clone,
    {
        Filter::new(self, predicate, projection)
    }
}

/// Implement FilterExt for all cursors
impl<C: Cursor> FilterExt for C {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::iterable::cursor;
    use crate::{MapExt, iota, is_random_access, is_sorted, sink};

    #[test]
    fn test_filter_keeps_matching_items_in_order() {
        let codepoints = [0x41u32, 0x20, 0x42, 0x0a, 0x43];
        let visible = cursor(&codepoints).filter(|cp| *cp > 0x20) | sink(Vec::new());
        assert_eq!(visible, [&0x41, &0x42, &0x43]);
    }

    #[test]
    fn test_filter_skips_on_construction() {
        let data = [1, 3, 5, 6, 7];
        let evens = cursor(&data) | filter(|x: &i32| x % 2 == 0);

        // The first match is current before anything is pulled
        assert_eq!(*evens.item(), 6);
        assert_eq!(evens.clone().into_inner().position(), 3);
        assert_eq!(evens.len(), 1);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let data = [1, 3, 5];
        let evens = cursor(&data) | filter(|x: &i32| x % 2 == 0);
        assert!(evens.is_empty());
        assert_eq!(evens.into_inner(), evens.end().into_inner());
    }

    #[test]
    fn test_filter_by_projection() {
        let glyphs = [("space", 0u16), ("a", 500), ("b", 520), ("zwj", 0)];
        let spacing = cursor(&glyphs)
            .filter_by(|advance: u16| advance > 0, |glyph| glyph.1)
            .map(|glyph| glyph.0)
            | sink(Vec::new());
        assert_eq!(spacing, ["a", "b"]);
    }

    #[test]
    fn test_filter_identity_on_bools() {
        let mask = [false, true, true, false, true];
        let set = cursor(&mask) | filter(Identity);
        assert_eq!(set.walk().count(), 3);

        let positions = crate::enumerate(&mask)
            | filter_by(Identity, |(_, bit): (usize, &bool)| *bit)
            | crate::map(|(index, _): (usize, &bool)| index)
            | sink(Vec::new());
        assert_eq!(positions, [1, 2, 4]);
    }

    #[test]
    fn test_filter_flags() {
        type Evens = Filter<crate::Iota<u32>, fn(u32) -> bool>;
        assert!(!is_random_access::<Evens>());
        assert!(is_sorted::<Evens>());

        let is_even: fn(u32) -> bool = |x| x % 2 == 0;
        let evens: Evens = iota(0u32, 10, 1) | filter(is_even);
        assert_eq!(evens.walk().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_filter_matches_iterator_filter() {
        let data: Vec<i64> = (0..64).map(|i| (i * 37 + 11) % 23 - 11).collect();
        let predicates: [fn(&i64) -> bool; 4] = [
            |x| *x > 0,
            |x| x % 3 == 0,
            |_| false,
            |_| true,
        ];

        for predicate in predicates {
            let ours = cursor(&data) | filter(predicate) | sink(Vec::new());
            let expected: Vec<&i64> = data.iter().filter(|x| predicate(x)).collect();
            assert_eq!(ours, expected);
        }
    }

    #[test]
    fn test_filter_tests_each_item_once_per_step() {
        let tests = Cell::new(0);
        let data = [2, 4, 5, 8];
        let mut evens = cursor(&data).filter(|x| {
            tests.set(tests.get() + 1);
            *x % 2 == 0
        });
        assert_eq!(tests.get(), 1);

        evens.step();
        assert_eq!(tests.get(), 2);
        evens.step();
        assert_eq!(*evens.item(), 8);
        assert_eq!(tests.get(), 4);
    }
}
