use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::{RandomAccessCursor, SortedCursor};
use crate::iterable::Iterable;

/// Cursor adaptor pairing up the items of two cursors
///
/// Stops as soon as either side is exhausted, so the shorter side bounds the
/// length and the longer side is never read past it. Random access and
/// sortedness hold only when both sides have them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }

    /// Recover both cursors at their current positions
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    const RANDOM_ACCESS: bool = A::RANDOM_ACCESS && B::RANDOM_ACCESS;
    const SORTED: bool = A::SORTED && B::SORTED;

    #[inline]
    fn more(&self) -> bool {
        self.a.more() && self.b.more()
    }

    #[inline]
    fn item(&self) -> Self::Item {
        (self.a.item(), self.b.item())
    }

    #[inline]
    fn step(&mut self) {
        self.a.step();
        self.b.step();
    }

    fn len(&self) -> usize {
        if Self::RANDOM_ACCESS {
            return self.a.len().min(self.b.len());
        }

        // Counting each side separately would walk the longer one to its end
        let mut probe = self.clone();
        let mut len = 0;
        while probe.more() {
            probe.step();
            len += 1;
        }
        len
    }

    fn item_at(&self, index: usize) -> Self::Item {
        (self.a.item_at(index), self.b.item_at(index))
    }

    fn forward(&mut self, count: usize) {
        if Self::RANDOM_ACCESS {
            // Both sides move by the same amount to stay paired
            let count = count.min(self.len());
            self.a.forward(count);
            self.b.forward(count);
            return;
        }

        for _ in 0..count {
            if !self.more() {
                break;
            }
            self.step();
        }
    }

    fn end(&self) -> Self {
        if Self::RANDOM_ACCESS {
            return self.forwarded(self.len());
        }

        let mut end = self.clone();
        while end.more() {
            end.step();
        }
        end
    }
}

impl<A: Bidirectional, B: Bidirectional> Bidirectional for Zip<A, B> {
    fn prev(&mut self) {
        self.a.prev();
        self.b.prev();
    }

    fn rewind(&mut self, count: usize) {
        self.a.rewind(count);
        self.b.rewind(count);
    }
}

impl<A: RandomAccessCursor, B: RandomAccessCursor> RandomAccessCursor for Zip<A, B> {}

impl<A: SortedCursor, B: SortedCursor> SortedCursor for Zip<A, B> {}

crate::cursor_operators!(impl[A, B,] Zip<A, B>, bidirectional);

/// Pair up the items of two iterables
pub fn zip<A: Iterable, B: Iterable>(a: A, b: B) -> Zip<A::Cursor, B::Cursor> {
    Zip::new(a.into_cursor(), b.into_cursor())
}

/// Extension trait to add .zip() method support for cursors
pub trait ZipExt: Cursor {
    fn zip<I: Iterable>(self, other: I) -> Zip<Self, I::Cursor> {
        Zip::new(self, other.into_cursor())
    }
}

/// Implement ZipExt for all cursors
impl<C: Cursor> ZipExt for C {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::iterable::cursor;
    use crate::{MapExt, filter, iota, is_random_access, is_sorted, sink};

    #[test]
    fn test_zip_stops_at_shorter_side() {
        let ids = [1, 2, 3];
        let names = ["a", "b"];
        let pairs = zip(&ids, &names);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs | sink(Vec::new()), [(&1, &"a"), (&2, &"b")]);
    }

    #[test]
    fn test_zip_never_visits_past_shorter_side() {
        let visited = Cell::new(0);
        let ids = [1, 2, 3];
        let names = ["a", "b"];
        let counted = cursor(&ids).map(|id| {
            visited.set(visited.get() + 1);
            *id
        });

        let pairs = zip(counted, &names) | sink(Vec::new());
        assert_eq!(pairs, [(1, &"a"), (2, &"b")]);
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_zip_random_access() {
        let xs = [10, 20, 30, 40];
        let pairs = cursor(&xs).zip(iota(0u8, 3, 1));

        assert!(is_random_access::<Zip<crate::SliceCursor<'_, i32>, crate::Iota<u8>>>());
        assert_eq!(pairs.item_at(2), (&30, 2));
        assert_eq!((pairs + 1).item(), (&20, 1));
        assert_eq!((pairs + 2 - 1).item(), (&20, 1));
        assert!(!pairs.end().more());
        assert_eq!(pairs.end(), pairs + 3);
    }

    #[test]
    fn test_zip_forward_past_shorter_side_stays_paired() {
        let ids = [1, 2, 3];
        let names = ["a", "b"];
        let pairs = zip(&ids, &names);

        assert_eq!(pairs + 100, pairs.end());
        assert_eq!((pairs + 100 - 1).item(), (&2, &"b"));

        let mut pairs = pairs;
        pairs += 1;
        pairs += 5;
        assert!(pairs.is_empty());
        let (ids_left, names_left) = pairs.into_parts();
        assert_eq!(ids_left.len(), 1);
        assert!(names_left.is_empty());
    }

    #[test]
    fn test_zip_forward_only_forward_stops_at_end() {
        let xs = [1, 2, 3, 4, 5, 6];
        let odd = cursor(&xs) | filter(|x: &i32| x % 2 == 1);
        let pairs = zip(odd, &["one", "three"]);

        let (rest, names) = pairs.forwarded(10).into_parts();
        assert_eq!(*rest.item(), 5);
        assert!(names.is_empty());
    }

    #[test]
    fn test_zip_forward_only_length() {
        let xs = [1, 2, 3, 4, 5, 6];
        let odd = cursor(&xs) | filter(|x: &i32| x % 2 == 1);
        let pairs = zip(odd, &["one", "three"]);

        assert_eq!(pairs.len(), 2);
        let (rest, names) = pairs.end().into_parts();
        assert_eq!(*rest.item(), 5);
        assert!(names.is_empty());
    }

    #[test]
    fn test_zip_flags_need_both_sides() {
        type Slice = crate::SliceCursor<'static, u8>;
        type Ramp = crate::Iota<u8>;

        assert!(is_sorted::<Zip<Ramp, Ramp>>());
        assert!(!is_sorted::<Zip<Slice, Ramp>>());
        assert!(is_random_access::<Zip<Slice, Ramp>>());
        assert!(!is_random_access::<Zip<Slice, crate::Filter<Ramp, fn(u8) -> bool>>>());
    }
}
