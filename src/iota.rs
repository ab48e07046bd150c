use num_traits::{Num, NumCast};

use crate::cursor::{Bidirectional, Cursor};
use crate::introspect::{RandomAccessCursor, SortedCursor};

/// Self-generating arithmetic progression `start, start + step, ...`
///
/// The end bound is exclusive. The number of values is fixed at construction,
/// so the cursor only tracks an index into the progression and each value is
/// computed as `start + index * step`. A progression whose step is zero, or
/// points away from the end, is empty.
///
/// Iota is always random access and always flagged sorted, including for a
/// negative step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iota<T> {
    start: T,
    step: T,
    index: usize,
    count: usize,
}

/// `x` as an `i128`, when that conversion is exact
fn widen<T: NumCast + PartialEq + Copy>(x: T) -> Option<i128> {
    let wide = x.to_i128()?;
    (<T as NumCast>::from(wide)? == x).then_some(wide)
}

impl<T> Iota<T>
where
    T: Copy + PartialOrd + Num + NumCast,
{
    pub fn new(start: T, end: T, step: T) -> Self {
        Iota {
            start,
            step,
            index: 0,
            count: Self::count_between(start, end, step),
        }
    }

    /// How many values `start + k * step` fall before `end`
    fn count_between(start: T, end: T, step: T) -> usize {
        let zero = T::zero();
        let ascending = step > zero && end > start;
        let descending = step < zero && end < start;
        if !(ascending || descending) {
            return 0;
        }

        // Integers take the exact path; spans are computed outside T so that
        // `iota(-100i8, 100, 1)` does not overflow.
        if let (Some(start), Some(end), Some(step)) = (widen(start), widen(end), widen(step)) {
            let (span, stride) = if step < 0 {
                (start.checked_sub(end), step.checked_neg())
            } else {
                (end.checked_sub(start), Some(step))
            };
            if let (Some(span), Some(stride)) = (span, stride) {
                return usize::try_from((span - 1) / stride + 1).unwrap_or(usize::MAX);
            }
        }

        match (start.to_f64(), end.to_f64(), step.to_f64()) {
            (Some(start), Some(end), Some(step)) => ((end - start) / step).ceil() as usize,
            _ => 0,
        }
    }

    fn value_at(&self, offset: usize) -> T {
        let exact = widen(self.start)
            .zip(widen(self.step))
            .and_then(|(start, step)| {
                let offset = i128::try_from(offset).ok()?;
                step.checked_mul(offset)?.checked_add(start)
            })
            .and_then(<T as NumCast>::from);
        match exact {
            Some(value) => value,
            None => <T as NumCast>::from(offset).map_or(self.start, |n| self.start + self.step * n),
        }
    }

    pub fn step_size(&self) -> T {
        self.step
    }
}

impl<T> Cursor for Iota<T>
where
    T: Copy + PartialOrd + Num + NumCast,
{
    type Item = T;

    const RANDOM_ACCESS: bool = true;
    const SORTED: bool = true;

    #[inline]
    fn more(&self) -> bool {
        self.index < self.count
    }

    #[inline]
    fn item(&self) -> T {
        self.value_at(self.index)
    }

    #[inline]
    fn step(&mut self) {
        self.index = (self.index + 1).min(self.count);
    }

    fn len(&self) -> usize {
        self.count - self.index
    }

    fn item_at(&self, index: usize) -> T {
        self.value_at(self.index + index)
    }

    fn forward(&mut self, count: usize) {
        self.index += count.min(self.len());
    }

    fn end(&self) -> Self {
        Iota {
            index: self.count,
            ..*self
        }
    }
}

impl<T> Bidirectional for Iota<T>
where
    T: Copy + PartialOrd + Num + NumCast,
{
    /// Moving before the first value is a precondition violation
    fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    fn rewind(&mut self, count: usize) {
        self.index = self.index.saturating_sub(count);
    }
}

impl<T> RandomAccessCursor for Iota<T> where T: Copy + PartialOrd + Num + NumCast {}

impl<T> SortedCursor for Iota<T> where T: Copy + PartialOrd + Num + NumCast {}

crate::cursor_operators!(impl[T,] Iota<T>, bidirectional);

/// Values from `start` towards `end` (exclusive), `step` apart
pub fn iota<T>(start: T, end: T, step: T) -> Iota<T>
where
    T: Copy + PartialOrd + Num + NumCast,
{
    Iota::new(start, end, step)
}

/// Values `0, 1, ..` up to `end` (exclusive)
pub fn iota_to<T>(end: T) -> Iota<T>
where
    T: Copy + PartialOrd + Num + NumCast,
{
    Iota::new(T::zero(), end, T::one())
}
